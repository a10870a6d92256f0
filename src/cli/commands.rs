use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::FeedConfig;
use crate::feed::{load_projects, sample_projects};
use crate::filters::{ProjectFilter, apply_filter, available_categories};
use crate::models::{FeedOutcome, FeedSource, ProjectRecord};
use crate::utils::{format_updated, language_color};

#[derive(Parser)]
#[command(name = "portfolio-feed")]
#[command(version = "0.1.0")]
#[command(about = "Show a GitHub account's pinned project feed", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects, newest first (the default command)
    List(ListArgs),
    /// Show the category labels available for filtering
    Categories(FeedArgs),
    /// Show summary statistics for the feed
    Stats(FeedArgs),
}

#[derive(Args, Default)]
pub struct FeedArgs {
    /// Account to load instead of the configured one
    #[arg(long)]
    pub user: Option<String>,

    /// Skip the network and use the built-in sample projects
    #[arg(long)]
    pub sample: bool,
}

#[derive(Args, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub feed: FeedArgs,

    /// Keep only one category: all, ml, data-science, web-dev, python, other
    #[arg(long, default_value = "all")]
    pub category: ProjectFilter,

    /// Print the records as JSON instead of text cards
    #[arg(long)]
    pub json: bool,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List(args)) => list(args).await,
        Some(Commands::Categories(args)) => categories(args).await,
        Some(Commands::Stats(args)) => stats(args).await,
        None => list(ListArgs::default()).await,
    }
}

/// Load the feed once. `--sample` is an explicit offline mode, not a
/// degradation, so it carries no advisory.
async fn load(args: &FeedArgs) -> FeedOutcome {
    if args.sample {
        return FeedOutcome {
            projects: sample_projects(),
            source: FeedSource::Sample,
            advisory: None,
        };
    }

    let mut config = FeedConfig::from_env();
    if let Some(user) = args.user.as_deref() {
        config = config.with_username(user);
    }
    load_projects(&config).await
}

fn print_advisory(outcome: &FeedOutcome) {
    if let Some(advisory) = &outcome.advisory {
        eprintln!("Note: {}", advisory);
    }
}

async fn list(args: ListArgs) -> Result<()> {
    let outcome = load(&args.feed).await;
    print_advisory(&outcome);

    let projects = apply_filter(outcome.projects, &args.category);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }

    if projects.is_empty() {
        println!("No projects found for the selected category.");
        return Ok(());
    }

    for project in &projects {
        println!("{}", render_card(project));
    }

    Ok(())
}

fn render_card(project: &ProjectRecord) -> String {
    let mut lines = vec![format!("{} [{}]", project.title, project.category)];
    if let Some(description) = &project.description {
        lines.push(format!("  {}", description));
    }

    let mut facts: Vec<String> = Vec::new();
    if let Some(language) = &project.language {
        let color = language_color(language, project.language_color.as_deref());
        facts.push(format!("{} ({})", language, color));
    }
    facts.push(format!("{} stars", project.star_count));
    facts.push(format!("{} forks", project.fork_count));
    facts.push(format!("Updated {}", format_updated(&project.updated_at)));
    lines.push(format!("  {}", facts.join(" | ")));

    // At most three tags, source order.
    if !project.topics.is_empty() {
        let shown: Vec<&str> =
            project.topics.iter().take(3).map(String::as_str).collect();
        lines.push(format!("  topics: {}", shown.join(", ")));
    }

    lines.push(format!("  {}", project.primary_url));
    if let Some(homepage) = &project.homepage_url {
        lines.push(format!("  homepage: {}", homepage));
    }
    lines.push(String::new());
    lines.join("\n")
}

async fn categories(args: FeedArgs) -> Result<()> {
    let outcome = load(&args).await;
    print_advisory(&outcome);

    for label in available_categories(&outcome.projects) {
        println!("{}", label);
    }

    Ok(())
}

async fn stats(args: FeedArgs) -> Result<()> {
    let outcome = load(&args).await;
    print_advisory(&outcome);

    let projects = &outcome.projects;
    let total_stars: u64 = projects.iter().map(|p| u64::from(p.star_count)).sum();
    let total_forks: u64 = projects.iter().map(|p| u64::from(p.fork_count)).sum();

    println!("Project Feed Statistics");
    println!("=======================");
    println!(
        "Source: {}",
        match outcome.source {
            FeedSource::Live => "live",
            FeedSource::Sample => "sample",
        }
    );
    println!("Total projects: {}", projects.len());
    println!("Total stars: {}", total_stars);
    println!("Total forks: {}", total_forks);

    println!();
    println!("By category:");
    for label in available_categories(projects).into_iter().skip(1) {
        let count = projects.iter().filter(|p| p.category.label() == label).count();
        println!("  {}: {}", label, count);
    }

    if let Some(newest) = projects.iter().map(|p| p.updated_at).max() {
        println!();
        println!("Newest update: {}", newest.format("%Y-%m-%d"));
    }
    if let Some(oldest) = projects.iter().map(|p| p.updated_at).min() {
        println!("Oldest update: {}", oldest.format("%Y-%m-%d"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::models::Category;

    fn record_with_topics(topics: &[&str]) -> ProjectRecord {
        ProjectRecord {
            id: "R_tagged".to_string(),
            name: "tagged-repo".to_string(),
            title: "Tagged Repo".to_string(),
            description: None,
            primary_url: "https://github.com/octocat/tagged-repo".to_string(),
            homepage_url: None,
            language: None,
            language_color: None,
            star_count: 1,
            fork_count: 0,
            topics: topics.iter().map(|t| t.to_string()).collect(),
            updated_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            category: Category::Other,
        }
    }

    #[test]
    fn test_render_card_shows_at_most_three_topics() {
        let record = record_with_topics(&["etl", "spark", "airflow", "dagster", "dbt"]);
        let card = render_card(&record);
        assert!(card.contains("topics: etl, spark, airflow\n"));
        assert!(!card.contains("dagster"));
        assert!(!card.contains("dbt"));
    }

    #[test]
    fn test_render_card_topics_keep_source_order() {
        let record = record_with_topics(&["zulu", "alpha", "mike"]);
        let card = render_card(&record);
        assert!(card.contains("topics: zulu, alpha, mike"));
    }

    #[test]
    fn test_render_card_omits_topics_line_when_empty() {
        let card = render_card(&record_with_topics(&[]));
        assert!(!card.contains("topics:"));
    }
}
