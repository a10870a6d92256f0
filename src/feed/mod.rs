//! Feed loading: live retrieval with wholesale degradation to sample data.
//!
//! One load is all-or-nothing. Either the pinned-repositories query succeeds
//! and every node is normalized into a [`ProjectRecord`], or the outcome is
//! the fixed sample list plus an advisory message. There is no partial
//! success, no retry, and no caching; a manual retry is simply another load.

pub mod sample;

pub use sample::sample_projects;

use tracing::{debug, warn};

use crate::classify::categorize;
use crate::config::FeedConfig;
use crate::fetch::{FeedError, RepositoryNode, fetch_pinned};
use crate::models::{FeedOutcome, FeedSource, ProjectRecord};
use crate::utils::title_from_name;

/// Load the project feed.
///
/// Without a token the network is skipped entirely; anonymous rate limits
/// make unauthenticated calls more trouble than the sample list. Any failure
/// mode degrades the same way, so the returned list is never empty.
pub async fn load_projects(config: &FeedConfig) -> FeedOutcome {
    let Some(token) = config.token.as_deref() else {
        warn!("no access token configured, using sample projects");
        return degraded(&FeedError::MissingCredential);
    };

    match fetch_pinned(config, token).await {
        Ok(nodes) => {
            let mut projects: Vec<ProjectRecord> =
                nodes.into_iter().map(normalize).collect();
            // Stable sort: ties on updated_at keep source order.
            projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
            debug!(count = projects.len(), "loaded live project feed");
            FeedOutcome { projects, source: FeedSource::Live, advisory: None }
        }
        Err(err) => {
            warn!(error = %err, "live fetch failed, using sample projects");
            degraded(&err)
        }
    }
}

fn degraded(err: &FeedError) -> FeedOutcome {
    FeedOutcome {
        projects: sample_projects(),
        source: FeedSource::Sample,
        advisory: Some(advisory_for(err)),
    }
}

/// Human-readable, non-fatal explanation of why sample data is shown.
fn advisory_for(err: &FeedError) -> String {
    match err {
        FeedError::MissingCredential => {
            "GitHub token not configured - showing sample projects".to_string()
        }
        FeedError::EmptyResult => {
            "No pinned repositories found - showing sample projects".to_string()
        }
        FeedError::Http { .. } | FeedError::GraphQl(_) => err.to_string(),
        FeedError::Network(_) => {
            "Failed to load pinned repositories - showing sample projects".to_string()
        }
    }
}

/// Turn a raw repository node into a display record.
fn normalize(node: RepositoryNode) -> ProjectRecord {
    let topics = node.topic_names();
    let language_name = node.primary_language.as_ref().map(|l| l.name.clone());
    let language_color = node.primary_language.as_ref().and_then(|l| l.color.clone());

    let category = categorize(
        &node.name,
        node.description.as_deref().unwrap_or(""),
        &topics,
        language_name.as_deref(),
    );

    ProjectRecord {
        id: node.id,
        title: title_from_name(&node.name),
        name: node.name,
        description: node.description,
        primary_url: node.url,
        homepage_url: node.homepage_url,
        language: language_name,
        language_color,
        star_count: node.stargazer_count,
        fork_count: node.fork_count,
        topics,
        updated_at: node.updated_at,
        category,
    }
}
