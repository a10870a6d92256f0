//! Fixed sample records shown when live retrieval is unavailable.
//!
//! The list is a constant: five curated records with precomputed categories,
//! returned wholesale in its defined order. The projects section is never
//! empty, whatever the API does.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Category, ProjectRecord};

/// The fixed fallback list.
pub fn sample_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            id: "fallback-1".to_string(),
            name: "predictive-analytics-dashboard".to_string(),
            title: "Predictive Analytics Dashboard".to_string(),
            description: Some(
                "Real-time ML dashboard for business forecasting with advanced visualization capabilities"
                    .to_string(),
            ),
            primary_url: "https://github.com/TAHASHAH12".to_string(),
            homepage_url: None,
            language: Some("Python".to_string()),
            language_color: None,
            star_count: 15,
            fork_count: 3,
            topics: topics(&["machine-learning", "python", "dashboard"]),
            updated_at: date(2024, 12, 1),
            category: Category::Ml,
        },
        ProjectRecord {
            id: "fallback-2".to_string(),
            name: "customer-segmentation-engine".to_string(),
            title: "Customer Segmentation Engine".to_string(),
            description: Some(
                "ML-powered customer segmentation system using clustering algorithms".to_string(),
            ),
            primary_url: "https://github.com/TAHASHAH12".to_string(),
            homepage_url: None,
            language: Some("Python".to_string()),
            language_color: None,
            star_count: 22,
            fork_count: 7,
            topics: topics(&["data-science", "clustering", "marketing"]),
            updated_at: date(2024, 11, 15),
            category: Category::DataScience,
        },
        ProjectRecord {
            id: "fallback-3".to_string(),
            name: "neural-network-optimizer".to_string(),
            title: "Neural Network Optimizer".to_string(),
            description: Some(
                "Custom neural network architecture with performance optimizations".to_string(),
            ),
            primary_url: "https://github.com/TAHASHAH12".to_string(),
            homepage_url: None,
            language: Some("Python".to_string()),
            language_color: None,
            star_count: 31,
            fork_count: 12,
            topics: topics(&["neural-networks", "optimization", "deep-learning"]),
            updated_at: date(2024, 11, 1),
            category: Category::Ml,
        },
        ProjectRecord {
            id: "fallback-4".to_string(),
            name: "data-pipeline-automation".to_string(),
            title: "Data Pipeline Automation".to_string(),
            description: Some(
                "Automated ETL pipeline for processing large-scale datasets".to_string(),
            ),
            primary_url: "https://github.com/TAHASHAH12".to_string(),
            homepage_url: None,
            language: Some("Python".to_string()),
            language_color: None,
            star_count: 18,
            fork_count: 5,
            topics: topics(&["etl", "data-engineering", "spark"]),
            updated_at: date(2024, 10, 20),
            category: Category::DataScience,
        },
        ProjectRecord {
            id: "fallback-5".to_string(),
            name: "portfolio-website".to_string(),
            title: "Portfolio Website".to_string(),
            description: Some(
                "Personal portfolio website built with React and Tailwind CSS".to_string(),
            ),
            primary_url: "https://github.com/TAHASHAH12/Portfolio".to_string(),
            homepage_url: Some("https://tahashah-portfolio.vercel.app".to_string()),
            language: Some("JavaScript".to_string()),
            language_color: None,
            star_count: 8,
            fork_count: 2,
            topics: topics(&["react", "portfolio", "tailwind"]),
            updated_at: date(2024, 12, 15),
            category: Category::WebDev,
        },
    ]
}

fn topics(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single().expect("valid sample date")
}
