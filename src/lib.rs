//! Portfolio Feed - load and categorize a GitHub account's pinned projects
//!
//! This library powers a small CLI that retrieves an account's pinned
//! repositories, normalizes each into a display record, assigns a category
//! via ordered keyword matching, and degrades to a fixed sample list whenever
//! live retrieval is unavailable. It supports:
//!
//! - One authenticated GraphQL query for pinned repositories
//! - Deterministic, first-match-wins categorization
//! - Newest-first ordering with stable ties
//! - Wholesale fallback to sample data with a human-readable advisory
//!
//! # Example
//!
//! ```no_run
//! use portfolio_feed::config::FeedConfig;
//! use portfolio_feed::feed::load_projects;
//!
//! # async fn example() {
//! let config = FeedConfig::from_env();
//! let outcome = load_projects(&config).await;
//! println!("Loaded {} projects", outcome.projects.len());
//! # }
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod feed;
pub mod fetch;
pub mod filters;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use classify::categorize;
pub use feed::{load_projects, sample_projects};
pub use models::{Category, FeedOutcome, FeedSource, ProjectRecord};
pub use utils::{format_updated, language_color, title_from_name};
