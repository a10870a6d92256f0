//! Data models for the project feed.
//!
//! - [`ProjectRecord`] - One repository normalized for display
//! - [`Category`] - Closed set of labels assigned at ingestion time
//! - [`FeedOutcome`] / [`FeedSource`] - Result of one load attempt, live or sample

pub mod project;

pub use project::{Category, FeedOutcome, FeedSource, ProjectRecord};
