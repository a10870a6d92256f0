//! Category filtering for the project list.
//!
//! Filtering is purely client-side: records carry their category from
//! ingestion, and a filter either keeps everything or keeps one label.
//! Order is preserved; filtering never re-sorts.

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::models::{Category, ProjectRecord};

/// Filter selection, parsed from a CLI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(Category),
}

impl ProjectFilter {
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(category) => record.category == *category,
        }
    }
}

impl FromStr for ProjectFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(ProjectFilter::All);
        }
        Category::from_str(s).map(ProjectFilter::Category)
    }
}

/// Keep only records matching the filter, preserving order.
pub fn apply_filter(
    projects: Vec<ProjectRecord>,
    filter: &ProjectFilter,
) -> Vec<ProjectRecord> {
    if *filter == ProjectFilter::All {
        return projects;
    }
    projects.into_iter().filter(|record| filter.matches(record)).collect()
}

/// Filter labels applicable to a set of records: `all` plus the sorted set
/// of distinct categories present.
pub fn available_categories(projects: &[ProjectRecord]) -> Vec<String> {
    let distinct: BTreeSet<&str> =
        projects.iter().map(|record| record.category.label()).collect();

    let mut labels = vec!["all".to_string()];
    labels.extend(distinct.into_iter().map(str::to_string));
    labels
}
