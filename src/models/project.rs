use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category label assigned to every project at ingestion time.
///
/// The set is closed: classification always produces exactly one of these
/// variants (see [`crate::classify::categorize`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "ml")]
    Ml,
    #[serde(rename = "data-science")]
    DataScience,
    #[serde(rename = "web-dev")]
    WebDev,
    #[serde(rename = "python")]
    Python,
    #[serde(rename = "other")]
    Other,
}

impl Category {
    /// All labels, in classification rule order.
    pub const ALL: [Category; 5] = [
        Category::Ml,
        Category::DataScience,
        Category::WebDev,
        Category::Python,
        Category::Other,
    ];

    /// The kebab-case label used in CLI arguments and JSON output.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Ml => "ml",
            Category::DataScience => "data-science",
            Category::WebDev => "web-dev",
            Category::Python => "python",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ml" => Ok(Category::Ml),
            "data-science" => Ok(Category::DataScience),
            "web-dev" => Ok(Category::WebDev),
            "python" => Ok(Category::Python),
            "other" => Ok(Category::Other),
            other => Err(format!(
                "unknown category '{}' (expected one of: ml, data-science, web-dev, python, other)",
                other
            )),
        }
    }
}

/// A single repository normalized for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Opaque identifier from the source service.
    pub id: String,
    /// Raw repository name, e.g. `data-pipeline_tool`.
    pub name: String,
    /// Human-readable title derived from the raw name, e.g. `Data Pipeline Tool`.
    pub title: String,
    pub description: Option<String>,
    /// Canonical link to the repository.
    pub primary_url: String,
    /// Optional external link (project homepage or demo).
    pub homepage_url: Option<String>,
    /// Primary programming language, if the service reports one.
    pub language: Option<String>,
    /// Display color for the language, if the service reports one.
    pub language_color: Option<String>,
    pub star_count: u32,
    pub fork_count: u32,
    /// Tags in source order. Display shows at most the first three.
    pub topics: Vec<String>,
    pub updated_at: DateTime<Utc>,
    pub category: Category,
}

/// Where the displayed records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedSource {
    /// Records fetched live from the hosting service.
    Live,
    /// The fixed sample list, shown because live retrieval was unavailable.
    Sample,
}

/// Terminal state of one load attempt: either live data, or the sample
/// list plus an advisory explaining the degradation.
#[derive(Debug, Clone)]
pub struct FeedOutcome {
    pub projects: Vec<ProjectRecord>,
    pub source: FeedSource,
    pub advisory: Option<String>,
}
