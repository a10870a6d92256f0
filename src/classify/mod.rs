//! Keyword-based project categorization.
//!
//! Classification is a pure function over `(name, description, topics, language)`.
//! The keyword groups are tested in a fixed order and the first match wins, so a
//! project whose text matches both the machine-learning and the data-science
//! groups is classified `ml`. That ordering is the tie-break; keep the rule list
//! ordered and do not split it into independent predicates.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Category;

static ML_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "machine learning|ml|neural network|deep learning|tensorflow|pytorch|sklearn|ai|artificial intelligence|computer vision|nlp",
    )
    .expect("valid ml keyword pattern")
});

static DATA_SCIENCE_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "data science|analytics|visualization|pandas|numpy|matplotlib|seaborn|jupyter|analysis|statistics|predictive",
    )
    .expect("valid data-science keyword pattern")
});

static WEB_DEV_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("web|react|javascript|html|css|frontend|backend|api|website|portfolio")
        .expect("valid web-dev keyword pattern")
});

static WEB_DEV_LANGUAGES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("javascript|typescript|html|css").expect("valid web language pattern")
});

/// Assign a [`Category`] from repository metadata.
///
/// Name, description and topics are folded into one lowercase search string;
/// keywords match as substrings anywhere within it. Total: every input maps to
/// exactly one label, with `other` as the final catch-all.
pub fn categorize(
    name: &str,
    description: &str,
    topics: &[String],
    language: Option<&str>,
) -> Category {
    let search_text =
        format!("{} {} {}", name, description, topics.join(" ")).to_lowercase();
    let language = language.map(|l| l.to_lowercase());

    if ML_KEYWORDS.is_match(&search_text) {
        return Category::Ml;
    }

    if DATA_SCIENCE_KEYWORDS.is_match(&search_text) {
        return Category::DataScience;
    }

    if WEB_DEV_KEYWORDS.is_match(&search_text)
        || language.as_deref().is_some_and(|l| WEB_DEV_LANGUAGES.is_match(l))
    {
        return Category::WebDev;
    }

    if language.as_deref() == Some("python") {
        return Category::Python;
    }

    Category::Other
}
