use chrono::{DateTime, Utc};

/// Derives a display title from a raw repository name.
///
/// Hyphens and underscores become spaces, and the first letter of every word
/// is uppercased. Runs of separators are preserved as-is.
///
/// # Examples
///
/// ```
/// use portfolio_feed::title_from_name;
///
/// assert_eq!(title_from_name("data-pipeline_tool"), "Data Pipeline Tool");
/// ```
pub fn title_from_name(name: &str) -> String {
    let spaced = name.replace(['-', '_'], " ");
    let mut title = String::with_capacity(spaced.len());
    let mut at_word_start = true;

    for ch in spaced.chars() {
        if at_word_start && ch.is_alphanumeric() {
            title.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            if !ch.is_alphanumeric() {
                at_word_start = true;
            }
            title.push(ch);
        }
    }

    title
}

/// Formats an update timestamp for display, short month plus year.
pub fn format_updated(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %Y").to_string()
}

/// Resolves a display color for a language.
///
/// A color reported by the source service wins; otherwise a static table by
/// language name applies, with a neutral gray default.
pub fn language_color(language: &str, service_color: Option<&str>) -> String {
    if let Some(color) = service_color {
        return color.to_string();
    }

    let color = match language {
        "JavaScript" => "#f1e05a",
        "TypeScript" => "#2b7489",
        "Python" => "#3572A5",
        "Java" => "#b07219",
        "C++" => "#f34b7d",
        "HTML" => "#e34c26",
        "CSS" => "#1563e0",
        "R" => "#198CE7",
        _ => "#8b949e",
    };
    color.to_string()
}
