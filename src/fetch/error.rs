use reqwest::StatusCode;

/// Failure modes of one feed load attempt.
///
/// Every variant degrades to the same user-visible behavior: the sample list
/// plus an advisory message. None is fatal.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// No access token configured; the network call is skipped entirely
    /// because anonymous rate limits are too low to be reliable.
    #[error("access token not configured")]
    MissingCredential,

    /// Non-success HTTP status from the API.
    #[error("{}", http_error_message(.status, .username))]
    Http { status: StatusCode, username: String },

    /// The API answered 200 but reported an error in the GraphQL envelope.
    #[error("{0}")]
    GraphQl(String),

    /// The query succeeded but returned no repositories.
    #[error("no pinned repositories found")]
    EmptyResult,

    /// Transport-level failure (DNS, TLS, connection reset, malformed body).
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

fn http_error_message(status: &StatusCode, username: &str) -> String {
    match *status {
        StatusCode::UNAUTHORIZED => {
            "GitHub API authentication failed. Please check your token.".to_string()
        }
        StatusCode::FORBIDDEN => {
            "GitHub API access forbidden. Please check your token permissions.".to_string()
        }
        StatusCode::NOT_FOUND => format!("GitHub user '{}' not found.", username),
        other => format!(
            "GitHub API error: {} {}",
            other.as_u16(),
            other.canonical_reason().unwrap_or("unknown status")
        ),
    }
}
