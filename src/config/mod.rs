//! Environment-backed configuration.
//!
//! The whole surface is three values: the account to load, an optional access
//! token, and the GraphQL endpoint (overridable so tests can point at a local
//! mock server). A missing token is not an error; it routes the loader to the
//! sample list.

use std::env;

/// Account whose pinned repositories are shown when none is configured.
pub const DEFAULT_USERNAME: &str = "TAHASHAH12";

/// Public GraphQL endpoint of the hosting service.
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub username: String,
    pub token: Option<String>,
    pub graphql_url: String,
}

impl FeedConfig {
    /// Read configuration from the environment.
    ///
    /// `GITHUB_USERNAME` and `GITHUB_TOKEN` are the configuration surface;
    /// `GITHUB_GRAPHQL_URL` exists for integration tests. Empty values are
    /// treated as unset.
    pub fn from_env() -> Self {
        Self {
            username: non_empty_var("GITHUB_USERNAME")
                .unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            token: non_empty_var("GITHUB_TOKEN"),
            graphql_url: non_empty_var("GITHUB_GRAPHQL_URL")
                .unwrap_or_else(|| DEFAULT_GRAPHQL_URL.to_string()),
        }
    }

    /// Replace the account, keeping token and endpoint.
    pub fn with_username(mut self, username: &str) -> Self {
        self.username = username.to_string();
        self
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var reads themselves are covered by the CLI integration tests,
    // which control the binary's environment; mutating process-global env
    // from parallel unit tests is racy.

    #[test]
    fn test_with_username_overrides() {
        let config = FeedConfig {
            username: DEFAULT_USERNAME.to_string(),
            token: Some("t".to_string()),
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
        };
        let config = config.with_username("octocat");
        assert_eq!(config.username, "octocat");
        assert_eq!(config.token.as_deref(), Some("t"));
    }
}
