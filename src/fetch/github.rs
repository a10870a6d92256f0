//! GraphQL client for the pinned-repositories query.
//!
//! One POST per load, authenticated with a bearer token. GitHub's GraphQL API
//! rejects anonymous callers outright and the anonymous REST rate limits are
//! too low to be useful, so an unauthenticated load never reaches the network
//! (see [`crate::feed::load_projects`]).

use reqwest::header::USER_AGENT;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::error::FeedError;
use crate::config::FeedConfig;

const APP_USER_AGENT: &str = concat!("portfolio-feed/", env!("CARGO_PKG_VERSION"));

const PINNED_ITEMS_QUERY: &str = r#"
query PinnedRepositories($login: String!) {
  user(login: $login) {
    pinnedItems(first: 6, types: REPOSITORY) {
      nodes {
        ... on Repository {
          id
          name
          description
          url
          homepageUrl
          stargazerCount
          forkCount
          primaryLanguage {
            name
            color
          }
          repositoryTopics(first: 10) {
            nodes {
              topic {
                name
              }
            }
          }
          updatedAt
        }
      }
    }
  }
}
"#;

/// One repository node as returned by the GraphQL API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNode {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub homepage_url: Option<String>,
    pub stargazer_count: u32,
    pub fork_count: u32,
    pub primary_language: Option<LanguageNode>,
    #[serde(default)]
    pub repository_topics: TopicConnection,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl RepositoryNode {
    /// Topic names in source order, skipping any malformed entries.
    pub fn topic_names(&self) -> Vec<String> {
        self.repository_topics
            .nodes
            .iter()
            .filter_map(|node| node.topic.as_ref().map(|t| t.name.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageNode {
    pub name: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopicConnection {
    #[serde(default)]
    pub nodes: Vec<TopicNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopicNode {
    pub topic: Option<TopicName>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopicName {
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    user: Option<UserData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserData {
    pinned_items: PinnedItems,
}

#[derive(Debug, Deserialize)]
struct PinnedItems {
    #[serde(default)]
    nodes: Vec<RepositoryNode>,
}

/// Fetch the account's pinned repositories.
///
/// Returns [`FeedError::EmptyResult`] when the query succeeds but yields no
/// repositories, so callers never have to distinguish "empty" from "failed".
pub async fn fetch_pinned(
    config: &FeedConfig,
    token: &str,
) -> Result<Vec<RepositoryNode>, FeedError> {
    let body = json!({
        "query": PINNED_ITEMS_QUERY,
        "variables": { "login": config.username },
    });

    let response = reqwest::Client::new()
        .post(&config.graphql_url)
        .bearer_auth(token)
        .header(USER_AGENT, APP_USER_AGENT)
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::Http { status, username: config.username.clone() });
    }

    let parsed: GraphQlResponse = response.json().await?;

    if let Some(error) = parsed.errors.into_iter().next() {
        return Err(FeedError::GraphQl(error.message));
    }

    let nodes = parsed
        .data
        .and_then(|data| data.user)
        .map(|user| user.pinned_items.nodes)
        .unwrap_or_default();

    if nodes.is_empty() {
        return Err(FeedError::EmptyResult);
    }

    debug!(count = nodes.len(), user = %config.username, "fetched pinned repositories");
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_node_deserializes_graphql_shape() {
        let json = r##"{
            "id": "R_abc123",
            "name": "ml-forecast",
            "description": "neural network model",
            "url": "https://github.com/octocat/ml-forecast",
            "homepageUrl": null,
            "stargazerCount": 12,
            "forkCount": 4,
            "primaryLanguage": { "name": "Python", "color": "#3572A5" },
            "repositoryTopics": {
                "nodes": [
                    { "topic": { "name": "forecasting" } },
                    { "topic": { "name": "pytorch" } }
                ]
            },
            "updatedAt": "2024-12-01T00:00:00Z"
        }"##;

        let node: RepositoryNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.name, "ml-forecast");
        assert_eq!(node.stargazer_count, 12);
        assert_eq!(node.primary_language.as_ref().unwrap().name, "Python");
        assert_eq!(node.topic_names(), vec!["forecasting", "pytorch"]);
    }

    #[test]
    fn test_repository_node_tolerates_missing_optionals() {
        let json = r#"{
            "id": "R_min",
            "name": "dotfiles",
            "description": null,
            "url": "https://github.com/octocat/dotfiles",
            "homepageUrl": null,
            "stargazerCount": 0,
            "forkCount": 0,
            "primaryLanguage": null,
            "updatedAt": "2024-01-15T08:30:00Z"
        }"#;

        let node: RepositoryNode = serde_json::from_str(json).unwrap();
        assert!(node.description.is_none());
        assert!(node.primary_language.is_none());
        assert!(node.topic_names().is_empty());
    }

    #[test]
    fn test_topic_nodes_with_null_topic_are_skipped() {
        let json = r#"{
            "nodes": [
                { "topic": { "name": "etl" } },
                { "topic": null }
            ]
        }"#;

        let topics: TopicConnection = serde_json::from_str(json).unwrap();
        let node = RepositoryNode {
            id: "x".to_string(),
            name: "x".to_string(),
            description: None,
            url: String::new(),
            homepage_url: None,
            stargazer_count: 0,
            fork_count: 0,
            primary_language: None,
            repository_topics: topics,
            updated_at: chrono::Utc::now(),
        };
        assert_eq!(node.topic_names(), vec!["etl"]);
    }
}
