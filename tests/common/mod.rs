//! Shared test utilities for integration tests
#![allow(dead_code)]

use serde_json::{Value, json};

/// Builder for one repository node in a pinned-items GraphQL response
pub struct RepoNodeBuilder {
    id: String,
    name: String,
    description: Option<String>,
    url: String,
    homepage_url: Option<String>,
    stargazer_count: u32,
    fork_count: u32,
    language: Option<(String, Option<String>)>,
    topics: Vec<String>,
    updated_at: String,
}

impl RepoNodeBuilder {
    pub fn new(name: &str, updated_at: &str) -> Self {
        Self {
            id: format!("R_{}", name),
            name: name.to_string(),
            description: None,
            url: format!("https://github.com/octocat/{}", name),
            homepage_url: None,
            stargazer_count: 0,
            fork_count: 0,
            language: None,
            topics: Vec::new(),
            updated_at: updated_at.to_string(),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn homepage(mut self, url: &str) -> Self {
        self.homepage_url = Some(url.to_string());
        self
    }

    pub fn language(mut self, name: &str, color: Option<&str>) -> Self {
        self.language = Some((name.to_string(), color.map(str::to_string)));
        self
    }

    pub fn stars(mut self, count: u32) -> Self {
        self.stargazer_count = count;
        self
    }

    pub fn forks(mut self, count: u32) -> Self {
        self.fork_count = count;
        self
    }

    pub fn topics(mut self, topics: &[&str]) -> Self {
        self.topics = topics.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn to_json(&self) -> Value {
        let language = self.language.as_ref().map(|(name, color)| {
            json!({ "name": name, "color": color })
        });
        let topic_nodes: Vec<Value> =
            self.topics.iter().map(|t| json!({ "topic": { "name": t } })).collect();

        json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "url": self.url,
            "homepageUrl": self.homepage_url,
            "stargazerCount": self.stargazer_count,
            "forkCount": self.fork_count,
            "primaryLanguage": language,
            "repositoryTopics": { "nodes": topic_nodes },
            "updatedAt": self.updated_at,
        })
    }
}

/// Full GraphQL response body with the given repository nodes
pub fn pinned_response(nodes: &[RepoNodeBuilder]) -> Value {
    let nodes: Vec<Value> = nodes.iter().map(RepoNodeBuilder::to_json).collect();
    json!({
        "data": {
            "user": {
                "pinnedItems": { "nodes": nodes }
            }
        }
    })
}

/// GraphQL response body reporting errors instead of data
pub fn graphql_error_response(message: &str) -> Value {
    json!({
        "data": null,
        "errors": [ { "message": message } ]
    })
}

/// GraphQL response body for an unknown user (null user, no errors)
pub fn unknown_user_response() -> Value {
    json!({ "data": { "user": null } })
}
