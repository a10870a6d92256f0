pub mod error;
pub mod github;

pub use error::FeedError;
pub use github::{RepositoryNode, fetch_pinned};
