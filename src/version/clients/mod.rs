//! Client implementations for reading repository content

pub mod github;

pub use github::GitHubClient;
