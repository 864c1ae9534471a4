//! Repository client test utilities

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;

use version_badge::badge::server::create_router;
use version_badge::parser::types::FileListing;
use version_badge::platform::RepoReference;
use version_badge::version::client::{RepoFileClient, Tag};
use version_badge::version::engine::VersionInferenceEngine;
use version_badge::version::error::InferenceError;

/// In-memory repository for testing
///
/// Unknown directories and files answer like GitHub does for missing paths.
#[derive(Default)]
pub struct StubClient {
    tags: Vec<Tag>,
    directories: HashMap<String, Vec<String>>,
    files: HashMap<String, String>,
}

impl StubClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags(mut self, tags: Vec<&str>) -> Self {
        self.tags = tags.into_iter().map(Tag::new).collect();
        self
    }

    pub fn with_directory(mut self, subpath: &str, files: Vec<&str>) -> Self {
        self.directories.insert(
            subpath.to_string(),
            files.into_iter().map(|f| f.to_string()).collect(),
        );
        self
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }
}

#[async_trait]
impl RepoFileClient for StubClient {
    async fn list_files(
        &self,
        _repo: &RepoReference,
        subpath: &str,
    ) -> Result<FileListing, InferenceError> {
        match self.directories.get(subpath) {
            Some(files) => Ok(FileListing::new(files.clone())),
            None => Err(InferenceError::ApiStatus("Not Found".to_string())),
        }
    }

    async fn list_tags(&self, _repo: &RepoReference) -> Result<Vec<Tag>, InferenceError> {
        Ok(self.tags.clone())
    }

    async fn read_raw_file(
        &self,
        repo: &RepoReference,
        branch: &str,
        path: &str,
    ) -> Result<String, InferenceError> {
        match self.files.get(path) {
            Some(content) => Ok(content.clone()),
            None => Err(InferenceError::RawStatus {
                url: format!("stub://{}/{}/{}/{}", repo.owner(), repo.repo(), branch, path),
                status_text: "Not Found".to_string(),
            }),
        }
    }
}

/// Create a badge router backed by the given stub repository
pub fn create_test_router(client: StubClient) -> Router {
    let engine = VersionInferenceEngine::with_default_branch(Arc::new(client));
    create_router(Arc::new(engine))
}
