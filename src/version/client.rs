//! Client trait for reading repository content from a Git platform

#[cfg(test)]
use mockall::automock;
use serde::Deserialize;

use crate::parser::types::FileListing;
use crate::platform::RepoReference;
use crate::version::error::InferenceError;

/// Entry of the tag listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// Trait for the remote reads version inference relies on
///
/// Every call is a single attempt. Transport faults are converted into
/// [`InferenceError`] values here; callers never see a raw client error.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait RepoFileClient: Send + Sync {
    /// Lists the filenames in `subpath` (empty for the repository root)
    async fn list_files(
        &self,
        repo: &RepoReference,
        subpath: &str,
    ) -> Result<FileListing, InferenceError>;

    /// Lists the repository tags in the order the platform returns them
    async fn list_tags(&self, repo: &RepoReference) -> Result<Vec<Tag>, InferenceError>;

    /// Reads the raw content of `path` on `branch`
    async fn read_raw_file(
        &self,
        repo: &RepoReference,
        branch: &str,
        path: &str,
    ) -> Result<String, InferenceError>;
}
