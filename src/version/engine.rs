//! Version inference over a repository's tags or build system manifest
//!
//! The strategy is picked by the request alone:
//! - no subpath: the first tag returned by the platform, minus a leading `v`
//! - subpath (empty for the root): the `version` declared by the manifest of
//!   the build system detected in that directory

use std::sync::Arc;

use tracing::debug;

use crate::config::DEFAULT_BRANCH;
use crate::parser::extract_version;
use crate::parser::types::detect_build_system;
use crate::platform::RepoReference;
use crate::version::client::RepoFileClient;
use crate::version::error::InferenceError;

pub struct VersionInferenceEngine {
    client: Arc<dyn RepoFileClient>,
    branch: String,
}

impl VersionInferenceEngine {
    /// Create an engine reading manifests from `branch`
    pub fn new(client: Arc<dyn RepoFileClient>, branch: &str) -> Self {
        Self {
            client,
            branch: branch.to_string(),
        }
    }

    /// Create an engine reading manifests from the default branch
    pub fn with_default_branch(client: Arc<dyn RepoFileClient>) -> Self {
        Self::new(client, DEFAULT_BRANCH)
    }

    /// Infer the current release version of `repo`
    pub async fn infer_version(&self, repo: &RepoReference) -> Result<String, InferenceError> {
        match repo.subpath() {
            None => self.infer_from_tags(repo).await,
            Some(subpath) => self.infer_from_manifest(repo, subpath).await,
        }
    }

    async fn infer_from_tags(&self, repo: &RepoReference) -> Result<String, InferenceError> {
        let tags = self.client.list_tags(repo).await?;

        let Some(latest) = tags.first() else {
            return Err(InferenceError::NoTags);
        };

        debug!("Latest tag of {}: {}", repo.url(), latest.name);

        Ok(strip_version_prefix(&latest.name).to_string())
    }

    async fn infer_from_manifest(
        &self,
        repo: &RepoReference,
        subpath: &str,
    ) -> Result<String, InferenceError> {
        let listing = self.client.list_files(repo, subpath).await?;

        let Some(system) = detect_build_system(&listing) else {
            return Err(InferenceError::NoBuildSystem(repo.url()));
        };

        let path = manifest_path(subpath, system.manifest_file());
        debug!(
            "Detected {} on {} at '{}', reading {}",
            system.as_str(),
            repo.url(),
            subpath,
            path
        );

        let content = self.client.read_raw_file(repo, &self.branch, &path).await?;

        extract_version(system, &content)
    }
}

/// Remove one leading `v` from a tag name
pub fn strip_version_prefix(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}

/// Join a directory and a manifest filename without doubling slashes
///
/// The repository root (`""` or `"/"`) yields the bare filename.
pub fn manifest_path(subpath: &str, manifest_file: &str) -> String {
    let directory = subpath.trim_end_matches('/');

    if directory.is_empty() {
        manifest_file.to_string()
    } else {
        format!("{}/{}", directory, manifest_file)
    }
}
