//! GitHub REST API and raw content client

use reqwest::Url;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{DEFAULT_API_BASE_URL, DEFAULT_RAW_BASE_URL};
use crate::parser::types::FileListing;
use crate::platform::RepoReference;
use crate::version::client::{RepoFileClient, Tag};
use crate::version::error::InferenceError;

/// Entry of the repository contents endpoint
#[derive(Debug, Deserialize)]
struct RepoContent {
    name: String,
}

/// Client for the GitHub contents, tags and raw content endpoints
pub struct GitHubClient {
    client: reqwest::Client,
    api_base_url: String,
    raw_base_url: String,
}

impl GitHubClient {
    /// Creates a new GitHubClient with custom base URLs
    pub fn new(api_base_url: &str, raw_base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("version-badge")
                .build()
                .expect("Failed to create HTTP client"),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            raw_base_url: raw_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches a JSON array from the API, naming `endpoint` in shape errors
    async fn fetch_array<T: DeserializeOwned>(
        &self,
        url: Url,
        endpoint: &str,
    ) -> Result<Vec<T>, InferenceError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| InferenceError::FetchFiles(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(InferenceError::ApiStatus(status_text(status)));
        }

        let payload: serde_json::Value = response.json().await.map_err(|e| {
            warn!("Failed to read GitHub {} response: {}", endpoint, e);
            InferenceError::FetchFiles(e.to_string())
        })?;

        let serde_json::Value::Array(entries) = payload else {
            warn!("GitHub {} response is not an array: {}", endpoint, url);
            return Err(InferenceError::UnreadableListing(endpoint.to_string()));
        };

        entries
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()
            .map_err(|e| InferenceError::FetchFiles(e.to_string()))
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, DEFAULT_RAW_BASE_URL)
    }
}

#[async_trait::async_trait]
impl RepoFileClient for GitHubClient {
    async fn list_files(
        &self,
        repo: &RepoReference,
        subpath: &str,
    ) -> Result<FileListing, InferenceError> {
        let mut segments = vec!["repos", repo.owner(), repo.repo(), "contents"];
        segments.extend(subpath.trim_start_matches('/').split('/'));

        let url = join_segments(&self.api_base_url, &segments).map_err(InferenceError::FetchFiles)?;

        let contents: Vec<RepoContent> = self.fetch_array(url, "contents").await?;

        Ok(FileListing::new(
            contents.into_iter().map(|content| content.name).collect(),
        ))
    }

    async fn list_tags(&self, repo: &RepoReference) -> Result<Vec<Tag>, InferenceError> {
        let segments = ["repos", repo.owner(), repo.repo(), "tags"];
        let url = join_segments(&self.api_base_url, &segments).map_err(InferenceError::FetchFiles)?;

        self.fetch_array(url, "tags").await
    }

    async fn read_raw_file(
        &self,
        repo: &RepoReference,
        branch: &str,
        path: &str,
    ) -> Result<String, InferenceError> {
        let fetch_failed = |message: String| InferenceError::FetchFile {
            path: path.to_string(),
            message,
        };

        let mut segments = vec![repo.owner(), repo.repo()];
        segments.extend(branch.split('/'));
        segments.extend(path.trim_start_matches('/').split('/'));

        let url = join_segments(&self.raw_base_url, &segments).map_err(fetch_failed)?;

        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| fetch_failed(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            warn!("GitHub User Content returned status {}: {}", status, url);
            return Err(InferenceError::RawStatus {
                url: url.to_string(),
                status_text: status_text(status),
            });
        }

        response.text().await.map_err(|e| fetch_failed(e.to_string()))
    }
}

/// Appends `segments` to `base`, percent-encoding each one
fn join_segments(base: &str, segments: &[&str]) -> Result<Url, String> {
    let mut url = Url::parse(base).map_err(|e| format!("Invalid URL {}: {}", base, e))?;

    url.path_segments_mut()
        .map_err(|_| format!("Invalid URL {}: cannot be a base", base))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

fn status_text(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}
