use thiserror::Error;

use crate::version::classifier::{ErrorCategory, classify};

/// Failure of a version inference request
///
/// The rendered messages are part of the public contract: callers classify
/// them with [`classify`], so wording changes alter response statuses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferenceError {
    #[error("GitHub API error: {0}")]
    ApiStatus(String),

    #[error("Fail to read project files: {0} response is not an array")]
    UnreadableListing(String),

    #[error("Failed to fetch files: {0}")]
    FetchFiles(String),

    #[error("Fail to fetch {url}. GitHub User Content error: {status_text}")]
    RawStatus { url: String, status_text: String },

    #[error("Failed to fetch file {path}: {message}")]
    FetchFile { path: String, message: String },

    #[error("Repository has no tags.")]
    NoTags,

    #[error("Fail to find a build system on {0}")]
    NoBuildSystem(String),

    #[error("Fail to parse package.json: {0}")]
    PackageJsonParse(String),

    #[error("Failed to parse Cargo.toml: {0}")]
    CargoTomlParse(String),

    #[error("Version field not found in {0}")]
    MissingVersion(&'static str),
}

impl InferenceError {
    /// Status category of this error, as seen by HTTP callers
    pub fn category(&self) -> ErrorCategory {
        classify(&self.to_string())
    }
}
