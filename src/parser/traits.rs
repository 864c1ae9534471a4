//! Manifest parser trait definition

use crate::version::error::InferenceError;

/// Trait for reading the version out of a build system manifest
pub trait ManifestParser: Send + Sync {
    /// Parse the manifest content and return its declared version
    fn extract_version(&self, content: &str) -> Result<String, InferenceError>;
}
