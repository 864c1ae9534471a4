//! package.json parser

use serde_json::Value;
use tracing::warn;

use crate::parser::traits::ManifestParser;
use crate::version::error::InferenceError;

/// Parser for package.json files
pub struct PackageJsonParser;

impl PackageJsonParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PackageJsonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestParser for PackageJsonParser {
    fn extract_version(&self, content: &str) -> Result<String, InferenceError> {
        let document: Value = serde_json::from_str(content).map_err(|e| {
            warn!("Failed to parse package.json: {}", e);
            InferenceError::PackageJsonParse(e.to_string())
        })?;

        document
            .get("version")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(InferenceError::MissingVersion("package.json"))
    }
}
