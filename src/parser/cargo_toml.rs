//! Cargo.toml parser

use toml::Table;
use tracing::warn;

use crate::parser::traits::ManifestParser;
use crate::version::error::InferenceError;

/// Parser for Cargo.toml files
pub struct CargoTomlParser;

impl CargoTomlParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CargoTomlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestParser for CargoTomlParser {
    fn extract_version(&self, content: &str) -> Result<String, InferenceError> {
        let document: Table = content.parse().map_err(|e: toml::de::Error| {
            warn!("Failed to parse Cargo.toml: {}", e);
            InferenceError::CargoTomlParse(e.message().to_string())
        })?;

        document
            .get("package")
            .and_then(|package| package.get("version"))
            .and_then(|version| version.as_str())
            .map(str::to_string)
            .ok_or(InferenceError::MissingVersion("Cargo.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn extract_version_reads_package_version() {
        let parser = CargoTomlParser::new();

        let result = parser.extract_version("[package]\nversion = \"0.3.1\"\n");

        assert_eq!(result, Ok("0.3.1".to_string()));
    }

    #[test]
    fn extract_version_reads_full_manifest() {
        let parser = CargoTomlParser::new();
        let content = r#"[package]
name = "my-crate"
version = "1.2.3"
edition = "2021"

[dependencies]
serde = { version = "1.0", features = ["derive"] }
"#;

        assert_eq!(parser.extract_version(content), Ok("1.2.3".to_string()));
    }

    #[test]
    fn extract_version_accepts_dotted_keys() {
        let parser = CargoTomlParser::new();

        assert_eq!(
            parser.extract_version("package.version = \"4.0.0\"\n"),
            Ok("4.0.0".to_string())
        );
    }

    #[rstest]
    #[case("[package]\nname = \"my-crate\"\n")]
    #[case("[workspace]\nmembers = [\"a\"]\n")]
    #[case("[dependencies]\nversion = \"1.0.0\"\n")]
    #[case("[package]\nversion.workspace = true\n")]
    #[case("")]
    fn extract_version_reports_missing_field(#[case] content: &str) {
        let parser = CargoTomlParser::new();

        let result = parser.extract_version(content);

        assert_eq!(result, Err(InferenceError::MissingVersion("Cargo.toml")));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Version field not found in Cargo.toml"
        );
    }

    #[test]
    fn extract_version_reports_parse_failure() {
        let parser = CargoTomlParser::new();

        let error = parser.extract_version("[package\nversion = ").unwrap_err();

        assert!(matches!(error, InferenceError::CargoTomlParse(_)));
        assert!(error.to_string().starts_with("Failed to parse Cargo.toml: "));
    }
}
