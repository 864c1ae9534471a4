//! Parser layer
//! - traits.rs: ManifestParser trait definition
//! - types.rs: Common types (BuildSystem, FileListing) and build system detection
//! - package_json.rs: package.json parser
//! - cargo_toml.rs: Cargo.toml parser

pub mod cargo_toml;
pub mod package_json;
pub mod traits;
pub mod types;

pub use cargo_toml::CargoTomlParser;
pub use package_json::PackageJsonParser;
pub use traits::ManifestParser;
pub use types::{BuildSystem, FileListing, detect_build_system};

use crate::version::error::InferenceError;

/// Extract the version declared in a manifest of the given build system
pub fn extract_version(system: BuildSystem, content: &str) -> Result<String, InferenceError> {
    match system {
        BuildSystem::Npm => PackageJsonParser::new().extract_version(content),
        BuildSystem::Cargo => CargoTomlParser::new().extract_version(content),
    }
}
