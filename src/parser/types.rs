//! Common types for build system detection

/// Build system whose manifest declares a project's version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildSystem {
    /// npm (package.json + package-lock.json)
    Npm,
    /// Cargo (Cargo.toml + Cargo.lock)
    Cargo,
}

impl BuildSystem {
    /// Detection precedence; earlier entries win when several match
    pub const DETECTION_ORDER: [BuildSystem; 2] = [BuildSystem::Npm, BuildSystem::Cargo];

    /// Returns the string representation of the build system
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildSystem::Npm => "npm",
            BuildSystem::Cargo => "cargo",
        }
    }

    /// File declaring the project version
    pub fn manifest_file(&self) -> &'static str {
        match self {
            BuildSystem::Npm => "package.json",
            BuildSystem::Cargo => "Cargo.toml",
        }
    }

    /// Lock file that must sit next to the manifest; only used for detection
    pub fn lock_file(&self) -> &'static str {
        match self {
            BuildSystem::Npm => "package-lock.json",
            BuildSystem::Cargo => "Cargo.lock",
        }
    }
}

/// Filenames found in a repository directory, in API order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileListing {
    pub files: Vec<String>,
}

impl FileListing {
    pub fn new(files: Vec<String>) -> Self {
        Self { files }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.iter().any(|file| file == name)
    }
}

/// Detect the build system of a directory from its listing
///
/// A build system matches only when both its manifest and its lock file are
/// present.
pub fn detect_build_system(listing: &FileListing) -> Option<BuildSystem> {
    BuildSystem::DETECTION_ORDER.into_iter().find(|system| {
        listing.contains(system.manifest_file()) && listing.contains(system.lock_file())
    })
}
