//! Git hosting platforms and repository references

use reqwest::Url;

/// Supported Git hosting platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GitPlatform {
    /// github.com
    GitHub,
}

impl GitPlatform {
    /// Returns the string representation used in request paths
    pub fn as_str(&self) -> &'static str {
        match self {
            GitPlatform::GitHub => "github",
        }
    }

    /// Returns the web base URL of the platform (e.g., "https://github.com")
    pub fn base_url(&self) -> String {
        format!("https://{}", self.domain_name())
    }

    /// Builds the web URL of a repository hosted on this platform
    pub fn repo_url(&self, owner: &str, repo: &str) -> String {
        format!("{}/{}/{}", self.base_url(), owner, repo)
    }

    /// Detects the platform a repository URL belongs to
    pub fn from_url(url: &str) -> Result<Self, String> {
        let parsed = Url::parse(url).map_err(|e| format!("Invalid URL: {}", e))?;

        match parsed.host_str() {
            Some("github.com") => Ok(GitPlatform::GitHub),
            _ => Err("GitPlatform not found.".to_string()),
        }
    }

    fn domain_name(&self) -> &'static str {
        match self {
            GitPlatform::GitHub => "github.com",
        }
    }
}

impl std::str::FromStr for GitPlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(GitPlatform::GitHub),
            _ => Err("Invalid Git Platform.".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoReferenceError {
    #[error("Missing route param: {0}")]
    MissingParam(&'static str),
}

/// A repository on a Git platform, optionally narrowed to a project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoReference {
    platform: GitPlatform,
    owner: String,
    repo: String,
    subpath: Option<String>,
}

impl RepoReference {
    pub fn new(
        platform: GitPlatform,
        owner: &str,
        repo: &str,
        subpath: Option<&str>,
    ) -> Result<Self, RepoReferenceError> {
        if owner.is_empty() {
            return Err(RepoReferenceError::MissingParam("user"));
        }
        if repo.is_empty() {
            return Err(RepoReferenceError::MissingParam("repo"));
        }

        Ok(Self {
            platform,
            owner: owner.to_string(),
            repo: repo.to_string(),
            subpath: subpath.map(str::to_string),
        })
    }

    pub fn platform(&self) -> GitPlatform {
        self.platform
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn subpath(&self) -> Option<&str> {
        self.subpath.as_deref()
    }

    /// Web URL of the repository, used in user-facing messages
    pub fn url(&self) -> String {
        self.platform.repo_url(&self.owner, &self.repo)
    }
}
