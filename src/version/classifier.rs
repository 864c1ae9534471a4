//! Maps domain error messages to response status categories

use axum::http::StatusCode;

/// Externally visible category of a failed request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// No version can be determined for the repository
    NotFound,
    /// An upstream service failed or could not be reached
    BadGateway,
    /// The repository content cannot yield a version
    BadRequest,
    /// Anything else
    InternalError,
}

impl ErrorCategory {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCategory::NotFound => StatusCode::NOT_FOUND,
            ErrorCategory::BadGateway => StatusCode::BAD_GATEWAY,
            ErrorCategory::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCategory::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Ordered (substring, category) table; the first match wins.
const CLASSIFICATION_TABLE: [(&str, ErrorCategory); 10] = [
    ("Not Found", ErrorCategory::NotFound),
    ("Repository has no tags", ErrorCategory::NotFound),
    ("Fail to find a build system", ErrorCategory::NotFound),
    ("GitHub API error", ErrorCategory::BadGateway),
    ("Fail to read project files", ErrorCategory::InternalError),
    ("Failed to fetch files", ErrorCategory::BadGateway),
    ("Failed to fetch file", ErrorCategory::BadGateway),
    ("GitHub User Content error", ErrorCategory::InternalError),
    ("Version field not found", ErrorCategory::BadRequest),
    ("Failed to parse", ErrorCategory::BadRequest),
];

/// Classify an error message; unknown messages are internal errors
pub fn classify(message: &str) -> ErrorCategory {
    CLASSIFICATION_TABLE
        .iter()
        .find(|(reason, _)| message.contains(reason))
        .map(|(_, category)| *category)
        .unwrap_or(ErrorCategory::InternalError)
}
