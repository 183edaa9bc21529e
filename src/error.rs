use std::fmt;

/// Custom error type for Mattermost API operations
#[derive(Debug)]
pub enum MmError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// Server returned an error response
    Api { status: u16, message: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// Server URL not found in any source
    UrlNotFound(String),
    /// Failed to read or parse the credentials store
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for MmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MmError::Http(e) => write!(f, "HTTP request failed: {}", e),
            MmError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            MmError::TokenNotFound(msg) => write!(f, "{}", msg),
            MmError::UrlNotFound(msg) => write!(f, "{}", msg),
            MmError::Credentials(msg) => write!(f, "{}", msg),
            MmError::Json(msg) => write!(f, "JSON error: {}", msg),
            MmError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for MmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MmError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MmError {
    fn from(err: reqwest::Error) -> Self {
        MmError::Http(err)
    }
}

impl From<serde_json::Error> for MmError {
    fn from(err: serde_json::Error) -> Self {
        MmError::Json(err.to_string())
    }
}

impl From<std::io::Error> for MmError {
    fn from(err: std::io::Error) -> Self {
        MmError::Credentials(err.to_string())
    }
}

/// Result type alias for Mattermost operations
pub type Result<T> = std::result::Result<T, MmError>;
