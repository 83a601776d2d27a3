//! Error types for the live-stream scraper
//!
//! Most of these never reach the operator as failures: the collector and the
//! run flow turn them into report events and carry on.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all scraper operations
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// Page not found on server
    #[error("Page not found: {0}")]
    NotFound(String),

    /// Rate limited by server (HTTP 429)
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// Embedded `serverStreamLinks` blob was found but is not valid JSON
    #[error("Malformed stream data: {0}")]
    MalformedStreamData(String),

    /// Template file does not exist
    #[error("Template not found at {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// Template exists but is not a usable JSON object
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem error while reading or writing documents
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_http_status() {
        let error = ScrapeError::HttpStatus {
            url: "https://hoadaotv.org/soccer".to_string(),
            status: 503,
        };
        assert_eq!(error.to_string(), "HTTP 503 from https://hoadaotv.org/soccer");
    }

    #[test]
    fn test_error_display_not_found() {
        let error = ScrapeError::NotFound("https://hoadaotv.org/gone".to_string());
        assert_eq!(error.to_string(), "Page not found: https://hoadaotv.org/gone");
    }

    #[test]
    fn test_error_display_rate_limited() {
        let error = ScrapeError::RateLimited;
        assert_eq!(error.to_string(), "Rate limited - too many requests");
    }

    #[test]
    fn test_error_display_malformed_stream_data() {
        let error = ScrapeError::MalformedStreamData("key must be a string".to_string());
        assert_eq!(error.to_string(), "Malformed stream data: key must be a string");
    }

    #[test]
    fn test_error_display_template_not_found() {
        let error = ScrapeError::TemplateNotFound(PathBuf::from("template.json"));
        assert_eq!(error.to_string(), "Template not found at template.json");
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: ScrapeError = io.into();
        assert!(matches!(error, ScrapeError::Io(_)));
        assert_eq!(error.to_string(), "I/O error: denied");
    }
}
