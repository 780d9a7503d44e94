//! Error types for the youversion crate.
//!
//! Every operation returns [`Result`], and every failure surfaces to the
//! caller. The client performs no retries.
//!
//! # Error Kinds
//!
//! The variants fall into a handful of kinds, each with a predicate:
//!
//! - Configuration ([`Error::is_config`]): empty token, unsupported language
//! - Remote ([`Error::is_remote`]): transport failures, timeouts, non-2xx responses
//! - Not found ([`Error::is_not_found`]): the service does not know the resource
//! - Decode ([`Error::is_decode`]): the response body has an unexpected shape
//! - Validation ([`Error::is_validation`]): a caller-supplied value is out of range
//! - I/O ([`Error::is_io`]): a local write failed during a download
//!
//! # Example
//!
//! ```no_run
//! use youversion::{Error, Language, YouVersionClient};
//!
//! # async fn example() -> youversion::Result<()> {
//! let client = YouVersionClient::new("my-token", Language::English)?;
//!
//! match client.get_bible_version("ASV").await {
//!     Ok(version) => println!("{}", version.title),
//!     Err(Error::NotFound(what)) => eprintln!("unknown translation: {}", what),
//!     Err(e) if e.is_remote() => eprintln!("service unavailable: {}", e),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// The error type for YouVersion API operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid client configuration, such as an empty developer token.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The requested language is not one the service supports.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// HTTP/network error from reqwest.
    ///
    /// Covers connection failures and request timeouts.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("YouVersion API returned HTTP {status} for {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The requested URL.
        url: String,
    },

    /// The requested resource does not exist.
    ///
    /// Returned for HTTP 404 responses and for translation codes missing
    /// from the service's listing.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The response body could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An image dimension outside `1..=1280`.
    #[error("Invalid image size: {0} (must be between 1 and 1280)")]
    InvalidImageSize(u32),

    /// A day of year outside `1..=366`.
    #[error("Day out of bounds: {0} (must be between 1 and 366)")]
    DayOutOfBounds(u16),

    /// A date string that could not be parsed.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Local I/O failure, typically while writing a downloaded image.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for configuration errors.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_) | Error::UnsupportedLanguage(_))
    }

    /// Returns true for transport failures and non-success responses.
    pub fn is_remote(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Status { .. })
    }

    /// Returns true when the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Returns true when a response body could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Json(_))
    }

    /// Returns true when a caller-supplied parameter was rejected.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidImageSize(_) | Error::DayOutOfBounds(_) | Error::InvalidDate(_)
        )
    }

    /// Returns true for local I/O failures.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

/// A specialized Result type for YouVersion API operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert!(Error::Config("empty token".into()).is_config());
        assert!(Error::UnsupportedLanguage("xx".into()).is_config());
        assert!(
            Error::Status {
                status: 500,
                url: "https://example.com".into()
            }
            .is_remote()
        );
        assert!(Error::NotFound("ASV".into()).is_not_found());
        assert!(Error::InvalidImageSize(2000).is_validation());
        assert!(Error::DayOutOfBounds(0).is_validation());
        assert!(Error::InvalidDate("nope".into()).is_validation());

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(Error::from(io).is_io());

        let json = serde_json::from_str::<u32>("{").unwrap_err();
        assert!(Error::from(json).is_decode());
    }

    #[test]
    fn test_display() {
        let err = Error::Status {
            status: 503,
            url: "https://developers.youversionapi.com/1.0/versions".into(),
        };
        assert_eq!(
            err.to_string(),
            "YouVersion API returned HTTP 503 for https://developers.youversionapi.com/1.0/versions"
        );
        assert!(Error::InvalidImageSize(4096).to_string().contains("4096"));
    }
}
