//! Error types for panel operations.
//!
//! This module provides the error type shared by every panel operation, together with the
//! structured error payload the panel returns on non-success responses.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main error type for panel operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The panel could not be reached
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Request timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The panel answered with a structured error payload
    #[error("api call failed with errors: {0}")]
    Api(ApiErrors),

    /// Failed to parse a panel response
    #[error("Failed to parse panel response: {0}")]
    ParseError(String),

    /// The server listing succeeded but carried no collection
    #[error("no servers returned")]
    NoServersReturned,

    /// The backup listing succeeded but carried no collection
    #[error("no backups returned")]
    NoBackupsReturned,

    /// The signed download URL answered with a non-success status
    #[error("download failed with status code {0}")]
    DownloadFailed(u16),

    /// Local I/O failure while writing a download
    #[error("I/O error: {0}")]
    Io(String),

    /// Invalid UUID format
    #[error("Invalid UUID: {0}")]
    InvalidUuid(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Invalid endpoint
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Specialized result type for panel operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::HttpError(_) => "HTTP_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Api(_) => "API_ERROR",
            Self::ParseError(_) => "PARSE_ERROR",
            Self::NoServersReturned => "NO_SERVERS_RETURNED",
            Self::NoBackupsReturned => "NO_BACKUPS_RETURNED",
            Self::DownloadFailed(_) => "DOWNLOAD_FAILED",
            Self::Io(_) => "IO_ERROR",
            Self::InvalidUuid(_) => "INVALID_UUID",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
        }
    }

    /// Returns true for failures of the transport itself rather than of the panel.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ServiceUnavailable(_) | Self::HttpError(_) | Self::Timeout(_)
        )
    }
}

/// Error payload returned by the panel on non-success responses.
///
/// The panel reports errors as an ordered list; all of them are kept so the resulting
/// [`Error::Api`] message names every reported pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrors {
    /// Errors in the order reported by the panel
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

/// A single `{code, detail}` entry of an [`ApiErrors`] payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g. `NotFoundHttpException`)
    #[serde(default)]
    pub code: String,
    /// HTTP status echoed in the payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Human-readable description
    #[serde(default)]
    pub detail: String,
}

impl fmt::Display for ApiErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.detail)
    }
}

impl fmt::Display for ApiErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("no error details reported");
        }

        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ServiceUnavailable(err.to_string())
        } else if err.is_decode() {
            Self::ParseError(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}
