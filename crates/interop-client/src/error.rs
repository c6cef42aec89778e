use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the interop client library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the server base URL does not parse or uses an unsupported scheme.
    #[error("invalid server URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    /// Raised when the server rejects the login request.
    #[error("authentication failed for user {username} (HTTP {status}): {body}")]
    AuthenticationFailed {
        username: String,
        status: u16,
        body: String,
    },

    /// Raised when the server answers an authenticated request with a
    /// non-success status.
    #[error("server rejected {operation} (HTTP {status}): {body}")]
    ServerRejected {
        operation: &'static str,
        status: u16,
        body: String,
    },

    /// Raised when a created target comes back without a server-assigned id.
    #[error("server response for created target carried no id")]
    TargetIdMissing,

    /// Raised when a record of the legacy 2016 tab-delimited file cannot be parsed.
    #[error("malformed legacy target record on line {line}: {message}")]
    MalformedLegacyRecord { line: usize, message: String },

    /// Raised when a 2017-format target JSON file cannot be decoded.
    #[error("malformed target file {path}: {source}")]
    MalformedTargetFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Raised when a 2017-format target JSON has no sibling thumbnail image.
    #[error("no thumbnail image found for target file {path}")]
    MissingTargetImage { path: PathBuf },

    /// Raised when an image file is not one of the supported jpg/jpeg/png formats.
    #[error("unsupported image format for {path}")]
    UnsupportedImageFormat { path: PathBuf },

    /// Raised when the probe period is negative or not finite.
    #[error("invalid probe period: {seconds} seconds")]
    InvalidProbePeriod { seconds: f64 },

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Wrapper for legacy file reading errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
