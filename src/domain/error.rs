//! Error types for the Emerald Shaker plugin.
//!
//! [`ShakerError`] collects every failure the plugin can observe, from a
//! malformed bundled catalog to an ad network that refuses to fill. Only
//! catalog and theme errors ever reach a caller; ad and worker errors are
//! logged and turned into forward progress by the application layer.

use thiserror::Error;

/// The main error type for Emerald Shaker operations.
///
/// # Examples
///
/// ```
/// use emerald_shaker::ShakerError;
///
/// fn load() -> Result<(), ShakerError> {
///     Err(ShakerError::Catalog("duplicate recipe id: 7".to_string()))
/// }
///
/// assert!(load().unwrap_err().to_string().starts_with("Catalog error"));
/// ```
#[derive(Debug, Error)]
pub enum ShakerError {
    /// The recipe catalog could not be built.
    ///
    /// Raised for unparsable catalog JSON, duplicate identifiers, and empty
    /// identifiers.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The ad network refused an operation.
    ///
    /// Covers initialization failures, malformed unit identifiers, missing
    /// fill, and presenting an interstitial that is not ready.
    #[error("Ad network error: {0}")]
    AdNetwork(String),
}

/// A specialized `Result` type for Emerald Shaker operations.
pub type Result<T> = std::result::Result<T, ShakerError>;
