//! Unified error type for postergen.

use thiserror::Error;

/// Errors that can occur while producing an event poster.
#[derive(Debug, Error)]
pub enum PosterError {
    /// The photo API returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// A network error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Background bytes are not a recognized raster image.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The composed raster could not be encoded as PNG.
    #[error("Encode error: {0}")]
    Encode(String),

    /// A font or logo asset could not be loaded at startup.
    #[error("Asset error: {0}")]
    AssetLoad(String),

    /// No Pexels API key configured.
    #[error("No Pexels API key. Set PEXELS_API_KEY or add it to the config file.")]
    MissingApiKey,

    /// Every search attempt came back empty.
    #[error("No photos found for '{query}'. Try different keywords.")]
    NoPhotos {
        /// The last query that was tried.
        query: String,
    },
}
