//! Error types

/// Network errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request or status error
    #[error("HTTP error: {0}")]
    Http(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Proxy error
    #[error("Proxy error: {0}")]
    Proxy(String),
}

impl From<Error> for fusion_name_resolution::Error {
    fn from(err: Error) -> Self {
        fusion_name_resolution::Error::TransportFailure(err.to_string())
    }
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
