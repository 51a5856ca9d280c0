//! Client-specific types and error definitions.

use thiserror::Error;

/// Errors that can occur while constructing or using the shared client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The factory was called outside a running hub executor.
    #[error("no tokio runtime is current; create_client must run on the hub executor")]
    NoRuntime,

    /// TLS context construction failed.
    #[error("TLS configuration error: {0}")]
    Tls(#[from] rustls::Error),

    /// The underlying HTTP client could not be built.
    #[error("HTTP client construction failed: {0}")]
    Build(#[from] reqwest::Error),

    /// A configured extra header has an invalid name.
    #[error("invalid header name: {0}")]
    HeaderName(#[from] reqwest::header::InvalidHeaderName),

    /// A configured extra header has an invalid value.
    #[error("invalid header value: {0}")]
    HeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    /// The shared client was torn down by hub shutdown.
    #[error("shared HTTP client is closed")]
    Closed,
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors loading client options from disk.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
