//! Error types for the HTTP transport.

use thiserror::Error;

/// Failure to complete an HTTP exchange with a webhook endpoint.
///
/// Any of these maps to a transport-level delivery outcome; a response
/// that arrives but reports failure is not an `HttpError`.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The connection could not be established or was interrupted.
    ///
    /// Covers DNS resolution failures, refused connections and
    /// errors while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The endpoint did not answer within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The destination URL could not be used to build a request.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Setup(#[source] Box<dyn std::error::Error + Send + Sync>),
}
