//! Client error types
//!
//! One variant per failure class: transport, backend-reported envelope,
//! unreadable body. Malformed stream lines never surface here - the stream
//! parser swallows them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure: connect, timeout, TLS, broken pipe.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status and (optionally) an
    /// error envelope.
    #[error("backend error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response arrived but its body could not be read or decoded.
    #[error("unreadable response body: {0}")]
    Body(String),
}
