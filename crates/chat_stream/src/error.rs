//! Stream error types

use thiserror::Error;

/// Failure of a streaming response read.
///
/// Malformed event lines are not errors - the parser logs and skips them.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The transport failed while reading the response body. Fatal to this
    /// stream attempt.
    #[error("stream transport failure: {0}")]
    Transport(#[source] reqwest::Error),
}
