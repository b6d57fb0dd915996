//! Session error types

use thiserror::Error;

use chat_stream::StreamError;
use mkit_client::ClientError;

#[derive(Debug, Error)]
pub enum SessionError {
    /// A submission is already in flight; a new one may only begin from Idle.
    #[error("a submission is already in flight")]
    Busy,

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Stream(#[from] StreamError),
}
