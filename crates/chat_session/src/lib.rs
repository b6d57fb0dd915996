//! chat_session - Conversation orchestration for the MKit chat client
//!
//! Owns the ordered message log and drives one submission at a time through
//! either the synchronous or the streaming path, reconciling streamed chunks
//! into the trailing assistant message and persisted history into the log.

pub mod error;
pub mod session;

pub use error::SessionError;
pub use session::{ChatSession, SubmitOptions};
