//! chat_stream - Incremental decoding of MKit streaming chat responses
//!
//! Extends `reqwest::Response` with a lazy stream of [`StreamChunk`]s decoded
//! from the backend's `data: {json}` line protocol:
//! - `decode` - splits raw transport buffers into complete text lines
//! - `parse` - turns one line into a structured chunk
//! - `accumulate` - folds chunks into the growing full answer
//! - `stream` - ties the three to a live response body

pub mod accumulate;
pub mod decode;
pub mod error;
pub mod parse;
pub mod stream;

pub use accumulate::{ChunkOutcome, ResponseAccumulator};
pub use chat_core::StreamChunk;
pub use decode::LineDecoder;
pub use error::StreamError;
pub use parse::parse_chunk_line;
pub use stream::{ChunkStreamExt, CHAT_UUID_HEADER};
