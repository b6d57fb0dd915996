//! Streaming glue - ties decoder and parser to a live response body
//!
//! Mirrors the browser read loop: pull transport buffers, split into lines,
//! parse each line, stop as soon as the terminal chunk is seen even if bytes
//! remain unread. Dropping the stream releases the response body on every
//! exit path.

use async_stream::try_stream;
use futures_util::{Stream, StreamExt};
use reqwest::Response;

use chat_core::StreamChunk;

use crate::decode::LineDecoder;
use crate::error::StreamError;
use crate::parse::parse_chunk_line;

/// Response header optionally carrying the assigned conversation id.
pub const CHAT_UUID_HEADER: &str = "X-MKit-Chat-UUID";

/// Extends [`reqwest::Response`] with chat chunk streaming.
pub trait ChunkStreamExt {
    /// Conversation id assigned by the backend, if the header is present.
    fn chat_uuid_header(&self) -> Option<String>;

    /// Lazy, ordered stream of parsed chunks. Ends after yielding a terminal
    /// chunk, at end-of-input (flushing any unterminated tail line), or on a
    /// transport error.
    fn chunk_stream(self) -> impl Stream<Item = Result<StreamChunk, StreamError>> + Send;
}

impl ChunkStreamExt for Response {
    fn chat_uuid_header(&self) -> Option<String> {
        self.headers()
            .get(CHAT_UUID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    }

    fn chunk_stream(self) -> impl Stream<Item = Result<StreamChunk, StreamError>> + Send {
        let mut body = self.bytes_stream();
        try_stream! {
            let mut decoder = LineDecoder::new();
            let mut finished = false;
            while !finished {
                let buffer = match body.next().await {
                    Some(buffer) => buffer.map_err(StreamError::Transport)?,
                    None => break,
                };
                for line in decoder.push(&buffer) {
                    if let Some(chunk) = parse_chunk_line(&line) {
                        let is_final = chunk.is_final();
                        yield chunk;
                        if is_final {
                            // Terminate immediately; unread bytes stay unread.
                            finished = true;
                            break;
                        }
                    }
                }
            }
            if !finished {
                if let Some(tail) = decoder.finish() {
                    if let Some(chunk) = parse_chunk_line(&tail) {
                        yield chunk;
                    }
                }
            }
        }
    }
}
