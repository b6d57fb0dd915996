//! Chunk parser - turns one decoded line into a structured chunk
//!
//! Only `data: `-prefixed lines carry events. Malformed payloads are logged
//! and skipped; they never abort the stream.

use chat_core::StreamChunk;

/// Prefix marking an event-bearing line.
pub const EVENT_PREFIX: &str = "data: ";

/// Parse one decoded line.
///
/// Returns `None` for blank lines (silently), for lines without the event
/// prefix, and for payloads that fail to deserialize (logged).
pub fn parse_chunk_line(line: &str) -> Option<StreamChunk> {
    if line.trim().is_empty() {
        return None;
    }
    let payload = line.strip_prefix(EVENT_PREFIX)?;
    match serde_json::from_str::<StreamChunk>(payload) {
        Ok(chunk) => Some(chunk),
        Err(err) => {
            log::error!("Failed to parse stream chunk: {err}, line: {line}");
            None
        }
    }
}
