//! Response accumulator - folds chunks into the growing full answer
//!
//! One accumulator exists per streaming submission. Every update carries the
//! full cumulative text, never a delta, so the consumer replaces the trailing
//! assistant message instead of appending to it.

use chat_core::StreamChunk;

/// What applying one chunk did to the accumulated answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkOutcome {
    /// A fragment was folded in; carries the full accumulated text.
    Updated(String),
    /// The terminal chunk was seen; the read loop must stop. The terminal
    /// chunk's own fragment is not folded - fixed contract.
    Completed,
    /// Nothing to apply (no fragment, or the stream already completed).
    Ignored,
}

/// Running buffer of one streaming response.
#[derive(Debug, Default)]
pub struct ResponseAccumulator {
    content: String,
    completed: bool,
}

impl ResponseAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one chunk. An empty-string fragment still counts as an update
    /// (keep-alives re-emit the unchanged buffer).
    pub fn apply(&mut self, chunk: &StreamChunk) -> ChunkOutcome {
        if self.completed {
            return ChunkOutcome::Ignored;
        }
        if chunk.is_final() {
            self.completed = true;
            return ChunkOutcome::Completed;
        }
        if let Some(meta_key) = &chunk.meta_key {
            log::debug!("stream chunk meta_key: {meta_key}");
        }
        match &chunk.content {
            Some(fragment) => {
                self.content.push_str(fragment);
                ChunkOutcome::Updated(self.content.clone())
            }
            None => ChunkOutcome::Ignored,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}
