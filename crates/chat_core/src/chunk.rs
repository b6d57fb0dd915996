//! StreamChunk - one unit of a streamed response
//!
//! Wire format: `{"content": "...", "meta_key": "...", "done": true}` where
//! every field may be absent. An empty `content` string is a valid fragment
//! (keep-alives) and is distinct from an absent one.

use serde::{Deserialize, Serialize};

/// A single decoded event from the chat stream.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct StreamChunk {
    /// Incremental piece of the assistant's answer. `Some("")` still counts
    /// as a fragment and must trigger an accumulation step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Out-of-band metadata marker attached by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_key: Option<String>,

    /// Set on the terminal chunk of a stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

impl StreamChunk {
    pub fn fragment(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn finished() -> Self {
        Self {
            done: Some(true),
            ..Self::default()
        }
    }

    /// Whether this chunk terminates the stream.
    pub fn is_final(&self) -> bool {
        self.done == Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_is_distinct_from_absent() {
        let with_empty: StreamChunk = serde_json::from_str(r#"{"content":""}"#).unwrap();
        let without: StreamChunk = serde_json::from_str(r#"{"done":true}"#).unwrap();
        assert_eq!(with_empty.content.as_deref(), Some(""));
        assert_eq!(without.content, None);
    }

    #[test]
    fn done_flag_marks_final_chunk() {
        assert!(StreamChunk::finished().is_final());
        assert!(!StreamChunk::fragment("x").is_final());
        let explicit_false: StreamChunk = serde_json::from_str(r#"{"done":false}"#).unwrap();
        assert!(!explicit_false.is_final());
    }

    #[test]
    fn unset_fields_are_omitted_when_serialized() {
        let json = serde_json::to_string(&StreamChunk::fragment("He")).unwrap();
        assert_eq!(json, r#"{"content":"He"}"#);
    }
}
