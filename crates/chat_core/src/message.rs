//! Message types - display and persisted message shapes
//!
//! The backend persists messages as `{Text, IsUser}` records; the client keeps
//! an ordered, append-only `ChatMessage` log where insertion order is display
//! order.

use serde::{Deserialize, Serialize};

/// One entry of the conversation log as the client displays it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    /// Message text. The trailing assistant message is the only one mutated
    /// while a response streams in; all earlier entries are immutable.
    pub content: String,
    pub is_user: bool,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_user: true,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_user: false,
        }
    }

    /// Empty assistant message appended before a stream delivers its first
    /// byte, mutated in place as chunks arrive.
    pub fn placeholder() -> Self {
        Self::assistant("")
    }
}

/// Persisted message record as the backend returns it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ApiChatMessage {
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "IsUser")]
    pub is_user: bool,
}

impl ApiChatMessage {
    /// Map the externally-named persisted record into the display shape.
    pub fn into_message(self) -> ChatMessage {
        ChatMessage {
            content: self.text,
            is_user: self.is_user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_message_uses_backend_field_names() {
        let msg: ApiChatMessage =
            serde_json::from_str(r#"{"Text":"hello","IsUser":true}"#).unwrap();
        assert_eq!(msg.text, "hello");
        assert!(msg.is_user);
    }

    #[test]
    fn into_message_maps_fields() {
        let msg = ApiChatMessage {
            text: "hi".to_string(),
            is_user: false,
        };
        assert_eq!(msg.into_message(), ChatMessage::assistant("hi"));
    }

    #[test]
    fn placeholder_is_empty_assistant_message() {
        let msg = ChatMessage::placeholder();
        assert!(msg.content.is_empty());
        assert!(!msg.is_user);
    }
}
