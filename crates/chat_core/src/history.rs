//! Chat history listing DTOs
//!
//! Shapes returned by `GET /api/v1/chats` and `GET /api/v1/chats/{id}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::message::ApiChatMessage;

const TITLE_MAX_CHARS: usize = 30;

/// One persisted conversation as listed by the backend.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatHistory {
    pub id: String,
    #[serde(default)]
    pub messages: Vec<ApiChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ChatHistory {
    /// Sidebar title: the first message, truncated to 30 characters.
    pub fn title(&self) -> String {
        let first = self
            .messages
            .first()
            .map(|msg| msg.text.trim())
            .unwrap_or("");
        if first.is_empty() {
            return "Untitled Chat".to_string();
        }
        if first.chars().count() > TITLE_MAX_CHARS {
            let truncated: String = first.chars().take(TITLE_MAX_CHARS).collect();
            format!("{truncated}...")
        } else {
            first.to_string()
        }
    }
}

/// Paginated listing of persisted conversations.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PaginatedChatHistories {
    #[serde(default)]
    pub chats: Vec<ChatHistory>,
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
}

/// Message list of a single persisted conversation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatHistoryMessages {
    #[serde(default)]
    pub messages: Vec<ApiChatMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_with(text: &str) -> ChatHistory {
        ChatHistory {
            id: "c1".to_string(),
            messages: vec![ApiChatMessage {
                text: text.to_string(),
                is_user: true,
            }],
            created_at: None,
        }
    }

    #[test]
    fn title_of_empty_history_is_untitled() {
        let history = ChatHistory {
            id: "c1".to_string(),
            messages: Vec::new(),
            created_at: None,
        };
        assert_eq!(history.title(), "Untitled Chat");
        assert_eq!(history_with("   ").title(), "Untitled Chat");
    }

    #[test]
    fn short_title_is_kept_verbatim() {
        assert_eq!(history_with(" How do I sort?  ").title(), "How do I sort?");
    }

    #[test]
    fn long_title_is_truncated_with_ellipsis() {
        let title = history_with("a very long first message that keeps going on").title();
        assert_eq!(title, "a very long first message that...");
        assert_eq!(title.chars().count(), TITLE_MAX_CHARS + 3);
    }

    #[test]
    fn truncation_respects_character_boundaries() {
        let text = "ü".repeat(40);
        let title = history_with(&text).title();
        assert_eq!(title.chars().count(), TITLE_MAX_CHARS + 3);
    }

    #[test]
    fn paginated_listing_deserializes() {
        let raw = r#"{"chats":[{"id":"c1","messages":[{"Text":"hi","IsUser":true}]}],"page":1,"per_page":20,"total":1}"#;
        let listing: PaginatedChatHistories = serde_json::from_str(raw).unwrap();
        assert_eq!(listing.chats.len(), 1);
        assert_eq!(listing.chats[0].title(), "hi");
    }
}
