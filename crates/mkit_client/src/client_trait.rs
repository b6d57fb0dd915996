use async_trait::async_trait;
use reqwest::Response;

use chat_core::{ChatHistoryMessages, ChatPayload, ChatResponse, PaginatedChatHistories, Tool};

use crate::error::ClientError;

/// Backend seam the conversation core talks through.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// `GET /api/v1/chats` - paginated listing of persisted conversations.
    async fn get_chat_histories(&self) -> Result<PaginatedChatHistories, ClientError>;

    /// `GET /api/v1/chats/{id}` - persisted messages of one conversation.
    async fn load_chat_history(&self, chat_id: &str) -> Result<ChatHistoryMessages, ClientError>;

    /// `POST /api/v1/chats` - synchronous submission, full answer in one shot.
    async fn send_message(&self, payload: &ChatPayload) -> Result<ChatResponse, ClientError>;

    /// `POST /api/v1/chats/stream` - streaming submission. Returns the raw
    /// response so the caller can read the conversation-id header and wire
    /// the chunk decoder to the body.
    async fn send_stream_message(&self, payload: &ChatPayload) -> Result<Response, ClientError>;
}

/// Tool catalog collaborator.
#[async_trait]
pub trait ToolCatalog: Send + Sync {
    async fn list_tools(&self) -> Result<Vec<Tool>, ClientError>;
}
