//! chat_core - Core types and wire contracts for the MKit chat client
//!
//! This crate provides the foundational types used across all chat-related crates:
//! - `message` - display and persisted message shapes
//! - `chunk` - streamed response chunks
//! - `payload` - submission payload and synchronous answer
//! - `history` - chat history listing DTOs
//! - `catalog` - tool and LLM provider catalog DTOs
//! - `notify` - notification collaborator contract
//! - `config` - backend endpoint configuration

pub mod catalog;
pub mod chunk;
pub mod config;
pub mod history;
pub mod message;
pub mod notify;
pub mod payload;

// Re-export commonly used types
pub use catalog::{Provider, ProviderModel, ProvidersList, Tool, ToolsList};
pub use chunk::StreamChunk;
pub use config::ClientConfig;
pub use history::{ChatHistory, ChatHistoryMessages, PaginatedChatHistories};
pub use message::{ApiChatMessage, ChatMessage};
pub use notify::{NotificationKind, NotificationSink};
pub use payload::{ChatPayload, ChatResponse, ModelSettings, ProviderSelection, StreamSettings};
