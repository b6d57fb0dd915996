//! Submission payload and synchronous answer types
//!
//! The backend distinguishes "unset" from explicit null, so every optional
//! payload field is skipped entirely when absent.

use serde::{Deserialize, Serialize};

/// Model tuning block forwarded to the backend untouched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ModelSettings {
    pub temperature: f64,
    #[serde(rename = "maxTokens")]
    pub max_tokens: u32,
    #[serde(rename = "topP")]
    pub top_p: f64,
    #[serde(rename = "topK")]
    pub top_k: u32,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 1000,
            top_p: 0.9,
            top_k: 50,
        }
    }
}

/// Server-side chunking knobs for a streaming submission.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamSettings {
    pub chunk_size: u32,
    pub delay_ms: u64,
}

/// Provider/model override, sent only when both halves were chosen.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProviderSelection {
    pub provider: String,
    #[serde(rename = "modelId")]
    pub model_id: String,
}

/// Body of `POST /api/v1/chats` and `POST /api/v1/chats/stream`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatPayload {
    pub question: String,
    #[serde(rename = "selectedTools")]
    pub selected_tools: Vec<String>,
    #[serde(rename = "modelSettings")]
    pub model_settings: ModelSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_settings: Option<StreamSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_uuid: Option<String>,
    #[serde(
        rename = "llmProvider",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub llm_provider: Option<ProviderSelection>,
}

/// Full answer returned by the synchronous submission path.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChatResponse {
    pub chat_uuid: String,
    pub answer: String,
    pub input_token: u32,
    pub output_token: u32,
}
