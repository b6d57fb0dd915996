//! MkitClient - the concrete HTTP client
//!
//! One shared `reqwest::Client` built in the constructor; the backend
//! endpoint is an explicit [`ClientConfig`] value, not ambient environment.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use chat_core::{
    ChatHistoryMessages, ChatPayload, ChatResponse, ClientConfig, PaginatedChatHistories,
    ProvidersList, Tool, ToolsList,
};

use crate::client_trait::{ChatBackend, ToolCatalog};
use crate::error::ClientError;

const CHATS_PATH: &str = "/api/v1/chats";
const TOOLS_PATH: &str = "/api/v1/tools";
const PROVIDERS_PATH: &str = "/api/v1/llm-providers";

#[derive(Debug, Clone)]
pub struct MkitClient {
    http: Client,
    config: ClientConfig,
}

impl MkitClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .default_headers(Self::default_headers())
            .build()?;
        Ok(Self { http, config })
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, "application/json".parse().unwrap());
        headers.insert(CONTENT_TYPE, "application/json".parse().unwrap());
        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    /// Map a non-success response to [`ClientError::Api`], pulling the
    /// message out of a `{"error": ...}` / `{"message": ...}` envelope when
    /// the backend sent one.
    async fn check_status(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| {
                value
                    .get("error")
                    .or_else(|| value.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        response
            .json::<T>()
            .await
            .map_err(|err| ClientError::Body(err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        log::debug!("GET {path}");
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode_json(Self::check_status(response).await?).await
    }

    /// `GET /api/v1/llm-providers` - provider/model catalog for overrides.
    pub async fn get_providers(&self) -> Result<ProvidersList, ClientError> {
        self.get_json(PROVIDERS_PATH).await
    }
}

#[async_trait]
impl ChatBackend for MkitClient {
    async fn get_chat_histories(&self) -> Result<PaginatedChatHistories, ClientError> {
        self.get_json(CHATS_PATH).await
    }

    async fn load_chat_history(&self, chat_id: &str) -> Result<ChatHistoryMessages, ClientError> {
        self.get_json(&format!("{CHATS_PATH}/{chat_id}")).await
    }

    async fn send_message(&self, payload: &ChatPayload) -> Result<ChatResponse, ClientError> {
        log::debug!("POST {CHATS_PATH}");
        let response = self.http.post(self.url(CHATS_PATH)).json(payload).send().await?;
        Self::decode_json(Self::check_status(response).await?).await
    }

    async fn send_stream_message(&self, payload: &ChatPayload) -> Result<Response, ClientError> {
        let path = format!("{CHATS_PATH}/stream");
        log::debug!("POST {path}");
        let response = self.http.post(self.url(&path)).json(payload).send().await?;
        Self::check_status(response).await
    }
}

#[async_trait]
impl ToolCatalog for MkitClient {
    async fn list_tools(&self) -> Result<Vec<Tool>, ClientError> {
        let listing: ToolsList = self.get_json(TOOLS_PATH).await?;
        Ok(listing.tools)
    }
}
