//! Tool and LLM provider catalog DTOs
//!
//! The catalogs themselves are managed elsewhere; the client only lists them
//! to drive tool selection and provider overrides.

use serde::{Deserialize, Serialize};

/// A selectable backend tool.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Tool {
    pub name: String,
    pub description: String,
}

/// Paginated tool listing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ToolsList {
    #[serde(default)]
    pub tools: Vec<Tool>,
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
}

/// One model offered by a provider.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProviderModel {
    pub name: String,
    pub description: String,
    #[serde(rename = "modelId")]
    pub model_id: String,
}

/// An LLM provider and its models.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Provider {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Models", default)]
    pub models: Vec<ProviderModel>,
}

/// Paginated provider listing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProvidersList {
    #[serde(default)]
    pub providers: Vec<Provider>,
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_uses_backend_field_names() {
        let raw = r#"{"ID":"anthropic","Name":"Anthropic","Description":"Claude models","Models":[{"name":"Sonnet","description":"balanced","modelId":"claude-sonnet"}]}"#;
        let provider: Provider = serde_json::from_str(raw).unwrap();
        assert_eq!(provider.id, "anthropic");
        assert_eq!(provider.models[0].model_id, "claude-sonnet");
    }

    #[test]
    fn tools_list_deserializes() {
        let raw = r#"{"tools":[{"name":"search","description":"web search"}],"page":1,"per_page":10,"total":1}"#;
        let list: ToolsList = serde_json::from_str(raw).unwrap();
        assert_eq!(list.tools[0].name, "search");
    }
}
