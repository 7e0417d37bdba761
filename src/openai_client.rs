use reqwest::Client;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::error::{DailyBrewError, Result};

pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4";

#[derive(Serialize, Debug, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage {
            role: String::from("system"),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: String::from("user"),
            content: content.into(),
        }
    }
}

/// Thin client for an OpenAI compatible chat completions endpoint
#[derive(Debug, Clone)]
pub struct OpenAiChatClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiChatClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_OPENAI_API_URL)
    }

    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        OpenAiChatClient {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_owned(),
            model: DEFAULT_CHAT_MODEL.to_owned(),
        }
    }

    pub async fn chat_completion(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!("POST {}", url);

        let body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": temperature,
            "max_tokens": max_tokens,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let value: serde_json::Value = response.json().await?;
        extract_completion_text(&value).ok_or_else(|| {
            DailyBrewError::MalformedGeneration(String::from(
                "missing choices[0].message.content in chat completions response",
            ))
        })
    }
}

fn extract_completion_text(value: &serde_json::Value) -> Option<String> {
    value
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(|content| content.to_owned())
}
