use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::error::{DailyBrewError, Result};

pub const DEFAULT_ELEVEN_LABS_API_URL: &str = "https://api.elevenlabs.io";
pub const DEFAULT_MODEL: &str = "eleven_monolingual_v1";

/// voice Rachel
pub const DEFAULT_ELEVEN_LABS_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";

#[derive(Deserialize, Serialize, Debug, Clone, Copy)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        VoiceSettings {
            stability: 0.5,
            similarity_boost: 0.5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ElevenLabsTtsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ElevenLabsTtsClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_ELEVEN_LABS_API_URL)
    }

    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        ElevenLabsTtsClient {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub async fn tts(
        &self,
        text: &str,
        voice_id: &str,
        voice_settings: Option<VoiceSettings>,
        model_id: &str,
    ) -> Result<Bytes> {
        let url = format!("{}/v1/text-to-speech/{}", self.base_url, voice_id);
        debug!("POST {}", url);

        let body = json!({
            "text": text,
            "model_id": model_id,
            "voice_settings": voice_settings.unwrap_or_default(),
        });

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .header("accept", "audio/mpeg")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DailyBrewError::SpeechSynthesisFailed(response.status()));
        }

        Ok(response.bytes().await?)
    }
}
