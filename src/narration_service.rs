use secrecy::{ExposeSecret, Secret};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

use crate::eleven_labs_client::{
    ElevenLabsTtsClient, VoiceSettings, DEFAULT_ELEVEN_LABS_VOICE_ID, DEFAULT_MODEL,
};
use crate::AUDIO_FILE_EXTENSION;

const NARRATION_INTRO: &str = "Good morning! Welcome to today's HeBrews devotional.";
const NARRATION_CLOSING: &str =
    "Take a moment to reflect on this as you enjoy your coffee today. Have a blessed day!";

/// Narration is best effort. Without a configured key it silently
/// stays disabled and every synthesis failure degrades to no audio.
#[derive(Debug, Clone)]
pub struct NarrationService {
    tts_client: Option<ElevenLabsTtsClient>,
    audio_dir: PathBuf,
    public_base_url: String,
    voice_id: String,
}

impl NarrationService {
    pub fn new(
        eleven_labs_api_key: Option<Secret<String>>,
        eleven_labs_base_url: &str,
        audio_dir: &Path,
        public_base_url: &str,
    ) -> Self {
        let tts_client = eleven_labs_api_key.map(|key| {
            ElevenLabsTtsClient::with_base_url(
                key.expose_secret().to_owned(),
                eleven_labs_base_url,
            )
        });
        Self::with_client(tts_client, audio_dir, public_base_url)
    }

    pub fn with_client(
        tts_client: Option<ElevenLabsTtsClient>,
        audio_dir: &Path,
        public_base_url: &str,
    ) -> Self {
        NarrationService {
            tts_client,
            audio_dir: audio_dir.to_owned(),
            public_base_url: public_base_url.trim_end_matches('/').to_owned(),
            voice_id: DEFAULT_ELEVEN_LABS_VOICE_ID.to_owned(),
        }
    }

    /// Returns the expected published location of the narration audio,
    /// or `None` when narration is disabled or synthesis failed.
    pub async fn narrate(&self, devotional_text: &str, date_str: &str) -> Option<String> {
        let tts_client = match &self.tts_client {
            Some(client) => client,
            None => {
                info!("No speech synthesis key configured, skipping narration");
                return None;
            }
        };

        let full_text = format!(
            "{}\n\n{}\n\n{}",
            NARRATION_INTRO, devotional_text, NARRATION_CLOSING
        );

        let data = match tts_client
            .tts(
                &full_text,
                &self.voice_id,
                Some(VoiceSettings::default()),
                DEFAULT_MODEL,
            )
            .await
        {
            Ok(data) => data,
            Err(error) => {
                warn!("Narration synthesis failed: {}", error);
                return None;
            }
        };

        if let Err(error) = self.store_audio(date_str, &data).await {
            warn!("Failed to store narration audio: {}", error);
            return None;
        }

        // The record points at where the file will be published.
        // Nothing verifies the upload actually happened.
        Some(format!(
            "{}/{}.{}",
            self.public_base_url, date_str, AUDIO_FILE_EXTENSION
        ))
    }

    async fn store_audio(&self, date_str: &str, data: &[u8]) -> crate::error::Result<()> {
        fs::create_dir_all(&self.audio_dir).await?;
        let audio_path = self
            .audio_dir
            .join(format!("{}.{}", date_str, AUDIO_FILE_EXTENSION));
        fs::write(&audio_path, data).await?;
        info!("Narration audio written to {:?}", audio_path);
        Ok(())
    }
}
