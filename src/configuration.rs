use secrecy::Secret;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

/// Use default config if no path is provided
pub fn get_configuration(config: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let mut builder = config::Config::builder();

    if let Some(config) = config {
        info!("Using configuration from {:?}", config);
        builder = builder.add_source(config::File::from(config));
    } else {
        info!("Using default configuration");
        builder = builder
            .add_source(config::File::with_name("configuration/settings").required(false))
            .add_source(config::File::with_name("configuration/dev_settings").required(false));
    }

    let settings = builder
        .add_source(config::Environment::with_prefix("APP"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: Secret<String>,
    #[serde(default)]
    pub eleven_labs_api_key: Option<Secret<String>>,
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,
    #[serde(default = "default_eleven_labs_base_url")]
    pub eleven_labs_base_url: String,
    #[serde(default = "default_audio_public_base_url")]
    pub audio_public_base_url: String,
    #[serde(default = "default_devotionals_dir")]
    pub devotionals_dir: PathBuf,
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,
}

fn default_openai_base_url() -> String {
    crate::openai_client::DEFAULT_OPENAI_API_URL.to_owned()
}

fn default_eleven_labs_base_url() -> String {
    crate::eleven_labs_client::DEFAULT_ELEVEN_LABS_API_URL.to_owned()
}

fn default_audio_public_base_url() -> String {
    String::from("https://raw.githubusercontent.com/dmweis/daily_brew/main/audio")
}

fn default_devotionals_dir() -> PathBuf {
    PathBuf::from("devotionals")
}

fn default_audio_dir() -> PathBuf {
    PathBuf::from("audio")
}
