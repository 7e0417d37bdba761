use thiserror::Error;

pub(crate) type Result<T> = std::result::Result<T, DailyBrewError>;

#[derive(Error, Debug)]
pub enum DailyBrewError {
    #[error("io error")]
    IoError(#[from] std::io::Error),
    #[error("http request failed")]
    HttpError(#[from] reqwest::Error),
    #[error("text generation returned an unusable response: {0}")]
    MalformedGeneration(String),
    #[error("speech synthesis failed with status {0}")]
    SpeechSynthesisFailed(reqwest::StatusCode),
    #[error("serialisation error")]
    SerializationError(#[from] serde_json::Error),
}
