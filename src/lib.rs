pub mod configuration;
pub mod content_generator;
pub mod content_library;
pub mod devotional_service;
pub mod devotional_store;
pub mod eleven_labs_client;
pub mod error;
pub mod logging;
pub mod narration_service;
pub mod openai_client;

const AUDIO_FILE_EXTENSION: &str = "mp3";
