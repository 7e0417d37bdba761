use daily_brew::eleven_labs_client::{ElevenLabsTtsClient, DEFAULT_ELEVEN_LABS_VOICE_ID};
use daily_brew::narration_service::NarrationService;
use tempfile::TempDir;

const AUDIO_BYTES: &[u8] = b"fake mp3 payload";
const PUBLIC_BASE_URL: &str = "https://example.com/audio";

fn tts_path() -> String {
    format!("/v1/text-to-speech/{}", DEFAULT_ELEVEN_LABS_VOICE_ID)
}

#[tokio::test]
async fn missing_credential_skips_narration_without_any_http_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", tts_path().as_str())
        .expect(0)
        .create_async()
        .await;

    let audio_dir = TempDir::new().unwrap();
    let narrator = NarrationService::with_client(None, audio_dir.path(), PUBLIC_BASE_URL);

    let audio_url = narrator.narrate("some devotional text", "2025-03-01").await;

    mock.assert_async().await;
    assert_eq!(audio_url, None);
    assert!(!audio_dir.path().join("2025-03-01.mp3").exists());
}

#[tokio::test]
async fn synthesis_failure_returns_no_audio_and_writes_no_file() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", tts_path().as_str())
        .with_status(401)
        .expect(1)
        .create_async()
        .await;

    let audio_dir = TempDir::new().unwrap();
    let tts_client =
        ElevenLabsTtsClient::with_base_url(String::from("bad-key"), &server.url());
    let narrator =
        NarrationService::with_client(Some(tts_client), audio_dir.path(), PUBLIC_BASE_URL);

    let audio_url = narrator.narrate("some devotional text", "2025-03-01").await;

    mock.assert_async().await;
    assert_eq!(audio_url, None);
    assert!(!audio_dir.path().join("2025-03-01.mp3").exists());
}

#[tokio::test]
async fn successful_synthesis_stores_audio_and_returns_published_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", tts_path().as_str())
        .match_header("xi-api-key", "test-key")
        .with_status(200)
        .with_header("content-type", "audio/mpeg")
        .with_body(AUDIO_BYTES)
        .expect(1)
        .create_async()
        .await;

    let audio_dir = TempDir::new().unwrap();
    let tts_client =
        ElevenLabsTtsClient::with_base_url(String::from("test-key"), &server.url());
    let narrator =
        NarrationService::with_client(Some(tts_client), audio_dir.path(), PUBLIC_BASE_URL);

    let audio_url = narrator.narrate("some devotional text", "2025-03-01").await;

    mock.assert_async().await;
    assert_eq!(
        audio_url.as_deref(),
        Some("https://example.com/audio/2025-03-01.mp3")
    );

    let stored = std::fs::read(audio_dir.path().join("2025-03-01.mp3")).unwrap();
    assert_eq!(stored, AUDIO_BYTES);
}
