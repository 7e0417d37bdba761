use chrono::NaiveDate;
use daily_brew::content_generator::{ContentGenerator, FALLBACK_TITLE};
use daily_brew::content_library::{ContentLibrary, ScriptureVerse};
use daily_brew::devotional_service::DevotionalService;
use daily_brew::devotional_store::{Devotional, DevotionalStore};
use daily_brew::eleven_labs_client::{ElevenLabsTtsClient, DEFAULT_ELEVEN_LABS_VOICE_ID};
use daily_brew::narration_service::NarrationService;
use daily_brew::openai_client::OpenAiChatClient;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tempfile::TempDir;

const COFFEE_FACT: &str = "Coffee plants can live and produce coffee for over 100 years.";
const VERSE: &str = "Psalm 118:24";
const VERSE_TEXT: &str = "This is the day the Lord has made; we will rejoice and be glad in it.";

fn single_entry_library() -> ContentLibrary {
    ContentLibrary::new(
        vec![String::from(COFFEE_FACT)],
        vec![ScriptureVerse::new(VERSE, VERSE_TEXT)],
    )
}

fn chat_response() -> String {
    let content = json!({
        "title": "Brewed Awakening",
        "devotional_text": "A morning text about coffee and grace.",
        "reflection_question": "What wakes your soul today?",
        "prayer": "Lord, thank You for this morning. Amen.",
    })
    .to_string();
    json!({
        "model": "gpt-4",
        "choices": [{"message": {"role": "assistant", "content": content}}],
    })
    .to_string()
}

struct TestHarness {
    service: DevotionalService<StdRng>,
    output_dir: TempDir,
}

fn build_service(
    chat_server: &mockito::ServerGuard,
    tts_server: Option<&mockito::ServerGuard>,
) -> TestHarness {
    let output_dir = TempDir::new().unwrap();

    let chat_client =
        OpenAiChatClient::with_base_url(String::from("test-key"), &chat_server.url());
    let generator = ContentGenerator::new(chat_client);

    let tts_client = tts_server.map(|server| {
        ElevenLabsTtsClient::with_base_url(String::from("test-key"), &server.url())
    });
    let narrator = NarrationService::with_client(
        tts_client,
        &output_dir.path().join("audio"),
        "https://example.com/audio",
    );

    let store = DevotionalStore::new(&output_dir.path().join("devotionals"));

    let service = DevotionalService::new(
        single_entry_library(),
        generator,
        narrator,
        store,
        StdRng::seed_from_u64(7),
    );

    TestHarness {
        service,
        output_dir,
    }
}

#[tokio::test]
async fn full_run_writes_record_and_audio_then_skips_existing_date() {
    let mut chat_server = mockito::Server::new_async().await;
    let chat_mock = chat_server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_response())
        .expect(1)
        .create_async()
        .await;

    let mut tts_server = mockito::Server::new_async().await;
    let tts_mock = tts_server
        .mock(
            "POST",
            format!("/v1/text-to-speech/{}", DEFAULT_ELEVEN_LABS_VOICE_ID).as_str(),
        )
        .with_status(200)
        .with_header("content-type", "audio/mpeg")
        .with_body(b"fake mp3 payload")
        .expect(1)
        .create_async()
        .await;

    let mut harness = build_service(&chat_server, Some(&tts_server));
    let target_date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

    let written = harness
        .service
        .create_devotional(Some(target_date), false)
        .await
        .unwrap();

    let expected_path = harness
        .output_dir
        .path()
        .join("devotionals/2025/03/01.json");
    assert_eq!(written.as_deref(), Some(expected_path.as_path()));

    let raw = std::fs::read(&expected_path).unwrap();
    let record: Devotional = serde_json::from_slice(&raw).unwrap();
    assert_eq!(record.date, "2025-03-01");
    assert_eq!(record.title, "Brewed Awakening");
    assert_eq!(record.coffee_fact, COFFEE_FACT);
    assert_eq!(record.scripture.verse, VERSE);
    assert_eq!(record.scripture.text, VERSE_TEXT);
    assert_eq!(record.devotional_text, "A morning text about coffee and grace.");
    assert_eq!(record.reflection_question, "What wakes your soul today?");
    assert_eq!(record.prayer, "Lord, thank You for this morning. Amen.");
    assert_eq!(
        record.audio_url.as_deref(),
        Some("https://example.com/audio/2025-03-01.mp3")
    );

    // every record field is present in the stored JSON
    let value: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 8);

    assert!(harness
        .output_dir
        .path()
        .join("audio/2025-03-01.mp3")
        .exists());

    // second invocation for the same date makes no further calls
    // and leaves the record byte identical
    let skipped = harness
        .service
        .create_devotional(Some(target_date), false)
        .await
        .unwrap();
    assert_eq!(skipped, None);

    chat_mock.assert_async().await;
    tts_mock.assert_async().await;
    assert_eq!(std::fs::read(&expected_path).unwrap(), raw);
}

#[tokio::test]
async fn failed_generation_still_produces_a_fallback_record() {
    let mut chat_server = mockito::Server::new_async().await;
    let _chat_mock = chat_server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .create_async()
        .await;

    let mut harness = build_service(&chat_server, None);
    let target_date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

    let written = harness
        .service
        .create_devotional(Some(target_date), false)
        .await
        .unwrap()
        .expect("record should be written");

    let record: Devotional =
        serde_json::from_slice(&std::fs::read(written).unwrap()).unwrap();
    assert_eq!(record.title, FALLBACK_TITLE);
    assert!(record.devotional_text.contains(COFFEE_FACT));
    assert!(record.devotional_text.contains(VERSE_TEXT));
    // no narration credential configured
    assert_eq!(record.audio_url, None);
}

#[tokio::test]
async fn force_flag_regenerates_an_existing_record() {
    let mut chat_server = mockito::Server::new_async().await;
    let chat_mock = chat_server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_response())
        .expect(2)
        .create_async()
        .await;

    let mut harness = build_service(&chat_server, None);
    let target_date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

    let first = harness
        .service
        .create_devotional(Some(target_date), false)
        .await
        .unwrap();
    assert!(first.is_some());

    let second = harness
        .service
        .create_devotional(Some(target_date), true)
        .await
        .unwrap();
    assert!(second.is_some());

    chat_mock.assert_async().await;
}
