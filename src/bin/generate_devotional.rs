use chrono::NaiveDate;
use clap::Parser;
use daily_brew::{
    configuration::get_configuration,
    content_generator::ContentGenerator,
    content_library::ContentLibrary,
    devotional_service::DevotionalService,
    devotional_store::DevotionalStore,
    logging::setup_tracing,
    narration_service::NarrationService,
    openai_client::OpenAiChatClient,
};
use secrecy::ExposeSecret;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Generates the daily coffee devotional")]
struct Args {
    /// Target date (YYYY-MM-DD), defaults to today
    #[clap(long)]
    date: Option<NaiveDate>,
    /// Regenerate even if the devotional for the date already exists
    #[clap(long)]
    force: bool,
    #[clap(long)]
    config: Option<PathBuf>,
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_tracing(args.verbose);

    let app_config = get_configuration(args.config)?;
    if app_config.openai_api_key.expose_secret().is_empty() {
        anyhow::bail!("openai_api_key is not configured");
    }

    let chat_client = OpenAiChatClient::with_base_url(
        app_config.openai_api_key.expose_secret().to_owned(),
        &app_config.openai_base_url,
    );
    let generator = ContentGenerator::new(chat_client);

    let narrator = NarrationService::new(
        app_config
            .eleven_labs_api_key
            .filter(|key| !key.expose_secret().is_empty()),
        &app_config.eleven_labs_base_url,
        &app_config.audio_dir,
        &app_config.audio_public_base_url,
    );

    let store = DevotionalStore::new(&app_config.devotionals_dir);

    let mut service = DevotionalService::new(
        ContentLibrary::bundled(),
        generator,
        narrator,
        store,
        rand::thread_rng(),
    );

    match service.create_devotional(args.date, args.force).await? {
        Some(path) => info!("Daily devotional generation completed: {:?}", path),
        None => info!("Nothing to do"),
    }

    Ok(())
}
