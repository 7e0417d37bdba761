use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use rand::Rng;
use std::path::PathBuf;
use tracing::info;

use crate::content_generator::ContentGenerator;
use crate::content_library::ContentLibrary;
use crate::devotional_store::{Devotional, DevotionalStore};
use crate::narration_service::NarrationService;

/// Assembles one devotional per calendar date.
///
/// The existence check on the day's file is the only idempotence
/// mechanism. Two invocations racing for the same date can both pass
/// the check; the design assumes one invocation per date.
pub struct DevotionalService<R: Rng> {
    library: ContentLibrary,
    generator: ContentGenerator,
    narrator: NarrationService,
    store: DevotionalStore,
    rng: R,
}

impl<R: Rng> DevotionalService<R> {
    pub fn new(
        library: ContentLibrary,
        generator: ContentGenerator,
        narrator: NarrationService,
        store: DevotionalStore,
        rng: R,
    ) -> Self {
        DevotionalService {
            library,
            generator,
            narrator,
            store,
            rng,
        }
    }

    /// Creates and persists the devotional for `target_date` (today when
    /// `None`). Returns the written path, or `None` when the date already
    /// has a record and `force` is not set.
    pub async fn create_devotional(
        &mut self,
        target_date: Option<NaiveDate>,
        force: bool,
    ) -> Result<Option<PathBuf>> {
        let date = target_date.unwrap_or_else(|| Local::now().date_naive());
        let date_str = date.format("%Y-%m-%d").to_string();

        if self.store.exists(date) {
            if force {
                info!("Devotional for {} already exists, regenerating", date_str);
            } else {
                info!("Devotional for {} already exists", date_str);
                return Ok(None);
            }
        }

        info!("Generating devotional for {}...", date_str);

        let coffee_fact = self
            .library
            .pick_coffee_fact(&mut self.rng)
            .context("coffee fact table is empty")?
            .to_owned();
        let scripture = self
            .library
            .pick_morning_verse(&mut self.rng)
            .context("morning verse table is empty")?
            .clone();

        let content = self
            .generator
            .generate(&date_str, &coffee_fact, &scripture)
            .await;

        let narration_text = format!(
            "{} {} {}",
            content.devotional_text, content.reflection_question, content.prayer
        );
        let audio_url = self.narrator.narrate(&narration_text, &date_str).await;

        let devotional = Devotional {
            date: date_str,
            title: content.title,
            coffee_fact,
            scripture,
            devotional_text: content.devotional_text,
            reflection_question: content.reflection_question,
            prayer: content.prayer,
            audio_url,
        };

        let path = self.store.write(&devotional, date)?;

        info!("Title: {}", devotional.title);
        info!("Scripture: {}", devotional.scripture.verse);
        Ok(Some(path))
    }
}
