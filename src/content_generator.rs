use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::content_library::ScriptureVerse;
use crate::error::{DailyBrewError, Result};
use crate::openai_client::{ChatMessage, OpenAiChatClient};

const GENERATION_TEMPERATURE: f32 = 0.7;
const GENERATION_MAX_TOKENS: u32 = 800;

pub const FALLBACK_TITLE: &str = "Morning Strength";

const SYSTEM_PERSONA: &str = "You are a warm, encouraging Christian devotional writer \
    who loves coffee and helping people connect with God in their daily routines.";

/// Either AI generated or produced by the fallback template.
/// Both producers guarantee the same four non-empty fields.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GeneratedContent {
    pub title: String,
    pub devotional_text: String,
    pub reflection_question: String,
    pub prayer: String,
}

#[derive(Debug, Clone)]
pub struct ContentGenerator {
    chat_client: OpenAiChatClient,
}

impl ContentGenerator {
    pub fn new(chat_client: OpenAiChatClient) -> Self {
        ContentGenerator { chat_client }
    }

    /// Generation failures are always recovered locally with the
    /// fallback template. This method never errors.
    pub async fn generate(
        &self,
        date_str: &str,
        coffee_fact: &str,
        scripture: &ScriptureVerse,
    ) -> GeneratedContent {
        match self.try_generate(date_str, coffee_fact, scripture).await {
            Ok(content) => {
                info!("Generated devotional content");
                content
            }
            Err(error) => {
                warn!("Devotional generation failed, using fallback: {}", error);
                fallback_devotional(coffee_fact, scripture)
            }
        }
    }

    async fn try_generate(
        &self,
        date_str: &str,
        coffee_fact: &str,
        scripture: &ScriptureVerse,
    ) -> Result<GeneratedContent> {
        let messages = [
            ChatMessage::system(SYSTEM_PERSONA),
            ChatMessage::user(build_prompt(date_str, coffee_fact, scripture)),
        ];

        let completion = self
            .chat_client
            .chat_completion(&messages, GENERATION_TEMPERATURE, GENERATION_MAX_TOKENS)
            .await?;

        parse_generated_content(&completion)
    }
}

fn build_prompt(date_str: &str, coffee_fact: &str, scripture: &ScriptureVerse) -> String {
    format!(
        "Create a warm, encouraging daily devotional for the HeBrews app that connects coffee and faith.\n\
         \n\
         Date: {date_str}\n\
         Coffee Fact: {coffee_fact}\n\
         Scripture: {verse} - \"{text}\"\n\
         \n\
         Write a devotional that:\n\
         1. Starts with a relatable morning coffee scenario\n\
         2. Connects the coffee fact or brewing process to a spiritual truth\n\
         3. Reflects on how the scripture applies to daily life\n\
         4. Uses warm, conversational tone (like talking to a friend over coffee)\n\
         5. Is 200-300 words long\n\
         6. Ends with encouragement for the day ahead\n\
         \n\
         Also provide:\n\
         - A compelling title (3-5 words)\n\
         - A reflection question that helps readers apply the devotional\n\
         - A short prayer (2-3 sentences)\n\
         \n\
         Format as JSON with keys: title, devotional_text, reflection_question, prayer",
        date_str = date_str,
        coffee_fact = coffee_fact,
        verse = scripture.verse,
        text = scripture.text,
    )
}

fn parse_generated_content(completion: &str) -> Result<GeneratedContent> {
    let content: GeneratedContent = serde_json::from_str(strip_code_fence(completion))?;

    for (field, value) in [
        ("title", &content.title),
        ("devotional_text", &content.devotional_text),
        ("reflection_question", &content.reflection_question),
        ("prayer", &content.prayer),
    ] {
        if value.trim().is_empty() {
            return Err(DailyBrewError::MalformedGeneration(format!(
                "field {} is empty",
                field
            )));
        }
    }

    Ok(content)
}

/// Models sometimes wrap the requested JSON in a markdown code fence
fn strip_code_fence(completion: &str) -> &str {
    let mut stripped = completion.trim();
    if let Some(rest) = stripped
        .strip_prefix("```json")
        .or_else(|| stripped.strip_prefix("```"))
    {
        stripped = rest;
    }
    if let Some(rest) = stripped.trim_end().strip_suffix("```") {
        stripped = rest;
    }
    stripped.trim()
}

pub fn fallback_devotional(coffee_fact: &str, scripture: &ScriptureVerse) -> GeneratedContent {
    GeneratedContent {
        title: FALLBACK_TITLE.to_owned(),
        devotional_text: format!(
            "As you enjoy your morning coffee today, remember that just as coffee awakens \
             our bodies, God's Word awakens our souls. {} In the same way, God's love for \
             us is rich, complex, and perfectly prepared for each new day. {} Let this \
             truth energize you more than any cup of coffee ever could.",
            coffee_fact, scripture.text
        ),
        reflection_question: String::from("How can you find strength in God's promises today?"),
        prayer: String::from(
            "Lord, thank You for this new day and Your faithful love. \
             Help me to find my strength in You. Amen.",
        ),
    }
}
