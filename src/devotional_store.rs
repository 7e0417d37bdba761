use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::content_library::ScriptureVerse;
use crate::error::Result;

/// The persisted daily record. Identity key is the date;
/// records are written once and never updated in place.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Devotional {
    pub date: String,
    pub title: String,
    pub coffee_fact: String,
    pub scripture: ScriptureVerse,
    pub devotional_text: String,
    pub reflection_question: String,
    pub prayer: String,
    pub audio_url: Option<String>,
}

/// Date partitioned JSON storage, one file per day under
/// `<root>/<year>/<month>/<day>.json`.
#[derive(Debug, Clone)]
pub struct DevotionalStore {
    dir_path: PathBuf,
}

impl DevotionalStore {
    pub fn new(dir_path: &Path) -> Self {
        DevotionalStore {
            dir_path: dir_path.to_owned(),
        }
    }

    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir_path
            .join(date.format("%Y").to_string())
            .join(date.format("%m").to_string())
            .join(format!("{}.json", date.format("%d")))
    }

    pub fn exists(&self, date: NaiveDate) -> bool {
        self.path_for(date).exists()
    }

    pub fn write(&self, devotional: &Devotional, date: NaiveDate) -> Result<PathBuf> {
        let path = self.path_for(date);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(devotional)?;

        // temporary name then rename, a record is never visible half written
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &path)?;

        info!("Devotional written to {:?}", path);
        Ok(path)
    }
}
