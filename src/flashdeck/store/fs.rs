use super::DataStore;
use crate::error::{FlashdeckError, Result};
use crate::model::{Deck, ReviewLog};
use crate::session::ReviewRecorder;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

const DECKS_FILE: &str = "decks.json";
const REVIEWS_FILE: &str = "reviews.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(FlashdeckError::Io)?;
        }
        Ok(())
    }

    fn load_json<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T> {
        let path = self.root.join(name);
        if !path.exists() {
            return Ok(T::default());
        }
        let content = fs::read_to_string(&path).map_err(FlashdeckError::Io)?;
        if content.trim().is_empty() {
            return Ok(T::default());
        }
        serde_json::from_str(&content).map_err(FlashdeckError::Serialization)
    }

    /// Write through a sibling temp file so a crash never leaves half a file behind.
    fn save_json<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let path = self.root.join(name);
        let tmp = self.root.join(format!(".{}.tmp", name));
        let content = serde_json::to_string_pretty(value).map_err(FlashdeckError::Serialization)?;
        fs::write(&tmp, content).map_err(FlashdeckError::Io)?;
        fs::rename(&tmp, &path).map_err(FlashdeckError::Io)?;
        debug!(path = %path.display(), "wrote store file");
        Ok(())
    }

    fn load_decks(&self) -> Result<HashMap<Uuid, Deck>> {
        self.load_json(DECKS_FILE)
    }
}

impl ReviewRecorder for FileStore {
    fn record_review(&mut self, day: NaiveDate) -> Result<()> {
        let mut logs: Vec<ReviewLog> = self.load_json(REVIEWS_FILE)?;
        match logs.iter_mut().find(|log| log.date == day) {
            Some(log) => log.count += 1,
            None => logs.push(ReviewLog { date: day, count: 1 }),
        }
        self.save_json(REVIEWS_FILE, &logs)
    }
}

impl DataStore for FileStore {
    fn save_deck(&mut self, deck: &Deck) -> Result<()> {
        let mut decks = self.load_decks()?;
        decks.insert(deck.id, deck.clone());
        self.save_json(DECKS_FILE, &decks)
    }

    fn get_deck(&self, id: &Uuid) -> Result<Deck> {
        self.load_decks()?
            .remove(id)
            .ok_or_else(|| FlashdeckError::DeckNotFound(id.to_string()))
    }

    fn list_decks(&self) -> Result<Vec<Deck>> {
        Ok(self.load_decks()?.into_values().collect())
    }

    fn review_logs(&self) -> Result<Vec<ReviewLog>> {
        let mut logs: Vec<ReviewLog> = self.load_json(REVIEWS_FILE)?;
        logs.sort_by_key(|log| log.date);
        Ok(logs)
    }
}
