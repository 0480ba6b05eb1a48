//! Load decks from JSON files.
//!
//! Accepts the same shape the file store writes, either a single deck or an array of decks.
//! Scheduling fields may be left out; such cards start as new cards due immediately.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashdeckError, Result};
use crate::model::{Card, Deck, INITIAL_EASE_FACTOR, MAX_INTERVAL_DAYS, MIN_EASE_FACTOR};
use crate::store::DataStore;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImportFile {
    Many(Vec<ImportDeck>),
    One(ImportDeck),
}

#[derive(Debug, Deserialize)]
struct ImportDeck {
    id: Option<Uuid>,
    name: String,
    #[serde(default)]
    cards: Vec<ImportCard>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportCard {
    id: Option<Uuid>,
    front: String,
    back: String,
    last_reviewed: Option<DateTime<Utc>>,
    next_review: Option<DateTime<Utc>>,
    interval: Option<f64>,
    ease_factor: Option<f64>,
}

impl ImportCard {
    fn into_card(self, now: DateTime<Utc>) -> Card {
        // A reviewed card has an interval of at least a day; an unreviewed one has none.
        let interval = match self.last_reviewed {
            Some(_) => self.interval.unwrap_or(1.0).clamp(1.0, MAX_INTERVAL_DAYS),
            None => 0.0,
        };
        Card {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            front: self.front,
            back: self.back,
            last_reviewed: self.last_reviewed,
            next_review: self.next_review.unwrap_or(now),
            interval,
            ease_factor: self
                .ease_factor
                .unwrap_or(INITIAL_EASE_FACTOR)
                .max(MIN_EASE_FACTOR),
        }
    }
}

impl ImportDeck {
    fn into_deck(self, now: DateTime<Utc>) -> Deck {
        let mut seen = HashSet::new();
        let cards = self
            .cards
            .into_iter()
            .map(|c| {
                let mut card = c.into_card(now);
                if !seen.insert(card.id) {
                    warn!(card = %card.id, "duplicate card id in import, assigning a new one");
                    card.id = Uuid::new_v4();
                    seen.insert(card.id);
                }
                card
            })
            .collect();
        Deck {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name,
            cards,
        }
    }
}

pub fn run<S: DataStore>(
    store: &mut S,
    paths: Vec<PathBuf>,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut imported = 0;

    for path in paths {
        let files = if path.is_dir() {
            json_files_in(&path)?
        } else if path.is_file() {
            vec![path]
        } else {
            result.add_message(CmdMessage::warning(format!(
                "Path not found: {}",
                path.display()
            )));
            continue;
        };

        for file in files {
            match import_file(store, &file, now, &mut result) {
                Ok(count) => imported += count,
                Err(e) => result.add_message(CmdMessage::warning(format!(
                    "Failed to import {}: {}",
                    file.display(),
                    e
                ))),
            }
        }
    }

    result.add_message(CmdMessage::success(format!(
        "Total decks imported: {}",
        imported
    )));
    Ok(result)
}

fn json_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(FlashdeckError::Io)? {
        let path = entry.map_err(FlashdeckError::Io)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn import_file<S: DataStore>(
    store: &mut S,
    path: &Path,
    now: DateTime<Utc>,
    result: &mut CmdResult,
) -> Result<usize> {
    let content = fs::read_to_string(path).map_err(FlashdeckError::Io)?;
    let decks = match serde_json::from_str(&content).map_err(FlashdeckError::Serialization)? {
        ImportFile::Many(decks) => decks,
        ImportFile::One(deck) => vec![deck],
    };

    let mut existing: HashSet<Uuid> = store.list_decks()?.iter().map(|d| d.id).collect();
    let mut count = 0;
    for deck in decks {
        let deck = deck.into_deck(now);
        if existing.contains(&deck.id) {
            result.add_message(CmdMessage::warning(format!(
                "Skipped {}: a deck with id {} already exists",
                deck.name, deck.id
            )));
            continue;
        }
        store.save_deck(&deck)?;
        existing.insert(deck.id);
        info!(deck = %deck.name, cards = deck.cards.len(), "imported deck");
        result.add_message(CmdMessage::info(format!(
            "Imported {} ({} cards) from {}",
            deck.name,
            deck.cards.len(),
            path.display()
        )));
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 4, 12, 0, 0).unwrap()
    }

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn bare_cards_become_new_cards() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(
            dir.path(),
            "capitals.json",
            r#"{"name": "Capitals", "cards": [{"front": "France", "back": "Paris"}]}"#,
        );
        let mut store = InMemoryStore::new();

        run(&mut store, vec![file], now()).unwrap();
        let deck = store.list_decks().unwrap().remove(0);
        assert_eq!(deck.name, "Capitals");
        let card = &deck.cards[0];
        assert!(card.is_new());
        assert_eq!(card.last_reviewed, None);
        assert_eq!(card.next_review, now());
        assert_eq!(card.ease_factor, INITIAL_EASE_FACTOR);
    }

    #[test]
    fn scheduling_fields_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(
            dir.path(),
            "kept.json",
            r#"[{"name": "Kept", "cards": [{
                "front": "q", "back": "a",
                "lastReviewed": "2024-07-01T12:00:00Z",
                "nextReview": "2024-07-11T12:00:00Z",
                "interval": 10.0, "easeFactor": 1.1
            }]}]"#,
        );
        let mut store = InMemoryStore::new();

        run(&mut store, vec![file], now()).unwrap();
        let card = store.list_decks().unwrap().remove(0).cards.remove(0);
        assert_eq!(card.interval, 10.0);
        // below the floor on disk, clamped on the way in
        assert_eq!(card.ease_factor, MIN_EASE_FACTOR);
        assert!(!card.is_due(now()));
    }

    #[test]
    fn interval_follows_review_history() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(
            dir.path(),
            "odd.json",
            r#"{"name": "Odd", "cards": [
                {"front": "short", "back": "a",
                 "lastReviewed": "2024-07-01T00:00:00Z", "interval": 0.25},
                {"front": "never seen", "back": "b", "interval": 12.0},
                {"front": "forever", "back": "c",
                 "lastReviewed": "2024-07-01T00:00:00Z", "interval": 1.0e8}
            ]}"#,
        );
        let mut store = InMemoryStore::new();

        run(&mut store, vec![file], now()).unwrap();
        let cards = store.list_decks().unwrap().remove(0).cards;
        assert_eq!(cards[0].interval, 1.0);
        assert_eq!(cards[1].interval, 0.0);
        assert!(cards[1].is_new());
        assert_eq!(cards[2].interval, MAX_INTERVAL_DAYS);
    }

    #[test]
    fn directories_import_json_files_only() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.json", r#"{"name": "A"}"#);
        write(dir.path(), "b.json", r#"{"name": "B"}"#);
        write(dir.path(), "notes.txt", "not a deck");
        let mut store = InMemoryStore::new();

        run(&mut store, vec![dir.path().to_path_buf()], now()).unwrap();
        assert_eq!(store.list_decks().unwrap().len(), 2);
    }

    #[test]
    fn existing_deck_ids_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let id = Uuid::new_v4();
        let file = write(
            dir.path(),
            "dup.json",
            &format!(r#"{{"id": "{}", "name": "Dup"}}"#, id),
        );
        let mut store = InMemoryStore::new();

        run(&mut store, vec![file.clone()], now()).unwrap();
        let result = run(&mut store, vec![file], now()).unwrap();
        assert_eq!(store.list_decks().unwrap().len(), 1);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning && m.content.contains("already exists")));
    }

    #[test]
    fn duplicate_card_ids_are_reassigned() {
        let dir = tempfile::tempdir().unwrap();
        let id = Uuid::new_v4();
        let file = write(
            dir.path(),
            "cards.json",
            &format!(
                r#"{{"name": "Twins", "cards": [
                    {{"id": "{id}", "front": "1", "back": "1"}},
                    {{"id": "{id}", "front": "2", "back": "2"}}
                ]}}"#
            ),
        );
        let mut store = InMemoryStore::new();

        run(&mut store, vec![file], now()).unwrap();
        let deck = store.list_decks().unwrap().remove(0);
        assert_eq!(deck.cards[0].id, id);
        assert_ne!(deck.cards[1].id, id);
    }

    #[test]
    fn bad_files_warn_and_continue() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write(dir.path(), "bad.json", "{ nope");
        let good = write(dir.path(), "good.json", r#"{"name": "Good"}"#);
        let missing = dir.path().join("missing.json");
        let mut store = InMemoryStore::new();

        let result = run(&mut store, vec![bad, missing, good], now()).unwrap();
        assert_eq!(store.list_decks().unwrap().len(), 1);
        let warnings = result
            .messages
            .iter()
            .filter(|m| m.level == MessageLevel::Warning)
            .count();
        assert_eq!(warnings, 2);
    }
}
