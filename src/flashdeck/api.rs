//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point for
//! every UI.
//!
//! It:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (deck selector strings become [`DeckSelector`]s)
//! - **Supplies the time**, from a clock that tests can replace
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! `FlashdeckApi<S: DataStore>` is generic over the storage backend:
//! - Production: `FlashdeckApi<FileStore>`
//! - Testing: `FlashdeckApi<InMemoryStore>`

use crate::commands;
use crate::config::{check_stats_days, FlashdeckConfig};
use crate::error::Result;
use crate::index::DeckSelector;
use crate::session::Reviewer;
use crate::store::DataStore;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

pub type Clock = fn() -> DateTime<Utc>;

pub struct FlashdeckApi<S: DataStore> {
    store: S,
    paths: commands::FlashdeckPaths,
    clock: Clock,
}

impl<S: DataStore> FlashdeckApi<S> {
    pub fn new(store: S, paths: commands::FlashdeckPaths) -> Self {
        Self {
            store,
            paths,
            clock: Utc::now,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn list_decks(&self) -> Result<commands::CmdResult> {
        commands::decks::run(&self.store, (self.clock)())
    }

    pub fn list_cards(&self, deck: &str) -> Result<commands::CmdResult> {
        commands::cards::run(&self.store, &DeckSelector::parse(deck))
    }

    pub fn review<V: Reviewer>(
        &mut self,
        deck: &str,
        reviewer: &mut V,
    ) -> Result<commands::CmdResult> {
        let selector = DeckSelector::parse(deck);
        commands::review::run(&mut self.store, &selector, reviewer, self.clock)
    }

    /// Review statistics; `days` falls back to the configured `stats-days`.
    pub fn stats(&self, days: Option<usize>) -> Result<commands::CmdResult> {
        let days = match days {
            Some(days) => check_stats_days(days)?,
            None => FlashdeckConfig::load(&self.paths.data_dir)?.stats_days,
        };
        commands::stats::run(&self.store, days, (self.clock)())
    }

    pub fn import_decks(&mut self, paths: Vec<PathBuf>) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, paths, (self.clock)())
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn paths(&self) -> &commands::FlashdeckPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    CmdMessage, CmdResult, DeckSummary, FlashdeckPaths, MessageLevel, ReviewSummary, StatsReport,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlashdeckError;
    use crate::model::Rating;
    use crate::session::tests::ScriptedReviewer;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 20, 7, 0, 0).unwrap()
    }

    fn api_with(store: InMemoryStore, dir: &tempfile::TempDir) -> FlashdeckApi<InMemoryStore> {
        let paths = FlashdeckPaths {
            data_dir: dir.path().to_path_buf(),
        };
        FlashdeckApi::new(store, paths).with_clock(fixed_now)
    }

    #[test]
    fn review_by_name_then_list_shows_nothing_due() {
        let dir = tempfile::tempdir().unwrap();
        let fixture = StoreFixture::new().at(fixed_now()).with_deck("Kanji", 1, 0);
        let mut api = api_with(fixture.store, &dir);

        let mut reviewer = ScriptedReviewer::rating_all(&[Rating::Good]);
        let result = api.review("kanji", &mut reviewer).unwrap();
        assert_eq!(result.review, Some(ReviewSummary::Committed { reviewed: 1 }));

        let listed = api.list_decks().unwrap().listed_decks;
        assert_eq!(listed[0].due, 0);
    }

    #[test]
    fn review_of_unknown_deck_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = api_with(InMemoryStore::new(), &dir);
        let mut reviewer = ScriptedReviewer::rating_all(&[]);
        assert!(matches!(
            api.review("7", &mut reviewer),
            Err(FlashdeckError::DeckNotFound(_))
        ));
    }

    #[test]
    fn stats_uses_configured_days() {
        let dir = tempfile::tempdir().unwrap();
        let api = api_with(InMemoryStore::new(), &dir);
        api.config(ConfigAction::Set("stats-days".into(), "3".into()))
            .unwrap();

        let stats = api.stats(None).unwrap().stats.unwrap();
        assert_eq!(stats.history.len(), 3);
        let stats = api.stats(Some(10)).unwrap().stats.unwrap();
        assert_eq!(stats.history.len(), 10);
    }

    #[test]
    fn stats_rejects_out_of_range_days() {
        let dir = tempfile::tempdir().unwrap();
        let api = api_with(InMemoryStore::new(), &dir);
        assert!(matches!(api.stats(Some(0)), Err(FlashdeckError::Config(_))));
        assert!(matches!(
            api.stats(Some(200_000_000)),
            Err(FlashdeckError::Config(_))
        ));
    }
}
