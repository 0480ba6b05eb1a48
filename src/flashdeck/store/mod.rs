//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence collaborator of the review core: it loads decks,
//! saves committed decks and keeps the daily review counter.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - All decks in `decks.json` (map of deck id to deck)
//!   - Daily counters in `reviews.json`
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── decks.json          # { "<uuid>": { "id", "name", "cards": [...] } }
//! ├── reviews.json        # [ { "date": "2024-03-01", "count": 12 } ]
//! └── config.json         # FlashdeckConfig
//! ```
//!
//! Every store is also a [`ReviewRecorder`], so a session can be handed the store itself and
//! have each rating counted without exposing a separate read and write of the counter.

use crate::error::Result;
use crate::model::{Deck, ReviewLog};
use crate::session::ReviewRecorder;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for deck storage.
pub trait DataStore: ReviewRecorder {
    /// Save a deck (create or replace by id)
    fn save_deck(&mut self, deck: &Deck) -> Result<()>;

    /// Get a deck by ID
    fn get_deck(&self, id: &Uuid) -> Result<Deck>;

    /// List all decks, in no particular order
    fn list_decks(&self) -> Result<Vec<Deck>>;

    /// All daily review counters, oldest day first
    fn review_logs(&self) -> Result<Vec<ReviewLog>>;
}
