use super::DataStore;
use crate::error::{FlashdeckError, Result};
use crate::model::{Deck, ReviewLog};
use crate::session::ReviewRecorder;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    decks: HashMap<Uuid, Deck>,
    reviews: BTreeMap<NaiveDate, u32>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReviewRecorder for InMemoryStore {
    fn record_review(&mut self, day: NaiveDate) -> Result<()> {
        *self.reviews.entry(day).or_insert(0) += 1;
        Ok(())
    }
}

impl DataStore for InMemoryStore {
    fn save_deck(&mut self, deck: &Deck) -> Result<()> {
        self.decks.insert(deck.id, deck.clone());
        Ok(())
    }

    fn get_deck(&self, id: &Uuid) -> Result<Deck> {
        self.decks
            .get(id)
            .cloned()
            .ok_or_else(|| FlashdeckError::DeckNotFound(id.to_string()))
    }

    fn list_decks(&self) -> Result<Vec<Deck>> {
        Ok(self.decks.values().cloned().collect())
    }

    fn review_logs(&self) -> Result<Vec<ReviewLog>> {
        Ok(self
            .reviews
            .iter()
            .map(|(&date, &count)| ReviewLog { date, count })
            .collect())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Card;
    use chrono::{DateTime, Duration, Utc};

    pub struct StoreFixture {
        pub store: InMemoryStore,
        pub now: DateTime<Utc>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                now: Utc::now(),
            }
        }

        pub fn at(mut self, now: DateTime<Utc>) -> Self {
            self.now = now;
            self
        }

        /// A deck with `due` cards overdue by 1..=due days and `later` cards due in the future.
        pub fn with_deck(mut self, name: &str, due: usize, later: usize) -> Self {
            let mut cards = Vec::with_capacity(due + later);
            for i in 0..due {
                let mut card = Card::new(
                    format!("{} due {}", name, i + 1),
                    format!("answer {}", i + 1),
                    self.now,
                );
                card.next_review = self.now - Duration::days(i as i64 + 1);
                cards.push(card);
            }
            for i in 0..later {
                let mut card = Card::new(
                    format!("{} later {}", name, i + 1),
                    format!("answer {}", i + 1),
                    self.now,
                );
                card.interval = 4.0;
                card.last_reviewed = Some(self.now - Duration::days(1));
                card.next_review = self.now + Duration::days(i as i64 + 3);
                cards.push(card);
            }
            let deck = Deck::new(name.to_string()).with_cards(cards);
            self.store.save_deck(&deck).unwrap();
            self
        }

        pub fn with_reviews(mut self, day: NaiveDate, count: u32) -> Self {
            for _ in 0..count {
                self.store.record_review(day).unwrap();
            }
            self
        }
    }
}
