use crate::error::{FlashdeckError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const INITIAL_EASE_FACTOR: f64 = 2.5;
pub const MIN_EASE_FACTOR: f64 = 1.3;
/// Longest interval the scheduler will hand out, roughly a century.
pub const MAX_INTERVAL_DAYS: f64 = 36500.0;

/// A single fact to memorize.
///
/// `id`, `front` and `back` never change after creation; the scheduler only
/// ever replaces the four scheduling fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: Uuid,
    pub front: String,
    pub back: String,
    pub last_reviewed: Option<DateTime<Utc>>,
    pub next_review: DateTime<Utc>,
    /// Days until the next review, unrounded. 0 only before the first review.
    pub interval: f64,
    pub ease_factor: f64,
}

impl Card {
    /// A never-reviewed card, due immediately.
    pub fn new(front: String, back: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            front,
            back,
            last_reviewed: None,
            next_review: now,
            interval: 0.0,
            ease_factor: INITIAL_EASE_FACTOR,
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review <= now
    }

    /// Keyed on the interval alone: a card reset to interval 0 counts as new.
    pub fn is_new(&self) -> bool {
        self.interval == 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub id: Uuid,
    pub name: String,
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            cards: Vec::new(),
        }
    }

    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    pub fn due_count(&self, now: DateTime<Utc>) -> usize {
        self.cards.iter().filter(|c| c.is_due(now)).count()
    }
}

/// Self-assessed recall quality, ordered `Again < Hard < Good < Easy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    Again = 0,
    Hard = 1,
    Good = 2,
    Easy = 3,
}

impl Rating {
    pub const ALL: [Rating; 4] = [Rating::Again, Rating::Hard, Rating::Good, Rating::Easy];

    /// Keyboard shortcut used by the reviewer: `1`-`4`, or the first letter.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            '1' | 'a' => Some(Rating::Again),
            '2' | 'h' => Some(Rating::Hard),
            '3' | 'g' => Some(Rating::Good),
            '4' | 'e' => Some(Rating::Easy),
            _ => None,
        }
    }

    pub fn key(&self) -> char {
        match self {
            Rating::Again => '1',
            Rating::Hard => '2',
            Rating::Good => '3',
            Rating::Easy => '4',
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rating::Again => "again",
            Rating::Hard => "hard",
            Rating::Good => "good",
            Rating::Easy => "easy",
        };
        write!(f, "{}", name)
    }
}

impl TryFrom<u8> for Rating {
    type Error = FlashdeckError;

    fn try_from(value: u8) -> Result<Self> {
        Rating::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| FlashdeckError::InvalidRating(value.to_string()))
    }
}

impl FromStr for Rating {
    type Err = FlashdeckError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(rating) = Rating::from_key(c) {
                return Ok(rating);
            }
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "again" => Ok(Rating::Again),
            "hard" => Ok(Rating::Hard),
            "good" => Ok(Rating::Good),
            "easy" => Ok(Rating::Easy),
            _ => Err(FlashdeckError::InvalidRating(trimmed.to_string())),
        }
    }
}

/// Number of reviews performed on one calendar day (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewLog {
    pub date: NaiveDate,
    pub count: u32,
}

impl ReviewLog {
    pub fn new(date: NaiveDate) -> Self {
        Self { date, count: 0 }
    }
}
