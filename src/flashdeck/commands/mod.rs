use crate::config::FlashdeckConfig;
use crate::model::Card;
use std::path::PathBuf;

pub mod cards;
pub mod config;
pub mod decks;
pub mod helpers;
pub mod import;
pub mod init;
pub mod review;
pub mod stats;

pub use stats::StatsReport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// One row of the deck listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckSummary {
    pub index: usize,
    pub id: uuid::Uuid,
    pub name: String,
    pub total: usize,
    pub due: usize,
}

/// How a review command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewSummary {
    Committed { reviewed: usize },
    Abandoned { reviewed: usize },
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_decks: Vec<DeckSummary>,
    pub listed_cards: Vec<Card>,
    pub stats: Option<StatsReport>,
    pub review: Option<ReviewSummary>,
    pub config: Option<FlashdeckConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_decks(mut self, decks: Vec<DeckSummary>) -> Self {
        self.listed_decks = decks;
        self
    }

    pub fn with_listed_cards(mut self, cards: Vec<Card>) -> Self {
        self.listed_cards = cards;
        self
    }

    pub fn with_stats(mut self, stats: StatsReport) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_review(mut self, review: ReviewSummary) -> Self {
        self.review = Some(review);
        self
    }

    pub fn with_config(mut self, config: FlashdeckConfig) -> Self {
        self.config = Some(config);
        self
    }
}

#[derive(Debug, Clone)]
pub struct FlashdeckPaths {
    pub data_dir: PathBuf,
}
