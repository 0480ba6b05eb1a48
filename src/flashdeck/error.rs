use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum FlashdeckError {
    #[error("Deck not found: {0}")]
    DeckNotFound(String),

    #[error("Invalid rating: {0} (expected again, hard, good or easy)")]
    InvalidRating(String),

    #[error("Session is complete: no card left to review")]
    SessionComplete,

    #[error("Answer not revealed yet for card {0}")]
    AnswerNotRevealed(Uuid),

    #[error("Session still has {0} card(s) to review")]
    SessionInProgress(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, FlashdeckError>;
