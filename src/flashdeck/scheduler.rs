//! # Scheduler
//!
//! Maps a card's scheduling state and a [`Rating`] to its next scheduling state.
//!
//! ```text
//! Again        base = 1 minute (as days)       ease - 0.20, floor 1.3
//! Hard/Good/Easy
//!   new card   base = 1 / 3 / 5 days
//!   otherwise  base = interval * ease
//!   Hard       base * 0.8                      ease - 0.15, floor 1.3
//!   Good       base                            ease unchanged
//!   Easy       base * 1.5                      ease + 0.15, no ceiling
//! ```
//!
//! The stored `interval` is `max(1, base)` and keeps its fraction. The due date is offset by
//! `max(1, round(base))` whole days. Both clamps apply independently, so a card can carry an
//! interval of 7.5 while being due in 8 days. Intervals are capped at [`MAX_INTERVAL_DAYS`].
//!
//! The scheduler is pure: it takes `now` from the caller and returns a [`ReviewEvent`] instead
//! of writing the daily counter itself.

use crate::model::{Card, Rating, MAX_INTERVAL_DAYS, MIN_EASE_FACTOR};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use uuid::Uuid;

const AGAIN_INTERVAL: f64 = 1.0 / (24.0 * 60.0);
const AGAIN_EASE_PENALTY: f64 = 0.2;
const HARD_EASE_PENALTY: f64 = 0.15;
const EASY_EASE_BONUS: f64 = 0.15;
const HARD_INTERVAL_FACTOR: f64 = 0.8;
const EASY_INTERVAL_FACTOR: f64 = 1.5;

/// Emitted once for every scheduled review, whatever the rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewEvent {
    pub card_id: Uuid,
    pub rating: Rating,
    /// UTC calendar day the review counts towards.
    pub day: NaiveDate,
}

pub fn schedule_review(card: &Card, rating: Rating, now: DateTime<Utc>) -> (Card, ReviewEvent) {
    let (base, ease_factor) = next_base_and_ease(card, rating);
    let offset = Duration::days(due_offset_days(base));

    let updated = Card {
        last_reviewed: Some(now),
        next_review: now
            .checked_add_signed(offset)
            .unwrap_or(DateTime::<Utc>::MAX_UTC),
        interval: base.clamp(1.0, MAX_INTERVAL_DAYS),
        ease_factor,
        ..card.clone()
    };
    let event = ReviewEvent {
        card_id: card.id,
        rating,
        day: now.date_naive(),
    };
    (updated, event)
}

/// Whole days until the card would be due again for each rating, in `Rating::ALL` order.
pub fn preview_intervals(card: &Card) -> [i64; 4] {
    Rating::ALL.map(|rating| due_offset_days(next_base_and_ease(card, rating).0))
}

fn next_base_and_ease(card: &Card, rating: Rating) -> (f64, f64) {
    if rating == Rating::Again {
        return (
            AGAIN_INTERVAL,
            (card.ease_factor - AGAIN_EASE_PENALTY).max(MIN_EASE_FACTOR),
        );
    }

    let base = if card.is_new() {
        match rating {
            Rating::Hard => 1.0,
            Rating::Good => 3.0,
            _ => 5.0,
        }
    } else {
        card.interval * card.ease_factor
    };

    match rating {
        Rating::Hard => (
            base * HARD_INTERVAL_FACTOR,
            (card.ease_factor - HARD_EASE_PENALTY).max(MIN_EASE_FACTOR),
        ),
        Rating::Easy => (
            base * EASY_INTERVAL_FACTOR,
            card.ease_factor + EASY_EASE_BONUS,
        ),
        _ => (base, card.ease_factor),
    }
}

fn due_offset_days(base: f64) -> i64 {
    base.round().clamp(1.0, MAX_INTERVAL_DAYS) as i64
}

/// Format an interval in days to a short human-readable string
pub fn format_interval(days: i64) -> String {
    match days {
        d if d <= 0 => "now".to_string(),
        d if d < 7 => format!("{}d", d),
        d if d < 30 => format!("{}w", d / 7),
        d if d < 365 => format!("{}mo", d / 30),
        d => format!("{}y", d / 365),
    }
}
