//! # Review Sessions
//!
//! A [`ReviewSession`] walks one deck's due cards in a fixed order:
//!
//! ```text
//!            reveal                 rate (more cards)
//! AwaitingReveal ──────▶ AwaitingRating ──────────────▶ AwaitingReveal
//!                              │
//!                              │ rate (last card)
//!                              ▼
//!                        SessionComplete ──commit──▶ Deck
//! ```
//!
//! The due set is taken once, at construction: cards due at `now`, earliest `next_review`
//! first, ties in deck order. Rating a card with `Again` does not requeue it.
//!
//! The session owns a copy of the deck. Only [`ReviewSession::commit`] hands it back; dropping
//! the session abandons every scheduling change. Review counts go to the injected
//! [`ReviewRecorder`] as each rating is applied.

use crate::error::{FlashdeckError, Result};
use crate::model::{Card, Deck, Rating};
use crate::scheduler::{schedule_review, ReviewEvent};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info};

/// Persistence capability for the daily review counter.
///
/// `record_review` must increment the counter for `day`, creating it at 1 when missing, as a
/// single operation.
pub trait ReviewRecorder {
    fn record_review(&mut self, day: NaiveDate) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingReveal,
    AwaitingRating,
    SessionComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based position of the current card.
    pub position: usize,
    pub total: usize,
}

pub struct ReviewSession<'r, R: ReviewRecorder> {
    deck: Deck,
    due: Vec<usize>,
    position: usize,
    state: SessionState,
    recorder: &'r mut R,
}

impl<'r, R: ReviewRecorder> ReviewSession<'r, R> {
    pub fn start(deck: Deck, recorder: &'r mut R, now: DateTime<Utc>) -> Self {
        let due = due_order(&deck, now);
        let state = if due.is_empty() {
            SessionState::SessionComplete
        } else {
            SessionState::AwaitingReveal
        };
        debug!(deck = %deck.name, due = due.len(), "session started");
        Self {
            deck,
            due,
            position: 0,
            state,
            recorder,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == SessionState::SessionComplete
    }

    pub fn due_count(&self) -> usize {
        self.due.len()
    }

    pub fn reviewed_count(&self) -> usize {
        self.position
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current_card(&self) -> Option<&Card> {
        if self.is_complete() {
            return None;
        }
        self.due.get(self.position).map(|&i| &self.deck.cards[i])
    }

    pub fn progress(&self) -> Progress {
        Progress {
            position: (self.position + 1).min(self.due.len()),
            total: self.due.len(),
        }
    }

    /// Show the back of the current card. Revealing twice is a no-op.
    pub fn reveal(&mut self) -> Result<&Card> {
        match self.state {
            SessionState::SessionComplete => Err(FlashdeckError::SessionComplete),
            SessionState::AwaitingReveal | SessionState::AwaitingRating => {
                self.state = SessionState::AwaitingRating;
                let index = self.due[self.position];
                Ok(&self.deck.cards[index])
            }
        }
    }

    /// Apply `rating` to the current card and advance.
    ///
    /// The review is recorded before the working copy changes, so a failing recorder leaves the
    /// session exactly where it was.
    pub fn rate(&mut self, rating: Rating, now: DateTime<Utc>) -> Result<ReviewEvent> {
        let index = match self.state {
            SessionState::SessionComplete => return Err(FlashdeckError::SessionComplete),
            SessionState::AwaitingReveal => {
                let id = self.deck.cards[self.due[self.position]].id;
                return Err(FlashdeckError::AnswerNotRevealed(id));
            }
            SessionState::AwaitingRating => self.due[self.position],
        };

        let (updated, event) = schedule_review(&self.deck.cards[index], rating, now);
        self.recorder.record_review(event.day)?;
        debug!(
            card = %updated.id,
            %rating,
            interval = updated.interval,
            next_review = %updated.next_review,
            "card rated"
        );
        self.deck.cards[index] = updated;

        self.position += 1;
        self.state = if self.position >= self.due.len() {
            SessionState::SessionComplete
        } else {
            SessionState::AwaitingReveal
        };
        Ok(event)
    }

    /// Hand back the working deck. Only a completed session can be committed.
    pub fn commit(self) -> Result<Deck> {
        if !self.is_complete() {
            return Err(FlashdeckError::SessionInProgress(
                self.due.len() - self.position,
            ));
        }
        info!(deck = %self.deck.name, reviewed = self.position, "session committed");
        Ok(self.deck)
    }
}

fn due_order(deck: &Deck, now: DateTime<Utc>) -> Vec<usize> {
    let mut due: Vec<usize> = deck
        .cards
        .iter()
        .enumerate()
        .filter(|(_, card)| card.is_due(now))
        .map(|(i, _)| i)
        .collect();
    // stable sort keeps deck order on ties
    due.sort_by_key(|&i| deck.cards[i].next_review);
    due
}

/// What the reviewer does while the front of a card is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontAction {
    Reveal,
    Quit,
}

/// What the reviewer does once the back is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    Rate(Rating),
    Quit,
}

/// Drives a session: whatever presents the cards and collects ratings.
pub trait Reviewer {
    fn front(&mut self, card: &Card, progress: Progress) -> Result<FrontAction>;
    fn back(&mut self, card: &Card, progress: Progress) -> Result<BackAction>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Committed { deck: Deck, reviewed: usize },
    Abandoned { reviewed: usize },
}

/// Run a whole session over `deck`, asking `clock` for the time at start and at each rating.
pub fn run_session<R, V, C>(
    deck: Deck,
    recorder: &mut R,
    reviewer: &mut V,
    mut clock: C,
) -> Result<SessionOutcome>
where
    R: ReviewRecorder,
    V: Reviewer,
    C: FnMut() -> DateTime<Utc>,
{
    let mut session = ReviewSession::start(deck, recorder, clock());

    while !session.is_complete() {
        let progress = session.progress();
        let Some(card) = session.current_card() else {
            break;
        };
        if reviewer.front(card, progress)? == FrontAction::Quit {
            return Ok(abandon(session));
        }

        let card = session.reveal()?;
        match reviewer.back(card, progress)? {
            BackAction::Rate(rating) => {
                session.rate(rating, clock())?;
            }
            BackAction::Quit => return Ok(abandon(session)),
        }
    }

    let reviewed = session.reviewed_count();
    let deck = session.commit()?;
    Ok(SessionOutcome::Committed { deck, reviewed })
}

fn abandon<R: ReviewRecorder>(session: ReviewSession<'_, R>) -> SessionOutcome {
    let reviewed = session.reviewed_count();
    info!(deck = %session.deck().name, reviewed, "session abandoned");
    SessionOutcome::Abandoned { reviewed }
}
