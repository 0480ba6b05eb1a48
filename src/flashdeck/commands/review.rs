use crate::commands::{CmdMessage, CmdResult, ReviewSummary};
use crate::error::Result;
use crate::index::DeckSelector;
use crate::session::{run_session, Reviewer, SessionOutcome};
use crate::store::DataStore;
use chrono::{DateTime, Utc};
use tracing::info;

use super::helpers::resolve_deck;

/// Review the due cards of one deck and persist the deck once the session completes.
///
/// The store doubles as the session's review recorder, so every rating is counted even when the
/// reviewer quits before the end.
pub fn run<S, V, C>(
    store: &mut S,
    selector: &DeckSelector,
    reviewer: &mut V,
    clock: C,
) -> Result<CmdResult>
where
    S: DataStore,
    V: Reviewer,
    C: FnMut() -> DateTime<Utc>,
{
    let deck = resolve_deck(store, selector)?.deck;
    let name = deck.name.clone();
    let mut result = CmdResult::default();

    match run_session(deck, store, reviewer, clock)? {
        SessionOutcome::Committed { deck, reviewed } => {
            if reviewed == 0 {
                result.add_message(CmdMessage::info(format!(
                    "No cards due in {}. Come back later.",
                    name
                )));
            } else {
                store.save_deck(&deck)?;
                info!(deck = %name, reviewed, "deck saved after review");
                result.add_message(CmdMessage::success(format!(
                    "Finished {}: {} card(s) reviewed.",
                    name, reviewed
                )));
            }
            Ok(result.with_review(ReviewSummary::Committed { reviewed }))
        }
        SessionOutcome::Abandoned { reviewed } => {
            result.add_message(CmdMessage::warning(format!(
                "Session abandoned after {} card(s); {} was not saved.",
                reviewed, name
            )));
            Ok(result.with_review(ReviewSummary::Abandoned { reviewed }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rating;
    use crate::session::tests::ScriptedReviewer;
    use crate::session::{BackAction, FrontAction};
    use crate::store::memory::fixtures::StoreFixture;
    use chrono::TimeZone;
    use std::collections::VecDeque;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 2, 18, 0, 0).unwrap()
    }

    #[test]
    fn completed_session_is_saved_and_counted() {
        let mut fixture = StoreFixture::new().at(now()).with_deck("Verbs", 2, 1);
        let mut reviewer = ScriptedReviewer::rating_all(&[Rating::Good, Rating::Easy]);

        let result = run(
            &mut fixture.store,
            &DeckSelector::Index(1),
            &mut reviewer,
            now,
        )
        .unwrap();
        assert_eq!(result.review, Some(ReviewSummary::Committed { reviewed: 2 }));

        let deck = fixture.store.list_decks().unwrap().remove(0);
        assert_eq!(deck.due_count(now()), 0);
        assert!(deck
            .cards
            .iter()
            .filter(|c| c.front.contains("due"))
            .all(|c| c.last_reviewed == Some(now())));

        let logs = fixture.store.review_logs().unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].count, 2);
    }

    #[test]
    fn nothing_due_leaves_store_untouched() {
        let mut fixture = StoreFixture::new().at(now()).with_deck("Verbs", 0, 2);
        let before = fixture.store.list_decks().unwrap();
        let mut reviewer = ScriptedReviewer::rating_all(&[]);

        let result = run(
            &mut fixture.store,
            &DeckSelector::Name("Verbs".into()),
            &mut reviewer,
            now,
        )
        .unwrap();
        assert_eq!(result.review, Some(ReviewSummary::Committed { reviewed: 0 }));
        assert!(reviewer.seen.is_empty());
        assert_eq!(fixture.store.list_decks().unwrap(), before);
        assert!(fixture.store.review_logs().unwrap().is_empty());
    }

    #[test]
    fn abandoned_session_keeps_counts_but_not_deck() {
        let mut fixture = StoreFixture::new().at(now()).with_deck("Verbs", 2, 0);
        let before = fixture.store.list_decks().unwrap();
        let mut reviewer = ScriptedReviewer {
            fronts: VecDeque::from([FrontAction::Reveal, FrontAction::Reveal]),
            backs: VecDeque::from([BackAction::Rate(Rating::Again), BackAction::Quit]),
            seen: Vec::new(),
        };

        let result = run(
            &mut fixture.store,
            &DeckSelector::Index(1),
            &mut reviewer,
            now,
        )
        .unwrap();
        assert_eq!(result.review, Some(ReviewSummary::Abandoned { reviewed: 1 }));
        assert_eq!(fixture.store.list_decks().unwrap(), before);
        assert_eq!(fixture.store.review_logs().unwrap()[0].count, 1);
    }
}
