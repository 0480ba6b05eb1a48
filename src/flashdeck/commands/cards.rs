use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::DeckSelector;
use crate::store::DataStore;

use super::helpers::resolve_deck;

/// Cards of one deck, soonest due first.
pub fn run<S: DataStore>(store: &S, selector: &DeckSelector) -> Result<CmdResult> {
    let mut cards = resolve_deck(store, selector)?.deck.cards;
    cards.sort_by_key(|card| card.next_review);
    Ok(CmdResult::default().with_listed_cards(cards))
}
