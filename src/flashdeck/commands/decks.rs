use crate::commands::{CmdResult, DeckSummary};
use crate::error::Result;
use crate::store::DataStore;
use chrono::{DateTime, Utc};

use super::helpers::indexed_decks;

pub fn run<S: DataStore>(store: &S, now: DateTime<Utc>) -> Result<CmdResult> {
    let listed = indexed_decks(store)?
        .into_iter()
        .map(|dd| DeckSummary {
            index: dd.index,
            id: dd.deck.id,
            total: dd.deck.cards.len(),
            due: dd.deck.due_count(now),
            name: dd.deck.name,
        })
        .collect();

    Ok(CmdResult::default().with_listed_decks(listed))
}
