use crate::error::{FlashdeckError, Result};
use crate::index::{index_decks, select, DeckSelector, DisplayDeck};
use crate::store::DataStore;

pub fn indexed_decks<S: DataStore>(store: &S) -> Result<Vec<DisplayDeck>> {
    let decks = store.list_decks()?;
    Ok(index_decks(decks))
}

pub fn resolve_deck<S: DataStore>(store: &S, selector: &DeckSelector) -> Result<DisplayDeck> {
    let indexed = indexed_decks(store)?;
    select(&indexed, selector)
        .cloned()
        .ok_or_else(|| FlashdeckError::DeckNotFound(selector.to_string()))
}
