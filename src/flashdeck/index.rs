//! Display indexes for decks.
//!
//! Decks are listed alphabetically (case-insensitive, then by id) and numbered from 1. Commands
//! accept a deck as that number, its exact id, or its name.

use crate::model::Deck;
use std::fmt;
use uuid::Uuid;

/// A user input selecting one deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSelector {
    Index(usize),
    Id(Uuid),
    Name(String),
}

impl DeckSelector {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if let Ok(n) = input.parse::<usize>() {
            return DeckSelector::Index(n);
        }
        if let Ok(id) = Uuid::parse_str(input) {
            return DeckSelector::Id(id);
        }
        DeckSelector::Name(input.to_string())
    }
}

impl fmt::Display for DeckSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckSelector::Index(i) => write!(f, "{}", i),
            DeckSelector::Id(id) => write!(f, "{}", id),
            DeckSelector::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplayDeck {
    pub index: usize,
    pub deck: Deck,
}

pub fn index_decks(mut decks: Vec<Deck>) -> Vec<DisplayDeck> {
    decks.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.id.cmp(&b.id))
    });
    decks
        .into_iter()
        .enumerate()
        .map(|(i, deck)| DisplayDeck { index: i + 1, deck })
        .collect()
}

/// Find the deck a selector points at. Names match exactly first, then case-insensitively.
pub fn select<'a>(decks: &'a [DisplayDeck], selector: &DeckSelector) -> Option<&'a DisplayDeck> {
    match selector {
        DeckSelector::Index(i) => decks.iter().find(|dd| dd.index == *i),
        DeckSelector::Id(id) => decks.iter().find(|dd| dd.deck.id == *id),
        DeckSelector::Name(name) => decks
            .iter()
            .find(|dd| dd.deck.name == *name)
            .or_else(|| {
                decks
                    .iter()
                    .find(|dd| dd.deck.name.eq_ignore_ascii_case(name))
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_selector_kind() {
        assert_eq!(DeckSelector::parse("2"), DeckSelector::Index(2));
        let id = Uuid::new_v4();
        assert_eq!(DeckSelector::parse(&id.to_string()), DeckSelector::Id(id));
        assert_eq!(
            DeckSelector::parse(" Spanish verbs "),
            DeckSelector::Name("Spanish verbs".into())
        );
    }

    #[test]
    fn decks_are_indexed_alphabetically() {
        let decks = vec![
            Deck::new("spanish".into()),
            Deck::new("Anatomy".into()),
            Deck::new("kanji".into()),
        ];
        let indexed = index_decks(decks);
        let names: Vec<_> = indexed.iter().map(|dd| dd.deck.name.as_str()).collect();
        assert_eq!(names, vec!["Anatomy", "kanji", "spanish"]);
        assert_eq!(indexed[0].index, 1);
        assert_eq!(indexed[2].index, 3);
    }

    #[test]
    fn select_by_index_id_and_name() {
        let indexed = index_decks(vec![Deck::new("Kanji".into()), Deck::new("Verbs".into())]);
        let verbs_id = indexed[1].deck.id;

        assert_eq!(
            select(&indexed, &DeckSelector::Index(2)).unwrap().deck.id,
            verbs_id
        );
        assert_eq!(
            select(&indexed, &DeckSelector::Id(verbs_id)).unwrap().index,
            2
        );
        assert_eq!(
            select(&indexed, &DeckSelector::Name("kanji".into()))
                .unwrap()
                .index,
            1
        );
        assert!(select(&indexed, &DeckSelector::Index(3)).is_none());
        assert!(select(&indexed, &DeckSelector::Name("Other".into())).is_none());
    }
}
