//! The built-in card catalog and simple lookups over it.

use std::collections::BTreeMap;

use clash_battle::types::{Card, CardId, Rarity};

use crate::generated::builtin_cards;

/// All built-in cards, in definition order
pub fn all_cards() -> Vec<Card> {
    builtin_cards()
}

/// Built-in cards keyed by id
pub fn cards_by_id() -> BTreeMap<CardId, Card> {
    builtin_cards()
        .into_iter()
        .map(|card| (card.id.clone(), card))
        .collect()
}

pub fn card_by_id(id: &str) -> Option<Card> {
    builtin_cards()
        .into_iter()
        .find(|card| card.id.as_str() == id)
}

pub fn cards_by_type(card_type: &str) -> Vec<Card> {
    filter_cards(|card| card.types.iter().any(|t| t == card_type))
}

pub fn cards_by_rarity(rarity: Rarity) -> Vec<Card> {
    filter_cards(|card| card.rarity == rarity)
}

pub fn cards_by_keyword(keyword: &str) -> Vec<Card> {
    filter_cards(|card| card.keywords.iter().any(|k| k == keyword))
}

pub fn cards_by_set(set: &str) -> Vec<Card> {
    filter_cards(|card| card.set.as_deref() == Some(set))
}

fn filter_cards(predicate: impl Fn(&Card) -> bool) -> Vec<Card> {
    builtin_cards()
        .into_iter()
        .filter(|card| predicate(card))
        .collect()
}
