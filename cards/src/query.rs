//! Card browsing: free-text search plus type and rarity filters.

use clash_battle::types::{Card, Rarity};

/// Criteria for browsing a card list. Unset criteria match every card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardQuery {
    /// Case-insensitive substring of the card name
    pub search: Option<String>,
    pub card_type: Option<String>,
    pub rarity: Option<Rarity>,
}

impl CardQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: &str) -> Self {
        self.search = Some(text.to_string()).filter(|s| !s.is_empty());
        self
    }

    pub fn card_type(mut self, card_type: &str) -> Self {
        self.card_type = Some(card_type.to_string()).filter(|s| !s.is_empty());
        self
    }

    pub fn rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = Some(rarity);
        self
    }

    pub fn matches(&self, card: &Card) -> bool {
        let matches_search = self
            .search
            .as_ref()
            .map_or(true, |s| card.name.to_lowercase().contains(&s.to_lowercase()));
        let matches_type = self
            .card_type
            .as_ref()
            .map_or(true, |t| card.types.iter().any(|card_type| card_type == t));
        let matches_rarity = self.rarity.map_or(true, |r| card.rarity == r);

        matches_search && matches_type && matches_rarity
    }

    pub fn apply<'a>(&self, cards: &'a [Card]) -> Vec<&'a Card> {
        cards.iter().filter(|card| self.matches(card)).collect()
    }
}

/// Every type that appears on any card, sorted and de-duplicated
pub fn unique_types(cards: &[Card]) -> Vec<String> {
    let mut types: Vec<String> = cards.iter().flat_map(|card| card.types.iter().cloned()).collect();
    types.sort();
    types.dedup();
    types
}
