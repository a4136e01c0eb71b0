//! Card data for lane clash battles.
//!
//! The built-in catalog is compiled in from `cards.json`. Additional cards can
//! be loaded from JSON or from the markdown card format, and teams can be
//! written in a compact lineup notation.

pub mod catalog;
pub mod error;
mod generated;
pub mod lineup;
pub mod markdown;
pub mod query;
pub mod schema;

pub use catalog::{
    all_cards, card_by_id, cards_by_id, cards_by_keyword, cards_by_rarity, cards_by_set,
    cards_by_type,
};
pub use error::{CardError, Result};
pub use lineup::{parse_lineup, parse_lineup_from};
pub use markdown::parse_cards_markdown;
pub use query::{unique_types, CardQuery};
pub use schema::{
    card_from_json, cards_from_json, is_valid_card, team_from_json, validate_card,
    validate_cards, validate_team,
};
