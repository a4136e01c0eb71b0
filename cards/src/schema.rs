//! Schema validation for cards and teams.
//!
//! Shape (required fields, rarity and behavior kinds, integer stats) is enforced
//! by deserialization; the checks here cover the value rules serde cannot express.

use clash_battle::types::{Card, Team};

use crate::error::{CardError, Result};

pub fn validate_card(card: &Card) -> Result<()> {
    let id = card.id.as_str();

    if id.is_empty() {
        return Err(CardError::invalid(id, "id must not be empty"));
    }
    if card.name.is_empty() {
        return Err(CardError::invalid(id, "name must not be empty"));
    }
    if card.attack < 0 {
        return Err(CardError::invalid(id, format!("attack must be >= 0 (got {})", card.attack)));
    }
    if card.defense < 0 {
        return Err(CardError::invalid(id, format!("defense must be >= 0 (got {})", card.defense)));
    }
    if card.types.is_empty() {
        return Err(CardError::invalid(id, "at least one type is required"));
    }

    for behavior in &card.behaviors {
        if behavior.id.is_empty() {
            return Err(CardError::invalid(id, "behavior id must not be empty"));
        }
        if behavior.max_stacks == Some(0) {
            return Err(CardError::invalid(
                id,
                format!("behavior \"{}\" maxStacks must be positive", behavior.id),
            ));
        }
    }

    Ok(())
}

pub fn validate_cards(cards: &[Card]) -> Result<()> {
    cards.iter().try_for_each(validate_card)
}

pub fn is_valid_card(card: &Card) -> bool {
    validate_card(card).is_ok()
}

/// Every card placed on the team must be valid; empty slots are fine.
pub fn validate_team(team: &Team) -> Result<()> {
    team.cards().try_for_each(validate_card)
}

pub fn card_from_json(json: &str) -> Result<Card> {
    let card: Card = serde_json::from_str(json)?;
    validate_card(&card)?;
    Ok(card)
}

pub fn cards_from_json(json: &str) -> Result<Vec<Card>> {
    let cards: Vec<Card> = serde_json::from_str(json)?;
    validate_cards(&cards)?;
    Ok(cards)
}

pub fn team_from_json(json: &str) -> Result<Team> {
    let team: Team = serde_json::from_str(json)?;
    validate_team(&team)?;
    Ok(team)
}
