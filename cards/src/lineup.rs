//! Compact lineup notation for building teams from card ids.
//!
//! Lanes are separated by `;`, slots within a lane by `,`, and `-` marks an
//! empty slot: `goblin,knight;-,priest` is two lanes, the second of which
//! starts with an empty slot.

use clash_battle::types::{Card, CardSlot, Lane, Team};

use crate::catalog::all_cards;
use crate::error::{CardError, Result};

const LANE_SEPARATOR: char = ';';
const SLOT_SEPARATOR: char = ',';
const EMPTY_SLOT: &str = "-";

/// Build a team from built-in card ids.
pub fn parse_lineup(lineup: &str) -> Result<Team> {
    parse_lineup_from(lineup, &all_cards())
}

/// Build a team from ids resolved against `cards`.
///
/// A blank lane (`goblin;;wolf`) is a lane with no slots; a blank slot is an
/// unknown card.
pub fn parse_lineup_from(lineup: &str, cards: &[Card]) -> Result<Team> {
    if lineup.trim().is_empty() {
        return Ok(Team::empty());
    }

    let lanes = lineup
        .split(LANE_SEPARATOR)
        .map(|lane| parse_lane(lane, cards))
        .collect::<Result<Vec<Lane>>>()?;

    log::trace!("lineup {:?} resolved to {} lanes", lineup, lanes.len());
    Ok(Team::new(lanes))
}

fn parse_lane(lane: &str, cards: &[Card]) -> Result<Lane> {
    if lane.trim().is_empty() {
        return Ok(Vec::new());
    }

    lane.split(SLOT_SEPARATOR)
        .map(|slot| match slot.trim() {
            EMPTY_SLOT => Ok(CardSlot::empty()),
            id => cards
                .iter()
                .find(|card| card.id.as_str() == id)
                .cloned()
                .map(CardSlot::with_card)
                .ok_or_else(|| CardError::UnknownCard(id.to_string())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lane_ids(team: &Team) -> Vec<Vec<Option<String>>> {
        team.lanes
            .iter()
            .map(|lane| {
                lane.iter()
                    .map(|slot| slot.card.as_ref().map(|card| card.id.to_string()))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_lanes_and_slots() {
        let team = parse_lineup("goblin, knight ; -,priest").unwrap();
        assert_eq!(
            lane_ids(&team),
            vec![
                vec![Some("goblin".into()), Some("knight".into())],
                vec![None, Some("priest".into())],
            ]
        );
    }

    #[test]
    fn test_cards_carry_catalog_stats() {
        let team = parse_lineup("dragon").unwrap();
        let dragon = team.cards().next().unwrap();
        assert_eq!((dragon.attack, dragon.defense), (8, 8));
    }

    #[test]
    fn test_blank_input_and_blank_lanes() {
        assert!(parse_lineup("  ").unwrap().lanes.is_empty());
        let team = parse_lineup("wolf;;archer").unwrap();
        assert_eq!(team.lanes.len(), 3);
        assert!(team.lanes[1].is_empty());
    }

    #[test]
    fn test_unknown_ids() {
        let err = parse_lineup("goblin,hydra").unwrap_err();
        assert!(matches!(err, CardError::UnknownCard(ref id) if id == "hydra"));
        assert!(parse_lineup("goblin,,wolf").is_err());
    }

    #[test]
    fn test_custom_card_pool() {
        let pool = vec![Card::new("ember-fox", "Ember Fox", 4, 2)];
        let team = parse_lineup_from("ember-fox,-", &pool).unwrap();
        assert_eq!(team.lanes[0].len(), 2);
        assert!(parse_lineup_from("goblin", &pool).is_err());
    }
}
