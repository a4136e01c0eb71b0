//! Unit extraction: flattening a team's lanes into combat participants.

use alloc::vec::Vec;
use core::fmt;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::types::{Card, CardId, Team, TeamSide};

/// Stable identity of a combatant: its side, board position and card.
///
/// Events refer to units through this value rather than through the board,
/// so a log can be replayed against a fresh copy of the teams.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Encode, Decode, TypeInfo,
)]
#[serde(rename_all = "camelCase")]
pub struct CombatantRef {
    pub team: TeamSide,
    pub lane: u32,
    pub slot: u32,
    pub card_id: CardId,
}

impl CombatantRef {
    pub fn new(team: TeamSide, lane: u32, slot: u32, card_id: CardId) -> Self {
        Self {
            team,
            lane,
            slot,
            card_id,
        }
    }
}

impl fmt::Display for CombatantRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (lane {}, slot {})", self.team, self.card_id, self.lane, self.slot)
    }
}

/// Mutable runtime copy of a unit's combat stats, owned by one battle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitState {
    pub reference: CombatantRef,
    pub attack: i32,
    pub defense: i32,
    pub alive: bool,
}

impl UnitState {
    fn from_card(card: &Card, reference: CombatantRef) -> Self {
        Self {
            reference,
            attack: card.attack,
            defense: card.defense,
            alive: card.defense > 0,
        }
    }

    /// Subtract damage, flooring defense at zero. Returns the new defense.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.defense = self.defense.saturating_sub(amount.max(0)).max(0);
        self.defense
    }
}

/// Collect one unit per occupied slot, in lane-then-slot order.
pub fn collect_units(team: &Team, side: TeamSide) -> Vec<UnitState> {
    let mut units = Vec::new();

    for (lane_index, lane) in team.lanes.iter().enumerate() {
        for (slot_index, slot) in lane.iter().enumerate() {
            let Some(card) = slot.card.as_ref() else {
                continue;
            };

            let reference = CombatantRef::new(
                side,
                lane_index as u32,
                slot_index as u32,
                card.id.clone(),
            );
            units.push(UnitState::from_card(card, reference));
        }
    }

    units
}
