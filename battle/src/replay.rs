//! Board reconstruction from the event log.
//!
//! The board at step `n` is always rebuilt from the original teams by applying
//! events `[0, n)`. Nothing here draws randomness or touches the input teams.

use alloc::string::String;
use alloc::vec::Vec;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::battle::{compute_combat_result_with_rng, CombatEvent, CombatResult};
use crate::error::{BattleError, BattleResult};
use crate::log;
use crate::rng::XorShiftRng;
use crate::types::{Team, TeamSide};
use crate::units::CombatantRef;

/// A unit as it stands at some point of a replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitSnapshot {
    pub reference: CombatantRef,
    pub name: String,
    pub attack: i32,
    pub defense: i32,
    pub alive: bool,
}

/// Lanes of optional units, shaped like the team they came from
pub type BoardGrid = Vec<Vec<Option<UnitSnapshot>>>;

/// Both sides of the board at one replay step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub team_a: BoardGrid,
    pub team_b: BoardGrid,
}

fn grid_from_team(team: &Team, side: TeamSide) -> BoardGrid {
    team.lanes
        .iter()
        .enumerate()
        .map(|(lane_index, lane)| {
            lane.iter()
                .enumerate()
                .map(|(slot_index, slot)| {
                    slot.card.as_ref().map(|card| UnitSnapshot {
                        reference: CombatantRef::new(
                            side,
                            lane_index as u32,
                            slot_index as u32,
                            card.id.clone(),
                        ),
                        name: card.name.clone(),
                        attack: card.attack,
                        defense: card.defense,
                        alive: card.defense > 0,
                    })
                })
                .collect()
        })
        .collect()
}

impl BoardState {
    /// The board before any event is applied
    pub fn from_teams(team_a: &Team, team_b: &Team) -> Self {
        Self {
            team_a: grid_from_team(team_a, TeamSide::TeamA),
            team_b: grid_from_team(team_b, TeamSide::TeamB),
        }
    }

    fn grid(&self, side: TeamSide) -> &BoardGrid {
        match side {
            TeamSide::TeamA => &self.team_a,
            TeamSide::TeamB => &self.team_b,
        }
    }

    /// Look up a unit by reference. The card id must match the occupant.
    pub fn unit(&self, reference: &CombatantRef) -> Option<&UnitSnapshot> {
        self.grid(reference.team)
            .get(reference.lane as usize)?
            .get(reference.slot as usize)?
            .as_ref()
            .filter(|unit| unit.reference.card_id == reference.card_id)
    }

    fn unit_mut(&mut self, reference: &CombatantRef) -> Option<&mut UnitSnapshot> {
        let grid = match reference.team {
            TeamSide::TeamA => &mut self.team_a,
            TeamSide::TeamB => &mut self.team_b,
        };
        grid.get_mut(reference.lane as usize)?
            .get_mut(reference.slot as usize)?
            .as_mut()
            .filter(|unit| unit.reference.card_id == reference.card_id)
    }

    pub fn alive_count(&self, side: TeamSide) -> usize {
        self.grid(side)
            .iter()
            .flatten()
            .flatten()
            .filter(|unit| unit.alive)
            .count()
    }

    /// Number of lanes needed to draw both sides next to each other
    pub fn lane_count(&self) -> usize {
        self.team_a.len().max(self.team_b.len())
    }

    /// Apply one event. Returns `false` if a referenced unit is not on the board.
    pub fn apply(&mut self, event: &CombatEvent) -> bool {
        match event {
            CombatEvent::Attack {
                attacker,
                target,
                attacker_defense_after,
                target_defense_after,
                ..
            } => {
                let mut applied = true;
                match self.unit_mut(attacker) {
                    Some(unit) => unit.defense = *attacker_defense_after,
                    None => applied = false,
                }
                match self.unit_mut(target) {
                    Some(unit) => unit.defense = *target_defense_after,
                    None => applied = false,
                }
                applied
            }
            CombatEvent::Faint { target } => match self.unit_mut(target) {
                Some(unit) => {
                    unit.defense = 0;
                    unit.alive = false;
                    true
                }
                None => false,
            },
        }
    }
}

fn primary_ref(event: &CombatEvent) -> &CombatantRef {
    match event {
        CombatEvent::Attack { attacker, .. } => attacker,
        CombatEvent::Faint { target } => target,
    }
}

/// Rebuild the board after the first `step` events (clamped to the log length).
pub fn board_at_step(
    team_a: &Team,
    team_b: &Team,
    events: &[CombatEvent],
    step: usize,
) -> BoardState {
    let mut board = BoardState::from_teams(team_a, team_b);

    for (index, event) in events.iter().take(step).enumerate() {
        if !board.apply(event) {
            log::replay_skip(index, primary_ref(event));
        }
    }

    board
}

/// Everything needed to store a battle and replay it later
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(rename_all = "camelCase")]
pub struct BattleRecord {
    pub team_a: Team,
    pub team_b: Team,
    pub seed: u64,
    pub result: CombatResult,
}

impl BattleRecord {
    /// Fight a battle with a xorshift generator seeded from `seed`
    pub fn run(team_a: Team, team_b: Team, seed: u64) -> BattleResult<Self> {
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let result = compute_combat_result_with_rng(&team_a, &team_b, &mut rng)?;
        Ok(Self {
            team_a,
            team_b,
            seed,
            result,
        })
    }

    /// Number of replay steps, one per event
    pub fn steps(&self) -> usize {
        self.result.events.len()
    }

    pub fn board_at(&self, step: usize) -> BoardState {
        board_at_step(&self.team_a, &self.team_b, &self.result.events, step)
    }

    pub fn final_board(&self) -> BoardState {
        self.board_at(self.steps())
    }

    /// SCALE encoding of the record
    pub fn to_bytes(&self) -> Vec<u8> {
        self.encode()
    }

    pub fn from_bytes(mut bytes: &[u8]) -> BattleResult<Self> {
        Self::decode(&mut bytes).map_err(|_| BattleError::Decode)
    }
}
