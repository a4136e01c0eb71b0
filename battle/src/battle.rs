//! The combat resolver.
//!
//! Two teams take turns: each turn one living unit of the active side trades
//! blows with one living unit of the other side. Both take damage in the same
//! exchange. Every choice is drawn from a [`BattleRng`], so a battle is fully
//! determined by the two teams and the draw sequence.

use alloc::vec::Vec;
use core::fmt;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::error::BattleResult;
use crate::limits::{TurnLimits, DEFAULT_BATTLE_SEED, MAX_TURNS};
use crate::log;
use crate::rng::{BattleRng, XorShiftRng};
use crate::types::{Team, TeamSide};
use crate::units::{collect_units, CombatantRef, UnitState};

/// Events generated during combat, in the order they happened.
///
/// Attack events carry full before/after defense values so a board can be
/// rebuilt from the log alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CombatEvent {
    #[serde(rename_all = "camelCase")]
    Attack {
        attacker: CombatantRef,
        target: CombatantRef,
        damage_to_target: i32,
        damage_to_attacker: i32,
        attacker_defense_before: i32,
        attacker_defense_after: i32,
        target_defense_before: i32,
        target_defense_after: i32,
    },
    #[serde(rename_all = "camelCase")]
    Faint { target: CombatantRef },
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatEvent::Attack {
                attacker,
                target,
                damage_to_target,
                damage_to_attacker,
                attacker_defense_before,
                attacker_defense_after,
                target_defense_before,
                target_defense_after,
            } => write!(
                f,
                "{} attacks {}: deals {} damage ({} -> {}) and takes {} damage ({} -> {})",
                attacker,
                target,
                damage_to_target,
                target_defense_before,
                target_defense_after,
                damage_to_attacker,
                attacker_defense_before,
                attacker_defense_after
            ),
            CombatEvent::Faint { target } => write!(f, "{} faints", target),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode, TypeInfo,
)]
pub enum CombatWinner {
    #[serde(rename = "teamA")]
    TeamA,
    #[serde(rename = "teamB")]
    TeamB,
    #[serde(rename = "draw")]
    Draw,
}

impl From<TeamSide> for CombatWinner {
    fn from(side: TeamSide) -> Self {
        match side {
            TeamSide::TeamA => CombatWinner::TeamA,
            TeamSide::TeamB => CombatWinner::TeamB,
        }
    }
}

impl fmt::Display for CombatWinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatWinner::TeamA => f.write_str("teamA"),
            CombatWinner::TeamB => f.write_str("teamB"),
            CombatWinner::Draw => f.write_str("draw"),
        }
    }
}

/// Outcome of one battle: the winner plus the complete event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
pub struct CombatResult {
    pub winner: CombatWinner,
    pub events: Vec<CombatEvent>,
}

impl CombatResult {
    /// Number of exchanges fought
    pub fn turns(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, CombatEvent::Attack { .. }))
            .count()
    }

    /// Units that fainted, in the order they fell
    pub fn fainted(&self) -> impl Iterator<Item = &CombatantRef> {
        self.events.iter().filter_map(|event| match event {
            CombatEvent::Faint { target } => Some(target),
            CombatEvent::Attack { .. } => None,
        })
    }
}

/// Runtime unit lists for both sides. Lives for a single battle.
struct BattleState {
    team_a: Vec<UnitState>,
    team_b: Vec<UnitState>,
}

impl BattleState {
    fn new(team_a: &Team, team_b: &Team) -> Self {
        Self {
            team_a: collect_units(team_a, TeamSide::TeamA),
            team_b: collect_units(team_b, TeamSide::TeamB),
        }
    }

    fn units(&self, side: TeamSide) -> &[UnitState] {
        match side {
            TeamSide::TeamA => &self.team_a,
            TeamSide::TeamB => &self.team_b,
        }
    }

    /// Positions of living units of `side`, in board order
    fn alive_indices(&self, side: TeamSide) -> Vec<usize> {
        self.units(side)
            .iter()
            .enumerate()
            .filter(|(_, unit)| unit.alive)
            .map(|(index, _)| index)
            .collect()
    }

    fn alive_count(&self, side: TeamSide) -> usize {
        self.units(side).iter().filter(|unit| unit.alive).count()
    }

    /// Borrow the attacking unit of `active` and the targeted unit of its opponent
    fn combatants_mut(
        &mut self,
        active: TeamSide,
        attacker: usize,
        target: usize,
    ) -> (&mut UnitState, &mut UnitState) {
        let (attacking, defending) = match active {
            TeamSide::TeamA => (&mut self.team_a, &mut self.team_b),
            TeamSide::TeamB => (&mut self.team_b, &mut self.team_a),
        };
        (&mut attacking[attacker], &mut defending[target])
    }
}

// ==========================================
// MAIN BATTLE RESOLVER
// ==========================================

/// Resolve a battle with the default seeded generator.
pub fn compute_combat_result(team_a: &Team, team_b: &Team) -> BattleResult<CombatResult> {
    let mut rng = XorShiftRng::seed_from_u32(DEFAULT_BATTLE_SEED);
    compute_combat_result_with_rng(team_a, team_b, &mut rng)
}

/// Resolve a battle drawing every choice from `rng`.
///
/// Draw order: one `next_int(2)` for the side that opens (0 is teamA), then per
/// turn one draw for the attacker followed by one for the target.
pub fn compute_combat_result_with_rng<R: BattleRng + ?Sized>(
    team_a: &Team,
    team_b: &Team,
    rng: &mut R,
) -> BattleResult<CombatResult> {
    let mut state = BattleState::new(team_a, team_b);
    let mut events = Vec::new();
    let mut limits = TurnLimits::new();

    let mut active = if rng.next_int(2)? == 0 {
        TeamSide::TeamA
    } else {
        TeamSide::TeamB
    };
    log::battle_start(state.team_a.len(), state.team_b.len(), active);

    while limits.has_turns_left() {
        let attackers = state.alive_indices(active);
        let defenders = state.alive_indices(active.opponent());

        if attackers.is_empty() || defenders.is_empty() {
            let winner = resolve_winner(
                state.alive_count(TeamSide::TeamA),
                state.alive_count(TeamSide::TeamB),
            );
            log::battle_end(winner, limits.turns_taken(), events.len());
            return Ok(CombatResult { winner, events });
        }

        let attacker_index = attackers[rng.next_int(attackers.len())?];
        let target_index = defenders[rng.next_int(defenders.len())?];
        let (attacker, target) = state.combatants_mut(active, attacker_index, target_index);

        log::turn(limits.turns_taken(), &attacker.reference, &target.reference);
        resolve_exchange(attacker, target, &mut events);

        active = active.opponent();
        limits.record_turn();
    }

    log::turn_cap_reached(MAX_TURNS);
    log::battle_end(CombatWinner::Draw, limits.turns_taken(), events.len());
    Ok(CombatResult {
        winner: CombatWinner::Draw,
        events,
    })
}

/// Both units hit each other at once; the target faints before the attacker.
fn resolve_exchange(attacker: &mut UnitState, target: &mut UnitState, events: &mut Vec<CombatEvent>) {
    let damage_to_target = attacker.attack.max(0);
    let damage_to_attacker = target.attack.max(0);
    let attacker_defense_before = attacker.defense;
    let target_defense_before = target.defense;

    let attacker_defense_after = attacker.take_damage(damage_to_attacker);
    let target_defense_after = target.take_damage(damage_to_target);

    events.push(CombatEvent::Attack {
        attacker: attacker.reference.clone(),
        target: target.reference.clone(),
        damage_to_target,
        damage_to_attacker,
        attacker_defense_before,
        attacker_defense_after,
        target_defense_before,
        target_defense_after,
    });

    for unit in [target, attacker] {
        if unit.defense == 0 {
            unit.alive = false;
            events.push(CombatEvent::Faint {
                target: unit.reference.clone(),
            });
        }
    }
}

/// Decide the winner from the number of living units left on each side.
pub fn resolve_winner(alive_a: usize, alive_b: usize) -> CombatWinner {
    if alive_a == 0 && alive_b == 0 {
        return CombatWinner::Draw;
    }

    if alive_a > 0 {
        return CombatWinner::TeamA;
    }

    CombatWinner::TeamB
}
