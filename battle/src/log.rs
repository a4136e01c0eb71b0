//! Logging helpers
//!
//! Thin wrappers over the `log` facade so battle code reads as a list of
//! named lifecycle points. Nothing is printed unless the host installs a logger.

use crate::battle::CombatWinner;
use crate::units::CombatantRef;
use crate::types::TeamSide;

const TARGET: &str = "clash_battle";

/// Log the start of a battle
#[inline]
pub fn battle_start(team_a_units: usize, team_b_units: usize, first: TeamSide) {
    log::debug!(
        target: TARGET,
        "battle start: teamA={} units, teamB={} units, {} acts first",
        team_a_units,
        team_b_units,
        first
    );
}

/// Log a single exchange
#[inline]
pub fn turn(turn: u32, attacker: &CombatantRef, target: &CombatantRef) {
    log::trace!(target: TARGET, "turn {}: {} -> {}", turn, attacker, target);
}

/// Log that the turn cap forced the battle to end
#[inline]
pub fn turn_cap_reached(max_turns: u32) {
    log::warn!(
        target: TARGET,
        "turn cap of {} reached with both teams standing, declaring a draw",
        max_turns
    );
}

/// Log the battle outcome
#[inline]
pub fn battle_end(winner: CombatWinner, turns: u32, events: usize) {
    log::debug!(
        target: TARGET,
        "battle end: winner={} after {} turns ({} events)",
        winner,
        turns,
        events
    );
}

/// Log an event that could not be applied during replay
#[inline]
pub fn replay_skip(index: usize, reference: &CombatantRef) {
    log::warn!(
        target: TARGET,
        "replay: event {} refers to {} which is not on the board, skipping",
        index,
        reference
    );
}
