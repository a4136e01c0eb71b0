//! Deterministic combat engine for Lane Clash.
//!
//! Given two teams and a source of randomness, [`compute_combat_result_with_rng`]
//! produces the full ordered log of attacks and faints plus the winner. The log
//! is the only thing a replay needs; see [`replay`].

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod battle;
pub mod error;
pub mod limits;
pub mod log;
pub mod narration;
pub mod replay;
pub mod rng;
pub mod types;
pub mod units;

#[cfg(test)]
mod tests;

pub use battle::{
    compute_combat_result, compute_combat_result_with_rng, resolve_winner, CombatEvent,
    CombatResult, CombatWinner,
};
pub use error::{BattleError, BattleResult};
pub use limits::{DEFAULT_BATTLE_SEED, MAX_TURNS};
pub use narration::{describe_combat_result, describe_winner};
pub use replay::{board_at_step, BattleRecord, BoardState, UnitSnapshot};
pub use rng::{BattleRng, SequenceRng, XorShiftRng};
pub use types::*;
pub use units::{collect_units, CombatantRef, UnitState};
