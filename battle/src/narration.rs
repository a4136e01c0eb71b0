//! Plain-text narration of a finished battle.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::battle::{CombatResult, CombatWinner};

/// One line per event, in event order
pub fn describe_combat_result(result: &CombatResult) -> Vec<String> {
    result.events.iter().map(ToString::to_string).collect()
}

pub fn describe_winner(winner: CombatWinner) -> String {
    match winner {
        CombatWinner::Draw => "The battle ends in a draw".to_string(),
        side => format!("{} wins the battle", side),
    }
}
