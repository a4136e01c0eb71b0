//! Battle limits and fixed engine constants

/// Seed used by [`crate::battle::compute_combat_result`] for canonical battles.
pub const DEFAULT_BATTLE_SEED: u32 = 0x0fab1e;

/// Upper bound on turns in a single battle. A battle that reaches it is a draw.
pub const MAX_TURNS: u32 = 10_000;

/// Counts turns against [`MAX_TURNS`] so the resolver always terminates
#[derive(Debug, Clone, Default)]
pub struct TurnLimits {
    turns_taken: u32,
}

impl TurnLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    /// Whether another turn may be played
    pub fn has_turns_left(&self) -> bool {
        self.turns_taken < MAX_TURNS
    }

    pub fn record_turn(&mut self) {
        self.turns_taken += 1;
    }
}
