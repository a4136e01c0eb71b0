//! Plain-text output for boards, cards and batch summaries.

use clash_battle::replay::{BoardGrid, BoardState};
use clash_battle::types::{Card, TeamSide};
use clash_battle::CombatWinner;

pub fn board_lines(board: &BoardState) -> Vec<String> {
    let mut lines = Vec::new();
    for (side, grid) in [(TeamSide::TeamA, &board.team_a), (TeamSide::TeamB, &board.team_b)] {
        lines.push(format!("{side} ({} alive)", board.alive_count(side)));
        lines.extend(grid_lines(grid));
    }
    lines
}

fn grid_lines(grid: &BoardGrid) -> impl Iterator<Item = String> + '_ {
    grid.iter().enumerate().map(|(lane, slots)| {
        let slots: Vec<String> = slots
            .iter()
            .map(|slot| match slot {
                None => "-".to_string(),
                Some(unit) if !unit.alive => format!("{} (fainted)", unit.name),
                Some(unit) => format!("{} {}/{}", unit.name, unit.attack, unit.defense),
            })
            .collect();
        format!("  lane {lane}: {}", slots.join(" | "))
    })
}

pub fn card_line(card: &Card) -> String {
    format!(
        "{:<14} {:<16} {:>2}/{:<2} {:<9} {}",
        card.id.as_str(),
        card.name,
        card.attack,
        card.defense,
        card.rarity.as_str(),
        card.types.join(", ")
    )
}

/// Outcome counts over a batch of seeded battles.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub team_a_wins: u64,
    pub team_b_wins: u64,
    pub draws: u64,
    pub total_turns: u64,
}

impl BatchSummary {
    pub fn record(mut self, winner: CombatWinner, turns: usize) -> Self {
        match winner {
            CombatWinner::TeamA => self.team_a_wins += 1,
            CombatWinner::TeamB => self.team_b_wins += 1,
            CombatWinner::Draw => self.draws += 1,
        }
        self.total_turns += turns as u64;
        self
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            team_a_wins: self.team_a_wins + other.team_a_wins,
            team_b_wins: self.team_b_wins + other.team_b_wins,
            draws: self.draws + other.draws,
            total_turns: self.total_turns + other.total_turns,
        }
    }

    pub fn runs(&self) -> u64 {
        self.team_a_wins + self.team_b_wins + self.draws
    }

    pub fn lines(&self) -> Vec<String> {
        let runs = self.runs().max(1) as f64;
        let share = |count: u64| 100.0 * count as f64 / runs;
        vec![
            format!("runs:       {}", self.runs()),
            format!("teamA wins: {} ({:.1}%)", self.team_a_wins, share(self.team_a_wins)),
            format!("teamB wins: {} ({:.1}%)", self.team_b_wins, share(self.team_b_wins)),
            format!("draws:      {} ({:.1}%)", self.draws, share(self.draws)),
            format!("avg turns:  {:.2}", self.total_turns as f64 / runs),
        ]
    }
}
