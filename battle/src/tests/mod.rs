mod limits;
mod narration;
mod units;

use alloc::vec;
use alloc::vec::Vec;

use crate::battle::{compute_combat_result_with_rng, CombatResult};
use crate::rng::{SequenceRng, XorShiftRng};
use crate::types::*;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

fn create_dummy_card(id: &str, atk: i32, def: i32) -> Card {
    Card::new(id, id, atk, def).with_types(&["test"])
}

fn goblin() -> Card {
    Card::new("goblin", "Goblin", 2, 1).with_types(&["goblin", "creature"])
}

fn wolf() -> Card {
    Card::new("wolf", "Wolf", 3, 2).with_types(&["beast", "creature"])
}

fn dragon() -> Card {
    Card::new("dragon", "Dragon", 8, 8)
        .with_types(&["dragon", "beast"])
        .with_rarity(Rarity::Legendary)
}

fn single_lane_team(cards: Vec<Card>) -> Team {
    Team::new(vec![cards.into_iter().map(CardSlot::with_card).collect()])
}

fn single_card_team(card: Card) -> Team {
    single_lane_team(vec![card])
}

fn run_scripted(team_a: &Team, team_b: &Team, draws: &[f64]) -> CombatResult {
    let mut rng = SequenceRng::new(draws.to_vec());
    compute_combat_result_with_rng(team_a, team_b, &mut rng).unwrap()
}

fn run_seeded(team_a: &Team, team_b: &Team, seed: u64) -> CombatResult {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    compute_combat_result_with_rng(team_a, team_b, &mut rng).unwrap()
}
