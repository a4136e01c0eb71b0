use super::*;
use crate::battle::CombatWinner;
use crate::narration::{describe_combat_result, describe_winner};

#[test]
fn test_one_line_per_event_in_order() {
    let team_a = single_card_team(create_dummy_card("test-a", 3, 3));
    let team_b = single_card_team(create_dummy_card("test-b", 3, 3));
    let result = run_scripted(&team_a, &team_b, &[0.0]);

    let lines = describe_combat_result(&result);

    assert_eq!(lines.len(), result.events.len());
    assert!(lines[0].contains("test-a"));
    assert!(lines[0].contains("attacks"));
    assert!(lines[0].contains("test-b"));
    assert!(lines[1].contains("test-b") && lines[1].contains("faints"));
    assert!(lines[2].contains("test-a") && lines[2].contains("faints"));
}

#[test]
fn test_attack_line_reports_damage_both_ways() {
    let result = run_scripted(&single_card_team(dragon()), &single_card_team(goblin()), &[0.0]);

    let lines = describe_combat_result(&result);

    assert_eq!(
        lines[0],
        "teamA dragon (lane 0, slot 0) attacks teamB goblin (lane 0, slot 0): \
         deals 8 damage (1 -> 0) and takes 2 damage (8 -> 6)"
    );
    assert_eq!(lines[1], "teamB goblin (lane 0, slot 0) faints");
}

#[test]
fn test_empty_result_has_no_lines() {
    let result = crate::battle::CombatResult {
        winner: CombatWinner::Draw,
        events: vec![],
    };
    assert!(describe_combat_result(&result).is_empty());
}

#[test]
fn test_describe_winner() {
    assert_eq!(describe_winner(CombatWinner::TeamA), "teamA wins the battle");
    assert_eq!(describe_winner(CombatWinner::TeamB), "teamB wins the battle");
    assert_eq!(describe_winner(CombatWinner::Draw), "The battle ends in a draw");
}
