use clash_battle::{compute_combat_result, CombatEvent, CombatWinner};
use clash_cards::{all_cards, parse_cards_markdown, parse_lineup, parse_lineup_from, validate_team};

const CARDS_MD: &str = "\
# Test set

## Iron Bear | 9/9 | Rare
![Iron Bear](https://cdn.example.com/cards/iron-bear.png)
> Sleeps through winter and most sieges.

## Field Mouse | 1/1 | Common
![Field Mouse](https://cdn.example.com/cards/field-mouse.png)
";

#[test]
fn test_markdown_cards_fight() {
    let pool = parse_cards_markdown(CARDS_MD, "test-set.md").unwrap();
    let team_a = parse_lineup_from("iron-bear", &pool).unwrap();
    let team_b = parse_lineup_from("field-mouse;-", &pool).unwrap();
    validate_team(&team_a).unwrap();
    validate_team(&team_b).unwrap();

    let result = compute_combat_result(&team_a, &team_b).unwrap();

    assert_eq!(result.winner, CombatWinner::TeamA);
    assert_eq!(result.events.len(), 2);
    match &result.events[0] {
        CombatEvent::Attack {
            attacker,
            target,
            target_defense_after,
            attacker_defense_after,
            ..
        } => {
            let (bear, mouse_defense, bear_defense) = if attacker.card_id.as_str() == "iron-bear" {
                (attacker, target_defense_after, attacker_defense_after)
            } else {
                (target, attacker_defense_after, target_defense_after)
            };
            assert_eq!(bear.card_id.as_str(), "iron-bear");
            assert_eq!(*mouse_defense, 0);
            assert_eq!(*bear_defense, 8);
        }
        other => panic!("expected an attack first, got {other:?}"),
    }
}

#[test]
fn test_catalog_lineup_battle_is_repeatable() {
    let team_a = parse_lineup("goblin,knight;priest").unwrap();
    let team_b = parse_lineup("wolf,archer;skeleton").unwrap();

    let first = compute_combat_result(&team_a, &team_b).unwrap();
    let second = compute_combat_result(&team_a, &team_b).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.winner, CombatWinner::TeamA);
    assert_eq!(all_cards().len(), 10);
}
