use super::*;
use crate::units::{collect_units, CombatantRef};

#[test]
fn test_collect_units_lane_then_slot_order() {
    let team = Team::from_cards(vec![
        vec![Some(goblin()), None, Some(wolf())],
        vec![],
        vec![None, Some(dragon())],
    ]);

    let units = collect_units(&team, TeamSide::TeamB);

    let refs: Vec<CombatantRef> = units.iter().map(|u| u.reference.clone()).collect();
    assert_eq!(
        refs,
        vec![
            CombatantRef::new(TeamSide::TeamB, 0, 0, CardId::from("goblin")),
            CombatantRef::new(TeamSide::TeamB, 0, 2, CardId::from("wolf")),
            CombatantRef::new(TeamSide::TeamB, 2, 1, CardId::from("dragon")),
        ]
    );
}

#[test]
fn test_collect_units_copies_stats() {
    let team = single_lane_team(vec![create_dummy_card("fresh", 4, 3), create_dummy_card("husk", 2, 0)]);

    let mut units = collect_units(&team, TeamSide::TeamA);

    assert_eq!((units[0].attack, units[0].defense, units[0].alive), (4, 3, true));
    // Zero defense means the unit starts out of the fight
    assert!(!units[1].alive);

    units[0].take_damage(10);
    assert_eq!(team.lanes[0][0].card.as_ref().unwrap().defense, 3);
}

#[test]
fn test_take_damage_floors_at_zero() {
    let team = single_card_team(create_dummy_card("x", 1, 5));
    let mut unit = collect_units(&team, TeamSide::TeamA).remove(0);

    assert_eq!(unit.take_damage(2), 3);
    assert_eq!(unit.take_damage(7), 0);
    assert_eq!(unit.defense, 0);
    // Negative damage is ignored rather than healing
    assert_eq!(unit.take_damage(-3), 0);
}

#[test]
fn test_empty_team_has_no_units() {
    assert!(collect_units(&Team::empty(), TeamSide::TeamA).is_empty());
}
