use crate::limits::{TurnLimits, MAX_TURNS};

#[test]
fn test_turn_limits_count_up_to_the_cap() {
    let mut limits = TurnLimits::new();
    assert_eq!(limits.turns_taken(), 0);
    assert!(limits.has_turns_left());

    for _ in 0..MAX_TURNS - 1 {
        limits.record_turn();
    }
    assert!(limits.has_turns_left());

    limits.record_turn();
    assert_eq!(limits.turns_taken(), MAX_TURNS);
    assert!(!limits.has_turns_left());
}
