use crate::{PressHistory, is_long_press};

const WINDOW_MS: u64 = 500;
const KEY_A: u16 = 30;
const KEY_S: u16 = 31;

/// WHAT: Two presses inside the window form a double-press
/// WHY: Core of double-press shortcut recognition
#[test]
fn given_two_presses_within_window_when_registering_then_double_detected() {
    // Given: An empty history with one press of A
    let mut history = PressHistory::default();
    assert!(!history.register_press(KEY_A, 1_000, WINDOW_MS));

    // When: A is pressed again 300ms later
    let is_double = history.register_press(KEY_A, 1_300, WINDOW_MS);

    // Then: Double-press detected and history for A cleared
    assert!(is_double);
    assert!(history.presses(KEY_A).is_empty());
}

/// WHAT: Presses exactly one window apart still count
/// WHY: The window is inclusive of its boundary
#[test]
fn given_presses_exactly_window_apart_when_registering_then_double_detected() {
    // Given: One press of A
    let mut history = PressHistory::default();
    history.register_press(KEY_A, 0, WINDOW_MS);

    // When: A is pressed again exactly 500ms later
    let is_double = history.register_press(KEY_A, 500, WINDOW_MS);

    // Then: It is a double-press
    assert!(is_double);
}

/// WHAT: Slow presses slide the window instead of accumulating
/// WHY: Stale presses must not pair with a much later press
#[test]
fn given_presses_outside_window_when_registering_then_old_press_discarded() {
    // Given: One press of A
    let mut history = PressHistory::default();
    history.register_press(KEY_A, 0, WINDOW_MS);

    // When: A is pressed again 600ms later
    let is_double = history.register_press(KEY_A, 600, WINDOW_MS);

    // Then: No double-press, only the newest press is remembered
    assert!(!is_double);
    assert_eq!(history.presses(KEY_A), &[600]);
}

/// WHAT: A third rapid press starts a new pair
/// WHY: Clearing on detection prevents back-to-back false doubles
#[test]
fn given_triple_rapid_press_when_registering_then_only_second_is_double() {
    // Given: An empty history
    let mut history = PressHistory::default();

    // When: A is pressed three times 100ms apart
    let results: Vec<bool> = [0u64, 100, 200]
        .iter()
        .map(|&at| history.register_press(KEY_A, at, WINDOW_MS))
        .collect();

    // Then: Only the second press completes a double
    assert_eq!(results, vec![false, true, false]);
    assert_eq!(history.presses(KEY_A), &[200]);
}

/// WHAT: History is tracked per key
/// WHY: Alternating keys must never look like a double-press
#[test]
fn given_different_keys_when_registering_then_no_double() {
    // Given: An empty history
    let mut history = PressHistory::default();

    // When: A then S are pressed quickly
    let first = history.register_press(KEY_A, 0, WINDOW_MS);
    let second = history.register_press(KEY_S, 50, WINDOW_MS);

    // Then: Neither is a double-press
    assert!(!first);
    assert!(!second);
}

/// WHAT: Long-press boundary is inclusive and tolerates reordered timestamps
/// WHY: Exactly-threshold holds are long; a backwards clock must not underflow
#[test]
fn given_hold_durations_when_checking_long_press_then_threshold_inclusive() {
    assert!(!is_long_press(1_000, 1_499, WINDOW_MS));
    assert!(is_long_press(1_000, 1_500, WINDOW_MS));
    assert!(is_long_press(1_000, 3_000, WINDOW_MS));
    assert!(!is_long_press(1_000, 900, WINDOW_MS));
}
