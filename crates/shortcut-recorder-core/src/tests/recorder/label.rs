use crate::{
    KeyElement, LabelFormatter, MouseElement, RawInputEvent, SequenceElement, button_name,
    key_name,
};

fn key(code: u16) -> SequenceElement {
    SequenceElement::Key(KeyElement::from_event(&RawInputEvent::key_down(code, 0)))
}

fn mouse(button: u16, long: bool) -> SequenceElement {
    let mut element = MouseElement::from_event(&RawInputEvent::mouse_down(button, 0));
    element.is_long_press = long;
    SequenceElement::Mouse(element)
}

/// WHAT: Mapped key codes resolve to names, unmapped ones fall back
/// WHY: Formatting must never fail on unknown hardware keys
#[test]
fn given_key_codes_when_naming_then_table_or_fallback_used() {
    assert_eq!(key_name(1), "Escape");
    assert_eq!(key_name(29), "Ctrl");
    assert_eq!(key_name(30), "A");
    assert_eq!(key_name(3675), "Meta");
    assert_eq!(key_name(57424), "ArrowDown");
    assert_eq!(key_name(84), "Key84");
    assert_eq!(key_name(0), "Key0");
}

/// WHAT: Buttons 1-3 have fixed names, others fall back
/// WHY: Extra mouse buttons are valid shortcuts and need a label
#[test]
fn given_button_ids_when_naming_then_fixed_or_fallback_used() {
    assert_eq!(button_name(1), "Left");
    assert_eq!(button_name(2), "Right");
    assert_eq!(button_name(3), "Middle");
    assert_eq!(button_name(4), "Button4");
}

/// WHAT: Mixed sequences join with the separator in press order
/// WHY: Label mirrors exactly what the user pressed
#[test]
fn given_mixed_sequence_when_formatting_then_joined_in_order() {
    // Given: Ctrl, A, then a long middle press
    let formatter = LabelFormatter::new(" → ");
    let sequence = [key(29), key(30), mouse(3, true)];

    // When: Formatting
    let label = formatter.format(&sequence);

    // Then: Elements are joined in order
    assert_eq!(label, "Ctrl → A → MiddleLongPress");
}

/// WHAT: Double-press renders as Double-<key>
/// WHY: The repeated key is one shortcut, not two elements
#[test]
fn given_double_press_when_formatting_then_double_prefix() {
    // Given: A single double-pressed Shift
    let formatter = LabelFormatter::new(" + ");
    let mut shift = KeyElement::from_event(&RawInputEvent::key_down(42, 0));
    shift.is_double_press = true;

    // When: Formatting
    let label = formatter.format(&[SequenceElement::Key(shift)]);

    // Then: Double prefix, no separator
    assert_eq!(label, "Double-Shift");
}

/// WHAT: Custom separators and empty sequences
/// WHY: Hosts pick their own separator; empty previews render blank
#[test]
fn given_custom_separator_when_formatting_then_used() {
    let formatter = LabelFormatter::new(" + ");

    assert_eq!(
        formatter.format(&[mouse(1, false), mouse(9, true)]),
        "LeftShortPress + Button9LongPress"
    );
    assert_eq!(formatter.format(&[]), "");
}
