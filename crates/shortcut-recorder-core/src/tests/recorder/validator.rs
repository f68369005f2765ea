use crate::{
    KeyElement, MouseElement, RawInputEvent, SequenceElement, ShortcutKind, classify,
};

const KEY_CTRL: u16 = 29;
const KEY_A: u16 = 30;
const KEY_S: u16 = 31;

fn key(code: u16) -> SequenceElement {
    SequenceElement::Key(KeyElement::from_event(&RawInputEvent::key_down(code, 0)))
}

fn ctrl_key(code: u16) -> SequenceElement {
    SequenceElement::Key(KeyElement::from_event(
        &RawInputEvent::key_down(code, 0).with_ctrl(),
    ))
}

fn double_key(code: u16) -> SequenceElement {
    let mut element = KeyElement::from_event(&RawInputEvent::key_down(code, 0));
    element.is_double_press = true;
    SequenceElement::Key(element)
}

fn mouse(button: u16, long: bool) -> SequenceElement {
    let mut element = MouseElement::from_event(&RawInputEvent::mouse_down(button, 0));
    element.is_long_press = long;
    element.released = true;
    SequenceElement::Mouse(element)
}

/// WHAT: Empty and lone unmodified keys are rejected
/// WHY: A plain key press is ordinary typing, not a shortcut
#[test]
fn given_empty_or_single_plain_key_when_classifying_then_rejected() {
    assert_eq!(classify(&[]), None);
    assert_eq!(classify(&[key(KEY_A)]), None);
}

/// WHAT: A lone double-pressed key is accepted as DoublePress
/// WHY: Rule 1 has top priority
#[test]
fn given_single_double_pressed_key_when_classifying_then_double_press() {
    assert_eq!(
        classify(&[double_key(KEY_A)]),
        Some(ShortcutKind::DoublePress)
    );
}

/// WHAT: A double-press flag inside a longer sequence does not make it DoublePress
/// WHY: Double-press is only a shape on its own
#[test]
fn given_double_press_within_two_keys_when_classifying_then_two_key() {
    assert_eq!(
        classify(&[key(KEY_S), double_key(KEY_A)]),
        Some(ShortcutKind::TwoKey)
    );
}

/// WHAT: Modifier on the first key wins over the two-key rule
/// WHY: Rule 2 precedes rule 5 for sequences of two or more
#[test]
fn given_modified_first_key_when_classifying_then_modifier_key() {
    // Given: Ctrl+A, and a longer Ctrl-led sequence
    let pair = [ctrl_key(KEY_CTRL), ctrl_key(KEY_A)];
    let triple = [ctrl_key(KEY_CTRL), ctrl_key(KEY_A), ctrl_key(KEY_S)];

    // When/Then: Both are modifier+key combinations
    assert_eq!(classify(&pair), Some(ShortcutKind::ModifierKey));
    assert_eq!(classify(&triple), Some(ShortcutKind::ModifierKey));
}

/// WHAT: A single modified key is still rejected
/// WHY: Rule 2 needs at least two elements
#[test]
fn given_single_modified_key_when_classifying_then_rejected() {
    assert_eq!(classify(&[ctrl_key(KEY_CTRL)]), None);
}

/// WHAT: Plain left/right clicks are rejected, long presses accepted
/// WHY: Ordinary clicks must keep working as clicks
#[test]
fn given_single_mouse_press_when_classifying_then_only_non_plain_clicks_accepted() {
    assert_eq!(classify(&[mouse(1, false)]), None);
    assert_eq!(classify(&[mouse(2, false)]), None);
    assert_eq!(classify(&[mouse(1, true)]), Some(ShortcutKind::MouseButton));
    assert_eq!(classify(&[mouse(2, true)]), Some(ShortcutKind::MouseButton));
    assert_eq!(classify(&[mouse(3, false)]), Some(ShortcutKind::MouseButton));
    assert_eq!(classify(&[mouse(5, false)]), Some(ShortcutKind::MouseButton));
}

/// WHAT: Modifier key then mouse is accepted via rule 2 before rule 4
/// WHY: First key carrying Ctrl/Alt already satisfies modifier+key
#[test]
fn given_ctrl_then_click_when_classifying_then_modifier_key_takes_priority() {
    assert_eq!(
        classify(&[ctrl_key(KEY_CTRL), mouse(1, false)]),
        Some(ShortcutKind::ModifierKey)
    );
}

/// WHAT: Modified mouse-led pair is a modifier+mouse combination
/// WHY: Rule 4 only checks the first element's flags, not its type
#[test]
fn given_modified_mouse_then_mouse_when_classifying_then_modifier_mouse() {
    // Given: Middle press with Alt held, then a left click
    let mut first = MouseElement::from_event(&RawInputEvent::mouse_down(3, 0).with_alt());
    first.released = true;
    let sequence = [SequenceElement::Mouse(first), mouse(1, false)];

    // When/Then: Classified as modifier+mouse
    assert_eq!(classify(&sequence), Some(ShortcutKind::ModifierMouse));
}

/// WHAT: Unmodified mouse pairs are rejected
/// WHY: Two clicks with no modifier are not a shortcut
#[test]
fn given_two_plain_mouse_presses_when_classifying_then_rejected() {
    assert_eq!(classify(&[mouse(1, false), mouse(2, false)]), None);
}

/// WHAT: Two distinct plain keys are a two-key sequence, the same key twice is not
/// WHY: Rule 5 requires different codes
#[test]
fn given_two_plain_keys_when_classifying_then_distinct_codes_required() {
    assert_eq!(classify(&[key(KEY_A), key(KEY_S)]), Some(ShortcutKind::TwoKey));
    assert_eq!(classify(&[key(KEY_A), key(KEY_A)]), None);
}

/// WHAT: Three plain keys are rejected
/// WHY: Only two-element plain sequences are recognized
#[test]
fn given_three_plain_keys_when_classifying_then_rejected() {
    assert_eq!(classify(&[key(KEY_A), key(KEY_S), key(KEY_CTRL)]), None);
}
