use crate::{RecorderConfig, RecorderError, ShortcutRecorder, ShortcutDescriptor};

/// WHAT: Default configuration uses 500ms windows and an arrow separator
/// WHY: Matches the documented recognition behavior out of the box
#[test]
fn given_default_config_when_validating_then_succeeds() {
    // Given: The default configuration
    let config = RecorderConfig::default();

    // When: Validating it
    let result = config.validate();

    // Then: It is accepted with the documented values
    assert!(result.is_ok());
    assert_eq!(config.long_press_threshold_ms, 500);
    assert_eq!(config.double_press_threshold_ms, 500);
    assert_eq!(config.separator, " → ");
}

/// WHAT: Zero thresholds are rejected
/// WHY: A zero long-press window would make every click long
#[test]
fn given_zero_threshold_when_validating_then_invalid_threshold_error() {
    // Given: Configs with each threshold zeroed
    let long = RecorderConfig {
        long_press_threshold_ms: 0,
        ..RecorderConfig::default()
    };
    let double = RecorderConfig {
        double_press_threshold_ms: 0,
        ..RecorderConfig::default()
    };

    // When/Then: Both fail naming the offending threshold
    assert!(matches!(
        long.validate(),
        Err(RecorderError::InvalidThreshold { name: "long-press", .. })
    ));
    assert!(matches!(
        double.validate(),
        Err(RecorderError::InvalidThreshold { name: "double-press", .. })
    ));
}

/// WHAT: Engine construction refuses an empty separator
/// WHY: Multi-element labels would be unreadable
#[test]
fn given_empty_separator_when_creating_recorder_then_invalid_separator_error() {
    // Given: A config with an empty separator
    let config = RecorderConfig {
        separator: String::new(),
        ..RecorderConfig::default()
    };

    // When: Creating a recorder
    let result = ShortcutRecorder::new(config, |_: ShortcutDescriptor| {});

    // Then: Construction fails
    assert!(matches!(result, Err(RecorderError::InvalidSeparator { .. })));
}
