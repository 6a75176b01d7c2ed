use crate::core::types::{
    Binding, Gesture, JoystickAction, ModifierKeys, ModifierState, GESTURE_PREFIX,
    JOYSTICK_PREFIX, KEY_PREFIX, UNICODE_PREFIX,
};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_exact_flags_match_only_their_own_state() {
    // Every exact combination pins every flag
    for shift in [false, true] {
        for ctrl in [false, true] {
            for alt in [false, true] {
                let keys = ModifierKeys::exact(shift, ctrl, alt);

                for actual in [false, true] {
                    assert_eq!(keys.shift_matches(actual), actual == shift);
                    assert_eq!(keys.ctrl_matches(actual), actual == ctrl);
                    assert_eq!(keys.alt_matches(actual), actual == alt);
                }
            }
        }
    }
}

#[test]
fn test_dont_care_flag_matches_both_states() {
    let keys = ModifierKeys::allow_shift();

    assert!(keys.shift_matches(true));
    assert!(keys.shift_matches(false));

    // The other two stay pinned released
    assert!(keys.ctrl_matches(false));
    assert!(!keys.ctrl_matches(true));
    assert!(keys.alt_matches(false));
    assert!(!keys.alt_matches(true));
}

#[test]
fn test_allow_ctrl_and_allow_alt_wildcards() {
    assert!(ModifierKeys::allow_ctrl().ctrl_matches(true));
    assert!(ModifierKeys::allow_ctrl().ctrl_matches(false));
    assert!(ModifierKeys::allow_alt().alt_matches(true));
    assert!(ModifierKeys::allow_alt().alt_matches(false));
}

#[test]
fn test_behavioural_equality_across_construction_paths() {
    // Same resolved behaviour, different constructors
    let from_event = ModifierKeys::exact(true, false, false);
    let from_builder = ModifierKeys::new(
        ModifierState::Required(true),
        ModifierState::Required(false),
        ModifierState::Required(false),
    );

    assert_eq!(from_event, from_builder);
    assert_eq!(hash_of(&from_event), hash_of(&from_builder));
}

#[test]
fn test_equal_bindings_hash_identically() {
    let one = Binding::keycode_with(ModifierKeys::shift(), 29);
    let two = Binding::keycode_with(ModifierKeys::exact(true, false, false), 29);

    assert_eq!(one, two);
    assert_eq!(hash_of(&one), hash_of(&two));
}

#[test]
fn test_unicode_to_string() {
    assert_eq!(
        format!("{}\u{00C4}", UNICODE_PREFIX),
        Binding::unicode('\u{00C4}').to_string()
    );
    assert_eq!(
        format!("{}Ctrl+\u{00C4}", UNICODE_PREFIX),
        Binding::unicode_with(ModifierKeys::ctrl(), '\u{00C4}').to_string()
    );
    assert_eq!(
        format!("{}Shift+\u{00C4}", UNICODE_PREFIX),
        Binding::unicode_with(ModifierKeys::shift(), '\u{00C4}').to_string()
    );
    assert_eq!(
        format!("{}Alt+\u{00C4}", UNICODE_PREFIX),
        Binding::unicode_with(ModifierKeys::alt(), '\u{00C4}').to_string()
    );
    assert_eq!(
        format!("{}Ctrl+Alt+Shift+\u{00C4}", UNICODE_PREFIX),
        Binding::unicode_with(ModifierKeys::exact(true, true, true), '\u{00C4}').to_string()
    );
}

#[test]
fn test_ctrl_shift_renders_in_canonical_order() {
    // shift pressed, ctrl pressed, alt released
    let binding = Binding::unicode_with(ModifierKeys::exact(true, true, false), '\u{00C4}');

    assert_eq!(
        binding.to_string(),
        format!("{}Ctrl+Shift+\u{00C4}", UNICODE_PREFIX)
    );
}

#[test]
fn test_keycode_to_string() {
    assert_eq!(format!("{}52", KEY_PREFIX), Binding::keycode(52).to_string());
    assert_eq!(
        format!("{}Ctrl+52", KEY_PREFIX),
        Binding::keycode_with(ModifierKeys::ctrl(), 52).to_string()
    );
}

#[test]
fn test_gesture_to_string() {
    assert_eq!(
        format!("{}TAP_TOP", GESTURE_PREFIX),
        Binding::gesture(Gesture::TapTop).to_string()
    );
}

#[test]
fn test_joystick_to_string() {
    assert_eq!(
        format!("{}TRIGGER_LEFT", JOYSTICK_PREFIX),
        Binding::joystick(JoystickAction::TriggerLeft).to_string()
    );
}

#[test]
fn test_unknown_to_string() {
    // Serialising an unbound entry must save nothing
    assert_eq!(Binding::unknown().to_string(), "");
}

#[test]
fn test_gesture_names_round_trip() {
    let all = [
        Gesture::TapTopLeft,
        Gesture::TapTop,
        Gesture::TapTopRight,
        Gesture::TapLeft,
        Gesture::TapCenter,
        Gesture::TapRight,
        Gesture::TapBottomLeft,
        Gesture::TapBottom,
        Gesture::TapBottomRight,
        Gesture::SwipeUp,
        Gesture::SwipeDown,
        Gesture::SwipeLeft,
        Gesture::SwipeRight,
        Gesture::DoubleTap,
        Gesture::LongTap,
    ];

    for gesture in all {
        assert_eq!(Gesture::from_name(gesture.name()), Some(gesture));
    }
    assert_eq!(Gesture::from_name("PINCH"), None);
}

#[test]
fn test_joystick_names_round_trip() {
    let all = [
        JoystickAction::AxisUp,
        JoystickAction::AxisDown,
        JoystickAction::AxisLeft,
        JoystickAction::AxisRight,
        JoystickAction::TriggerLeft,
        JoystickAction::TriggerRight,
        JoystickAction::ButtonA,
        JoystickAction::ButtonB,
        JoystickAction::ButtonX,
        JoystickAction::ButtonY,
    ];

    for action in all {
        assert_eq!(JoystickAction::from_name(action.name()), Some(action));
    }
    assert_eq!(JoystickAction::from_name("BUTTON_Z"), None);
}

#[test]
fn test_exact_stored_binding_requires_exact_modifiers() {
    let stored = Binding::keycode_with(ModifierKeys::ctrl(), 29);

    assert!(stored.matches(&Binding::keycode_with(ModifierKeys::exact(false, true, false), 29)));
    assert!(!stored.matches(&Binding::keycode(29)));
    assert!(!stored.matches(&Binding::keycode_with(ModifierKeys::ctrl(), 30)));
}

#[test]
fn test_matches_never_crosses_variants() {
    // Keycode 65 and the letter 'A' describe different event facets
    assert!(!Binding::keycode(65).matches(&Binding::unicode('A')));
    assert!(!Binding::gesture(Gesture::TapTop).matches(&Binding::joystick(JoystickAction::ButtonA)));
}

#[test]
fn test_is_key() {
    assert!(Binding::keycode(1).is_key());
    assert!(Binding::unicode('x').is_key());
    assert!(!Binding::gesture(Gesture::SwipeUp).is_key());
    assert!(!Binding::joystick(JoystickAction::ButtonA).is_key());
    assert!(!Binding::unknown().is_key());
}
