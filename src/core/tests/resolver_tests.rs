use crate::core::resolver::{possible_gesture_bindings, possible_key_bindings, KeyPress};
use crate::core::types::{Binding, Gesture, ModifierKeys};

fn press(keycode: u32, unicode_char: Option<char>, shift: bool, ctrl: bool, alt: bool) -> KeyPress {
    KeyPress {
        keycode,
        unicode_char,
        shift,
        ctrl,
        alt,
    }
}

/// A press that produced a character has exactly two interpretations:
/// the keycode and the character, both with the live modifiers, no
/// duplicates.
#[test]
fn test_character_press_yields_both_interpretations() {
    let candidates = possible_key_bindings(&press(31, Some('\u{00C4}'), false, false, false));

    assert_eq!(candidates.len(), 2);
    assert!(candidates.contains(&Binding::keycode(31)));
    assert!(candidates.contains(&Binding::unicode('\u{00C4}')));

    let mut deduped = candidates.clone();
    deduped.dedup();
    assert_eq!(deduped.len(), candidates.len());
}

#[test]
fn test_characterless_press_yields_only_the_keycode() {
    let candidates = possible_key_bindings(&press(111, None, false, false, false));

    assert_eq!(candidates, vec![Binding::keycode(111)]);
}

/// Live modifier flags are captured exactly on every candidate: each flag
/// matches its observed state and only that state.
#[test]
fn test_live_modifiers_are_captured_exactly() {
    for shift in [false, true] {
        for ctrl in [false, true] {
            for alt in [false, true] {
                let candidates =
                    possible_key_bindings(&press(29, Some('a'), shift, ctrl, alt));

                assert_eq!(candidates.len(), 2);
                for candidate in candidates {
                    let modifiers = match candidate {
                        Binding::KeyCode { modifiers, .. } => modifiers,
                        Binding::UnicodeCharacter { modifiers, .. } => modifiers,
                        other => panic!("unexpected candidate: {:?}", other),
                    };

                    assert_eq!(modifiers, ModifierKeys::exact(shift, ctrl, alt));
                    assert_eq!(modifiers.shift_matches(shift), true);
                    assert_eq!(modifiers.shift_matches(!shift), false);
                    assert_eq!(modifiers.ctrl_matches(ctrl), true);
                    assert_eq!(modifiers.ctrl_matches(!ctrl), false);
                    assert_eq!(modifiers.alt_matches(alt), true);
                    assert_eq!(modifiers.alt_matches(!alt), false);
                }
            }
        }
    }
}

#[test]
fn test_resolution_never_yields_unknown() {
    let candidates = possible_key_bindings(&press(0, None, true, true, true));

    assert!(!candidates.is_empty());
    assert!(candidates.iter().all(|b| !b.is_unknown()));
}

#[test]
fn test_gesture_resolves_to_exactly_one_binding() {
    let candidates = possible_gesture_bindings(Gesture::TapTop);

    assert_eq!(candidates, vec![Binding::gesture(Gesture::TapTop)]);
}

/// Candidates feed straight into stored-binding matching: a configured
/// chord matches the candidate carrying the same live state.
#[test]
fn test_candidates_match_configured_chords() {
    let stored = Binding::keycode_with(ModifierKeys::ctrl(), 46);
    let candidates = possible_key_bindings(&press(46, Some('c'), false, true, false));

    assert!(candidates.iter().any(|candidate| stored.matches(candidate)));

    let without_ctrl = possible_key_bindings(&press(46, Some('c'), false, false, false));
    assert!(!without_ctrl.iter().any(|candidate| stored.matches(candidate)));
}

#[test]
fn test_key_press_modifier_keys_helper() {
    let event = press(10, None, true, false, true);

    assert_eq!(event.modifier_keys(), ModifierKeys::exact(true, false, true));
    assert_eq!(KeyPress::new(10, None).modifier_keys(), ModifierKeys::unmodified());
}
