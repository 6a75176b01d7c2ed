//! Raw-event to candidate-binding resolution
//!
//! A single physical key press is legitimately described by more than one
//! binding: the hardware keycode that was pressed, and the unicode
//! character the layout produced for it (if any). The resolver enumerates
//! every valid interpretation exactly once; the dispatcher then tests the
//! candidates against configured bindings.
//!
//! Resolution is a pure function of the event. It never produces
//! [`Binding::Unknown`]: an event always has a concrete interpretation,
//! and the sentinel is reserved for "user explicitly cleared this binding".

use crate::core::types::{Binding, Gesture, ModifierKeys};

/// One key-press event as delivered by the input-event collaborator.
///
/// `unicode_char` is the code point the active layout produced for this
/// press, or `None` when the key yields no character (function keys,
/// media keys, bare modifier presses).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KeyPress {
    /// Raw hardware keycode, opaque to this crate.
    pub keycode: u32,
    /// Character produced by the layout, if any.
    pub unicode_char: Option<char>,
    /// Shift held at press time.
    pub shift: bool,
    /// Ctrl held at press time.
    pub ctrl: bool,
    /// Alt held at press time.
    pub alt: bool,
}

impl KeyPress {
    /// Key press with no modifiers held.
    pub const fn new(keycode: u32, unicode_char: Option<char>) -> Self {
        Self {
            keycode,
            unicode_char,
            shift: false,
            ctrl: false,
            alt: false,
        }
    }

    /// The live modifier flags as an exact requirement set.
    pub const fn modifier_keys(&self) -> ModifierKeys {
        ModifierKeys::exact(self.shift, self.ctrl, self.alt)
    }
}

/// All bindings that describe the given key press, each exactly once.
///
/// The result always contains a [`Binding::KeyCode`] candidate built from
/// the live modifier flags, and additionally a
/// [`Binding::UnicodeCharacter`] candidate with the same flags when the
/// press produced a character. Callers must treat the result as a set:
/// the order of candidates is not part of the contract.
pub fn possible_key_bindings(event: &KeyPress) -> Vec<Binding> {
    let modifiers = event.modifier_keys();

    let mut candidates = vec![Binding::keycode_with(modifiers, event.keycode)];
    if let Some(character) = event.unicode_char {
        candidates.push(Binding::unicode_with(modifiers, character));
    }

    candidates
}

/// The single binding that describes the given classified gesture.
///
/// Returned as a list for symmetry with [`possible_key_bindings`]; a
/// gesture has exactly one interpretation.
pub fn possible_gesture_bindings(gesture: Gesture) -> Vec<Binding> {
    vec![Binding::gesture(gesture)]
}
