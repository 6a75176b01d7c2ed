//! src/core/types.rs
//!
//! Core type definitions for input binding resolution
//!
//! This module defines the fundamental types used throughout the crate:
//! - `ModifierState`: Per-flag tri-state (required pressed, required released, don't-care)
//! - `ModifierKeys`: Shift/ctrl/alt state attached to key-based bindings
//! - `Binding`: One user-facing input description (unicode char, keycode, gesture, joystick)
//! - `Gesture` / `JoystickAction`: Symbolic vocabularies delivered by the classifiers
//!
//! All types implement serialization for config persistence. Equality and
//! hashing are defined over match behaviour, not construction path: the
//! tri-state encoding is canonical, so two `ModifierKeys` built differently
//! but matching the same events always compare equal and hash identically.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved prefix marking a serialized gesture binding.
pub const GESTURE_PREFIX: char = '\u{235D}';
/// Reserved prefix marking a serialized keycode binding.
pub const KEY_PREFIX: char = '\u{2328}';
/// Reserved prefix marking a serialized unicode-character binding.
pub const UNICODE_PREFIX: char = '\u{2705}';
/// Reserved prefix marking a serialized joystick binding.
pub const JOYSTICK_PREFIX: char = '\u{25EF}';

/// Match requirement for a single modifier flag
///
/// `Required(pressed)` pins the flag to one physical state. `Any` accepts
/// both states and is only produced by the app-defined constructors on
/// [`ModifierKeys`]; live events and deserialized bindings are always exact.
///
/// Each distinct match behaviour has exactly one representation here, which
/// is what lets `ModifierKeys` derive `Eq`/`Hash` and still honour
/// behavioural equality.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ModifierState {
    /// Flag must be in the given pressed state.
    Required(bool),
    /// Flag is ignored during matching.
    Any,
}

impl ModifierState {
    /// True iff the given physical state satisfies this requirement.
    pub fn matches(self, pressed: bool) -> bool {
        match self {
            ModifierState::Required(required) => required == pressed,
            ModifierState::Any => true,
        }
    }

    /// True iff every state accepted by `other` is accepted by `self`.
    fn accepts(self, other: ModifierState) -> bool {
        match (self, other) {
            (ModifierState::Any, _) => true,
            (ModifierState::Required(_), ModifierState::Any) => false,
            (ModifierState::Required(a), ModifierState::Required(b)) => a == b,
        }
    }
}

/// Shift/ctrl/alt state carried by key-based bindings
///
/// Built in one of two modes:
/// - *Exact*: all three flags pinned to the states observed on a live event
///   ([`ModifierKeys::exact`] and friends).
/// - *App-defined*: individual flags marked don't-care for chords that are
///   predefined in code independently of one modifier
///   ([`ModifierKeys::allow_shift`] etc., or [`ModifierKeys::new`] for
///   arbitrary combinations).
///
/// Immutable once constructed.
///
/// # Example
/// ```
/// use input_bindings::core::types::ModifierKeys;
///
/// let live = ModifierKeys::exact(true, false, false);
/// assert!(live.shift_matches(true));
/// assert!(!live.shift_matches(false));
///
/// let either_shift = ModifierKeys::allow_shift();
/// assert!(either_shift.shift_matches(true));
/// assert!(either_shift.shift_matches(false));
/// ```
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ModifierKeys {
    shift: ModifierState,
    ctrl: ModifierState,
    alt: ModifierState,
}

impl ModifierKeys {
    /// General constructor: arbitrary per-flag requirements.
    pub const fn new(shift: ModifierState, ctrl: ModifierState, alt: ModifierState) -> Self {
        Self { shift, ctrl, alt }
    }

    /// All three flags pinned to the given physical states.
    ///
    /// This is the mode used for live events and for anything restored from
    /// serialized text.
    pub const fn exact(shift: bool, ctrl: bool, alt: bool) -> Self {
        Self::new(
            ModifierState::Required(shift),
            ModifierState::Required(ctrl),
            ModifierState::Required(alt),
        )
    }

    /// No modifiers held: `exact(false, false, false)`.
    pub const fn unmodified() -> Self {
        Self::exact(false, false, false)
    }

    /// Shift held, nothing else: `exact(true, false, false)`.
    pub const fn shift() -> Self {
        Self::exact(true, false, false)
    }

    /// Ctrl held, nothing else: `exact(false, true, false)`.
    pub const fn ctrl() -> Self {
        Self::exact(false, true, false)
    }

    /// Alt held, nothing else: `exact(false, false, true)`.
    pub const fn alt() -> Self {
        Self::exact(false, false, true)
    }

    /// App-defined: fires with or without shift, ctrl and alt released.
    pub const fn allow_shift() -> Self {
        Self::new(
            ModifierState::Any,
            ModifierState::Required(false),
            ModifierState::Required(false),
        )
    }

    /// App-defined: fires with or without ctrl, shift and alt released.
    pub const fn allow_ctrl() -> Self {
        Self::new(
            ModifierState::Required(false),
            ModifierState::Any,
            ModifierState::Required(false),
        )
    }

    /// App-defined: fires with or without alt, shift and ctrl released.
    pub const fn allow_alt() -> Self {
        Self::new(
            ModifierState::Required(false),
            ModifierState::Required(false),
            ModifierState::Any,
        )
    }

    /// True iff the shift requirement accepts the given physical state.
    pub fn shift_matches(&self, pressed: bool) -> bool {
        self.shift.matches(pressed)
    }

    /// True iff the ctrl requirement accepts the given physical state.
    pub fn ctrl_matches(&self, pressed: bool) -> bool {
        self.ctrl.matches(pressed)
    }

    /// True iff the alt requirement accepts the given physical state.
    pub fn alt_matches(&self, pressed: bool) -> bool {
        self.alt.matches(pressed)
    }

    /// True iff this requirement set accepts every event `live` describes.
    ///
    /// `live` is typically exact, built from a resolver candidate. A
    /// don't-care flag here accepts either state there; a pinned flag here
    /// requires the same pinned state there.
    pub fn accepts(&self, live: &ModifierKeys) -> bool {
        self.shift.accepts(live.shift) && self.ctrl.accepts(live.ctrl) && self.alt.accepts(live.alt)
    }
}

/// Renders the serialized modifier token sequence.
///
/// Tokens appear in canonical order (Ctrl, Alt, Shift) and only for flags
/// that are required pressed. Don't-care and required-released flags render
/// nothing, so serialized text always denotes an exact chord.
impl fmt::Display for ModifierKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl == ModifierState::Required(true) {
            write!(f, "Ctrl+")?;
        }
        if self.alt == ModifierState::Required(true) {
            write!(f, "Alt+")?;
        }
        if self.shift == ModifierState::Required(true) {
            write!(f, "Shift+")?;
        }
        Ok(())
    }
}

/// Classified touch gesture delivered by the gesture collaborator
///
/// Nine tap zones plus four swipe directions plus double/long tap. This
/// crate never classifies raw touches; it only names the results.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Gesture {
    TapTopLeft,
    TapTop,
    TapTopRight,
    TapLeft,
    TapCenter,
    TapRight,
    TapBottomLeft,
    TapBottom,
    TapBottomRight,
    SwipeUp,
    SwipeDown,
    SwipeLeft,
    SwipeRight,
    DoubleTap,
    LongTap,
}

impl Gesture {
    /// Stable serialized name for this gesture.
    pub fn name(self) -> &'static str {
        match self {
            Gesture::TapTopLeft => "TAP_TOP_LEFT",
            Gesture::TapTop => "TAP_TOP",
            Gesture::TapTopRight => "TAP_TOP_RIGHT",
            Gesture::TapLeft => "TAP_LEFT",
            Gesture::TapCenter => "TAP_CENTER",
            Gesture::TapRight => "TAP_RIGHT",
            Gesture::TapBottomLeft => "TAP_BOTTOM_LEFT",
            Gesture::TapBottom => "TAP_BOTTOM",
            Gesture::TapBottomRight => "TAP_BOTTOM_RIGHT",
            Gesture::SwipeUp => "SWIPE_UP",
            Gesture::SwipeDown => "SWIPE_DOWN",
            Gesture::SwipeLeft => "SWIPE_LEFT",
            Gesture::SwipeRight => "SWIPE_RIGHT",
            Gesture::DoubleTap => "DOUBLE_TAP",
            Gesture::LongTap => "LONG_TAP",
        }
    }

    /// Inverse of [`Gesture::name`]; `None` for unrecognized names.
    pub fn from_name(name: &str) -> Option<Self> {
        let gesture = match name {
            "TAP_TOP_LEFT" => Gesture::TapTopLeft,
            "TAP_TOP" => Gesture::TapTop,
            "TAP_TOP_RIGHT" => Gesture::TapTopRight,
            "TAP_LEFT" => Gesture::TapLeft,
            "TAP_CENTER" => Gesture::TapCenter,
            "TAP_RIGHT" => Gesture::TapRight,
            "TAP_BOTTOM_LEFT" => Gesture::TapBottomLeft,
            "TAP_BOTTOM" => Gesture::TapBottom,
            "TAP_BOTTOM_RIGHT" => Gesture::TapBottomRight,
            "SWIPE_UP" => Gesture::SwipeUp,
            "SWIPE_DOWN" => Gesture::SwipeDown,
            "SWIPE_LEFT" => Gesture::SwipeLeft,
            "SWIPE_RIGHT" => Gesture::SwipeRight,
            "DOUBLE_TAP" => Gesture::DoubleTap,
            "LONG_TAP" => Gesture::LongTap,
            _ => return None,
        };
        Some(gesture)
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classified joystick action delivered by the controller collaborator.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum JoystickAction {
    AxisUp,
    AxisDown,
    AxisLeft,
    AxisRight,
    TriggerLeft,
    TriggerRight,
    ButtonA,
    ButtonB,
    ButtonX,
    ButtonY,
}

impl JoystickAction {
    /// Stable serialized name for this action.
    pub fn name(self) -> &'static str {
        match self {
            JoystickAction::AxisUp => "AXIS_UP",
            JoystickAction::AxisDown => "AXIS_DOWN",
            JoystickAction::AxisLeft => "AXIS_LEFT",
            JoystickAction::AxisRight => "AXIS_RIGHT",
            JoystickAction::TriggerLeft => "TRIGGER_LEFT",
            JoystickAction::TriggerRight => "TRIGGER_RIGHT",
            JoystickAction::ButtonA => "BUTTON_A",
            JoystickAction::ButtonB => "BUTTON_B",
            JoystickAction::ButtonX => "BUTTON_X",
            JoystickAction::ButtonY => "BUTTON_Y",
        }
    }

    /// Inverse of [`JoystickAction::name`]; `None` for unrecognized names.
    pub fn from_name(name: &str) -> Option<Self> {
        let action = match name {
            "AXIS_UP" => JoystickAction::AxisUp,
            "AXIS_DOWN" => JoystickAction::AxisDown,
            "AXIS_LEFT" => JoystickAction::AxisLeft,
            "AXIS_RIGHT" => JoystickAction::AxisRight,
            "TRIGGER_LEFT" => JoystickAction::TriggerLeft,
            "TRIGGER_RIGHT" => JoystickAction::TriggerRight,
            "BUTTON_A" => JoystickAction::ButtonA,
            "BUTTON_B" => JoystickAction::ButtonB,
            "BUTTON_X" => JoystickAction::ButtonX,
            "BUTTON_Y" => JoystickAction::ButtonY,
            _ => return None,
        };
        Some(action)
    }
}

impl fmt::Display for JoystickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One user-facing input description
///
/// A closed sum type: exactly one variant is active per value. Key-based
/// variants carry [`ModifierKeys`]; gestures and joystick actions are not
/// modifiable. `Unknown` is the explicit "intentionally unbound" sentinel
/// and is never produced by event resolution.
///
/// Equality is structural per variant, which makes `Binding` usable
/// directly as a `HashMap` key for command lookup and conflict detection.
///
/// # Example
/// ```
/// use input_bindings::core::types::{Binding, ModifierKeys};
///
/// let binding = Binding::keycode_with(ModifierKeys::ctrl(), 52);
/// assert_eq!(binding.to_string(), "\u{2328}Ctrl+52");
/// ```
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Binding {
    /// Typed character input, as produced by the active keyboard layout.
    UnicodeCharacter {
        modifiers: ModifierKeys,
        character: char,
    },
    /// Raw hardware keycode input. The id space belongs to the event source
    /// and is not range-checked here.
    KeyCode { modifiers: ModifierKeys, keycode: u32 },
    /// Classified touch gesture.
    Gesture(Gesture),
    /// Classified joystick action.
    Joystick(JoystickAction),
    /// Intentionally unbound.
    Unknown,
}

impl Binding {
    /// Unicode-character binding with no modifiers held.
    pub const fn unicode(character: char) -> Self {
        Self::unicode_with(ModifierKeys::unmodified(), character)
    }

    /// Unicode-character binding with the given modifier requirements.
    pub const fn unicode_with(modifiers: ModifierKeys, character: char) -> Self {
        Binding::UnicodeCharacter {
            modifiers,
            character,
        }
    }

    /// Keycode binding with no modifiers held.
    pub const fn keycode(keycode: u32) -> Self {
        Self::keycode_with(ModifierKeys::unmodified(), keycode)
    }

    /// Keycode binding with the given modifier requirements.
    pub const fn keycode_with(modifiers: ModifierKeys, keycode: u32) -> Self {
        Binding::KeyCode { modifiers, keycode }
    }

    /// Gesture binding.
    pub const fn gesture(gesture: Gesture) -> Self {
        Binding::Gesture(gesture)
    }

    /// Joystick binding.
    pub const fn joystick(action: JoystickAction) -> Self {
        Binding::Joystick(action)
    }

    /// The explicit "no binding" sentinel.
    pub const fn unknown() -> Self {
        Binding::Unknown
    }

    /// True for the key-based variants (keycode or unicode character).
    pub fn is_key(&self) -> bool {
        matches!(
            self,
            Binding::KeyCode { .. } | Binding::UnicodeCharacter { .. }
        )
    }

    /// True for the unbound sentinel.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Binding::Unknown)
    }

    /// Stored-vs-candidate matching.
    ///
    /// `self` is a configured binding (possibly carrying don't-care
    /// modifiers); `candidate` is one resolver interpretation of a live
    /// event (always exact). Variants must agree, payloads must be equal,
    /// and the stored modifier requirements must accept the candidate's.
    /// `Unknown` matches nothing on either side.
    pub fn matches(&self, candidate: &Binding) -> bool {
        match (self, candidate) {
            (
                Binding::UnicodeCharacter {
                    modifiers,
                    character,
                },
                Binding::UnicodeCharacter {
                    modifiers: live,
                    character: typed,
                },
            ) => character == typed && modifiers.accepts(live),
            (
                Binding::KeyCode { modifiers, keycode },
                Binding::KeyCode {
                    modifiers: live,
                    keycode: pressed,
                },
            ) => keycode == pressed && modifiers.accepts(live),
            (Binding::Gesture(stored), Binding::Gesture(classified)) => stored == classified,
            (Binding::Joystick(stored), Binding::Joystick(classified)) => stored == classified,
            _ => false,
        }
    }
}

/// Renders the canonical serialized form.
///
/// Each variant is tagged by its reserved prefix character; `Unknown`
/// renders as the empty string so serialising it saves nothing. The output
/// is the exact input expected by `core::parser`.
impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::UnicodeCharacter {
                modifiers,
                character,
            } => write!(f, "{}{}{}", UNICODE_PREFIX, modifiers, character),
            Binding::KeyCode { modifiers, keycode } => {
                write!(f, "{}{}{}", KEY_PREFIX, modifiers, keycode)
            }
            Binding::Gesture(gesture) => write!(f, "{}{}", GESTURE_PREFIX, gesture),
            Binding::Joystick(action) => write!(f, "{}{}", JOYSTICK_PREFIX, action),
            Binding::Unknown => Ok(()),
        }
    }
}
