// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/parser.rs
//!
//! Serialized binding decoder
//!
//! This module is the decode half of the binding text format. It handles:
//! - All four prefixed variants (gesture, keycode, unicode char, joystick)
//! - Modifier tokens in canonical order (`Ctrl+`, `Alt+`, `Shift+`)
//! - Multi-binding values joined with `|`
//!
//! # Architecture
//! The decoder uses nom combinators for composable, type-safe parsing.
//! Parsing is the strict inverse of rendering: a decoded binding re-renders
//! to byte-identical text.
//!
//! # Permissive by design
//! Persisted strings can be corrupt, hand-edited, or written by a newer
//! version with variants this build does not know. Decoding therefore never
//! fails hard: a malformed unit yields `None` (or is dropped from a list)
//! and the caller proceeds with "no binding". Configuration loading must
//! not crash on foreign input.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
};
use nom::{
    character::complete::{anychar, char},
    combinator::{map_opt, map_res, opt, rest},
};
use nom::{IResult, Parser};

use crate::core::types::{
    Binding, Gesture, JoystickAction, ModifierKeys, GESTURE_PREFIX, JOYSTICK_PREFIX, KEY_PREFIX,
    UNICODE_PREFIX,
};

/// Separator between serialized units in a multi-binding value.
pub const BINDING_SEPARATOR: char = '|';

/// Decode one serialized unit.
///
/// The empty string decodes to [`Binding::Unknown`] (the sentinel renders
/// as nothing, and the round trip must hold). Anything that is not the
/// exact canonical form of some binding yields `None`.
///
/// # Example
/// ```
/// use input_bindings::core::parser::parse_binding;
/// use input_bindings::core::types::{Binding, ModifierKeys};
///
/// let decoded = parse_binding("\u{2705}Ctrl+\u{00C4}");
/// assert_eq!(
///     decoded,
///     Some(Binding::unicode_with(ModifierKeys::ctrl(), '\u{00C4}'))
/// );
/// assert_eq!(parse_binding("not a binding"), None);
/// ```
pub fn parse_binding(input: &str) -> Option<Binding> {
    if input.is_empty() {
        return Some(Binding::Unknown);
    }

    match alt((
        parse_gesture_binding,
        parse_keycode_binding,
        parse_unicode_binding,
        parse_joystick_binding,
    ))
    .parse(input)
    {
        // Trailing bytes after a well-formed unit make the whole unit
        // malformed, otherwise re-rendering would not be idempotent
        Ok(("", binding)) => Some(binding),
        _ => None,
    }
}

/// Decode a multi-binding value.
///
/// Splits on [`BINDING_SEPARATOR`] and decodes each unit. Malformed units
/// and empty units are dropped silently; garbage input yields an empty
/// vector, never an error.
pub fn parse_binding_list(input: &str) -> Vec<Binding> {
    split_binding_list(input)
        .into_iter()
        .filter_map(parse_binding)
        .filter(|binding| !binding.is_unknown())
        .collect()
}

/// Split a multi-binding value into serialized units.
///
/// A `|` counts as a separator only when the next character is one of the
/// reserved variant prefixes. This keeps a binding *for* the `|` character
/// itself (serialized `✅|`) intact inside a list.
pub fn split_binding_list(input: &str) -> Vec<&str> {
    let mut units = Vec::new();
    let mut start = 0;

    let mut chars = input.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if c != BINDING_SEPARATOR {
            continue;
        }
        if let Some(&(_, next)) = chars.peek() {
            if is_reserved_prefix(next) {
                units.push(&input[start..idx]);
                start = idx + c.len_utf8();
            }
        }
    }

    units.push(&input[start..]);
    units
}

fn is_reserved_prefix(c: char) -> bool {
    matches!(
        c,
        GESTURE_PREFIX | KEY_PREFIX | UNICODE_PREFIX | JOYSTICK_PREFIX
    )
}

/// Parse the modifier token run preceding a key payload.
///
/// Tokens are optional but ordered: `Ctrl+`, then `Alt+`, then `Shift+`.
/// A present token pins the flag pressed, an absent one pins it released,
/// so decoded modifiers are always exact. Out-of-order tokens fall through
/// to the payload parser and make the unit malformed.
pub fn parse_modifier_tokens(input: &str) -> IResult<&str, ModifierKeys> {
    let (input, ctrl_token) = opt(tag("Ctrl+")).parse(input)?;
    let (input, alt_token) = opt(tag("Alt+")).parse(input)?;
    let (input, shift_token) = opt(tag("Shift+")).parse(input)?;

    Ok((
        input,
        ModifierKeys::exact(
            shift_token.is_some(),
            ctrl_token.is_some(),
            alt_token.is_some(),
        ),
    ))
}

/// Parse a gesture unit: gesture prefix followed by the gesture name.
pub fn parse_gesture_binding(input: &str) -> IResult<&str, Binding> {
    let (input, _) = char(GESTURE_PREFIX).parse(input)?;
    let (input, gesture) = map_opt(rest, Gesture::from_name).parse(input)?;

    Ok((input, Binding::gesture(gesture)))
}

/// Parse a keycode unit: key prefix, modifier tokens, decimal keycode.
pub fn parse_keycode_binding(input: &str) -> IResult<&str, Binding> {
    let (input, _) = char(KEY_PREFIX).parse(input)?;
    let (input, modifiers) = parse_modifier_tokens(input)?;
    // map_res rejects overflow along with non-digit payloads
    let (input, keycode) = map_res(
        take_while1(|c: char| c.is_ascii_digit()),
        |digits: &str| digits.parse::<u32>(),
    )
    .parse(input)?;

    Ok((input, Binding::keycode_with(modifiers, keycode)))
}

/// Parse a unicode unit: unicode prefix, modifier tokens, one literal char.
pub fn parse_unicode_binding(input: &str) -> IResult<&str, Binding> {
    let (input, _) = char(UNICODE_PREFIX).parse(input)?;
    let (input, modifiers) = parse_modifier_tokens(input)?;
    let (input, character) = anychar(input)?;

    Ok((input, Binding::unicode_with(modifiers, character)))
}

/// Parse a joystick unit: joystick prefix followed by the action name.
pub fn parse_joystick_binding(input: &str) -> IResult<&str, Binding> {
    let (input, _) = char(JOYSTICK_PREFIX).parse(input)?;
    let (input, action) = map_opt(rest, JoystickAction::from_name).parse(input)?;

    Ok((input, Binding::joystick(action)))
}
