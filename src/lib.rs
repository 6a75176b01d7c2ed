// Copyright 2025 bakri (tidynest@proton.me)
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

//! Input Bindings
//!
//! Resolves raw input events (key presses, touch gestures, joystick
//! actions) against user-configured bindings, and persists bindings in a
//! compact, lossless text format with conflict detection.
//!
//! # Features
//!
//! - **Candidate Resolution:** One key press can legitimately mean two
//!   things (a hardware keycode, a typed character); every interpretation
//!   is enumerated exactly once
//! - **Wildcard Modifiers:** App-defined chords may ignore individual
//!   modifier flags, while live events always match exactly
//! - **Lossless Text Format:** Prefix-tagged serialization that round-trips
//!   byte-for-byte, with behavioural equality across construction paths
//! - **Permissive Decoding:** Corrupt or foreign persisted strings degrade
//!   to "no binding" instead of crashing configuration loading
//! - **Conflict Detection:** HashMap-based detection of bindings assigned
//!   to more than one command
//! - **Atomic Profile Saves:** Timestamped backups and temp-file-then-rename
//!   writes, so a profile is never half-written
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, codec, event resolution, conflicts)
//! - **`config`:** Profile files (parsing, rendering, atomic updates, backups)
//!
//! # Examples
//!
//! ## Resolving a key press
//!
//! ```
//! use input_bindings::core::{possible_key_bindings, KeyPress};
//! use input_bindings::core::types::{Binding, ModifierKeys};
//!
//! let event = KeyPress {
//!     keycode: 29,
//!     unicode_char: Some('a'),
//!     shift: false,
//!     ctrl: true,
//!     alt: false,
//! };
//!
//! let candidates = possible_key_bindings(&event);
//! assert!(candidates.contains(&Binding::keycode_with(ModifierKeys::ctrl(), 29)));
//! assert!(candidates.contains(&Binding::unicode_with(ModifierKeys::ctrl(), 'a')));
//! ```
//!
//! ## Round-tripping through text
//!
//! ```
//! use input_bindings::core::parser::parse_binding;
//! use input_bindings::core::types::{Binding, ModifierKeys};
//!
//! let binding = Binding::unicode_with(ModifierKeys::exact(true, true, false), '\u{00C4}');
//! let text = binding.to_string();
//!
//! assert_eq!(text, "\u{2705}Ctrl+Shift+\u{00C4}");
//! assert_eq!(parse_binding(&text), Some(binding));
//! ```
//!
//! ## Loading a profile and dispatching
//!
//! ```no_run
//! use input_bindings::config::ProfileManager;
//! use input_bindings::core::{possible_key_bindings, KeyPress};
//!
//! let manager = ProfileManager::new("/tmp/bindings.conf".into())?;
//! let profile = manager.load()?;
//!
//! let candidates = possible_key_bindings(&KeyPress::new(62, Some(' ')));
//! if let Some(command) = profile.resolve(&candidates) {
//!     println!("dispatching {}", command);
//! }
//! # Ok::<(), input_bindings::config::ProfileError>(())
//! ```

pub mod config;
pub mod core;

// Re-export commonly used types for convenience
pub use config::{Profile, ProfileError, ProfileManager};
pub use core::{Binding, Gesture, JoystickAction, KeyPress, ModifierKeys, ModifierState};
