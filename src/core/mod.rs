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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the fundamental data structures and algorithms
//! for input binding handling, including:
//! - Type definitions for bindings and modifier-key requirements
//! - The binding text codec (render on the types, decode in `parser`)
//! - Raw-event to candidate-binding resolution
//! - Conflict detection using HashMap-based O(1) lookup
//!
//! All business logic is isolated from UI and I/O concerns to enable
//! comprehensive unit testing without requiring an input device.

pub mod conflict;
pub mod parser;
pub mod resolver;
pub mod types;

pub use conflict::{Conflict, ConflictDetector};
pub use resolver::{possible_gesture_bindings, possible_key_bindings, KeyPress};
pub use types::*;

#[cfg(test)]
mod tests;
