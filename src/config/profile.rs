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

//! In-memory binding profile and its file format
//!
//! A profile maps command names to the bindings that trigger them. The
//! text format is one command per line:
//!
//! ```text
//! # Review screen
//! show_answer = ⌨62|⍝TAP_BOTTOM
//! undo = ⌨Ctrl+54
//! ```
//!
//! Values hold one or more serialized bindings joined with `|`. Parsing is
//! permissive end to end: unreadable lines and unreadable binding units
//! are skipped, never fatal, so a corrupt or foreign profile degrades to
//! fewer bindings instead of a startup crash.

use std::collections::BTreeMap;

use crate::core::parser::{parse_binding_list, BINDING_SEPARATOR};
use crate::core::types::Binding;
use crate::core::ConflictDetector;

/// Command-to-bindings map with a canonical text form.
///
/// Commands are kept sorted (BTreeMap) so rendering is deterministic:
/// loading a profile and rendering it again yields byte-identical text for
/// canonical input, and a stable normal form for any input.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Profile {
    bindings: BTreeMap<String, Vec<Binding>>,
}

impl Profile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses profile text.
    ///
    /// Skipped without error: blank lines, `#` comments, lines without
    /// `=`, lines with an empty command name, and binding units the codec
    /// rejects. Repeated command lines accumulate their bindings.
    pub fn parse(content: &str) -> Self {
        let mut profile = Self::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let Some(equals_pos) = line.find('=') else {
                continue;
            };

            let command = line[..equals_pos].trim();
            if command.is_empty() {
                continue;
            }

            // Leading whitespace is separator noise (every unit starts
            // with a reserved prefix), but trailing whitespace is payload:
            // a unicode binding for the space character is legal
            let value = line[equals_pos + 1..].trim_start();

            for binding in parse_binding_list(value) {
                profile.bind(command, binding);
            }
            profile.bindings.entry(command.to_string()).or_default();
        }

        profile
    }

    /// Renders the canonical text form.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for (command, bindings) in &self.bindings {
            let joined = bindings
                .iter()
                .map(|b| b.to_string())
                .collect::<Vec<_>>()
                .join(&BINDING_SEPARATOR.to_string());

            out.push_str(command);
            out.push_str(" = ");
            out.push_str(&joined);
            out.push('\n');
        }

        out
    }

    /// Assigns `binding` to `command`.
    ///
    /// The unbound sentinel and exact duplicates are ignored; binding the
    /// same chord to a command twice is a no-op, not a conflict.
    pub fn bind(&mut self, command: &str, binding: Binding) {
        if binding.is_unknown() {
            return;
        }

        let assigned = self.bindings.entry(command.to_string()).or_default();
        if !assigned.contains(&binding) {
            assigned.push(binding);
        }
    }

    /// Removes one binding from `command`. The command entry itself stays,
    /// which lets a profile record "deliberately unbound".
    pub fn unbind(&mut self, command: &str, binding: &Binding) {
        if let Some(assigned) = self.bindings.get_mut(command) {
            assigned.retain(|b| b != binding);
        }
    }

    /// Removes a command and all its bindings.
    pub fn remove_command(&mut self, command: &str) {
        self.bindings.remove(command);
    }

    /// The bindings assigned to `command`, in assignment order.
    pub fn bindings_for(&self, command: &str) -> &[Binding] {
        self.bindings
            .get(command)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterates commands and their bindings in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Binding])> {
        self.bindings
            .iter()
            .map(|(command, bindings)| (command.as_str(), bindings.as_slice()))
    }

    /// Number of commands (bound or deliberately unbound).
    pub fn command_count(&self) -> usize {
        self.bindings.len()
    }

    /// Total number of binding assignments.
    pub fn binding_count(&self) -> usize {
        self.bindings.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Resolves resolver candidates to a command.
    ///
    /// Candidates are tested one by one; for each, stored bindings are
    /// tested in rendering order and the first match wins. Stored
    /// don't-care modifiers accept either live state here, which is the
    /// one place exact and app-defined chords behave differently.
    pub fn resolve(&self, candidates: &[Binding]) -> Option<&str> {
        for candidate in candidates {
            for (command, bindings) in &self.bindings {
                if bindings.iter().any(|stored| stored.matches(candidate)) {
                    return Some(command.as_str());
                }
            }
        }

        None
    }

    /// Runs conflict detection over every assignment.
    pub fn find_conflicts(&self) -> Vec<crate::core::Conflict> {
        let mut detector = ConflictDetector::new();
        for (command, bindings) in &self.bindings {
            for binding in bindings {
                detector.add_binding(command, *binding);
            }
        }

        detector.find_conflicts()
    }
}
