//! Binding conflict detection
//!
//! This module implements O(1) conflict detection using HashMap-based
//! indexing. When the same binding is assigned to more than one command,
//! the press becomes ambiguous and is flagged for user resolution.
//!
//! Indexing by [`Binding`] leans on its behavioural equality: two
//! logically-identical bindings collapse to one map entry no matter how
//! they were constructed, so `Ctrl+Q` read back from a profile conflicts
//! with `Ctrl+Q` predefined in code.

use crate::core::types::Binding;
use std::collections::HashMap;

/// Detects bindings assigned to more than one command.
///
/// Uses a HashMap where keys are bindings and values are the commands
/// assigned to them. A conflict exists when any entry has two or more
/// commands.
pub struct ConflictDetector {
    /// Maps each binding to every command assigned to it.
    assignments: HashMap<Binding, Vec<String>>,
}

/// A binding assigned to two or more commands.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Conflict {
    /// The ambiguous binding.
    pub binding: Binding,

    /// All commands assigned to it (always 2 or more).
    pub commands: Vec<String>,
}

impl ConflictDetector {
    /// Creates a new empty conflict detector.
    pub fn new() -> Self {
        Self {
            assignments: HashMap::new(),
        }
    }

    /// Records that `command` is triggered by `binding`.
    ///
    /// The unbound sentinel is skipped: a cleared binding cannot conflict
    /// with anything.
    pub fn add_binding(&mut self, command: &str, binding: Binding) {
        if binding.is_unknown() {
            return;
        }

        self.assignments
            .entry(binding)
            .or_default()
            .push(command.to_string());
    }

    /// Finds all conflicts (bindings with 2 or more commands).
    pub fn find_conflicts(&self) -> Vec<Conflict> {
        self.assignments
            .iter()
            .filter(|(_, commands)| commands.len() > 1)
            .map(|(binding, commands)| Conflict {
                binding: *binding,
                commands: commands.clone(),
            })
            .collect()
    }

    /// Checks if a specific binding is assigned more than once.
    pub fn has_conflict(&self, binding: &Binding) -> bool {
        self.assignments
            .get(binding)
            .map(|commands| commands.len() > 1)
            .unwrap_or(false)
    }

    /// Returns the total number of assignments tracked.
    pub fn total_bindings(&self) -> usize {
        self.assignments.values().map(|v| v.len()).sum()
    }
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self::new()
    }
}
