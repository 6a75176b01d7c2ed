//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Type tests (ModifierKeys, Binding, serialized rendering)
//! - Codec decode tests
//! - Event resolution tests
//! - Conflict detection tests

#[cfg(test)]
mod resolver_tests;
#[cfg(test)]
mod types_tests;
