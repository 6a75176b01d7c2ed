//! Config module tests
//!
//! Contains test suites for profile parsing, rendering, and resolution.
