//! Deterministic, pure logic shared by the board client.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod choices;
pub mod error;
pub mod forms;
pub mod gate;
pub mod invariants;
pub mod listing;
pub mod menu;
pub mod path;
pub mod session;
pub mod types;
