//! Text-menu client for an art discussion board.
//!
//! The user moves through a fixed menu tree; leaf choices run actions that
//! read answers from the console and talk to the board database. The code is
//! split the same way throughout:
//!
//! - **[`core`]**: Pure logic (menu table, paths, session rules, gating,
//!   listing layout). No I/O, fully testable in isolation.
//! - **[`io`]**: Console, screen layout, configuration and the board store.
//!   Behind traits so tests can script input and record store calls.
//!
//! [`actions`], [`navigator`] and [`driver`] tie the two together into the
//! interactive session that `main` runs.

pub mod actions;
pub mod core;
pub mod driver;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod navigator;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
