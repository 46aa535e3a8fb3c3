//! Stable exit codes for the `artboard` binary.

/// The user picked quit.
pub const OK: i32 = 0;
/// Startup failed (config, database) or an action hit an unrecoverable error.
pub const ERROR: i32 = 1;
/// Standard input closed before the user picked quit.
pub const INPUT_CLOSED: i32 = 2;
