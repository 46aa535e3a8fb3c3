//! Typed failures raised by the navigation core.
//!
//! Orchestration code carries these inside `anyhow::Error` and uses
//! `downcast_ref` where it needs to tell them apart.

use thiserror::Error;

/// Failures of the menu state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// A path does not resolve in the menu tree. Always a programming defect:
    /// the menu table and an action disagree.
    #[error("unresolved menu path '{path}': {reason}")]
    UnresolvedPath { path: String, reason: String },

    /// The static menu table failed its startup checks.
    #[error("invalid menu tree:\n- {}", .violations.join("\n- "))]
    InvalidTree { violations: Vec<String> },

    /// The interactive input closed before the user chose to quit.
    #[error("input closed before quit was selected")]
    InputExhausted,
}

/// Violations of the session context rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no user is logged in")]
    NotAuthenticated,

    /// Only one nested context (open thread or viewed profile) may be active.
    #[error("cannot enter {requested} while {active} is open")]
    NestedContextOccupied {
        active: &'static str,
        requested: &'static str,
    },

    #[error("no thread is open")]
    NoOpenThread,

    #[error("no user profile is being viewed")]
    NoViewedProfile,
}
