//! Session context: who is logged in and which nested view is open.
//!
//! One `Session` exists per process. The driver owns it and lends it to the
//! navigator and actions by `&mut`; only actions change it.

use crate::core::error::SessionError;
use crate::core::types::{ThreadId, UserId, UserIdentity};

/// The nested view the user has entered, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NestedContext {
    Thread { id: ThreadId, title: String },
    Profile { id: UserId, name: String },
}

impl NestedContext {
    fn describe(&self) -> &'static str {
        match self {
            NestedContext::Thread { .. } => "a thread",
            NestedContext::Profile { .. } => "a user profile",
        }
    }
}

/// Mutable per-process session state.
///
/// Authentication is derived from the identity, and the open thread and viewed
/// profile share a single slot, so neither pair can disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<UserIdentity>,
    nested: Option<NestedContext>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn identity(&self) -> Option<&UserIdentity> {
        self.identity.as_ref()
    }

    pub fn username(&self) -> Option<&str> {
        self.identity.as_ref().map(|identity| identity.name.as_str())
    }

    pub fn require_identity(&self) -> Result<&UserIdentity, SessionError> {
        self.identity.as_ref().ok_or(SessionError::NotAuthenticated)
    }

    /// Start a session for `identity`. Any nested view left over is dropped.
    pub fn log_in(&mut self, identity: UserIdentity) {
        self.identity = Some(identity);
        self.nested = None;
    }

    pub fn log_out(&mut self) {
        self.identity = None;
        self.nested = None;
    }

    pub fn nested(&self) -> Option<&NestedContext> {
        self.nested.as_ref()
    }

    pub fn open_thread(&self) -> Option<(ThreadId, &str)> {
        match &self.nested {
            Some(NestedContext::Thread { id, title }) => Some((*id, title.as_str())),
            _ => None,
        }
    }

    pub fn viewed_profile(&self) -> Option<(UserId, &str)> {
        match &self.nested {
            Some(NestedContext::Profile { id, name }) => Some((*id, name.as_str())),
            _ => None,
        }
    }

    pub fn require_open_thread(&self) -> Result<(ThreadId, &str), SessionError> {
        self.open_thread().ok_or(SessionError::NoOpenThread)
    }

    pub fn require_viewed_profile(&self) -> Result<(UserId, &str), SessionError> {
        self.viewed_profile().ok_or(SessionError::NoViewedProfile)
    }

    pub fn enter_thread(&mut self, id: ThreadId, title: String) -> Result<(), SessionError> {
        self.enter(NestedContext::Thread { id, title })
    }

    pub fn enter_profile(&mut self, id: UserId, name: String) -> Result<(), SessionError> {
        self.enter(NestedContext::Profile { id, name })
    }

    /// Close the open thread. Returns what was open, if it was a thread.
    pub fn leave_thread(&mut self) -> Option<NestedContext> {
        self.nested
            .take_if(|nested| matches!(nested, NestedContext::Thread { .. }))
    }

    /// Close the viewed profile. Returns what was open, if it was a profile.
    pub fn leave_profile(&mut self) -> Option<NestedContext> {
        self.nested
            .take_if(|nested| matches!(nested, NestedContext::Profile { .. }))
    }

    fn enter(&mut self, context: NestedContext) -> Result<(), SessionError> {
        if self.identity.is_none() {
            return Err(SessionError::NotAuthenticated);
        }
        if let Some(active) = &self.nested {
            return Err(SessionError::NestedContextOccupied {
                active: active.describe(),
                requested: context.describe(),
            });
        }
        self.nested = Some(context);
        Ok(())
    }
}
