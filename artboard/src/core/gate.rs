//! Fail-safe reconciliation of the stored path with the session.
//!
//! The driver runs every stored path through [`gate_path`] before showing a
//! menu, so the user only ever sees choices the session allows.

use crate::core::menu::NodeId;
use crate::core::path::MenuPath;
use crate::core::session::Session;

/// Return the path the next screen should be drawn at.
///
/// - Logged out: always `[main, logged out]`.
/// - Logged in but outside the logged-in subtree: `[main, logged in]`.
/// - Inside a nested context the session has not entered: `[main, logged in]`.
/// - Otherwise the stored path unchanged.
pub fn gate_path(path: &MenuPath, session: &Session) -> MenuPath {
    if !session.is_authenticated() {
        return MenuPath::logged_out();
    }
    if !path.starts_with(&MenuPath::logged_in()) {
        return MenuPath::logged_in();
    }
    if path.contains(NodeId::OpenThread) && session.open_thread().is_none() {
        return MenuPath::logged_in();
    }
    if path.contains(NodeId::ViewUser) && session.viewed_profile().is_none() {
        return MenuPath::logged_in();
    }
    path.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ThreadId, UserId, UserIdentity};

    fn logged_in_session() -> Session {
        let mut session = Session::new();
        session.log_in(UserIdentity {
            id: UserId(1),
            name: "alice".to_string(),
        });
        session
    }

    #[test]
    fn logged_out_session_is_pinned_to_logged_out_menu() {
        let session = Session::new();
        for path in [
            MenuPath::root(),
            MenuPath::logged_in(),
            MenuPath::in_thread(),
            MenuPath::logged_out(),
        ] {
            assert_eq!(gate_path(&path, &session), MenuPath::logged_out());
        }
    }

    #[test]
    fn login_forces_logged_in_subtree() {
        let session = logged_in_session();
        assert_eq!(
            gate_path(&MenuPath::logged_out(), &session),
            MenuPath::logged_in()
        );
        assert_eq!(gate_path(&MenuPath::root(), &session), MenuPath::logged_in());
    }

    #[test]
    fn nested_path_needs_matching_context() {
        let mut session = logged_in_session();
        assert_eq!(
            gate_path(&MenuPath::in_thread(), &session),
            MenuPath::logged_in()
        );

        session
            .enter_thread(ThreadId(4), "t".to_string())
            .expect("enter thread");
        assert_eq!(
            gate_path(&MenuPath::in_thread(), &session),
            MenuPath::in_thread()
        );
        assert_eq!(
            gate_path(&MenuPath::in_profile(), &session),
            MenuPath::logged_in()
        );
    }
}
