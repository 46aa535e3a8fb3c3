//! One navigation step: show the menu at a path, read a choice and move.
//!
//! The navigator never decides where the user is allowed to be; that is the
//! gate's job in the driver. It only turns a choice into the next path.

use anyhow::Result;
use tracing::{debug, warn};

use crate::actions::{self, ActionContext};
use crate::core::choices::{Selection, enumerate_choices, parse_selection};
use crate::core::error::NavigationError;
use crate::core::menu::{MenuTree, NodeId};
use crate::core::path::MenuPath;
use crate::core::session::Session;
use crate::io::console::Console;
use crate::io::screen::Screen;
use crate::io::store::Store;

/// Result of a single navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Continue at this path.
    Next(MenuPath),
    /// The user picked quit.
    Quit,
}

#[derive(Debug, Clone, Copy)]
pub struct Navigator {
    tree: MenuTree,
}

impl Navigator {
    pub fn new(tree: MenuTree) -> Self {
        Self { tree }
    }

    /// Navigator over the board menu, checked at load.
    pub fn load() -> Result<Self, NavigationError> {
        MenuTree::load().map(Self::new)
    }

    /// Show the choices at `path` until a valid one is entered.
    ///
    /// `None` means quit.
    pub fn choose<C: Console>(
        &self,
        path: &MenuPath,
        screen: &mut Screen<C>,
        session: &Session,
    ) -> Result<Option<NodeId>> {
        let choices = enumerate_choices(&self.tree, path)?;
        loop {
            screen.menu(&choices, session)?;
            let answer = screen.ask("Enter Choice: ")?;
            match parse_selection(&choices, &answer) {
                Selection::Node(node) => return Ok(Some(node)),
                Selection::Quit => return Ok(None),
                Selection::Invalid => {
                    warn!(%path, answer = %answer, "invalid menu choice");
                    screen.say("Invalid Choice")?;
                }
            }
        }
    }

    /// Move from `path` into `choice`, running its action if it has one.
    pub fn dispatch<S: Store, C: Console>(
        &self,
        path: &MenuPath,
        choice: NodeId,
        ctx: &mut ActionContext<'_, S, C>,
    ) -> Result<MenuPath> {
        let selected = path.child(choice);
        let node = self.tree.resolve(&selected)?;

        let next = match node.action() {
            Some(action) => {
                let next = actions::invoke(action, ctx)?;
                debug_assert!(
                    action.targets().iter().any(|target| *target == next.nodes()),
                    "{action:?} returned undeclared path {next}"
                );
                next
            }
            None => selected,
        };

        self.tree.resolve(&next)?;
        debug!(from = %path, to = %next, "moved");
        Ok(next)
    }

    /// Choose and dispatch once.
    pub fn step<S: Store, C: Console>(
        &self,
        path: &MenuPath,
        ctx: &mut ActionContext<'_, S, C>,
    ) -> Result<StepOutcome> {
        match self.choose(path, ctx.screen, ctx.session)? {
            Some(choice) => self.dispatch(path, choice, ctx).map(StepOutcome::Next),
            None => Ok(StepOutcome::Quit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ThreadId, UserId, UserIdentity};
    use crate::test_support::{
        ALICE, LILIES_THREAD, RecordingStore, ScriptedConsole, quiet_display, seeded_store,
    };

    fn screen(inputs: &[&str]) -> Screen<ScriptedConsole> {
        Screen::new(ScriptedConsole::new(inputs.iter().copied()), quiet_display())
    }

    fn alice_session() -> Session {
        let mut session = Session::new();
        session.log_in(UserIdentity {
            id: UserId(1),
            name: ALICE.to_string(),
        });
        session
    }

    #[test]
    fn choose_redisplays_after_invalid_input() {
        let navigator = Navigator::load().expect("menu");
        let mut screen = screen(&["abc", "7", "0"]);
        let session = Session::new();

        let choice = navigator
            .choose(&MenuPath::logged_out(), &mut screen, &session)
            .expect("choose");

        assert_eq!(choice, Some(NodeId::CreateAccount));
        let console = screen.into_console();
        assert_eq!(console.count_lines("Invalid Choice"), 2);
        assert_eq!(console.count_lines("(2) quit"), 3);
    }

    #[test]
    fn choose_returns_none_for_quit_index() {
        let navigator = Navigator::load().expect("menu");
        let mut screen = screen(&["2"]);

        let choice = navigator
            .choose(&MenuPath::logged_out(), &mut screen, &Session::new())
            .expect("choose");

        assert_eq!(choice, None);
    }

    #[test]
    fn choose_reports_exhausted_input() {
        let navigator = Navigator::load().expect("menu");
        let mut screen = screen(&[]);

        let err = navigator
            .choose(&MenuPath::logged_out(), &mut screen, &Session::new())
            .expect_err("no input");

        assert_eq!(
            err.downcast_ref::<NavigationError>(),
            Some(&NavigationError::InputExhausted)
        );
    }

    #[test]
    fn dispatch_into_node_without_action_descends() {
        let navigator = Navigator::load().expect("menu");
        let mut store = RecordingStore::new(seeded_store().expect("store"));
        let mut screen = screen(&[]);
        let mut session = Session::new();
        let mut ctx = ActionContext {
            session: &mut session,
            store: &mut store,
            screen: &mut screen,
        };

        let next = navigator
            .dispatch(&MenuPath::root(), NodeId::LoggedOut, &mut ctx)
            .expect("dispatch");

        assert_eq!(next, MenuPath::logged_out());
        assert!(store.calls().is_empty());
    }

    #[test]
    fn dispatch_runs_action_and_follows_its_path() {
        let navigator = Navigator::load().expect("menu");
        let mut store = seeded_store().expect("store");
        let mut screen = screen(&["1"]);
        let mut session = alice_session();
        let mut ctx = ActionContext {
            session: &mut session,
            store: &mut store,
            screen: &mut screen,
        };

        let next = navigator
            .dispatch(&MenuPath::logged_in(), NodeId::OpenThread, &mut ctx)
            .expect("dispatch");

        assert_eq!(next, MenuPath::in_thread());
        assert_eq!(
            session.open_thread(),
            Some((LILIES_THREAD, "Lilies at dusk"))
        );
    }

    #[test]
    fn dispatch_rejects_choice_outside_current_menu() {
        let navigator = Navigator::load().expect("menu");
        let mut store = seeded_store().expect("store");
        let mut screen = screen(&[]);
        let mut session = Session::new();
        let mut ctx = ActionContext {
            session: &mut session,
            store: &mut store,
            screen: &mut screen,
        };

        let err = navigator
            .dispatch(&MenuPath::logged_out(), NodeId::UpvoteThread, &mut ctx)
            .expect_err("not a child");

        assert!(matches!(
            err.downcast_ref::<NavigationError>(),
            Some(NavigationError::UnresolvedPath { .. })
        ));
    }

    #[test]
    fn step_moves_then_quits() {
        let navigator = Navigator::load().expect("menu");
        let mut store = seeded_store().expect("store");
        // Logged-in menu: (5) open thread. In-thread menu has six entries.
        let mut screen = screen(&["5", "1", "6"]);
        let mut session = alice_session();
        let mut ctx = ActionContext {
            session: &mut session,
            store: &mut store,
            screen: &mut screen,
        };

        let first = navigator.step(&MenuPath::logged_in(), &mut ctx).expect("step");
        assert_eq!(first, StepOutcome::Next(MenuPath::in_thread()));
        let second = navigator.step(&MenuPath::in_thread(), &mut ctx).expect("step");
        assert_eq!(second, StepOutcome::Quit);
        assert_eq!(session.open_thread().map(|(id, _)| id), Some(ThreadId(1)));
    }
}
