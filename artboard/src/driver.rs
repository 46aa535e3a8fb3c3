//! Session driver: owns the session, store and screen, and runs navigation
//! steps until the user quits or input runs out.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::actions::ActionContext;
use crate::core::error::NavigationError;
use crate::core::gate::gate_path;
use crate::core::path::MenuPath;
use crate::core::session::Session;
use crate::io::console::Console;
use crate::io::screen::Screen;
use crate::io::store::Store;
use crate::navigator::{Navigator, StepOutcome};

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked quit.
    Quit,
    /// Input closed first.
    InputClosed,
}

pub struct Driver<S, C> {
    navigator: Navigator,
    session: Session,
    store: S,
    screen: Screen<C>,
    path: MenuPath,
}

impl<S: Store, C: Console> Driver<S, C> {
    /// Load the menu and start a logged-out session at the root.
    pub fn new(store: S, screen: Screen<C>) -> Result<Self> {
        let navigator = Navigator::load().context("load board menu")?;
        Ok(Self {
            navigator,
            session: Session::new(),
            store,
            screen,
            path: MenuPath::root(),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn path(&self) -> &MenuPath {
        &self.path
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn screen(&self) -> &Screen<C> {
        &self.screen
    }

    /// Gate the stored path, then run one step.
    ///
    /// Returns `Some` once the session is over.
    pub fn tick(&mut self) -> Result<Option<SessionEnd>> {
        let gated = gate_path(&self.path, &self.session);
        if gated != self.path {
            debug!(from = %self.path, to = %gated, "path gated");
            self.path = gated;
        }

        let mut ctx = ActionContext {
            session: &mut self.session,
            store: &mut self.store,
            screen: &mut self.screen,
        };
        match self.navigator.step(&self.path, &mut ctx) {
            Ok(StepOutcome::Next(next)) => {
                self.path = next;
                Ok(None)
            }
            Ok(StepOutcome::Quit) => Ok(Some(SessionEnd::Quit)),
            Err(err) if is_input_exhausted(&err) => Ok(Some(SessionEnd::InputClosed)),
            Err(err) => Err(err),
        }
    }

    /// Tick until the session ends, then say goodbye and flush the store.
    pub fn run(&mut self) -> Result<SessionEnd> {
        let end = loop {
            if let Some(end) = self.tick()? {
                break end;
            }
        };
        self.shutdown(end)?;
        Ok(end)
    }

    fn shutdown(&mut self, end: SessionEnd) -> Result<()> {
        self.screen.say("Goodbye!")?;
        self.store.flush().context("flush board store")?;
        info!(?end, user = self.session.username(), "session ended");
        Ok(())
    }
}

fn is_input_exhausted(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<NavigationError>(),
        Some(NavigationError::InputExhausted)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::console::StdConsole;
    use crate::test_support::{ALICE, quiet_display, scripted_driver, seeded_store};

    #[test]
    fn starts_at_root_logged_out() {
        let driver = scripted_driver(seeded_store().expect("store"), &[]).expect("driver");
        assert_eq!(driver.path(), &MenuPath::root());
        assert!(!driver.session().is_authenticated());
    }

    #[test]
    fn first_tick_gates_root_to_logged_out_menu() {
        // (1) login, then the username.
        let mut driver =
            scripted_driver(seeded_store().expect("store"), &["1", ALICE]).expect("driver");

        assert_eq!(driver.tick().expect("tick"), None);
        assert_eq!(driver.path(), &MenuPath::logged_in());
        assert_eq!(driver.session().username(), Some(ALICE));
    }

    #[test]
    fn quit_says_goodbye() {
        let mut driver = scripted_driver(seeded_store().expect("store"), &["2"]).expect("driver");

        assert_eq!(driver.run().expect("run"), SessionEnd::Quit);
        let console = driver.screen().console();
        assert_eq!(console.output().last().map(String::as_str), Some("Goodbye!"));
    }

    #[test]
    fn closed_input_ends_session_without_error() {
        let mut driver = scripted_driver(seeded_store().expect("store"), &["1"]).expect("driver");

        assert_eq!(driver.run().expect("run"), SessionEnd::InputClosed);
        assert!(!driver.session().is_authenticated());
    }

    #[test]
    fn stale_nested_path_is_gated_after_logout() {
        let mut driver = scripted_driver(seeded_store().expect("store"), &["0"]).expect("driver");
        driver.path = MenuPath::in_thread();

        // Logged out: the in-thread path collapses to the logged-out menu,
        // where (0) is create account and asks for a name.
        assert_eq!(driver.tick().expect("tick"), Some(SessionEnd::InputClosed));
        assert_eq!(driver.path(), &MenuPath::logged_out());
    }

    #[test]
    fn non_utf8_choice_redisplays_menu() {
        let input = std::io::Cursor::new(b"\xff\xfe\n2\n".to_vec());
        let screen = Screen::new(StdConsole::with_streams(input, Vec::new()), quiet_display());
        let mut driver = Driver::new(seeded_store().expect("store"), screen).expect("driver");

        assert_eq!(driver.run().expect("run"), SessionEnd::Quit);
        let output = String::from_utf8(driver.screen.into_console().into_output()).expect("utf8");
        assert_eq!(output.matches("Invalid Choice").count(), 1);
        assert_eq!(output.matches("(2) quit").count(), 2);
    }
}
