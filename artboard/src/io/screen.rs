//! Screen helpers layered over a [`Console`]: headers, notices, questions
//! and listings in the board's fixed text layout.

use anyhow::Result;
use chrono::NaiveDate;
use tracing::debug;

use crate::core::choices::ChoiceList;
use crate::core::error::NavigationError;
use crate::core::forms::{is_yes, parse_date_answer};
use crate::core::listing::{ListingRow, render_listing};
use crate::core::session::Session;
use crate::io::config::DisplayConfig;
use crate::io::console::Console;

pub struct Screen<C> {
    console: C,
    display: DisplayConfig,
}

impl<C: Console> Screen<C> {
    pub fn new(console: C, display: DisplayConfig) -> Self {
        Self { console, display }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// `-----title-----------status-----` with the configured column widths.
    pub fn header(&mut self, title: &str, session: &Session) -> Result<()> {
        let greeting = match session.username() {
            Some(name) => format!("Logged In: {}", name),
            None => "Not Logged In".to_string(),
        };
        let line = format!(
            "{:-^tw$}-{:-^sw$}-",
            title,
            greeting,
            tw = self.display.title_width,
            sw = self.display.status_width
        );
        self.console.write_line(&line)
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        self.console.write_line(line)
    }

    /// Ask a question. End of input surfaces as [`NavigationError::InputExhausted`].
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        match self.console.read_line(prompt)? {
            Some(answer) => Ok(answer),
            None => Err(NavigationError::InputExhausted.into()),
        }
    }

    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask(prompt)?;
        Ok(is_yes(&answer))
    }

    /// Ask for a `YYYY-MM-DD` date until the answer parses.
    pub fn ask_date(&mut self, prompt: &str) -> Result<NaiveDate> {
        loop {
            if let Some(Some(date)) = self.read_date_answer(prompt, false)? {
                return Ok(date);
            }
        }
    }

    /// Like [`Screen::ask_date`], but `NULL` is accepted and yields `None`.
    pub fn ask_optional_date(&mut self, prompt: &str) -> Result<Option<NaiveDate>> {
        loop {
            if let Some(date) = self.read_date_answer(prompt, true)? {
                return Ok(date);
            }
        }
    }

    /// One attempt; `Ok(None)` when the answer was rejected.
    fn read_date_answer(
        &mut self,
        prompt: &str,
        allow_null: bool,
    ) -> Result<Option<Option<NaiveDate>>> {
        let answer = self.ask(prompt)?;
        match parse_date_answer(&answer, allow_null) {
            Ok(date) => Ok(Some(date)),
            Err(reason) => {
                debug!(answer = %answer, "rejected date answer");
                self.say(&reason)?;
                Ok(None)
            }
        }
    }

    /// Show `msg`, then wait for Enter when pausing is configured.
    pub fn notify(&mut self, msg: &str) -> Result<()> {
        if self.display.pause_on_notice {
            self.ask(&format!("{} (Enter to Continue)", msg))?;
            return Ok(());
        }
        if !msg.is_empty() {
            self.say(msg)?;
        }
        Ok(())
    }

    pub fn listing(&mut self, rows: Vec<ListingRow>) -> Result<()> {
        for line in render_listing(rows) {
            self.say(&line)?;
        }
        Ok(())
    }

    /// The "Available Actions" screen for one menu.
    pub fn menu(&mut self, choices: &ChoiceList, session: &Session) -> Result<()> {
        self.header("Available Actions", session)?;
        for line in choices.render() {
            self.say(&line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{UserId, UserIdentity};
    use crate::test_support::{ScriptedConsole, quiet_display};

    #[test]
    fn header_pads_title_and_status() {
        let mut screen = Screen::new(
            ScriptedConsole::new(Vec::<&str>::new()),
            DisplayConfig {
                title_width: 10,
                status_width: 15,
                pause_on_notice: false,
            },
        );
        let mut session = Session::new();
        screen.header("Login", &session).expect("header");
        session.log_in(UserIdentity {
            id: UserId(1),
            name: "al".to_string(),
        });
        screen.header("Login", &session).expect("header");

        assert_eq!(
            screen.console().output(),
            &[
                "--Login-----Not Logged In--".to_string(),
                "--Login-----Logged In: al--".to_string(),
            ]
        );
    }

    #[test]
    fn ask_reports_exhausted_input() {
        let mut screen = Screen::new(ScriptedConsole::new(Vec::<&str>::new()), quiet_display());
        let err = screen.ask("Enter Username: ").unwrap_err();
        assert_eq!(
            err.downcast_ref::<NavigationError>(),
            Some(&NavigationError::InputExhausted)
        );
    }

    #[test]
    fn ask_date_retries_until_valid() {
        let mut screen = Screen::new(
            ScriptedConsole::new(["soon", "1926-12-05"]),
            quiet_display(),
        );
        let date = screen.ask_date("when? ").expect("date");
        assert_eq!(Some(date), NaiveDate::from_ymd_opt(1926, 12, 5));
        assert!(
            screen
                .console()
                .transcript()
                .contains("'soon' is not a YYYY-MM-DD date")
        );
    }

    #[test]
    fn optional_date_accepts_null() {
        let mut screen = Screen::new(ScriptedConsole::new(["NULL"]), quiet_display());
        assert_eq!(screen.ask_optional_date("died? ").expect("date"), None);
    }

    #[test]
    fn notify_waits_for_enter_when_pausing() {
        let mut screen = Screen::new(ScriptedConsole::new([""]), DisplayConfig::default());
        screen.notify("Thread Created!").expect("notify");
        assert_eq!(screen.console().remaining_inputs(), 0);
        assert!(
            screen
                .console()
                .transcript()
                .contains("Thread Created! (Enter to Continue)")
        );
    }
}
