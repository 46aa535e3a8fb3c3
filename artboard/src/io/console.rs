//! Line-oriented terminal abstraction.
//!
//! The [`Console`] trait decouples the navigator and actions from the real
//! terminal. Tests use a scripted console that replays queued lines and
//! records everything written.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

pub trait Console {
    /// Write one line of output.
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Show `prompt` and read one line without its terminator.
    ///
    /// Returns `Ok(None)` once input is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Console over the process stdin/stdout.
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl StdConsole<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn new() -> Self {
        Self {
            input: std::io::stdin().lock(),
            output: std::io::stdout(),
        }
    }
}

impl Default for StdConsole<std::io::StdinLock<'static>, std::io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    /// Console over arbitrary reader/writer pairs.
    pub fn with_streams(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).context("write to terminal")
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt).context("write prompt")?;
        self.output.flush().context("flush terminal")?;

        // Non-UTF-8 input is a bad answer, not a terminal failure.
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("read from terminal")?;
        if read == 0 {
            return Ok(None);
        }
        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines_then_reports_end_of_input() {
        let input = std::io::Cursor::new("first\r\nsecond\n".as_bytes().to_vec());
        let mut console = StdConsole::with_streams(input, Vec::new());

        assert_eq!(
            console.read_line("> ").expect("read"),
            Some("first".to_string())
        );
        assert_eq!(
            console.read_line("> ").expect("read"),
            Some("second".to_string())
        );
        assert_eq!(console.read_line("> ").expect("read"), None);

        console.write_line("bye").expect("write");
        let output = String::from_utf8(console.into_output()).expect("utf8");
        assert_eq!(output, "> > > bye\n");
    }

    #[test]
    fn invalid_utf8_line_is_read_lossily() {
        let input = std::io::Cursor::new(b"\xff\xfe\nok\n".to_vec());
        let mut console = StdConsole::with_streams(input, Vec::new());

        let garbled = console.read_line("").expect("read").expect("line");
        assert_eq!(garbled, "\u{fffd}\u{fffd}");
        assert_eq!(console.read_line("").expect("read"), Some("ok".to_string()));
    }
}
