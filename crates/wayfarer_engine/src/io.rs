//! The input/output boundary.
//!
//! The engine never touches a terminal directly. Everything it shows and
//! everything it reads goes through a [`GameIo`] implementation, so the
//! console, a line-handoff thread, and scripted tests are interchangeable.

use std::collections::VecDeque;

use wayfarer_foundation::Result;

/// Abstraction over the player's terminal.
pub trait GameIo {
    /// Reads one line of input.
    ///
    /// Returns `Ok(None)` when input has ended.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the underlying device fails.
    fn get_input(&mut self) -> Result<Option<String>>;

    /// Reads a menu choice between 1 and `count`, returned zero-based.
    ///
    /// Returns `Ok(None)` if the line was not a valid choice; the caller
    /// re-prompts. End of input is also reported as `Ok(None)` together with
    /// [`GameIo::is_closed`].
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the underlying device fails.
    fn get_choice(&mut self, count: usize) -> Result<Option<usize>> {
        Ok(self
            .get_input()?
            .and_then(|line| parse_choice(&line, count)))
    }

    /// Shows text, followed by `prompt` if one is given.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the underlying device fails.
    fn display(&mut self, text: &str, prompt: Option<&str>) -> Result<()>;

    /// Clears the screen.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the underlying device fails.
    fn clear_screen(&mut self) -> Result<()>;

    /// Returns true once input has ended.
    fn is_closed(&self) -> bool {
        false
    }

    /// Offers words for tab completion. Adapters without completion ignore
    /// them.
    fn set_completions(&mut self, _words: Vec<String>) {}
}

/// Parses a one-based menu choice into a zero-based index.
///
/// Anything that is not an integer in `1..=count` is rejected.
#[must_use]
pub fn parse_choice(line: &str, count: usize) -> Option<usize> {
    let choice = line.trim().parse::<usize>().ok()?;
    (1..=count).contains(&choice).then(|| choice - 1)
}

/// An adapter fed from a fixed script, recording everything displayed.
///
/// Used by tests and for batch runs.
#[derive(Clone, Debug, Default)]
pub struct ScriptedIo {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
    clears: usize,
    closed: bool,
}

impl ScriptedIo {
    /// Creates an adapter that will return `lines` in order.
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Queues another input line.
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.inputs.push_back(line.into());
        self.closed = false;
    }

    /// Everything displayed so far, one entry per `display` call.
    #[must_use]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Everything displayed so far, joined by newlines.
    #[must_use]
    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }

    /// The most recent display, or an empty string.
    #[must_use]
    pub fn last(&self) -> &str {
        self.transcript.last().map_or("", String::as_str)
    }

    /// Forgets the transcript.
    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    /// How many times the screen was cleared.
    #[must_use]
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl GameIo for ScriptedIo {
    fn get_input(&mut self) -> Result<Option<String>> {
        let line = self.inputs.pop_front();
        self.closed = line.is_none();
        Ok(line)
    }

    fn display(&mut self, text: &str, prompt: Option<&str>) -> Result<()> {
        self.transcript.push(match prompt {
            Some(p) => format!("{text}\n{p}"),
            None => text.to_string(),
        });
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
