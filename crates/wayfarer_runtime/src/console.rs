//! Console adapter built on rustyline.
//!
//! Gives the player line editing, history, history hints, and tab
//! completion of the active command words.

use std::borrow::Cow;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};
use wayfarer_engine::GameIo;
use wayfarer_foundation::{Error, ErrorKind, Result};

/// Prompt shown when the engine has not asked for a specific one.
pub const DEFAULT_PROMPT: &str = "> ";

const HISTORY_SIZE: usize = 500;

#[derive(Helper, Completer, Hinter, Validator)]
struct ConsoleHelper {
    #[rustyline(Completer)]
    completer: VerbCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for ConsoleHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes the first word of a line from the active command words.
#[derive(Default)]
struct VerbCompleter {
    words: Vec<String>,
}

impl VerbCompleter {
    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);
        if start > 0 {
            return (start, Vec::new());
        }
        let word = line[..pos].to_lowercase();
        let pairs = self
            .words
            .iter()
            .filter(|w| w.starts_with(&word))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w.clone(),
            })
            .collect();
        (start, pairs)
    }
}

impl Completer for VerbCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

/// Terminal adapter with line editing.
pub struct ConsoleIo {
    editor: Editor<ConsoleHelper, DefaultHistory>,
    prompt: Option<String>,
    closed: bool,
}

impl ConsoleIo {
    /// Creates a console adapter on the process terminal.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if rustyline cannot initialize the terminal.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(HISTORY_SIZE)
            .map_err(|e| Error::new(ErrorKind::IoError(e.to_string())))?
            .build();

        let helper = ConsoleHelper {
            completer: VerbCompleter::default(),
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::IoError(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self {
            editor,
            prompt: None,
            closed: false,
        })
    }
}

impl GameIo for ConsoleIo {
    fn get_input(&mut self) -> Result<Option<String>> {
        let prompt = self
            .prompt
            .take()
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string());
        match self.editor.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            // Ctrl+C abandons the line, not the game
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => {
                self.closed = true;
                Ok(None)
            }
            Err(e) => Err(Error::new(ErrorKind::IoError(e.to_string()))),
        }
    }

    fn display(&mut self, text: &str, prompt: Option<&str>) -> Result<()> {
        if !text.is_empty() {
            println!("{text}");
        }
        self.prompt = prompt.map(ToString::to_string);
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.editor
            .clear_screen()
            .map_err(|e| Error::new(ErrorKind::IoError(e.to_string())))
    }

    fn is_closed(&self) -> bool {
        self.closed
    }

    fn set_completions(&mut self, words: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.words = words;
        }
    }
}
