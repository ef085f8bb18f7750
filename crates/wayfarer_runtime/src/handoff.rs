//! Stream adapter fed by a reader thread.
//!
//! A background thread reads lines and hands them to the game loop through a
//! single-slot channel: at most one line is pending, and the game blocks
//! until the next one arrives. The thread exits at end of input or when the
//! adapter is dropped.

use std::io::{self, BufRead, BufReader, Stdout, Write};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use wayfarer_engine::GameIo;
use wayfarer_foundation::{Error, ErrorKind, Result};

use crate::console::DEFAULT_PROMPT;

/// Terminal adapter reading plain lines from another thread.
pub struct StreamIo<W: Write = Stdout> {
    lines: Receiver<String>,
    out: W,
    prompt: Option<String>,
    closed: bool,
}

impl StreamIo<Stdout> {
    /// Reads from stdin and writes to stdout.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the reader thread cannot be spawned.
    pub fn stdio() -> Result<Self> {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<W: Write> StreamIo<W> {
    /// Reads lines from `input` on a background thread, writing to `out`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the reader thread cannot be spawned.
    pub fn new<R>(input: R, out: W) -> Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        let (sender, lines) = mpsc::sync_channel(1);
        thread::Builder::new()
            .name("wayfarer-input".to_string())
            .spawn(move || {
                for line in input.lines() {
                    match line {
                        Ok(line) => {
                            if sender.send(line).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "input stream failed");
                            break;
                        }
                    }
                }
                tracing::debug!("input stream ended");
            })
            .map_err(|e| Error::new(ErrorKind::IoError(e.to_string())))?;
        Ok(Self {
            lines,
            out,
            prompt: None,
            closed: false,
        })
    }

    /// The output writer.
    #[must_use]
    pub fn output(&self) -> &W {
        &self.out
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|e| Error::new(ErrorKind::IoError(e.to_string())))
    }
}

impl<W: Write> GameIo for StreamIo<W> {
    fn get_input(&mut self) -> Result<Option<String>> {
        if self.closed {
            return Ok(None);
        }
        let prompt = self
            .prompt
            .take()
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string());
        self.write(&prompt)?;
        if let Ok(line) = self.lines.recv() {
            Ok(Some(line.trim_end_matches('\r').to_string()))
        } else {
            self.closed = true;
            Ok(None)
        }
    }

    fn display(&mut self, text: &str, prompt: Option<&str>) -> Result<()> {
        self.prompt = prompt.map(ToString::to_string);
        if text.is_empty() {
            return Ok(());
        }
        self.write(&format!("{text}\n"))
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.write("\x1b[2J\x1b[H")
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
