//! One turn of play.
//!
//! A turn parses the line against the active commands, runs the command,
//! sweeps events (unless the command asked to skip it), and flushes the
//! pending output to the terminal. Lines that name no command cost no turn.

use wayfarer_foundation::Result;
use wayfarer_parser::{OperationParser, ParseResult};

use crate::commands;
use crate::session::{GameSession, Ports, TurnState};
use crate::sweep::{self, SweepReport};

/// What a call to [`run_turn`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The game is over; the line was not processed.
    Ignored,
    /// The line was blank.
    Empty,
    /// No active command matched the line.
    Unrecognized(String),
    /// A command ran.
    Ran {
        /// Name of the command.
        command: String,
        /// The sweep that followed, if it was not skipped.
        sweep: Option<SweepReport>,
    },
}

impl TurnOutcome {
    /// Returns true if a command ran.
    #[must_use]
    pub fn ran(&self) -> bool {
        matches!(self, Self::Ran { .. })
    }
}

/// Processes one line of player input.
///
/// # Errors
///
/// Returns an error if a collaborator fails. Problems with the player's
/// input are reported as game output instead.
pub fn run_turn(
    session: &mut GameSession,
    line: &str,
    ports: &mut Ports<'_>,
) -> Result<TurnOutcome> {
    if session.is_finished() {
        return Ok(TurnOutcome::Ignored);
    }

    let parser = OperationParser::for_active(session.registry(), session.active_commands());
    let op = match parser.parse(line, session.registry(), session.player()) {
        ParseResult::Parsed(op) => op,
        ParseResult::Empty => {
            session.flush(ports.io)?;
            return Ok(TurnOutcome::Empty);
        }
        ParseResult::Unrecognized(verb) => {
            tracing::debug!(%verb, "unrecognized command");
            session.say(format!("I don't understand \"{verb}\"."));
            session.flush(ports.io)?;
            return Ok(TurnOutcome::Unrecognized(verb));
        }
    };
    tracing::debug!(command = %op.command, input = %op.input, "running command");

    session.set_state(TurnState::CommandRunning);
    let ran = commands::run(session, &op, ports);
    session.set_state(TurnState::Idle);
    ran?;

    let sweep = if session.take_suppress() {
        tracing::debug!(command = %op.command, "sweep skipped");
        None
    } else {
        session.advance_turn();
        Some(sweep::sweep(session, Some(&op), ports)?)
    };

    session.flush(ports.io)?;
    Ok(TurnOutcome::Ran {
        command: op.command.to_string(),
        sweep,
    })
}
