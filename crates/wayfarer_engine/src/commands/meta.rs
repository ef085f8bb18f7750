//! Help, save, load, restart, and quit.
//!
//! Save and load failures are reported to the player and leave the game as
//! it was.

use wayfarer_foundation::Result;
use wayfarer_parser::Operation;

use super::describe_location;
use crate::session::{GameSession, Ports};

/// Slot used when `save` or `load` is given no name.
pub const DEFAULT_SLOT: &str = "quicksave";

pub fn help(session: &mut GameSession) {
    let lines: Vec<String> = session
        .active_commands()
        .iter()
        .filter_map(|key| session.registry().get_key(key))
        .filter_map(|e| e.as_command().map(|c| (e, c)))
        .map(|(e, c)| {
            if c.summary.is_empty() {
                format!("  {} ({})", e.name(), c.hotkey)
            } else {
                format!("  {} ({}): {}", e.name(), c.hotkey, c.summary)
            }
        })
        .collect();
    session.say("Commands:");
    session.say(lines.join("\n"));
}

fn slot(op: &Operation) -> &str {
    let rest = op.rest().trim();
    if rest.is_empty() { DEFAULT_SLOT } else { rest }
}

pub fn save(session: &mut GameSession, op: &Operation, ports: &mut Ports<'_>) {
    let slot = slot(op);
    match session.save_to(ports.store, slot) {
        Ok(()) => session.say(format!("Saved as '{slot}'.")),
        Err(e) => {
            tracing::warn!(slot, error = %e, "save failed");
            session.say(format!("Could not save: {e}"));
        }
    }
}

pub fn load(session: &mut GameSession, op: &Operation, ports: &mut Ports<'_>) {
    let slot = slot(op);
    match session.load_from(ports.store, slot) {
        Ok(()) => {
            session.suppress_next_sweep();
            session.say(format!("Loaded '{slot}'."));
            describe_location(session);
        }
        Err(e) => {
            tracing::warn!(slot, error = %e, "load failed");
            session.say(format!("Could not load: {e}"));
        }
    }
}

/// Rebuilds the level and describes the starting location.
///
/// The new game's opening sweep has already run, so the sweep after this
/// command is skipped.
pub fn restart(session: &mut GameSession, ports: &mut Ports<'_>) -> Result<()> {
    session.restart(ports)?;
    session.suppress_next_sweep();
    describe_location(session);
    Ok(())
}

pub fn quit(session: &mut GameSession) {
    session.finish();
    session.say("Goodbye.");
}
