//! Built-in command implementations.
//!
//! Each [`Behavior`] maps to one function here. Commands report problems
//! to the player through the session's output; they only return an error
//! when a collaborator fails.

mod inventory;
mod look;
mod meta;
mod movement;
mod talk;

use std::borrow::Cow;

use wayfarer_foundation::{NameKey, Result};
use wayfarer_parser::{Operation, Scope};
use wayfarer_storage::{Behavior, Entity};

use crate::session::{GameSession, Ports};

pub use look::describe_location;

/// Runs the command an operation names.
///
/// # Errors
///
/// Returns an error if a collaborator fails.
pub fn run(session: &mut GameSession, op: &Operation, ports: &mut Ports<'_>) -> Result<()> {
    let Some(behavior) = session
        .registry()
        .get_key(&op.command)
        .and_then(Entity::as_command)
        .map(|c| c.behavior.clone())
    else {
        tracing::warn!(command = %op.command, "operation names a missing command");
        session.say("Nothing happens.");
        return Ok(());
    };

    match behavior {
        Behavior::Look => look::look(session),
        Behavior::Examine => look::examine(session, op),
        Behavior::Move => movement::move_direction(session, op),
        Behavior::Go => movement::go(session, op),
        Behavior::Get => inventory::get(session, op),
        Behavior::Drop => inventory::drop(session, op),
        Behavior::Put => inventory::put(session, op),
        Behavior::Inventory => inventory::inventory(session),
        Behavior::Talk => return talk::talk(session, op, ports),
        Behavior::Wait => session.say("Time passes."),
        Behavior::Help => meta::help(session),
        Behavior::Save => meta::save(session, op, ports),
        Behavior::Load => meta::load(session, op, ports),
        Behavior::Restart => return meta::restart(session, ports),
        Behavior::Quit => meta::quit(session),
        Behavior::Custom(name) => match session.handler(&name) {
            Some(handler) => return handler(session, op, ports),
            None => {
                tracing::warn!(handler = %name, "no handler registered for custom command");
                session.say("Nothing happens.");
            }
        },
    }
    Ok(())
}

/// The player's scope: what they carry and what is around them.
fn scope(session: &GameSession) -> Scope {
    Scope::for_actor(session.registry(), session.player())
}

/// Display name of an entity, falling back to the key.
fn display_name(session: &GameSession, key: &NameKey) -> String {
    session
        .registry()
        .get_key(key)
        .map_or_else(|| key.to_string(), |e| e.name().to_string())
}

/// The phrase the player typed for the direct object, or `default`.
fn typed_or<'a>(op: &Operation, default: &'a str) -> Cow<'a, str> {
    if op.direct_phrase.is_empty() {
        Cow::Borrowed(default)
    } else {
        Cow::Owned(op.direct_phrase.text())
    }
}
