//! Moving between locations.
//!
//! Hidden exits never match, whether named by direction or by exit name.

use wayfarer_foundation::NameKey;
use wayfarer_parser::{NounPhrase, Operation};
use wayfarer_storage::{Entity, ExitData};

use super::describe_location;
use crate::session::GameSession;

/// Takes the exit whose direction is the command's name (`east`).
pub fn move_direction(session: &mut GameSession, op: &Operation) {
    let destination = find_exit(session, |_, exit| exit.direction.as_ref() == Some(&op.command));
    travel(session, destination);
}

/// Takes an exit named by the object phrase (`go trapdoor`, `go to east`).
pub fn go(session: &mut GameSession, op: &Operation) {
    let phrase: &NounPhrase = if op.direct_phrase.is_empty() {
        &op.indirect_phrase
    } else {
        &op.direct_phrase
    };
    if phrase.is_empty() {
        session.say("Go where?");
        return;
    }
    let destination = find_exit(session, |entity, exit| {
        phrase.names(entity.key()) || exit.direction.as_ref().is_some_and(|d| phrase.names(d))
    });
    travel(session, destination);
}

fn find_exit(
    session: &GameSession,
    matches: impl Fn(&Entity, &ExitData) -> bool,
) -> Option<NameKey> {
    let here = session.player_location()?;
    session
        .registry()
        .exits_from(&here)
        .filter(|e| !e.is_hidden())
        .find(|e| e.as_exit().is_some_and(|x| matches(e, x)))
        .and_then(Entity::as_exit)
        .map(|x| x.destination.clone())
}

fn travel(session: &mut GameSession, destination: Option<NameKey>) {
    let Some(destination) = destination else {
        session.say("You can't go that way.");
        return;
    };
    if session.registry().get_location(destination.as_str()).is_none() {
        tracing::warn!(%destination, "exit leads to a missing location");
        session.say("You can't go that way.");
        return;
    }
    let player = session.player().clone();
    if let Some(pawn) = session
        .registry_mut()
        .get_key_mut(&player)
        .and_then(Entity::as_pawn_mut)
    {
        pawn.location = destination;
    }
    describe_location(session);
}
