//! Look and examine.

use wayfarer_foundation::NameKey;
use wayfarer_parser::Operation;
use wayfarer_storage::entity::VISITED;
use wayfarer_storage::{Container, Entity};

use super::{display_name, scope, typed_or};
use crate::session::GameSession;

/// Describes the player's location and marks it visited.
pub fn describe_location(session: &mut GameSession) {
    let Some(here) = session.player_location() else {
        tracing::warn!(player = %session.player(), "player has no location");
        session.say("You are nowhere at all.");
        return;
    };
    let Some(location) = session.registry().get_location(here.as_str()) else {
        tracing::warn!(location = %here, "player stands in a missing location");
        session.say("You are nowhere at all.");
        return;
    };

    let mut paragraphs = vec![location.name().to_string()];
    if let Some(text) = location.description() {
        paragraphs.push(text.to_string());
    }
    if let Some(items) = location.container().and_then(|c| list_contents(session, c)) {
        paragraphs.push(format!("You see: {items}."));
    }

    let registry = session.registry();
    let player = session.player();
    paragraphs.extend(
        registry
            .pawns_at(&here)
            .filter(|p| p.key() != player && !p.is_hidden())
            .map(|p| format!("{} is here.", p.name())),
    );
    let exits: Vec<String> = registry
        .exits_from(&here)
        .filter(|x| !x.is_hidden())
        .map(|x| {
            x.as_exit()
                .and_then(|d| d.direction.as_ref())
                .map_or_else(|| x.name().to_string(), ToString::to_string)
        })
        .collect();
    if !exits.is_empty() {
        paragraphs.push(format!("Exits: {}.", exits.join(", ")));
    }

    for paragraph in paragraphs {
        session.say(paragraph);
    }
    if let Some(location) = session.registry_mut().get_key_mut(&here) {
        location.adjust_status(VISITED, 1);
    }
}

/// Lists the visible stacks of a container as "2 Coin, Lamp".
fn list_contents(session: &GameSession, container: &Container) -> Option<String> {
    let registry = session.registry();
    let names: Vec<String> = container
        .stacks()
        .filter(|s| registry.get_key(&s.item).is_none_or(|e| !e.is_hidden()))
        .map(|s| {
            let name = display_name(session, &s.item);
            if s.quantity == 1 {
                name
            } else {
                format!("{} {name}", s.quantity)
            }
        })
        .collect();
    (!names.is_empty()).then(|| names.join(", "))
}

pub fn look(session: &mut GameSession) {
    describe_location(session);
}

pub fn examine(session: &mut GameSession, op: &Operation) {
    if !op.has_object() {
        session.say("Examine what?");
        return;
    }
    let Some(target) = op.direct.clone().filter(|k| can_see(session, k)) else {
        session.say(format!("You see no {} here.", typed_or(op, "such thing")));
        return;
    };
    let Some(entity) = session.registry().get_key(&target) else {
        return;
    };

    let mut text = entity.description().map_or_else(
        || format!("You see nothing special about the {}.", entity.name()),
        ToString::to_string,
    );
    if entity.as_item().is_some() {
        if let Some(items) = entity.container().and_then(|c| list_contents(session, c)) {
            text.push_str(&format!(" The {} contains: {items}.", entity.name()));
        }
    }
    session.say(text);
}

/// Returns true if the player can refer to `key` directly.
fn can_see(session: &GameSession, key: &NameKey) -> bool {
    let visible = session
        .registry()
        .get_key(key)
        .is_some_and(|e: &Entity| !e.is_hidden());
    visible
        && (scope(session).contains(key)
            || key == session.player()
            || session.player_location().as_ref() == Some(key))
}
