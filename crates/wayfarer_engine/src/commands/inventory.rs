//! Get, drop, put, and inventory.
//!
//! Get treats a zero or negative quantity as one. Drop and put reject it.

use wayfarer_foundation::NameKey;
use wayfarer_parser::Operation;
use wayfarer_storage::{Entity, Registry};

use super::{display_name, scope, typed_or};
use crate::session::GameSession;

fn held(session: &GameSession, holder: &NameKey, item: &NameKey) -> u32 {
    session
        .registry()
        .get_key(holder)
        .and_then(Entity::container)
        .map_or(0, |c| c.quantity_of(item))
}

/// Moves `quantity` units of `item` between two containers.
///
/// Returns false and changes nothing if `from` holds too few or `to` cannot
/// hold items.
fn transfer(
    registry: &mut Registry,
    from: &NameKey,
    to: &NameKey,
    item: &NameKey,
    quantity: u32,
) -> bool {
    if registry.get_key(to).and_then(Entity::container).is_none() {
        return false;
    }
    let removed = registry
        .get_key_mut(from)
        .and_then(Entity::container_mut)
        .is_some_and(|c| c.remove(item, quantity));
    if !removed {
        return false;
    }
    if let Some(container) = registry.get_key_mut(to).and_then(Entity::container_mut) {
        container.add(item.clone(), quantity);
    }
    true
}

fn clamp(quantity: i64) -> u32 {
    u32::try_from(quantity).unwrap_or(u32::MAX)
}

fn counted(quantity: u32, name: &str) -> String {
    if quantity == 1 {
        format!("the {name}")
    } else {
        format!("{quantity} {name}")
    }
}

pub fn get(session: &mut GameSession, op: &Operation) {
    if !op.has_object() {
        session.say("Get what?");
        return;
    }
    let quantity = if op.quantity <= 0 { 1 } else { clamp(op.quantity) };
    let player = session.player().clone();
    let typed = typed_or(op, "such thing");
    let (Some(here), Some(item)) = (session.player_location(), op.direct.clone()) else {
        session.say(format!("There is no {typed} here."));
        return;
    };

    let available = held(session, &here, &item);
    let visible = session
        .registry()
        .get_key(&item)
        .is_some_and(|e| !e.is_hidden());
    if available == 0 || !visible {
        if held(session, &player, &item) > 0 {
            let name = display_name(session, &item);
            session.say(format!("You already have the {name}."));
        } else {
            session.say(format!("There is no {typed} here."));
        }
        return;
    }
    let name = display_name(session, &item);
    if available < quantity {
        session.say(format!("There aren't that many {name} here."));
        return;
    }

    let Some(max_weight) = session
        .player_entity()
        .and_then(Entity::as_pawn)
        .map(|p| p.max_weight)
    else {
        session.say(format!("You can't take the {name}."));
        return;
    };
    // Weigh the load after the move, so a container comes with its contents.
    let mut after = session.registry().clone();
    if !transfer(&mut after, &here, &player, &item, quantity) {
        session.say(format!("You can't take the {name}."));
        return;
    }
    if after.carried_weight(&player) > max_weight {
        session.say(format!("The {name} is too heavy."));
        return;
    }

    *session.registry_mut() = after;
    session.say(format!("You take {}.", counted(quantity, &name)));
}

pub fn drop(session: &mut GameSession, op: &Operation) {
    if !op.has_object() {
        session.say("Drop what?");
        return;
    }
    if op.quantity <= 0 {
        session.say(format!("You can't drop {} of something.", op.quantity));
        return;
    }
    let quantity = clamp(op.quantity);
    let player = session.player().clone();
    let Some(item) = op.direct.clone().filter(|i| held(session, &player, i) > 0) else {
        session.say(format!("You don't have any {}.", typed_or(op, "such thing")));
        return;
    };
    let name = display_name(session, &item);
    let have = held(session, &player, &item);
    if have < quantity {
        session.say(format!("You only have {have} {name}."));
        return;
    }
    let dropped = session
        .player_location()
        .is_some_and(|here| transfer(session.registry_mut(), &player, &here, &item, quantity));
    if dropped {
        session.say(format!("You drop {}.", counted(quantity, &name)));
    } else {
        session.say("You can't drop that here.");
    }
}

pub fn put(session: &mut GameSession, op: &Operation) {
    if !op.has_object() {
        session.say("Put what?");
        return;
    }
    if op.indirect_phrase.is_empty() {
        session.say("Put it where?");
        return;
    }
    if op.quantity <= 0 {
        session.say(format!("You can't put {} of something anywhere.", op.quantity));
        return;
    }
    let quantity = clamp(op.quantity);
    let player = session.player().clone();
    let Some(item) = op.direct.clone().filter(|i| held(session, &player, i) > 0) else {
        session.say(format!("You don't have any {}.", typed_or(op, "such thing")));
        return;
    };
    let name = display_name(session, &item);
    let have = held(session, &player, &item);
    if have < quantity {
        session.say(format!("You only have {have} {name}."));
        return;
    }

    let target_phrase = op.indirect_phrase.text();
    let Some(target) = op.indirect.clone().filter(|t| scope(session).contains(t)) else {
        session.say(format!("There is no {target_phrase} here."));
        return;
    };
    let target_name = display_name(session, &target);
    let is_container = session
        .registry()
        .get_key(&target)
        .is_some_and(|e| e.as_item().is_some() && e.container().is_some());
    if target == item || !is_container {
        session.say(format!("You can't put things in the {target_name}."));
        return;
    }

    if transfer(session.registry_mut(), &player, &target, &item, quantity) {
        let preposition = op.preposition.as_deref().unwrap_or("in");
        session.say(format!(
            "You put {} {preposition} the {target_name}.",
            counted(quantity, &name)
        ));
    }
}

pub fn inventory(session: &mut GameSession) {
    let player = session.player().clone();
    let Some(container) = session.player_entity().and_then(Entity::container) else {
        session.say("You are empty-handed.");
        return;
    };
    let items: Vec<String> = container
        .stacks()
        .map(|s| {
            let name = display_name(session, &s.item);
            if s.quantity == 1 {
                name
            } else {
                format!("{} {name}", s.quantity)
            }
        })
        .collect();
    if items.is_empty() {
        session.say("You are empty-handed.");
        return;
    }
    let carried = session.registry().carried_weight(&player);
    let max = session
        .player_entity()
        .and_then(Entity::as_pawn)
        .map_or(0.0, |p| p.max_weight);
    session.say(format!("You are carrying: {}.", items.join(", ")));
    session.say(format!("Total weight {carried:.1} of {max:.1}."));
}
