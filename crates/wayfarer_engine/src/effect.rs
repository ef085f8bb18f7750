//! Effect application.
//!
//! Effects are the only way events and dialog choices change the world.
//! An effect naming something that does not exist is a content problem: it
//! is logged and skipped, and the rest of the effect list still runs.

use wayfarer_foundation::{NameKey, Result};
use wayfarer_storage::{Effect, Entity};

use crate::dialog;
use crate::session::{GameSession, Ports};

/// Applies one effect.
///
/// # Errors
///
/// Only fails when a collaborator fails (for example, the terminal while a
/// dialog started by the effect is running).
pub fn apply(session: &mut GameSession, effect: &Effect, ports: &mut Ports<'_>) -> Result<()> {
    tracing::debug!(?effect, "applying effect");
    match effect {
        Effect::Say(text) => session.say(text.clone()),
        Effect::SetStatus { entity, key, value } => {
            with_entity(session, entity, |e| e.set_status(key.clone(), *value));
        }
        Effect::AdjustStatus { entity, key, delta } => {
            with_entity(session, entity, |e| e.adjust_status(key.clone(), *delta));
        }
        Effect::ClearStatus { entity, key } => {
            with_entity(session, entity, |e| e.clear_status(key));
        }
        Effect::MovePawn { pawn, to } => move_pawn(session, pawn, to),
        Effect::GiveItem {
            holder,
            item,
            quantity,
        } => {
            if let Err(e) = session
                .registry_mut()
                .place(item.as_str(), holder.as_str(), *quantity)
            {
                tracing::warn!(%holder, %item, error = %e, "cannot give item");
            }
        }
        Effect::TakeItem {
            holder,
            item,
            quantity,
        } => {
            let taken = session
                .registry_mut()
                .get_key_mut(holder)
                .and_then(Entity::container_mut)
                .is_some_and(|c| c.remove(item, *quantity));
            if !taken {
                tracing::warn!(%holder, %item, quantity, "cannot take item");
            }
        }
        Effect::RemoveEntity(name) => remove_entity(session, name),
        Effect::EnableCommand(name) => {
            session.activate(name.as_str());
        }
        Effect::DisableCommand(name) => {
            session.deactivate(name.as_str());
        }
        Effect::InitiateDialog(name) => dialog::run(session, name, ports)?,
        Effect::EndGame(text) => {
            session.say(text.clone());
            session.finish();
        }
    }
    Ok(())
}

/// Applies effects in order.
///
/// # Errors
///
/// Stops at the first collaborator failure.
pub fn apply_all(
    session: &mut GameSession,
    effects: &[Effect],
    ports: &mut Ports<'_>,
) -> Result<()> {
    for effect in effects {
        apply(session, effect, ports)?;
    }
    Ok(())
}

fn with_entity(session: &mut GameSession, key: &NameKey, f: impl FnOnce(&mut Entity)) {
    match session.registry_mut().get_key_mut(key) {
        Some(entity) => f(entity),
        None => tracing::warn!(entity = %key, "effect targets a missing entity"),
    }
}

fn move_pawn(session: &mut GameSession, pawn: &NameKey, to: &NameKey) {
    if session.registry().get_location(to.as_str()).is_none() {
        tracing::warn!(%pawn, location = %to, "cannot move pawn to a non-location");
        return;
    }
    match session
        .registry_mut()
        .get_key_mut(pawn)
        .and_then(Entity::as_pawn_mut)
    {
        Some(data) => data.location = to.clone(),
        None => tracing::warn!(%pawn, "cannot move a non-pawn"),
    }
}

fn remove_entity(session: &mut GameSession, name: &NameKey) {
    if name == session.player() {
        tracing::warn!(entity = %name, "refusing to remove the player");
        return;
    }
    if session.registry_mut().remove(name.as_str()).is_none() {
        tracing::warn!(entity = %name, "cannot remove a missing entity");
        return;
    }
    session.deactivate(name.as_str());
}
