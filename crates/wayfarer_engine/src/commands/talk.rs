//! Talking to other pawns.

use wayfarer_foundation::Result;
use wayfarer_parser::Operation;
use wayfarer_storage::Entity;

use crate::dialog;
use crate::session::{GameSession, Ports};

/// Starts the dialog of a pawn standing in the player's location.
///
/// Accepts both `talk guard` and `talk to guard`.
pub fn talk(session: &mut GameSession, op: &Operation, ports: &mut Ports<'_>) -> Result<()> {
    let (target, phrase) = if op.direct_phrase.is_empty() {
        (op.indirect.clone(), &op.indirect_phrase)
    } else {
        (op.direct.clone(), &op.direct_phrase)
    };
    if phrase.is_empty() {
        session.say("Talk to whom?");
        return Ok(());
    }

    let here = session.player_location();
    let pawn = target.as_ref().and_then(|key| {
        session
            .registry()
            .get_key(key)
            .filter(|e| !e.is_hidden() && key != session.player())
            .and_then(Entity::as_pawn)
            .filter(|p| Some(&p.location) == here.as_ref())
    });
    let Some(pawn) = pawn else {
        session.say(format!("There is no one here called {}.", phrase.text()));
        return Ok(());
    };

    match pawn.dialog.clone() {
        Some(name) => dialog::run(session, &name, ports),
        None => {
            let name = target
                .as_ref()
                .and_then(|k| session.registry().get_key(k))
                .map_or_else(|| phrase.text(), |e| e.name().to_string());
            session.say(format!("{name} has nothing to say."));
            Ok(())
        }
    }
}
