//! Running a dialog.
//!
//! A dialog shows its prompt and numbered options, waits for a valid choice,
//! prints the reply, and applies the chosen option's effects. Invalid input
//! re-prompts; end of input abandons the dialog.

use wayfarer_foundation::{NameKey, Result};
use wayfarer_storage::Entity;

use crate::effect;
use crate::session::{GameSession, Ports};

const CHOICE_PROMPT: &str = "Choose an option: ";

/// Runs the dialog named `name`.
///
/// # Errors
///
/// Returns an error if the terminal fails.
pub fn run(session: &mut GameSession, name: &NameKey, ports: &mut Ports<'_>) -> Result<()> {
    let Some(dialog) = session
        .registry()
        .get_key(name)
        .and_then(Entity::as_dialog)
        .cloned()
    else {
        tracing::warn!(dialog = %name, "cannot start a missing dialog");
        return Ok(());
    };
    if dialog.options.is_empty() {
        session.say("There is nothing more to say.");
        return Ok(());
    }

    session.flush(ports.io)?;
    let mut menu = dialog.prompt.clone();
    for (i, option) in dialog.options.iter().enumerate() {
        menu.push_str(&format!("\n  {}. {}", i + 1, option.text));
    }

    let count = dialog.options.len();
    let (index, chosen) = loop {
        ports.io.display(&menu, Some(CHOICE_PROMPT))?;
        let choice = ports.io.get_choice(count)?;
        if let Some(found) = choice.and_then(|i| dialog.options.get(i).map(|o| (i, o))) {
            break found;
        }
        if ports.io.is_closed() {
            tracing::debug!(dialog = %name, "input closed during dialog");
            return Ok(());
        }
        ports
            .io
            .display(&format!("Please choose a number between 1 and {count}."), None)?;
    };

    tracing::debug!(dialog = %name, choice = index + 1, "dialog option chosen");
    if !chosen.reply.is_empty() {
        session.say(chosen.reply.clone());
    }
    if chosen.once {
        if let Some(data) = session
            .registry_mut()
            .get_key_mut(name)
            .and_then(Entity::as_dialog_mut)
        {
            if index < data.options.len() {
                data.options.remove(index);
            }
        }
    }
    effect::apply_all(session, &chosen.effects, ports)
}
