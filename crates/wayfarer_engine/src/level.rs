//! Levels and the built-in command set.
//!
//! A level is a recipe for a fresh world. The session calls it at new game
//! and at restart; it registers entities, activates commands, and names the
//! player pawn.

use wayfarer_foundation::{NameKey, Result};
use wayfarer_storage::{Behavior, Entity};

use crate::session::GameSession;

/// A buildable starting world.
pub trait Level {
    /// Display name of the level.
    fn name(&self) -> &str;

    /// Populates an empty session.
    ///
    /// Must register a player pawn and call
    /// [`GameSession::set_player`].
    ///
    /// # Errors
    ///
    /// Returns a configuration error for invalid content.
    fn build(&self, session: &mut GameSession) -> Result<()>;
}

/// Compass directions that get their own move command: (name, hotkey).
pub const DIRECTIONS: [(&str, &str); 6] = [
    ("north", "n"),
    ("south", "s"),
    ("east", "e"),
    ("west", "w"),
    ("up", "u"),
    ("down", "d"),
];

/// The built-in commands, in activation order.
#[must_use]
pub fn standard_commands() -> Vec<Entity> {
    let mut commands = vec![
        Entity::command("look", "l", Behavior::Look).with_summary("describe your surroundings"),
        Entity::action("examine", "x", Behavior::Examine)
            .with_alias("inspect")
            .with_summary("look closely at something"),
        Entity::action("go", "go", Behavior::Go)
            .with_preposition("to")
            .with_summary("take an exit by name"),
    ];
    commands.extend(DIRECTIONS.iter().map(|(name, hotkey)| {
        Entity::command(name, hotkey, Behavior::Move).with_summary(format!("go {name}"))
    }));
    commands.extend([
        Entity::action("get", "g", Behavior::Get)
            .with_alias("take")
            .with_alias("pick up")
            .with_summary("pick something up"),
        Entity::command("drop", "dr", Behavior::Drop).with_summary("put something down"),
        Entity::action("put", "p", Behavior::Put)
            .with_preposition("in")
            .with_preposition("into")
            .with_preposition("on")
            .with_summary("put something in a container"),
        Entity::action("inventory", "i", Behavior::Inventory)
            .with_alias("inv")
            .with_summary("list what you carry"),
        Entity::action("talk", "t", Behavior::Talk)
            .with_preposition("to")
            .with_summary("talk to someone"),
        Entity::command("wait", "z", Behavior::Wait).with_summary("let time pass"),
        Entity::action("help", "h", Behavior::Help)
            .with_alias("?")
            .with_summary("list commands"),
        Entity::command("save", "sv", Behavior::Save).with_summary("save the game"),
        Entity::action("load", "ld", Behavior::Load)
            .with_alias("restore")
            .with_summary("load a saved game"),
        Entity::command("restart", "rs", Behavior::Restart).with_summary("start over"),
        Entity::action("quit", "q", Behavior::Quit)
            .with_alias("exit")
            .with_summary("leave the game"),
    ]);
    commands
}

/// Registers and activates the built-in commands.
///
/// Call before registering level content, so that content names are checked
/// against command hotkeys and aliases.
///
/// # Errors
///
/// Returns a configuration error if a built-in name collides with something
/// already registered.
pub fn install_standard_commands(session: &mut GameSession) -> Result<Vec<NameKey>> {
    let mut installed = Vec::new();
    for command in standard_commands() {
        let key = session.registry_mut().create(command)?;
        session.activate(key.as_str());
        installed.push(key);
    }
    Ok(installed)
}
