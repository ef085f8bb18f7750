//! The level the binary ships with.

use wayfarer_engine::{GameSession, Level, install_standard_commands};
use wayfarer_foundation::Result;
use wayfarer_storage::entity::HIDDEN;
use wayfarer_storage::{Container, DialogOption, Effect, Entity, Predicate};

/// A small four-room level: a meadow, a mill, its loft, and a hidden cellar.
#[derive(Clone, Copy, Debug, Default)]
pub struct OldMill;

impl Level for OldMill {
    fn name(&self) -> &str {
        "The Old Mill"
    }

    fn build(&self, session: &mut GameSession) -> Result<()> {
        install_standard_commands(session)?;
        let r = session.registry_mut();

        // Locations
        r.create(Entity::location("Meadow").with_description(
            "Tall grass sways around you. A mill stands to the east, its wheel creaking.",
        ))?;
        r.create(Entity::location("Mill").with_description(
            "Flour dust hangs in the air. A ladder leads up to the loft.",
        ))?;
        r.create(
            Entity::location("Loft").with_description("Sacks and crates crowd the low rafters."),
        )?;
        r.create(
            Entity::location("Cellar").with_description("Cold stone walls drip with damp."),
        )?;

        // Exits
        r.create(Entity::exit("Mill Door", "Meadow", "Mill").with_direction("east"))?;
        r.create(Entity::exit("Meadow Path", "Mill", "Meadow").with_direction("west"))?;
        r.create(Entity::exit("Ladder", "Mill", "Loft").with_direction("up"))?;
        r.create(Entity::exit("Loft Hatch", "Loft", "Mill").with_direction("down"))?;
        r.create(
            Entity::exit("Trapdoor", "Mill", "Cellar")
                .with_direction("down")
                .hidden(),
        )?;
        r.create(Entity::exit("Cellar Stairs", "Cellar", "Mill").with_direction("up"))?;

        // Items
        r.create(Entity::item("Lantern", 1.0).with_description("A brass lantern, still lit."))?;
        r.create(Entity::item("Coin", 0.1))?;
        r.create(
            Entity::item("Sack", 0.5)
                .with_description("A sturdy flour sack.")
                .with_container(Container::new()),
        )?;
        r.create(
            Entity::item("Millstone", 40.0).with_description("A spare millstone, far too heavy."),
        )?;
        r.create(
            Entity::item("Cellar Key", 0.1).with_description("An iron key, cold to the touch."),
        )?;
        r.place("lantern", "meadow", 1)?;
        r.place("coin", "loft", 5)?;
        r.place("sack", "loft", 1)?;
        r.place("millstone", "mill", 1)?;
        r.place("cellar key", "cellar", 1)?;

        // Pawns
        r.create(
            Entity::dialog("Miller Chat", "The miller wipes flour from his hands.")
                .with_option(
                    DialogOption::new(
                        "What's under the floor?",
                        "The old cellar. The trapdoor is by the millstone.",
                    )
                    .with_effect(Effect::set_status("trapdoor", HIDDEN, 0))
                    .once(),
                )
                .with_option(DialogOption::new(
                    "Lost anything?",
                    "My cellar key. Bring it out to the meadow for me.",
                ))
                .with_option(DialogOption::new("Goodbye.", "Mind the millstone.")),
        )?;
        r.create(
            Entity::pawn("Miller", "Mill", 20.0)
                .with_description("A stout miller with floury sleeves.")
                .with_dialog("Miller Chat"),
        )?;
        r.create(Entity::pawn("Player", "Meadow", 10.0))?;

        // Rules
        r.create(Entity::condition("In Cellar", Predicate::player_at("Cellar")))?;
        r.create(Entity::condition("In Meadow", Predicate::player_at("Meadow")))?;
        r.create(Entity::condition("Has Key", Predicate::player_holds("Cellar Key", 1)))?;
        r.create(Entity::condition("Unlit", Predicate::player_holds("Lantern", 1)).negated())?;
        r.create(
            Entity::event("Dark Cellar")
                .when("In Cellar")
                .when("Unlit")
                .then(Effect::say("It is very dark down here. You wish you had a light.")),
        )?;
        r.create(
            Entity::event("Homecoming")
                .when("Has Key")
                .when("In Meadow")
                .then(Effect::EndGame(
                    "You bring the cellar key back to the meadow. The miller will be pleased."
                        .to_string(),
                )),
        )?;

        session.set_player("player")
    }
}
