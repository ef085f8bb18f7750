//! The game loop.

use std::rc::Rc;

use wayfarer_engine::commands::describe_location;
use wayfarer_engine::{GameIo, GameSession, Level, Ports, SnapshotStore, TurnOutcome, run_turn};
use wayfarer_foundation::Result;

/// Drives one game over a terminal adapter and a save store.
pub struct Runner<I: GameIo, S: SnapshotStore> {
    /// Terminal adapter.
    io: I,

    /// Save store.
    store: S,

    /// The game in progress.
    session: GameSession,

    /// Level started at new game and restart.
    level: Rc<dyn Level>,

    /// Whether to show the title banner.
    show_banner: bool,
}

impl<I: GameIo, S: SnapshotStore> Runner<I, S> {
    /// Creates a runner for `level`. Nothing happens until [`Runner::run`].
    pub fn new(io: I, store: S, level: Rc<dyn Level>) -> Self {
        Self {
            io,
            store,
            session: GameSession::new(),
            level,
            show_banner: true,
        }
    }

    /// Disables the title banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns the session.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the terminal adapter.
    #[must_use]
    pub fn io(&self) -> &I {
        &self.io
    }

    /// Returns the save store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Plays until the game ends or input runs out.
    ///
    /// # Errors
    ///
    /// Returns an error if the level fails to build or an adapter fails.
    pub fn run(&mut self) -> Result<()> {
        self.start()?;
        while self.step()? {}
        tracing::info!(turns = self.session.turns(), "session ended");
        Ok(())
    }

    /// Starts a new game and describes the opening location.
    ///
    /// # Errors
    ///
    /// Returns an error if the level fails to build or an adapter fails.
    pub fn start(&mut self) -> Result<()> {
        if self.show_banner {
            self.io.clear_screen()?;
            self.io.display(&self.banner(), None)?;
        }
        let mut ports = Ports::new(&mut self.io, &mut self.store);
        self.session.start(Rc::clone(&self.level), &mut ports)?;
        describe_location(&mut self.session);
        self.session.flush(&mut self.io)
    }

    /// Reads and plays one line.
    ///
    /// Returns `Ok(false)` once the game is over or input has ended.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter fails.
    pub fn step(&mut self) -> Result<bool> {
        if self.session.is_finished() {
            return Ok(false);
        }
        self.io.set_completions(self.vocabulary());
        let Some(line) = self.io.get_input()? else {
            tracing::debug!("input ended");
            return Ok(false);
        };
        let mut ports = Ports::new(&mut self.io, &mut self.store);
        let outcome = run_turn(&mut self.session, &line, &mut ports)?;
        Ok(outcome != TurnOutcome::Ignored && !self.session.is_finished())
    }

    fn banner(&self) -> String {
        format!(
            "{}\nA Wayfarer adventure. Type 'help' for a list of commands.\n",
            self.level.name()
        )
    }

    /// Names and aliases of the active commands, for completion.
    fn vocabulary(&self) -> Vec<String> {
        let registry = self.session.registry();
        let mut words: Vec<String> = self
            .session
            .active_commands()
            .iter()
            .filter_map(|key| registry.get_key(key))
            .filter_map(|e| e.as_command().map(|c| (e, c)))
            .flat_map(|(e, c)| {
                std::iter::once(e.key().to_string()).chain(c.aliases().iter().cloned())
            })
            .collect();
        words.sort();
        words.dedup();
        words
    }
}
