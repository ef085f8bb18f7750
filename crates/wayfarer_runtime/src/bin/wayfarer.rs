//! Wayfarer CLI entry point.

use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser;
use wayfarer_engine::{GameIo, Level, SnapshotStore};
use wayfarer_foundation::Result;
use wayfarer_runtime::{
    AdapterKind, Arguments, ConsoleIo, FileStore, OldMill, Runner, RuntimeConfig, StreamIo,
    logging,
};

fn main() -> ExitCode {
    let arguments = Arguments::parse();

    if let Err(e) = logging::init(arguments.log_filter.as_deref()) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let config = RuntimeConfig::from(arguments);
    tracing::debug!(?config, "configuration loaded");

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "game aborted");
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &RuntimeConfig) -> Result<()> {
    let store = FileStore::new(&config.save_dir);
    let level: Rc<dyn Level> = Rc::new(OldMill);
    match config.adapter {
        AdapterKind::Console => play(ConsoleIo::new()?, store, level, config),
        AdapterKind::Stream => play(StreamIo::stdio()?, store, level, config),
    }
}

fn play<I: GameIo, S: SnapshotStore>(
    io: I,
    store: S,
    level: Rc<dyn Level>,
    config: &RuntimeConfig,
) -> Result<()> {
    let mut runner = Runner::new(io, store, level);
    if !config.show_banner {
        runner = runner.without_banner();
    }
    runner.run()
}
