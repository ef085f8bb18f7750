//! Command-line arguments and runtime configuration.

use std::path::PathBuf;

use clap::Parser;

/// Default directory for save files.
pub const DEFAULT_SAVE_DIR: &str = "saves";

/// Default log filter when neither `RUST_LOG` nor `--log-filter` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Which terminal adapter the game talks through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdapterKind {
    /// Line editing with history, via rustyline.
    #[default]
    Console,
    /// Plain stdin lines handed over from a reader thread.
    Stream,
}

impl AdapterKind {
    /// Parses an adapter name, falling back to the console for anything
    /// unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "console" => Self::Console,
            "stream" => Self::Stream,
            other => {
                tracing::warn!(adapter = other, "unknown adapter, using console");
                Self::Console
            }
        }
    }
}

/// Command-line arguments of the `wayfarer` binary.
#[derive(Debug, Parser)]
#[command(name = "wayfarer", version, about = "A small text adventure", long_about = None)]
pub struct Arguments {
    /// Terminal adapter: console or stream
    #[arg(default_value = "console")]
    pub adapter: String,

    /// Directory for save files
    #[arg(
        short = 's',
        long = "save-dir",
        env = "WAYFARER_SAVE_DIR",
        default_value = DEFAULT_SAVE_DIR
    )]
    pub save_dir: PathBuf,

    /// Log filter directives, e.g. `wayfarer_engine=debug`
    #[arg(short = 'l', long = "log-filter")]
    pub log_filter: Option<String>,

    /// Skip the title banner
    #[arg(long = "no-banner")]
    pub no_banner: bool,
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            adapter: "console".to_string(),
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            log_filter: None,
            no_banner: false,
        }
    }
}

/// Settings the runtime needs, independent of how they were supplied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Terminal adapter.
    pub adapter: AdapterKind,
    /// Directory for save files.
    pub save_dir: PathBuf,
    /// Explicit log filter; `RUST_LOG` or the default applies when unset.
    pub log_filter: Option<String>,
    /// Whether to print the title banner.
    pub show_banner: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            adapter: AdapterKind::Console,
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            log_filter: None,
            show_banner: true,
        }
    }
}

impl RuntimeConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the adapter.
    #[must_use]
    pub fn with_adapter(mut self, adapter: AdapterKind) -> Self {
        self.adapter = adapter;
        self
    }

    /// Sets the save directory.
    #[must_use]
    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = dir.into();
        self
    }

    /// Sets the log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Disables the title banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }
}

impl From<Arguments> for RuntimeConfig {
    fn from(args: Arguments) -> Self {
        let mut config = Self::new()
            .with_adapter(AdapterKind::from_name(&args.adapter))
            .with_save_dir(args.save_dir);
        config.log_filter = args.log_filter;
        if args.no_banner {
            config = config.without_banner();
        }
        config
    }
}
