//! Log output for the binary.
//!
//! Logs go to stderr so they never interleave with game text on stdout.

use tracing_subscriber::EnvFilter;
use wayfarer_foundation::{Error, ErrorKind, Result};

use crate::config::DEFAULT_LOG_FILTER;

/// Builds the filter: `explicit` wins, then `RUST_LOG`, then the default.
///
/// # Errors
///
/// Returns an internal error if `explicit` is not a valid filter.
pub fn filter(explicit: Option<&str>) -> Result<EnvFilter> {
    match explicit {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| Error::new(ErrorKind::Internal(format!("invalid log filter: {e}")))),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))),
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an internal error if the filter is invalid or a subscriber is
/// already installed.
pub fn init(explicit: Option<&str>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(explicit)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init()
        .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))
}
