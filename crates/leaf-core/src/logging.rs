//! File logging for full-screen programs.
//!
//! A program that owns the alternate screen cannot print diagnostics to the
//! terminal it draws on, so leaf's `tracing` output goes to a file instead.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::runtime::ProgramError;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Install a global `tracing` subscriber that appends to `path`.
///
/// Honors `RUST_LOG` (e.g. `RUST_LOG=leaf_widgets=debug` to watch page
/// commits) and falls back to [`DEFAULT_FILTER`]. Fails if the file cannot
/// be opened or if a global subscriber is already installed.
///
/// ```no_run
/// leaf_core::logging::log_to_file("leaf.log")?;
/// tracing::info!("gallery started");
/// # Ok::<(), leaf_core::ProgramError>(())
/// ```
pub fn log_to_file(path: impl AsRef<Path>) -> Result<(), ProgramError> {
    let path = path.as_ref();
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| ProgramError::Logging(err.to_string()))?;

    tracing::debug!(path = %path.display(), "file logging installed");
    Ok(())
}
