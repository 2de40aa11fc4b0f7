//! File-backed tracing setup.
//!
//! Stdout belongs to the TUI, so log lines go to a file under the user's
//! data directory.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::StudyResult;

const LOG_DIR: &str = "study-monk";
const LOG_FILE: &str = "study-monk.log";

/// `<data dir>/study-monk/study-monk.log`, if the platform has a data dir
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join(LOG_DIR).join(LOG_FILE))
}

/// Install the global subscriber writing to `path`.
///
/// An invalid filter directive falls back to `info`. Calling this twice is
/// harmless; the second subscriber is discarded.
pub fn init_file_logging(path: &Path, filter: &str) -> StudyResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Logging initialized");
    Ok(())
}
