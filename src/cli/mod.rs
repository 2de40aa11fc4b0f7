//! CLI module.
//!
//! Called early in `main()`, before any terminal setup:
//!
//! ```ignore
//! use study_monk::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command) {
//!     // printed output; exit without starting the TUI
//! }
//! ```

pub mod args;
mod plan;
mod version;

pub use args::{parse_args, CliCommand};
pub use plan::plan_json;
pub use version::{help_text, version_line, VERSION};

use crate::error::StudyResult;

/// Run a non-TUI command, returning its stdout text.
///
/// `None` means the TUI should start.
pub fn run_cli_command(command: &CliCommand) -> Option<StudyResult<String>> {
    match command {
        CliCommand::Version => Some(Ok(version_line())),
        CliCommand::Help => Some(Ok(help_text())),
        CliCommand::Plan { query } => Some(plan_json(query)),
        CliCommand::RunTui => None,
    }
}
