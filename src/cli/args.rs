//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Version,
    Help,
    /// Print the mock study plans for a query as JSON
    Plan { query: String },
    /// Run the TUI application (default)
    RunTui,
}

/// Parse command-line arguments (program name first).
///
/// ```
/// use study_monk::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["study-monk".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "plan" => {
                let query = args.collect::<Vec<_>>().join(" ");
                return CliCommand::Plan { query };
            }
            _ => {}
        }
    }
    CliCommand::RunTui
}
