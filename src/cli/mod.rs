// CLI module
// Command-line interface, argument parsing and selection collection

mod args;
pub mod collector;

pub use args::CliArgs;
pub use collector::{ArgsCollector, PromptCollector, SelectionCollector};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// This function parses the command-line arguments and returns a `CliArgs` struct
/// containing the parsed values. If parsing fails (e.g., invalid arguments or
/// --help flag), clap will automatically display an error message or help text
/// and exit the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
