//! CLI module for chat-widget.
//!
//! The dispatcher should be called early in main() to handle informational
//! flags before any runtime or network setup:
//!
//! ```ignore
//! use chat_widget::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! let Some(run) = run_cli_command(command) else {
//!     return Ok(());
//! };
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunArgs};
pub use version::{handle_help_command, handle_version_command, USAGE, VERSION};

/// Run an informational command if applicable.
///
/// Returns the run arguments when there is work left for the caller, or
/// `None` when the command was fully handled here.
pub fn run_cli_command(command: CliCommand) -> Option<RunArgs> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            None
        }
        CliCommand::Help => {
            handle_help_command();
            None
        }
        CliCommand::Run(run) => Some(run),
    }
}
