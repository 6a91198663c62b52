//! Command-line entry points that run before (or instead of) the dashboard.
//!
//! ```ignore
//! let command = parse_args(std::env::args());
//! match run_cli_command(&command, &config).await {
//!     Some(result) => return result,
//!     None => { /* start the dashboard */ }
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use version::{version_line, VERSION};

use crate::adapters::FileSessionStore;
use crate::config::AdminConfig;
use crate::error::{AdminResult, SystemError};
use crate::session::Session;
use crate::traits::SessionStore;

/// Run `command` if it does not need the dashboard.
///
/// Returns `None` for [`CliCommand::RunTui`].
pub async fn run_cli_command(command: &CliCommand, config: &AdminConfig) -> Option<AdminResult<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Logout => {
            let store = FileSessionStore::in_dir(&config.data_dir);
            Some(handle_logout(store).await)
        }
        CliCommand::Invalid(message) => Some(Err(SystemError::Config {
            message: format!("{}\n\n{}", message, USAGE),
        }
        .into())),
        CliCommand::RunTui { .. } => None,
    }
}

/// Clear the stored login marker.
pub async fn handle_logout<S: SessionStore>(store: S) -> AdminResult<()> {
    let mut session = Session::load(store).await;
    let was_logged_in = session.is_logged_in();
    session.log_out().await?;
    if was_logged_in {
        println!("Logged out.");
    } else {
        println!("Not logged in.");
    }
    Ok(())
}
