//! Command-line argument parsing.

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Version,
    Help,
    /// Clear the stored login and remembered pages, then exit.
    Logout,
    /// Start the dashboard, optionally switching the interface language.
    RunTui { language: Option<String> },
    /// Arguments that could not be understood.
    Invalid(String),
}

pub const USAGE: &str = "\
Usage: abd-admin [OPTIONS]

Options:
  --lang <code>   Set the interface language (en, ru, uz)
  --logout        Forget the stored login and exit
  -V, --version   Print version and exit
  -h, --help      Print this help

Environment:
  ABD_API_ROOT, ABD_ADMIN_LOGIN, ABD_ADMIN_KEY, ABD_TIMEOUT_SECS,
  ABD_PAGE_SIZE, ABD_LOG, ABD_DATA_DIR";

/// Parse `std::env::args()`-style arguments. The first item is the
/// program name.
///
/// ```
/// use abd_admin::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["abd-admin".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut language = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--logout" => return CliCommand::Logout,
            "--lang" => match args.next() {
                Some(code) => language = Some(code),
                None => return CliCommand::Invalid("--lang needs a language code".to_string()),
            },
            other => {
                if let Some(code) = other.strip_prefix("--lang=") {
                    language = Some(code.to_string());
                } else {
                    return CliCommand::Invalid(format!("Unknown argument '{}'", other));
                }
            }
        }
    }
    CliCommand::RunTui { language }
}
