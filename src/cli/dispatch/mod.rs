use crate::{cli::actions::Action, options::ParsedOptions};
use anyhow::Result;
use std::env;

/// Set to `1` to print the connection string before connecting
pub const DEBUG_ENV: &str = "PGDEBUG";

/// Whether the connection string should be echoed
#[must_use]
pub fn debug_enabled() -> bool {
    env::var(DEBUG_ENV).is_ok_and(|value| value == "1")
}

/// Convert the argument list (without the program name) into an Action
///
/// `--help`/`-?` and `--version`/`-V` are only honoured as the first
/// argument, anywhere else they are ignored like any unknown flag.
///
/// # Errors
///
/// Returns an error if a recognized option is missing its value
pub fn dispatch<S: AsRef<str>>(args: &[S], debug: bool) -> Result<Action> {
    match args.first().map(|arg| arg.as_ref()) {
        Some("--help" | "-?") => return Ok(Action::Help),
        Some("--version" | "-V") => return Ok(Action::Version),
        _ => {}
    }

    let options = ParsedOptions::parse(args)?;

    Ok(Action::Check { options, debug })
}
