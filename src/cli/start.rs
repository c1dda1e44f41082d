use super::{dispatch, telemetry};
use crate::probe::Outcome;
use anyhow::Result;
use std::{env, ffi::OsString};

/// Main orchestrator - Pure orchestration with no business logic
///
/// Four-step data flow:
/// 1. Collect: Read the process arguments (program name excluded)
/// 2. Initialize Telemetry: Set up logging to stderr
/// 3. Dispatch: Convert the arguments into a typed Action enum
/// 4. Execute: Run the action, at most one connection attempt
///
/// A connection failure is an `Ok` [`Outcome`]; `Err` is reserved for
/// internal errors such as malformed arguments.
///
/// # Errors
///
/// Returns an error if an option is missing its value or output cannot be
/// written
pub async fn start() -> Result<Outcome> {
    // 1. Collect
    let args = utf8_args(env::args_os().skip(1));

    // 2. Initialize Telemetry
    telemetry::init();

    // 3. Dispatch: parse errors abort before any network action
    let action = dispatch::dispatch(&args, dispatch::debug_enabled())?;

    log::debug!("action: {action:?}");

    // 4. Execute
    action.execute().await
}

/// Tokens that are not valid UTF-8 become empty strings: they never match a
/// flag, and in a value position they fail as a missing value
fn utf8_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<String> {
    args.into_iter()
        .map(|arg| arg.into_string().unwrap_or_default())
        .collect()
}
