use super::Action;
use crate::{
    cli::commands,
    options::ParsedOptions,
    probe::{ConnectionSpec, Connector, Outcome, PgConnector, probe},
};
use anyhow::{Context, Result};
use std::io::{self, Write};

/// Execute the action's business logic by delegating to the appropriate module
pub async fn execute(action: Action) -> Result<Outcome> {
    match action {
        Action::Help => {
            commands::new()
                .print_help()
                .context("failed to write help")?;
            Ok(Outcome::Success)
        }
        Action::Version => {
            let mut stdout = io::stdout();
            write!(stdout, "{}", commands::new().render_version())
                .and_then(|()| stdout.flush())
                .context("failed to write version")?;
            Ok(Outcome::Success)
        }
        Action::Check { options, debug } => {
            check(&PgConnector, &options, debug, &mut io::stdout()).await
        }
    }
}

/// Probe the server described by `options` and report on `out`
///
/// With `debug` the connection string is written first. A failed attempt
/// writes `Error: <message>`; success writes nothing else.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails
pub async fn check<C: Connector, W: Write>(
    connector: &C,
    options: &ParsedOptions,
    debug: bool,
    out: &mut W,
) -> Result<Outcome> {
    let spec = ConnectionSpec::from(options);

    if debug {
        writeln!(out, "Conn string: {spec}")
            .and_then(|()| out.flush())
            .context("failed to write connection string")?;
    }

    let outcome = probe(connector, &spec).await;

    if let Outcome::Failure { message, .. } = &outcome {
        writeln!(out, "Error: {}", message.trim_end())
            .and_then(|()| out.flush())
            .context("failed to write connection error")?;
    }

    Ok(outcome)
}
