use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

/// Usage text for `--help` and `--version`
///
/// Arguments are parsed by [`crate::options::ParsedOptions::parse`], which
/// accepts prefixes of the long options and ignores unknown flags; this
/// definition only documents them.
#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .disable_help_flag(true)
        .arg(
            Arg::new("dbname")
                .help("database name to connect to")
                .long("dbname")
                .short('d')
                .value_name("DBNAME"),
        )
        .arg(
            Arg::new("username")
                .help("user name to connect as")
                .long("username")
                .short('U')
                .value_name("USERNAME"),
        )
        .arg(
            Arg::new("hostname")
                .help("database server host or socket directory")
                .long("hostname")
                .short('h')
                .value_name("HOSTNAME"),
        )
        .arg(
            Arg::new("hostaddr")
                .help("numeric address of the server, skips name resolution")
                .long("hostaddr")
                .long_help(
                    "Numeric IP address of the server.\n\
                    Skips the host name lookup; --hostname may still be given \
                    and is kept in the connection string.\n\n\
                    Only the --hostaddr=ADDRESS form is accepted.",
                )
                .value_name("ADDRESS"),
        )
        .arg(
            Arg::new("port")
                .help("database server port")
                .long("port")
                .short('p')
                .value_name("PORT"),
        )
        .arg(
            Arg::new("timeout")
                .help("seconds to wait when attempting connection, 0 disables")
                .long("timeout")
                .short('t')
                .value_name("SECS"),
        )
        .arg(
            Arg::new("help")
                .action(ArgAction::Help)
                .help("show this help, then exit")
                .long("help")
                .short('?'),
        )
        .after_help(
            "Environment:\n  \
            PGPASSWORD  password, read by the client library only\n  \
            PGDEBUG     set to 1 to print the connection string before connecting\n  \
            RUST_LOG    diagnostic log filter written to stderr (default: off)\n\n\
            Exit status:\n  \
            0    the server accepted the session\n  \
            1    the connection was refused or failed (bad credentials, missing database, ...)\n  \
            255  bad arguments, or no connection could be started",
        )
}
