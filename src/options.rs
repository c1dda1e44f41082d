//! Connection option parsing
//!
//! Accepts the `pg_isready`-compatible grammar: `-x value` for short flags and
//! `--long=value` for long ones. Long flags are matched by prefix, values are
//! trimmed of ASCII whitespace and must not be empty. Tokens that are not
//! recognized are skipped so scripts written for `pg_isready` keep working.

use std::{error, fmt};

const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0c', '\x0b'];

/// Connection parameters collected from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOptions {
    pub database: Option<String>,
    pub username: Option<String>,
    pub host: Option<String>,
    pub host_address: Option<String>,
    pub port: Option<String>,
    pub timeout: Option<String>,
}

/// Option a value belongs to, used to name the culprit in a [`ParseError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Database,
    Username,
    Hostname,
    Hostaddr,
    Port,
    Timeout,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Username => "username",
            Self::Hostname => "hostname",
            Self::Hostaddr => "hostaddr",
            Self::Port => "port",
            Self::Timeout => "timeout",
        }
    }
}

/// A recognized option without a usable value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    pub field: Field,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "missing {} argument", self.field.as_str())
    }
}

impl error::Error for ParseError {}

// (short flag, long prefix, field); order matters, first match wins
const FLAGS: [(Option<&str>, &str, Field); 6] = [
    (Some("-d"), "--dbname", Field::Database),
    (Some("-U"), "--username", Field::Username),
    (Some("-h"), "--hostname", Field::Hostname),
    (None, "--hostaddr", Field::Hostaddr),
    (Some("-p"), "--port", Field::Port),
    (Some("-t"), "--timeout", Field::Timeout),
];

enum Style {
    Split,
    Equals,
}

fn recognize(token: &str) -> Option<(Field, Style)> {
    FLAGS.iter().find_map(|&(short, long, field)| {
        if short == Some(token) {
            Some((field, Style::Split))
        } else if token.starts_with(long) {
            Some((field, Style::Equals))
        } else {
            None
        }
    })
}

/// Value of a `-x value` flag: the next token, unless it looks like a flag
fn split_value(next: Option<&str>, field: Field) -> Result<String, ParseError> {
    next.filter(|value| !value.starts_with('-'))
        .map(|value| value.trim_matches(WHITESPACE))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or(ParseError { field })
}

/// Value of a `--long=value` flag: everything after the first `=`
fn equals_value(token: &str, field: Field) -> Result<String, ParseError> {
    token
        .split_once('=')
        .map(|(_, value)| value.trim_matches(WHITESPACE))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or(ParseError { field })
}

impl ParsedOptions {
    /// Parse the argument list, excluding the program name
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] naming the first recognized option that lacks
    /// a valid value
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, ParseError> {
        let mut options = Self::default();
        let mut tokens = args.iter().map(|arg| arg.as_ref());

        while let Some(token) = tokens.next() {
            let Some((field, style)) = recognize(token) else {
                continue;
            };

            // the iterator advances past a consumed split-style value
            let value = match style {
                Style::Split => split_value(tokens.next(), field)?,
                Style::Equals => equals_value(token, field)?,
            };

            *options.slot(field) = Some(value);
        }

        Ok(options)
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Database => &mut self.database,
            Field::Username => &mut self.username,
            Field::Hostname => &mut self.host,
            Field::Hostaddr => &mut self.host_address,
            Field::Port => &mut self.port,
            Field::Timeout => &mut self.timeout,
        }
    }
}
