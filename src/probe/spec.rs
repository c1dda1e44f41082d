use crate::options::ParsedOptions;
use std::fmt;

/// libpq connection keywords, in the order they are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    DbName,
    User,
    HostAddr,
    Host,
    Port,
    ConnectTimeout,
}

impl Keyword {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DbName => "dbname",
            Self::User => "user",
            Self::HostAddr => "hostaddr",
            Self::Host => "host",
            Self::Port => "port",
            Self::ConnectTimeout => "connect_timeout",
        }
    }
}

/// Ordered `keyword=value` pairs describing the target server
///
/// Only options that were supplied appear. The password is never part of
/// it, the driver reads `PGPASSWORD` (or the pgpass file) on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionSpec {
    params: Vec<(Keyword, String)>,
}

impl ConnectionSpec {
    #[must_use]
    pub fn get(&self, keyword: Keyword) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|(_, v)| v.as_str())
    }

    pub fn params(&self) -> impl Iterator<Item = (Keyword, &str)> {
        self.params.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl From<&ParsedOptions> for ConnectionSpec {
    fn from(options: &ParsedOptions) -> Self {
        let params = [
            (Keyword::DbName, &options.database),
            (Keyword::User, &options.username),
            // hostaddr skips name resolution, host may still be used for TLS
            (Keyword::HostAddr, &options.host_address),
            (Keyword::Host, &options.host),
            (Keyword::Port, &options.port),
            (Keyword::ConnectTimeout, &options.timeout),
        ]
        .into_iter()
        .filter_map(|(keyword, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (keyword, v.to_string()))
        })
        .collect();

        Self { params }
    }
}

/// Quote a value the way libpq expects in a conninfo string
fn write_value(f: &mut fmt::Formatter, value: &str) -> fmt::Result {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_ascii_whitespace() || c == '\'' || c == '\\');

    if !needs_quotes {
        return f.write_str(value);
    }

    f.write_str("'")?;
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("'")
}

impl fmt::Display for ConnectionSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, (keyword, value)) in self.params().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}=", keyword.as_str())?;
            write_value(f, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    fn spec(args: &[&str]) -> ConnectionSpec {
        ConnectionSpec::from(&ParsedOptions::parse(args).unwrap())
    }

    #[test]
    fn test_spec_fixed_order() {
        let spec = spec(&["-p", "5433", "-h", "db.example.com", "-U", "alice", "-d", "app"]);
        assert_eq!(
            spec.to_string(),
            "dbname=app user=alice host=db.example.com port=5433"
        );
        assert_eq!(spec.get(Keyword::HostAddr), None);
        assert_eq!(spec.get(Keyword::ConnectTimeout), None);
    }

    #[test]
    fn test_spec_host_and_hostaddr() {
        let spec = spec(&["--hostaddr=10.0.0.5", "-h", "db.example.com"]);
        assert_eq!(spec.to_string(), "hostaddr=10.0.0.5 host=db.example.com");
        assert_eq!(spec.get(Keyword::HostAddr), Some("10.0.0.5"));
        assert_eq!(spec.get(Keyword::Host), Some("db.example.com"));
    }

    #[test]
    fn test_spec_all_keywords() {
        let spec = spec(&[
            "-t", "5", "-p", "5432", "-h", "db", "--hostaddr=127.0.0.1", "-U", "u", "-d", "d",
        ]);
        let keywords: Vec<&str> = spec.params().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keywords,
            ["dbname", "user", "hostaddr", "host", "port", "connect_timeout"]
        );
        assert_eq!(spec.get(Keyword::ConnectTimeout), Some("5"));
    }

    #[test]
    fn test_spec_empty() {
        let spec = spec(&[]);
        assert_eq!(spec, ConnectionSpec::default());
        assert_eq!(spec.params().count(), 0);
        assert_eq!(spec.to_string(), "");
    }

    #[test]
    fn test_spec_skips_empty_fields() {
        let options = ParsedOptions {
            database: Some(String::new()),
            username: Some("alice".to_string()),
            ..Default::default()
        };
        assert_eq!(ConnectionSpec::from(&options).to_string(), "user=alice");
    }

    #[test]
    fn test_spec_quotes_values() {
        let options = ParsedOptions {
            database: Some("my db".to_string()),
            username: Some("o'neil".to_string()),
            host: Some(r"c:\pg".to_string()),
            ..Default::default()
        };
        assert_eq!(
            ConnectionSpec::from(&options).to_string(),
            r"dbname='my db' user='o\'neil' host='c:\\pg'"
        );
    }
}
