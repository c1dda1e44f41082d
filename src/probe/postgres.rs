use super::{ConnStatus, ConnectError, ConnectionSpec, Connector, Keyword, Session};
use crate::tls::ensure_crypto_provider;
use sqlx::{
    ConnectOptions, Connection, PgConnection,
    postgres::{PgConnectOptions, PgDatabaseError},
};
use std::{fmt, time::Duration};
use url::Url;
use tokio::time;

/// Connects with `sqlx`, which resolves `PGPASSWORD`, the pgpass file and the
/// other `PG*` defaults itself
#[derive(Debug, Default, Clone, Copy)]
pub struct PgConnector;

impl Connector for PgConnector {
    type Session = PgConnection;

    async fn connect(&self, spec: &ConnectionSpec) -> Result<PgConnection, ConnectError> {
        let (options, timeout) = connect_options(spec)?;
        let target = describe(&options);

        ensure_crypto_provider();

        log::debug!("{target}, timeout: {timeout:?}");

        let attempt = options.connect();
        let result = match timeout {
            Some(limit) => time::timeout(limit, attempt)
                .await
                .map_err(|_| ConnectError::NoHandle {
                    message: format!("{target} failed: timeout expired"),
                })?,
            None => attempt.await,
        };

        result.map_err(|err| classify(err, &target))
    }
}

impl Session for PgConnection {
    async fn close(self) {
        // a failed Terminate still drops the socket
        if let Err(err) = Connection::close(self).await {
            log::warn!("failed to close connection: {err}");
        }
    }
}

fn invalid_integer(value: &str, keyword: Keyword) -> ConnectError {
    ConnectError::Rejected {
        status: ConnStatus::Bad,
        message: format!(
            "invalid integer value \"{value}\" for connection option \"{}\"",
            keyword.as_str()
        ),
    }
}

/// Seconds to wait for the connection, following libpq: zero or negative
/// waits forever and one second is raised to two
///
/// # Errors
///
/// Returns a rejected attempt if the value is not an integer
pub fn connect_timeout(value: &str) -> Result<Option<Duration>, ConnectError> {
    let secs = value
        .parse::<i64>()
        .map_err(|_| invalid_integer(value, Keyword::ConnectTimeout))?;

    Ok(u64::try_from(secs)
        .ok()
        .filter(|secs| *secs > 0)
        .map(|secs| Duration::from_secs(secs.max(2))))
}

fn invalid_options(err: &dyn fmt::Display) -> ConnectError {
    ConnectError::Rejected {
        status: ConnStatus::Bad,
        message: format!("invalid connection options: {err}"),
    }
}

/// Translate the connection spec into driver options plus the connect timeout
///
/// The keywords travel as a `postgres:` URL so the driver fills the gaps from
/// the `PG*` variables and looks up the pgpass file only after `host`, `port`,
/// `user` and `dbname` are final.
///
/// `hostaddr` is what gets dialled when present, otherwise `host`; a host
/// starting with `/` is a Unix socket directory. The driver keeps a single
/// host name, so when `hostaddr` is given the `host` value is dropped: TLS
/// verification and the pgpass lookup both see the address instead.
///
/// # Errors
///
/// Returns a rejected attempt if `port` or `connect_timeout` is not a valid
/// integer, or `hostaddr` is not an IP address
pub fn connect_options(
    spec: &ConnectionSpec,
) -> Result<(PgConnectOptions, Option<Duration>), ConnectError> {
    let mut url = Url::parse("postgres:").map_err(|err| invalid_options(&err))?;
    let mut timeout = None;
    let has_hostaddr = spec.get(Keyword::HostAddr).is_some();

    {
        let mut query = url.query_pairs_mut();

        for (keyword, value) in spec.params() {
            match keyword {
                Keyword::ConnectTimeout => {
                    timeout = connect_timeout(value)?;
                    continue;
                }
                Keyword::Port => {
                    value
                        .parse::<u16>()
                        .map_err(|_| invalid_integer(value, keyword))?;
                }
                Keyword::Host if has_hostaddr => continue,
                Keyword::DbName | Keyword::User | Keyword::HostAddr | Keyword::Host => {}
            }

            query.append_pair(keyword.as_str(), value);
        }
    }

    let options = PgConnectOptions::from_url(&url).map_err(|err| invalid_options(&err))?;

    Ok((options, timeout))
}

/// Prefix for error messages, naming the server the way libpq does
#[must_use]
pub fn describe(options: &PgConnectOptions) -> String {
    options.get_socket().map_or_else(
        || {
            format!(
                "connection to server at \"{}\", port {}",
                options.get_host(),
                options.get_port()
            )
        },
        |socket| format!("connection to server on socket \"{}\"", socket.display()),
    )
}

/// Map a driver error to a connect error
///
/// Errors raised before a socket exists (resolution, refused, unreachable)
/// never produced a session; everything else was rejected during the
/// handshake and carries the `Bad` status.
#[must_use]
pub fn classify(err: sqlx::Error, target: &str) -> ConnectError {
    match err {
        sqlx::Error::Io(err) => ConnectError::NoHandle {
            message: format!("{target} failed: {err}"),
        },
        sqlx::Error::Database(db_err) => {
            let code = db_err
                .as_error()
                .downcast_ref::<PgDatabaseError>()
                .map(PgDatabaseError::code);

            let message = match code {
                Some(code) => format!(
                    "{target} failed: {} (SQLSTATE {code})",
                    db_err.message()
                ),
                None => format!("{target} failed: {}", db_err.message()),
            };

            ConnectError::Rejected {
                status: ConnStatus::Bad,
                message,
            }
        }
        err => ConnectError::Rejected {
            status: ConnStatus::Bad,
            message: format!("{target} failed: {err}"),
        },
    }
}
