//! Single connection attempt and outcome classification
//!
//! # Module Organization
//!
//! - `spec` - connection keywords and the rendered connection string
//! - `postgres` - the `sqlx` backed [`Connector`]
//!
//! Every non-OK status is a failure: a wrong password, a missing role or a
//! missing database are reported with the driver's status instead of being
//! folded into "server is up".

pub mod postgres;
pub mod spec;

pub use postgres::PgConnector;
pub use spec::{ConnectionSpec, Keyword};

use std::{error, fmt};

/// Exit code used when no session handle was ever produced, and for
/// internal errors
pub const NO_HANDLE: i32 = -1;

/// Connection status reported by the driver, numbered like libpq's
/// `ConnStatusType` so exit codes stay compatible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ConnStatus {
    Ok = 0,
    Bad = 1,
}

impl ConnStatus {
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Why a connection attempt did not produce a usable session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectError {
    /// A session was started but ended with a non-OK status
    Rejected { status: ConnStatus, message: String },
    /// No session was ever created (DNS failure, refused, timeout)
    NoHandle { message: String },
}

impl fmt::Display for ConnectError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Rejected { message, .. } | Self::NoHandle { message } => f.write_str(message),
        }
    }
}

impl error::Error for ConnectError {}

/// An established session, released by [`Session::close`]
///
/// `close` consumes the session, so it runs at most once; dropping an
/// unclosed session must also release it.
pub trait Session {
    fn close(self) -> impl Future<Output = ()>;
}

/// Performs exactly one connection attempt per call
pub trait Connector {
    type Session: Session;

    fn connect(
        &self,
        spec: &ConnectionSpec,
    ) -> impl Future<Output = Result<Self::Session, ConnectError>>;
}

/// Result of a probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure {
        message: String,
        /// `None` when no session handle was produced
        status: Option<ConnStatus>,
    },
}

impl Outcome {
    /// Process exit code for this outcome
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure {
                status: Some(status),
                ..
            } => status.code(),
            Self::Failure { status: None, .. } => NO_HANDLE,
        }
    }
}

impl From<ConnectError> for Outcome {
    fn from(err: ConnectError) -> Self {
        match err {
            ConnectError::Rejected { status, message } => Self::Failure {
                message,
                status: Some(status),
            },
            ConnectError::NoHandle { message } => Self::Failure {
                message,
                status: None,
            },
        }
    }
}

/// Attempt one connection and classify the result
///
/// An established session is closed before returning.
pub async fn probe<C: Connector>(connector: &C, spec: &ConnectionSpec) -> Outcome {
    match connector.connect(spec).await {
        Ok(session) => {
            session.close().await;
            Outcome::Success
        }
        Err(err) => {
            log::debug!("connection attempt failed: {err:?}");
            err.into()
        }
    }
}
