//! Verify a PostgreSQL server accepts a session for the supplied credentials
//!
//! Unlike `pg_isready`, an authentication or authorization failure (unknown
//! role, missing database, wrong password) is reported as a failure.

pub mod cli;
pub mod options;
pub mod probe;
pub mod tls;
