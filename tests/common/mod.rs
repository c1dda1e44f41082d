#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::{
    env,
    path::PathBuf,
    process::{Command, Output},
};

pub const POSTGRES_HOST: &str = "localhost";
pub const POSTGRES_PORT: &str = "5432";
pub const POSTGRES_USER: &str = "postgres";
pub const POSTGRES_PASSWORD: &str = "secret";
pub const POSTGRES_DB: &str = "testdb";

/// Exit status of `process::exit(-1)` on Unix
pub const EXIT_NO_HANDLE: i32 = 255;

/// libpq `CONNECTION_BAD`
pub const EXIT_CONNECTION_BAD: i32 = 1;

// PG* variables the driver would otherwise pick up from the test environment
const PG_ENV: [&str; 8] = [
    "PGHOST",
    "PGHOSTADDR",
    "PGPORT",
    "PGUSER",
    "PGDATABASE",
    "PGPASSWORD",
    "PGSSLMODE",
    "PGDEBUG",
];

pub fn skip_if_no_postgres() -> bool {
    env::var("SKIP_POSTGRES_TESTS").is_ok()
}

pub fn pg_check_conn_binary_path() -> PathBuf {
    env::var_os("CARGO_BIN_EXE_pg_check_conn")
        .map_or_else(|| PathBuf::from("target/debug/pg_check_conn"), PathBuf::from)
}

/// Command with a clean `PG*` environment
pub fn pg_check_conn() -> Command {
    let mut cmd = Command::new(pg_check_conn_binary_path());
    for var in PG_ENV {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn run(args: &[&str], envs: &[(&str, &str)]) -> Output {
    pg_check_conn()
        .args(args)
        .envs(envs.iter().copied())
        .output()
        .expect("failed to run pg_check_conn")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// A local port nothing listens on
pub fn pick_closed_port() -> u16 {
    std::net::TcpListener::bind(("127.0.0.1", 0))
        .expect("failed to bind random local port")
        .local_addr()
        .expect("failed to read local addr")
        .port()
}
