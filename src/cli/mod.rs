pub mod actions;
pub mod commands;
pub mod dispatch;
pub mod start;
pub mod telemetry;

/// Exit code for errors that are not a connection outcome (bad arguments,
/// failure to write output)
pub const INTERNAL_ERROR: i32 = -1;
