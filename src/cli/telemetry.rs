use std::io::Write;

/// Filter used when `RUST_LOG` is not set; stdout and stderr carry only the
/// probe result unless logging is asked for
const DEFAULT_FILTER: &str = "off";

/// Initialize logging to stderr, filtered by `RUST_LOG`
///
/// Calling it more than once keeps the first logger.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_FILTER);

    let result = env_logger::Builder::from_env(env)
        .format(log_format)
        .try_init();

    if result.is_err() {
        log::debug!("logger already initialized");
    }
}

/// Minimal format, the level as a single letter
fn log_format(buf: &mut env_logger::fmt::Formatter, record: &log::Record) -> std::io::Result<()> {
    let level_char = match record.level() {
        log::Level::Trace => 'T',
        log::Level::Debug => 'D',
        log::Level::Info => 'I',
        log::Level::Warn => 'W',
        log::Level::Error => 'E',
    };

    writeln!(buf, "{level_char}: {}", record.args())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init();
        init();
    }
}
