//! Minimal `log` backend writing to stderr

use log::{LevelFilter, Metadata, Record};
use std::env;

/// Environment variable holding the log level (`error`, `warn`, `info`, `debug`, `trace`, `off`)
pub const LOG_ENV: &str = "WORDLE_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the logger with the level from `WORDLE_LOG`, defaulting to `warn`
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    // A second call keeps the first logger
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Silences logging until dropped
///
/// Used while the TUI owns the terminal, where stderr output would tear the screen.
pub struct Silenced {
    previous: LevelFilter,
}

impl Silenced {
    #[must_use]
    pub fn new() -> Self {
        let previous = log::max_level();
        log::set_max_level(LevelFilter::Off);
        Self { previous }
    }
}

impl Default for Silenced {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Silenced {
    fn drop(&mut self) {
        log::set_max_level(self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing() {
        assert_eq!(level_from(None), LevelFilter::Warn);
        assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from(Some("OFF")), LevelFilter::Off);
        assert_eq!(level_from(Some("loud")), LevelFilter::Warn);
    }

    #[test]
    fn silenced_restores_level() {
        log::set_max_level(LevelFilter::Info);
        {
            let _quiet = Silenced::new();
            assert_eq!(log::max_level(), LevelFilter::Off);
        }
        assert_eq!(log::max_level(), LevelFilter::Info);
    }
}
