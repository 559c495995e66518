use std::io::{self, Write};
use std::sync::OnceLock;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::PROGRAM_LOG_LEVEL;

/// Stderr logger for diagnostics. Listing output never goes through here.
pub struct Logger {
    level: Level,
}

impl Logger {
    fn format_record(record: &Record<'_>) -> String {
        format!(
            "{} {} [{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // A closed stderr is not worth failing a listing over.
        let _ = writeln!(io::stderr().lock(), "{}", Self::format_record(record));
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Parse a level name as given in `LSRS_LOG_LEVEL`.
///
/// `off`, unknown names and an unset variable all fall back to `Warn`.
fn parse_level(value: Option<&str>) -> Level {
    value
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .and_then(|filter| filter.to_level())
        .unwrap_or(Level::Warn)
}

fn get_level_from_env() -> Level {
    parse_level(std::env::var(PROGRAM_LOG_LEVEL).ok().as_deref())
}

pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(get_level_from_env())
}

pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    // Only the first caller installs the logger; later levels are ignored
    // so the max level can never disagree with the installed logger.
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let logger = LOGGER.get_or_init(|| Logger { level });
    log::set_logger(logger)?;
    log::set_max_level(logger.level.to_level_filter());

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
