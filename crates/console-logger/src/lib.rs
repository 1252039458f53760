//! Console Logger
//!
//! `log` facade backend for the browser. Records go to the matching
//! `console` method on wasm and to stderr everywhere else.

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(&Local::now(), record.level(), record.target(), &record.args().to_string());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Install the logger globally. Fails if a logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

/// Parse a level name; unknown or missing names give `default`
pub fn parse_level(name: Option<&str>, default: LevelFilter) -> LevelFilter {
    name.and_then(|n| n.trim().parse().ok()).unwrap_or(default)
}

/// `HH:MM:SS.mmm LEVEL target: message`
pub fn format_line(time: &DateTime<Local>, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} {}: {}", time.format("%H:%M:%S%.3f"), level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_line() {
        let time = Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap();
        let line = format_line(&time, Level::Warn, "dashboard_sync::controller", "[LEDGER] saved");
        assert_eq!(line, "09:05:07.000 WARN  dashboard_sync::controller: [LEDGER] saved");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug"), LevelFilter::Info), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" WARN "), LevelFilter::Info), LevelFilter::Warn);
        assert_eq!(parse_level(Some("loud"), LevelFilter::Info), LevelFilter::Info);
        assert_eq!(parse_level(None, LevelFilter::Error), LevelFilter::Error);
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new(LevelFilter::Info);
        let debug = Metadata::builder().level(Level::Debug).target("t").build();
        let error = Metadata::builder().level(Level::Error).target("t").build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&error));
    }
}
