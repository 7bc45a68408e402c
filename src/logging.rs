#![cfg(feature = "std")]

use std::env;
use std::string::String;

use log::{LevelFilter, Metadata, Record};

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "HANGMAN_LOG";

/// Writes `LEVEL target: message` lines to stderr; stdout belongs to the board.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `value`, or `warn` when unset or unrecognised.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Render one record, dropping the crate prefix from the module target so
/// `hangman::game` shows as `game`.
pub fn format_record(record: &Record) -> String {
    let target = record.target();
    let module = target.strip_prefix("hangman::").unwrap_or(target);
    format!("{:<5} {}: {}", record.level(), module, record.args())
}

/// Initialize logging with the level from [`LOG_ENV`].
pub fn init_logging() {
    let level = parse_level(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
        log::debug!("logging at {}", level);
    }
}
