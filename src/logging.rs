#![cfg(feature = "std")]

//! Stderr logger for the binaries. Stdout stays reserved for the board and
//! for the sim's JSON output.

use std::env;
use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level (`off`, `error` .. `trace`).
pub const LOG_ENV: &str = "TICTACTOE_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // "tictactoe::skeleton" -> "skeleton"
        let target = record.target();
        let module = target.rsplit("::").next().unwrap_or(target);
        let _ = writeln!(
            std::io::stderr().lock(),
            "{:<5} [{}] {}",
            record.level(),
            module,
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

fn level_from_env() -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the logger. Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level_from_env());
    }
}
