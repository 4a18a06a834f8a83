use super::config::LogConfig;
use super::level::LogLevel;
use std::io::{self, Write};
use std::sync::{Mutex, OnceLock};

static LOGGER_CONFIG: OnceLock<Mutex<LogConfig>> = OnceLock::new();

/// Minimal stdlib logger: errors to stderr, everything else to stdout, gated by level.
pub struct AppLogger;

impl AppLogger {
    pub fn log(level: LogLevel, message: &str) {
        let config = LOGGER_CONFIG
            .get_or_init(|| Mutex::new(LogConfig::default()))
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default();

        if level > config.level {
            return;
        }

        match level {
            LogLevel::Error => {
                let _ = writeln!(io::stderr(), "[{}] {}", level, message);
            }
            _ => {
                let _ = writeln!(io::stdout(), "[{}] {}", level, message);
            }
        }
    }
}

/// Installs a process-wide log level. Safe to call more than once; only the
/// first call takes effect, matching `OnceLock`'s semantics.
pub fn init_logging(config: LogConfig) {
    let _ = LOGGER_CONFIG.set(Mutex::new(config));
}
