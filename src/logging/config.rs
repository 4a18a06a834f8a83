use super::level::LogLevel;

/// Global logger configuration. Messages more verbose than `level` are dropped.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LogLevel,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: LogLevel::Info }
    }
}

impl LogConfig {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }
}
