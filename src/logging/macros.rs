/// Logs at [`LogLevel::Trace`](crate::logging::LogLevel::Trace).
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        $crate::logging::AppLogger::log($crate::logging::LogLevel::Trace, &format!($($arg)*))
    };
}

/// Logs at [`LogLevel::Debug`](crate::logging::LogLevel::Debug).
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::AppLogger::log($crate::logging::LogLevel::Debug, &format!($($arg)*))
    };
}

/// Logs at [`LogLevel::Info`](crate::logging::LogLevel::Info).
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logging::AppLogger::log($crate::logging::LogLevel::Info, &format!($($arg)*))
    };
}

/// Logs at [`LogLevel::Warn`](crate::logging::LogLevel::Warn).
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logging::AppLogger::log($crate::logging::LogLevel::Warn, &format!($($arg)*))
    };
}

/// Logs at [`LogLevel::Error`](crate::logging::LogLevel::Error).
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::AppLogger::log($crate::logging::LogLevel::Error, &format!($($arg)*))
    };
}
