//! Minimal, dependency-free structured logging used across the optimizer.
//!
//! The engine never pulls in an external logging framework: the host
//! application owns its observability stack, so this module only needs to
//! produce readable progress lines during a potentially multi-second
//! optimization run.

mod config;
mod init;
mod level;
#[macro_use]
mod macros;

pub use config::LogConfig;
pub use init::{init_logging, AppLogger};
pub use level::LogLevel;
