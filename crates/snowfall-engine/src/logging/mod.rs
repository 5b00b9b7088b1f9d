//! Logging utilities.
//!
//! Centralizes logger initialization. Everything else logs through the
//! `log` facade; `env_logger` is the only backend wired up here.

mod init;

pub use init::{init_logging, LoggingConfig};
