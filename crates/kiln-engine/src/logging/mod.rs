//! Logging utilities.
//!
//! Every diagnostic the harness produces (setup report, shader compile and
//! link logs, driver strings) goes through the `log` facade; this module
//! installs the `env_logger` backend.

mod init;

pub use init::{init_logging, LoggingConfig};
