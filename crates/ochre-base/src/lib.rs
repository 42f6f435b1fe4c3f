//! Shared foundation for the ochre workspace.
//!
//! Provides logging setup used by the other crates. Downstream crates log
//! through the `log` facade re-exported here.

pub mod logging;

pub use logging::{StdoutLogger, init_stdout_logger};

// Re-export log so downstream crates can use ochre_base::log::*
pub use log;
