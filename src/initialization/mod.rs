//! Application initialization.
//!
//! This module sets up the process-wide logger used by the binary. The library
//! itself only talks to the `log` facade, so it works without a logger.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
