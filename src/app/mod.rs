//! Application glue around the IRI model.
//!
//! This module provides record framing for input, record rendering for output,
//! progress logging, and statistics printing used by the binary.

pub mod input;
pub mod logging;
pub mod output;
pub mod statistics;

// Re-export public API
pub use input::{arg_records, read_records};
pub use logging::log_progress;
pub use output::RecordWriter;
pub use statistics::{print_error_statistics, print_simple_summary};
