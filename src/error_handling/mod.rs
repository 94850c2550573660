//! Error handling and processing statistics.
//!
//! This module provides:
//! - `IriError`, the per-record parse failure
//! - Initialization errors for the binary
//! - Outcome counters (errors, warnings, info metrics) for a filter run
//!
//! Outcome types are categorized into:
//! - **Errors**: records rejected by the parser
//! - **Warnings**: records accepted with a caveat (e.g. tolerated missing scheme)
//! - **Info**: throughput metrics (parsed, emitted, filtered)

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{ErrorType, InfoType, InitializationError, IriError, WarningType};
