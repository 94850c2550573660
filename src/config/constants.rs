//! Configuration constants.
//!
//! Defaults shared by the CLI and the library entry point.

/// Record separator written after each output record on a terminal.
pub const NEWLINE: u8 = b'\n';

/// Record separator written after each output record when piped.
pub const NUL: u8 = b'\0';

/// Capacity of the buffered stdin reader and stdout writer.
pub const IO_BUFFER_SIZE: usize = 64 * 1024;

/// Log a progress line every this many input records.
pub const LOGGING_INTERVAL: usize = 10_000;
