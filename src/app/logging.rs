//! Progress logging utilities.

use log::info;
use std::time::Instant;

/// Logs how many records have been read and the rate so far.
pub fn log_progress(start_time: Instant, records: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        records as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {} records in {:.2} seconds (~{:.0} records/sec)",
        records, elapsed_secs, rate
    );
}
