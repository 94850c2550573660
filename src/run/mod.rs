//! Record filtering loop.

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};

use crate::app::statistics::print_error_statistics;
use crate::app::{log_progress, print_simple_summary, RecordWriter};
use crate::config::{Config, OutputFormat, LOGGING_INTERVAL};
use crate::error_handling::{InfoType, ProcessingStats, WarningType};
use crate::iri::IriRecord;

/// Results of a filter run.
#[derive(Debug, Clone, Default)]
pub struct FilterReport {
    /// Records read (blank records are never counted)
    pub total: usize,
    /// Records written to the output
    pub emitted: usize,
    /// Records dropped by `--internal-to`
    pub filtered: usize,
    /// Records skipped after a parse error (only with `--keep-going`)
    pub failed: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Parses every record and writes the accepted ones to `writer`.
///
/// Records are parsed with the profile and options derived from `config`.
/// With `internal_to` set, only records sharing the root's registrable
/// domain are written.
///
/// # Errors
///
/// Returns an error if:
/// - the `internal_to` root does not parse or has no registrable domain
/// - reading a record or writing output fails
/// - a record fails to parse and `keep_going` is off
///
/// I/O errors stay in the error chain so callers can recognize a closed pipe.
pub fn run_filter<I, W>(
    config: &Config,
    records: I,
    writer: &mut RecordWriter<W>,
) -> Result<FilterReport>
where
    I: IntoIterator<Item = io::Result<Vec<u8>>>,
    W: Write,
{
    let start_time = Instant::now();
    let profile = config.profile();
    let options = config.parse_options();

    let root = match &config.internal_to {
        Some(raw) => {
            let root = IriRecord::parse_with(raw, profile, options.clone())
                .with_context(|| format!("Failed to parse --internal-to root {raw:?}"))?;
            match root.domain_psl() {
                Some(domain) => info!("Keeping records internal to {}", domain),
                None => bail!("--internal-to root {raw:?} has no registrable domain"),
            }
            Some(root)
        }
        None => None,
    };
    let classify_hosts = root.is_some() || config.format == OutputFormat::Json;

    let stats = ProcessingStats::new();
    let mut report = FilterReport::default();

    for record in records {
        let bytes = record.context("Failed to read input record")?;
        let index = report.total;
        report.total += 1;
        if progress_due(report.total) {
            log_progress(start_time, report.total);
        }

        let iri = match IriRecord::from_bytes(&bytes, profile, options.clone()) {
            Ok(iri) => iri,
            Err(e) => {
                stats.increment_error(e.error_type());
                if config.keep_going {
                    warn!("Skipping record {}: {}", index, e);
                    report.failed += 1;
                    continue;
                }
                return Err(e).with_context(|| format!("Failed to parse record {index}"));
            }
        };
        stats.increment_info(InfoType::Parsed);
        debug!("{}: {}", index, iri);

        if iri.scheme().is_empty() {
            stats.increment_warning(WarningType::MissingSchemeTolerated);
        }
        if iri.raw().contains('#') {
            stats.increment_info(InfoType::Fragment);
        }
        if classify_hosts && iri.host().is_some() && iri.domain_psl().is_none() {
            stats.increment_warning(WarningType::UnclassifiedHost);
        }

        if let Some(root) = &root {
            if !iri.is_internal(root) {
                stats.increment_info(InfoType::NotInternal);
                report.filtered += 1;
                continue;
            }
        }

        writer.write_record(&iri)?;
        stats.increment_info(InfoType::Emitted);
        report.emitted += 1;
    }

    writer.flush()?;

    report.elapsed_seconds = start_time.elapsed().as_secs_f64();
    print_error_statistics(&stats);
    print_simple_summary(&report);
    Ok(report)
}

/// Progress is logged every `LOGGING_INTERVAL` records read, whatever
/// happens to the record.
fn progress_due(total: usize) -> bool {
    total > 0 && total % LOGGING_INTERVAL == 0
}

/// Whether `error` was caused by writing to a closed pipe.
pub fn is_broken_pipe(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io| io.kind() == io::ErrorKind::BrokenPipe)
    })
}
