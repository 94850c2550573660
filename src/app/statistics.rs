//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats, WarningType};
use crate::run::FilterReport;

/// Prints a one-line summary of the run.
pub fn print_simple_summary(report: &FilterReport) {
    info!(
        "Processed {} record{} ({} emitted, {} filtered, {} failed) in {:.3}s",
        report.total,
        if report.total == 1 { "" } else { "s" },
        report.emitted,
        report.filtered,
        report.failed,
        report.elapsed_seconds
    );
}

/// Prints error, warning, and info statistics to the log.
pub fn print_error_statistics(stats: &ProcessingStats) {
    let total_errors = stats.total_errors();
    let total_warnings = stats.total_warnings();
    let total_info = stats.total_info();

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_warnings > 0 {
        info!("Warning Counts ({} total):", total_warnings);
        for warning_type in WarningType::iter() {
            let count = stats.get_warning_count(warning_type);
            if count > 0 {
                info!("   {}: {}", warning_type.as_str(), count);
            }
        }
    }

    if total_info > 0 {
        info!("Info Counts ({} total):", total_info);
        for info_type in InfoType::iter() {
            let count = stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type.as_str(), count);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_statistics_no_errors() {
        let stats = ProcessingStats::new();
        print_error_statistics(&stats);
    }

    #[test]
    fn test_print_error_statistics_all_types() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::MissingScheme);
        stats.increment_warning(WarningType::MissingSchemeTolerated);
        stats.increment_info(InfoType::Parsed);
        print_error_statistics(&stats);
    }

    #[test]
    fn test_print_simple_summary() {
        let report = FilterReport {
            total: 1,
            emitted: 1,
            ..Default::default()
        };
        print_simple_summary(&report);
    }
}
