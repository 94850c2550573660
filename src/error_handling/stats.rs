//! Processing statistics tracking.
//!
//! This module provides thread-safe counters for record outcomes while a
//! stream of IRIs is filtered.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType, WarningType};

/// Thread-safe processing statistics tracker.
///
/// Every outcome type is initialized to zero on creation, so counters can be
/// bumped through a shared reference.
///
/// # Categories
///
/// - **Errors**: records that were rejected
/// - **Warnings**: records accepted despite a problem
/// - **Info**: plain throughput metrics
pub struct ProcessingStats {
    errors: HashMap<ErrorType, AtomicUsize>,
    warnings: HashMap<WarningType, AtomicUsize>,
    info: HashMap<InfoType, AtomicUsize>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        ProcessingStats {
            errors: ErrorType::iter().map(|e| (e, AtomicUsize::new(0))).collect(),
            warnings: WarningType::iter()
                .map(|w| (w, AtomicUsize::new(0)))
                .collect(),
            info: InfoType::iter().map(|i| (i, AtomicUsize::new(0))).collect(),
        }
    }

    /// Increment an error counter.
    pub fn increment_error(&self, error: ErrorType) {
        bump(&self.errors, &error);
    }

    /// Increment a warning counter.
    pub fn increment_warning(&self, warning: WarningType) {
        bump(&self.warnings, &warning);
    }

    /// Increment an info counter.
    pub fn increment_info(&self, info_type: InfoType) {
        bump(&self.info, &info_type);
    }

    pub fn get_error_count(&self, error: ErrorType) -> usize {
        load(&self.errors, &error)
    }

    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        load(&self.warnings, &warning)
    }

    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        load(&self.info, &info_type)
    }

    /// Get total error count across all error types.
    pub fn total_errors(&self) -> usize {
        ErrorType::iter().map(|e| self.get_error_count(e)).sum()
    }

    /// Get total warning count across all warning types.
    pub fn total_warnings(&self) -> usize {
        WarningType::iter().map(|w| self.get_warning_count(w)).sum()
    }

    /// Get total info count across all info types.
    pub fn total_info(&self) -> usize {
        InfoType::iter().map(|i| self.get_info_count(i)).sum()
    }
}

fn bump<K: std::hash::Hash + Eq + std::fmt::Debug>(map: &HashMap<K, AtomicUsize>, key: &K) {
    match map.get(key) {
        Some(counter) => {
            counter.fetch_add(1, Ordering::Relaxed);
        }
        None => log::error!(
            "Attempted to increment counter for {:?} which is not in the map. \
             This indicates a bug in ProcessingStats initialization.",
            key
        ),
    }
}

fn load<K: std::hash::Hash + Eq>(map: &HashMap<K, AtomicUsize>, key: &K) -> usize {
    map.get(key).map(|c| c.load(Ordering::SeqCst)).unwrap_or(0)
}
