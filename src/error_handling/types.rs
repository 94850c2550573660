//! Error type definitions.
//!
//! This module defines the parser's error enum and the outcome types counted
//! while filtering a stream of records.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors raised while turning one input record into an `IriRecord`.
///
/// Both variants concern a single record. Stream processing decides whether
/// to skip the record or abort.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IriError {
    /// The record is not text (e.g. bytes that are not valid UTF-8).
    ///
    /// Carries a lossy rendering of the offending input.
    #[error("IRI input must be text, got undecodable bytes: {0:?}")]
    InvalidInputType(String),

    /// No scheme was found and the caller did not allow that.
    ///
    /// Carries the raw input as given.
    #[error("IRI is missing a scheme: {0:?}")]
    MissingScheme(String),
}

impl IriError {
    /// The outcome counter this error is tallied under.
    pub fn error_type(&self) -> ErrorType {
        match self {
            IriError::InvalidInputType(_) => ErrorType::InvalidInputType,
            IriError::MissingScheme(_) => ErrorType::MissingScheme,
        }
    }
}

/// Types of errors that reject an input record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    InvalidInputType,
    MissingScheme,
}

/// Types of warnings about records that were still accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    MissingSchemeTolerated, // Scheme was empty but the policy allowed it
    UnclassifiedHost,       // Host present but not under a known public suffix
}

/// Types of informational metrics about the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    Parsed,      // Record parsed successfully
    Emitted,     // Record written to the output
    NotInternal, // Dropped by the internal-domain filter
    Fragment,    // Input carried a #fragment that was stripped
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidInputType => "Invalid input type",
            ErrorType::MissingScheme => "Missing scheme",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingSchemeTolerated => "Missing scheme (tolerated)",
            WarningType::UnclassifiedHost => "Host without registrable domain",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::Parsed => "Parsed",
            InfoType::Emitted => "Emitted",
            InfoType::NotInternal => "Not internal to root",
            InfoType::Fragment => "Fragment stripped",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_iri_error_display() {
        assert_eq!(
            IriError::MissingScheme("//example.com/x".to_string()).to_string(),
            "IRI is missing a scheme: \"//example.com/x\""
        );
        assert!(IriError::InvalidInputType("ab\u{fffd}".to_string())
            .to_string()
            .starts_with("IRI input must be text"));
    }

    #[test]
    fn test_iri_error_maps_to_error_type() {
        assert_eq!(
            IriError::MissingScheme(String::new()).error_type(),
            ErrorType::MissingScheme
        );
        assert_eq!(
            IriError::InvalidInputType(String::new()).error_type(),
            ErrorType::InvalidInputType
        );
    }

    #[test]
    fn test_all_error_types_have_string_representation() {
        for error_type in ErrorType::iter() {
            assert!(
                !error_type.as_str().is_empty(),
                "{:?} should have non-empty string",
                error_type
            );
        }
    }

    #[test]
    fn test_all_warning_types_have_string_representation() {
        for warning_type in WarningType::iter() {
            assert!(
                !warning_type.as_str().is_empty(),
                "{:?} should have non-empty string",
                warning_type
            );
        }
    }

    #[test]
    fn test_all_info_types_have_string_representation() {
        for info_type in InfoType::iter() {
            assert!(
                !info_type.as_str().is_empty(),
                "{:?} should have non-empty string",
                info_type
            );
        }
    }
}
