//! iritool library: IRI/URL decomposition, normalization, and domain classification
//!
//! This library parses IRIs into their components, derives a normalized
//! (fragment-free) form, classifies hosts against the Public Suffix List, and
//! computes a content digest of the normalized form. A small filtering loop
//! drives the `iritool` binary.
//!
//! # Example
//!
//! ```
//! use iritool::{IriRecord, IriView, ParseOptions};
//!
//! let iri = IriRecord::parse("https://www.example.co.uk/a?b=1#top", ParseOptions::default())?;
//! assert_eq!(iri.as_str(), "https://www.example.co.uk/a?b=1");
//! assert_eq!(iri.host(), Some("www.example.co.uk"));
//! assert_eq!(iri.domain_psl(), Some("example.co.uk"));
//! assert!(iri.starts_with("https://"));
//! # Ok::<(), iritool::IriError>(())
//! ```

pub mod app;
pub mod config;
pub mod digest;
pub mod domain;
pub mod error_handling;
pub mod initialization;
pub mod iri;
mod run;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat, Terminator};
pub use digest::{Digest, DigestAlgorithm};
pub use domain::{DomainParts, PublicSuffixList, SuffixLookup};
pub use error_handling::{IriError, ProcessingStats};
pub use iri::{IriRecord, IriSummary, IriView, ParseOptions, ParseProfile};
pub use run::{is_broken_pipe, run_filter, FilterReport};
