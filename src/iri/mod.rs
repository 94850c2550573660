//! IRI decomposition and classification.
//!
//! This module turns raw IRI/URL strings into [`IriRecord`]s:
//! - `split` - generic grammar splitting of scheme, authority, path, query, fragment
//! - `record` - the record type, its two parse profiles and derived fields
//! - `view` - the [`IriView`] string-like capability set
//! - `summary` - a flat serializable view for JSON output
//!
//! The splitter never rejects input. The only parse failure is a missing
//! scheme under the full profile when the caller has not allowed it.

mod record;
mod split;
mod summary;
mod view;

// Re-export public API
pub use record::{IriRecord, ParseOptions, ParseProfile};
pub use split::{split_authority, split_components, Authority, Components};
pub use summary::IriSummary;
pub use view::IriView;
