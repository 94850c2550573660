//! Domain classification against the Public Suffix List.
//!
//! This module splits a hostname into its public suffix, registrable domain
//! and second-level label. The lookup sits behind the [`SuffixLookup`] trait
//! so callers can classify against a fixture table instead of the embedded
//! list.
//!
//! Key items:
//! - [`PublicSuffixList`] - lookup backed by the `psl` crate's embedded list
//! - [`DomainParts`] - result of a successful lookup

use std::net::IpAddr;

use psl::{List, Psl};
use serde::Serialize;

/// Classification of a registrable hostname.
///
/// For `www.example.co.uk` this is `suffix = "co.uk"`,
/// `registrable = "example.co.uk"` and `second_level = "example"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DomainParts {
    /// Public suffix (e.g. "co.uk", "com")
    pub suffix: String,
    /// Registrable domain (e.g. "example.co.uk")
    pub registrable: String,
    /// Label immediately left of the suffix (e.g. "example")
    pub second_level: String,
}

impl DomainParts {
    /// Builds parts from a registrable domain and its suffix.
    ///
    /// Returns `None` unless `registrable` is exactly one label followed by
    /// `.suffix`.
    pub fn from_registrable(registrable: &str, suffix: &str) -> Option<Self> {
        let second_level = registrable.strip_suffix(suffix)?.strip_suffix('.')?;
        if second_level.is_empty() || second_level.contains('.') {
            return None;
        }
        Some(DomainParts {
            suffix: suffix.to_string(),
            registrable: registrable.to_string(),
            second_level: second_level.to_string(),
        })
    }
}

/// A public suffix table.
///
/// `lookup` returns `None` when `host` is not a registrable name under a
/// known suffix. Implementations must not panic on arbitrary input.
pub trait SuffixLookup: Send + Sync {
    fn lookup(&self, host: &str) -> Option<DomainParts>;
}

/// The Public Suffix List compiled into the `psl` crate.
///
/// Both ICANN and private sections are honoured, so `foo.github.io` has
/// registrable domain `foo.github.io`. Hosts whose rightmost label is not on
/// the list (e.g. `intranet.local`) are not classified.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicSuffixList;

impl SuffixLookup for PublicSuffixList {
    fn lookup(&self, host: &str) -> Option<DomainParts> {
        let host = normalize_host(host)?;

        let domain = List.domain(host.as_bytes())?;
        let suffix = domain.suffix();
        if !suffix.is_known() {
            log::trace!("No known public suffix for host {host}");
            return None;
        }

        let registrable = std::str::from_utf8(domain.as_bytes()).ok()?;
        let suffix = std::str::from_utf8(suffix.as_bytes()).ok()?;
        DomainParts::from_registrable(registrable, suffix)
    }
}

/// Lowercases `host` and strips the root dot.
///
/// Returns `None` for empty hosts and IP literals, which have no registrable
/// domain.
fn normalize_host(host: &str) -> Option<String> {
    let host = host.trim().trim_end_matches('.');
    if host.is_empty() || host.parse::<IpAddr>().is_ok() {
        return None;
    }
    Some(host.to_lowercase())
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
