//! The parsed IRI record.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use log::{debug, log, Level};
use once_cell::sync::OnceCell;

use super::split::{split_authority, split_components};
use super::view::IriView;
use crate::digest::{Digest, DigestAlgorithm};
use crate::domain::{DomainParts, PublicSuffixList, SuffixLookup};
use crate::error_handling::IriError;

/// Which decomposition an `IriRecord` was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseProfile {
    /// Separates `;params` from the last path segment and enforces the
    /// missing-scheme policy.
    #[default]
    Full,
    /// Leaves `;params` in the path and always tolerates a missing scheme.
    Split,
}

/// Construction-time options for [`IriRecord::parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept input without a scheme instead of failing.
    pub allow_missing_scheme: bool,
    /// Annotation carried through unmodified (e.g. anchor text).
    pub link_text: Option<String>,
}

impl ParseOptions {
    pub fn allow_missing_scheme(mut self, allow: bool) -> Self {
        self.allow_missing_scheme = allow;
        self
    }

    pub fn link_text(mut self, text: impl Into<String>) -> Self {
        self.link_text = Some(text.into());
        self
    }
}

/// An IRI decomposed into its components.
///
/// Components are extracted once at construction. Domain classification and
/// the content digest are computed on first access and cached; concurrent
/// first accesses compute at most once.
///
/// Equality, hashing and `Display` all use the normalized form: the trimmed
/// input with any `#fragment` removed.
///
/// # Examples
///
/// ```
/// use iritool::{IriRecord, ParseOptions};
///
/// let iri = IriRecord::parse("http://www.example.co.uk/path?q=1#frag", ParseOptions::default())?;
/// assert_eq!(iri.to_string(), "http://www.example.co.uk/path?q=1");
/// assert_eq!(iri.host(), Some("www.example.co.uk"));
/// assert_eq!(iri.domain_tld(), Some("co.uk"));
/// assert_eq!(iri.domain_psl(), Some("example.co.uk"));
/// # Ok::<(), iritool::IriError>(())
/// ```
#[derive(Debug, Clone)]
pub struct IriRecord {
    raw: String,
    normalized: String,
    profile: ParseProfile,
    scheme: String,
    authority: String,
    host: Option<String>,
    port: Option<u16>,
    username: Option<String>,
    password: Option<String>,
    path: String,
    params: Option<String>,
    query: String,
    fragment: String,
    link_text: Option<String>,
    allow_missing_scheme: bool,
    domain: OnceCell<Option<DomainParts>>,
    digest: OnceCell<Digest>,
}

impl IriRecord {
    /// Parses `raw` with the full profile.
    ///
    /// # Errors
    ///
    /// Returns `IriError::MissingScheme` when no scheme is present and
    /// `options.allow_missing_scheme` is false. A malformed port is not an
    /// error; it leaves `port()` empty.
    pub fn parse(raw: &str, options: ParseOptions) -> Result<Self, IriError> {
        let record = Self::decompose(
            raw,
            ParseProfile::Full,
            options.link_text,
            options.allow_missing_scheme,
        );
        if record.scheme.is_empty() {
            log!(
                missing_scheme_level(record.allow_missing_scheme),
                "missing_scheme len={} raw={:?} allowed={}",
                raw.len(),
                raw,
                record.allow_missing_scheme
            );
            if !record.allow_missing_scheme {
                return Err(IriError::MissingScheme(raw.to_string()));
            }
        }
        Ok(record)
    }

    /// Parses `raw` with the split profile.
    ///
    /// `;params` stay in the path and a missing scheme is always accepted,
    /// so this cannot fail.
    pub fn parse_split(raw: &str, link_text: Option<String>) -> Self {
        let record = Self::decompose(raw, ParseProfile::Split, link_text, true);
        if record.scheme.is_empty() {
            debug!("missing_scheme len={} raw={:?} allowed=true", raw.len(), raw);
        }
        record
    }

    /// Parses `raw` with the given profile.
    ///
    /// `options.allow_missing_scheme` is ignored by the split profile.
    pub fn parse_with(
        raw: &str,
        profile: ParseProfile,
        options: ParseOptions,
    ) -> Result<Self, IriError> {
        match profile {
            ParseProfile::Full => Self::parse(raw, options),
            ParseProfile::Split => Ok(Self::parse_split(raw, options.link_text)),
        }
    }

    /// Parses a record that arrived as bytes.
    ///
    /// # Errors
    ///
    /// Returns `IriError::InvalidInputType` if `bytes` is not UTF-8, plus
    /// anything [`IriRecord::parse_with`] returns.
    pub fn from_bytes(
        bytes: &[u8],
        profile: ParseProfile,
        options: ParseOptions,
    ) -> Result<Self, IriError> {
        let raw = std::str::from_utf8(bytes)
            .map_err(|_| IriError::InvalidInputType(String::from_utf8_lossy(bytes).into_owned()))?;
        Self::parse_with(raw, profile, options)
    }

    fn decompose(
        raw: &str,
        profile: ParseProfile,
        link_text: Option<String>,
        allow_missing_scheme: bool,
    ) -> Self {
        let trimmed = raw.trim();
        let normalized = match trimmed.split_once('#') {
            Some((before, _)) => before.trim_end(),
            None => trimmed,
        };

        let components = split_components(trimmed, profile == ParseProfile::Full);
        let authority = split_authority(&components.authority);

        IriRecord {
            raw: trimmed.to_string(),
            normalized: normalized.to_string(),
            profile,
            scheme: components.scheme,
            authority: components.authority,
            host: authority.host,
            port: authority.port,
            username: authority.username,
            password: authority.password,
            path: components.path,
            params: components.params,
            query: components.query,
            fragment: components.fragment,
            link_text,
            allow_missing_scheme,
            domain: OnceCell::new(),
            digest: OnceCell::new(),
        }
    }

    /// The input with surrounding whitespace removed, fragment included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    pub fn profile(&self) -> ParseProfile {
        self.profile
    }

    /// Lowercase scheme, empty when the input had none.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Full `user:pass@host:port` substring, empty when absent.
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Lowercased hostname without brackets or port.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// `;params` of the last path segment. Always `None` for the split profile.
    pub fn params(&self) -> Option<&str> {
        self.params.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Fragment of the raw input. Never part of the normalized form.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn link_text(&self) -> Option<&str> {
        self.link_text.as_deref()
    }

    pub fn allow_missing_scheme(&self) -> bool {
        self.allow_missing_scheme
    }

    /// Public-suffix classification of `host`, cached after the first call.
    pub fn domain_parts(&self) -> Option<&DomainParts> {
        self.domain
            .get_or_init(|| self.domain_parts_with(&PublicSuffixList))
            .as_ref()
    }

    /// Classifies `host` against `lookup` without touching the cache.
    pub fn domain_parts_with(&self, lookup: &dyn SuffixLookup) -> Option<DomainParts> {
        self.host.as_deref().and_then(|host| lookup.lookup(host))
    }

    /// Public suffix of the host (e.g. "co.uk").
    pub fn domain_tld(&self) -> Option<&str> {
        self.domain_parts().map(|d| d.suffix.as_str())
    }

    /// Label immediately left of the public suffix (e.g. "example").
    pub fn domain_sld(&self) -> Option<&str> {
        self.domain_parts().map(|d| d.second_level.as_str())
    }

    /// Registrable domain of the host (e.g. "example.co.uk").
    pub fn domain_psl(&self) -> Option<&str> {
        self.domain_parts().map(|d| d.registrable.as_str())
    }

    /// SHA3-256 of the normalized IRI, cached after the first call.
    pub fn content_digest(&self) -> &Digest {
        self.digest.get_or_init(|| {
            Digest::compute(DigestAlgorithm::Sha3_256, self.normalized.as_bytes())
        })
    }

    /// Whether both records share a registrable domain.
    ///
    /// False when either side has no registrable domain.
    pub fn is_internal(&self, other: &IriRecord) -> bool {
        match (self.domain_psl(), other.domain_psl()) {
            (Some(ours), Some(theirs)) => ours == theirs,
            _ => false,
        }
    }
}

/// A tolerated missing scheme is routine; a rejected one is worth a warning.
pub(super) fn missing_scheme_level(allowed: bool) -> Level {
    if allowed {
        Level::Debug
    } else {
        Level::Warn
    }
}

impl IriView for IriRecord {
    fn as_str(&self) -> &str {
        &self.normalized
    }
}

impl AsRef<str> for IriRecord {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl fmt::Display for IriRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl PartialEq for IriRecord {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for IriRecord {}

impl Hash for IriRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

/// Parses with the full profile and default options (scheme required).
impl FromStr for IriRecord {
    type Err = IriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IriRecord::parse(s, ParseOptions::default())
    }
}
