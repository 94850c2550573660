//! Flat serializable view of an `IriRecord`.

use serde::Serialize;

use super::record::IriRecord;

/// One JSON output row.
///
/// Derived fields are forced when the summary is built, so building a
/// summary also warms the record's caches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IriSummary {
    pub iri: String,
    pub scheme: String,
    pub authority: String,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
    pub query: String,
    pub fragment: String,
    pub domain_tld: Option<String>,
    pub domain_sld: Option<String>,
    pub domain_psl: Option<String>,
    pub digest: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
}

impl From<&IriRecord> for IriSummary {
    fn from(record: &IriRecord) -> Self {
        IriSummary {
            iri: record.to_string(),
            scheme: record.scheme().to_string(),
            authority: record.authority().to_string(),
            host: record.host().map(str::to_string),
            port: record.port(),
            username: record.username().map(str::to_string),
            password: record.password().map(str::to_string),
            path: record.path().to_string(),
            params: record.params().map(str::to_string),
            query: record.query().to_string(),
            fragment: record.fragment().to_string(),
            domain_tld: record.domain_tld().map(str::to_string),
            domain_sld: record.domain_sld().map(str::to_string),
            domain_psl: record.domain_psl().map(str::to_string),
            digest: record.content_digest().to_hex(),
            link_text: record.link_text().map(str::to_string),
        }
    }
}
