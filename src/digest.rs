//! Content digests of normalized IRIs.

use std::fmt;

use serde::{Serialize, Serializer};
use sha3::{Digest as _, Sha3_256};
use strum_macros::{Display, EnumIter, EnumString};

/// Supported digest algorithms.
///
/// The lowercase name (`sha3_256`) is what gets stored next to a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
pub enum DigestAlgorithm {
    #[default]
    #[strum(serialize = "sha3_256")]
    Sha3_256,
}

impl DigestAlgorithm {
    /// Digest length in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            DigestAlgorithm::Sha3_256 => 32,
        }
    }
}

/// A computed digest together with the algorithm that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    algorithm: DigestAlgorithm,
    bytes: Vec<u8>,
}

impl Digest {
    /// Hashes `preimage` with `algorithm`.
    pub fn compute(algorithm: DigestAlgorithm, preimage: &[u8]) -> Self {
        let bytes = match algorithm {
            DigestAlgorithm::Sha3_256 => Sha3_256::digest(preimage).to_vec(),
        };
        Digest { algorithm, bytes }
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Lowercase hex encoding of the digest bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_sha3_256_empty_input() {
        let digest = Digest::compute(DigestAlgorithm::Sha3_256, b"");
        assert_eq!(
            digest.to_hex(),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }

    #[test]
    fn test_sha3_256_abc() {
        let digest = Digest::compute(DigestAlgorithm::Sha3_256, b"abc");
        assert_eq!(
            digest.to_hex(),
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
        );
    }

    #[test]
    fn test_output_len_matches() {
        for algorithm in DigestAlgorithm::iter() {
            let digest = Digest::compute(algorithm, b"https://example.com");
            assert_eq!(digest.as_bytes().len(), algorithm.output_len());
            assert_eq!(digest.to_hex().len(), algorithm.output_len() * 2);
        }
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(DigestAlgorithm::Sha3_256.to_string(), "sha3_256");
        assert_eq!(
            DigestAlgorithm::from_str("sha3_256").unwrap(),
            DigestAlgorithm::Sha3_256
        );
        assert!(DigestAlgorithm::from_str("md5").is_err());
    }

    #[test]
    fn test_hex_round_trips_to_bytes() {
        let digest = Digest::compute(DigestAlgorithm::Sha3_256, b"https://example.com/a");
        assert_eq!(hex::decode(digest.to_hex()).unwrap(), digest.as_bytes());
        assert_eq!(digest.to_string(), digest.to_hex());
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let digest = Digest::compute(DigestAlgorithm::Sha3_256, b"abc");
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{}\"", digest.to_hex()));
    }
}
