//! Hash commitments used by the session binding checks.

use std::str::FromStr;

use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::error::ConfigError;

/// Hash algorithms a presentment protocol version may name.
///
/// The set is closed: the protocol version fixes the algorithm, so an
/// unknown identifier is a configuration error and never reaches `digest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

impl DigestAlgorithm {
    pub fn output_len(self) -> usize {
        match self {
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha384 => 48,
            DigestAlgorithm::Sha512 => 64,
        }
    }

    pub fn identifier(self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "SHA-256",
            DigestAlgorithm::Sha384 => "SHA-384",
            DigestAlgorithm::Sha512 => "SHA-512",
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SHA-256" => Ok(DigestAlgorithm::Sha256),
            "SHA-384" => Ok(DigestAlgorithm::Sha384),
            "SHA-512" => Ok(DigestAlgorithm::Sha512),
            other => Err(ConfigError::UnsupportedDigest(other.to_string())),
        }
    }
}

/// Hash `data` with `algorithm`. Pure and deterministic.
pub fn digest(data: &[u8], algorithm: DigestAlgorithm) -> Vec<u8> {
    match algorithm {
        DigestAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        DigestAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
        DigestAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
    }
}

/// SHA-256 as a fixed-size array, the algorithm of the Apple handover.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_digest_matches_fixed_helper() {
        let data = b"session transcript bytes";
        assert_eq!(digest(data, DigestAlgorithm::Sha256), sha256(data).to_vec());
    }

    #[test]
    fn test_output_lengths() {
        for alg in [
            DigestAlgorithm::Sha256,
            DigestAlgorithm::Sha384,
            DigestAlgorithm::Sha512,
        ] {
            assert_eq!(digest(b"x", alg).len(), alg.output_len(), "{}", alg);
        }
    }

    #[test]
    fn test_identifier_round_trip() {
        for id in ["SHA-256", "SHA-384", "SHA-512"] {
            let alg: DigestAlgorithm = id.parse().expect("known identifier");
            assert_eq!(alg.to_string(), id);
        }
    }

    #[test]
    fn test_unknown_identifier_rejected() {
        let err = "MD5".parse::<DigestAlgorithm>().unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedDigest("MD5".to_string()));
    }
}
