use thiserror::Error;

/// Text shown to a device or end user for any rejected presentment.
///
/// Every failure maps to the same message so a caller cannot learn which
/// admission check tripped.
pub const REJECTED_MESSAGE: &str = "presentment rejected";

/// Which pre-decryption hash commitment failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingCheck {
    /// `params.infoHash` did not match the digest of the rebuilt session transcript.
    InfoHash,
    /// `params.pkRHash` did not match the digest of the verifier public key.
    RecipientKey,
}

impl std::fmt::Display for BindingCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindingCheck::InfoHash => f.write_str("infoHash mismatch"),
            BindingCheck::RecipientKey => f.write_str("recipient key mismatch"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PresentmentError {
    #[error("Malformed {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_cbor::Error,
    },

    #[error("Session binding failed: {0}")]
    Binding(BindingCheck),

    #[error("Decryption failed")]
    Decrypt,

    #[error("Failed to construct session transcript: {0}")]
    Construction(String),
}

impl PresentmentError {
    pub fn is_binding_failure(&self) -> bool {
        matches!(self, PresentmentError::Binding(_))
    }

    pub fn is_decrypt_failure(&self) -> bool {
        matches!(self, PresentmentError::Decrypt)
    }

    /// The message to surface outside the verifier. Identical for every variant.
    pub fn user_message(&self) -> &'static str {
        REJECTED_MESSAGE
    }
}

/// The HPKE primitive refused to open a ciphertext.
///
/// Deliberately opaque: KEM decapsulation failures and AEAD tag failures are
/// indistinguishable to callers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("HPKE open failed")]
pub struct OpenError;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Merchant identifier must not be empty")]
    EmptyMerchantId,

    #[error("Team identifier must not be empty")]
    EmptyTeamId,

    #[error("Unsupported digest algorithm '{0}'")]
    UnsupportedDigest(String),

    #[error("Invalid session nonce: {0}")]
    InvalidNonce(String),

    #[error("Invalid key material: {0}")]
    InvalidKey(String),
}
