//! Per-session nonce handling.
//!
//! The verifier generates the nonce, sends it to the device with its public
//! key, and must hand the identical bytes back to `open_presentment`. Nothing
//! here is cached: each session owns its nonce.

use rand::RngCore;

use crate::error::ConfigError;

/// Length of nonces generated by [`SessionNonce::generate`].
pub const NONCE_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionNonce(Vec<u8>);

impl SessionNonce {
    /// Fresh nonce from the OS CSPRNG.
    pub fn generate() -> Self {
        let mut bytes = vec![0u8; NONCE_LEN];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        SessionNonce(bytes)
    }

    /// Wrap nonce bytes received from elsewhere (a session store, a test vector).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.is_empty() {
            return Err(ConfigError::InvalidNonce("nonce is empty".to_string()));
        }
        Ok(SessionNonce(bytes.to_vec()))
    }

    pub fn from_hex(s: &str) -> Result<Self, ConfigError> {
        let bytes = hex::decode(s.trim()).map_err(|e| ConfigError::InvalidNonce(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}
