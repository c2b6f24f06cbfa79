//! Crypto module: the HPKE open/seal capability behind the presentment envelope.
//!
//! The envelope verifier only depends on the [`HpkeOpener`] trait, so tests can
//! inject a deterministic stub. [`P256Opener`] is the production suite used by
//! Wallet identity presentment: DHKEM(P-256, HKDF-SHA256), HKDF-SHA256 and
//! AES-128-GCM in base mode. The session transcript is bound as the HPKE `info`
//! string; the AEAD associated data is empty.

use hpke::aead::AesGcm128;
use hpke::kdf::HkdfSha256;
use hpke::kem::DhP256HkdfSha256;
use hpke::{Deserializable, Kem as KemTrait, OpModeR, OpModeS, Serializable};

use crate::error::{ConfigError, OpenError};

type Kem = DhP256HkdfSha256;
type Aead = AesGcm128;
type Kdf = HkdfSha256;

/// HPKE mode selector for base mode (RFC 9180 §5.1).
pub const MODE_BASE: u8 = 0x00;

/// Length of a raw P-256 private scalar.
pub const PRIVATE_KEY_LEN: usize = 32;

/// Length of an uncompressed SEC1 P-256 public point.
pub const PUBLIC_KEY_LEN: usize = 65;

/// Decrypt capability for presentment ciphertexts.
///
/// Implementations must not reveal why opening failed: KEM and AEAD errors
/// collapse into the same [`OpenError`].
pub trait HpkeOpener {
    /// Recipient key material the implementation understands.
    type PrivateKey: ?Sized;

    fn open(
        &self,
        mode: u8,
        ciphertext: &[u8],
        sender_ephemeral_key: &[u8],
        session_transcript: &[u8],
        recipient: &Self::PrivateKey,
    ) -> Result<Vec<u8>, OpenError>;
}

/// A verifier's P-256 private key in the form the HPKE suite consumes.
#[derive(Clone)]
pub struct RecipientKey {
    inner: <Kem as KemTrait>::PrivateKey,
}

impl RecipientKey {
    /// Parse a raw 32-byte big-endian P-256 scalar.
    pub fn from_bytes(scalar: &[u8]) -> Result<Self, ConfigError> {
        let inner = <Kem as KemTrait>::PrivateKey::from_bytes(scalar)
            .map_err(|e| ConfigError::InvalidKey(e.to_string()))?;
        Ok(RecipientKey { inner })
    }

    /// Derive a key pair deterministically from input keying material (RFC 9180 DeriveKeyPair).
    pub fn derive(ikm: &[u8]) -> Self {
        let (inner, _) = Kem::derive_keypair(ikm);
        RecipientKey { inner }
    }

    /// Uncompressed SEC1 encoding of the matching public key, the bytes hashed into `pkRHash`.
    pub fn public_key_bytes(&self) -> Vec<u8> {
        Kem::sk_to_pk(&self.inner).to_bytes().to_vec()
    }
}

impl std::fmt::Debug for RecipientKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipientKey").finish_non_exhaustive()
    }
}

/// The DHKEM(P-256) / HKDF-SHA256 / AES-128-GCM suite.
#[derive(Debug, Clone, Copy, Default)]
pub struct P256Opener;

impl HpkeOpener for P256Opener {
    type PrivateKey = RecipientKey;

    fn open(
        &self,
        mode: u8,
        ciphertext: &[u8],
        sender_ephemeral_key: &[u8],
        session_transcript: &[u8],
        recipient: &RecipientKey,
    ) -> Result<Vec<u8>, OpenError> {
        if mode != MODE_BASE {
            tracing::debug!(mode, "unsupported hpke mode");
            return Err(OpenError);
        }
        let encapped = <Kem as KemTrait>::EncappedKey::from_bytes(sender_ephemeral_key)
            .map_err(|_| OpenError)?;
        hpke::single_shot_open::<Aead, Kdf, Kem>(
            &OpModeR::Base,
            &recipient.inner,
            &encapped,
            session_transcript,
            ciphertext,
            &[],
        )
        .map_err(|_| OpenError)
    }
}

/// Seal `plaintext` to a P-256 recipient the way a presenting device does.
///
/// Returns `(sender_ephemeral_key, ciphertext)`. The ephemeral key is fresh for
/// every call, so two seals of the same plaintext never produce the same bytes.
pub fn seal_p256(
    plaintext: &[u8],
    recipient_public_key: &[u8],
    session_transcript: &[u8],
) -> Result<(Vec<u8>, Vec<u8>), ConfigError> {
    let pk = <Kem as KemTrait>::PublicKey::from_bytes(recipient_public_key)
        .map_err(|e| ConfigError::InvalidKey(e.to_string()))?;
    let mut rng = rand::rngs::OsRng;
    let (encapped, ciphertext) = hpke::single_shot_seal::<Aead, Kdf, Kem, _>(
        &OpModeS::Base,
        &pk,
        session_transcript,
        plaintext,
        &[],
        &mut rng,
    )
    .map_err(|e| ConfigError::InvalidKey(e.to_string()))?;
    Ok((encapped.to_bytes().to_vec(), ciphertext))
}
