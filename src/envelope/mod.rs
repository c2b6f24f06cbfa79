//! Envelope module: decoding, binding verification and opening of a Wallet
//! identity presentment.
//!
//! The device sends a CBOR map:
//!
//! ```text
//! {
//!   "algorithm": tstr,
//!   "params": { "mode": uint, "pkEm": bstr, "pkRHash": bstr, "infoHash": bstr },
//!   "data": bstr
//! }
//! ```
//!
//! `pkRHash` commits to the verifier public key and `infoHash` to the session
//! transcript. Both are checked before the ciphertext is touched; a mismatch
//! never reaches the HPKE primitive.

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::claims::{DeviceResponse, PresentmentPayload};
use crate::config::RelyingParty;
use crate::crypto::{seal_p256, HpkeOpener, MODE_BASE};
use crate::digest::sha256;
use crate::error::{BindingCheck, PresentmentError};
use crate::transcript::build_transcript;

/// Algorithm identifier written into envelopes sealed by this crate.
pub const HPKE_ALGORITHM: &str = "HPKE-v1";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub algorithm: String,
    pub params: EnvelopeParams,
    /// HPKE ciphertext including the AEAD tag.
    #[serde(with = "serde_bytes")]
    pub data: Vec<u8>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeParams {
    pub mode: u8,
    #[serde(rename = "pkEm", with = "serde_bytes")]
    pub ephemeral_public_key: Vec<u8>,
    #[serde(rename = "pkRHash", with = "serde_bytes")]
    pub recipient_key_hash: Vec<u8>,
    #[serde(rename = "infoHash", with = "serde_bytes")]
    pub info_hash: Vec<u8>,
}

impl Envelope {
    pub fn from_cbor(bytes: &[u8]) -> Result<Self, PresentmentError> {
        serde_cbor::from_slice(bytes).map_err(|source| PresentmentError::Decode {
            what: "presentment envelope",
            source,
        })
    }

    pub fn to_cbor(&self) -> Result<Vec<u8>, PresentmentError> {
        serde_cbor::to_vec(self).map_err(|e| PresentmentError::Construction(e.to_string()))
    }
}

/// A successfully opened presentment.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentment {
    pub response: DeviceResponse,
    /// The session transcript the ciphertext was bound to, for audit logs or
    /// further protocol binding.
    pub transcript: Vec<u8>,
}

/// Verify and decrypt a presentment envelope for `relying_party`.
///
/// `public_key` is the uncompressed SEC1 encoding of the verifier key whose
/// private half is `private_key`; `nonce` is the exact nonce this verifier
/// issued for the session.
pub fn open_presentment<O: HpkeOpener>(
    envelope_bytes: &[u8],
    relying_party: &RelyingParty,
    opener: &O,
    private_key: &O::PrivateKey,
    public_key: &[u8],
    nonce: &[u8],
) -> Result<Presentment, PresentmentError> {
    let (response, transcript) = parse(
        envelope_bytes,
        relying_party.merchant_id(),
        relying_party.team_id(),
        opener,
        private_key,
        public_key,
        nonce,
    )?;
    Ok(Presentment {
        response,
        transcript,
    })
}

/// Flat form of [`open_presentment`]: returns the device response and the
/// session transcript.
pub fn parse<O: HpkeOpener>(
    envelope_bytes: &[u8],
    merchant_id: &str,
    team_id: &str,
    opener: &O,
    private_key: &O::PrivateKey,
    public_key: &[u8],
    nonce: &[u8],
) -> Result<(DeviceResponse, Vec<u8>), PresentmentError> {
    let envelope = Envelope::from_cbor(envelope_bytes)?;
    tracing::debug!(
        algorithm = %envelope.algorithm,
        mode = envelope.params.mode,
        ciphertext_len = envelope.data.len(),
        "decoded presentment envelope"
    );

    let key_digest = sha256(public_key);
    let transcript = build_transcript(merchant_id, team_id, nonce, &key_digest)?;

    // Cheapest commitments first; the ciphertext is untouched until both hold.
    if !commitment_matches(&sha256(&transcript), &envelope.params.info_hash) {
        return Err(binding_failure(BindingCheck::InfoHash));
    }
    if !commitment_matches(&key_digest, &envelope.params.recipient_key_hash) {
        return Err(binding_failure(BindingCheck::RecipientKey));
    }

    let plaintext = Zeroizing::new(
        opener
            .open(
                envelope.params.mode,
                &envelope.data,
                &envelope.params.ephemeral_public_key,
                &transcript,
                private_key,
            )
            .map_err(|_| {
                tracing::warn!("presentment ciphertext rejected by hpke open");
                PresentmentError::Decrypt
            })?,
    );

    let payload = PresentmentPayload::from_cbor(&plaintext)?;
    tracing::info!(
        version = %payload.identity.version,
        documents = payload.identity.documents.len(),
        status = payload.identity.status,
        "opened identity presentment"
    );
    Ok((payload.identity, transcript))
}

/// Seal `plaintext` into an envelope for this relying party, as a device would.
///
/// Computes `pkRHash` and `infoHash` from the same transcript the verifier
/// rebuilds, so the result opens with [`open_presentment`] given the same nonce.
pub fn seal_presentment(
    plaintext: &[u8],
    relying_party: &RelyingParty,
    public_key: &[u8],
    nonce: &[u8],
) -> Result<Envelope, PresentmentError> {
    let key_digest = sha256(public_key);
    let transcript = build_transcript(
        relying_party.merchant_id(),
        relying_party.team_id(),
        nonce,
        &key_digest,
    )?;
    let (ephemeral_public_key, data) = seal_p256(plaintext, public_key, &transcript)
        .map_err(|e| PresentmentError::Construction(e.to_string()))?;
    Ok(Envelope {
        algorithm: HPKE_ALGORITHM.to_string(),
        params: EnvelopeParams {
            mode: MODE_BASE,
            ephemeral_public_key,
            recipient_key_hash: key_digest.to_vec(),
            info_hash: sha256(&transcript).to_vec(),
        },
        data,
    })
}

fn commitment_matches(expected: &[u8], received: &[u8]) -> bool {
    expected.ct_eq(received).into()
}

fn binding_failure(check: BindingCheck) -> PresentmentError {
    tracing::warn!(%check, "presentment session binding failed");
    PresentmentError::Binding(check)
}
