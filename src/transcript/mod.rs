//! Transcript module: the ISO 18013-5 style SessionTranscript both parties derive.
//!
//! The encoding is the wire contract. The outer array has three slots
//! (DeviceEngagementBytes, EReaderKeyBytes, Handover); the first two are
//! always null in the Wallet identity flow, the third carries the handover
//! variant. Field order inside the handover must not change: the device hashes
//! exactly these bytes into `infoHash` and binds them into the HPKE context.

use serde::ser::{Serialize, SerializeTuple, Serializer};

use crate::digest::sha256;
use crate::error::PresentmentError;

/// Version tag that opens every Apple handover array.
pub const APPLE_HANDOVER_V1: &str = "AppleIdentityPresentment_1.0";

/// The Apple identity presentment handover:
/// `[version, nonce, merchantId, teamId, requesterKeyDigest]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppleHandover {
    nonce: Vec<u8>,
    merchant_id: String,
    team_id: String,
    requester_key_digest: Vec<u8>,
}

impl AppleHandover {
    /// Build a handover, rejecting empty identifiers and byte strings.
    pub fn new(
        merchant_id: &str,
        team_id: &str,
        nonce: &[u8],
        requester_key_digest: &[u8],
    ) -> Result<Self, PresentmentError> {
        if merchant_id.is_empty() {
            return Err(PresentmentError::Construction(
                "merchant identifier is empty".to_string(),
            ));
        }
        if team_id.is_empty() {
            return Err(PresentmentError::Construction(
                "team identifier is empty".to_string(),
            ));
        }
        if nonce.is_empty() {
            return Err(PresentmentError::Construction("nonce is empty".to_string()));
        }
        if requester_key_digest.is_empty() {
            return Err(PresentmentError::Construction(
                "requester key digest is empty".to_string(),
            ));
        }
        Ok(AppleHandover {
            nonce: nonce.to_vec(),
            merchant_id: merchant_id.to_string(),
            team_id: team_id.to_string(),
            requester_key_digest: requester_key_digest.to_vec(),
        })
    }

    pub fn nonce(&self) -> &[u8] {
        &self.nonce
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    pub fn team_id(&self) -> &str {
        &self.team_id
    }

    pub fn requester_key_digest(&self) -> &[u8] {
        &self.requester_key_digest
    }
}

impl Serialize for AppleHandover {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_tuple(5)?;
        seq.serialize_element(APPLE_HANDOVER_V1)?;
        seq.serialize_element(serde_bytes::Bytes::new(&self.nonce))?;
        seq.serialize_element(&self.merchant_id)?;
        seq.serialize_element(&self.team_id)?;
        seq.serialize_element(serde_bytes::Bytes::new(&self.requester_key_digest))?;
        seq.end()
    }
}

/// A session transcript, one variant per handover type.
///
/// New handover flows are added as sibling variants; the surrounding
/// `[null, null, handover]` framing stays shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTranscript {
    AppleHandover(AppleHandover),
}

impl SessionTranscript {
    /// Canonical CBOR encoding: definite lengths, shortest-form heads.
    pub fn to_cbor(&self) -> Result<Vec<u8>, PresentmentError> {
        serde_cbor::to_vec(self).map_err(|e| PresentmentError::Construction(e.to_string()))
    }

    /// SHA-256 of the encoding, the value a device places in `infoHash`.
    pub fn info_hash(&self) -> Result<[u8; 32], PresentmentError> {
        Ok(sha256(&self.to_cbor()?))
    }
}

impl Serialize for SessionTranscript {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_tuple(3)?;
        // DeviceEngagementBytes and EReaderKeyBytes are unused by every current handover
        seq.serialize_element(&Option::<()>::None)?;
        seq.serialize_element(&Option::<()>::None)?;
        match self {
            SessionTranscript::AppleHandover(handover) => seq.serialize_element(handover)?,
        }
        seq.end()
    }
}

/// Encode the Apple handover session transcript for the given session values.
///
/// Byte-identical output for byte-identical input; nothing random or
/// time-dependent goes into the transcript.
pub fn build_transcript(
    merchant_id: &str,
    team_id: &str,
    nonce: &[u8],
    requester_key_digest: &[u8],
) -> Result<Vec<u8>, PresentmentError> {
    let handover = AppleHandover::new(merchant_id, team_id, nonce, requester_key_digest)?;
    let transcript = SessionTranscript::AppleHandover(handover).to_cbor()?;
    tracing::debug!(len = transcript.len(), "built apple handover session transcript");
    Ok(transcript)
}
