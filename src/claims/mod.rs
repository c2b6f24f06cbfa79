//! Claims module: the typed subset of the ISO 18013-5 DeviceResponse carried in
//! a decrypted presentment.
//!
//! Only the framing the verifier needs is typed. Issuer authentication and
//! device signatures stay as raw CBOR values; checking them belongs to the mdoc
//! validation layer, not to envelope opening.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;
use serde_cbor::Value;

use crate::error::PresentmentError;

/// DeviceResponse version this crate understands.
pub const DEVICE_RESPONSE_VERSION: &str = "1.0";

/// Status code for a successful DeviceResponse.
pub const STATUS_OK: u64 = 0;

/// Decrypted plaintext: `{ "identity": DeviceResponse }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PresentmentPayload {
    pub identity: DeviceResponse,
}

impl PresentmentPayload {
    pub fn from_cbor(bytes: &[u8]) -> Result<Self, PresentmentError> {
        serde_cbor::from_slice(bytes).map_err(|source| PresentmentError::Decode {
            what: "presentment plaintext",
            source,
        })
    }

    pub fn to_cbor(&self) -> Result<Vec<u8>, PresentmentError> {
        serde_cbor::to_vec(self).map_err(|e| PresentmentError::Construction(e.to_string()))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceResponse {
    pub version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<Document>,
    /// One map per failed document: docType to error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_errors: Option<Vec<BTreeMap<String, i64>>>,
    pub status: u64,
}

impl DeviceResponse {
    pub fn is_supported_version(&self) -> bool {
        self.version == DEVICE_RESPONSE_VERSION
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// First document of the given docType, e.g. `org.iso.18013.5.1.mDL`.
    pub fn document(&self, doc_type: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.doc_type == doc_type)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub doc_type: String,
    pub issuer_signed: IssuerSigned,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_signed: Option<Value>,
    /// Namespace to element identifier to error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, BTreeMap<String, i64>>>,
}

impl Document {
    /// Decode the issuer-signed items of one namespace.
    ///
    /// Each item travels as an embedded CBOR byte string (tag 24 on the wire);
    /// an absent namespace yields an empty list.
    pub fn elements(&self, namespace: &str) -> Result<Vec<IssuerSignedItem>, PresentmentError> {
        let Some(items) = self
            .issuer_signed
            .name_spaces
            .as_ref()
            .and_then(|ns| ns.get(namespace))
        else {
            return Ok(Vec::new());
        };
        items
            .iter()
            .map(|item| {
                serde_cbor::from_slice(item).map_err(|source| PresentmentError::Decode {
                    what: "issuer signed item",
                    source,
                })
            })
            .collect()
    }

    /// Look up a single element value by identifier, e.g. `given_name`.
    pub fn element(
        &self,
        namespace: &str,
        identifier: &str,
    ) -> Result<Option<Value>, PresentmentError> {
        Ok(self
            .elements(namespace)?
            .into_iter()
            .find(|item| item.element_identifier == identifier)
            .map(|item| item.element_value))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssuerSigned {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_spaces: Option<BTreeMap<String, Vec<ByteBuf>>>,
    /// COSE_Sign1 over the mobile security object, kept undecoded.
    pub issuer_auth: Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssuerSignedItem {
    #[serde(rename = "digestID")]
    pub digest_id: u64,
    #[serde(with = "serde_bytes")]
    pub random: Vec<u8>,
    pub element_identifier: String,
    pub element_value: Value,
}
