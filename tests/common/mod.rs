//! Fixed test vectors shared by the integration tests.
//!
//! The nonce, identifiers, key digest, transcript and infoHash come from the
//! PassKit identity test merchant; they pin the transcript encoding byte for
//! byte against an independent implementation.
#![allow(dead_code)]

use std::collections::BTreeMap;

use idpresent::claims::{Document, DeviceResponse, IssuerSigned, IssuerSignedItem, PresentmentPayload};
use idpresent::config::RelyingParty;
use idpresent::crypto::RecipientKey;
use serde_bytes::ByteBuf;
use serde_cbor::Value;

pub const MERCHANT_ID: &str = "PassKit_Identity_Test_Merchant_ID";
pub const TEAM_ID: &str = "PassKit_Identity_Test_Team_ID";

pub const NONCE_HEX: &str = "964c3e56a06061fa213fce2ba73217a6d359c2e65d44ec6b5b94f9c57eeeb3c045906344c7032e2609eb60533c35a98a75d0d2444ef9057c55cbb2d05d672a25";

/// SHA-256 of the test merchant's encryption public key (uncompressed SEC1).
pub const PUBLIC_KEY_DIGEST_HEX: &str =
    "b2c00f06b2df645691174f1331ade35141f17e19b3021d07560b4a71fc61818c";

pub const SESSION_TRANSCRIPT_HEX: &str = "83f6f685781c4170706c654964656e7469747950726573656e746d656e745f312e305840964c3e56a06061fa213fce2ba73217a6d359c2e65d44ec6b5b94f9c57eeeb3c045906344c7032e2609eb60533c35a98a75d0d2444ef9057c55cbb2d05d672a257821506173734b69745f4964656e746974795f546573745f4d65726368616e745f4944781d506173734b69745f4964656e746974795f546573745f5465616d5f49445820b2c00f06b2df645691174f1331ade35141f17e19b3021d07560b4a71fc61818c";

pub const INFO_HASH_HEX: &str = "59a47fc9fa2402cfefa5e889183d4222cb15bb10807e53d90b4eef5eb9ff1d96";

pub const MDL_DOC_TYPE: &str = "org.iso.18013.5.1.mDL";
pub const MDL_NAMESPACE: &str = "org.iso.18013.5.1";

pub fn nonce() -> Vec<u8> {
    hex::decode(NONCE_HEX).expect("fixture nonce is valid hex")
}

pub fn public_key_digest() -> Vec<u8> {
    hex::decode(PUBLIC_KEY_DIGEST_HEX).expect("fixture digest is valid hex")
}

pub fn relying_party() -> RelyingParty {
    RelyingParty::new(MERCHANT_ID, TEAM_ID).expect("fixture identifiers are non-empty")
}

/// Verifier key pair derived from a fixed seed.
pub fn verifier_key() -> RecipientKey {
    RecipientKey::derive(&[42u8; 32])
}

/// A second, unrelated key pair.
pub fn other_key() -> RecipientKey {
    RecipientKey::derive(&[99u8; 32])
}

fn issuer_item(digest_id: u64, identifier: &str, value: Value) -> ByteBuf {
    let item = IssuerSignedItem {
        digest_id,
        random: vec![0x5a; 16],
        element_identifier: identifier.to_string(),
        element_value: value,
    };
    ByteBuf::from(serde_cbor::to_vec(&item).expect("issuer item encodes"))
}

/// A small mDL response with three disclosed elements.
pub fn sample_response() -> DeviceResponse {
    let mut name_spaces = BTreeMap::new();
    name_spaces.insert(
        MDL_NAMESPACE.to_string(),
        vec![
            issuer_item(0, "given_name", Value::Text("JANE".to_string())),
            issuer_item(1, "family_name", Value::Text("APPLESEED".to_string())),
            issuer_item(2, "age_over_21", Value::Bool(true)),
        ],
    );
    DeviceResponse {
        version: "1.0".to_string(),
        documents: vec![Document {
            doc_type: MDL_DOC_TYPE.to_string(),
            issuer_signed: IssuerSigned {
                name_spaces: Some(name_spaces),
                issuer_auth: Value::Array(vec![
                    Value::Bytes(vec![0xa1, 0x01, 0x26]),
                    Value::Map(BTreeMap::new()),
                    Value::Bytes(vec![0x01; 8]),
                    Value::Bytes(vec![0x02; 64]),
                ]),
            },
            device_signed: None,
            errors: None,
        }],
        document_errors: None,
        status: 0,
    }
}

pub fn sample_plaintext() -> Vec<u8> {
    PresentmentPayload {
        identity: sample_response(),
    }
    .to_cbor()
    .expect("payload encodes")
}
