use crate::digest::sha256;

/// Short display form of a verifier public key: the first 8 hex characters of
/// its SHA-256, i.e. the prefix of the `pkRHash` a device will send.
pub fn short_fingerprint(public_key: &[u8]) -> String {
    let hex = hex::encode(sha256(public_key));
    hex[..8].to_string()
}
