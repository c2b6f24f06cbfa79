use anyhow::Context;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::pkcs8::{DecodePrivateKey, DecodePublicKey};
use std::path::Path;
use zeroize::Zeroizing;

use crate::crypto::RecipientKey;

/// Parse a verifier private key from PEM.
///
/// Accepts SEC1 (`EC PRIVATE KEY`, as exported by the merchant portal) and
/// PKCS#8 (`PRIVATE KEY`). The raw scalar only lives in a zeroizing buffer
/// while it is handed to the HPKE suite.
pub fn parse_private_key_pem(pem: &str) -> anyhow::Result<RecipientKey> {
    let secret = if pem.contains("BEGIN EC PRIVATE KEY") {
        p256::SecretKey::from_sec1_pem(pem)
            .map_err(|e| anyhow::anyhow!("invalid SEC1 private key: {}", e))?
    } else {
        p256::SecretKey::from_pkcs8_pem(pem)
            .map_err(|e| anyhow::anyhow!("invalid PKCS#8 private key: {}", e))?
    };
    let scalar = Zeroizing::new(secret.to_bytes().to_vec());
    Ok(RecipientKey::from_bytes(scalar.as_slice())?)
}

/// Parse a verifier public key from an SPKI PEM (`PUBLIC KEY`) and return the
/// uncompressed SEC1 point, the encoding hashed into `pkRHash`.
pub fn parse_public_key_pem(pem: &str) -> anyhow::Result<Vec<u8>> {
    let public = p256::PublicKey::from_public_key_pem(pem)
        .map_err(|e| anyhow::anyhow!("invalid public key: {}", e))?;
    Ok(public.to_encoded_point(false).as_bytes().to_vec())
}

/// Load the verifier private key from a PEM file.
///
/// Performs a permission check before reading: key files readable by group or
/// other are rejected with the remediation command in the error.
pub fn load_private_key(path: &Path) -> anyhow::Result<RecipientKey> {
    check_key_permissions(path)?;
    let pem = Zeroizing::new(
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read private key {}", path.display()))?,
    );
    parse_private_key_pem(&pem)
        .with_context(|| format!("Failed to parse private key {}", path.display()))
}

/// Load the verifier public key from a PEM file.
pub fn load_public_key(path: &Path) -> anyhow::Result<Vec<u8>> {
    let pem = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read public key {}", path.display()))?;
    parse_public_key_pem(&pem)
        .with_context(|| format!("Failed to parse public key {}", path.display()))
}

/// Check that the key file has exactly 0600 permissions (Unix only).
#[cfg(unix)]
pub fn check_key_permissions(path: &Path) -> anyhow::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read metadata for {}", path.display()))?;
    let mode = metadata.permissions().mode() & 0o777;
    if mode != 0o600 {
        anyhow::bail!(
            "Key file {} has insecure permissions {:04o} (expected 0600). Fix with: chmod 600 {}",
            path.display(),
            mode,
            path.display()
        );
    }
    Ok(())
}

/// No-op permission check on non-Unix platforms.
#[cfg(not(unix))]
pub fn check_key_permissions(_path: &Path) -> anyhow::Result<()> {
    Ok(())
}
