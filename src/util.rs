//! Shared utility functions.

use anyhow::Context;
use std::path::Path;

/// Decode `input` as hex if it is hex text (surrounding whitespace ignored),
/// otherwise return it unchanged.
///
/// Presentment fixtures are commonly stored as hex dumps; raw CBOR never
/// starts with a hex digit for the map-shaped documents this tool reads.
pub fn hex_or_raw(input: &[u8]) -> Vec<u8> {
    let trimmed = input.trim_ascii();
    let looks_hex = !trimmed.is_empty()
        && trimmed.len() % 2 == 0
        && trimmed.iter().all(|b| b.is_ascii_hexdigit());
    if looks_hex {
        if let Ok(decoded) = hex::decode(trimmed) {
            return decoded;
        }
    }
    input.to_vec()
}

/// Read a file holding either hex text or raw bytes.
pub fn read_hex_or_raw(path: &Path) -> anyhow::Result<Vec<u8>> {
    let content =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(hex_or_raw(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_text_decoded() {
        assert_eq!(hex_or_raw(b"a3f6\n"), vec![0xa3, 0xf6]);
    }

    #[test]
    fn test_raw_bytes_unchanged() {
        let raw = [0xa3u8, 0x69, 0x61];
        assert_eq!(hex_or_raw(&raw), raw.to_vec());
    }

    #[test]
    fn test_odd_length_text_unchanged() {
        assert_eq!(hex_or_raw(b"abc"), b"abc".to_vec());
    }

    #[test]
    fn test_read_hex_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("hpke_envelope.cbor");
        std::fs::write(&path, "0102ff\n").expect("Failed to write fixture");
        assert_eq!(read_hex_or_raw(&path).unwrap(), vec![0x01, 0x02, 0xff]);
    }
}
