//! Message id computation.
//!
//! A message id is the keccak256 hash of the raw message payload. Equality is
//! byte-exact, so two callers submitting the same payload always address the
//! same ledger entry.

use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Derive the 32-byte message id from a raw message payload.
pub fn message_id(message: &[u8]) -> [u8; 32] {
    keccak256(message)
}

/// Convert a 32-byte hash to a 0x-prefixed hex string (for attributes/queries).
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test keccak256 produces expected output for known input
    #[test]
    fn test_keccak256_basic() {
        // keccak256("hello") = 0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8
        let result = keccak256(b"hello");
        assert_eq!(
            bytes32_to_hex(&result),
            "0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        );
    }

    /// Message id is the keccak of the raw payload, byte-exact
    #[test]
    fn test_message_id_matches_keccak() {
        let payload = b"arbitrary cross-chain message body";
        assert_eq!(message_id(payload), keccak256(payload));
        assert_ne!(message_id(payload), message_id(b"different payload"));
    }

    #[test]
    fn test_message_id_empty_payload() {
        // keccak256("") is the well-known empty-input digest
        let result = message_id(b"");
        assert_eq!(
            bytes32_to_hex(&result),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }
}
