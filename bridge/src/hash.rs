//! Hashing and identifier formatting helpers

use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Convert 32-byte hash to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Relay message identifier: `chain/emitter/sequence`
///
/// The emitter is rendered as 64 lowercase hex characters without prefix,
/// matching the form the relay uses to index signed attestations.
pub fn message_id(chain: u16, emitter: &[u8; 32], sequence: u64) -> String {
    format!("{}/{}/{}", chain, hex::encode(emitter), sequence)
}
