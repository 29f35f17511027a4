//! Cross-chain address encoding
//!
//! Every address that crosses the relay is carried as 32 bytes. Local
//! accounts are mapped onto that width as follows:
//!
//! ```text
//! 20-byte account:  | zero (12 bytes) | raw address (20 bytes) |
//! 32-byte account:  | raw address (32 bytes)                    |
//! ```
//!
//! Bech32 conversion is done in-contract so that decoded recipients do not
//! depend on the host chain's canonical address length.

use cosmwasm_std::{Addr, StdError, StdResult};

use crate::hash::keccak256;

/// Length of a standard Cosmos account address
pub const SHORT_ADDRESS_LEN: usize = 20;

/// Length of a cross-chain (and Cosmos contract) address
pub const ADDRESS_LEN: usize = 32;

// ============================================================================
// 32-byte Mapping
// ============================================================================

/// Left-pad a 20- or 32-byte raw address to 32 bytes
pub fn to_bytes32(raw: &[u8]) -> StdResult<[u8; 32]> {
    if raw.len() != SHORT_ADDRESS_LEN && raw.len() != ADDRESS_LEN {
        return Err(StdError::generic_err(format!(
            "Invalid address length: expected 20 or 32 bytes, got {}",
            raw.len()
        )));
    }

    let mut result = [0u8; 32];
    result[ADDRESS_LEN - raw.len()..].copy_from_slice(raw);
    Ok(result)
}

/// Recover the raw local address from its 32-byte form
///
/// Twelve leading zero bytes mark a 20-byte account.
pub fn from_bytes32(bytes: &[u8; 32]) -> &[u8] {
    if bytes[..ADDRESS_LEN - SHORT_ADDRESS_LEN].iter().all(|&b| b == 0) {
        &bytes[ADDRESS_LEN - SHORT_ADDRESS_LEN..]
    } else {
        &bytes[..]
    }
}

/// Decode a destination address into a local account
pub fn recipient_from_bytes32(bytes: &[u8; 32], hrp: &str) -> StdResult<Addr> {
    if bytes.iter().all(|&b| b == 0) {
        return Err(StdError::generic_err("Recipient is the zero address"));
    }
    let encoded = encode_bech32_address(from_bytes32(bytes), hrp)?;
    // Encoded from raw bytes with a valid checksum, so already canonical.
    Ok(Addr::unchecked(encoded))
}

/// 32-byte fingerprint identifying a local account or contract
///
/// Bech32 addresses map to their padded raw bytes. Anything else (for
/// example a non-bech32 address on a test chain) falls back to
/// `keccak256(address)` so the fingerprint is still deterministic.
pub fn fingerprint(addr: &Addr) -> [u8; 32] {
    decode_bech32_address(addr.as_str())
        .and_then(|raw| to_bytes32(&raw))
        .unwrap_or_else(|_| keccak256(addr.as_bytes()))
}

// ============================================================================
// Bech32
// ============================================================================

/// Decode a bech32 address to its raw bytes
pub fn decode_bech32_address(addr: &str) -> StdResult<Vec<u8>> {
    // Format: hrp + "1" + base32_data + checksum
    let (hrp, data_part) = addr
        .rsplit_once('1')
        .ok_or_else(|| StdError::generic_err("Invalid bech32 format"))?;

    if hrp.is_empty() {
        return Err(StdError::generic_err("Missing bech32 prefix"));
    }

    if data_part.len() < 7 {
        return Err(StdError::generic_err("Bech32 data too short"));
    }

    let decoded = decode_bech32_data(data_part)?;
    let (data, checksum) = decoded.split_at(decoded.len() - 6);

    if compute_bech32_checksum(hrp, data) != checksum {
        return Err(StdError::generic_err("Invalid bech32 checksum"));
    }

    convert_bits(data, 5, 8, false)
}

/// Encode raw bytes to a bech32 address with the given prefix
pub fn encode_bech32_address(bytes: &[u8], hrp: &str) -> StdResult<String> {
    if hrp.is_empty() {
        return Err(StdError::generic_err("Missing bech32 prefix"));
    }

    let data5 = convert_bits(bytes, 8, 5, true)?;
    let checksum = compute_bech32_checksum(hrp, &data5);

    Ok(format!(
        "{}1{}{}",
        hrp,
        encode_bech32_data(&data5),
        encode_bech32_data(&checksum)
    ))
}

/// Convert bits between different group sizes
fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> StdResult<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut result = Vec::new();
    let max_v = (1u32 << to_bits) - 1;

    for &value in data {
        acc = (acc << from_bits) | value as u32;
        bits += from_bits;

        while bits >= to_bits {
            bits -= to_bits;
            result.push(((acc >> bits) & max_v) as u8);
        }
    }

    if pad && bits > 0 {
        result.push(((acc << (to_bits - bits)) & max_v) as u8);
    } else if !pad && (bits >= from_bits || ((acc << (to_bits - bits)) & max_v) != 0) {
        return Err(StdError::generic_err("Invalid padding"));
    }

    Ok(result)
}

/// Bech32 character set
const BECH32_CHARSET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

fn decode_bech32_data(data: &str) -> StdResult<Vec<u8>> {
    data.chars()
        .map(|c| {
            BECH32_CHARSET
                .iter()
                .position(|&x| x as char == c)
                .map(|idx| idx as u8)
                .ok_or_else(|| StdError::generic_err(format!("Invalid bech32 character: {}", c)))
        })
        .collect()
}

fn encode_bech32_data(data: &[u8]) -> String {
    data.iter()
        .map(|&b| BECH32_CHARSET[b as usize] as char)
        .collect()
}

fn compute_bech32_checksum(hrp: &str, data: &[u8]) -> Vec<u8> {
    let mut values = expand_hrp(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0, 0, 0, 0, 0, 0]);

    let polymod = bech32_polymod(&values) ^ 1;

    (0..6)
        .map(|i| ((polymod >> (5 * (5 - i))) & 31) as u8)
        .collect()
}

fn expand_hrp(hrp: &str) -> Vec<u8> {
    let mut result = Vec::with_capacity(hrp.len() * 2 + 1);
    result.extend(hrp.bytes().map(|c| c >> 5));
    result.push(0);
    result.extend(hrp.bytes().map(|c| c & 31));
    result
}

fn bech32_polymod(values: &[u8]) -> u32 {
    const GENERATOR: [u32; 5] = [
        0x3b6a_57b2,
        0x2650_8e6d,
        0x1ea1_19fa,
        0x3d42_33dd,
        0x2a14_62b3,
    ];

    let mut chk: u32 = 1;
    for &v in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ (v as u32);
        for (i, gen) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= gen;
            }
        }
    }
    chk
}
