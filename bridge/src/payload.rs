//! Token-transfer payload codec
//!
//! The payload is the only application message carried through the relay.
//! Deployed counterparts on other chains parse it byte-for-byte, so the
//! layout is fixed and carries no version byte.
//!
//! # Byte Layout (101 bytes total, big-endian)
//! - Bytes 0-31:   amount (uint256, raw units in `decimals`)
//! - Bytes 32-63:  token_address (origin token fingerprint)
//! - Bytes 64-65:  token_chain (origin chain id)
//! - Bytes 66-97:  to_address (destination account, chain-specific encoding)
//! - Bytes 98-99:  to_chain (destination chain id)
//! - Byte  100:    decimals (origin token decimals)

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint256;

use crate::error::ContractError;

/// Encoded payload length in bytes
pub const PAYLOAD_LEN: usize = 101;

const AMOUNT: std::ops::Range<usize> = 0..32;
const TOKEN_ADDRESS: std::ops::Range<usize> = 32..64;
const TOKEN_CHAIN: std::ops::Range<usize> = 64..66;
const TO_ADDRESS: std::ops::Range<usize> = 66..98;
const TO_CHAIN: std::ops::Range<usize> = 98..100;
const DECIMALS: usize = 100;

/// Cross-chain token transfer
#[cw_serde]
pub struct TransferPayload {
    /// Amount in raw units of `decimals`
    pub amount: Uint256,
    /// Fingerprint of the token on its origin chain
    pub token_address: [u8; 32],
    /// Origin chain id
    pub token_chain: u16,
    /// Recipient on the destination chain
    pub to_address: [u8; 32],
    /// Destination chain id
    pub to_chain: u16,
    /// Decimals the amount is expressed in
    pub decimals: u8,
}

impl TransferPayload {
    pub fn encode(&self) -> [u8; PAYLOAD_LEN] {
        let mut out = [0u8; PAYLOAD_LEN];
        out[AMOUNT].copy_from_slice(&self.amount.to_be_bytes());
        out[TOKEN_ADDRESS].copy_from_slice(&self.token_address);
        out[TOKEN_CHAIN].copy_from_slice(&self.token_chain.to_be_bytes());
        out[TO_ADDRESS].copy_from_slice(&self.to_address);
        out[TO_CHAIN].copy_from_slice(&self.to_chain.to_be_bytes());
        out[DECIMALS] = self.decimals;
        out
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, ContractError> {
        if bytes.len() != PAYLOAD_LEN {
            return Err(ContractError::MalformedPayload {
                reason: format!("expected {} bytes, got {}", PAYLOAD_LEN, bytes.len()),
            });
        }

        Ok(Self {
            amount: Uint256::from_be_bytes(fixed::<32>(&bytes[AMOUNT])),
            token_address: fixed::<32>(&bytes[TOKEN_ADDRESS]),
            token_chain: u16::from_be_bytes(fixed::<2>(&bytes[TOKEN_CHAIN])),
            to_address: fixed::<32>(&bytes[TO_ADDRESS]),
            to_chain: u16::from_be_bytes(fixed::<2>(&bytes[TO_CHAIN])),
            decimals: bytes[DECIMALS],
        })
    }
}

// Callers slice with the layout constants above, so lengths always agree.
fn fixed<const N: usize>(slice: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(slice);
    out
}
