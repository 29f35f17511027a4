//! Foreign emitter registry
//!
//! One entry per origin chain: the 32-byte fingerprint of the only emitter
//! whose messages this bridge accepts from that chain. Registering a chain
//! again overwrites its entry.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Order, StdResult, Storage};
use cw_storage_plus::{Bound, Map};

use crate::error::ContractError;

/// Registered emitter for a foreign chain
#[cw_serde]
pub struct ForeignEmitter {
    pub chain: u16,
    pub address: [u8; 32],
}

/// Key: origin chain id, Value: ForeignEmitter
pub const FOREIGN_EMITTERS: Map<u16, ForeignEmitter> = Map::new("foreign_emitters");

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

/// Reject entries that can never identify a real foreign emitter.
pub fn validate(chain: u16, address: &[u8; 32], this_chain: u16) -> Result<(), ContractError> {
    if chain == 0 {
        return Err(ContractError::InvalidEmitter {
            reason: "chain id 0 is reserved".to_string(),
        });
    }
    if chain == this_chain {
        return Err(ContractError::InvalidEmitter {
            reason: format!("chain {} is this chain", chain),
        });
    }
    if address.iter().all(|&b| b == 0) {
        return Err(ContractError::InvalidEmitter {
            reason: "zero address".to_string(),
        });
    }
    Ok(())
}

/// Upsert the emitter for `chain`, returning the address it replaced.
pub fn register(
    storage: &mut dyn Storage,
    chain: u16,
    address: [u8; 32],
) -> StdResult<Option<[u8; 32]>> {
    let previous = FOREIGN_EMITTERS.may_load(storage, chain)?;
    FOREIGN_EMITTERS.save(storage, chain, &ForeignEmitter { chain, address })?;
    Ok(previous.map(|emitter| emitter.address))
}

pub fn lookup(storage: &dyn Storage, chain: u16) -> StdResult<Option<ForeignEmitter>> {
    FOREIGN_EMITTERS.may_load(storage, chain)
}

/// True only if `chain` is registered and its fingerprint equals `address`.
pub fn authorize(storage: &dyn Storage, chain: u16, address: &[u8; 32]) -> StdResult<bool> {
    Ok(lookup(storage, chain)?
        .map(|emitter| fingerprints_match(&emitter.address, address))
        .unwrap_or(false))
}

/// Compare every byte regardless of where the first difference is.
fn fingerprints_match(a: &[u8; 32], b: &[u8; 32]) -> bool {
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

pub fn list(
    storage: &dyn Storage,
    start_after: Option<u16>,
    limit: Option<u32>,
) -> StdResult<Vec<ForeignEmitter>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    FOREIGN_EMITTERS
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, emitter)| emitter))
        .collect()
}
