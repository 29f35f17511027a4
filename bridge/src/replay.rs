//! Replay ledger for inbound messages.
//!
//! A message is identified by its origin chain and emitter sequence. Once a
//! record exists for that key, the message can never be applied again: the
//! records are never expired or removed.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, StdResult, Storage};
use cw_storage_plus::Map;

use crate::error::ContractError;

/// (origin chain id, origin sequence)
pub type ReplayKey = (u16, u64);

/// Marker left by a completed bridge-in
#[cw_serde]
pub struct Received {
    /// Digest of the verified attestation
    pub vaa_hash: [u8; 32],
    /// Raw transfer payload as attested
    pub payload: Binary,
    /// Block height the message was applied at
    pub height: u64,
}

/// Key: (origin chain, sequence), Value: Received
pub const RECEIVED: Map<ReplayKey, Received> = Map::new("received");

/// Record `key` as consumed, failing if it already is.
///
/// The read and write happen in the caller's storage transaction, so a
/// failure anywhere later in the same execution discards the record too.
pub fn check_and_consume(
    storage: &mut dyn Storage,
    key: ReplayKey,
    record: &Received,
) -> Result<(), ContractError> {
    if RECEIVED.has(storage, key) {
        return Err(ContractError::AlreadyProcessed {
            chain: key.0,
            sequence: key.1,
        });
    }
    RECEIVED.save(storage, key, record)?;
    Ok(())
}

pub fn load(storage: &dyn Storage, key: ReplayKey) -> StdResult<Option<Received>> {
    RECEIVED.may_load(storage, key)
}
