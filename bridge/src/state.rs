//! State definitions for the CAT bridge contract
//!
//! Token balances and metadata are kept by `cw20-base` (see [`crate::supply`]),
//! or by an external cw20 in lock/release deployments (see [`crate::custody`]).
//! The emitter registry and replay ledger own their maps in
//! [`crate::registry`] and [`crate::replay`].

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::{Item, Map};

use common::RelayContract;

use crate::custody::TokenMode;

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Owner allowed to register emitters and manage roles
    pub owner: Addr,
    /// Relay chain id of the chain this contract runs on
    pub chain_id: u16,
    /// Relay this bridge emits through and verifies against
    pub relay: RelayContract,
    /// This contract's 32-byte emitter fingerprint as seen by other chains
    pub emitter: [u8; 32],
    /// Bech32 prefix used when decoding inbound recipients
    pub address_prefix: String,
    /// Nonce passed with every emitted message
    pub batch_nonce: u32,
    /// Whether this contract issues the token or holds an existing one
    pub token: TokenMode,
}

/// Outbound message record, keyed by relay sequence
#[cw_serde]
pub struct SentMessage {
    pub sender: Addr,
    /// Amount burned or locked, in local decimals
    pub amount: Uint128,
    pub recipient_chain: u16,
    pub recipient: Binary,
    /// Encoded transfer payload as handed to the relay
    pub payload: Binary,
}

/// Bridge statistics
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub outbound_count: u64,
    pub inbound_count: u64,
    /// Sum of amounts debited by bridge-out, in local decimals
    pub total_bridged_out: Uint128,
    /// Sum of amounts credited by bridge-in, in local decimals
    pub total_bridged_in: Uint128,
}

// ============================================================================
// Storage
// ============================================================================

pub const CONTRACT_NAME: &str = "crates.io:cat-bridge";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");

/// Proposed next owner; absent when no transfer is in flight
pub const PENDING_OWNER: Item<Addr> = Item::new("pending_owner");

/// Key: relay sequence, Value: SentMessage
pub const SENT: Map<u64, SentMessage> = Map::new("sent");

pub const STATS: Item<Stats> = Item::new("stats");
