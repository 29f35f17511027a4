//! CAT Bridge Contract - Capped cw20 Token with Cross-Chain Bridging
//!
//! The contract is a cw20 token whose supply can move between chains
//! through an external message relay. Tokens leave by being burned here and
//! arrive by being minted here, so the sum of circulating supply across all
//! deployments stays constant up to decimal truncation.
//!
//! A deployment can instead front an existing cw20: tokens leaving are locked
//! in this contract's custody and arriving tokens are released from it.
//!
//! # Outgoing Flow (BridgeOut)
//! 1. Holder burns (or locks) tokens and pays the relay fee
//! 2. A 101-byte transfer payload is posted to the relay
//! 3. The relay assigns a sequence and guardians sign the message
//!
//! # Incoming Flow (BridgeIn)
//! 1. Anyone submits the signed attestation
//! 2. The relay verifies it; the emitter must match the registry
//! 3. The (chain, sequence) pair is consumed, then the recipient is credited
//!
//! # Security
//! - One trusted emitter per foreign chain, owner-registered
//! - Replay ledger that never forgets
//! - Hard supply cap enforced on every mint
//! - Two-signature ownership transfer

pub mod address_codec;
pub mod contract;
pub mod custody;
pub mod decimals;
pub mod error;
mod execute;
pub mod hash;
pub mod msg;
pub mod payload;
mod query;
pub mod registry;
pub mod replay;
pub mod state;
pub mod supply;

pub use crate::error::ContractError;
pub use crate::hash::keccak256;
pub use crate::payload::{TransferPayload, PAYLOAD_LEN};
