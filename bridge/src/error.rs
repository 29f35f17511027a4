//! Error types for the CAT bridge contract
//!
//! Every variant is terminal for the triggering call: the enclosing
//! transaction is reverted and no partial state survives.

use cosmwasm_std::{Coin, StdError, Uint128, Uint256};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Token(#[from] cw20_base::ContractError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: signer does not hold the required role")]
    Unauthorized,

    #[error("No pending ownership transfer")]
    NoPendingTransfer,

    // ========================================================================
    // Lifecycle Errors
    // ========================================================================

    #[error("Contract already initialized")]
    AlreadyInitialized,

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // ========================================================================
    // Message Errors
    // ========================================================================

    #[error("Message already processed: chain {chain}, sequence {sequence}")]
    AlreadyProcessed { chain: u16, sequence: u64 },

    #[error("Unknown emitter for chain {chain}")]
    UnknownEmitter { chain: u16 },

    #[error("Invalid foreign emitter: {reason}")]
    InvalidEmitter { reason: String },

    #[error("Wrong destination chain: expected {expected}, got {got}")]
    WrongDestination { expected: u16, got: u16 },

    #[error("Malformed payload: {reason}")]
    MalformedPayload { reason: String },

    #[error("Attestation rejected by relay: {reason}")]
    InvalidAttestation { reason: String },

    #[error("Invalid recipient: {reason}")]
    InvalidRecipient { reason: String },

    // ========================================================================
    // Supply & Balance Errors
    // ========================================================================

    #[error("Max supply exceeded: circulating {circulating} + {amount} > {max_supply}")]
    SupplyExceeded {
        circulating: Uint128,
        amount: Uint256,
        max_supply: Uint128,
    },

    #[error("Insufficient balance: have {balance}, need {required}")]
    InsufficientBalance { balance: Uint128, required: Uint128 },

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Not supported by a lock/release deployment")]
    CustodyMode,

    #[error("Insufficient relay fee: expected {expected}, got {got}")]
    InsufficientFee { expected: Coin, got: Coin },
}
