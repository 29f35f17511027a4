//! Message types for the CAT bridge contract
//!
//! The contract is both a cw20 token and the bridge endpoint for it, so the
//! execute and query enums carry the cw20 surface next to the bridge calls.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, Expiration, MinterResponse, TokenInfoResponse};

use crate::custody::TokenMode;
use crate::replay::Received;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Local decimals (fixed for the life of the token)
    pub decimals: u8,
    /// Hard cap on circulating supply
    pub max_supply: Uint128,
    /// Minted to the owner at instantiation
    pub initial_supply: Uint128,
    /// Owner and initial mint authority (defaults to the instantiator)
    pub owner: Option<String>,
    /// Relay chain id of this chain
    pub chain_id: u16,
    /// Relay contract address
    pub relay: String,
    /// Bech32 prefix for local accounts (e.g. "terra")
    pub address_prefix: String,
    /// Batch nonce for emitted messages (defaults to 0)
    pub batch_nonce: Option<u32>,
    /// Existing cw20 to lock and release instead of issuing a token.
    ///
    /// When set, the token fields above other than `initial_supply` (which
    /// must be zero) are ignored and the cw20 surface of this contract is
    /// disabled.
    pub custody_token: Option<String>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Bridge
    // ========================================================================
    /// Burn `amount` from the sender and emit a transfer to `recipient_chain`.
    ///
    /// In lock/release deployments the amount is instead pulled into custody,
    /// which needs a prior cw20 allowance for this contract. The relay fee
    /// must be attached as funds.
    BridgeOut {
        amount: Uint128,
        /// Destination relay chain id
        recipient_chain: u16,
        /// Destination account (32 bytes, destination chain encoding)
        recipient: Binary,
    },

    /// Verify a signed transfer attestation and credit its recipient.
    ///
    /// Authorization: Anyone
    BridgeIn { vaa: Binary },

    // ========================================================================
    // Owner Operations
    // ========================================================================
    /// Register (or replace) the emitter trusted for `chain`
    RegisterEmitter {
        chain: u16,
        /// 32-byte emitter fingerprint
        address: Binary,
    },

    /// Nominate the next owner
    ProposeOwnership { new_owner: String },

    /// Complete the transfer (signed by the nominee)
    AcceptOwnership {},

    /// Drop the pending nomination
    CancelOwnershipTransfer {},

    /// Move the cw20 minter role, keeping the cap
    UpdateMintAuthority { new_authority: String },

    /// Mint under the cw20 minter role
    MintTokens { recipient: String, amount: Uint128 },

    // ========================================================================
    // CW20 Token
    // ========================================================================
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    Burn {
        amount: Uint128,
    },
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(OwnershipResponse)]
    Ownership {},

    #[returns(Option<ForeignEmitterResponse>)]
    ForeignEmitter { chain: u16 },

    #[returns(ForeignEmittersResponse)]
    ForeignEmitters {
        start_after: Option<u16>,
        limit: Option<u32>,
    },

    /// Whether the inbound message (chain, sequence) has been applied
    #[returns(ProcessedResponse)]
    IsProcessed { chain: u16, sequence: u64 },

    #[returns(SupplyResponse)]
    Supply {},

    #[returns(StatsResponse)]
    Stats {},

    #[returns(Option<SentMessageResponse>)]
    SentMessage { sequence: u64 },

    /// Custodied token and locked amount; `None` for mint/burn deployments
    #[returns(Option<CustodyResponse>)]
    Custody {},

    // cw20
    #[returns(BalanceResponse)]
    Balance { address: String },

    #[returns(TokenInfoResponse)]
    TokenInfo {},

    #[returns(Option<MinterResponse>)]
    Minter {},

    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },
}

// ============================================================================
// Responses
// ============================================================================

/// Data set on a successful `BridgeOut`
#[cw_serde]
pub struct BridgeOutResponse {
    pub sequence: u64,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub chain_id: u16,
    pub relay: Addr,
    /// This contract's emitter fingerprint
    pub emitter: Binary,
    pub address_prefix: String,
    pub batch_nonce: u32,
    pub token: TokenMode,
}

#[cw_serde]
pub struct OwnershipResponse {
    pub owner: Addr,
    pub pending_owner: Option<Addr>,
}

#[cw_serde]
pub struct ForeignEmitterResponse {
    pub chain: u16,
    pub address: Binary,
}

#[cw_serde]
pub struct ForeignEmittersResponse {
    pub emitters: Vec<ForeignEmitterResponse>,
}

#[cw_serde]
pub struct ProcessedResponse {
    pub chain: u16,
    pub sequence: u64,
    pub processed: bool,
    pub record: Option<Received>,
}

#[cw_serde]
pub struct SupplyResponse {
    pub circulating: Uint128,
    pub max_supply: Uint128,
    pub total_minted: Uint128,
    pub total_burned: Uint128,
    pub decimals: u8,
    pub mint_authority: Option<Addr>,
}

#[cw_serde]
pub struct StatsResponse {
    pub outbound_count: u64,
    pub inbound_count: u64,
    pub total_bridged_out: Uint128,
    pub total_bridged_in: Uint128,
}

#[cw_serde]
pub struct SentMessageResponse {
    pub sequence: u64,
    pub sender: Addr,
    pub amount: Uint128,
    pub recipient_chain: u16,
    pub recipient: Binary,
    pub payload: Binary,
}

#[cw_serde]
pub struct CustodyResponse {
    pub token: Addr,
    pub decimals: u8,
    pub locked: Uint128,
}
