//! Message relay interface.
//!
//! The relay is a guardian-backed core contract. It accepts byte payloads
//! from emitters, assigns each emitter a monotonically increasing sequence,
//! and later verifies quorum-signed attestations (VAAs) of those payloads.
//! Bridge contracts trust the parsed output of [`RelayQueryMsg::VerifyVaa`]
//! without re-checking signatures.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Coin, CosmosMsg, QuerierWrapper, StdError, StdResult, WasmMsg,
};

// ============================================================================
// Messages
// ============================================================================

/// Execute messages understood by the relay
#[cw_serde]
pub enum RelayExecuteMsg {
    /// Emit `message` under the sender's emitter identity.
    ///
    /// The sender must attach at least the fee reported by `GetState`.
    PostMessage {
        /// Opaque payload bytes
        message: Binary,
        /// Batch nonce (0 = no batching)
        nonce: u32,
    },
}

/// Query messages understood by the relay
#[cw_serde]
#[derive(QueryResponses)]
pub enum RelayQueryMsg {
    /// Current relay configuration (message fee)
    #[returns(RelayStateResponse)]
    GetState {},

    /// Sequence that the next `PostMessage` from `emitter` will receive
    #[returns(SequenceResponse)]
    NextSequence { emitter: String },

    /// Verify a signed attestation and return its parsed body.
    ///
    /// Fails unless the attestation carries a valid guardian quorum.
    #[returns(ParsedVaa)]
    VerifyVaa { vaa: Binary, block_time: u64 },
}

// ============================================================================
// Responses
// ============================================================================

/// Relay configuration
#[cw_serde]
pub struct RelayStateResponse {
    /// Fee charged per emitted message
    pub fee: Coin,
}

/// Next emitter sequence
#[cw_serde]
pub struct SequenceResponse {
    pub sequence: u64,
}

/// Body of a verified attestation
#[cw_serde]
pub struct ParsedVaa {
    pub version: u8,
    pub guardian_set_index: u32,
    pub timestamp: u32,
    pub nonce: u32,
    pub len_signers: u8,
    /// Chain the message was emitted on
    pub emitter_chain: u16,
    /// 32-byte emitter fingerprint on the origin chain
    pub emitter_address: Binary,
    /// Emitter sequence of the message
    pub sequence: u64,
    pub consistency_level: u8,
    /// Application payload
    pub payload: Binary,
    /// Digest of the signed body
    pub hash: Binary,
}

impl ParsedVaa {
    /// Emitter address as a fixed 32-byte fingerprint
    pub fn emitter_address_bytes(&self) -> StdResult<[u8; 32]> {
        to_bytes32(&self.emitter_address, "emitter_address")
    }

    /// Attestation digest as fixed 32 bytes
    pub fn hash_bytes(&self) -> StdResult<[u8; 32]> {
        to_bytes32(&self.hash, "hash")
    }
}

fn to_bytes32(bytes: &Binary, field: &str) -> StdResult<[u8; 32]> {
    bytes.as_slice().try_into().map_err(|_| {
        StdError::generic_err(format!(
            "{} must be 32 bytes, got {}",
            field,
            bytes.len()
        ))
    })
}

// ============================================================================
// Client
// ============================================================================

/// Typed handle on a deployed relay contract
#[cw_serde]
pub struct RelayContract(pub Addr);

impl RelayContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    /// Build the `PostMessage` call, forwarding `funds` as the relay fee.
    pub fn post_message(
        &self,
        message: Binary,
        nonce: u32,
        funds: Vec<Coin>,
    ) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg: to_json_binary(&RelayExecuteMsg::PostMessage { message, nonce })?,
            funds,
        }
        .into())
    }

    pub fn state(&self, querier: &QuerierWrapper) -> StdResult<RelayStateResponse> {
        querier.query_wasm_smart(self.addr(), &RelayQueryMsg::GetState {})
    }

    pub fn next_sequence(&self, querier: &QuerierWrapper, emitter: &Addr) -> StdResult<u64> {
        let res: SequenceResponse = querier.query_wasm_smart(
            self.addr(),
            &RelayQueryMsg::NextSequence {
                emitter: emitter.to_string(),
            },
        )?;
        Ok(res.sequence)
    }

    pub fn verify_vaa(
        &self,
        querier: &QuerierWrapper,
        vaa: &Binary,
        block_time: u64,
    ) -> StdResult<ParsedVaa> {
        querier.query_wasm_smart(
            self.addr(),
            &RelayQueryMsg::VerifyVaa {
                vaa: vaa.clone(),
                block_time,
            },
        )
    }
}
