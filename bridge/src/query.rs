//! Query handlers for the CAT bridge contract.
//!
//! cw20 queries are answered by `cw20-base` in the contract entry point.

use cosmwasm_std::{Binary, Deps, StdResult};

use crate::custody::{self, TokenMode};
use crate::msg::{
    ConfigResponse, CustodyResponse, ForeignEmitterResponse, ForeignEmittersResponse,
    OwnershipResponse, ProcessedResponse, SentMessageResponse, StatsResponse, SupplyResponse,
};
use crate::registry::{self, ForeignEmitter};
use crate::replay;
use crate::state::{CONFIG, PENDING_OWNER, SENT, STATS};
use crate::supply::{self, SUPPLY_AUDIT};

// ============================================================================
// Core Queries
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        chain_id: config.chain_id,
        relay: config.relay.addr(),
        emitter: Binary::from(config.emitter.to_vec()),
        address_prefix: config.address_prefix,
        batch_nonce: config.batch_nonce,
        token: config.token,
    })
}

pub fn query_ownership(deps: Deps) -> StdResult<OwnershipResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(OwnershipResponse {
        owner: config.owner,
        pending_owner: PENDING_OWNER.may_load(deps.storage)?,
    })
}

/// Circulating supply, cap and lifetime mint/burn totals.
pub fn query_supply(deps: Deps) -> StdResult<SupplyResponse> {
    let token = supply::token_info(deps.storage)?;
    let audit = SUPPLY_AUDIT.load(deps.storage)?;
    Ok(SupplyResponse {
        circulating: token.total_supply,
        max_supply: supply::max_supply(&token),
        total_minted: audit.total_minted,
        total_burned: audit.total_burned,
        decimals: token.decimals,
        mint_authority: token.mint.map(|data| data.minter),
    })
}

pub fn query_custody(deps: Deps) -> StdResult<Option<CustodyResponse>> {
    match CONFIG.load(deps.storage)?.token {
        TokenMode::MintBurn => Ok(None),
        TokenMode::LockRelease { token, decimals } => Ok(Some(CustodyResponse {
            token,
            decimals,
            locked: custody::locked(deps.storage)?,
        })),
    }
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        outbound_count: stats.outbound_count,
        inbound_count: stats.inbound_count,
        total_bridged_out: stats.total_bridged_out,
        total_bridged_in: stats.total_bridged_in,
    })
}

// ============================================================================
// Registry & Message Queries
// ============================================================================

fn emitter_response(emitter: ForeignEmitter) -> ForeignEmitterResponse {
    ForeignEmitterResponse {
        chain: emitter.chain,
        address: Binary::from(emitter.address.to_vec()),
    }
}

pub fn query_foreign_emitter(deps: Deps, chain: u16) -> StdResult<Option<ForeignEmitterResponse>> {
    Ok(registry::lookup(deps.storage, chain)?.map(emitter_response))
}

/// Query registered emitters with pagination.
pub fn query_foreign_emitters(
    deps: Deps,
    start_after: Option<u16>,
    limit: Option<u32>,
) -> StdResult<ForeignEmittersResponse> {
    let emitters = registry::list(deps.storage, start_after, limit)?
        .into_iter()
        .map(emitter_response)
        .collect();
    Ok(ForeignEmittersResponse { emitters })
}

pub fn query_is_processed(deps: Deps, chain: u16, sequence: u64) -> StdResult<ProcessedResponse> {
    let record = replay::load(deps.storage, (chain, sequence))?;
    Ok(ProcessedResponse {
        chain,
        sequence,
        processed: record.is_some(),
        record,
    })
}

pub fn query_sent_message(deps: Deps, sequence: u64) -> StdResult<Option<SentMessageResponse>> {
    Ok(SENT
        .may_load(deps.storage, sequence)?
        .map(|sent| SentMessageResponse {
            sequence,
            sender: sent.sender,
            amount: sent.amount,
            recipient_chain: sent.recipient_chain,
            recipient: sent.recipient,
            payload: sent.payload,
        }))
}
