//! Admin operations handlers.
//!
//! This module handles:
//! - Ownership transfer (propose/accept/cancel)
//! - Mint authority handover
//!
//! Ownership moves only when both parties sign: the owner proposes, the
//! nominee accepts. Submitting both messages in one transaction makes the
//! handover atomic. A minter role still held by the outgoing owner moves
//! with ownership; a role already handed elsewhere stays where it is.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{CONFIG, PENDING_OWNER};
use crate::custody;
use crate::supply;

// ============================================================================
// Ownership Transfer
// ============================================================================

/// Nominate a new owner, replacing any earlier nomination.
pub fn execute_propose_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let new_owner = deps.api.addr_validate(&new_owner)?;
    PENDING_OWNER.save(deps.storage, &new_owner)?;

    Ok(Response::new()
        .add_attribute("action", "propose_ownership")
        .add_attribute("owner", config.owner)
        .add_attribute("pending_owner", new_owner))
}

/// Accept a pending nomination. Only the nominee may call this.
///
/// The outgoing owner keeps no residual authority: if they still hold the
/// minter role it passes to the new owner in the same call.
pub fn execute_accept_ownership(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let pending = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingTransfer)?;

    if info.sender != pending {
        return Err(ContractError::Unauthorized);
    }

    let mut config = CONFIG.load(deps.storage)?;
    let previous = std::mem::replace(&mut config.owner, pending);
    CONFIG.save(deps.storage, &config)?;
    PENDING_OWNER.remove(deps.storage);

    let mut response = Response::new()
        .add_attribute("action", "accept_ownership")
        .add_attribute("previous_owner", previous.as_str())
        .add_attribute("owner", config.owner.as_str());

    if supply::mint_authority(deps.storage)?.as_ref() == Some(&previous) {
        supply::set_mint_authority(deps.storage, config.owner.clone())?;
        response = response.add_attribute("mint_authority", config.owner);
    }

    Ok(response)
}

pub fn execute_cancel_ownership_transfer(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new().add_attribute("action", "cancel_ownership_transfer"))
}

// ============================================================================
// Mint Authority
// ============================================================================

/// Move the cw20 minter role. The supply cap is unaffected.
pub fn execute_update_mint_authority(
    deps: DepsMut,
    info: MessageInfo,
    new_authority: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    custody::ensure_issued(deps.storage)?;
    let new_authority = deps.api.addr_validate(&new_authority)?;
    supply::set_mint_authority(deps.storage, new_authority.clone())?;

    Ok(Response::new()
        .add_attribute("action", "update_mint_authority")
        .add_attribute("mint_authority", new_authority))
}
