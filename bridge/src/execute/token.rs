//! cw20 token handlers.
//!
//! Transfers and allowances are delegated to `cw20-base`; they move
//! balances without touching supply. Anything that changes supply goes
//! through [`crate::supply`] so the cap and audit counters hold.
//!
//! None of this exists in a lock/release deployment, which issues no token.

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response, Uint128};
use cw20::Expiration;
use cw20_base::allowances::{
    execute_decrease_allowance, execute_increase_allowance, execute_transfer_from,
};
use cw20_base::contract::{execute_send, execute_transfer};

use crate::custody::ensure_issued;
use crate::error::ContractError;
use crate::supply::{self, MintAuthority};

// ============================================================================
// Supply Changes
// ============================================================================

/// Mint under the cw20 minter role.
pub fn execute_mint_tokens(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_issued(deps.storage)?;
    let recipient = deps.api.addr_validate(&recipient)?;
    let circulating = supply::mint(
        deps.storage,
        MintAuthority::Holder(&info.sender),
        &recipient,
        amount,
    )?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("to", recipient)
        .add_attribute("amount", amount)
        .add_attribute("circulating", circulating))
}

pub fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_issued(deps.storage)?;
    let circulating = supply::burn_or_lock(deps.storage, &info.sender, amount)?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("from", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("circulating", circulating))
}

// ============================================================================
// Transfers & Allowances
// ============================================================================

pub fn execute_token_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_issued(deps.storage)?;
    Ok(execute_transfer(deps, env, info, recipient, amount)?)
}

pub fn execute_token_send(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    contract: String,
    amount: Uint128,
    msg: Binary,
) -> Result<Response, ContractError> {
    ensure_issued(deps.storage)?;
    Ok(execute_send(deps, env, info, contract, amount, msg)?)
}

pub fn execute_token_increase_allowance(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
    expires: Option<Expiration>,
) -> Result<Response, ContractError> {
    ensure_issued(deps.storage)?;
    Ok(execute_increase_allowance(
        deps, env, info, spender, amount, expires,
    )?)
}

pub fn execute_token_decrease_allowance(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
    expires: Option<Expiration>,
) -> Result<Response, ContractError> {
    ensure_issued(deps.storage)?;
    Ok(execute_decrease_allowance(
        deps, env, info, spender, amount, expires,
    )?)
}

pub fn execute_token_transfer_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_issued(deps.storage)?;
    Ok(execute_transfer_from(
        deps, env, info, owner, recipient, amount,
    )?)
}
