//! Custody of an existing cw20 for lock/release deployments.
//!
//! A bridge that fronts a token it does not issue never mints or burns.
//! Bridge-out pulls the holder's tokens into this contract with
//! `TransferFrom`; bridge-in pays them back out with `Transfer`. `LOCKED`
//! is the pool inbound transfers may draw on, and only grows by amounts
//! this contract pulled in itself.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdError, StdResult, Storage, Uint128,
    WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg, TokenInfoResponse};
use cw_storage_plus::Item;

use crate::error::ContractError;
use crate::state::CONFIG;

/// How this deployment moves value on and off chain
#[cw_serde]
pub enum TokenMode {
    /// This contract is the token: bridge-out burns, bridge-in mints
    MintBurn,
    /// An existing cw20 held in custody: bridge-out locks, bridge-in releases
    LockRelease { token: Addr, decimals: u8 },
}

/// Custodied amount available for release
pub const LOCKED: Item<Uint128> = Item::new("locked");

/// Fail unless this contract issues its own token.
pub fn ensure_issued(storage: &dyn Storage) -> Result<(), ContractError> {
    match CONFIG.load(storage)?.token {
        TokenMode::MintBurn => Ok(()),
        TokenMode::LockRelease { .. } => Err(ContractError::CustodyMode),
    }
}

/// Check that `token` answers as a cw20 and return its decimals.
pub fn bind(querier: &QuerierWrapper, token: &Addr) -> StdResult<u8> {
    let info: TokenInfoResponse = querier.query_wasm_smart(token, &Cw20QueryMsg::TokenInfo {})?;
    Ok(info.decimals)
}

pub fn locked(storage: &dyn Storage) -> StdResult<Uint128> {
    Ok(LOCKED.may_load(storage)?.unwrap_or_default())
}

/// Reserve `amount` of `holder`'s tokens for custody.
///
/// Returns the `TransferFrom` that moves them and the new locked total. The
/// holder must have granted this contract an allowance; if the transfer
/// fails the whole call reverts, `LOCKED` included.
pub fn lock(
    storage: &mut dyn Storage,
    querier: &QuerierWrapper,
    token: &Addr,
    holder: &Addr,
    custodian: &Addr,
    amount: Uint128,
) -> Result<(CosmosMsg, Uint128), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let BalanceResponse { balance } = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: holder.to_string(),
        },
    )?;
    if balance < amount {
        return Err(ContractError::InsufficientBalance {
            balance,
            required: amount,
        });
    }

    let total = locked(storage)?
        .checked_add(amount)
        .map_err(StdError::from)?;
    LOCKED.save(storage, &total)?;

    let msg = WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: holder.to_string(),
            recipient: custodian.to_string(),
            amount,
        })?,
        funds: vec![],
    };
    Ok((msg.into(), total))
}

/// Pay `amount` out of custody to `recipient`.
///
/// Fails with `InsufficientBalance` when custody holds less than `amount`;
/// returns the `Transfer` and the remaining locked total.
pub fn release(
    storage: &mut dyn Storage,
    token: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> Result<(CosmosMsg, Uint128), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let held = locked(storage)?;
    let remaining = held
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientBalance {
            balance: held,
            required: amount,
        })?;
    LOCKED.save(storage, &remaining)?;

    let msg = WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    };
    Ok((msg.into(), remaining))
}
