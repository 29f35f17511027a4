//! Supply ledger over the cw20 token state.
//!
//! Balances and token info live in the `cw20-base` storage layout so the
//! standard cw20 handlers and queries keep working. Every supply change goes
//! through [`mint`] or [`burn_or_lock`], which enforce the cap and keep the
//! audit counters in step with `total_supply`:
//!
//! `circulating == total_minted - total_burned`

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdError, StdResult, Storage, Uint128};
use cw20_base::state::{MinterData, TokenInfo, BALANCES, TOKEN_INFO};
use cw_storage_plus::Item;

use crate::error::ContractError;

/// Lifetime mint/burn totals
#[cw_serde]
#[derive(Default)]
pub struct SupplyAudit {
    pub total_minted: Uint128,
    pub total_burned: Uint128,
}

pub const SUPPLY_AUDIT: Item<SupplyAudit> = Item::new("supply_audit");

/// Who is asking for a mint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MintAuthority<'a> {
    /// An account claiming to hold the cw20 minter role
    Holder(&'a Addr),
    /// The bridge itself, crediting a verified inbound transfer
    Bridge,
}

/// Create the token. Decimals and cap are fixed from here on.
pub fn initialize(
    storage: &mut dyn Storage,
    name: String,
    symbol: String,
    decimals: u8,
    max_supply: Uint128,
    minter: Addr,
) -> Result<(), ContractError> {
    if TOKEN_INFO.may_load(storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized);
    }

    TOKEN_INFO.save(
        storage,
        &TokenInfo {
            name,
            symbol,
            decimals,
            total_supply: Uint128::zero(),
            mint: Some(MinterData {
                minter,
                cap: Some(max_supply),
            }),
        },
    )?;
    SUPPLY_AUDIT.save(storage, &SupplyAudit::default())?;
    Ok(())
}

/// Credit `amount` to `recipient`, returning the new circulating supply.
pub fn mint(
    storage: &mut dyn Storage,
    authority: MintAuthority,
    recipient: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let mut info = TOKEN_INFO.load(storage)?;
    let (minter, max_supply) = match &info.mint {
        Some(data) => (data.minter.clone(), data.cap.unwrap_or(Uint128::MAX)),
        None => return Err(ContractError::Unauthorized),
    };

    if let MintAuthority::Holder(sender) = authority {
        if *sender != minter {
            return Err(ContractError::Unauthorized);
        }
    }

    let circulating = info
        .total_supply
        .checked_add(amount)
        .ok()
        .filter(|total| *total <= max_supply)
        .ok_or_else(|| ContractError::SupplyExceeded {
            circulating: info.total_supply,
            amount: amount.into(),
            max_supply,
        })?;

    info.total_supply = circulating;
    TOKEN_INFO.save(storage, &info)?;

    BALANCES.update(storage, recipient, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;

    SUPPLY_AUDIT.update(storage, |mut audit| -> StdResult<_> {
        audit.total_minted = audit.total_minted.checked_add(amount)?;
        Ok(audit)
    })?;

    Ok(circulating)
}

/// Remove `amount` of `holder`'s tokens from circulation, returning the new
/// circulating supply.
pub fn burn_or_lock(
    storage: &mut dyn Storage,
    holder: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let balance = BALANCES.may_load(storage, holder)?.unwrap_or_default();
    if balance < amount {
        return Err(ContractError::InsufficientBalance {
            balance,
            required: amount,
        });
    }
    BALANCES.save(storage, holder, &(balance - amount))?;

    let mut info = TOKEN_INFO.load(storage)?;
    info.total_supply = info
        .total_supply
        .checked_sub(amount)
        .map_err(StdError::from)?;
    TOKEN_INFO.save(storage, &info)?;

    SUPPLY_AUDIT.update(storage, |mut audit| -> StdResult<_> {
        audit.total_burned = audit.total_burned.checked_add(amount)?;
        Ok(audit)
    })?;

    Ok(info.total_supply)
}

/// Hand the minter role to `new_minter`, keeping the cap.
pub fn set_mint_authority(storage: &mut dyn Storage, new_minter: Addr) -> StdResult<()> {
    TOKEN_INFO.update(storage, |mut info| -> StdResult<_> {
        let cap = info.mint.as_ref().and_then(|data| data.cap);
        info.mint = Some(MinterData {
            minter: new_minter,
            cap,
        });
        Ok(info)
    })?;
    Ok(())
}

/// Current holder of the minter role. `None` when the token has no mint
/// authority, or when this contract holds no token of its own.
pub fn mint_authority(storage: &dyn Storage) -> StdResult<Option<Addr>> {
    Ok(TOKEN_INFO
        .may_load(storage)?
        .and_then(|info| info.mint)
        .map(|data| data.minter))
}

pub fn token_info(storage: &dyn Storage) -> StdResult<TokenInfo> {
    TOKEN_INFO.load(storage)
}

pub fn max_supply(info: &TokenInfo) -> Uint128 {
    info.mint
        .as_ref()
        .and_then(|data| data.cap)
        .unwrap_or(Uint128::MAX)
}
