//! Cross-chain decimal renormalization.
//!
//! Payload amounts travel in the origin token's decimals. Before crediting,
//! they are rescaled to local decimals. Scaling down truncates toward zero
//! and reports the discarded remainder; it never rounds up.

use cosmwasm_std::{Uint128, Uint256};

use crate::error::ContractError;

/// Result of rescaling a payload amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renormalized {
    /// Amount to credit, in local decimals
    pub amount: Uint128,
    /// Truncated remainder, in origin decimals
    pub dust: Uint256,
}

impl Renormalized {
    pub fn lost_precision(&self) -> bool {
        !self.dust.is_zero()
    }
}

/// Rescale `amount` from `from_decimals` to `to_decimals`.
///
/// Fails with `SupplyExceeded` when the scaled amount does not fit the
/// 128-bit ledger, since no cap can admit it.
pub fn renormalize(
    amount: Uint256,
    from_decimals: u8,
    to_decimals: u8,
    circulating: Uint128,
    max_supply: Uint128,
) -> Result<Renormalized, ContractError> {
    let exceeded = |amount: Uint256| ContractError::SupplyExceeded {
        circulating,
        amount,
        max_supply,
    };

    let (scaled, dust) = if from_decimals > to_decimals {
        let exp = u32::from(from_decimals - to_decimals);
        match Uint256::from(10u128).checked_pow(exp) {
            Ok(divisor) => (amount / divisor, amount % divisor),
            // Divisor exceeds any uint256, so nothing survives the division.
            Err(_) => (Uint256::zero(), amount),
        }
    } else if from_decimals < to_decimals {
        let exp = u32::from(to_decimals - from_decimals);
        let scaled = Uint256::from(10u128)
            .checked_pow(exp)
            .and_then(|multiplier| amount.checked_mul(multiplier));
        match scaled {
            Ok(scaled) => (scaled, Uint256::zero()),
            Err(_) if amount.is_zero() => (Uint256::zero(), Uint256::zero()),
            // wider than uint256: saturate so the ledger width check rejects it
            Err(_) => (Uint256::MAX, Uint256::zero()),
        }
    } else {
        (amount, Uint256::zero())
    };

    let amount = Uint128::try_from(scaled).map_err(|_| exceeded(scaled))?;
    Ok(Renormalized { amount, dust })
}
