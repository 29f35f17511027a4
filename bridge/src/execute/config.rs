//! Foreign emitter registration.

use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::hash::bytes32_to_hex;
use crate::registry;
use crate::state::CONFIG;

/// Register or replace the trusted emitter for a foreign chain (owner only).
pub fn execute_register_emitter(
    deps: DepsMut,
    info: MessageInfo,
    chain: u16,
    address: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let address: [u8; 32] =
        address
            .as_slice()
            .try_into()
            .map_err(|_| ContractError::InvalidEmitter {
                reason: format!("address must be 32 bytes, got {}", address.len()),
            })?;
    registry::validate(chain, &address, config.chain_id)?;

    let previous = registry::register(deps.storage, chain, address)?;

    let mut response = Response::new()
        .add_attribute("action", "register_emitter")
        .add_attribute("chain", chain.to_string())
        .add_attribute("emitter", bytes32_to_hex(&address));
    if let Some(previous) = previous {
        response = response.add_attribute("replaced", bytes32_to_hex(&previous));
    }
    Ok(response)
}
