//! Outgoing transfer handler (BridgeOut).
//!
//! Debits the sender and hands a transfer payload to the relay. The debit
//! is a burn for an issued token, or a `TransferFrom` into custody for a
//! held one. Custody transfer and relay call are dispatched as plain
//! messages in that order, so a failure in either reverts the debit along
//! with everything else in the transaction.

use cosmwasm_std::{
    to_json_binary, Binary, Coin, DepsMut, Env, MessageInfo, Response, StdError, Uint128, Uint256,
};

use crate::custody::{self, TokenMode};
use crate::error::ContractError;
use crate::hash::message_id;
use crate::msg::BridgeOutResponse;
use crate::payload::TransferPayload;
use crate::registry;
use crate::state::{SentMessage, CONFIG, SENT, STATS};
use crate::supply;

/// Execute handler for bridging tokens out to a foreign chain
pub fn execute_bridge_out(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    recipient_chain: u16,
    recipient: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let to_address: [u8; 32] =
        recipient
            .as_slice()
            .try_into()
            .map_err(|_| ContractError::InvalidRecipient {
                reason: format!("expected 32 bytes, got {}", recipient.len()),
            })?;
    if to_address.iter().all(|&b| b == 0) {
        return Err(ContractError::InvalidRecipient {
            reason: "zero address".to_string(),
        });
    }

    if recipient_chain == config.chain_id {
        // expected 0: any chain other than this one
        return Err(ContractError::WrongDestination {
            expected: 0,
            got: recipient_chain,
        });
    }

    if registry::lookup(deps.storage, recipient_chain)?.is_none() {
        return Err(ContractError::UnknownEmitter {
            chain: recipient_chain,
        });
    }

    // Debit first; nothing below runs if the holder cannot cover it
    let (debit, decimals, ledger) = match &config.token {
        TokenMode::MintBurn => {
            let circulating = supply::burn_or_lock(deps.storage, &info.sender, amount)?;
            let decimals = supply::token_info(deps.storage)?.decimals;
            (None, decimals, ("circulating", circulating))
        }
        TokenMode::LockRelease { token, decimals } => {
            let (transfer, locked) = custody::lock(
                deps.storage,
                &deps.querier,
                token,
                &info.sender,
                &env.contract.address,
                amount,
            )?;
            (Some(transfer), *decimals, ("locked", locked))
        }
    };

    // Relay fee
    let fee = config.relay.state(&deps.querier)?.fee;
    let paid = info
        .funds
        .iter()
        .find(|coin| coin.denom == fee.denom)
        .map(|coin| coin.amount)
        .unwrap_or_default();
    if paid < fee.amount {
        return Err(ContractError::InsufficientFee {
            got: Coin::new(paid.u128(), fee.denom.clone()),
            expected: fee,
        });
    }

    let sequence = config
        .relay
        .next_sequence(&deps.querier, &env.contract.address)?;

    let payload = TransferPayload {
        amount: Uint256::from(amount),
        token_address: config.emitter,
        token_chain: config.chain_id,
        to_address,
        to_chain: recipient_chain,
        decimals,
    };
    let message = Binary::from(payload.encode().to_vec());

    let relay_msg =
        config
            .relay
            .post_message(message.clone(), config.batch_nonce, info.funds.clone())?;

    SENT.save(
        deps.storage,
        sequence,
        &SentMessage {
            sender: info.sender.clone(),
            amount,
            recipient_chain,
            recipient: recipient.clone(),
            payload: message,
        },
    )?;

    let mut stats = STATS.load(deps.storage)?;
    stats.outbound_count += 1;
    stats.total_bridged_out = stats
        .total_bridged_out
        .checked_add(amount)
        .map_err(StdError::from)?;
    STATS.save(deps.storage, &stats)?;

    Ok(Response::new()
        .add_messages(debit)
        .add_message(relay_msg)
        .set_data(to_json_binary(&BridgeOutResponse { sequence })?)
        .add_attribute("action", "bridge_out")
        .add_attribute("sequence", sequence.to_string())
        .add_attribute(
            "message_id",
            message_id(config.chain_id, &config.emitter, sequence),
        )
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", recipient.to_base64())
        .add_attribute("recipient_chain", recipient_chain.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute(ledger.0, ledger.1.to_string()))
}
