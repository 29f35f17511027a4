//! Incoming transfer handler (BridgeIn).
//!
//! Anyone may submit a signed attestation; authenticity comes from the
//! relay's verification and the emitter registry, never from the caller.
//! Every check that needs no state change runs before the replay marker is
//! written. The marker precedes the credit, so a failed credit rolls the
//! marker back with it and the message stays claimable.
//!
//! The credit is a mint for an issued token, or a release from custody for
//! a held one.

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response, StdError, Uint128};

use crate::address_codec::recipient_from_bytes32;
use crate::custody::{self, TokenMode};
use crate::decimals::renormalize;
use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, message_id};
use crate::payload::TransferPayload;
use crate::registry;
use crate::replay::{self, Received};
use crate::state::{CONFIG, STATS};
use crate::supply::{self, MintAuthority};

/// Execute handler for applying a verified inbound transfer
pub fn execute_bridge_in(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    vaa: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let parsed = config
        .relay
        .verify_vaa(&deps.querier, &vaa, env.block.time.seconds())
        .map_err(|err| ContractError::InvalidAttestation {
            reason: err.to_string(),
        })?;

    let payload = TransferPayload::decode(parsed.payload.as_slice())?;

    // Emitter must be exactly the one registered for its chain
    let emitter_chain = parsed.emitter_chain;
    let emitter = parsed
        .emitter_address_bytes()
        .map_err(|_| ContractError::UnknownEmitter {
            chain: emitter_chain,
        })?;
    if !registry::authorize(deps.storage, emitter_chain, &emitter)? {
        return Err(ContractError::UnknownEmitter {
            chain: emitter_chain,
        });
    }

    if payload.to_chain != config.chain_id {
        return Err(ContractError::WrongDestination {
            expected: config.chain_id,
            got: payload.to_chain,
        });
    }

    let vaa_hash = parsed
        .hash_bytes()
        .map_err(|err| ContractError::InvalidAttestation {
            reason: err.to_string(),
        })?;
    replay::check_and_consume(
        deps.storage,
        (emitter_chain, parsed.sequence),
        &Received {
            vaa_hash,
            payload: parsed.payload.clone(),
            height: env.block.height,
        },
    )?;

    // Local decimals plus what the credit is measured against
    let (decimals, held, ceiling) = match &config.token {
        TokenMode::MintBurn => {
            let token = supply::token_info(deps.storage)?;
            (token.decimals, token.total_supply, supply::max_supply(&token))
        }
        TokenMode::LockRelease { decimals, .. } => {
            (*decimals, custody::locked(deps.storage)?, Uint128::MAX)
        }
    };
    let credit = renormalize(payload.amount, payload.decimals, decimals, held, ceiling)?;

    let recipient = recipient_from_bytes32(&payload.to_address, &config.address_prefix)
        .map_err(|err| ContractError::InvalidRecipient {
            reason: err.to_string(),
        })?;

    // A credit truncated to zero still consumes the message
    let (release, remaining) = match &config.token {
        _ if credit.amount.is_zero() => (None, held),
        TokenMode::MintBurn => {
            let circulating =
                supply::mint(deps.storage, MintAuthority::Bridge, &recipient, credit.amount)?;
            (None, circulating)
        }
        TokenMode::LockRelease { token, .. } => {
            let (transfer, locked) =
                custody::release(deps.storage, token, &recipient, credit.amount)?;
            (Some(transfer), locked)
        }
    };
    let ledger = match &config.token {
        TokenMode::MintBurn => "circulating",
        TokenMode::LockRelease { .. } => "locked",
    };

    let mut stats = STATS.load(deps.storage)?;
    stats.inbound_count += 1;
    stats.total_bridged_in = stats
        .total_bridged_in
        .checked_add(credit.amount)
        .map_err(StdError::from)?;
    STATS.save(deps.storage, &stats)?;

    let mut response = Response::new()
        .add_messages(release)
        .add_attribute("action", "bridge_in")
        .add_attribute(
            "message_id",
            message_id(emitter_chain, &emitter, parsed.sequence),
        )
        .add_attribute("emitter_chain", emitter_chain.to_string())
        .add_attribute("sequence", parsed.sequence.to_string())
        .add_attribute("vaa_hash", bytes32_to_hex(&vaa_hash))
        .add_attribute("recipient", recipient)
        .add_attribute("amount", payload.amount.to_string())
        .add_attribute("credited", credit.amount.to_string())
        .add_attribute(ledger, remaining.to_string());
    if credit.lost_precision() {
        response = response.add_attribute("precision_loss", credit.dust.to_string());
    }
    Ok(response)
}
