//! CAT Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Bridge query handlers (cw20 queries go to `cw20-base`)

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;
use cw20_base::allowances::query_allowance;
use cw20_base::contract::{query_balance, query_minter, query_token_info};

use common::RelayContract;

use crate::address_codec::fingerprint;
use crate::custody::{self, TokenMode};
use crate::error::ContractError;
use crate::execute::{
    execute_accept_ownership, execute_bridge_in, execute_bridge_out, execute_burn,
    execute_cancel_ownership_transfer, execute_mint_tokens, execute_propose_ownership,
    execute_register_emitter, execute_token_decrease_allowance,
    execute_token_increase_allowance, execute_token_send, execute_token_transfer,
    execute_token_transfer_from, execute_update_mint_authority,
};
use crate::hash::bytes32_to_hex;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_custody, query_foreign_emitter, query_foreign_emitters,
    query_is_processed, query_ownership, query_sent_message, query_stats, query_supply,
};
use crate::state::{Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, STATS};
use crate::supply::{self, MintAuthority};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if CONFIG.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized);
    }

    if msg.chain_id == 0 {
        return Err(ContractError::InvalidConfig {
            reason: "chain_id 0 is reserved".to_string(),
        });
    }
    if msg.address_prefix.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "address_prefix must not be empty".to_string(),
        });
    }
    if msg.custody_token.is_none() && msg.initial_supply > msg.max_supply {
        return Err(ContractError::InvalidConfig {
            reason: format!(
                "initial_supply {} exceeds max_supply {}",
                msg.initial_supply, msg.max_supply
            ),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender,
    };

    // Bind the relay: it must answer before we trust it
    let relay = RelayContract(deps.api.addr_validate(&msg.relay)?);
    let relay_fee = relay
        .state(&deps.querier)
        .map_err(|err| ContractError::InvalidConfig {
            reason: format!("relay {} is not reachable: {}", relay.addr(), err),
        })?
        .fee;

    let token = match msg.custody_token {
        None => TokenMode::MintBurn,
        Some(token) => {
            if !msg.initial_supply.is_zero() {
                return Err(ContractError::InvalidConfig {
                    reason: "initial_supply must be zero when holding a custody token"
                        .to_string(),
                });
            }
            let token = deps.api.addr_validate(&token)?;
            let decimals =
                custody::bind(&deps.querier, &token).map_err(|err| ContractError::InvalidConfig {
                    reason: format!("custody token {} is not a cw20: {}", token, err),
                })?;
            TokenMode::LockRelease { token, decimals }
        }
    };

    let config = Config {
        owner: owner.clone(),
        chain_id: msg.chain_id,
        relay,
        emitter: fingerprint(&env.contract.address),
        address_prefix: msg.address_prefix,
        batch_nonce: msg.batch_nonce.unwrap_or_default(),
        token,
    };
    CONFIG.save(deps.storage, &config)?;
    STATS.save(deps.storage, &Stats::default())?;

    let response = Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner.as_str())
        .add_attribute("chain_id", config.chain_id.to_string())
        .add_attribute("relay", config.relay.addr())
        .add_attribute("relay_fee", relay_fee.to_string())
        .add_attribute("emitter", bytes32_to_hex(&config.emitter));

    if let TokenMode::LockRelease { token, decimals } = config.token {
        custody::LOCKED.save(deps.storage, &Uint128::zero())?;
        return Ok(response
            .add_attribute("custody_token", token)
            .add_attribute("decimals", decimals.to_string()));
    }

    supply::initialize(
        deps.storage,
        msg.name,
        msg.symbol,
        msg.decimals,
        msg.max_supply,
        owner.clone(),
    )?;
    if !msg.initial_supply.is_zero() {
        supply::mint(
            deps.storage,
            MintAuthority::Holder(&owner),
            &owner,
            msg.initial_supply,
        )?;
    }

    Ok(response
        .add_attribute("max_supply", msg.max_supply.to_string())
        .add_attribute("initial_supply", msg.initial_supply.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Bridge
        ExecuteMsg::BridgeOut {
            amount,
            recipient_chain,
            recipient,
        } => execute_bridge_out(deps, env, info, amount, recipient_chain, recipient),
        ExecuteMsg::BridgeIn { vaa } => execute_bridge_in(deps, env, info, vaa),

        // Owner operations
        ExecuteMsg::RegisterEmitter { chain, address } => {
            execute_register_emitter(deps, info, chain, address)
        }
        ExecuteMsg::ProposeOwnership { new_owner } => {
            execute_propose_ownership(deps, info, new_owner)
        }
        ExecuteMsg::AcceptOwnership {} => execute_accept_ownership(deps, info),
        ExecuteMsg::CancelOwnershipTransfer {} => execute_cancel_ownership_transfer(deps, info),
        ExecuteMsg::UpdateMintAuthority { new_authority } => {
            execute_update_mint_authority(deps, info, new_authority)
        }
        ExecuteMsg::MintTokens { recipient, amount } => {
            execute_mint_tokens(deps, info, recipient, amount)
        }

        // cw20
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_token_transfer(deps, env, info, recipient, amount)
        }
        ExecuteMsg::Burn { amount } => execute_burn(deps, info, amount),
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => execute_token_send(deps, env, info, contract, amount, msg),
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => execute_token_increase_allowance(deps, env, info, spender, amount, expires),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => execute_token_decrease_allowance(deps, env, info, spender, amount, expires),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_token_transfer_from(deps, env, info, owner, recipient, amount),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Ownership {} => to_json_binary(&query_ownership(deps)?),
        QueryMsg::ForeignEmitter { chain } => to_json_binary(&query_foreign_emitter(deps, chain)?),
        QueryMsg::ForeignEmitters { start_after, limit } => {
            to_json_binary(&query_foreign_emitters(deps, start_after, limit)?)
        }
        QueryMsg::IsProcessed { chain, sequence } => {
            to_json_binary(&query_is_processed(deps, chain, sequence)?)
        }
        QueryMsg::Supply {} => to_json_binary(&query_supply(deps)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
        QueryMsg::SentMessage { sequence } => {
            to_json_binary(&query_sent_message(deps, sequence)?)
        }
        QueryMsg::Custody {} => to_json_binary(&query_custody(deps)?),

        // cw20
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Minter {} => to_json_binary(&query_minter(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
