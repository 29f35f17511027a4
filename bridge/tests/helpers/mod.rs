//! Shared test setup: a mock relay contract plus bridge deployment helpers.
//!
//! The mock relay keeps per-emitter sequences, records every posted message
//! and "verifies" attestations that are just JSON with a `signed` flag.
#![allow(dead_code)]

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    coin, coins, from_json, to_json_binary, Addr, Binary, Coin, Deps, DepsMut, Empty, Env,
    MessageInfo, Order, Response, StdError, StdResult, Uint128,
};
use cw20::{Cw20Coin, Cw20QueryMsg};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use cw_storage_plus::{Item, Map};

use cat_bridge::address_codec::{decode_bech32_address, to_bytes32};
use cat_bridge::keccak256;
use cat_bridge::msg::{
    ConfigResponse, CustodyResponse, ExecuteMsg, InstantiateMsg, QueryMsg, SupplyResponse,
};
use common::{ParsedVaa, RelayStateResponse, SequenceResponse};

pub const FEE_DENOM: &str = "uluna";
pub const RELAY_FEE: u128 = 100;

/// A real bech32 account, so inbound credits can be addressed to it
pub const TERRA_RECIPIENT: &str = "terra1x46rqay4d3cssq8gxxvqz8xt6nwlz4td20k38v";

// ============================================================================
// Mock Relay
// ============================================================================

#[cw_serde]
pub struct RelayInstantiateMsg {
    pub fee: Coin,
}

#[cw_serde]
pub enum RelayExecuteMsg {
    PostMessage { message: Binary, nonce: u32 },
    SetPaused { paused: bool },
}

#[cw_serde]
pub enum RelayQueryMsg {
    GetState {},
    NextSequence { emitter: String },
    VerifyVaa { vaa: Binary, block_time: u64 },
    PostedMessages {},
}

#[cw_serde]
pub struct PostedMessage {
    pub emitter: Addr,
    pub sequence: u64,
    pub nonce: u32,
    pub payload: Binary,
}

/// Attestation body understood by the mock relay
#[cw_serde]
pub struct TestVaa {
    pub emitter_chain: u16,
    pub emitter_address: Binary,
    pub sequence: u64,
    pub payload: Binary,
    pub signed: bool,
}

const FEE: Item<Coin> = Item::new("fee");
const PAUSED: Item<bool> = Item::new("paused");
const SEQUENCES: Map<&Addr, u64> = Map::new("sequences");
const POSTED: Map<u64, PostedMessage> = Map::new("posted");
const POSTED_COUNT: Item<u64> = Item::new("posted_count");

fn relay_instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: RelayInstantiateMsg,
) -> StdResult<Response> {
    FEE.save(deps.storage, &msg.fee)?;
    PAUSED.save(deps.storage, &false)?;
    POSTED_COUNT.save(deps.storage, &0)?;
    Ok(Response::new())
}

fn relay_execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: RelayExecuteMsg,
) -> StdResult<Response> {
    match msg {
        RelayExecuteMsg::PostMessage { message, nonce } => {
            if PAUSED.load(deps.storage)? {
                return Err(StdError::generic_err("relay paused"));
            }

            let fee = FEE.load(deps.storage)?;
            let paid = info
                .funds
                .iter()
                .find(|c| c.denom == fee.denom)
                .map(|c| c.amount)
                .unwrap_or_default();
            if paid < fee.amount {
                return Err(StdError::generic_err("relay fee not paid"));
            }

            let sequence = SEQUENCES
                .may_load(deps.storage, &info.sender)?
                .unwrap_or_default();
            SEQUENCES.save(deps.storage, &info.sender, &(sequence + 1))?;

            let count = POSTED_COUNT.load(deps.storage)?;
            POSTED.save(
                deps.storage,
                count,
                &PostedMessage {
                    emitter: info.sender,
                    sequence,
                    nonce,
                    payload: message,
                },
            )?;
            POSTED_COUNT.save(deps.storage, &(count + 1))?;

            Ok(Response::new().add_attribute("message.sequence", sequence.to_string()))
        }
        RelayExecuteMsg::SetPaused { paused } => {
            PAUSED.save(deps.storage, &paused)?;
            Ok(Response::new())
        }
    }
}

fn relay_query(deps: Deps, _env: Env, msg: RelayQueryMsg) -> StdResult<Binary> {
    match msg {
        RelayQueryMsg::GetState {} => to_json_binary(&RelayStateResponse {
            fee: FEE.load(deps.storage)?,
        }),
        RelayQueryMsg::NextSequence { emitter } => {
            let emitter = deps.api.addr_validate(&emitter)?;
            to_json_binary(&SequenceResponse {
                sequence: SEQUENCES.may_load(deps.storage, &emitter)?.unwrap_or_default(),
            })
        }
        RelayQueryMsg::VerifyVaa { vaa, .. } => {
            let body: TestVaa = from_json(&vaa)?;
            if !body.signed {
                return Err(StdError::generic_err("VAA not signed by quorum"));
            }
            to_json_binary(&ParsedVaa {
                version: 1,
                guardian_set_index: 0,
                timestamp: 0,
                nonce: 0,
                len_signers: 1,
                emitter_chain: body.emitter_chain,
                emitter_address: body.emitter_address,
                sequence: body.sequence,
                consistency_level: 1,
                payload: body.payload,
                hash: Binary::from(keccak256(vaa.as_slice()).to_vec()),
            })
        }
        RelayQueryMsg::PostedMessages {} => {
            let posted = POSTED
                .range(deps.storage, None, None, Order::Ascending)
                .map(|item| item.map(|(_, msg)| msg))
                .collect::<StdResult<Vec<_>>>()?;
            to_json_binary(&posted)
        }
    }
}

pub fn contract_relay() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(relay_execute, relay_instantiate, relay_query))
}

pub fn contract_bridge() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cat_bridge::contract::execute,
        cat_bridge::contract::instantiate,
        cat_bridge::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Deployment
// ============================================================================

pub struct Suite {
    pub app: App,
    pub owner: Addr,
    pub user: Addr,
    pub relay: Addr,
    pub bridge_code: u64,
}

pub struct BridgeParams {
    pub chain_id: u16,
    pub decimals: u8,
    pub max_supply: u128,
    pub initial_supply: u128,
}

impl Default for BridgeParams {
    fn default() -> Self {
        Self {
            chain_id: 3,
            decimals: 6,
            max_supply: 1_000_000_000_000,
            initial_supply: 1_000_000_000,
        }
    }
}

/// App with funded accounts, a relay and the bridge code stored
pub fn setup_suite() -> Suite {
    let mut app = App::default();

    let owner = Addr::unchecked("terra1owner");
    let user = Addr::unchecked("terra1user");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &owner, coins(10_000_000, FEE_DENOM))
            .unwrap();
        router
            .bank
            .init_balance(storage, &user, coins(10_000_000, FEE_DENOM))
            .unwrap();
    });

    let relay_code = app.store_code(contract_relay());
    let relay = app
        .instantiate_contract(
            relay_code,
            owner.clone(),
            &RelayInstantiateMsg {
                fee: coin(RELAY_FEE, FEE_DENOM),
            },
            &[],
            "relay",
            None,
        )
        .unwrap();

    let bridge_code = app.store_code(contract_bridge());

    Suite {
        app,
        owner,
        user,
        relay,
        bridge_code,
    }
}

pub fn instantiate_bridge(suite: &mut Suite, params: BridgeParams) -> Addr {
    suite.app
        .instantiate_contract(
            suite.bridge_code,
            suite.owner.clone(),
            &InstantiateMsg {
                name: "Cat Token".to_string(),
                symbol: "CAT".to_string(),
                decimals: params.decimals,
                max_supply: Uint128::new(params.max_supply),
                initial_supply: Uint128::new(params.initial_supply),
                owner: None,
                chain_id: params.chain_id,
                relay: suite.relay.to_string(),
                address_prefix: "terra".to_string(),
                batch_nonce: None,
                custody_token: None,
            },
            &[],
            "cat-bridge",
            Some(suite.owner.to_string()),
        )
        .unwrap()
}

/// Plain cw20-base, for deployments that hold an existing token
pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

/// External cw20 with `decimals`, `holder` owning `balance` of it
pub fn instantiate_cw20(suite: &mut Suite, decimals: u8, holder: &Addr, balance: u128) -> Addr {
    let code = suite.app.store_code(contract_cw20());
    suite.app
        .instantiate_contract(
            code,
            suite.owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Wrapped Cat".to_string(),
                symbol: "WCAT".to_string(),
                decimals,
                initial_balances: vec![Cw20Coin {
                    address: holder.to_string(),
                    amount: Uint128::new(balance),
                }],
                mint: None,
                marketing: None,
            },
            &[],
            "wcat",
            None,
        )
        .unwrap()
}

pub fn custody_instantiate_msg(suite: &Suite, chain_id: u16, token: &Addr) -> InstantiateMsg {
    InstantiateMsg {
        name: "Cat Token".to_string(),
        symbol: "CAT".to_string(),
        decimals: 0,
        max_supply: Uint128::zero(),
        initial_supply: Uint128::zero(),
        owner: None,
        chain_id,
        relay: suite.relay.to_string(),
        address_prefix: "terra".to_string(),
        batch_nonce: None,
        custody_token: Some(token.to_string()),
    }
}

/// Bridge that locks and releases `token` instead of issuing its own
pub fn instantiate_custody_bridge(suite: &mut Suite, chain_id: u16, token: &Addr) -> Addr {
    let msg = custody_instantiate_msg(suite, chain_id, token);
    suite.app
        .instantiate_contract(
            suite.bridge_code,
            suite.owner.clone(),
            &msg,
            &[],
            "cat-bridge-custody",
            Some(suite.owner.to_string()),
        )
        .unwrap()
}

pub fn cw20_balance(suite: &Suite, token: &Addr, address: &str) -> Uint128 {
    let res: cw20::BalanceResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            token,
            &Cw20QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap();
    res.balance
}

pub fn custody(suite: &Suite, bridge: &Addr) -> Option<CustodyResponse> {
    suite.app
        .wrap()
        .query_wasm_smart(bridge, &QueryMsg::Custody {})
        .unwrap()
}

/// Single-deployment setup: bridge on chain 3, user holding 1_000_000 tokens
pub fn setup() -> (Suite, Addr) {
    let mut suite = setup_suite();
    let bridge = instantiate_bridge(&mut suite, BridgeParams::default());

    suite.app
        .execute_contract(
            suite.owner.clone(),
            bridge.clone(),
            &ExecuteMsg::Transfer {
                recipient: suite.user.to_string(),
                amount: Uint128::new(1_000_000),
            },
            &[],
        )
        .unwrap();

    (suite, bridge)
}

// ============================================================================
// Actions & Queries
// ============================================================================

pub fn register_emitter(suite: &mut Suite, bridge: &Addr, chain: u16, address: [u8; 32]) {
    suite.app
        .execute_contract(
            suite.owner.clone(),
            bridge.clone(),
            &ExecuteMsg::RegisterEmitter {
                chain,
                address: Binary::from(address.to_vec()),
            },
            &[],
        )
        .unwrap();
}

pub fn set_relay_paused(suite: &mut Suite, paused: bool) {
    suite.app
        .execute_contract(
            suite.owner.clone(),
            suite.relay.clone(),
            &RelayExecuteMsg::SetPaused { paused },
            &[],
        )
        .unwrap();
}

pub fn fee() -> Vec<Coin> {
    coins(RELAY_FEE, FEE_DENOM)
}

pub fn vaa(
    emitter_chain: u16,
    emitter_address: [u8; 32],
    sequence: u64,
    payload: &[u8],
    signed: bool,
) -> Binary {
    to_json_binary(&TestVaa {
        emitter_chain,
        emitter_address: Binary::from(emitter_address.to_vec()),
        sequence,
        payload: Binary::from(payload.to_vec()),
        signed,
    })
    .unwrap()
}

pub fn signed_vaa(
    emitter_chain: u16,
    emitter_address: [u8; 32],
    sequence: u64,
    payload: &[u8],
) -> Binary {
    vaa(emitter_chain, emitter_address, sequence, payload, true)
}

pub fn posted_messages(suite: &Suite) -> Vec<PostedMessage> {
    suite.app
        .wrap()
        .query_wasm_smart(&suite.relay, &RelayQueryMsg::PostedMessages {})
        .unwrap()
}

/// 32-byte destination form of a bech32 account on this chain
pub fn local_recipient(addr: &str) -> [u8; 32] {
    to_bytes32(&decode_bech32_address(addr).unwrap()).unwrap()
}

pub fn emitter_of(suite: &Suite, bridge: &Addr) -> [u8; 32] {
    let config: ConfigResponse = suite
        .app
        .wrap()
        .query_wasm_smart(bridge, &QueryMsg::Config {})
        .unwrap();
    config.emitter.as_slice().try_into().unwrap()
}

pub fn balance(suite: &Suite, bridge: &Addr, address: &str) -> Uint128 {
    let res: cw20::BalanceResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            bridge,
            &QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap();
    res.balance
}

pub fn supply(suite: &Suite, bridge: &Addr) -> SupplyResponse {
    suite.app
        .wrap()
        .query_wasm_smart(bridge, &QueryMsg::Supply {})
        .unwrap()
}

/// First wasm-event attribute named `key`, if any
pub fn wasm_attr(res: &AppResponse, key: &str) -> Option<String> {
    res.events
        .iter()
        .filter(|event| event.ty == "wasm")
        .flat_map(|event| event.attributes.iter())
        .find(|attr| attr.key == key)
        .map(|attr| attr.value.clone())
}
