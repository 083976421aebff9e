use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query;
use crate::state::{
    Config, RaffleState, CONFIG, LAST_DRAW_TIME, NEXT_REQUEST_ID, PLAYERS, POOL_BALANCE,
    RAFFLE_STATE,
};

const CONTRACT_NAME: &str = "crates.io:fortuna-raffle";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.entrance_fee.is_zero() {
        return Err(ContractError::ZeroEntranceFee);
    }

    let config = Config {
        entrance_fee: msg.entrance_fee,
        denom: msg.denom,
        interval_seconds: msg.interval_seconds,
        vrf_coordinator: deps.api.addr_validate(&msg.vrf_coordinator)?,
        subscription_id: msg.subscription_id,
        callback_gas_limit: msg.callback_gas_limit,
    };
    CONFIG.save(deps.storage, &config)?;

    RAFFLE_STATE.save(deps.storage, &RaffleState::Open)?;
    PLAYERS.save(deps.storage, &Vec::new())?;
    POOL_BALANCE.save(deps.storage, &Uint128::zero())?;
    // The first round's interval is measured from instantiation
    LAST_DRAW_TIME.save(deps.storage, &env.block.time)?;
    NEXT_REQUEST_ID.save(deps.storage, &1u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "raffle")
        .add_attribute("entrance_fee", config.entrance_fee.to_string())
        .add_attribute("interval_seconds", config.interval_seconds.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Enter {} => execute::enter(deps, env, info),
        ExecuteMsg::PerformUpkeep {} => execute::perform_upkeep(deps, env, info),
        ExecuteMsg::FulfillRandomness {
            request_id,
            random_words,
        } => execute::fulfill_randomness(deps, env, info, request_id, random_words),
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Round {} => query::query_round(deps),
        QueryMsg::CheckUpkeep {} => query::query_check_upkeep(deps, env),
        QueryMsg::Player { index } => query::query_player(deps, index),
        QueryMsg::Players {} => query::query_players(deps),
        QueryMsg::RecentWinner {} => query::query_recent_winner(deps),
    }
}
