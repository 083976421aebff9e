use cosmwasm_std::{to_json_binary, Binary, Deps, Env, StdError, StdResult};

use crate::execute::evaluate_upkeep;
use crate::msg::{CheckUpkeepResponse, RoundResponse};
use crate::state::{
    CONFIG, LAST_DRAW_TIME, PENDING_REQUEST, PLAYERS, POOL_BALANCE, RAFFLE_STATE, RECENT_WINNER,
};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_round(deps: Deps) -> StdResult<Binary> {
    let raffle_state = RAFFLE_STATE.load(deps.storage)?;
    let pool_balance = POOL_BALANCE.load(deps.storage)?;
    let num_players = PLAYERS.load(deps.storage)?.len() as u32;
    let last_draw_time = LAST_DRAW_TIME.load(deps.storage)?;
    let pending_request_id = PENDING_REQUEST.may_load(deps.storage)?;

    to_json_binary(&RoundResponse {
        raffle_state,
        pool_balance,
        num_players,
        last_draw_time,
        pending_request_id,
    })
}

pub fn query_check_upkeep(deps: Deps, env: Env) -> StdResult<Binary> {
    let status = evaluate_upkeep(deps, &env)?;
    to_json_binary(&CheckUpkeepResponse {
        upkeep_needed: status.needed,
    })
}

pub fn query_player(deps: Deps, index: u32) -> StdResult<Binary> {
    let players = PLAYERS.load(deps.storage)?;
    let player = players
        .get(index as usize)
        .ok_or_else(|| StdError::not_found(format!("player at index {}", index)))?;
    to_json_binary(player)
}

pub fn query_players(deps: Deps) -> StdResult<Binary> {
    let players = PLAYERS.load(deps.storage)?;
    to_json_binary(&players)
}

pub fn query_recent_winner(deps: Deps) -> StdResult<Binary> {
    let winner = RECENT_WINNER.may_load(deps.storage)?;
    to_json_binary(&winner)
}
