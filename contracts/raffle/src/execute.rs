use cosmwasm_std::{
    coins, BankMsg, Deps, DepsMut, Env, Event, MessageInfo, Response, StdError, StdResult,
    Uint128, Uint256,
};
use fortuna_vrf::{request_randomness_msg, RandomnessRequest};

use crate::error::ContractError;
use crate::state::{
    RaffleState, CONFIG, LAST_DRAW_TIME, NEXT_REQUEST_ID, PENDING_REQUEST, PLAYERS, POOL_BALANCE,
    RAFFLE_STATE, RECENT_WINNER,
};

/// Words requested per draw. Winner selection consumes one.
const NUM_WORDS: u32 = 1;
/// Confirmation depth the coordinator waits for before fulfilling.
const REQUEST_CONFIRMATIONS: u32 = 3;

/// Snapshot of the conditions `perform_upkeep` checks, kept around so a
/// failed trigger can report why it failed.
pub struct UpkeepStatus {
    pub needed: bool,
    pub pool_balance: Uint128,
    pub num_players: u32,
    pub raffle_state: RaffleState,
}

/// Evaluate the draw-trigger predicate. Read-only; shared by the
/// `CheckUpkeep` query and `perform_upkeep`.
pub fn evaluate_upkeep(deps: Deps, env: &Env) -> StdResult<UpkeepStatus> {
    let config = CONFIG.load(deps.storage)?;
    let raffle_state = RAFFLE_STATE.load(deps.storage)?;
    let pool_balance = POOL_BALANCE.load(deps.storage)?;
    let num_players = PLAYERS.load(deps.storage)?.len() as u32;
    let last_draw = LAST_DRAW_TIME.load(deps.storage)?;

    let elapsed = env.block.time.seconds().saturating_sub(last_draw.seconds());
    let needed = raffle_state == RaffleState::Open
        && elapsed >= config.interval_seconds
        && !pool_balance.is_zero()
        && num_players > 0;

    Ok(UpkeepStatus {
        needed,
        pool_balance,
        num_players,
        raffle_state,
    })
}

/// Enter the current round. The full paid amount joins the pool; no
/// change is returned for overpayment.
pub fn enter(deps: DepsMut, _env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let raffle_state = RAFFLE_STATE.load(deps.storage)?;
    if raffle_state != RaffleState::Open {
        return Err(ContractError::RaffleNotOpen);
    }

    // Validate funds: exactly one coin, right denom, fee covered
    if info.funds.is_empty() {
        return Err(ContractError::NoFundsSent);
    }
    if info.funds.len() != 1 {
        return Err(ContractError::InvalidFunds);
    }
    let config = CONFIG.load(deps.storage)?;
    let sent = &info.funds[0];
    if sent.denom != config.denom {
        return Err(ContractError::WrongDenom {
            denom: config.denom,
            got: sent.denom.clone(),
        });
    }
    if sent.amount < config.entrance_fee {
        return Err(ContractError::InsufficientPayment {
            sent: sent.amount,
            required: config.entrance_fee,
        });
    }

    let mut players = PLAYERS.load(deps.storage)?;
    players.push(info.sender.clone());
    PLAYERS.save(deps.storage, &players)?;

    let pool_balance = POOL_BALANCE.load(deps.storage)? + sent.amount;
    POOL_BALANCE.save(deps.storage, &pool_balance)?;

    Ok(Response::new()
        .add_attribute("action", "enter")
        .add_attribute("player", info.sender.to_string())
        .add_attribute("paid", sent.amount.to_string())
        .add_event(
            Event::new("fortuna_entered")
                .add_attribute("player", info.sender.to_string())
                .add_attribute("paid", sent.amount.to_string())
                .add_attribute("pool_balance", pool_balance.to_string())
                .add_attribute("num_players", players.len().to_string()),
        ))
}

/// Start a draw: re-check the upkeep predicate, freeze the round and open
/// a randomness request on the coordinator. Any caller.
pub fn perform_upkeep(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
) -> Result<Response, ContractError> {
    // Deliberate re-check even when an external scheduler already checked,
    // so a stale trigger cannot start a draw.
    let status = evaluate_upkeep(deps.as_ref(), &env)?;
    if !status.needed {
        return Err(ContractError::UpkeepNotNeeded {
            pool_balance: status.pool_balance,
            num_players: status.num_players,
            raffle_state: status.raffle_state,
        });
    }

    let config = CONFIG.load(deps.storage)?;

    let request_id = NEXT_REQUEST_ID.load(deps.storage)?;
    NEXT_REQUEST_ID.save(deps.storage, &(request_id + 1))?;
    PENDING_REQUEST.save(deps.storage, &request_id)?;
    RAFFLE_STATE.save(deps.storage, &RaffleState::Calculating)?;

    let request = RandomnessRequest {
        request_id,
        subscription_id: config.subscription_id,
        request_confirmations: REQUEST_CONFIRMATIONS,
        callback_gas_limit: config.callback_gas_limit,
        num_words: NUM_WORDS,
    };
    let request_msg = request_randomness_msg(&config.vrf_coordinator, &request)?;

    Ok(Response::new()
        .add_message(request_msg)
        .add_attribute("action", "perform_upkeep")
        .add_attribute("request_id", request_id.to_string())
        .add_event(
            Event::new("fortuna_draw_started")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("num_players", status.num_players.to_string())
                .add_attribute("pool_balance", status.pool_balance.to_string()),
        ))
}

/// Consume delivered randomness: pick the winner, pay out the whole pool
/// and reopen the raffle. Coordinator only.
pub fn fulfill_randomness(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
    random_words: Vec<Uint256>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.vrf_coordinator {
        return Err(ContractError::Unauthorized {
            reason: "only the vrf coordinator can deliver randomness".to_string(),
        });
    }

    // Correlation check: the id must match the single outstanding request.
    // Replays, stale ids from earlier rounds and id 0 all fail here,
    // before any ledger access.
    let pending = PENDING_REQUEST.may_load(deps.storage)?;
    if request_id == 0 || pending != Some(request_id) {
        return Err(ContractError::UnknownRequest { request_id });
    }

    let word = random_words
        .first()
        .copied()
        .ok_or(ContractError::NoRandomWords)?;

    let players = PLAYERS.load(deps.storage)?;
    let pool_balance = POOL_BALANCE.load(deps.storage)?;

    // A pending request implies a frozen, non-empty player list (entries
    // are rejected while calculating), but never divide by zero on a
    // broken invariant.
    if players.is_empty() {
        return Err(StdError::generic_err("pending draw has no players").into());
    }
    let index = word % Uint256::from(players.len() as u64);
    let index = Uint128::try_from(index).map_err(StdError::from)?.u128() as usize;
    let winner = players[index].clone();

    // The whole pool must be payable, or the resolution fails and the
    // round stays calculating so it can be retried.
    let available = deps
        .querier
        .query_balance(env.contract.address.clone(), config.denom.clone())?
        .amount;
    if available < pool_balance {
        return Err(ContractError::PayoutFailed {
            winner: winner.to_string(),
            amount: pool_balance,
            available,
        });
    }

    RECENT_WINNER.save(deps.storage, &winner)?;
    PLAYERS.save(deps.storage, &Vec::new())?;
    POOL_BALANCE.save(deps.storage, &Uint128::zero())?;
    PENDING_REQUEST.remove(deps.storage);
    LAST_DRAW_TIME.save(deps.storage, &env.block.time)?;
    RAFFLE_STATE.save(deps.storage, &RaffleState::Open)?;

    let payout = BankMsg::Send {
        to_address: winner.to_string(),
        amount: coins(pool_balance.u128(), config.denom),
    };

    Ok(Response::new()
        .add_message(payout)
        .add_attribute("action", "fulfill_randomness")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("winner", winner.to_string())
        .add_event(
            Event::new("fortuna_winner_picked")
                .add_attribute("winner", winner.to_string())
                .add_attribute("payout", pool_balance.to_string())
                .add_attribute("request_id", request_id.to_string()),
        ))
}
