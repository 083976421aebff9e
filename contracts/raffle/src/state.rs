use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::Item;

pub const CONFIG: Item<Config> = Item::new("config");
pub const RAFFLE_STATE: Item<RaffleState> = Item::new("raffle_state");
/// Players of the current round, in entry order. One slot per paid entry,
/// duplicates allowed. Cleared on resolution.
pub const PLAYERS: Item<Vec<Addr>> = Item::new("players");
/// Sum of everything paid in this round. Overpayment stays in the pool.
pub const POOL_BALANCE: Item<Uint128> = Item::new("pool");
/// Time of the last successful resolution (instantiation time before the
/// first round). The upkeep interval is measured from here.
pub const LAST_DRAW_TIME: Item<Timestamp> = Item::new("last_draw");
/// Correlation id of the in-flight randomness request. Present iff the
/// raffle is calculating; removed when the matching callback resolves.
pub const PENDING_REQUEST: Item<u64> = Item::new("pending_request");
/// Next request id to allocate. Starts at 1, so a live id is never 0.
pub const NEXT_REQUEST_ID: Item<u64> = Item::new("next_request_id");
pub const RECENT_WINNER: Item<Addr> = Item::new("recent_winner");

/// Immutable after instantiation; there is no update operation.
#[cw_serde]
pub struct Config {
    /// Minimum payment per entry, in `denom`.
    pub entrance_fee: Uint128,
    pub denom: String,
    /// Minimum seconds between draws.
    pub interval_seconds: u64,
    /// The only address allowed to deliver randomness.
    pub vrf_coordinator: Addr,
    /// Funding subscription on the coordinator, passed through opaquely.
    pub subscription_id: u64,
    /// Gas budget for the fulfilment call, passed through opaquely.
    pub callback_gas_limit: u64,
}

#[cw_serde]
#[derive(Copy)]
pub enum RaffleState {
    /// Accepting entries.
    Open,
    /// A randomness request is in flight; entries and further draws are
    /// rejected until it resolves.
    Calculating,
}

impl fmt::Display for RaffleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RaffleState::Open => write!(f, "open"),
            RaffleState::Calculating => write!(f, "calculating"),
        }
    }
}
