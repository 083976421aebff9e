use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Timestamp, Uint128, Uint256};

use crate::state::{Config, RaffleState};

#[cw_serde]
pub struct InstantiateMsg {
    /// Minimum payment per entry, in `denom`. Must be positive.
    pub entrance_fee: Uint128,
    pub denom: String,
    /// Minimum seconds between draws.
    pub interval_seconds: u64,
    /// VRF coordinator contract address.
    pub vrf_coordinator: String,
    pub subscription_id: u64,
    pub callback_gas_limit: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Enter the current round. Send the entrance fee in `info.funds`;
    /// overpayment is kept in the pool.
    Enter {},
    /// Start a draw if the upkeep conditions hold. Any caller.
    PerformUpkeep {},
    /// Randomness delivery. Coordinator only; wire-compatible with
    /// `fortuna_vrf::ConsumerExecuteMsg`. Only the first word is used.
    FulfillRandomness {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},

    #[returns(RoundResponse)]
    Round {},

    #[returns(CheckUpkeepResponse)]
    CheckUpkeep {},

    #[returns(Addr)]
    Player { index: u32 },

    #[returns(Vec<Addr>)]
    Players {},

    #[returns(Option<Addr>)]
    RecentWinner {},
}

#[cw_serde]
pub struct RoundResponse {
    pub raffle_state: RaffleState,
    pub pool_balance: Uint128,
    pub num_players: u32,
    pub last_draw_time: Timestamp,
    pub pending_request_id: Option<u64>,
}

#[cw_serde]
pub struct CheckUpkeepResponse {
    pub upkeep_needed: bool,
}
