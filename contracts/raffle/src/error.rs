use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

use crate::state::RaffleState;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("entrance fee must be positive")]
    ZeroEntranceFee,

    #[error("no funds sent with entry")]
    NoFundsSent,

    #[error("must send exactly one coin")]
    InvalidFunds,

    #[error("entries are paid in {denom}, got {got}")]
    WrongDenom { denom: String, got: String },

    #[error("insufficient payment: sent {sent}, entrance fee is {required}")]
    InsufficientPayment { sent: Uint128, required: Uint128 },

    #[error("raffle is not open")]
    RaffleNotOpen,

    #[error(
        "upkeep not needed: pool balance {pool_balance}, {num_players} players, state {raffle_state}"
    )]
    UpkeepNotNeeded {
        pool_balance: Uint128,
        num_players: u32,
        raffle_state: RaffleState,
    },

    #[error("no randomness request outstanding with id {request_id}")]
    UnknownRequest { request_id: u64 },

    #[error("randomness callback delivered no words")]
    NoRandomWords,

    #[error("payout of {amount} to {winner} failed: contract holds {available}")]
    PayoutFailed {
        winner: String,
        amount: Uint128,
        available: Uint128,
    },
}
