use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("No rate for {sell_token} -> {buy_token}")]
    UnknownPair {
        sell_token: String,
        buy_token: String,
    },

    #[error("Nothing to swap")]
    ZeroAmount,

    #[error("Slippage exceeded: would pay {buy_amount}, minimum is {min_buy_amount}")]
    SlippageExceeded {
        buy_amount: Uint128,
        min_buy_amount: Uint128,
    },
}
