use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Binary, StdResult, Uint128};

/// Execute interface of an exchange aggregator router.
/// Swap instructions handed to the reward swapper are JSON encodings of this message.
#[cw_serde]
pub enum AggregatorExecuteMsg {
    /// Pulls `sell_amount` of `sell_token` from the caller through its cw20 allowance
    /// and pays at least `min_buy_amount` of `buy_token` back to the caller.
    TransformTokens {
        sell_token: String,
        buy_token: String,
        sell_amount: Uint128,
        min_buy_amount: Uint128,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum AggregatorQueryMsg {
    /// Amount of `buy_token` the router would pay for `sell_amount` of `sell_token`.
    #[returns(Uint128)]
    SimulateTransform {
        sell_token: String,
        buy_token: String,
        sell_amount: Uint128,
    },
}

/// Quote as returned by the off-chain aggregator API.
#[cw_serde]
pub struct SwapQuote {
    pub sell_token: String,
    pub buy_token: String,
    pub sell_amount: Uint128,
    pub min_buy_amount: Uint128,
}

impl SwapQuote {
    pub fn new(
        sell_token: impl Into<String>,
        buy_token: impl Into<String>,
        sell_amount: Uint128,
        min_buy_amount: Uint128,
    ) -> Self {
        SwapQuote {
            sell_token: sell_token.into(),
            buy_token: buy_token.into(),
            sell_amount,
            min_buy_amount,
        }
    }

    /// Encodes the quote into the opaque instruction bytes the router expects.
    pub fn to_instruction(&self) -> StdResult<Binary> {
        to_json_binary(&AggregatorExecuteMsg::TransformTokens {
            sell_token: self.sell_token.clone(),
            buy_token: self.buy_token.clone(),
            sell_amount: self.sell_amount,
            min_buy_amount: self.min_buy_amount,
        })
    }
}
