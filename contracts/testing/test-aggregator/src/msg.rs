use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, Uint128};

pub use valence_swap_utils::aggregator::AggregatorQueryMsg as QueryMsg;

#[cw_serde]
pub struct PairRate {
    pub sell_token: String,
    pub buy_token: String,
    pub rate: Decimal,
}

#[cw_serde]
pub struct InstantiateMsg {
    pub rates: Vec<PairRate>,
}

/// Superset of the aggregator execute interface, so swap instructions built from
/// `valence_swap_utils::aggregator::SwapQuote` deserialize into it unchanged.
#[cw_serde]
pub enum ExecuteMsg {
    TransformTokens {
        sell_token: String,
        buy_token: String,
        sell_amount: Uint128,
        min_buy_amount: Uint128,
    },
    SetRate(PairRate),
}
