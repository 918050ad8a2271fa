use cosmwasm_schema::write_api;

use valence_test_aggregator::msg::{ExecuteMsg, InstantiateMsg};
use valence_swap_utils::aggregator::AggregatorQueryMsg;

fn main() {
    write_api! {
        instantiate: InstantiateMsg,
        execute: ExecuteMsg,
        query: AggregatorQueryMsg,
    }
}
