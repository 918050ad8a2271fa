use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Reward token -> the only token it may be swapped into.
pub const REWARD_TOKENS: Map<&Addr, Addr> = Map::new("reward_tokens");

/// Balances snapshotted before the exchange call, read back in the reply.
pub const PENDING_SWAP: Item<PendingSwap> = Item::new("pending_swap");

#[cw_serde]
pub struct PendingSwap {
    pub reward_token: Addr,
    pub target_token: Addr,
    pub reward_balance_before: Uint128,
    pub target_balance_before: Uint128,
}
