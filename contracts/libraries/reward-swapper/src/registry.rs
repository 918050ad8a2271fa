use cosmwasm_std::{Addr, Api, Deps, Order, StdResult, Storage};
use cw_storage_plus::Bound;

use valence_library_utils::error::LibraryError;

use crate::{error::RewardSwapperError, msg::RewardTokenResponse, state::REWARD_TOKENS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

// Empty string is the null token
fn validate_token(api: &dyn Api, token: &str) -> Result<Addr, LibraryError> {
    if token.is_empty() {
        return Err(RewardSwapperError::ZeroAddress.into());
    }
    Ok(api.addr_validate(token)?)
}

pub fn set_reward_token(
    storage: &mut dyn Storage,
    api: &dyn Api,
    reward_token: &str,
    target_token: &str,
) -> Result<(Addr, Addr), LibraryError> {
    let reward_token = validate_token(api, reward_token)?;
    let target_token = validate_token(api, target_token)?;

    REWARD_TOKENS.save(storage, &reward_token, &target_token)?;

    Ok((reward_token, target_token))
}

pub fn delete_reward_token(storage: &mut dyn Storage, api: &dyn Api, reward_token: &str) {
    // The null token and unparseable addresses are never stored, nothing to remove
    if let Ok(reward_token) = api.addr_validate(reward_token) {
        REWARD_TOKENS.remove(storage, &reward_token);
    }
}

/// Resolves a caller supplied reward token to `(reward, target)`.
/// Anything that is not a valid address cannot have been registered, so it resolves to `None`.
pub fn resolve(deps: Deps, reward_token: &str) -> StdResult<Option<(Addr, Addr)>> {
    let Ok(reward_token) = deps.api.addr_validate(reward_token) else {
        return Ok(None);
    };

    Ok(REWARD_TOKENS
        .may_load(deps.storage, &reward_token)?
        .map(|target_token| (reward_token, target_token)))
}

pub fn target_token(deps: Deps, reward_token: &str) -> StdResult<Option<Addr>> {
    Ok(resolve(deps, reward_token)?.map(|(_, target_token)| target_token))
}

pub fn reward_tokens(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Vec<RewardTokenResponse>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_after = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start_after.as_ref().map(Bound::exclusive);

    REWARD_TOKENS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            item.map(|(reward_token, target_token)| RewardTokenResponse {
                reward_token,
                target_token,
            })
        })
        .collect()
}
