use cosmwasm_std::{Binary, DepsMut, Env, Response, SubMsg, SubMsgResult, WasmMsg};
use valence_library_utils::error::LibraryError;
use valence_swap_utils::{token::query_balance, SwapInstruction};

use crate::{
    error::RewardSwapperError,
    msg::Config,
    registry,
    state::{PendingSwap, PENDING_SWAP},
};

pub const SWAP_REPLY_ID: u64 = 1;

/// Validates the instruction against the registry and dispatches it to the exchange.
///
/// The outcome is checked in [`handle_reply`]. Any error returned there reverts the
/// whole transaction, including whatever the exchange did.
pub fn swap(
    deps: DepsMut,
    env: Env,
    cfg: Config,
    instruction: Binary,
    reward_token: String,
) -> Result<Response, LibraryError> {
    let (reward_token, target_token) = registry::resolve(deps.as_ref(), &reward_token)?
        .ok_or(RewardSwapperError::ZeroAddress)?;

    // The destination side is not checked here, it is caught by the balance check in the reply
    let instruction = SwapInstruction::decode(instruction).map_err(RewardSwapperError::from)?;
    instruction
        .ensure_sells(reward_token.as_str())
        .map_err(RewardSwapperError::from)?;

    let this = &env.contract.address;

    let pending = PendingSwap {
        reward_balance_before: query_balance(&deps.querier, &reward_token, this)?,
        target_balance_before: query_balance(&deps.querier, &target_token, this)?,
        reward_token,
        target_token,
    };
    PENDING_SWAP.save(deps.storage, &pending)?;

    let exchange_msg = WasmMsg::Execute {
        contract_addr: cfg.exchange.to_string(),
        msg: instruction.payload,
        funds: vec![],
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_always(exchange_msg, SWAP_REPLY_ID))
        .add_attribute("method", "swap")
        .add_attribute("reward_token", pending.reward_token)
        .add_attribute("target_token", pending.target_token)
        .add_attribute("exchange", cfg.exchange))
}

pub fn handle_reply(
    deps: DepsMut,
    env: Env,
    result: SubMsgResult,
) -> Result<Response, LibraryError> {
    let pending = PENDING_SWAP.load(deps.storage)?;
    PENDING_SWAP.remove(deps.storage);

    if let SubMsgResult::Err(reason) = result {
        return Err(RewardSwapperError::SwapFailed(reason).into());
    }

    let this = &env.contract.address;
    let target_balance_after = query_balance(&deps.querier, &pending.target_token, this)?;
    let amount_out = target_balance_after.saturating_sub(pending.target_balance_before);
    if amount_out.is_zero() {
        return Err(RewardSwapperError::InvalidTargetToken(pending.target_token.to_string()).into());
    }

    let reward_balance_after = query_balance(&deps.querier, &pending.reward_token, this)?;
    let amount_in = pending
        .reward_balance_before
        .saturating_sub(reward_balance_after);

    Ok(Response::new()
        .add_attribute("method", "swap_completed")
        .add_attribute("reward_token", pending.reward_token)
        .add_attribute("target_token", pending.target_token)
        .add_attribute("amount_in", amount_in)
        .add_attribute("amount_out", amount_out)
        .add_attribute("reward_remaining", reward_balance_after))
}
