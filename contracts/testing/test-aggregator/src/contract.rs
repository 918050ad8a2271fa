#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult,
    Uint128,
};
use cw2::set_contract_version;
use valence_swap_utils::token::{transfer_from_msg, transfer_msg};

use crate::{
    error::ContractError,
    msg::{ExecuteMsg, InstantiateMsg, PairRate, QueryMsg},
    state::RATES,
};

// version info for migration info
const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    for pair in msg.rates.iter() {
        save_rate(deps.branch(), pair)?;
    }

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("pairs", msg.rates.len().to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::TransformTokens {
            sell_token,
            buy_token,
            sell_amount,
            min_buy_amount,
        } => {
            let sell_token = deps.api.addr_validate(&sell_token)?;
            let buy_token = deps.api.addr_validate(&buy_token)?;

            let buy_amount = simulate(deps.as_ref(), &sell_token, &buy_token, sell_amount)?;
            if buy_amount < min_buy_amount {
                return Err(ContractError::SlippageExceeded {
                    buy_amount,
                    min_buy_amount,
                });
            }

            // Pull first: fails the whole call when the caller never granted an allowance
            let pull = transfer_from_msg(
                &sell_token,
                &info.sender,
                &env.contract.address,
                sell_amount,
            )?;
            let pay = transfer_msg(&buy_token, &info.sender, buy_amount)?;

            Ok(Response::new()
                .add_message(pull)
                .add_message(pay)
                .add_attribute("method", "transform_tokens")
                .add_attribute("sell_token", sell_token)
                .add_attribute("buy_token", buy_token)
                .add_attribute("sell_amount", sell_amount)
                .add_attribute("buy_amount", buy_amount))
        }
        ExecuteMsg::SetRate(pair) => {
            save_rate(deps, &pair)?;
            Ok(Response::new()
                .add_attribute("method", "set_rate")
                .add_attribute("sell_token", pair.sell_token)
                .add_attribute("buy_token", pair.buy_token)
                .add_attribute("rate", pair.rate.to_string()))
        }
    }
}

fn save_rate(deps: DepsMut, pair: &PairRate) -> StdResult<()> {
    let sell_token = deps.api.addr_validate(&pair.sell_token)?;
    let buy_token = deps.api.addr_validate(&pair.buy_token)?;
    RATES.save(deps.storage, (&sell_token, &buy_token), &pair.rate)
}

fn simulate(
    deps: Deps,
    sell_token: &Addr,
    buy_token: &Addr,
    sell_amount: Uint128,
) -> Result<Uint128, ContractError> {
    if sell_amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let rate = RATES
        .may_load(deps.storage, (sell_token, buy_token))?
        .ok_or_else(|| ContractError::UnknownPair {
            sell_token: sell_token.to_string(),
            buy_token: buy_token.to_string(),
        })?;

    let buy_amount = sell_amount
        .checked_mul_floor(rate)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    if buy_amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    Ok(buy_amount)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::SimulateTransform {
            sell_token,
            buy_token,
            sell_amount,
        } => {
            let sell_token = deps.api.addr_validate(&sell_token)?;
            let buy_token = deps.api.addr_validate(&buy_token)?;
            let buy_amount = simulate(deps, &sell_token, &buy_token, sell_amount)
                .map_err(|e| StdError::generic_err(e.to_string()))?;
            to_json_binary(&buy_amount)
        }
    }
}
