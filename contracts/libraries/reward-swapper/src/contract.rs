#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdError, StdResult,
};
use valence_library_utils::{
    error::LibraryError,
    msg::{ExecuteMsg, InstantiateMsg},
};

use crate::{
    msg::{Config, FunctionMsgs, LibraryConfig, LibraryConfigUpdate, QueryMsg},
    registry, swap,
};

// version info for migration info
const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg<LibraryConfig>,
) -> Result<Response, LibraryError> {
    for mapping in msg.config.initial_reward_tokens.iter() {
        registry::set_reward_token(
            deps.storage,
            deps.api,
            &mapping.reward_token,
            &mapping.target_token,
        )?;
    }

    valence_library_base::instantiate(deps, CONTRACT_NAME, CONTRACT_VERSION, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg<FunctionMsgs, LibraryConfigUpdate>,
) -> Result<Response, LibraryError> {
    match msg {
        // Owner functions never reach the processor check
        ExecuteMsg::ProcessFunction(function) if function.requires_owner() => {
            cw_ownable::assert_owner(deps.storage, &info.sender)?;
            let config: Config = valence_library_base::load_config(deps.storage)?;
            functions::process_function(deps, env, info, function, config)
        }
        msg => valence_library_base::execute(
            deps,
            env,
            info,
            msg,
            functions::process_function,
            execute::update_config,
        ),
    }
}

mod execute {
    use cosmwasm_std::{DepsMut, Env, MessageInfo};
    use valence_library_utils::error::LibraryError;

    use crate::msg::LibraryConfigUpdate;

    pub fn update_config(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        new_config: LibraryConfigUpdate,
    ) -> Result<(), LibraryError> {
        new_config.update_config(deps)
    }
}

mod functions {
    use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};
    use valence_library_utils::error::LibraryError;
    use valence_swap_utils::token::{
        decrease_allowance_msg, increase_allowance_msg, query_allowance,
    };

    use crate::{
        error::RewardSwapperError,
        msg::{Config, FunctionMsgs},
        registry,
        state::REWARD_TOKENS,
        swap,
    };

    pub fn process_function(
        deps: DepsMut,
        env: Env,
        _info: MessageInfo,
        msg: FunctionMsgs,
        cfg: Config,
    ) -> Result<Response, LibraryError> {
        match msg {
            FunctionMsgs::Swap {
                instruction,
                reward_token,
            } => swap::swap(deps, env, cfg, instruction, reward_token),
            FunctionMsgs::SetRewardToken {
                reward_token,
                target_token,
            } => set_reward_token(deps, reward_token, target_token),
            FunctionMsgs::DeleteRewardToken { reward_token } => {
                delete_reward_token(deps, reward_token)
            }
            FunctionMsgs::ApproveToken { token, amount } => {
                approve_token(deps, &env, &cfg, token, amount)
            }
            FunctionMsgs::RevokeToken { token } => revoke_token(deps, &env, &cfg, token),
        }
    }

    fn set_reward_token(
        deps: DepsMut,
        reward_token: String,
        target_token: String,
    ) -> Result<Response, LibraryError> {
        let (reward_token, target_token) =
            registry::set_reward_token(deps.storage, deps.api, &reward_token, &target_token)?;

        Ok(Response::new()
            .add_attribute("method", "set_reward_token")
            .add_attribute("reward_token", reward_token)
            .add_attribute("target_token", target_token))
    }

    fn delete_reward_token(deps: DepsMut, reward_token: String) -> Result<Response, LibraryError> {
        registry::delete_reward_token(deps.storage, deps.api, &reward_token);

        Ok(Response::new()
            .add_attribute("method", "delete_reward_token")
            .add_attribute("reward_token", reward_token))
    }

    fn approve_token(
        deps: DepsMut,
        env: &Env,
        cfg: &Config,
        token: String,
        amount: Option<Uint128>,
    ) -> Result<Response, LibraryError> {
        // Only registered reward tokens are ever spendable by the exchange
        let token = deps.api.addr_validate(&token)?;
        if !REWARD_TOKENS.has(deps.storage, &token) {
            return Err(RewardSwapperError::NotRewardToken(token.to_string()).into());
        }

        let amount = amount.unwrap_or(Uint128::MAX);
        let msg = increase_allowance_msg(&token, &cfg.exchange, amount)?;

        Ok(Response::new()
            .add_message(msg)
            .add_attribute("method", "approve_token")
            .add_attribute("token", token)
            .add_attribute("spender", cfg.exchange.to_string())
            .add_attribute("owner", env.contract.address.to_string())
            .add_attribute("amount", amount))
    }

    fn revoke_token(
        deps: DepsMut,
        env: &Env,
        cfg: &Config,
        token: String,
    ) -> Result<Response, LibraryError> {
        let token = deps.api.addr_validate(&token)?;
        let allowance = query_allowance(
            &deps.querier,
            &token,
            &env.contract.address,
            &cfg.exchange,
        )?;

        let mut response = Response::new()
            .add_attribute("method", "revoke_token")
            .add_attribute("token", token.to_string())
            .add_attribute("spender", cfg.exchange.to_string())
            .add_attribute("revoked", allowance);

        if !allowance.is_zero() {
            response =
                response.add_message(decrease_allowance_msg(&token, &cfg.exchange, allowance)?);
        }

        Ok(response)
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, LibraryError> {
    match msg.id {
        swap::SWAP_REPLY_ID => swap::handle_reply(deps, env, msg.result),
        _ => Err(LibraryError::Std(StdError::generic_err("unknown reply id"))),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Ownership {} => {
            to_json_binary(&valence_library_base::get_ownership(deps.storage)?)
        }
        QueryMsg::GetProcessor {} => {
            to_json_binary(&valence_library_base::get_processor(deps.storage)?)
        }
        QueryMsg::GetLibraryConfig {} => {
            let config: Config = valence_library_base::load_config(deps.storage)?;
            to_json_binary(&config)
        }
        QueryMsg::GetRawLibraryConfig {} => {
            let raw_config: LibraryConfig = valence_library_base::load_raw_config(deps.storage)?;
            to_json_binary(&raw_config)
        }
        QueryMsg::RewardTokenToTargetToken { reward_token } => {
            to_json_binary(&registry::target_token(deps, &reward_token)?)
        }
        QueryMsg::RewardTokens { start_after, limit } => {
            to_json_binary(&registry::reward_tokens(deps, start_after, limit)?)
        }
    }
}
