use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Deps, DepsMut, Uint128};
use cw_ownable::cw_ownable_query;
use valence_library_utils::{error::LibraryError, msg::LibraryConfigValidation};
use valence_macros::{valence_library_query, ValenceLibraryInterface};

#[cw_serde]
pub enum FunctionMsgs {
    /// Execute an aggregator swap instruction selling `reward_token` (processor only).
    Swap {
        instruction: Binary,
        reward_token: String,
    },
    /// Authorize `reward_token` to be swapped into `target_token` (owner only).
    /// Overwrites any previous target for the same reward token.
    SetRewardToken {
        reward_token: String,
        target_token: String,
    },
    /// Remove the mapping for `reward_token` (owner only). No-op when absent.
    DeleteRewardToken { reward_token: String },
    /// Grant the exchange a cw20 allowance on a registered reward token (owner only).
    /// Defaults to an unlimited allowance.
    ApproveToken {
        token: String,
        amount: Option<Uint128>,
    },
    /// Drop whatever allowance the exchange holds on `token` (owner only).
    RevokeToken { token: String },
}

impl FunctionMsgs {
    /// Registry and allowance management is reserved to the owner, swaps to the processor.
    pub fn requires_owner(&self) -> bool {
        !matches!(self, FunctionMsgs::Swap { .. })
    }
}

#[valence_library_query]
#[cw_ownable_query]
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Target token for a reward token, `None` if it was never registered
    #[returns(Option<Addr>)]
    RewardTokenToTargetToken { reward_token: String },
    #[returns(Vec<RewardTokenResponse>)]
    RewardTokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct RewardTokenResponse {
    pub reward_token: Addr,
    pub target_token: Addr,
}

#[cw_serde]
pub struct RewardTokenMapping {
    pub reward_token: String,
    pub target_token: String,
}

impl RewardTokenMapping {
    pub fn new(reward_token: impl Into<String>, target_token: impl Into<String>) -> Self {
        RewardTokenMapping {
            reward_token: reward_token.into(),
            target_token: target_token.into(),
        }
    }
}

#[cw_serde]
#[derive(ValenceLibraryInterface)]
pub struct LibraryConfig {
    /// Aggregator router every swap instruction is sent to
    pub exchange: String,
    /// Mappings registered at instantiation. Later changes go through
    /// `SetRewardToken` and `DeleteRewardToken`.
    #[skip_update]
    pub initial_reward_tokens: Vec<RewardTokenMapping>,
}

impl LibraryConfig {
    pub fn new(exchange: impl Into<String>, initial_reward_tokens: Vec<RewardTokenMapping>) -> Self {
        LibraryConfig {
            exchange: exchange.into(),
            initial_reward_tokens,
        }
    }
}

#[cw_serde]
/// Validated library configuration
pub struct Config {
    pub exchange: Addr,
}

impl LibraryConfigValidation<Config> for LibraryConfig {
    fn validate(&self, deps: Deps) -> Result<Config, LibraryError> {
        Ok(Config {
            exchange: deps.api.addr_validate(&self.exchange)?,
        })
    }
}

impl LibraryConfigUpdate {
    pub fn update_config(self, deps: DepsMut) -> Result<(), LibraryError> {
        let mut config: Config = valence_library_base::load_config(deps.storage)?;

        // Allowances granted to the previous exchange stay with it
        if let Some(exchange) = self.exchange {
            config.exchange = deps.api.addr_validate(&exchange)?;
        }

        valence_library_base::save_config(deps.storage, &config)?;

        Ok(())
    }
}
