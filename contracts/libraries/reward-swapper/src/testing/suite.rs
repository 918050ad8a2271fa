use cosmwasm_std::{Addr, Binary, Decimal, Uint128};
use cw20::Cw20Coin;
use cw_multi_test::{error::AnyResult, App, AppResponse, ContractWrapper, Executor};
use getset::Getters;
use serde::Serialize;
use std::fmt::Debug;
use valence_library_utils::msg::{ExecuteMsg, InstantiateMsg};
use valence_swap_utils::{
    aggregator::{AggregatorQueryMsg, SwapQuote},
    token::{query_allowance, query_balance},
};
use valence_test_aggregator::msg::PairRate;

use crate::msg::{
    Config, FunctionMsgs, LibraryConfig, LibraryConfigUpdate, QueryMsg, RewardTokenMapping,
    RewardTokenResponse,
};

pub type SwapperExecuteMsg = ExecuteMsg<FunctionMsgs, LibraryConfigUpdate>;

pub const DECIMALS: u8 = 6;
pub const WHALE_BALANCE: u128 = 1_000_000_000_000_000;
pub const RESERVE_BALANCE: u128 = 100_000_000_000_000;

// 10^6
pub fn units(amount: u128) -> u128 {
    amount * 10u128.pow(DECIMALS as u32)
}

#[derive(Getters)]
pub struct RewardSwapperTestSuite {
    #[getset(get = "pub")]
    app: App,
    #[getset(get = "pub")]
    owner: Addr,
    #[getset(get = "pub")]
    processor: Addr,
    whale: Addr,
    #[getset(get = "pub")]
    swapper: Addr,
    #[getset(get = "pub")]
    aggregator: Addr,
    aggregator_code_id: u64,
    // reward tokens
    #[getset(get = "pub")]
    crv: Addr,
    #[getset(get = "pub")]
    cvx: Addr,
    #[getset(get = "pub")]
    weth: Addr,
    // target tokens
    #[getset(get = "pub")]
    dai: Addr,
    #[getset(get = "pub")]
    usdc: Addr,
}

impl Default for RewardSwapperTestSuite {
    fn default() -> Self {
        Self::new()
    }
}

impl RewardSwapperTestSuite {
    /// Swapper maps crv -> dai and cvx -> usdc, with exchange allowances granted for both.
    pub fn new() -> Self {
        let mut app = App::default();

        let owner = app.api().addr_make("owner");
        let processor = app.api().addr_make("processor");
        let whale = app.api().addr_make("whale");

        let cw20_code = ContractWrapper::new(
            cw20_base::contract::execute,
            cw20_base::contract::instantiate,
            cw20_base::contract::query,
        );
        let cw20_code_id = app.store_code(Box::new(cw20_code));

        let aggregator_code = ContractWrapper::new(
            valence_test_aggregator::contract::execute,
            valence_test_aggregator::contract::instantiate,
            valence_test_aggregator::contract::query,
        );
        let aggregator_code_id = app.store_code(Box::new(aggregator_code));

        let swapper_code = ContractWrapper::new(
            crate::contract::execute,
            crate::contract::instantiate,
            crate::contract::query,
        )
        .with_reply(crate::contract::reply);
        let swapper_code_id = app.store_code(Box::new(swapper_code));

        let mut cw20_init = |symbol: &str| -> Addr {
            let msg = cw20_base::msg::InstantiateMsg {
                name: format!("{symbol} token"),
                symbol: symbol.to_uppercase(),
                decimals: DECIMALS,
                initial_balances: vec![Cw20Coin {
                    address: whale.to_string(),
                    amount: Uint128::new(WHALE_BALANCE),
                }],
                mint: None,
                marketing: None,
            };
            app.instantiate_contract(
                cw20_code_id,
                owner.clone(),
                &msg,
                &[],
                format!("CW20 {symbol}"),
                None,
            )
            .unwrap()
        };

        let crv = cw20_init("crv");
        let cvx = cw20_init("cvx");
        let weth = cw20_init("weth");
        let dai = cw20_init("dai");
        let usdc = cw20_init("usdc");

        let rates = vec![
            (&crv, &dai, Decimal::percent(50)),
            (&crv, &usdc, Decimal::percent(49)),
            (&cvx, &usdc, Decimal::percent(200)),
            (&cvx, &dai, Decimal::percent(201)),
            (&weth, &dai, Decimal::from_ratio(2_000u128, 1u128)),
            (&usdc, &dai, Decimal::one()),
        ];
        let aggregator = app
            .instantiate_contract(
                aggregator_code_id,
                owner.clone(),
                &valence_test_aggregator::msg::InstantiateMsg {
                    rates: rates
                        .into_iter()
                        .map(|(sell, buy, rate)| PairRate {
                            sell_token: sell.to_string(),
                            buy_token: buy.to_string(),
                            rate,
                        })
                        .collect(),
                },
                &[],
                "Aggregator",
                None,
            )
            .unwrap();

        let swapper = app
            .instantiate_contract(
                swapper_code_id,
                owner.clone(),
                &InstantiateMsg {
                    owner: owner.to_string(),
                    processor: processor.to_string(),
                    config: LibraryConfig::new(
                        &aggregator,
                        vec![
                            RewardTokenMapping::new(&crv, &dai),
                            RewardTokenMapping::new(&cvx, &usdc),
                        ],
                    ),
                },
                &[],
                "Reward swapper",
                None,
            )
            .unwrap();

        let mut suite = Self {
            app,
            owner,
            processor,
            whale,
            swapper,
            aggregator,
            aggregator_code_id,
            crv,
            cvx,
            weth,
            dai,
            usdc,
        };

        // Aggregator reserves for every token it may have to pay out
        for token in [
            suite.crv.clone(),
            suite.cvx.clone(),
            suite.weth.clone(),
            suite.dai.clone(),
            suite.usdc.clone(),
        ] {
            let aggregator = suite.aggregator.clone();
            suite.cw20_transfer(&token, &aggregator, RESERVE_BALANCE);
        }

        // Strategy setup: the exchange may spend the registered reward tokens
        for token in [suite.crv.clone(), suite.cvx.clone()] {
            suite.approve_token(&token, None).unwrap();
        }

        suite
    }

    /// Instantiates a second aggregator quoting crv -> dai, funded with dai reserves.
    pub fn new_aggregator(&mut self) -> Addr {
        let rates = vec![PairRate {
            sell_token: self.crv.to_string(),
            buy_token: self.dai.to_string(),
            rate: Decimal::percent(50),
        }];
        let aggregator = self
            .app
            .instantiate_contract(
                self.aggregator_code_id,
                self.owner.clone(),
                &valence_test_aggregator::msg::InstantiateMsg { rates },
                &[],
                "Aggregator v2",
                None,
            )
            .unwrap();

        let dai = self.dai.clone();
        self.cw20_transfer(&dai, &aggregator, RESERVE_BALANCE);
        aggregator
    }

    pub fn execute_as<T: Serialize + Debug>(
        &mut self,
        sender: &Addr,
        contract: &Addr,
        msg: &T,
    ) -> AnyResult<AppResponse> {
        self.app
            .execute_contract(sender.clone(), contract.clone(), msg, &[])
    }

    pub fn function_as(
        &mut self,
        sender: &Addr,
        function: FunctionMsgs,
    ) -> AnyResult<AppResponse> {
        let swapper = self.swapper.clone();
        self.execute_as(
            sender,
            &swapper,
            &SwapperExecuteMsg::ProcessFunction(function),
        )
    }

    fn owner_execute(&mut self, msg: &SwapperExecuteMsg) -> AnyResult<AppResponse> {
        let (owner, swapper) = (self.owner.clone(), self.swapper.clone());
        self.execute_as(&owner, &swapper, msg)
    }

    fn owner_function(&mut self, function: FunctionMsgs) -> AnyResult<AppResponse> {
        self.owner_execute(&SwapperExecuteMsg::ProcessFunction(function))
    }

    pub fn set_reward_token_as(
        &mut self,
        sender: &Addr,
        reward_token: &str,
        target_token: &str,
    ) -> AnyResult<AppResponse> {
        self.function_as(
            sender,
            FunctionMsgs::SetRewardToken {
                reward_token: reward_token.to_string(),
                target_token: target_token.to_string(),
            },
        )
    }

    pub fn set_reward_token(
        &mut self,
        reward_token: &str,
        target_token: &str,
    ) -> AnyResult<AppResponse> {
        let owner = self.owner.clone();
        self.set_reward_token_as(&owner, reward_token, target_token)
    }

    pub fn delete_reward_token_as(
        &mut self,
        sender: &Addr,
        reward_token: &str,
    ) -> AnyResult<AppResponse> {
        self.function_as(
            sender,
            FunctionMsgs::DeleteRewardToken {
                reward_token: reward_token.to_string(),
            },
        )
    }

    pub fn delete_reward_token(&mut self, reward_token: &str) -> AnyResult<AppResponse> {
        let owner = self.owner.clone();
        self.delete_reward_token_as(&owner, reward_token)
    }

    pub fn approve_token(
        &mut self,
        token: &Addr,
        amount: Option<Uint128>,
    ) -> AnyResult<AppResponse> {
        self.owner_function(FunctionMsgs::ApproveToken {
            token: token.to_string(),
            amount,
        })
    }

    pub fn revoke_token(&mut self, token: &Addr) -> AnyResult<AppResponse> {
        self.owner_function(FunctionMsgs::RevokeToken {
            token: token.to_string(),
        })
    }

    pub fn update_exchange(&mut self, exchange: &Addr) -> AnyResult<AppResponse> {
        self.owner_execute(&SwapperExecuteMsg::UpdateConfig {
            new_config: LibraryConfigUpdate {
                exchange: Some(exchange.to_string()),
            },
        })
    }

    pub fn update_processor(&mut self, processor: &Addr) -> AnyResult<AppResponse> {
        self.owner_execute(&SwapperExecuteMsg::UpdateProcessor {
            processor: processor.to_string(),
        })
    }

    pub fn swap_as(
        &mut self,
        sender: &Addr,
        instruction: Binary,
        reward_token: &str,
    ) -> AnyResult<AppResponse> {
        self.function_as(
            sender,
            FunctionMsgs::Swap {
                instruction,
                reward_token: reward_token.to_string(),
            },
        )
    }

    pub fn swap(&mut self, instruction: Binary, reward_token: &Addr) -> AnyResult<AppResponse> {
        let processor = self.processor.clone();
        self.swap_as(&processor, instruction, reward_token.as_str())
    }

    /// Quote from the aggregator selling `amount` of `sell_token` for `buy_token`,
    /// encoded as a swap instruction.
    pub fn quote(&self, buy_token: &Addr, sell_token: &Addr, amount: u128) -> Binary {
        let expected: Uint128 = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.aggregator,
                &AggregatorQueryMsg::SimulateTransform {
                    sell_token: sell_token.to_string(),
                    buy_token: buy_token.to_string(),
                    sell_amount: Uint128::new(amount),
                },
            )
            .unwrap();

        SwapQuote::new(sell_token, buy_token, Uint128::new(amount), expected)
            .to_instruction()
            .unwrap()
    }

    pub fn set_rate(&mut self, sell_token: &Addr, buy_token: &Addr, rate: Decimal) {
        let (owner, aggregator) = (self.owner.clone(), self.aggregator.clone());
        self.execute_as(
            &owner,
            &aggregator,
            &valence_test_aggregator::msg::ExecuteMsg::SetRate(PairRate {
                sell_token: sell_token.to_string(),
                buy_token: buy_token.to_string(),
                rate,
            }),
        )
        .unwrap();
    }

    fn cw20_transfer(&mut self, token: &Addr, recipient: &Addr, amount: u128) -> AppResponse {
        let whale = self.whale.clone();
        self.execute_as(
            &whale,
            token,
            &cw20::Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount: Uint128::new(amount),
            },
        )
        .unwrap()
    }

    /// Sends `amount` of `token` from the whale to the swapper.
    pub fn airdrop(&mut self, token: &Addr, amount: u128) {
        let swapper = self.swapper.clone();
        self.cw20_transfer(token, &swapper, amount);
        assert_eq!(self.swapper_balance(token), amount);
    }

    pub fn balance(&self, token: &Addr, holder: &Addr) -> u128 {
        query_balance(&self.app.wrap(), token, holder)
            .unwrap()
            .u128()
    }

    pub fn swapper_balance(&self, token: &Addr) -> u128 {
        self.balance(token, &self.swapper)
    }

    pub fn exchange_allowance(&self, token: &Addr) -> Uint128 {
        let exchange = self.query_config().exchange;
        query_allowance(&self.app.wrap(), token, &self.swapper, &exchange).unwrap()
    }

    pub fn query<T: serde::de::DeserializeOwned>(&self, msg: &QueryMsg) -> T {
        self.app
            .wrap()
            .query_wasm_smart(&self.swapper, msg)
            .unwrap()
    }

    pub fn target_token(&self, reward_token: &str) -> Option<Addr> {
        self.query(&QueryMsg::RewardTokenToTargetToken {
            reward_token: reward_token.to_string(),
        })
    }

    pub fn reward_tokens(
        &self,
        start_after: Option<&Addr>,
        limit: Option<u32>,
    ) -> Vec<RewardTokenResponse> {
        self.query(&QueryMsg::RewardTokens {
            start_after: start_after.map(Addr::to_string),
            limit,
        })
    }

    pub fn query_config(&self) -> Config {
        self.query(&QueryMsg::GetLibraryConfig {})
    }

    pub fn query_raw_config(&self) -> LibraryConfig {
        self.query(&QueryMsg::GetRawLibraryConfig {})
    }

    pub fn query_processor(&self) -> Addr {
        self.query(&QueryMsg::GetProcessor {})
    }
}

/// First value of `key` across all events of a response.
pub fn attribute(res: &AppResponse, key: &str) -> Option<String> {
    res.events
        .iter()
        .flat_map(|event| event.attributes.iter())
        .find(|attr| attr.key == key)
        .map(|attr| attr.value.clone())
}
