use cosmwasm_schema::cw_serde;
use cosmwasm_std::{StdResult, Storage};

pub mod error;
pub mod msg;
pub mod raw_config;

pub trait LibraryConfigUpdateTrait {
    fn update_raw(&self, storage: &mut dyn Storage) -> StdResult<()>;
}

#[cw_serde]
#[derive(Default)]
pub enum OptionUpdate<T> {
    #[default]
    None,
    Set(Option<T>),
}
