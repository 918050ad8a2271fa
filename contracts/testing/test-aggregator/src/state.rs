use cosmwasm_std::{Addr, Decimal};
use cw_storage_plus::Map;

// (sell token, buy token) -> buy tokens paid per sell token
pub const RATES: Map<(&Addr, &Addr), Decimal> = Map::new("rates");
