pub mod contract;
pub mod error;
pub mod msg;
pub mod registry;
pub mod state;
pub mod swap;
