pub mod contract;
mod error;
pub mod helpers;
pub mod msg;
pub mod state;
pub mod wallet;

pub use crate::error::ContractError;
