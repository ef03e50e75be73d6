use cosmwasm_std::{StdError, Uint128};
use shared::CodecError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Deposit of {sent} is below the minimum of {minimum}")]
    BelowMinimumDeposit { sent: Uint128, minimum: Uint128 },

    #[error("Withdrawal of {requested} from {balance} would breach the reserve of {reserve}")]
    InsufficientReserve {
        balance: Uint128,
        requested: Uint128,
        reserve: Uint128,
    },

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Invalid initialization payload: {0}")]
    InvalidPayload(#[from] CodecError),

    #[error("Threshold {value} does not fit the packed 32-bit field")]
    ThresholdOverflow { value: Uint128 },
}

impl ContractError {
    /// Numeric status reported for handler rejections
    pub fn status_code(&self) -> Option<u32> {
        match self {
            ContractError::BelowMinimumDeposit { .. } => Some(400),
            ContractError::InsufficientReserve { .. } => Some(401),
            ContractError::Unauthorized {} => Some(404),
            _ => None,
        }
    }
}
