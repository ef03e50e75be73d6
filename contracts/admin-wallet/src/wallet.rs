//! Message routing and validation for the admin wallet.
//!
//! Everything here is a pure function of the persisted [`State`], the
//! contract balance and the inbound message. The entry points in
//! [`crate::contract`] load the inputs and turn the [`Outcome`] into a
//! `Response`; a returned error aborts the whole transaction, which hands the
//! attached funds back to the sender.

use cosmwasm_std::{Addr, Uint128};
use shared::Operation;

use crate::error::ContractError;
use crate::state::State;

/// A single inbound message, already reduced to the wallet's denom
#[derive(Clone, Debug, PartialEq)]
pub struct Inbound {
    pub sender: Addr,
    /// Funds attached in the wallet's denom
    pub value: Uint128,
    pub op: Operation,
    /// Explicit withdrawal amount, when the caller names one
    pub amount: Option<Uint128>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Attached value stays credited, nothing is emitted
    Accepted,
    /// Send `amount` out of the wallet to `to`
    Transfer { to: Addr, amount: Uint128 },
}

/// `balance` is the contract balance with the inbound attachment already credited.
pub fn dispatch(state: &State, balance: Uint128, msg: &Inbound) -> Result<Outcome, ContractError> {
    match msg.op {
        Operation::Deposit => deposit(state, msg.value),
        Operation::AdminWithdraw => admin_withdraw(state, balance, msg),
        Operation::Transfer | Operation::Unknown(_) => Ok(Outcome::Accepted),
    }
}

fn deposit(state: &State, value: Uint128) -> Result<Outcome, ContractError> {
    if let Some(minimum) = state.min_accept_amount {
        if value < minimum {
            return Err(ContractError::BelowMinimumDeposit {
                sent: value,
                minimum,
            });
        }
    }
    Ok(Outcome::Accepted)
}

fn admin_withdraw(
    state: &State,
    balance: Uint128,
    msg: &Inbound,
) -> Result<Outcome, ContractError> {
    // Authorization before the reserve check
    if msg.sender != state.admin {
        return Err(ContractError::Unauthorized {});
    }

    let requested = msg.amount.unwrap_or(msg.value);
    let reserve_breach = || ContractError::InsufficientReserve {
        balance,
        requested,
        reserve: state.min_reserve,
    };

    let remaining = balance.checked_sub(requested).map_err(|_| reserve_breach())?;
    if remaining <= state.min_reserve {
        return Err(reserve_breach());
    }

    Ok(Outcome::Transfer {
        to: state.admin.clone(),
        amount: requested,
    })
}

/// Largest withdrawal that keeps the balance strictly above the reserve,
/// or None when the balance is already at or below it
pub fn withdrawable(state: &State, balance: Uint128) -> Option<Uint128> {
    balance
        .checked_sub(state.min_reserve)
        .ok()?
        .checked_sub(Uint128::one())
        .ok()
}
