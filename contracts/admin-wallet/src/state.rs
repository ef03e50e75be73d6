use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;
use shared::ConfigLayout;

#[cw_serde]
pub struct State {
    /// The only account funds are ever released to
    pub admin: Addr,
    /// Balance that must remain strictly exceeded after a withdrawal
    pub min_reserve: Uint128,
    /// Smallest accepted deposit (None for the basic layout)
    pub min_accept_amount: Option<Uint128>,
    /// Native denomination held by the wallet
    pub denom: String,
    /// Initialization layout the wallet was created with
    pub layout: ConfigLayout,
}

pub const STATE: Item<State> = Item::new("state");
