use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use shared::ConfigLayout;

#[cw_serde]
pub struct InstantiateMsg {
    /// Native denomination the wallet custodies
    pub denom: String,
    pub config: InitConfig,
}

#[cw_serde]
pub enum InitConfig {
    /// Structured configuration; omitting `min_accept_amount` selects the basic layout
    Fields {
        admin: String,
        min_reserve: Uint128,
        min_accept_amount: Option<Uint128>,
    },
    /// Fixed-width record `[admin_len: u8][admin][min_reserve: u32][min_accept_amount: u32]?`
    Packed { data: Binary },
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Deposit the attached funds
    Deposit {},
    /// Release funds to the administrator (defaults to the attached amount)
    AdminWithdraw { amount: Option<Uint128> },
    /// Raw body dispatched on its leading 32-bit operation code
    Raw { body: Binary },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get the wallet configuration
    #[returns(ConfigResponse)]
    GetConfig {},

    /// Get the configuration as a fixed-width record
    #[returns(PackedConfigResponse)]
    GetPackedConfig {},

    /// Get the current balance and how much of it can be withdrawn
    #[returns(BalanceResponse)]
    GetBalance {},
}

// Response types

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub min_reserve: Uint128,
    pub min_accept_amount: Option<Uint128>,
    pub denom: String,
    pub layout: ConfigLayout,
}

#[cw_serde]
pub struct PackedConfigResponse {
    pub data: Binary,
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint128,
    /// None when the balance is at or below the reserve
    pub withdrawable: Option<Uint128>,
}
