use cosmwasm_std::{
    coins, entry_point, to_json_binary, Addr, BankMsg, Binary, Coin, Deps, DepsMut, Env,
    MessageInfo, Response, StdError, StdResult, Uint128,
};
use cw2::set_contract_version;
use shared::{parse_op, ConfigLayout, Operation, PackedConfig};

use crate::error::ContractError;
use crate::helpers::{instantiate2_salt, pack_state};
use crate::msg::{
    BalanceResponse, ConfigResponse, ExecuteMsg, InitConfig, InstantiateMsg,
    PackedConfigResponse, QueryMsg,
};
use crate::state::{State, STATE};
use crate::wallet::{dispatch, withdrawable, Inbound, Outcome};

const CONTRACT_NAME: &str = "crates.io:admin-wallet";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.denom.is_empty() {
        return Err(StdError::generic_err("denom must not be empty").into());
    }

    let (admin, min_reserve, min_accept_amount) = match msg.config {
        InitConfig::Fields {
            admin,
            min_reserve,
            min_accept_amount,
        } => (deps.api.addr_validate(&admin)?, min_reserve, min_accept_amount),
        InitConfig::Packed { data } => {
            let packed = PackedConfig::decode(data.as_slice())?;
            (
                deps.api.addr_humanize(&packed.admin)?,
                Uint128::from(packed.min_reserve),
                packed.min_accept_amount.map(Uint128::from),
            )
        }
    };

    let layout = ConfigLayout::of(min_accept_amount.as_ref());
    let state = State {
        admin,
        min_reserve,
        min_accept_amount,
        denom: msg.denom,
        layout,
    };
    STATE.save(deps.storage, &state)?;

    let mut res = Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", state.admin.as_str())
        .add_attribute("min_reserve", state.min_reserve)
        .add_attribute("layout", layout_name(layout));
    if let Some(min_accept_amount) = state.min_accept_amount {
        res = res.add_attribute("min_accept_amount", min_accept_amount);
    }
    // Thresholds wider than 32 bits have no packed form
    if let Ok(packed) = pack_state(deps.api, &state) {
        res = res.add_attribute("config_hash", hex::encode(instantiate2_salt(&packed)));
    }
    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let (op, amount) = match msg {
        ExecuteMsg::Deposit {} => (Operation::Deposit, None),
        ExecuteMsg::AdminWithdraw { amount } => (Operation::AdminWithdraw, amount),
        ExecuteMsg::Raw { body } => (parse_op(body.as_slice()), None),
    };

    let state = STATE.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(&env.contract.address, &state.denom)?
        .amount;

    let inbound = Inbound {
        value: attached(&info.funds, &state.denom)?,
        sender: info.sender,
        op,
        amount,
    };

    match dispatch(&state, balance, &inbound)? {
        Outcome::Accepted => Ok(Response::new()
            .add_attribute("method", op.name())
            .add_attribute("sender", inbound.sender)
            .add_attribute("amount", inbound.value)),
        Outcome::Transfer { to, amount } => Ok(transfer_response(op, &state.denom, to, amount)),
    }
}

fn transfer_response(op: Operation, denom: &str, to: Addr, amount: Uint128) -> Response {
    let res = Response::new()
        .add_attribute("method", op.name())
        .add_attribute("recipient", to.as_str())
        .add_attribute("amount", amount);

    // The bank module refuses empty sends
    if amount.is_zero() {
        return res;
    }
    res.add_message(BankMsg::Send {
        to_address: to.into_string(),
        amount: coins(amount.u128(), denom),
    })
}

fn attached(funds: &[Coin], denom: &str) -> StdResult<Uint128> {
    funds
        .iter()
        .filter(|coin| coin.denom == denom)
        .try_fold(Uint128::zero(), |total, coin| {
            total.checked_add(coin.amount).map_err(StdError::from)
        })
}

fn layout_name(layout: ConfigLayout) -> &'static str {
    match layout {
        ConfigLayout::Basic => "basic",
        ConfigLayout::Extended => "extended",
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetConfig {} => to_json_binary(&query_config(deps)?),
        QueryMsg::GetPackedConfig {} => to_json_binary(&query_packed_config(deps)?),
        QueryMsg::GetBalance {} => to_json_binary(&query_balance(deps, env)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let state = STATE.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: state.admin,
        min_reserve: state.min_reserve,
        min_accept_amount: state.min_accept_amount,
        denom: state.denom,
        layout: state.layout,
    })
}

fn query_packed_config(deps: Deps) -> StdResult<PackedConfigResponse> {
    let state = STATE.load(deps.storage)?;
    let data = pack_state(deps.api, &state).map_err(|err| StdError::generic_err(err.to_string()))?;
    Ok(PackedConfigResponse {
        data: Binary::from(data),
    })
}

fn query_balance(deps: Deps, env: Env) -> StdResult<BalanceResponse> {
    let state = STATE.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(&env.contract.address, &state.denom)?
        .amount;

    Ok(BalanceResponse {
        balance,
        withdrawable: withdrawable(&state, balance),
    })
}
