use cosmwasm_std::{instantiate2_address, Api, CanonicalAddr, StdError, StdResult, Uint128};
use sha2::{Digest, Sha256};
use shared::PackedConfig;

use crate::error::ContractError;
use crate::state::State;

/// Salt for `Instantiate2`: the SHA-256 of the packed initialization record
pub fn instantiate2_salt(packed: &[u8]) -> Vec<u8> {
    Sha256::digest(packed).to_vec()
}

/// Address a wallet gets when instantiated with `packed` from code `checksum`.
/// Identical configs under different code land on different addresses.
pub fn predict_canonical_address(
    checksum: &[u8],
    creator: &CanonicalAddr,
    packed: &[u8],
) -> StdResult<CanonicalAddr> {
    instantiate2_address(checksum, creator, &instantiate2_salt(packed))
        .map_err(|err| StdError::generic_err(err.to_string()))
}

/// Fixed-width record for `state`; fails when a threshold exceeds 32 bits
pub fn pack_state(api: &dyn Api, state: &State) -> Result<Vec<u8>, ContractError> {
    let packed = PackedConfig {
        admin: api.addr_canonicalize(state.admin.as_str())?,
        min_reserve: narrow(state.min_reserve)?,
        min_accept_amount: state.min_accept_amount.map(narrow).transpose()?,
    };
    Ok(packed.encode()?)
}

fn narrow(value: Uint128) -> Result<u32, ContractError> {
    u32::try_from(value.u128()).map_err(|_| ContractError::ThresholdOverflow { value })
}
