use cosmwasm_std::Binary;

/// Accept a deposit from any sender, subject to the minimum deposit
pub const OP_DEPOSIT: u32 = 0xa4d8086f;
/// Release funds to the administrator, subject to the reserve
pub const OP_ADMIN_WITHDRAW: u32 = 0x217e5898;

const OP_LEN: usize = 4;

/// Operation selected by the leading 32-bit code of a message body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Body too short to hold an operation code
    Transfer,
    Deposit,
    AdminWithdraw,
    /// Unrecognized code, treated as a plain transfer
    Unknown(u32),
}

impl Operation {
    pub fn code(&self) -> Option<u32> {
        match self {
            Operation::Transfer => None,
            Operation::Deposit => Some(OP_DEPOSIT),
            Operation::AdminWithdraw => Some(OP_ADMIN_WITHDRAW),
            Operation::Unknown(code) => Some(*code),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Transfer => "transfer",
            Operation::Deposit => "deposit",
            Operation::AdminWithdraw => "admin_withdraw",
            Operation::Unknown(_) => "unknown",
        }
    }
}

/// Read the big-endian operation code at the start of `body`.
/// Anything after the code is ignored.
pub fn parse_op(body: &[u8]) -> Operation {
    let Some(head) = body.get(..OP_LEN) else {
        return Operation::Transfer;
    };
    let mut code = [0u8; OP_LEN];
    code.copy_from_slice(head);

    match u32::from_be_bytes(code) {
        OP_DEPOSIT => Operation::Deposit,
        OP_ADMIN_WITHDRAW => Operation::AdminWithdraw,
        other => Operation::Unknown(other),
    }
}

pub fn deposit_body() -> Binary {
    Binary::from(OP_DEPOSIT.to_be_bytes().to_vec())
}

pub fn admin_withdraw_body() -> Binary {
    Binary::from(OP_ADMIN_WITHDRAW.to_be_bytes().to_vec())
}
