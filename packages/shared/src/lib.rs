// Wire-level types shared by the admin wallet contract and its clients

pub mod codec;
pub mod ops;

pub use codec::{CodecError, ConfigLayout, PackedConfig};
pub use ops::{admin_withdraw_body, deposit_body, parse_op, Operation, OP_ADMIN_WITHDRAW, OP_DEPOSIT};
