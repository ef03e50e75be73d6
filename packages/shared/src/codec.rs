use cosmwasm_schema::cw_serde;
use cosmwasm_std::CanonicalAddr;
use thiserror::Error;

const THRESHOLD_LEN: usize = 4;

#[derive(Error, Debug, PartialEq)]
pub enum CodecError {
    #[error("Payload is empty")]
    Empty,

    #[error("Admin address must not be empty")]
    EmptyAdmin,

    #[error("Admin address too long ({0} bytes, max 255)")]
    AdminTooLong(usize),

    #[error("Payload truncated: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("Unexpected threshold section of {0} bytes")]
    BadTail(usize),
}

/// Which fields the initialization record carries
#[cw_serde]
#[derive(Copy)]
pub enum ConfigLayout {
    /// admin + minimum reserve
    Basic,
    /// admin + minimum reserve + minimum deposit
    Extended,
}

impl ConfigLayout {
    /// The layout is decided by whether a minimum deposit is configured
    pub fn of<T>(min_accept_amount: Option<&T>) -> Self {
        match min_accept_amount {
            Some(_) => ConfigLayout::Extended,
            None => ConfigLayout::Basic,
        }
    }
}

/// Fixed-width initialization record:
/// `[admin_len: u8][admin bytes][min_reserve: u32 BE][min_accept_amount: u32 BE]?`
#[derive(Clone, Debug, PartialEq)]
pub struct PackedConfig {
    pub admin: CanonicalAddr,
    pub min_reserve: u32,
    pub min_accept_amount: Option<u32>,
}

impl PackedConfig {
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        let admin = self.admin.as_slice();
        if admin.is_empty() {
            return Err(CodecError::EmptyAdmin);
        }
        let admin_len = u8::try_from(admin.len()).map_err(|_| CodecError::AdminTooLong(admin.len()))?;

        let mut out = Vec::with_capacity(1 + admin.len() + 2 * THRESHOLD_LEN);
        out.push(admin_len);
        out.extend_from_slice(admin);
        out.extend_from_slice(&self.min_reserve.to_be_bytes());
        if let Some(min_accept) = self.min_accept_amount {
            out.extend_from_slice(&min_accept.to_be_bytes());
        }
        Ok(out)
    }

    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        let (&admin_len, rest) = data.split_first().ok_or(CodecError::Empty)?;
        let admin_len = admin_len as usize;
        if admin_len == 0 {
            return Err(CodecError::EmptyAdmin);
        }
        if rest.len() < admin_len + THRESHOLD_LEN {
            return Err(CodecError::Truncated {
                expected: 1 + admin_len + THRESHOLD_LEN,
                actual: data.len(),
            });
        }

        let (admin, tail) = rest.split_at(admin_len);
        let (min_reserve, min_accept_amount) = match tail.len() {
            THRESHOLD_LEN => (read_u32(tail), None),
            n if n == 2 * THRESHOLD_LEN => {
                let (reserve, accept) = tail.split_at(THRESHOLD_LEN);
                (read_u32(reserve), Some(read_u32(accept)))
            }
            n => return Err(CodecError::BadTail(n)),
        };

        Ok(PackedConfig {
            admin: CanonicalAddr::from(admin.to_vec()),
            min_reserve,
            min_accept_amount,
        })
    }
}

// Callers guarantee a 4-byte slice
fn read_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; THRESHOLD_LEN];
    buf.copy_from_slice(&bytes[..THRESHOLD_LEN]);
    u32::from_be_bytes(buf)
}
