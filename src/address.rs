use crate::error::ChannelError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length in bytes of every account address.
///
/// The channel key scheme concatenates raw address bytes without length
/// delimiters, which is only unambiguous because addresses have a fixed,
/// globally known length. This type enforces that precondition.
pub const ADDRESS_LEN: usize = 20;

/// A fixed-length account identifier.
///
/// The all-zero address is the unset value and is rejected by keeper
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountAddress([u8; ADDRESS_LEN]);

impl AccountAddress {
    pub const ZERO: Self = Self([0u8; ADDRESS_LEN]);

    pub fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Builds an address from a byte slice, rejecting any length other than
    /// [`ADDRESS_LEN`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ChannelError> {
        let arr: [u8; ADDRESS_LEN] = bytes.try_into().map_err(|_| {
            ChannelError::InvalidAddress(format!(
                "expected {ADDRESS_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// The unset address. Keeper operations treat it like the source's
    /// empty address and reject it.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LEN]
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl TryFrom<&[u8]> for AccountAddress {
    type Error = ChannelError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}
