use crate::address::AccountAddress;
use crate::coins::Coins;
use serde::{Deserialize, Serialize};

/// A unidirectional payment channel: funds locked by `sender`, addressed to
/// `receiver`, pending cooperative settlement.
///
/// A record exists in the store if and only if the channel is open. Closing
/// deletes the record; there is no retained "closed" state and no in-place
/// mutation between creation and closure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub sender: AccountAddress,
    pub receiver: AccountAddress,
    /// Unique per (sender, receiver) pair, assigned from a monotonic
    /// per-pair sequence. Non-negative by validation.
    pub id: i64,
    /// Funds currently locked in the channel. Always canonical.
    pub balance: Coins,
}
