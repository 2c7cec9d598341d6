use crate::address::AccountAddress;
use crate::channel::Channel;
use crate::coins::Coins;
use crate::error::{ChannelError, Result};
use crate::keys;
use crate::ledger::Ledger;
use crate::store::ChannelStore;
use crate::tags::{
    TAG_ACTION, TAG_AMOUNT, TAG_CHANNEL_ID, TAG_RECEIVER, TAG_RECEIVER_AMOUNT, TAG_SENDER,
    TAG_SENDER_AMOUNT, Tags,
};
use tracing::debug;

/// Owns the channel lifecycle and all validation.
///
/// Collaborators are injected at construction and held for the keeper's
/// lifetime. The keeper performs no locking, retry, or rollback of its own:
/// each operation runs to completion under the host's serializable,
/// all-or-nothing transaction boundary, and validation failures are
/// returned before any store or ledger mutation.
pub struct ChannelKeeper<S: ChannelStore, L: Ledger> {
    store: S,
    ledger: L,
}

impl<S: ChannelStore, L: Ledger> ChannelKeeper<S, L> {
    pub fn new(store: S, ledger: L) -> Self {
        Self { store, ledger }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Looks up an open channel. Absence is a normal outcome, not an error;
    /// `Err` is returned only when a present record fails to decode, which
    /// is state corruption.
    pub fn get_channel(
        &self,
        sender: &AccountAddress,
        receiver: &AccountAddress,
        id: i64,
    ) -> Result<Option<Channel>> {
        let key = keys::channel_key(sender, receiver, id);
        match self.store.get(&key)? {
            Some(bytes) => Ok(Some(decode_channel(&bytes)?)),
            None => Ok(None),
        }
    }

    /// All open channels between `sender` and `receiver`, in ascending id
    /// order. A range query over the pair's key prefix.
    pub fn list_channels(
        &self,
        sender: &AccountAddress,
        receiver: &AccountAddress,
    ) -> Result<Vec<Channel>> {
        let prefix = keys::pair_prefix(sender, receiver);
        self.store
            .scan_prefix(&prefix)?
            .iter()
            .map(|(_, bytes)| decode_channel(bytes))
            .collect()
    }

    /// Opens a new channel, locking `amount` out of `sender`'s ledger
    /// account. Ids come from a monotonic per-pair sequence, so ids are
    /// never reused even after earlier channels close.
    pub fn create_channel(
        &mut self,
        sender: &AccountAddress,
        receiver: &AccountAddress,
        amount: Coins,
    ) -> Result<Tags> {
        validate_address(sender)?;
        validate_address(receiver)?;
        validate_amount(&amount)?;

        let id = self.next_sequence(sender, receiver)?;

        // The debit is the only fallible effect; it runs before any write
        // so an insufficient-funds failure leaves no trace.
        self.ledger.debit(sender, &amount)?;

        let channel = Channel {
            sender: *sender,
            receiver: *receiver,
            id,
            balance: amount,
        };
        let bytes = encode_channel(&channel)?;
        self.store
            .set(&keys::channel_key(sender, receiver, id), bytes)?;
        self.set_sequence(sender, receiver, id)?;

        debug!(
            sender = %sender,
            receiver = %receiver,
            id,
            amount = %channel.balance,
            "channel created"
        );

        Ok(Tags::new()
            .with(TAG_ACTION, "create_channel")
            .with(TAG_SENDER, sender.to_string())
            .with(TAG_RECEIVER, receiver.to_string())
            .with(TAG_CHANNEL_ID, id.to_string())
            .with(TAG_AMOUNT, channel.balance.to_string()))
    }

    /// Settles and deletes a channel, splitting its balance between the
    /// parties: `receiver_amount` to the receiver, the remainder back to
    /// the sender. Exactly-once: the record is gone afterwards, so a retry
    /// gets `ChannelNotFound` instead of double-crediting.
    pub fn close_channel(
        &mut self,
        sender: &AccountAddress,
        receiver: &AccountAddress,
        id: i64,
        receiver_amount: Coins,
    ) -> Result<Tags> {
        validate_address(sender)?;
        validate_address(receiver)?;
        validate_amount(&receiver_amount)?;
        if id < 0 {
            return Err(ChannelError::InvalidChannelId(id));
        }

        let channel = self.get_channel(sender, receiver, id)?.ok_or_else(|| {
            ChannelError::ChannelNotFound(format!(
                "no open channel {id} from {sender} to {receiver}"
            ))
        })?;

        let sender_amount = channel.balance.sub(&receiver_amount);
        if !sender_amount.is_non_negative() {
            return Err(ChannelError::InsufficientFunds(format!(
                "channel balance {} cannot cover {}",
                channel.balance, receiver_amount
            )));
        }

        self.ledger.credit(sender, &sender_amount);
        self.ledger.credit(receiver, &receiver_amount);
        self.store
            .delete(&keys::channel_key(sender, receiver, id))?;

        debug!(
            sender = %sender,
            receiver = %receiver,
            id,
            sender_amount = %sender_amount,
            receiver_amount = %receiver_amount,
            "channel closed"
        );

        Ok(Tags::new()
            .with(TAG_ACTION, "close_channel")
            .with(TAG_SENDER, sender.to_string())
            .with(TAG_RECEIVER, receiver.to_string())
            .with(TAG_CHANNEL_ID, id.to_string())
            .with(TAG_SENDER_AMOUNT, sender_amount.to_string())
            .with(TAG_RECEIVER_AMOUNT, receiver_amount.to_string()))
    }

    /// Next channel id for the pair: last issued id + 1, starting at 1.
    /// Read-only; the counter is persisted by `set_sequence` once the
    /// creation's other effects have succeeded.
    fn next_sequence(&self, sender: &AccountAddress, receiver: &AccountAddress) -> Result<i64> {
        let key = keys::sequence_key(sender, receiver);
        let last = match self.store.get(&key)? {
            Some(bytes) => decode_sequence(&bytes)?,
            None => 0,
        };
        Ok(last + 1)
    }

    fn set_sequence(
        &mut self,
        sender: &AccountAddress,
        receiver: &AccountAddress,
        id: i64,
    ) -> Result<()> {
        let key = keys::sequence_key(sender, receiver);
        self.store.set(&key, id.to_be_bytes().to_vec())
    }
}

fn validate_address(address: &AccountAddress) -> Result<()> {
    if address.is_zero() {
        return Err(ChannelError::InvalidAddress(address.to_string()));
    }
    Ok(())
}

fn validate_amount(amount: &Coins) -> Result<()> {
    if amount.is_empty() {
        return Err(ChannelError::InvalidAmount("empty coin set".to_string()));
    }
    if !amount.is_valid() || !amount.is_positive() {
        return Err(ChannelError::InvalidAmount(amount.to_string()));
    }
    Ok(())
}

fn encode_channel(channel: &Channel) -> Result<Vec<u8>> {
    serde_json::to_vec(channel)
        .map_err(|e| ChannelError::Corrupt(format!("channel record failed to encode: {e}")))
}

fn decode_channel(bytes: &[u8]) -> Result<Channel> {
    serde_json::from_slice(bytes)
        .map_err(|e| ChannelError::Corrupt(format!("channel record failed to decode: {e}")))
}

fn decode_sequence(bytes: &[u8]) -> Result<i64> {
    let arr: [u8; 8] = bytes
        .try_into()
        .map_err(|_| ChannelError::Corrupt(format!("sequence counter of {} bytes", bytes.len())))?;
    Ok(i64::from_be_bytes(arr))
}
