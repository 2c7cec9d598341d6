//! Key encoding for the channel store.
//!
//! Channel records and per-pair sequence counters share one byte-keyed
//! store, separated by a leading namespace byte. All fields are fixed
//! width (20-byte addresses, 8-byte big-endian ids), so keys never
//! overlap across distinct (sender, receiver, id) triples and a per-pair
//! prefix scan yields channels in ascending id order.

use crate::address::AccountAddress;

/// Namespace byte for channel records.
pub const CHANNEL_PREFIX: u8 = 0x01;
/// Namespace byte for per-pair sequence counters.
pub const SEQUENCE_PREFIX: u8 = 0x02;

/// Storage key for a channel record.
pub fn channel_key(sender: &AccountAddress, receiver: &AccountAddress, id: i64) -> Vec<u8> {
    let mut key = pair_prefix(sender, receiver);
    key.extend_from_slice(&id.to_be_bytes());
    key
}

/// Shared key prefix of every channel between `sender` and `receiver`.
pub fn pair_prefix(sender: &AccountAddress, receiver: &AccountAddress) -> Vec<u8> {
    let mut key = Vec::with_capacity(1 + 2 * sender.as_bytes().len() + 8);
    key.push(CHANNEL_PREFIX);
    key.extend_from_slice(sender.as_bytes());
    key.extend_from_slice(receiver.as_bytes());
    key
}

/// Storage key for the monotonic id sequence of a (sender, receiver) pair.
pub fn sequence_key(sender: &AccountAddress, receiver: &AccountAddress) -> Vec<u8> {
    let mut key = Vec::with_capacity(1 + 2 * sender.as_bytes().len());
    key.push(SEQUENCE_PREFIX);
    key.extend_from_slice(sender.as_bytes());
    key.extend_from_slice(receiver.as_bytes());
    key
}
