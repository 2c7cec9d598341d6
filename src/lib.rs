pub mod address;
pub mod channel;
pub mod coins;
pub mod error;
pub mod keeper;
pub mod keys;
pub mod ledger;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
pub mod store;
pub mod tags;
