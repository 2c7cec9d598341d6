use crate::error::{ChannelError, Result};
use crate::store::ChannelStore;
use rocksdb::{DB, Direction, IteratorMode, Options};
use std::path::Path;
use std::sync::Arc;

/// A persistent [`ChannelStore`] backed by RocksDB.
///
/// Channel and sequence keys already carry their namespace byte, so a
/// single keyspace suffices. All backend failures surface as the
/// unrecoverable `Store` error variant.
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        let db = DB::open(&opts, path).map_err(store_err)?;
        Ok(Self { db: Arc::new(db) })
    }
}

fn store_err(e: rocksdb::Error) -> ChannelError {
    ChannelError::Store(Box::new(e))
}

impl ChannelStore for RocksDBStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        self.db.get(key).map_err(store_err)
    }

    fn set(&mut self, key: &[u8], value: Vec<u8>) -> Result<()> {
        self.db.put(key, value).map_err(store_err)
    }

    fn delete(&mut self, key: &[u8]) -> Result<()> {
        self.db.delete(key).map_err(store_err)
    }

    fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>> {
        let mut entries = Vec::new();
        let iter = self
            .db
            .iterator(IteratorMode::From(prefix, Direction::Forward));
        for item in iter {
            let (key, value) = item.map_err(store_err)?;
            if !key.starts_with(prefix) {
                break;
            }
            entries.push((key.to_vec(), value.to_vec()));
        }
        Ok(entries)
    }
}
