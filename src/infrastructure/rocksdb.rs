use crate::domain::player::PlayerRecord;
use crate::domain::ports::RegistryStore;
use crate::error::{GameError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for player records.
pub const CF_PLAYERS: &str = "players";

/// A persistent player registry backed by RocksDB.
///
/// Records are JSON-encoded and keyed by player name, so token balances
/// and leaderboard totals survive across sessions. Thread-safe; `Clone`
/// shares the underlying `Arc<DB>`.
#[derive(Clone)]
pub struct RocksDbRegistry {
    db: Arc<DB>,
}

impl RocksDbRegistry {
    /// Opens or creates the database at the given path, ensuring the
    /// players column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_players = ColumnFamilyDescriptor::new(CF_PLAYERS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_players])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn players_cf(&self) -> Result<&rocksdb::ColumnFamily> {
        self.db.cf_handle(CF_PLAYERS).ok_or_else(|| {
            GameError::Internal(Box::new(std::io::Error::other(
                "players column family not found",
            )))
        })
    }
}

#[async_trait]
impl RegistryStore for RocksDbRegistry {
    async fn store(&self, record: PlayerRecord) -> Result<()> {
        let cf = self.players_cf()?;
        let value = serde_json::to_vec(&record)?;
        self.db.put_cf(cf, record.name.as_bytes(), value)?;
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<PlayerRecord>> {
        let cf = self.players_cf()?;
        match self.db.get_cf(cf, name.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn all_players(&self) -> Result<Vec<PlayerRecord>> {
        let cf = self.players_cf()?;
        let mut players = Vec::new();
        for item in self.db.iterator_cf(cf, rocksdb::IteratorMode::Start) {
            let (_key, value) = item?;
            players.push(serde_json::from_slice(&value)?);
        }
        Ok(players)
    }
}
