use crate::domain::player::PlayerRecord;
use crate::domain::ports::RegistryStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory player registry.
///
/// `Clone` shares the underlying map, so several handles see the same
/// records. The default choice when no database path is given.
#[derive(Default, Clone)]
pub struct InMemoryRegistry {
    players: Arc<RwLock<HashMap<String, PlayerRecord>>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RegistryStore for InMemoryRegistry {
    async fn store(&self, record: PlayerRecord) -> Result<()> {
        let mut players = self.players.write().await;
        players.insert(record.name.clone(), record);
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<PlayerRecord>> {
        let players = self.players.read().await;
        Ok(players.get(name).cloned())
    }

    async fn all_players(&self) -> Result<Vec<PlayerRecord>> {
        let players = self.players.read().await;
        Ok(players.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ledger::Tokens;

    #[tokio::test]
    async fn test_in_memory_registry_round_trip() {
        let registry = InMemoryRegistry::new();
        let mut record = PlayerRecord::new("mang-kanor");
        record.tokens = Tokens::new(250);

        registry.store(record.clone()).await.unwrap();
        let retrieved = registry.get("mang-kanor").await.unwrap().unwrap();
        assert_eq!(retrieved, record);

        assert!(registry.get("stranger").await.unwrap().is_none());
        assert_eq!(registry.all_players().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_store_overwrites_existing_record() {
        let registry = InMemoryRegistry::new();
        let mut record = PlayerRecord::new("guest");
        registry.store(record.clone()).await.unwrap();

        record.tokens = Tokens::new(40);
        registry.store(record.clone()).await.unwrap();

        let retrieved = registry.get("guest").await.unwrap().unwrap();
        assert_eq!(retrieved.tokens, Tokens::new(40));
        assert_eq!(registry.all_players().await.unwrap().len(), 1);
    }
}
