use super::player::PlayerRecord;
use crate::error::Result;
use async_trait::async_trait;

/// Persistence for the optional player registry/leaderboard.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    async fn store(&self, record: PlayerRecord) -> Result<()>;
    async fn get(&self, name: &str) -> Result<Option<PlayerRecord>>;
    async fn all_players(&self) -> Result<Vec<PlayerRecord>>;
}

/// Generates a short barker line for a round-outcome context string.
///
/// Callers wrap the call in a timeout and fall back to a canned line on
/// failure; a dead dialogue source never blocks round resolution.
#[async_trait]
pub trait DialogueSource: Send + Sync {
    async fn line(&self, context: &str) -> Result<String>;
}

pub type RegistryStoreBox = Box<dyn RegistryStore>;
pub type DialogueSourceBox = Box<dyn DialogueSource>;
