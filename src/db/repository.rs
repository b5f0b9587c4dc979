//! Repository trait and error types for player rating storage.

use async_trait::async_trait;

use crate::api::PlayerInfo;
use crate::models::{HistoryError, PlayerRecord};

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum RepositoryError {
    /// Requested player was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Data validation failed before a store operation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The global repository was used before initialization.
    #[error("Repository not initialized: {0}")]
    NotInitialized(String),

    /// Backend storage failure.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<HistoryError> for RepositoryError {
    fn from(err: HistoryError) -> Self {
        RepositoryError::Validation(err.to_string())
    }
}

/// Repository trait for player rating histories.
///
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// List all stored players with lightweight metadata.
    async fn list_players(&self) -> RepositoryResult<Vec<PlayerInfo>>;

    /// Fetch one player's full stored rating record.
    ///
    /// # Returns
    /// * `Ok(PlayerRecord)` - The stored record
    /// * `Err(RepositoryError::NotFound)` - If no such player exists
    async fn fetch_player_record(&self, name: &str) -> RepositoryResult<PlayerRecord>;

    /// Store (or replace) one player's rating record.
    ///
    /// Callers are expected to have validated the record; implementations may
    /// assume its ordering invariants hold.
    async fn store_player_record(&self, record: &PlayerRecord) -> RepositoryResult<()>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
