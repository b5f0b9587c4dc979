//! In-memory repository for unit testing and local development.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::PlayerInfo;
use crate::db::repository::{PlayerRepository, RepositoryError, RepositoryResult};
use crate::models::PlayerRecord;

/// In-memory `PlayerRepository` backed by a `HashMap` keyed by player name.
///
/// Data lives only for the lifetime of the process; storing a record for an
/// existing player replaces the previous record.
#[derive(Debug, Default)]
pub struct LocalRepository {
    players: RwLock<HashMap<String, PlayerRecord>>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            players: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored players.
    pub fn len(&self) -> usize {
        self.players.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.read().is_empty()
    }
}

#[async_trait]
impl PlayerRepository for LocalRepository {
    async fn list_players(&self) -> RepositoryResult<Vec<PlayerInfo>> {
        let players = self.players.read();
        let mut infos: Vec<PlayerInfo> = players
            .values()
            .map(|record| PlayerInfo {
                name: record.name.clone(),
                career_matches: record.records.len(),
                last_match: record.last_match(),
            })
            .collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(infos)
    }

    async fn fetch_player_record(&self, name: &str) -> RepositoryResult<PlayerRecord> {
        self.players
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("player '{}'", name)))
    }

    async fn store_player_record(&self, record: &PlayerRecord) -> RepositoryResult<()> {
        self.players
            .write()
            .insert(record.name.clone(), record.clone());
        Ok(())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
