//! High-level data-access functions.
//!
//! These functions sit between the HTTP handlers and the repository trait,
//! adding input validation and projection. Use these rather than the raw
//! repository in application code.

use crate::api::{PlayerInfo, RatingSystem};
use crate::db::repository::{PlayerRepository, RepositoryResult};
use crate::models::{PlayerHistory, PlayerRecord};

/// List all stored players.
pub async fn list_players(repo: &dyn PlayerRepository) -> RepositoryResult<Vec<PlayerInfo>> {
    repo.list_players().await
}

/// Validate and store one player's rating record.
///
/// Ordering violations (non-increasing match numbers, decreasing dates) are a
/// caller contract violation and are rejected here, before anything reaches
/// the alignment code.
pub async fn store_player(
    repo: &dyn PlayerRepository,
    record: &PlayerRecord,
) -> RepositoryResult<()> {
    record.validate()?;
    log::debug!(
        "Storing player '{}' with {} rating rows",
        record.name,
        record.records.len()
    );
    repo.store_player_record(record).await
}

/// Fetch one player's single-system trajectory, ordered by career match
/// number, optionally truncated to the first `limit` observations.
pub async fn fetch_player_history(
    repo: &dyn PlayerRepository,
    name: &str,
    system: RatingSystem,
    limit: Option<usize>,
) -> RepositoryResult<PlayerHistory> {
    let record = repo.fetch_player_record(name).await?;
    let mut history = record.history(system);
    if let Some(limit) = limit {
        history.observations.truncate(limit);
    }
    Ok(history)
}

/// Check that the backend is reachable.
pub async fn health_check(repo: &dyn PlayerRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
