use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::RatingSystem;
use crate::models::PlayerHistory;

// =========================================================
// Player listing + raw trajectory routes
// =========================================================

/// Lightweight player listing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerInfo {
    /// Player display name
    pub name: String,
    /// Number of stored rating rows
    pub career_matches: usize,
    /// Date of the most recent stored match
    pub last_match: Option<NaiveDate>,
}

/// Route function name constants
pub const LIST_PLAYERS: &str = "list_players";
pub const STORE_PLAYER: &str = "store_player";
pub const GET_PLAYER_TRAJECTORY: &str = "get_player_trajectory";

/// Get one player's raw single-system trajectory (no alignment).
/// Accepts optional parameters and applies the documented defaults.
pub async fn get_player_trajectory(
    name: &str,
    system: Option<RatingSystem>,
    limit: Option<usize>,
) -> Result<PlayerHistory, crate::db::RepositoryError> {
    let system = system.unwrap_or_default();
    let repo = crate::db::get_repository()
        .map_err(|e| crate::db::RepositoryError::NotInitialized(e.to_string()))?;
    crate::db::services::fetch_player_history(repo.as_ref(), name, system, limit).await
}
