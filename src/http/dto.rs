//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The chart DTOs are re-exported from the routes module since they already
//! derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Chart output
    AlignedRow, AxisPoint, SeriesInfo, TrajectoryChartData, ValueDomain,
    // Players
    PlayerInfo,
};
use crate::api::{DateWindow, RatingSystem};
use crate::models::time::parse_iso_date;
use crate::models::RatingObservation;

/// Query parameters for the multi-player chart endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChartQuery {
    /// Comma-separated player names
    pub players: String,
    /// Rating system (elo, tsr, glicko2; default elo)
    #[serde(default)]
    pub system: Option<RatingSystem>,
    /// Limit observations per player (career chart only)
    #[serde(default)]
    pub limit: Option<usize>,
    /// Window start date, inclusive (ISO 8601 `YYYY-MM-DD`)
    #[serde(default)]
    pub from: Option<String>,
    /// Window end date, inclusive (ISO 8601 `YYYY-MM-DD`)
    #[serde(default)]
    pub to: Option<String>,
}

impl ChartQuery {
    /// Split the comma-separated player list, dropping empty entries.
    pub fn player_list(&self) -> Vec<String> {
        self.players
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Build the optional date window from `from`/`to`.
    ///
    /// Both must be given together, parse as ISO 8601 calendar dates, and
    /// `from` must not be after `to`.
    pub fn window(&self) -> Result<Option<DateWindow>, String> {
        match (&self.from, &self.to) {
            (None, None) => Ok(None),
            (Some(from), Some(to)) => {
                let from = parse_iso_date(from).map_err(|e| e.to_string())?;
                let to = parse_iso_date(to).map_err(|e| e.to_string())?;
                DateWindow::new(from, to)
                    .map(Some)
                    .ok_or_else(|| format!("'from' ({}) must not be after 'to' ({})", from, to))
            }
            _ => Err("'from' and 'to' must be provided together".to_string()),
        }
    }
}

/// Query parameters for the single-player trajectory endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlayerTrajectoryQuery {
    /// Rating system (default elo)
    #[serde(default)]
    pub system: Option<RatingSystem>,
    /// Limit data points (useful for large careers)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Response for the single-player trajectory endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerTrajectoryResponse {
    /// Player name
    pub player: String,
    /// Number of returned observations
    pub total_matches: usize,
    /// Ordered observations
    pub data_points: Vec<RatingObservation>,
}

/// Response for storing a player record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorePlayerResponse {
    /// Player name
    pub name: String,
    /// Number of stored rating rows
    pub stored_matches: usize,
    /// Message about the operation
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository status
    pub database: String,
}

/// Player list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerListResponse {
    /// List of players
    pub players: Vec<PlayerInfo>,
    /// Total count
    pub total: usize,
}
