use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::{DateWindow, RatingSystem};

// =========================================================
// Trajectory chart types + routes
// =========================================================

/// One row key in an aligned chart: a career match ordinal or a calendar
/// date. Serializes as a bare number or an ISO 8601 date string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisPoint {
    Ordinal(usize),
    Date(NaiveDate),
}

/// One aligned output row: the axis point plus one cell per chart column, in
/// column order. `None` is an absent cell, distinct from a zero rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedRow {
    pub axis: AxisPoint,
    pub values: Vec<Option<f64>>,
}

/// Closed value-axis range handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

/// Column metadata for one player series in a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesInfo {
    /// Player name (column key, unique per chart)
    pub name: String,
    /// Number of observations backing the series
    pub data_points: usize,
    /// Stable palette slot for the series
    pub color_index: usize,
}

/// Complete aligned chart dataset for the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryChartData {
    /// Rating system the values came from
    pub system: RatingSystem,
    /// Human-readable system label for axis titles
    pub system_label: String,
    /// Column metadata, in input order
    pub series: Vec<SeriesInfo>,
    /// Aligned rows, ascending by axis point
    pub rows: Vec<AlignedRow>,
    /// Value-axis range covering every present cell plus headroom
    pub domain: ValueDomain,
}

/// Route function name constants
pub const GET_CAREER_TRAJECTORIES: &str = "get_career_trajectories";
pub const GET_HISTORY_TRAJECTORIES: &str = "get_history_trajectories";
pub const GET_SEASON_TRAJECTORIES: &str = "get_season_trajectories";

/// Get the career (match-ordinal) comparison chart for a set of players.
/// Accepts optional parameters and applies the documented defaults.
pub async fn get_career_trajectories(
    players: Vec<String>,
    system: Option<RatingSystem>,
    limit: Option<usize>,
) -> Result<crate::api::TrajectoryChartData, crate::db::RepositoryError> {
    let system = system.unwrap_or_default();
    crate::services::trajectory::get_career_trajectory_data(&players, system, limit).await
}

/// Get the exact-date history comparison chart for a set of players.
pub async fn get_history_trajectories(
    players: Vec<String>,
    system: Option<RatingSystem>,
    window: Option<DateWindow>,
) -> Result<crate::api::TrajectoryChartData, crate::db::RepositoryError> {
    let system = system.unwrap_or_default();
    crate::services::trajectory::get_history_trajectory_data(&players, system, window).await
}

/// Get the interpolated daily comparison chart for a set of players over a
/// bounded window.
pub async fn get_season_trajectories(
    players: Vec<String>,
    system: Option<RatingSystem>,
    window: DateWindow,
) -> Result<crate::api::TrajectoryChartData, crate::db::RepositoryError> {
    let system = system.unwrap_or_default();
    crate::services::trajectory::get_season_trajectory_data(&players, system, window).await
}
