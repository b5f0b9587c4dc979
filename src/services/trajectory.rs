//! Trajectory chart assembly.
//!
//! Fetches per-player series from the repository, runs the selected aligner,
//! derives the value domain, and assembles the chart payload for the
//! rendering layer. Each invocation is a pure computation over a fixed
//! snapshot; nothing is cached across calls.

use crate::api::{DateWindow, RatingSystem, SeriesInfo, TrajectoryChartData};
use crate::db::{get_repository, services as db_services, RepositoryError, RepositoryResult};
use crate::models::PlayerHistory;
use crate::services::alignment::{
    CalendarAligner, DailyInterpolator, IndexAligner, SeriesAligner,
};
use crate::services::domain::compute_value_domain;
use crate::services::palette::color_index;

fn build_chart(
    histories: Vec<PlayerHistory>,
    aligner: &dyn SeriesAligner,
    window: Option<&DateWindow>,
    system: RatingSystem,
) -> TrajectoryChartData {
    let rows = aligner.align(&histories, window);
    let domain = compute_value_domain(&histories, window, system);
    let series = histories
        .iter()
        .enumerate()
        .map(|(i, h)| SeriesInfo {
            name: h.name.clone(),
            data_points: h.len(),
            color_index: color_index(i),
        })
        .collect();

    TrajectoryChartData {
        system,
        system_label: system.label().to_string(),
        series,
        rows,
        domain,
    }
}

/// Career comparison: one row per career match ordinal.
pub fn compute_career_chart(
    histories: Vec<PlayerHistory>,
    system: RatingSystem,
) -> TrajectoryChartData {
    build_chart(histories, &IndexAligner, None, system)
}

/// History comparison: one row per date on which at least one player played,
/// exact-date cells only.
pub fn compute_history_chart(
    histories: Vec<PlayerHistory>,
    window: Option<&DateWindow>,
    system: RatingSystem,
) -> TrajectoryChartData {
    build_chart(histories, &CalendarAligner, window, system)
}

/// Season comparison: one row per calendar day inside any player's own
/// in-window range, gaps interpolated.
pub fn compute_season_chart(
    histories: Vec<PlayerHistory>,
    window: &DateWindow,
    system: RatingSystem,
) -> TrajectoryChartData {
    build_chart(histories, &DailyInterpolator, Some(window), system)
}

/// Fetch every requested player's series before any alignment begins.
///
/// A missing player is an error rather than a silently shrunken axis: a
/// partial fetch must never reach an aligner.
async fn fetch_all_histories(
    players: &[String],
    system: RatingSystem,
    limit: Option<usize>,
) -> RepositoryResult<Vec<PlayerHistory>> {
    let repo =
        get_repository().map_err(|e| RepositoryError::NotInitialized(e.to_string()))?;

    let mut histories = Vec::with_capacity(players.len());
    for name in players {
        histories
            .push(db_services::fetch_player_history(repo.as_ref(), name, system, limit).await?);
    }
    Ok(histories)
}

/// Get the career (match-ordinal) comparison chart from the repository.
pub async fn get_career_trajectory_data(
    players: &[String],
    system: RatingSystem,
    limit: Option<usize>,
) -> RepositoryResult<TrajectoryChartData> {
    let histories = fetch_all_histories(players, system, limit).await?;
    log::debug!(
        "Career chart: {} players, {} system",
        histories.len(),
        system
    );
    Ok(compute_career_chart(histories, system))
}

/// Get the exact-date history comparison chart from the repository.
pub async fn get_history_trajectory_data(
    players: &[String],
    system: RatingSystem,
    window: Option<DateWindow>,
) -> RepositoryResult<TrajectoryChartData> {
    let histories = fetch_all_histories(players, system, None).await?;
    Ok(compute_history_chart(histories, window.as_ref(), system))
}

/// Get the interpolated daily comparison chart from the repository.
pub async fn get_season_trajectory_data(
    players: &[String],
    system: RatingSystem,
    window: DateWindow,
) -> RepositoryResult<TrajectoryChartData> {
    let histories = fetch_all_histories(players, system, None).await?;
    log::debug!(
        "Season chart: {} players over {} days",
        histories.len(),
        window.len_days()
    );
    Ok(compute_season_chart(histories, &window, system))
}
