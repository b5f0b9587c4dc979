//! Integration tests for the routes module and its wrapper functions.

use tct_rust::api::RatingSystem;
use tct_rust::db;
use tct_rust::models::{PlayerRecord, RatingRecord};
use tct_rust::routes;

fn minimal_record(name: &str, matches: usize) -> PlayerRecord {
    PlayerRecord::new(
        name,
        (0..matches)
            .map(|i| RatingRecord {
                match_number: i,
                date: format!("2024-03-{:02}", i + 1).parse().unwrap(),
                elo: Some(1500.0 + 10.0 * i as f64),
                tsr: None,
                glicko2: None,
            })
            .collect(),
    )
}

#[test]
fn test_routes_module_exists() {
    // Ensure routes module compiles and exports expected constants
    assert_eq!(routes::trajectory::GET_CAREER_TRAJECTORIES, "get_career_trajectories");
    assert_eq!(routes::trajectory::GET_HISTORY_TRAJECTORIES, "get_history_trajectories");
    assert_eq!(routes::trajectory::GET_SEASON_TRAJECTORIES, "get_season_trajectories");
    assert_eq!(routes::players::LIST_PLAYERS, "list_players");
    assert_eq!(routes::players::STORE_PLAYER, "store_player");
    assert_eq!(routes::players::GET_PLAYER_TRAJECTORY, "get_player_trajectory");
}

#[test]
fn test_player_info_creation() {
    let info = routes::players::PlayerInfo {
        name: "Ada".to_string(),
        career_matches: 3,
        last_match: Some("2024-03-03".parse().unwrap()),
    };
    assert_eq!(info.career_matches, 3);
    assert_eq!(info.name, "Ada");
}

#[tokio::test]
async fn test_get_player_trajectory_defaults_to_elo() {
    let repo = db::get_repository().unwrap();
    db::services::store_player(repo.as_ref(), &minimal_record("routes_ada", 3))
        .await
        .unwrap();

    let history = routes::players::get_player_trajectory("routes_ada", None, None)
        .await
        .unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history.observations[2].rating, 1520.0);
}

#[tokio::test]
async fn test_get_player_trajectory_unknown_player() {
    let result = routes::players::get_player_trajectory("routes_nobody", None, None).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_get_career_trajectories_wrapper_defaults() {
    let repo = db::get_repository().unwrap();
    db::services::store_player(repo.as_ref(), &minimal_record("routes_bo", 2))
        .await
        .unwrap();

    let chart = routes::trajectory::get_career_trajectories(
        vec!["routes_bo".to_string()],
        None,
        None,
    )
    .await
    .unwrap();

    assert_eq!(chart.system, RatingSystem::Elo);
    assert_eq!(chart.rows.len(), 2);
}

#[tokio::test]
async fn test_get_history_trajectories_wrapper() {
    let repo = db::get_repository().unwrap();
    db::services::store_player(repo.as_ref(), &minimal_record("routes_cy", 2))
        .await
        .unwrap();

    let chart = routes::trajectory::get_history_trajectories(
        vec!["routes_cy".to_string()],
        Some(RatingSystem::Elo),
        None,
    )
    .await
    .unwrap();

    assert_eq!(chart.rows.len(), 2);
}
