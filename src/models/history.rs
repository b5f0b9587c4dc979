//! Canonical rating-history models.
//!
//! `PlayerRecord` is the stored form: one row per completed match with the
//! per-system rating columns, mirroring the upstream `player_ratings` table.
//! `PlayerHistory` is the projected single-system series the aligners consume.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::RatingSystem;

/// Validation error for stored rating histories.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HistoryError {
    #[error("Player name must not be empty")]
    EmptyName,
    #[error("Match numbers must be strictly increasing: {prev} followed by {next}")]
    MatchNumberOrder { prev: usize, next: usize },
    #[error("Dates must be non-decreasing: {prev} followed by {next}")]
    DateOrder { prev: NaiveDate, next: NaiveDate },
}

/// One stored rating row: a player's ratings immediately after one completed
/// match. A system column is `None` when that system produced no value for
/// the match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingRecord {
    /// Career match ordinal (0-based, strictly increasing per player)
    pub match_number: usize,
    /// Match date (ISO 8601 calendar date on the wire)
    pub date: NaiveDate,
    /// ELO rating after this match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elo: Option<f64>,
    /// TSR (Bayesian-adjusted) rating after this match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tsr: Option<f64>,
    /// Glicko-2 rating after this match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glicko2: Option<f64>,
}

impl RatingRecord {
    /// Value of the selected system column, if present.
    pub fn rating(&self, system: RatingSystem) -> Option<f64> {
        match system {
            RatingSystem::Elo => self.elo,
            RatingSystem::Tsr => self.tsr,
            RatingSystem::Glicko2 => self.glicko2,
        }
    }
}

/// Full stored rating history for one player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Player display name (unique key within the store)
    pub name: String,
    /// Rating rows ordered by career match number
    pub records: Vec<RatingRecord>,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, records: Vec<RatingRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// Check the ordering invariants of the stored form.
    ///
    /// Match numbers must be strictly increasing and dates non-decreasing.
    /// Same-day ties are legal (multiple matches in one day) and are kept in
    /// original order, never collapsed here.
    pub fn validate(&self) -> Result<(), HistoryError> {
        if self.name.trim().is_empty() {
            return Err(HistoryError::EmptyName);
        }
        for pair in self.records.windows(2) {
            if pair[1].match_number <= pair[0].match_number {
                return Err(HistoryError::MatchNumberOrder {
                    prev: pair[0].match_number,
                    next: pair[1].match_number,
                });
            }
            if pair[1].date < pair[0].date {
                return Err(HistoryError::DateOrder {
                    prev: pair[0].date,
                    next: pair[1].date,
                });
            }
        }
        Ok(())
    }

    /// Project the selected rating system into an aligner-ready series,
    /// skipping rows where that system has no value.
    pub fn history(&self, system: RatingSystem) -> PlayerHistory {
        let observations = self
            .records
            .iter()
            .filter_map(|r| {
                r.rating(system).map(|rating| RatingObservation {
                    match_number: r.match_number,
                    date: r.date,
                    rating,
                })
            })
            .collect();
        PlayerHistory {
            name: self.name.clone(),
            observations,
        }
    }

    /// Date of the most recent stored match, if any.
    pub fn last_match(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.date)
    }
}

/// One rating observation consumed by the aligners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingObservation {
    /// Career match ordinal
    pub match_number: usize,
    /// Match date
    pub date: NaiveDate,
    /// Rating value after the match
    pub rating: f64,
}

/// Ordered single-system rating history for one player.
///
/// Immutable input to the aligners; the name acts as the column key in the
/// aligned output and must be unique within one alignment call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerHistory {
    pub name: String,
    pub observations: Vec<RatingObservation>,
}

impl PlayerHistory {
    pub fn new(name: impl Into<String>, observations: Vec<RatingObservation>) -> Self {
        Self {
            name: name.into(),
            observations,
        }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn record(match_number: usize, d: &str, elo: f64) -> RatingRecord {
        RatingRecord {
            match_number,
            date: date(d),
            elo: Some(elo),
            tsr: Some(elo + 400.0),
            glicko2: None,
        }
    }

    #[test]
    fn test_validate_ok() {
        let player = PlayerRecord::new(
            "Ada",
            vec![
                record(0, "2024-01-01", 1500.0),
                record(1, "2024-01-05", 1512.0),
            ],
        );
        assert!(player.validate().is_ok());
    }

    #[test]
    fn test_validate_allows_same_day_ties() {
        let player = PlayerRecord::new(
            "Ada",
            vec![
                record(0, "2024-01-01", 1500.0),
                record(1, "2024-01-01", 1510.0),
            ],
        );
        assert!(player.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let player = PlayerRecord::new("  ", vec![]);
        assert_eq!(player.validate(), Err(HistoryError::EmptyName));
    }

    #[test]
    fn test_validate_rejects_duplicate_match_number() {
        let player = PlayerRecord::new(
            "Ada",
            vec![
                record(3, "2024-01-01", 1500.0),
                record(3, "2024-01-02", 1510.0),
            ],
        );
        assert!(matches!(
            player.validate(),
            Err(HistoryError::MatchNumberOrder { prev: 3, next: 3 })
        ));
    }

    #[test]
    fn test_validate_rejects_decreasing_dates() {
        let player = PlayerRecord::new(
            "Ada",
            vec![
                record(0, "2024-01-05", 1500.0),
                record(1, "2024-01-01", 1510.0),
            ],
        );
        assert!(matches!(
            player.validate(),
            Err(HistoryError::DateOrder { .. })
        ));
    }

    #[test]
    fn test_history_projects_selected_system() {
        let player = PlayerRecord::new(
            "Ada",
            vec![
                record(0, "2024-01-01", 1500.0),
                record(1, "2024-01-05", 1512.0),
            ],
        );
        let elo = player.history(RatingSystem::Elo);
        assert_eq!(elo.len(), 2);
        assert_eq!(elo.observations[0].rating, 1500.0);

        let tsr = player.history(RatingSystem::Tsr);
        assert_eq!(tsr.observations[1].rating, 1912.0);
    }

    #[test]
    fn test_history_skips_absent_columns() {
        let player = PlayerRecord::new(
            "Ada",
            vec![
                record(0, "2024-01-01", 1500.0),
                record(1, "2024-01-05", 1512.0),
            ],
        );
        let glicko = player.history(RatingSystem::Glicko2);
        assert!(glicko.is_empty());
    }

    #[test]
    fn test_history_preserves_match_numbers() {
        let mut second = record(5, "2024-01-05", 1512.0);
        second.elo = None;
        let player = PlayerRecord::new(
            "Ada",
            vec![record(2, "2024-01-01", 1500.0), second, record(9, "2024-01-09", 1520.0)],
        );
        let elo = player.history(RatingSystem::Elo);
        // Row 5 has no ELO value and is skipped entirely
        assert_eq!(elo.len(), 2);
        assert_eq!(elo.observations[0].match_number, 2);
        assert_eq!(elo.observations[1].match_number, 9);
    }

    #[test]
    fn test_last_match() {
        let player = PlayerRecord::new(
            "Ada",
            vec![
                record(0, "2024-01-01", 1500.0),
                record(1, "2024-01-05", 1512.0),
            ],
        );
        assert_eq!(player.last_match(), Some(date("2024-01-05")));
        assert_eq!(PlayerRecord::new("Bo", vec![]).last_match(), None);
    }

    #[test]
    fn test_rating_record_serde_date_format() {
        let json = r#"{"match_number":0,"date":"2024-01-01","elo":1500.0}"#;
        let rec: RatingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.date, date("2024-01-01"));
        assert_eq!(rec.elo, Some(1500.0));
        assert_eq!(rec.tsr, None);
    }

    #[test]
    fn test_rating_record_serde_rejects_malformed_date() {
        let json = r#"{"match_number":0,"date":"01/05/2024","elo":1500.0}"#;
        assert!(serde_json::from_str::<RatingRecord>(json).is_err());
    }
}
