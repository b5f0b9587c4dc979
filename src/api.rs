//! Public API surface for the Rust backend.
//!
//! This file consolidates the identifier and selector types shared across the
//! crate and re-exports the DTO types for the HTTP API. All types derive
//! Serialize/Deserialize for JSON serialization.

pub use crate::routes::players::PlayerInfo;
pub use crate::routes::trajectory::AlignedRow;
pub use crate::routes::trajectory::AxisPoint;
pub use crate::routes::trajectory::SeriesInfo;
pub use crate::routes::trajectory::TrajectoryChartData;
pub use crate::routes::trajectory::ValueDomain;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rating system whose values populate a trajectory.
///
/// The rating values themselves are opaque upstream quantities; this enum only
/// selects which stored column a request projects.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RatingSystem {
    #[default]
    Elo,
    Tsr,
    Glicko2,
}

impl RatingSystem {
    /// Label used in chart axis titles and API responses.
    pub fn label(&self) -> &'static str {
        match self {
            RatingSystem::Elo => "ELO",
            RatingSystem::Tsr => "TSR",
            RatingSystem::Glicko2 => "Glicko-2",
        }
    }
}

impl std::str::FromStr for RatingSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "elo" => Ok(RatingSystem::Elo),
            "tsr" => Ok(RatingSystem::Tsr),
            "glicko2" => Ok(RatingSystem::Glicko2),
            other => Err(format!("Unknown rating system: {}", other)),
        }
    }
}

impl std::fmt::Display for RatingSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingSystem::Elo => write!(f, "elo"),
            RatingSystem::Tsr => write!(f, "tsr"),
            RatingSystem::Glicko2 => write!(f, "glicko2"),
        }
    }
}

/// Closed calendar-date interval used to restrict alignment and domain
/// computation. Both endpoints are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// First date in the window
    pub start: NaiveDate,
    /// Last date in the window
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Check if a date lies inside this window (both endpoints inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Check if this window overlaps with another.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Length of the window in whole days, endpoints inclusive.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::{DateWindow, RatingSystem};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_rating_system_parse() {
        assert_eq!("elo".parse::<RatingSystem>().unwrap(), RatingSystem::Elo);
        assert_eq!("TSR".parse::<RatingSystem>().unwrap(), RatingSystem::Tsr);
        assert_eq!(
            "glicko2".parse::<RatingSystem>().unwrap(),
            RatingSystem::Glicko2
        );
        assert!("glicko".parse::<RatingSystem>().is_err());
    }

    #[test]
    fn test_rating_system_default() {
        assert_eq!(RatingSystem::default(), RatingSystem::Elo);
    }

    #[test]
    fn test_rating_system_label() {
        assert_eq!(RatingSystem::Glicko2.label(), "Glicko-2");
    }

    #[test]
    fn test_date_window_rejects_reversed() {
        let w = DateWindow::new(date("2024-06-01"), date("2024-01-01"));
        assert!(w.is_none());
    }

    #[test]
    fn test_date_window_contains() {
        let w = DateWindow::new(date("2024-01-01"), date("2024-01-31")).unwrap();
        assert!(w.contains(date("2024-01-01")));
        assert!(w.contains(date("2024-01-15")));
        assert!(w.contains(date("2024-01-31")));
        assert!(!w.contains(date("2024-02-01")));
    }

    #[test]
    fn test_date_window_single_day() {
        let w = DateWindow::new(date("2024-01-01"), date("2024-01-01")).unwrap();
        assert!(w.contains(date("2024-01-01")));
        assert_eq!(w.len_days(), 1);
    }

    #[test]
    fn test_date_window_overlaps() {
        let a = DateWindow::new(date("2024-01-01"), date("2024-01-10")).unwrap();
        let b = DateWindow::new(date("2024-01-10"), date("2024-01-20")).unwrap();
        let c = DateWindow::new(date("2024-02-01"), date("2024-02-10")).unwrap();

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }
}
