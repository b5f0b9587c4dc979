//! Value-axis domain derivation.
//!
//! The rendered domain must never clip real data and always leaves visual
//! headroom, while anchoring to a sensible baseline when the observed spread
//! is small. The domain is recomputed per alignment invocation and never
//! cached: the in-scope value set changes with the window and the player
//! subset.

use crate::api::{DateWindow, RatingSystem, ValueDomain};
use crate::models::PlayerHistory;

/// Headroom below the minimum and above the maximum in-scope value.
pub const HEADROOM: f64 = 100.0;

/// Domain returned when no values are in scope.
pub const FALLBACK_DOMAIN: ValueDomain = ValueDomain {
    min: 2000.0,
    max: 3000.0,
};

/// Nominal value-axis floor for a rating system.
///
/// ELO and Glicko-2 careers start near 1500; TSR's Bayesian prior sits
/// higher.
pub fn baseline(system: RatingSystem) -> f64 {
    match system {
        RatingSystem::Elo => 1500.0,
        RatingSystem::Glicko2 => 1500.0,
        RatingSystem::Tsr => 2000.0,
    }
}

/// Derive the value-axis domain from the values actually in scope.
///
/// The window restriction must match whatever the aligner in effect applied.
/// Empty scope returns [`FALLBACK_DOMAIN`]. Otherwise the floor is the
/// smaller of the system baseline and `min - HEADROOM` (it never sits above
/// the observed minimum), and the ceiling is always `max + HEADROOM`.
pub fn compute_value_domain(
    series: &[PlayerHistory],
    window: Option<&DateWindow>,
    system: RatingSystem,
) -> ValueDomain {
    let mut min_value = f64::INFINITY;
    let mut max_value = f64::NEG_INFINITY;
    let mut seen = false;

    for s in series {
        for obs in &s.observations {
            if let Some(w) = window {
                if !w.contains(obs.date) {
                    continue;
                }
            }
            seen = true;
            min_value = min_value.min(obs.rating);
            max_value = max_value.max(obs.rating);
        }
    }

    if !seen {
        return FALLBACK_DOMAIN;
    }

    ValueDomain {
        min: baseline(system).min(min_value - HEADROOM),
        max: max_value + HEADROOM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RatingObservation;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn series(name: &str, points: &[(&str, f64)]) -> PlayerHistory {
        PlayerHistory::new(
            name,
            points
                .iter()
                .enumerate()
                .map(|(i, (d, v))| RatingObservation {
                    match_number: i,
                    date: date(d),
                    rating: *v,
                })
                .collect(),
        )
    }

    #[test]
    fn test_empty_input_returns_fallback() {
        let domain = compute_value_domain(&[], None, RatingSystem::Elo);
        assert_eq!(domain.min, FALLBACK_DOMAIN.min);
        assert_eq!(domain.max, FALLBACK_DOMAIN.max);
    }

    #[test]
    fn test_all_filtered_out_returns_fallback() {
        let s = series("Ada", &[("2024-01-01", 2100.0)]);
        let window =
            DateWindow::new(date("2024-06-01"), date("2024-06-30")).unwrap();
        let domain = compute_value_domain(&[s], Some(&window), RatingSystem::Elo);
        assert_eq!(domain.min, 2000.0);
        assert_eq!(domain.max, 3000.0);
    }

    #[test]
    fn test_ceiling_has_headroom() {
        let s = series("Ada", &[("2024-01-01", 2100.0), ("2024-02-01", 2400.0)]);
        let domain = compute_value_domain(&[s], None, RatingSystem::Elo);
        assert_eq!(domain.max, 2500.0);
    }

    #[test]
    fn test_floor_anchors_to_baseline_when_values_high() {
        let s = series("Ada", &[("2024-01-01", 2100.0), ("2024-02-01", 2400.0)]);
        let domain = compute_value_domain(&[s], None, RatingSystem::Elo);
        // min - 100 = 2000, but the ELO baseline sits lower
        assert_eq!(domain.min, 1500.0);
    }

    #[test]
    fn test_floor_tracks_low_values() {
        let s = series("Ada", &[("2024-01-01", 1200.0), ("2024-02-01", 1300.0)]);
        let domain = compute_value_domain(&[s], None, RatingSystem::Elo);
        assert_eq!(domain.min, 1100.0);
    }

    #[test]
    fn test_tsr_baseline() {
        let s = series("Ada", &[("2024-01-01", 2600.0)]);
        let domain = compute_value_domain(&[s], None, RatingSystem::Tsr);
        assert_eq!(domain.min, 2000.0);
        assert_eq!(domain.max, 2700.0);
    }

    #[test]
    fn test_never_clips_in_scope_values() {
        let a = series("Ada", &[("2024-01-01", 1450.0), ("2024-02-01", 2350.0)]);
        let b = series("Bo", &[("2024-01-15", 1800.0)]);
        let domain = compute_value_domain(&[a.clone(), b.clone()], None, RatingSystem::Glicko2);

        for s in [&a, &b] {
            for obs in &s.observations {
                assert!(domain.min <= obs.rating);
                assert!(domain.max >= obs.rating);
            }
        }
    }

    #[test]
    fn test_window_restricts_scope() {
        let s = series(
            "Ada",
            &[("2024-01-01", 1200.0), ("2024-06-01", 2200.0), ("2024-12-01", 2900.0)],
        );
        let window =
            DateWindow::new(date("2024-05-01"), date("2024-07-01")).unwrap();
        let domain = compute_value_domain(&[s], Some(&window), RatingSystem::Elo);
        // Only the 2200.0 observation is in scope
        assert_eq!(domain.min, 1500.0);
        assert_eq!(domain.max, 2300.0);
    }
}
