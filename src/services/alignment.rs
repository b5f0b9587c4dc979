//! Series alignment strategies.
//!
//! Players play on different dates, at different frequencies, with gaps, so
//! their rating histories cannot be joined naively. The three aligners here
//! map heterogeneous per-player series onto one shared axis, each with its own
//! bucketing and fill policy over the same union/sort/merge skeleton:
//!
//! - [`IndexAligner`]: by career match ordinal, shorter series padded with
//!   absent cells.
//! - [`CalendarAligner`]: by exact calendar date; a player contributes a cell
//!   only on dates it has an observation. No carry-forward.
//! - [`DailyInterpolator`]: every calendar day inside each player's own
//!   observed range within a window, gaps filled by linear interpolation.
//!
//! The carry-forward divergence between [`CalendarAligner`] (never fills) and
//! [`DailyInterpolator`] (always fills inside a player's own support) is an
//! intentional policy difference; callers pick the variant per chart.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::api::{AlignedRow, AxisPoint, DateWindow};
use crate::models::time::{day_number, days_inclusive};
use crate::models::PlayerHistory;

/// Maps a list of player series onto a shared axis.
///
/// Output rows are ordered by ascending axis point; row cells are parallel to
/// the input series order, `None` marking an absent cell. Input series are
/// never mutated. `IndexAligner` disregards the window (its axis has no
/// calendar meaning).
pub trait SeriesAligner {
    fn align(&self, series: &[PlayerHistory], window: Option<&DateWindow>) -> Vec<AlignedRow>;
}

fn in_window(date: NaiveDate, window: Option<&DateWindow>) -> bool {
    window.map_or(true, |w| w.contains(date))
}

/// Shared interpolation primitive: value at `t` on the segment between
/// `(t1, v1)` and `(t2, v2)`.
///
/// Identical bracketing timestamps prefer the later observation's value,
/// never divide by zero.
pub(crate) fn lerp_between(t: NaiveDate, p1: (NaiveDate, f64), p2: (NaiveDate, f64)) -> f64 {
    let (t1, v1) = p1;
    let (t2, v2) = p2;
    let span = day_number(t2) - day_number(t1);
    if span == 0 {
        return v2;
    }
    let elapsed = (day_number(t) - day_number(t1)) as f64;
    v1 + (v2 - v1) * elapsed / span as f64
}

// =========================================================
// Index alignment
// =========================================================

/// Aligns series by ordinal position: row `i` holds every player's rating
/// after their `i`-th recorded match.
///
/// The axis is the career match number, not calendar time; comparisons read
/// as "Nth match of career" across players with very different career spans.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexAligner;

impl SeriesAligner for IndexAligner {
    fn align(&self, series: &[PlayerHistory], _window: Option<&DateWindow>) -> Vec<AlignedRow> {
        let row_count = series.iter().map(|s| s.len()).max().unwrap_or(0);

        (0..row_count)
            .map(|i| AlignedRow {
                axis: AxisPoint::Ordinal(i),
                values: series
                    .iter()
                    .map(|s| s.observations.get(i).map(|o| o.rating))
                    .collect(),
            })
            .collect()
    }
}

// =========================================================
// Calendar alignment
// =========================================================

/// Aligns series by exact calendar date.
///
/// The axis is the sorted, deduplicated union of observation dates present in
/// at least one series (window-filtered when a window is given). A cell is
/// present only when the player has an observation on that exact date; stale
/// values are never carried forward. If a player has multiple observations on
/// one date, the last in series order wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarAligner;

impl SeriesAligner for CalendarAligner {
    fn align(&self, series: &[PlayerHistory], window: Option<&DateWindow>) -> Vec<AlignedRow> {
        // Later same-date observations overwrite earlier ones on insert.
        let date_maps: Vec<BTreeMap<NaiveDate, f64>> = series
            .iter()
            .map(|s| {
                s.observations
                    .iter()
                    .filter(|o| in_window(o.date, window))
                    .map(|o| (o.date, o.rating))
                    .collect()
            })
            .collect();

        let mut axis = BTreeSet::new();
        for map in &date_maps {
            axis.extend(map.keys().copied());
        }

        axis.into_iter()
            .map(|date| AlignedRow {
                axis: AxisPoint::Date(date),
                values: date_maps.iter().map(|m| m.get(&date).copied()).collect(),
            })
            .collect()
    }
}

// =========================================================
// Interpolating daily alignment
// =========================================================

/// Aligns series onto a daily axis within a window, filling gaps by linear
/// interpolation in time.
///
/// Each player's support is its own `[first, last]` in-window observation
/// range; days are never fabricated before a player's first or after its last
/// in-window observation. Exact observation dates keep their value verbatim.
/// A player with a single in-window observation contributes that one point; a
/// player with none contributes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyInterpolator;

impl DailyInterpolator {
    /// Day-by-day values for one series inside the window.
    fn daily_values(series: &PlayerHistory, window: Option<&DateWindow>) -> BTreeMap<NaiveDate, f64> {
        let mut in_scope: Vec<(NaiveDate, f64)> = series
            .observations
            .iter()
            .filter(|o| in_window(o.date, window))
            .map(|o| (o.date, o.rating))
            .collect();
        // Stable on ties, so same-day observations keep their original order
        in_scope.sort_by_key(|(date, _)| *date);

        // Collapse intraday ties last-wins on a local copy; the stored series
        // keeps its ties.
        let mut knots: Vec<(NaiveDate, f64)> = Vec::new();
        for (date, rating) in in_scope {
            match knots.last_mut() {
                Some(last) if last.0 == date => last.1 = rating,
                _ => knots.push((date, rating)),
            }
        }

        let mut days = BTreeMap::new();
        if knots.len() == 1 {
            days.insert(knots[0].0, knots[0].1);
            return days;
        }
        for pair in knots.windows(2) {
            let (d1, v1) = pair[0];
            let (d2, v2) = pair[1];
            for day in days_inclusive(d1, d2) {
                let value = if day == d1 {
                    v1
                } else if day == d2 {
                    v2
                } else {
                    lerp_between(day, (d1, v1), (d2, v2))
                };
                days.insert(day, value);
            }
        }
        days
    }
}

impl SeriesAligner for DailyInterpolator {
    fn align(&self, series: &[PlayerHistory], window: Option<&DateWindow>) -> Vec<AlignedRow> {
        let day_maps: Vec<BTreeMap<NaiveDate, f64>> = series
            .iter()
            .map(|s| Self::daily_values(s, window))
            .collect();

        let mut axis = BTreeSet::new();
        for map in &day_maps {
            axis.extend(map.keys().copied());
        }

        axis.into_iter()
            .map(|date| AlignedRow {
                axis: AxisPoint::Date(date),
                values: day_maps.iter().map(|m| m.get(&date).copied()).collect(),
            })
            .collect()
    }
}
