use chrono::NaiveDate;

/// Calendar-date format used across the API (ISO 8601).
/// `YYYY-MM-DD` sorts correctly lexicographically, which the frontend relies
/// on when it treats axis labels as plain strings.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Error for unparseable calendar-date strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid calendar date '{input}': expected YYYY-MM-DD")]
pub struct DateParseError {
    pub input: String,
}

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// Malformed dates are a caller contract violation; they are rejected here at
/// the input boundary rather than handled mid-algorithm.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| DateParseError {
        input: input.to_string(),
    })
}

/// Continuous day count used as the interpolation timestamp for a date.
pub fn day_number(date: NaiveDate) -> i64 {
    i64::from(chrono::Datelike::num_days_from_ce(&date))
}

/// Iterate every calendar day from `start` through `end`, both inclusive.
/// Yields nothing if `end` precedes `start`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}
