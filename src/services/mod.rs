//! Service layer for business logic and orchestration.
//!
//! This module contains the alignment strategies, the value-domain
//! calculator, and the chart-assembly services that sit between the data
//! access layer and the HTTP handlers.

pub mod alignment;

pub mod domain;

pub mod palette;

pub mod trajectory;



pub use alignment::{CalendarAligner, DailyInterpolator, IndexAligner, SeriesAligner};
pub use domain::compute_value_domain;
pub use trajectory::{
    get_career_trajectory_data, get_history_trajectory_data, get_season_trajectory_data,
};
