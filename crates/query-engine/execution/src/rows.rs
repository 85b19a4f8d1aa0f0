//! The typed records each query decodes its rows into.
//!
//! Sums and measures are optional: SQLite returns NULL for the sum of an all-null group, and a
//! null magnitude forms its own group. Fields are declared in output column order, which is
//! the order they are serialized in.

use serde::Serialize;

/// Per (year, state): total fatalities and injuries, and the number of tornadoes.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct SummaryByYearState {
    pub year: i64,
    pub state: String,
    pub total_fatalities: Option<i64>,
    pub total_injuries: Option<i64>,
    pub total_tornadoes: i64,
}

/// Per year: number of tornadoes and total fatalities.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct YearlyTrend {
    pub year: i64,
    pub tornado_count: i64,
    pub fatalities: Option<i64>,
}

/// Per (state, year): number of tornadoes.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct StateYearCount {
    pub state: String,
    pub year: i64,
    pub tornado_count: i64,
}

/// Per (year, month): number of tornadoes alongside a magnitude.
///
/// Shared by the histogram, where the magnitude is taken from an arbitrary row of the bucket,
/// and the time series, where it is part of the grouping key.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct MagnitudeTimeBucket {
    pub month: i64,
    pub year: i64,
    pub tornado_magnitude: Option<i64>,
    pub tornado_count: i64,
}

/// Per magnitude: average length and width.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct MagnitudeSizeStats {
    pub tornado_magnitude: Option<i64>,
    pub avg_length: Option<f64>,
    pub avg_width: Option<f64>,
}

/// Per magnitude: average fatalities.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct MagnitudeFatalityAverage {
    pub tornado_magnitude: Option<i64>,
    pub avg_fatalities: Option<f64>,
}

/// One tornado event: where it started and how strong it was.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct EventGeolocation {
    pub year: i64,
    pub tornado_magnitude: Option<i64>,
    pub start_latitude: Option<f64>,
    pub start_longitude: Option<f64>,
    pub state: String,
}
