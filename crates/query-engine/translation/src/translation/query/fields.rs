//! The select list of every query.

use query_engine_metadata::metadata::TornadoColumn;
use query_engine_sql::sql::{self, ast::*};

use super::QueryName;
use crate::translation::error::Error;
use crate::translation::helpers::{aliased, TableContext};

const SUMMARY_BY_YEAR_STATE: &[&str] = &[
    "year",
    "state",
    "total_fatalities",
    "total_injuries",
    "total_tornadoes",
];
const YEARLY_TREND: &[&str] = &["year", "tornado_count", "fatalities"];
const STATE_YEAR_COUNTS: &[&str] = &["state", "year", "tornado_count"];
const MAGNITUDE_TIME: &[&str] = &["month", "year", "tornado_magnitude", "tornado_count"];
const MAGNITUDE_SIZE_STATS: &[&str] = &["tornado_magnitude", "avg_length", "avg_width"];
const MAGNITUDE_FATALITY_AVG: &[&str] = &["tornado_magnitude", "avg_fatalities"];
const EVENT_GEOLOCATION: &[&str] = &[
    "year",
    "tornado_magnitude",
    "start_latitude",
    "start_longitude",
    "state",
];

pub(super) fn output_columns(query_name: QueryName) -> &'static [&'static str] {
    match query_name {
        QueryName::SummaryByYearState => SUMMARY_BY_YEAR_STATE,
        QueryName::YearlyTrend => YEARLY_TREND,
        QueryName::StateYearCounts => STATE_YEAR_COUNTS,
        QueryName::MagnitudeTimeHistogram | QueryName::MagnitudeTimeSeries => MAGNITUDE_TIME,
        QueryName::MagnitudeSizeStats => MAGNITUDE_SIZE_STATS,
        QueryName::MagnitudeFatalityAvg => MAGNITUDE_FATALITY_AVG,
        QueryName::EventGeolocation => EVENT_GEOLOCATION,
    }
}

/// Build the select list. The expressions are given in the order of `output_columns`.
pub(super) fn select_list(
    table: &TableContext,
    query_name: QueryName,
) -> Result<Vec<(ColumnAlias, Expression)>, Error> {
    let expressions = match query_name {
        QueryName::SummaryByYearState => vec![
            table.output(TornadoColumn::Year)?,
            table.output(TornadoColumn::State)?,
            table.sum(TornadoColumn::Fatalities)?,
            table.sum(TornadoColumn::Injuries)?,
            sql::helpers::count_star(),
        ],
        QueryName::YearlyTrend => vec![
            table.output(TornadoColumn::Year)?,
            sql::helpers::count_star(),
            table.sum(TornadoColumn::Fatalities)?,
        ],
        QueryName::StateYearCounts => vec![
            table.output(TornadoColumn::State)?,
            table.output(TornadoColumn::Year)?,
            sql::helpers::count_star(),
        ],
        // The histogram does not group by magnitude, so its magnitude is a bare column: SQLite
        // takes it from one of the rows of each group.
        QueryName::MagnitudeTimeHistogram | QueryName::MagnitudeTimeSeries => vec![
            table.output(TornadoColumn::Month)?,
            table.output(TornadoColumn::Year)?,
            table.output(TornadoColumn::TornadoMagnitude)?,
            sql::helpers::count_star(),
        ],
        QueryName::MagnitudeSizeStats => vec![
            table.output(TornadoColumn::TornadoMagnitude)?,
            table.avg(TornadoColumn::TornadoLength)?,
            table.avg(TornadoColumn::TornadoWidth)?,
        ],
        QueryName::MagnitudeFatalityAvg => vec![
            table.output(TornadoColumn::TornadoMagnitude)?,
            table.avg(TornadoColumn::Fatalities)?,
        ],
        QueryName::EventGeolocation => vec![
            table.output(TornadoColumn::Year)?,
            table.output(TornadoColumn::TornadoMagnitude)?,
            table.output(TornadoColumn::StartLatitude)?,
            table.output(TornadoColumn::StartLongitude)?,
            table.output(TornadoColumn::State)?,
        ],
    };

    Ok(output_columns(query_name)
        .iter()
        .zip(expressions)
        .map(|(name, expression)| aliased(name, expression))
        .collect())
}
