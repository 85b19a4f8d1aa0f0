//! GROUP BY and ORDER BY clauses of every query.

use query_engine_metadata::metadata::TornadoColumn;
use query_engine_sql::sql::ast::*;

use super::QueryName;
use crate::translation::error::Error;
use crate::translation::helpers::TableContext;

fn grouping_keys(query_name: QueryName) -> &'static [TornadoColumn] {
    match query_name {
        QueryName::SummaryByYearState => &[TornadoColumn::Year, TornadoColumn::State],
        QueryName::YearlyTrend => &[TornadoColumn::Year],
        QueryName::StateYearCounts => &[TornadoColumn::State, TornadoColumn::Year],
        QueryName::MagnitudeTimeHistogram => &[TornadoColumn::Year, TornadoColumn::Month],
        QueryName::MagnitudeTimeSeries => &[
            TornadoColumn::Year,
            TornadoColumn::Month,
            TornadoColumn::TornadoMagnitude,
        ],
        QueryName::MagnitudeSizeStats | QueryName::MagnitudeFatalityAvg => {
            &[TornadoColumn::TornadoMagnitude]
        }
        QueryName::EventGeolocation => &[],
    }
}

fn ordering_keys(query_name: QueryName) -> &'static [TornadoColumn] {
    match query_name {
        QueryName::YearlyTrend => &[TornadoColumn::Year],
        QueryName::MagnitudeSizeStats | QueryName::MagnitudeFatalityAvg => {
            &[TornadoColumn::TornadoMagnitude]
        }
        QueryName::SummaryByYearState
        | QueryName::StateYearCounts
        | QueryName::MagnitudeTimeHistogram
        | QueryName::MagnitudeTimeSeries
        | QueryName::EventGeolocation => &[],
    }
}

pub(super) fn group_by(table: &TableContext, query_name: QueryName) -> Result<GroupBy, Error> {
    let elements = grouping_keys(query_name)
        .iter()
        .map(|column| table.column(*column))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(GroupBy { elements })
}

/// Ordering is always ascending. SQLite sorts NULL before any value.
pub(super) fn order_by(table: &TableContext, query_name: QueryName) -> Result<OrderBy, Error> {
    let elements = ordering_keys(query_name)
        .iter()
        .map(|column| {
            Ok(OrderByElement {
                target: table.column(*column)?,
                direction: OrderByDirection::Asc,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(OrderBy { elements })
}
