//! The fixed dashboard queries and their translation to SQL.

mod fields;
mod grouping;

use std::fmt;

use enum_iterator::Sequence;
use query_engine_metadata::metadata::TableInfo;
use query_engine_sql::sql;

use super::error::Error;
use super::helpers::TableContext;

/// Every query the dashboard can run. None of them take arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence)]
pub enum QueryName {
    /// Fatalities, injuries and tornado count per year and state.
    SummaryByYearState,
    /// Tornado count and fatalities per year, by ascending year.
    YearlyTrend,
    /// Tornado count per state and year.
    StateYearCounts,
    /// Tornado count per year and month, all magnitudes together.
    MagnitudeTimeHistogram,
    /// Tornado count per year, month and magnitude.
    MagnitudeTimeSeries,
    /// Average length and width per magnitude, by ascending magnitude.
    MagnitudeSizeStats,
    /// Average fatalities per magnitude, by ascending magnitude.
    MagnitudeFatalityAvg,
    /// Position and magnitude of every tornado.
    EventGeolocation,
}

impl QueryName {
    /// The name used in logs and metrics.
    pub fn name(self) -> &'static str {
        match self {
            QueryName::SummaryByYearState => "summary-by-year-state",
            QueryName::YearlyTrend => "yearly-trend",
            QueryName::StateYearCounts => "state-year-counts",
            QueryName::MagnitudeTimeHistogram => "magnitude-time-histogram",
            QueryName::MagnitudeTimeSeries => "magnitude-time-series",
            QueryName::MagnitudeSizeStats => "magnitude-size-stats",
            QueryName::MagnitudeFatalityAvg => "magnitude-fatality-avg",
            QueryName::EventGeolocation => "event-geolocation",
        }
    }

    /// The last path segment of the `/api/v1.0/...` endpoint serving this query.
    pub fn endpoint(self) -> &'static str {
        match self {
            QueryName::SummaryByYearState => "table",
            QueryName::YearlyTrend => "linechart_data",
            QueryName::StateYearCounts => "bubblechart_data",
            QueryName::MagnitudeTimeHistogram => "time_histogram",
            QueryName::MagnitudeTimeSeries => "time_series",
            QueryName::MagnitudeSizeStats => "scatter_data",
            QueryName::MagnitudeFatalityAvg => "pie_chart",
            QueryName::EventGeolocation => "map",
        }
    }

    /// The column names of each result row, in order.
    pub fn output_columns(self) -> &'static [&'static str] {
        fields::output_columns(self)
    }

    pub fn from_name(name: &str) -> Option<QueryName> {
        enum_iterator::all::<QueryName>().find(|query| query.name() == name)
    }

    pub fn from_endpoint(endpoint: &str) -> Option<QueryName> {
        enum_iterator::all::<QueryName>().find(|query| query.endpoint() == endpoint)
    }
}

impl fmt::Display for QueryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Translate a named query into an execution plan against the given table.
pub fn translate(
    table: &TableInfo,
    query_name: QueryName,
) -> Result<sql::execution_plan::ExecutionPlan, Error> {
    let context = TableContext::new(table);

    let mut select = sql::helpers::simple_select(fields::select_list(&context, query_name)?);
    select.from = Some(context.from());
    select.group_by = grouping::group_by(&context, query_name)?;
    select.order_by = grouping::order_by(&context, query_name)?;

    tracing::trace!(query = %query_name, "translated query");

    Ok(sql::execution_plan::simple_exec_plan(
        query_name.name(),
        select,
    ))
}
