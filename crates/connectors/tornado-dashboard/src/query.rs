//! The query layer: one operation per dashboard dataset.

use sqlx::sqlite::{SqlitePool, SqliteRow};

use query_engine_execution::database_info;
use query_engine_execution::metrics::Metrics;
use query_engine_execution::query::execute;
use query_engine_execution::rows::{
    EventGeolocation, MagnitudeFatalityAverage, MagnitudeSizeStats, MagnitudeTimeBucket,
    StateYearCount, SummaryByYearState, YearlyTrend,
};
use query_engine_metadata::metadata::TableInfo;
use query_engine_translation::translation::query::{translate, QueryName};

/// A failure to produce the result of a query.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("{0}")]
    Translation(#[from] query_engine_translation::translation::error::Error),
    #[error("{0}")]
    Execution(#[from] query_engine_execution::error::Error),
}

/// Runs the dashboard queries against a pool of read-only connections.
///
/// Every operation is independent: it takes a connection from the pool, runs its query and
/// gives the connection back before returning.
#[derive(Clone)]
pub struct TornadoQueries {
    pool: SqlitePool,
    metrics: Metrics,
    table: TableInfo,
}

impl TornadoQueries {
    pub fn new(pool: SqlitePool, metrics: Metrics) -> Self {
        Self {
            pool,
            metrics,
            table: TableInfo::tornado(),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    async fn run<Row>(&self, query_name: QueryName) -> Result<Vec<Row>, QueryError>
    where
        Row: for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let plan = translate(&self.table, query_name)?;
        Ok(execute(&self.pool, &self.metrics, plan).await?)
    }

    pub async fn summary_by_year_state(&self) -> Result<Vec<SummaryByYearState>, QueryError> {
        self.run(QueryName::SummaryByYearState).await
    }

    /// Ordered by ascending year.
    pub async fn yearly_trend(&self) -> Result<Vec<YearlyTrend>, QueryError> {
        self.run(QueryName::YearlyTrend).await
    }

    pub async fn state_year_counts(&self) -> Result<Vec<StateYearCount>, QueryError> {
        self.run(QueryName::StateYearCounts).await
    }

    /// Counts per year and month across all magnitudes.
    pub async fn magnitude_time_histogram(&self) -> Result<Vec<MagnitudeTimeBucket>, QueryError> {
        self.run(QueryName::MagnitudeTimeHistogram).await
    }

    /// Counts per year, month and magnitude.
    pub async fn magnitude_time_series(&self) -> Result<Vec<MagnitudeTimeBucket>, QueryError> {
        self.run(QueryName::MagnitudeTimeSeries).await
    }

    /// Ordered by ascending magnitude, unknown magnitude first.
    pub async fn magnitude_size_stats(&self) -> Result<Vec<MagnitudeSizeStats>, QueryError> {
        self.run(QueryName::MagnitudeSizeStats).await
    }

    /// Ordered by ascending magnitude, unknown magnitude first.
    pub async fn magnitude_fatality_avg(
        &self,
    ) -> Result<Vec<MagnitudeFatalityAverage>, QueryError> {
        self.run(QueryName::MagnitudeFatalityAvg).await
    }

    pub async fn event_geolocation(&self) -> Result<Vec<EventGeolocation>, QueryError> {
        self.run(QueryName::EventGeolocation).await
    }

    /// Check that the database is reachable and that the table has every column we query.
    pub async fn health_check(&self) -> Result<(), QueryError> {
        database_info::health_check(&self.pool).await?;
        database_info::check_schema(&self.pool, &self.table).await?;
        Ok(())
    }
}

/// The SQL a query runs, as sent to the database.
pub fn query_sql(query_name: QueryName) -> Result<String, QueryError> {
    let plan = translate(&TableInfo::tornado(), query_name)?;
    Ok(plan.query_sql().sql)
}
