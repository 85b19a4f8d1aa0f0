//! Execute an execution plan against the database.

use sqlx::sqlite::{SqlitePool, SqliteRow};
use tracing::{info_span, Instrument};

use query_engine_sql::sql;

use crate::error::Error;
use crate::metrics::{update_pool_metrics, Metrics};

/// Execute a query against SQLite and decode every row into `Row`.
///
/// A connection is taken from the pool for the duration of the query and handed back before
/// this function returns, on success and on failure.
pub async fn execute<Row>(
    pool: &SqlitePool,
    metrics: &Metrics,
    plan: sql::execution_plan::ExecutionPlan,
) -> Result<Vec<Row>, Error>
where
    Row: for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Unpin,
{
    let query = plan.query_sql();

    tracing::info!(query = %plan.name, generated_sql = %query.sql);

    let result = async {
        let mut connection = pool.acquire().await?;
        let rows = sqlx::query_as::<_, Row>(&query.sql)
            .fetch_all(&mut *connection)
            .await?;
        Ok::<_, Error>(rows)
    }
    .instrument(info_span!("Database request", query = %plan.name))
    .await;

    update_pool_metrics(pool, metrics);

    match &result {
        Ok(rows) => {
            metrics.record_query(&plan.name);
            tracing::debug!(query = %plan.name, rows = rows.len(), "query succeeded");
        }
        Err(error) => {
            metrics.record_query_error(&plan.name);
            tracing::error!(query = %plan.name, %error, "query failed");
        }
    }

    result
}
