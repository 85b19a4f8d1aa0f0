//! Transient state used by the server.
//!
//! This is initialized on startup.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;
use tracing::{info_span, Instrument};

use query_engine_execution::metrics;
use tornado_dashboard_configuration::{Configuration, PageSettings};

use crate::query::TornadoQueries;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<TornadoQueries>,
    pub metrics_registry: prometheus::Registry,
    pub pages: Arc<PageSettings>,
}

/// Create a connection pool and wrap it inside the server state.
pub async fn create_state(
    configuration: &Configuration,
    metrics_registry: &mut prometheus::Registry,
) -> Result<AppState, InitializationError> {
    let pool = create_pool(configuration)?;

    let metrics = async {
        let metrics_inner = metrics::Metrics::initialize(metrics_registry)
            .map_err(InitializationError::MetricsError)?;
        metrics::update_pool_metrics(&pool, &metrics_inner);
        Ok::<_, InitializationError>(metrics_inner)
    }
    .instrument(info_span!("Setup metrics"))
    .await?;

    Ok(AppState {
        queries: Arc::new(TornadoQueries::new(pool, metrics)),
        metrics_registry: metrics_registry.clone(),
        pages: Arc::new(configuration.pages.clone()),
    })
}

/// Create a read-only connection pool.
///
/// No connection is opened until the first query, so the server starts even when the
/// database is not there yet.
/// - <https://docs.rs/sqlx/latest/sqlx/pool/struct.PoolOptions.html>
fn create_pool(configuration: &Configuration) -> Result<SqlitePool, InitializationError> {
    let connect_options = SqliteConnectOptions::from_str(&configuration.connection_uri)
        .map_err(InitializationError::UnableToCreatePool)?
        .read_only(true)
        .create_if_missing(false);

    let pool_settings = &configuration.pool_settings;

    let pool = SqlitePoolOptions::new()
        .max_connections(pool_settings.max_connections)
        .acquire_timeout(Duration::from_secs(pool_settings.pool_timeout))
        .idle_timeout(pool_settings.idle_timeout.map(Duration::from_secs))
        .max_lifetime(pool_settings.connection_lifetime.map(Duration::from_secs))
        .connect_lazy_with(connect_options);

    Ok(pool)
}

/// State initialization error.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("unable to initialize connection pool: {0}")]
    UnableToCreatePool(sqlx::Error),
    #[error("error initializing metrics: {0}")]
    MetricsError(prometheus::Error),
}
