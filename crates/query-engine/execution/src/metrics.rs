//! Metrics setup and update for the query engine.

use std::time::Duration;

use prometheus::core::{AtomicF64, AtomicI64, GenericGauge};
use prometheus::{IntCounterVec, Opts, Registry};

/// The label every query counter is partitioned by.
const QUERY_LABEL: &str = "query";

#[derive(Clone)]
pub struct Metrics {
    query_total: IntCounterVec,
    query_error_total: IntCounterVec,
    pool_size: GenericGauge<AtomicI64>,
    pool_idle_count: GenericGauge<AtomicI64>,
    pool_active_count: GenericGauge<AtomicI64>,
    pool_max_connections: GenericGauge<AtomicI64>,
    pool_min_connections: GenericGauge<AtomicI64>,
    pool_acquire_timeout: GenericGauge<AtomicF64>,
    pool_max_lifetime: GenericGauge<AtomicF64>,
    pool_idle_timeout: GenericGauge<AtomicF64>,
}

impl Metrics {
    /// Set up counters and gauges used to produce Prometheus metrics.
    pub fn initialize(metrics_registry: &mut Registry) -> Result<Self, prometheus::Error> {
        let query_total = add_query_counter_metric(
            metrics_registry,
            "tornado_dashboard_query_total",
            "Total successful queries.",
        )?;

        let query_error_total = add_query_counter_metric(
            metrics_registry,
            "tornado_dashboard_query_error_total",
            "Total queries that failed.",
        )?;

        let pool_size = add_int_gauge_metric(
            metrics_registry,
            "tornado_dashboard_pool_size",
            "The number of connections currently active. This includes idle connections.",
        )?;

        let pool_idle_count = add_int_gauge_metric(
            metrics_registry,
            "tornado_dashboard_pool_idle",
            "The number of connections active and idle (not in use).",
        )?;

        let pool_active_count = add_int_gauge_metric(
            metrics_registry,
            "tornado_dashboard_pool_active",
            "The number of connections current active. This does not include idle connections.",
        )?;

        let pool_max_connections = add_int_gauge_metric(
            metrics_registry,
            "tornado_dashboard_pool_max_connections",
            "The maximum number of connections that this pool should maintain.",
        )?;

        let pool_min_connections = add_int_gauge_metric(
            metrics_registry,
            "tornado_dashboard_pool_min_connections",
            "The minimum number of connections that this pool should maintain.",
        )?;

        let pool_acquire_timeout = add_gauge_metric(
            metrics_registry,
            "tornado_dashboard_pool_acquire_timeout",
            "Get the maximum amount of time to spend waiting for a connection, in seconds.",
        )?;

        let pool_idle_timeout = add_gauge_metric(
            metrics_registry,
            "tornado_dashboard_pool_idle_timeout",
            "Get the maximum idle duration for individual connections, in seconds.",
        )?;

        let pool_max_lifetime = add_gauge_metric(
            metrics_registry,
            "tornado_dashboard_pool_max_lifetime",
            "Get the maximum lifetime of individual connections, in seconds.",
        )?;

        Ok(Self {
            query_total,
            query_error_total,
            pool_size,
            pool_idle_count,
            pool_active_count,
            pool_max_connections,
            pool_min_connections,
            pool_acquire_timeout,
            pool_max_lifetime,
            pool_idle_timeout,
        })
    }

    pub fn record_query(&self, query: &str) {
        self.query_total.with_label_values(&[query]).inc();
    }

    pub fn record_query_error(&self, query: &str) {
        self.query_error_total.with_label_values(&[query]).inc();
    }
}

/// Create a new int counter metric labelled by query name and register it with the provided
/// Prometheus Registry.
fn add_query_counter_metric(
    metrics_registry: &mut Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<IntCounterVec, prometheus::Error> {
    let counter = IntCounterVec::new(Opts::new(metric_name, metric_description), &[QUERY_LABEL])?;
    metrics_registry.register(Box::new(counter.clone()))?;
    Ok(counter)
}

/// Create a new int gauge metric and register it with the provided Prometheus Registry.
fn add_int_gauge_metric(
    metrics_registry: &mut Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<GenericGauge<AtomicI64>, prometheus::Error> {
    let int_gauge = prometheus::IntGauge::with_opts(Opts::new(metric_name, metric_description))?;
    metrics_registry.register(Box::new(int_gauge.clone()))?;
    Ok(int_gauge)
}

/// Create a new gauge metric and register it with the provided Prometheus Registry.
fn add_gauge_metric(
    metrics_registry: &mut Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<GenericGauge<AtomicF64>, prometheus::Error> {
    let gauge = prometheus::Gauge::with_opts(Opts::new(metric_name, metric_description))?;
    metrics_registry.register(Box::new(gauge.clone()))?;
    Ok(gauge)
}

// update all pool gauges
pub fn update_pool_metrics(pool: &sqlx::SqlitePool, metrics: &Metrics) {
    let pool_size: i64 = pool.size().into();
    metrics.pool_size.set(pool_size);

    let pool_idle: i64 = pool.num_idle().try_into().unwrap_or(i64::MAX);
    metrics.pool_idle_count.set(pool_idle);

    metrics.pool_active_count.set(pool_size - pool_idle);

    let pool_options = pool.options();

    metrics
        .pool_max_connections
        .set(pool_options.get_max_connections().into());
    metrics
        .pool_min_connections
        .set(pool_options.get_min_connections().into());
    metrics
        .pool_acquire_timeout
        .set(pool_options.get_acquire_timeout().as_secs_f64());

    // if nothing is set, report 0
    let idle_timeout = pool_options
        .get_idle_timeout()
        .unwrap_or(Duration::ZERO)
        .as_secs_f64();
    metrics.pool_idle_timeout.set(idle_timeout);

    let max_lifetime = pool_options
        .get_max_lifetime()
        .unwrap_or(Duration::ZERO)
        .as_secs_f64();
    metrics.pool_max_lifetime.set(max_lifetime);
}
