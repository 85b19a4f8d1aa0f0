use std::path::PathBuf;

use tornado_dashboard::{routes, state};
use tornado_dashboard_configuration::{Configuration, PageSettings, PoolSettings};

/// Creates a router with a fresh state, reading from the given database.
pub async fn create_router(connection_uri: &str, pages: PageSettings) -> axum::Router {
    let _ = env_logger::builder().is_test(true).try_init();

    let configuration = Configuration {
        connection_uri: connection_uri.to_string(),
        pool_settings: PoolSettings {
            pool_timeout: 5,
            ..PoolSettings::default()
        },
        pages,
    };

    let mut metrics_registry = prometheus::Registry::new();
    let state = state::create_state(&configuration, &mut metrics_registry)
        .await
        .unwrap();

    routes::create_router(state)
}

/// Page settings pointing at the templates and static files of a crate.
pub fn pages_in(crate_dir: &str) -> PageSettings {
    let crate_dir = PathBuf::from(crate_dir);
    PageSettings {
        templates_dir: crate_dir.join("templates"),
        static_dir: crate_dir.join("static"),
    }
}
