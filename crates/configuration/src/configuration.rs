//! Configuration for the dashboard server.

use schemars::{gen::SchemaSettings, schema::RootSchema};

use crate::values::{PageSettings, PoolSettings};
use crate::version1::ParsedConfiguration;

/// The 'Configuration' type collects all the information necessary to serve queries at runtime.
///
/// 'ParsedConfiguration' is the serialized, versioned format that lives in
/// `configuration.json`. It may refer to secrets by environment variable name. Values of this
/// type are produced from a 'ParsedConfiguration' using 'make_runtime_configuration', at which
/// point every secret has been resolved.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Resolved connection string for the SQLite database, e.g. `sqlite://data/database.db`.
    pub connection_uri: String,
    pub pool_settings: PoolSettings,
    pub pages: PageSettings,
}

/// Generate the JSON schema of the current configuration format.
pub fn generate_latest_schema() -> RootSchema {
    SchemaSettings::draft07()
        .into_generator()
        .into_root_schema_for::<ParsedConfiguration>()
}
