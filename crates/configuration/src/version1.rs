//! The version 1 configuration format, stored as `configuration.json`.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::configuration::generate_latest_schema;
use crate::environment::Variable;
use crate::error::{ParseConfigurationError, WriteParsedConfigurationError};
use crate::values::{ConnectionUri, PageSettings, PoolSettings, Secret};

pub const CURRENT_VERSION: u32 = 1;
pub const CONFIGURATION_FILENAME: &str = "configuration.json";
pub const CONFIGURATION_JSONSCHEMA_FILENAME: &str = "schema.json";
pub const DEFAULT_CONNECTION_URI_VARIABLE: &str = "TORNADO_DATABASE_URL";

/// Initial configuration, just enough to connect to a database and elaborate a full
/// 'Configuration'.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConfiguration {
    /// Jsonschema of the configuration format.
    #[serde(rename = "$schema")]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Which version of the configuration format are we using
    pub version: u32,
    /// Connection string for the SQLite database
    pub connection_uri: ConnectionUri,
    #[serde(default)]
    #[serde(skip_serializing_if = "PoolSettings::is_default")]
    pub pool_settings: PoolSettings,
    #[serde(default)]
    #[serde(skip_serializing_if = "PageSettings::is_default")]
    pub pages: PageSettings,
}

impl ParsedConfiguration {
    /// The configuration written by `initialize`: everything defaulted, the connection string
    /// read from `TORNADO_DATABASE_URL`.
    pub fn initial() -> Self {
        Self {
            schema: Some(CONFIGURATION_JSONSCHEMA_FILENAME.to_string()),
            version: CURRENT_VERSION,
            connection_uri: ConnectionUri(Secret::FromEnvironment {
                variable: Variable::from(DEFAULT_CONNECTION_URI_VARIABLE),
            }),
            pool_settings: PoolSettings::default(),
            pages: PageSettings::default(),
        }
    }
}

/// Read `configuration.json` from the given directory.
pub async fn parse_configuration(
    configuration_dir: impl AsRef<Path> + Send,
) -> Result<ParsedConfiguration, ParseConfigurationError> {
    let configuration_file = configuration_dir.as_ref().join(CONFIGURATION_FILENAME);

    let configuration_file_contents =
        fs::read_to_string(&configuration_file)
            .await
            .map_err(|source| ParseConfigurationError::IoError {
                file_path: configuration_file.clone(),
                source,
            })?;

    let parsed_config: ParsedConfiguration = serde_json::from_str(&configuration_file_contents)
        .map_err(|error| ParseConfigurationError::ParseError {
            file_path: configuration_file.clone(),
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        })?;

    if parsed_config.version != CURRENT_VERSION {
        return Err(ParseConfigurationError::UnsupportedVersion {
            file_path: configuration_file,
            version: parsed_config.version,
            expected: CURRENT_VERSION,
        });
    }

    // An empty string is never a usable database location.
    if let ConnectionUri(Secret::Plain { value }) = &parsed_config.connection_uri {
        if value.is_empty() {
            return Err(ParseConfigurationError::EmptyConnectionUri {
                file_path: configuration_file,
            });
        }
    }

    tracing::debug!(file = %configuration_file.display(), "parsed configuration");

    Ok(parsed_config)
}

/// Write the parsed configuration into a directory on disk, along with its jsonschema.
pub async fn write_parsed_configuration(
    parsed_config: ParsedConfiguration,
    out_dir: impl AsRef<Path>,
) -> Result<(), WriteParsedConfigurationError> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)
        .await
        .map_err(|source| WriteParsedConfigurationError::IoError {
            file_path: out_dir.to_path_buf(),
            source,
        })?;

    let configuration_file = out_dir.join(CONFIGURATION_FILENAME);
    let configuration = serde_json::to_string_pretty(&parsed_config)? + "\n";
    fs::write(&configuration_file, configuration)
        .await
        .map_err(|source| WriteParsedConfigurationError::IoError {
            file_path: configuration_file,
            source,
        })?;

    let schema_file = out_dir.join(CONFIGURATION_JSONSCHEMA_FILENAME);
    let schema = serde_json::to_string_pretty(&generate_latest_schema())? + "\n";
    fs::write(&schema_file, schema)
        .await
        .map_err(|source| WriteParsedConfigurationError::IoError {
            file_path: schema_file,
            source,
        })?;

    Ok(())
}
