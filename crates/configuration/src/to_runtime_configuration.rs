//! Convert a parsed configuration into the runtime 'Configuration', resolving secrets.

use crate::configuration::Configuration;
use crate::environment::Environment;
use crate::error::MakeRuntimeConfigurationError;
use crate::values::{ConnectionUri, Secret};
use crate::version1::ParsedConfiguration;

/// Convert the parsed configuration metadata to internal engine metadata
/// That can be used by the server at runtime.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
    environment: impl Environment,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    let connection_uri = match parsed_config.connection_uri {
        ConnectionUri(Secret::Plain { value }) => value,
        ConnectionUri(Secret::FromEnvironment { variable }) => {
            environment.read(&variable).map_err(|error| {
                MakeRuntimeConfigurationError::MissingEnvironmentVariable {
                    attribute: "connectionUri".to_string(),
                    message: error.to_string(),
                }
            })?
        }
    };

    if connection_uri.is_empty() {
        return Err(MakeRuntimeConfigurationError::EmptyConnectionUri);
    }

    Ok(Configuration {
        connection_uri,
        pool_settings: parsed_config.pool_settings,
        pages: parsed_config.pages,
    })
}
