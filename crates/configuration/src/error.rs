//! Errors that can occur while reading, writing or elaborating a configuration.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {file_path}:{line}:{column}: {message}")]
    ParseError {
        file_path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
    #[error("unsupported configuration version {version} in {file_path}, expected {expected}")]
    UnsupportedVersion {
        file_path: PathBuf,
        version: u32,
        expected: u32,
    },
    #[error("empty connection URI in {file_path}")]
    EmptyConnectionUri { file_path: PathBuf },
    #[error("unable to read {file_path}: {source}")]
    IoError {
        file_path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum MakeRuntimeConfigurationError {
    #[error("missing environment variable when processing {attribute}: {message}")]
    MissingEnvironmentVariable { attribute: String, message: String },
    #[error("the connection URI resolved to an empty string")]
    EmptyConnectionUri,
}

#[derive(Debug, thiserror::Error)]
pub enum WriteParsedConfigurationError {
    #[error("unable to write {file_path}: {source}")]
    IoError {
        file_path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to serialize configuration: {0}")]
    SerializationError(#[from] serde_json::Error),
}
