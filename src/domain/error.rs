use std::io;

use thiserror::Error;

/// Library-wide error type for mkcol operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// I/O failure tied to a specific path.
    #[error("Failed to {action} '{path}': {source}")]
    PathIo {
        action: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A required input directory is missing.
    #[error("Directory '{0}' does not exist!")]
    MissingDirectory(String),

    /// A required input file is missing.
    #[error("File '{0}' does not exist!")]
    MissingFile(String),

    /// The output directory has not been created.
    #[error("Output directory '{0}' does not exist. Create it before generating collections.")]
    OutputDirectoryMissing(String),

    /// An entry of `domains.yml` could not be turned into a protocol/host pair.
    #[error("Invalid domain '{entry}': {reason}")]
    InvalidDomain { entry: String, reason: String },

    /// The collection template does not have the expected shape.
    #[error("Invalid collection template: {0}")]
    InvalidTemplate(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Serialization error.
    #[error("Failed to serialize {what}: {details}")]
    SerializeError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn path_io(action: &'static str, path: &std::path::Path, source: io::Error) -> Self {
        AppError::PathIo { action, path: path.display().to_string(), source }
    }

    pub(crate) fn template<S: Into<String>>(message: S) -> Self {
        AppError::InvalidTemplate(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::PathIo { source, .. } => source.kind(),
            AppError::Configuration(_)
            | AppError::InvalidDomain { .. }
            | AppError::InvalidTemplate(_)
            | AppError::ParseError { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::MissingDirectory(_)
            | AppError::MissingFile(_)
            | AppError::OutputDirectoryMissing(_) => io::ErrorKind::NotFound,
            AppError::SerializeError { .. } => io::ErrorKind::InvalidData,
        }
    }
}
