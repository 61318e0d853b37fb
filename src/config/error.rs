//! Error taxonomy for configuration loading

use super::source::SourceFormat;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// A single semantic problem found while validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Dotted path to the offending value (e.g. `theme.extend.colors.accent`)
    pub path: String,
    /// What is wrong with it
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { path: path.into(), message: message.into() }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {}", self.path, self.message)
    }
}

/// Broad category of a [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    Schema,
    Validation,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Io => "io",
            ErrorKind::Parse => "parse",
            ErrorKind::Schema => "schema",
            ErrorKind::Validation => "validation",
        };
        f.write_str(name)
    }
}

/// Configuration loading error
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },
    /// Input is not syntactically valid in its declared format
    #[error("failed to parse {format} config: {message}")]
    Parse { format: SourceFormat, message: String },
    /// Missing key or value of the wrong shape
    #[error("'{path}' {message}")]
    Schema { path: String, message: String },
    /// Values with the right shape that fail semantic checks
    #[error("config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<ValidationIssue>),
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io { path: path.into(), source: Arc::new(source) }
    }

    pub fn parse(format: SourceFormat, message: impl Into<String>) -> Self {
        ConfigError::Parse { format, message: message.into() }
    }

    pub fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Schema { path: path.into(), message: message.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::Io { .. } => ErrorKind::Io,
            ConfigError::Parse { .. } => ErrorKind::Parse,
            ConfigError::Schema { .. } => ErrorKind::Schema,
            ConfigError::Validation(_) => ErrorKind::Validation,
        }
    }

    /// Key path of a schema error, if any.
    pub fn schema_path(&self) -> Option<&str> {
        match self {
            ConfigError::Schema { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Validation issues, empty for other kinds.
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            ConfigError::Validation(issues) => issues,
            _ => &[],
        }
    }
}
