//! Error types for ARN parsing, resource type resolution and table loading.

use std::path::PathBuf;
use thiserror::Error;

/// Structural failures while decomposing an ARN string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input does not start with the `arn:` scheme marker.
    #[error("invalid ARN prefix: '{arn}' does not start with 'arn:'")]
    InvalidPrefix { arn: String },

    /// Fewer than six colon-delimited segments.
    #[error("not enough ARN sections in '{arn}': expected at least 6, found {found}")]
    InsufficientSegments { found: usize, arn: String },

    /// Partition or service segment is empty.
    #[error("ARN '{arn}' has an empty {segment} segment")]
    MissingSegment { segment: &'static str, arn: String },

    /// The resource segment cannot be split into a kind and an id.
    #[error("ARN resource ID is invalid: '{resource}' in '{arn}'")]
    InvalidResourceId { resource: String, arn: String },
}

/// Failures while mapping an ARN onto a CloudFormation resource type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("service '{service}' is unsupported")]
    UnsupportedService { service: String },

    #[error("resource type '{resource_kind}' is unsupported for service '{service}'")]
    UnsupportedResourceType {
        service: String,
        resource_kind: String,
    },
}

/// Failures while loading a service lookup table.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("failed to read lookup table '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lookup table: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("embedded lookup table '{0}' is missing from the binary")]
    MissingEmbeddedTable(&'static str),
}

/// Failures while loading a parser configuration document.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read parser configuration '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse parser configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ParseResult<T> = Result<T, ParseError>;
pub type ResolveResult<T> = Result<T, ResolveError>;
pub type TableResult<T> = Result<T, TableError>;
pub type ConfigResult<T> = Result<T, ConfigError>;

impl TableError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
