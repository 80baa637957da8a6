//! Error types for schema parsing

use thiserror::Error;

/// Result type alias for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Error type for schema parsing and validation
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The document is not valid YAML or does not match the schema shape
    #[error("failed to parse schema YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Schema file does not exist
    #[error("schema file not found: {path}")]
    FileNotFound { path: String },

    /// Schema file could not be read
    #[error("failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// A field required for generation is absent
    #[error("missing required field '{field}' in schema")]
    MissingField { field: String },

    /// A key in the tree has an empty name
    #[error("empty key name at '{path}'")]
    EmptyKeyName { path: String },
}
