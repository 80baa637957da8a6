//! Error types for code generation

use mdmgen_schema::SchemaError;
use thiserror::Error;

/// Result type alias for code generation
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Error type for code generation
///
/// Schema ambiguities are never errors; they degrade to `interface{}` with a
/// comment. These variants cover unusable input documents and output that
/// would not compile.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Two top-level declarations share a name
    #[error("duplicate declaration: {name}")]
    DuplicateDeclaration { name: String },

    /// A struct has two fields with the same Go name
    #[error("duplicate field {field} in struct {ty}")]
    DuplicateField { ty: String, field: String },

    /// A generated name is not a valid Go identifier
    #[error("invalid Go identifier {name:?} for {context}")]
    InvalidIdentifier { name: String, context: String },

    /// Output validation failed on declarations produced by one input
    #[error("invalid declarations generated from {document}")]
    InDocument {
        document: String,
        #[source]
        error: Box<CodegenError>,
    },

    /// The input document cannot be used
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
