//! Schema documents
//!
//! One YAML file describes either an MDM command (`payload.requesttype`) or a
//! declarative management declaration (`payload.declarationtype`).

use crate::error::{SchemaError, SchemaResult};
use crate::key::Key;
use serde::Deserialize;
use std::path::Path;

/// The `payload` section of a schema document.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PayloadInfo {
    /// Request type of a command, e.g. `DeviceLock`.
    #[serde(rename = "requesttype", default)]
    pub request_type: Option<String>,

    /// Declaration type, e.g. `com.apple.configuration.passcode.settings`.
    #[serde(rename = "declarationtype", default)]
    pub declaration_type: Option<String>,

    /// Advisory description.
    #[serde(default)]
    pub content: Option<String>,
}

/// A parsed command or declaration schema file.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SchemaDocument {
    #[serde(default)]
    pub payload: PayloadInfo,

    #[serde(rename = "payloadkeys", default)]
    pub payload_keys: Vec<Key>,

    #[serde(rename = "responsekeys", default)]
    pub response_keys: Vec<Key>,
}

impl SchemaDocument {
    /// Parse and validate a document from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> SchemaResult<Self> {
        let document: SchemaDocument = serde_yaml::from_str(yaml)?;
        document.validate()?;
        Ok(document)
    }

    /// Parse and validate a document from a YAML file.
    pub fn from_file(path: &Path) -> SchemaResult<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SchemaError::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                SchemaError::Io(e)
            }
        })?;

        Self::from_yaml_str(&yaml)
    }

    /// The command request type.
    ///
    /// Returns [`SchemaError::MissingField`] when the document has none, which
    /// is the case for declaration schemas.
    pub fn request_type(&self) -> SchemaResult<&str> {
        match self.payload.request_type.as_deref() {
            Some(request_type) if !request_type.is_empty() => Ok(request_type),
            _ => Err(SchemaError::MissingField {
                field: "payload.requesttype".to_string(),
            }),
        }
    }

    pub fn declaration_type(&self) -> Option<&str> {
        self.payload.declaration_type.as_deref()
    }

    /// Check structural rules the generator relies on.
    pub fn validate(&self) -> SchemaResult<()> {
        validate_keys(&self.payload_keys, "payloadkeys")?;
        validate_keys(&self.response_keys, "responsekeys")?;
        Ok(())
    }
}

/// Validate key names recursively.
fn validate_keys(keys: &[Key], parent_path: &str) -> SchemaResult<()> {
    for (index, key) in keys.iter().enumerate() {
        if key.name.is_empty() {
            return Err(SchemaError::EmptyKeyName {
                path: format!("{parent_path}[{index}]"),
            });
        }

        validate_keys(&key.children, &format!("{parent_path}.{}", key.name))?;
    }

    Ok(())
}
