//! Generator configuration

use serde::Deserialize;

/// Options controlling a generation pass.
///
/// Every field has a default, so a partial configuration table deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorOptions {
    /// Go package name of the generated file.
    pub package: String,

    /// Generate `<Name>Response` structs from `responsekeys`.
    pub responses: bool,

    /// Emit the shared `GenericCommand`/`GenericResponse` envelope types.
    pub shared: bool,

    /// Interpret a dictionary whose only subkey is a dictionary (or `<any>`)
    /// as a string-keyed map.
    pub string_maps: bool,

    /// Attach every key's description as a field comment, not only the
    /// synthetic keys that request it.
    pub describe_fields: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            package: "main".to_string(),
            responses: true,
            shared: true,
            string_maps: false,
            describe_fields: false,
        }
    }
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }
}
