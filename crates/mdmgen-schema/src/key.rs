//! Schema key tree
//!
//! A [`Key`] is one node of the Device Management schema: a scalar, an array
//! whose children describe the element shape, or a dictionary whose children
//! are its fields. Trees are owned values without back-references.

use serde::Deserialize;
use std::fmt;

/// Type marker of a schema key (the YAML `type` field).
///
/// Parsing never fails: markers outside the known vocabulary are kept as
/// [`TypeTag::Unknown`] so they can be flagged during generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum TypeTag {
    String,
    Integer,
    Boolean,
    Real,
    Data,
    Date,
    Array,
    Dictionary,
    /// Any other marker, stored verbatim (e.g. `<any>`).
    Unknown(String),
}

impl TypeTag {
    /// Parse a schema type marker such as `<string>`.
    pub fn parse(marker: &str) -> Self {
        match marker {
            "<string>" => TypeTag::String,
            "<integer>" => TypeTag::Integer,
            "<boolean>" => TypeTag::Boolean,
            "<real>" => TypeTag::Real,
            "<data>" => TypeTag::Data,
            "<date>" => TypeTag::Date,
            "<array>" => TypeTag::Array,
            "<dictionary>" => TypeTag::Dictionary,
            other => TypeTag::Unknown(other.to_string()),
        }
    }

    /// The schema marker this tag was parsed from.
    pub fn as_str(&self) -> &str {
        match self {
            TypeTag::String => "<string>",
            TypeTag::Integer => "<integer>",
            TypeTag::Boolean => "<boolean>",
            TypeTag::Real => "<real>",
            TypeTag::Data => "<data>",
            TypeTag::Date => "<date>",
            TypeTag::Array => "<array>",
            TypeTag::Dictionary => "<dictionary>",
            TypeTag::Unknown(marker) => marker,
        }
    }

    /// Whether this is the schema's `<any>` marker.
    pub fn is_any(&self) -> bool {
        matches!(self, TypeTag::Unknown(marker) if marker == "<any>")
    }
}

impl Default for TypeTag {
    fn default() -> Self {
        TypeTag::Unknown(String::new())
    }
}

impl From<String> for TypeTag {
    fn from(marker: String) -> Self {
        TypeTag::parse(&marker)
    }
}

impl From<&str> for TypeTag {
    fn from(marker: &str) -> Self {
        TypeTag::parse(marker)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presence of a key in its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum Presence {
    Required,
    Optional,
    /// Absent or unrecognized; wrapped like `Required`.
    #[default]
    Unspecified,
}

impl Presence {
    pub fn is_optional(self) -> bool {
        self == Presence::Optional
    }
}

impl From<String> for Presence {
    fn from(value: String) -> Self {
        match value.as_str() {
            "required" => Presence::Required,
            "optional" => Presence::Optional,
            _ => Presence::Unspecified,
        }
    }
}

/// A node in the schema key tree.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Key {
    /// Wire name of the key.
    #[serde(rename = "key")]
    pub name: String,

    /// Type marker.
    #[serde(rename = "type", default)]
    pub type_tag: TypeTag,

    #[serde(default)]
    pub presence: Presence,

    /// Fields of a dictionary, or element descriptors of an array.
    #[serde(rename = "subkeys", default)]
    pub children: Vec<Key>,

    /// Free-text description (the YAML `content` field).
    #[serde(rename = "content", default)]
    pub description: String,

    /// Surface `description` as a comment on the generated field.
    #[serde(skip)]
    pub include_content: bool,

    /// Replaces the derived field name and the serialization tag.
    #[serde(skip)]
    pub name_override: Option<String>,
}

impl Key {
    /// Create a key with the given name and type; presence is unspecified.
    pub fn new(name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            type_tag,
            ..Self::default()
        }
    }

    /// Shorthand for a dictionary key with the given children.
    pub fn dictionary(name: impl Into<String>, children: Vec<Key>) -> Self {
        Self::new(name, TypeTag::Dictionary).with_children(children)
    }

    /// Shorthand for an array key with the given element descriptors.
    pub fn array(name: impl Into<String>, children: Vec<Key>) -> Self {
        Self::new(name, TypeTag::Array).with_children(children)
    }

    pub fn required(mut self) -> Self {
        self.presence = Presence::Required;
        self
    }

    pub fn optional(mut self) -> Self {
        self.presence = Presence::Optional;
        self
    }

    pub fn with_children(mut self, children: Vec<Key>) -> Self {
        self.children = children;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Surface the description as a field comment.
    pub fn with_content(mut self) -> Self {
        self.include_content = true;
        self
    }

    pub fn with_name_override(mut self, name: impl Into<String>) -> Self {
        self.name_override = Some(name.into());
        self
    }

    pub fn is_optional(&self) -> bool {
        self.presence.is_optional()
    }
}
