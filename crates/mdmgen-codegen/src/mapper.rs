//! Schema-to-Go type mapping.
//!
//! [`TypeMapper`] walks a [`Key`] tree and decides, node by node, which Go
//! type, field name, `plist` tag and comment to emit. Dictionaries become
//! named structs which are appended to the output [`GoFile`] as a side effect,
//! children first, so every generated type is declared before its first use.
//!
//! Nothing in here fails. A node whose type cannot be determined precisely
//! maps to `interface{}` and carries a comment explaining why, so the
//! ambiguity stays visible in the generated code.

use crate::go_types::GoType;
use crate::ir::{Decl, GoFile, StructDecl, StructField};
use crate::naming::normalize_field_name;
use crate::options::GeneratorOptions;
use mdmgen_schema::{Key, TypeTag};
use tracing::debug;

pub const MISSING_ARRAY_KEYS: &str = "missing array keys in schema";
pub const MISMATCHED_ARRAY_TYPES: &str = "mismatched array types in schema";
pub const ASSUMED_STRING_MAP: &str = "assuming string map for single dictionary subkey";
pub const ANY_SINGLE_SUBKEY: &str = "<any> type as single dictionary subkey";

/// The Go type chosen for a key, plus an optional diagnostic comment.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedType {
    pub ty: GoType,
    pub comment: Option<String>,
}

impl MappedType {
    pub fn plain(ty: GoType) -> Self {
        Self { ty, comment: None }
    }

    pub fn with_comment(ty: GoType, comment: impl Into<String>) -> Self {
        Self {
            ty,
            comment: Some(comment.into()),
        }
    }
}

/// Recursive schema walker.
#[derive(Debug, Clone, Default)]
pub struct TypeMapper {
    string_maps: bool,
    describe_fields: bool,
}

impl TypeMapper {
    /// A mapper with every optional interpretation turned off.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_options(options: &GeneratorOptions) -> Self {
        Self {
            string_maps: options.string_maps,
            describe_fields: options.describe_fields,
        }
    }

    pub fn with_string_maps(mut self, enabled: bool) -> Self {
        self.string_maps = enabled;
        self
    }

    pub fn with_describe_fields(mut self, enabled: bool) -> Self {
        self.describe_fields = enabled;
        self
    }

    /// Map a key to its Go type.
    ///
    /// `parent` is the type tag of the enclosing key, `None` at the root.
    /// Optional keys become pointers unless they describe array elements.
    pub fn map_key(&self, key: &Key, parent: Option<&TypeTag>, out: &mut GoFile) -> MappedType {
        let mut mapped = match &key.type_tag {
            TypeTag::String => MappedType::plain(GoType::String),
            TypeTag::Integer => MappedType::plain(GoType::Int),
            TypeTag::Boolean => MappedType::plain(GoType::Bool),
            TypeTag::Real => MappedType::plain(GoType::Float64),
            TypeTag::Data => MappedType::plain(GoType::Bytes),
            TypeTag::Date => MappedType::plain(GoType::Time),
            TypeTag::Dictionary => self.map_dictionary(key, out),
            TypeTag::Array => self.map_array(key, out),
            TypeTag::Unknown(marker) => {
                debug!(key = %key.name, marker = %marker, "unknown schema type");
                MappedType::with_comment(GoType::Interface, format!("unknown type: {marker}"))
            }
        };

        if key.is_optional() && parent != Some(&TypeTag::Array) {
            mapped.ty = GoType::pointer(mapped.ty);
        }

        mapped
    }

    /// Declare a struct named `name` whose fields are `children`, in order.
    pub fn declare_struct(&self, name: &str, children: &[Key], out: &mut GoFile) {
        let fields: Vec<StructField> = children
            .iter()
            .map(|child| self.map_field(child, out))
            .collect();

        debug!(struct_name = name, fields = fields.len(), "declared struct");
        out.push(Decl::Struct(StructDecl {
            name: name.to_string(),
            fields,
        }));
    }

    fn map_dictionary(&self, key: &Key, out: &mut GoFile) -> MappedType {
        let name = normalize_field_name(&key.name);

        if self.string_maps {
            if let [only] = key.children.as_slice() {
                if only.type_tag == TypeTag::Dictionary {
                    self.declare_struct(&name, &only.children, out);
                    return MappedType::with_comment(
                        GoType::string_map(GoType::named(name)),
                        ASSUMED_STRING_MAP,
                    );
                }
                if only.type_tag.is_any() {
                    return MappedType::with_comment(GoType::Interface, ANY_SINGLE_SUBKEY);
                }
            }
        }

        self.declare_struct(&name, &key.children, out);
        MappedType::plain(GoType::Named(name))
    }

    fn map_array(&self, key: &Key, out: &mut GoFile) -> MappedType {
        let Some(first) = key.children.first() else {
            debug!(key = %key.name, "array without element keys");
            return MappedType::with_comment(GoType::slice(GoType::Interface), MISSING_ARRAY_KEYS);
        };

        if key.children.iter().any(|k| k.type_tag != first.type_tag) {
            debug!(key = %key.name, "array with mixed element types");
            return MappedType::with_comment(
                GoType::slice(GoType::Interface),
                MISMATCHED_ARRAY_TYPES,
            );
        }

        let element = self.map_key(first, Some(&TypeTag::Array), out);
        let mut comment = element.comment;

        // A lone scalar element with subkeys lists the allowed values.
        if key.children.len() == 1
            && first.type_tag != TypeTag::Dictionary
            && !first.children.is_empty()
        {
            append_comment(
                &mut comment,
                &format!("{} array values defined in schema", first.children.len()),
            );
        }

        MappedType {
            ty: GoType::slice(element.ty),
            comment,
        }
    }

    fn map_field(&self, key: &Key, out: &mut GoFile) -> StructField {
        let mapped = self.map_key(key, Some(&TypeTag::Dictionary), out);

        let (name, mut tag) = match &key.name_override {
            Some(name) => (name.clone(), String::new()),
            None => {
                let name = normalize_field_name(&key.name);
                let wire = if name == key.name {
                    String::new()
                } else {
                    key.name.clone()
                };
                (name, wire)
            }
        };
        if key.is_optional() {
            tag.push_str(",omitempty");
        }

        let mut comment = mapped.comment;
        if (key.include_content || self.describe_fields) && !key.description.trim().is_empty() {
            append_comment(&mut comment, &key.description);
        }

        StructField {
            name,
            ty: mapped.ty,
            tag: (!tag.is_empty()).then_some(tag),
            comment,
        }
    }
}

/// Append `text` to a comment, separated by `", "`.
fn append_comment(comment: &mut Option<String>, text: &str) {
    match comment {
        Some(existing) => {
            existing.push_str(", ");
            existing.push_str(text);
        }
        None => *comment = Some(text.to_string()),
    }
}
