//! Go type expressions for generated fields.
//!
//! # Type Mappings
//!
//! | Schema | Go (required) | Go (optional) |
//! |--------|---------------|---------------|
//! | `<string>` | `string` | `*string` |
//! | `<integer>` | `int` | `*int` |
//! | `<boolean>` | `bool` | `*bool` |
//! | `<real>` | `float64` | `*float64` |
//! | `<data>` | `[]byte` | `*[]byte` |
//! | `<date>` | `time.Time` | `*time.Time` |
//! | `<array>` | `[]T` | `*[]T` |
//! | `<dictionary>` | `Name` | `*Name` |
//! | unknown | `interface{}` | `*interface{}` |

use std::fmt;

/// A Go type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoType {
    String,
    Int,
    Bool,
    Float64,
    /// `[]byte`
    Bytes,
    /// `time.Time`
    Time,
    /// `interface{}`, the untyped placeholder.
    Interface,
    /// A generated struct type.
    Named(String),
    Slice(Box<GoType>),
    Pointer(Box<GoType>),
    /// `map[string]T`
    Map(Box<GoType>),
}

impl GoType {
    pub fn named(name: impl Into<String>) -> Self {
        GoType::Named(name.into())
    }

    pub fn slice(elem: GoType) -> Self {
        GoType::Slice(Box::new(elem))
    }

    pub fn pointer(inner: GoType) -> Self {
        GoType::Pointer(Box::new(inner))
    }

    pub fn string_map(value: GoType) -> Self {
        GoType::Map(Box::new(value))
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, GoType::Pointer(_))
    }

    /// Whether rendering this type requires importing `time`.
    pub fn uses_time(&self) -> bool {
        match self {
            GoType::Time => true,
            GoType::Slice(inner) | GoType::Pointer(inner) | GoType::Map(inner) => {
                inner.uses_time()
            }
            _ => false,
        }
    }
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoType::String => f.write_str("string"),
            GoType::Int => f.write_str("int"),
            GoType::Bool => f.write_str("bool"),
            GoType::Float64 => f.write_str("float64"),
            GoType::Bytes => f.write_str("[]byte"),
            GoType::Time => f.write_str("time.Time"),
            GoType::Interface => f.write_str("interface{}"),
            GoType::Named(name) => f.write_str(name),
            GoType::Slice(elem) => write!(f, "[]{elem}"),
            GoType::Pointer(inner) => write!(f, "*{inner}"),
            GoType::Map(value) => write!(f, "map[string]{value}"),
        }
    }
}
