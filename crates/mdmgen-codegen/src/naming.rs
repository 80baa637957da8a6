//! Naming convention utilities for code generation.
//!
//! Schema wire names are free-form (`Allow-Camera`, `4GEnabled`, `_private`);
//! generated Go identifiers must be exported, so they start uppercase and keep
//! only ASCII letters and digits.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `wire-name` | [`normalize_field_name`] | `Wirename` |
//! | `a_b.c` | [`strip_non_alphanumeric`] | `abc` |

/// Derive an exported Go identifier from a schema wire name.
///
/// Drops every character that is not an ASCII letter or digit and uppercases
/// the first remaining character, so `_private` becomes `Private`. The
/// function is idempotent.
///
/// # Examples
///
/// ```
/// use mdmgen_codegen::naming::normalize_field_name;
///
/// assert_eq!(normalize_field_name("passcode"), "Passcode");
/// assert_eq!(normalize_field_name("Allow-Camera"), "AllowCamera");
/// assert_eq!(normalize_field_name("DeviceName"), "DeviceName");
/// ```
pub fn normalize_field_name(s: &str) -> String {
    let stripped = strip_non_alphanumeric(s);
    let mut chars = stripped.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => std::iter::once(first.to_ascii_uppercase())
            .chain(chars)
            .collect(),
    }
}

/// Remove every character that is not an ASCII letter or digit.
///
/// # Examples
///
/// ```
/// use mdmgen_codegen::naming::strip_non_alphanumeric;
///
/// assert_eq!(strip_non_alphanumeric("com.apple.x-y_z"), "comapplexyz");
/// ```
pub fn strip_non_alphanumeric(s: &str) -> String {
    s.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Check that `s` is usable as a Go identifier.
///
/// Only ASCII identifiers are accepted: a letter or underscore followed by
/// letters, digits or underscores.
pub fn is_go_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
