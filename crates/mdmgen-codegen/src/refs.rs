//! Declaration reference extraction.
//!
//! Declarative management configurations point at asset declarations through
//! keys named `...AssetReference`. This module collects, per configuration
//! type, the key paths that hold such identifiers and renders them as a Go
//! `map[string][][]string` variable.

use crate::go_types::GoType;
use crate::ir::{Decl, Expr, GoFile};
use mdmgen_schema::{Key, SchemaDocument, TypeTag};
use std::collections::BTreeMap;
use tracing::debug;

/// Suffix of keys holding the identifier of another declaration.
pub const ASSET_REFERENCE_SUFFIX: &str = "AssetReference";

/// Prefix of the declaration types that are scanned.
pub const CONFIGURATION_PREFIX: &str = "com.apple.configuration.";

/// Header comment of files written by the `ddm-refs` subcommand.
pub const REFS_HEADER: &str = "Code generated by \"mdmgen ddm-refs\"; DO NOT EDIT.";

/// Default name of the generated variable.
pub const DEFAULT_VAR_NAME: &str = "idRefs";

/// Collect the paths of all asset reference keys, in schema order.
///
/// Each path lists the enclosing dictionary names followed by the reference
/// key itself. Reference keys are not descended into.
pub fn find_asset_references(keys: &[Key]) -> Vec<Vec<String>> {
    let mut paths = Vec::new();
    walk(keys, &mut Vec::new(), &mut paths);
    paths
}

fn walk(keys: &[Key], ancestors: &mut Vec<String>, paths: &mut Vec<Vec<String>>) {
    for key in keys {
        if key.name.ends_with(ASSET_REFERENCE_SUFFIX) {
            let mut path = ancestors.clone();
            path.push(key.name.clone());
            paths.push(path);
        } else if key.type_tag == TypeTag::Dictionary {
            ancestors.push(key.name.clone());
            walk(&key.children, ancestors, paths);
            ancestors.pop();
        }
    }
}

/// Declaration type to reference key paths, sorted by declaration type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceMap {
    entries: BTreeMap<String, Vec<Vec<String>>>,
}

impl ReferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the references of a configuration declaration.
    ///
    /// Returns `false` when the document is not a configuration or has no
    /// references; nothing is recorded then.
    pub fn add_document(&mut self, doc: &SchemaDocument) -> bool {
        let Some(declaration_type) = doc.declaration_type() else {
            return false;
        };
        if !declaration_type.starts_with(CONFIGURATION_PREFIX) {
            return false;
        }

        let paths = find_asset_references(&doc.payload_keys);
        if paths.is_empty() {
            return false;
        }

        debug!(declaration_type, references = paths.len(), "found asset references");
        self.entries.insert(declaration_type.to_string(), paths);
        true
    }

    /// Add references that cannot be derived from configuration schemas.
    pub fn add_builtin_references(&mut self) {
        self.entries.insert(
            "com.apple.activation.simple".to_string(),
            vec![vec!["StandardConfigurations".to_string()]],
        );
    }

    pub fn insert(&mut self, declaration_type: impl Into<String>, paths: Vec<Vec<String>>) {
        self.entries.insert(declaration_type.into(), paths);
    }

    pub fn get(&self, declaration_type: &str) -> Option<&Vec<Vec<String>>> {
        self.entries.get(declaration_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<Vec<String>>)> {
        self.entries.iter()
    }
}

/// Build the Go file declaring `var <var_name> = map[string][][]string{...}`.
pub fn references_file(package: &str, var_name: &str, refs: &ReferenceMap) -> GoFile {
    let entries = refs
        .iter()
        .map(|(declaration_type, paths)| {
            let paths = paths
                .iter()
                .map(|path| Expr::List {
                    elems: path.iter().cloned().map(Expr::Str).collect(),
                    multiline: false,
                })
                .collect();
            (
                Expr::Str(declaration_type.clone()),
                Expr::List {
                    elems: paths,
                    multiline: true,
                },
            )
        })
        .collect();

    let mut file = GoFile::new(package).with_header(REFS_HEADER);
    file.push(Decl::Var {
        name: var_name.to_string(),
        doc: vec![
            format!("{var_name} is a map of declaration type to payload key paths."),
            "These key paths contain the identifiers of dependent declarations.".to_string(),
        ],
        value: Expr::Map {
            ty: GoType::string_map(GoType::slice(GoType::slice(GoType::String))),
            entries,
        },
    });
    file
}
