//! Output document for generated Go source.
//!
//! The generator never writes text directly. It accumulates [`Decl`] values in
//! a [`GoFile`] which is handed to [`crate::render::render_go`] once the
//! generation pass is complete.
//!
//! # Structure
//!
//! - [`GoFile`]: package name, header comment, imports and ordered declarations
//! - [`Decl`]: a top-level `const`, `type ... struct`, `func` or `var`
//! - [`StructField`]: one field with its type, `plist` tag and trailing comment
//! - [`Expr`]: the small expression language used by constructors and `var`s

use crate::go_types::GoType;
use std::collections::BTreeSet;

/// A Go source file under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct GoFile {
    /// Package clause name.
    pub package: String,

    /// Comment placed above the package clause.
    pub header: Option<String>,

    /// Imported package paths.
    pub imports: BTreeSet<String>,

    /// Declarations in emission order.
    pub decls: Vec<Decl>,
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    /// `const Name = "value"`
    Const { name: String, value: String },

    /// `type Name struct { ... }`
    Struct(StructDecl),

    /// A function without parameters returning a single value.
    Func(FuncDecl),

    /// `var Name = value`
    Var {
        name: String,
        doc: Vec<String>,
        value: Expr,
    },
}

/// A struct type declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub name: String,
    pub fields: Vec<StructField>,
}

/// A field in a generated struct.
#[derive(Debug, Clone, PartialEq)]
pub struct StructField {
    /// Go field name.
    pub name: String,

    pub ty: GoType,

    /// Value of the `plist` struct tag, e.g. `Wire-Name,omitempty`.
    pub tag: Option<String>,

    /// Trailing line comment.
    pub comment: Option<String>,
}

/// `func Name() Returns { return Body }`
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub name: String,
    pub doc: Vec<String>,
    pub returns: GoType,
    pub body: Expr,
}

/// A Go expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A reference to a named value.
    Ident(String),

    /// A string literal.
    Str(String),

    /// Keyed struct literal: `Type{Field: value}`.
    Struct { ty: String, fields: Vec<(String, Expr)> },

    /// `&expr`
    AddressOf(Box<Expr>),

    /// Composite literal with elided type: `{a, b}`. Multiline lists put each
    /// element on its own line.
    List { elems: Vec<Expr>, multiline: bool },

    /// `map[string]T{key: value}` with one entry per line.
    Map { ty: GoType, entries: Vec<(Expr, Expr)> },
}

impl GoFile {
    /// Create an empty file for `package`.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            header: None,
            imports: BTreeSet::new(),
            decls: Vec::new(),
        }
    }

    /// Set the comment placed above the package clause.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Append a declaration, recording any imports it needs.
    pub fn push(&mut self, decl: Decl) {
        if decl.uses_time() {
            self.imports.insert("time".to_string());
        }
        self.decls.push(decl);
    }

    /// Find a struct declaration by name.
    pub fn find_struct(&self, name: &str) -> Option<&StructDecl> {
        self.decls.iter().find_map(|decl| match decl {
            Decl::Struct(s) if s.name == name => Some(s),
            _ => None,
        })
    }

    /// Iterate over all struct declarations in emission order.
    pub fn structs(&self) -> impl Iterator<Item = &StructDecl> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Struct(s) => Some(s),
            _ => None,
        })
    }
}

impl Decl {
    /// The top-level identifier this declaration introduces.
    pub fn name(&self) -> &str {
        match self {
            Decl::Const { name, .. } | Decl::Var { name, .. } => name,
            Decl::Struct(s) => &s.name,
            Decl::Func(f) => &f.name,
        }
    }

    fn uses_time(&self) -> bool {
        match self {
            Decl::Struct(s) => s.fields.iter().any(|f| f.ty.uses_time()),
            Decl::Func(f) => f.returns.uses_time(),
            Decl::Const { .. } | Decl::Var { .. } => false,
        }
    }
}

impl StructField {
    pub fn new(name: impl Into<String>, ty: GoType) -> Self {
        Self {
            name: name.into(),
            ty,
            tag: None,
            comment: None,
        }
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    /// Whether the `plist` tag carries the `omitempty` option.
    pub fn is_omitempty(&self) -> bool {
        self.tag
            .as_deref()
            .is_some_and(|tag| tag.split(',').skip(1).any(|opt| opt == "omitempty"))
    }

    /// The wire name given by the tag, if it renames the field.
    pub fn tag_name(&self) -> Option<&str> {
        self.tag
            .as_deref()
            .and_then(|tag| tag.split(',').next())
            .filter(|name| !name.is_empty())
    }
}

impl StructDecl {
    /// Look up a field by Go name.
    pub fn field(&self, name: &str) -> Option<&StructField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn time_struct() -> Decl {
        Decl::Struct(StructDecl {
            name: "Event".to_string(),
            fields: vec![StructField::new("At", GoType::pointer(GoType::Time))],
        })
    }

    #[test]
    fn GoFile___push_struct_with_time___adds_import() {
        let mut file = GoFile::new("main");

        file.push(time_struct());

        assert!(file.imports.contains("time"));
        assert_eq!(file.decls.len(), 1);
    }

    #[test]
    fn GoFile___push_const___no_imports() {
        let mut file = GoFile::new("main");

        file.push(Decl::Const {
            name: "FooRequestType".to_string(),
            value: "Foo".to_string(),
        });

        assert!(file.imports.is_empty());
    }

    #[test]
    fn GoFile___find_struct___returns_matching_struct() {
        let mut file = GoFile::new("main");
        file.push(time_struct());

        assert!(file.find_struct("Event").is_some());
        assert!(file.find_struct("Missing").is_none());
        assert_eq!(file.structs().count(), 1);
    }

    #[test]
    fn StructField___tag_helpers___parse_tag() {
        let renamed = StructField::new("AllowCamera", GoType::Bool)
            .with_tag(Some("allow-camera,omitempty".to_string()));
        let omit_only =
            StructField::new("Name", GoType::String).with_tag(Some(",omitempty".to_string()));
        let plain = StructField::new("Name", GoType::String);

        assert_eq!(renamed.tag_name(), Some("allow-camera"));
        assert!(renamed.is_omitempty());
        assert_eq!(omit_only.tag_name(), None);
        assert!(omit_only.is_omitempty());
        assert!(!plain.is_omitempty());
        assert_eq!(plain.tag_name(), None);
    }

    #[test]
    fn Decl___name___returns_identifier() {
        let decl = Decl::Var {
            name: "idRefs".to_string(),
            doc: vec![],
            value: Expr::Ident("nil".to_string()),
        };

        assert_eq!(decl.name(), "idRefs");
        assert_eq!(time_struct().name(), "Event");
    }
}
