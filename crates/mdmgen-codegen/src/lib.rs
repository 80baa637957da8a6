//! mdmgen-codegen - Go type generation from Device Management schemas
//!
//! # Architecture
//!
//! ```text
//! SchemaDocument (mdmgen-schema)
//!     ↓
//!  [envelope]  adds RequestType / CommandUUID / Status keys
//!     ↓
//!  [mapper]    Key tree → structs, fields, tags, comments
//!     ↓
//!   GoFile (ir)
//!     ↓
//!  [render]    validate, then gofmt-style source text
//! ```
//!
//! [`Generator`] drives the pipeline for a batch of command schemas. The
//! [`refs`] module shares the output and rendering stages to emit the
//! declaration reference table.
//!
//! # Type Mappings
//!
//! See [`go_types`] for the full table. Optional keys become pointers, except
//! for array element descriptors. Types that cannot be determined map to
//! `interface{}` with an explanatory comment.
//!
//! # Usage
//!
//! ```rust,no_run
//! use mdmgen_codegen::{Generator, GeneratorOptions};
//! use mdmgen_schema::SchemaDocument;
//! use std::path::Path;
//!
//! let doc = SchemaDocument::from_file(Path::new("mdm/commands/device.lock.yaml")).unwrap();
//!
//! let mut generator = Generator::new(GeneratorOptions::default());
//! generator.add_document(&doc).unwrap();
//! println!("{}", generator.render().unwrap());
//! ```

pub mod envelope;
mod error;
mod generator;
pub mod go_types;
pub mod ir;
pub mod mapper;
pub mod naming;
mod options;
pub mod refs;
pub mod render;

pub use error::{CodegenError, CodegenResult};
pub use generator::{COMMANDS_HEADER, Generator};
pub use go_types::GoType;
pub use ir::{Decl, Expr, GoFile, StructDecl, StructField};
pub use mapper::{MappedType, TypeMapper};
pub use options::GeneratorOptions;
pub use refs::{ReferenceMap, find_asset_references, references_file};
pub use render::render_go;
