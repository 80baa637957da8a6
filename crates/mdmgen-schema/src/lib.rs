//! mdmgen-schema - Apple Device Management schema model
//!
//! This crate provides the in-memory form of the Device Management YAML schema:
//! - [`Key`] nodes forming the recursive key tree
//! - [`TypeTag`] and [`Presence`] markers attached to each key
//! - [`SchemaDocument`] for a whole command or declaration file
//! - [`SchemaError`] for parse and validation failures
//!
//! The model carries no generation logic; it is consumed read-only by
//! `mdmgen-codegen`.

mod document;
mod error;
mod key;

pub use document::{PayloadInfo, SchemaDocument};
pub use error::{SchemaError, SchemaResult};
pub use key::{Key, Presence, TypeTag};
