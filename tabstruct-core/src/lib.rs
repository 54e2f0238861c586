//! Core library for tabstruct.
//!
//! tabstruct reads a MySQL table definition with `SHOW CREATE TABLE` and
//! prints a Go struct mirroring it, one field per column with a struct tag
//! pointing back at the column name.
//!
//! # Architecture
//! The work is a single linear pipeline:
//! - [`adapters`]: fetch the raw schema text ([`adapters::SchemaSource`])
//! - [`parser`]: extract column names and declared types, in order
//! - [`render`]: map types and render the declaration from a template
//!
//! [`generate::generate`] composes the three.

pub mod adapters;
pub mod error;
pub mod generate;
pub mod identifier;
pub mod logging;
pub mod models;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use adapters::{ConnectionConfig, SchemaSource, StaticSchemaSource, mysql::MySqlAdapter};
pub use error::{Result, TabstructError};
pub use generate::{GeneratedStruct, generate};
pub use identifier::{TableName, camel_case};
pub use logging::init_logging;
pub use models::{ColumnDescriptor, RawColumn, TableDescriptor, TargetType};
pub use render::{RenderOptions, TagStyle};
