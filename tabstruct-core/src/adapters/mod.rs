//! Schema source trait and database adapters.
//!
//! The pipeline only needs one capability from a database: the textual
//! `CREATE TABLE` definition for a named table. That capability is the
//! [`SchemaSource`] trait, so the parser and renderer can be driven from a
//! live server or from schema text held in memory.
//!
//! # Module Structure
//! - `config`: Connection configuration (`ConnectionConfig`)
//! - `mysql`: MySQL adapter

use crate::{Result, identifier::TableName};
use async_trait::async_trait;

pub mod config;
pub mod mysql;

pub use config::ConnectionConfig;

/// Supplies the raw schema definition for a table.
///
/// # Object Safety
/// This trait is object-safe, allowing `&dyn SchemaSource`.
#[async_trait]
pub trait SchemaSource: Send + Sync {
    /// Returns the engine's `CREATE TABLE` text for `table`, verbatim.
    ///
    /// # Errors
    /// Returns a query error if the table cannot be introspected, or a scan
    /// error if the definition cannot be read from the result.
    async fn show_create_table(&self, table: &TableName) -> Result<String>;
}

/// Schema text held in memory, keyed by unqualified table name.
///
/// Useful for rendering from a saved `SHOW CREATE TABLE` dump and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSchemaSource {
    tables: Vec<(String, String)>,
}

impl StaticSchemaSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers schema text for a table.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>, schema_text: impl Into<String>) -> Self {
        self.tables.push((table.into(), schema_text.into()));
        self
    }
}

#[async_trait]
impl SchemaSource for StaticSchemaSource {
    async fn show_create_table(&self, table: &TableName) -> Result<String> {
        self.tables
            .iter()
            .find(|(name, _)| name == table.table())
            .map(|(_, text)| text.clone())
            .ok_or_else(|| {
                crate::error::TabstructError::empty_result(format!(
                    "Table '{table}' doesn't exist"
                ))
            })
    }
}
