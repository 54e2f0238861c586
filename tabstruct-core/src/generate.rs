//! The fetch, parse, render pipeline.

use crate::Result;
use crate::adapters::SchemaSource;
use crate::identifier::TableName;
use crate::models::TableDescriptor;
use crate::parser::parse_columns;
use crate::render::{RenderOptions, render};
use std::fmt;

/// A rendered struct declaration and the table it was generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedStruct {
    /// Table the declaration mirrors
    pub table: TableName,
    /// Rendered Go source
    pub code: String,
}

impl GeneratedStruct {
    /// The full stdout report: a header naming the table, a blank line, then
    /// the declaration.
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GeneratedStruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generate go struct for table {}:", self.table)?;
        writeln!(f)?;
        writeln!(f, "{}", self.code)
    }
}

/// Fetches the schema of `table` from `source` and renders its struct.
///
/// # Errors
/// Propagates the first error from any stage; nothing is rendered from a
/// partial result.
pub async fn generate(
    source: &dyn SchemaSource,
    table: &TableName,
    options: &RenderOptions,
) -> Result<GeneratedStruct> {
    let schema_text = source.show_create_table(table).await?;
    tracing::debug!(
        "Schema text for '{}' has {} lines",
        table,
        schema_text.lines().count()
    );

    let columns = parse_columns(&schema_text);
    tracing::info!("Parsed {} columns from '{}'", columns.len(), table);

    let descriptor = TableDescriptor::new(table, columns);
    for column in descriptor.unknown_columns() {
        tracing::warn!(
            "Column '{}' has no Go type mapping; emitted as unknown",
            column.column_name
        );
    }

    let code = render(&descriptor, options)?;

    Ok(GeneratedStruct {
        table: table.clone(),
        code,
    })
}
