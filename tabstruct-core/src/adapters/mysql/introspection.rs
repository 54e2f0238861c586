//! Schema text retrieval via `SHOW CREATE TABLE`.

use crate::Result;
use crate::error::TabstructError;
use crate::identifier::TableName;
use sqlx::{MySqlConnection, Row};

/// Builds the introspection statement for an already validated table name.
pub fn show_create_table_statement(table: &TableName) -> String {
    format!("SHOW CREATE TABLE {}", table.quoted())
}

/// Runs `SHOW CREATE TABLE` and returns the `Create Table` column verbatim.
///
/// Only the first result row is read. The schema text is column 1 of that
/// row; it is decoded without a type check because some server versions
/// report it as `VARBINARY` rather than a character type.
///
/// # Errors
/// - `Query` if the statement fails (missing table, no privileges, lost
///   connection) or returns no row
/// - `Scan` if column 1 cannot be decoded as UTF-8 text
pub(crate) async fn show_create_table(
    connection: &mut MySqlConnection,
    table: &TableName,
) -> Result<String> {
    let statement = show_create_table_statement(table);
    tracing::debug!("Executing: {}", statement);

    let row = sqlx::query(&statement)
        .fetch_optional(connection)
        .await
        .map_err(|e| {
            TabstructError::query_failed(format!("SHOW CREATE TABLE for '{table}'"), e)
        })?
        .ok_or_else(|| {
            TabstructError::empty_result(format!("SHOW CREATE TABLE for '{table}' returned no rows"))
        })?;

    let schema_text: String = row.try_get_unchecked(1_usize).map_err(|e| {
        TabstructError::scan_failed(format!("schema text column for '{table}'"), e)
    })?;

    tracing::debug!(
        "Fetched {} bytes of schema text for '{}'",
        schema_text.len(),
        table
    );

    Ok(schema_text)
}
