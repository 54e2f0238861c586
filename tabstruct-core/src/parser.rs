//! Column extraction from `SHOW CREATE TABLE` text.
//!
//! Column declarations are the lines whose first non-blank character is the
//! identifier quote (a backtick). Table-level clauses such as `PRIMARY KEY`,
//! `KEY`, `CONSTRAINT` and the closing `) ENGINE=...` line never start with
//! one and are skipped.

use crate::adapters::mysql::map_mysql_type;
use crate::models::{ColumnDescriptor, RawColumn};

/// MySQL's identifier quoting delimiter.
pub const IDENTIFIER_QUOTE: char = '`';

/// Extracts column declarations in the order they appear.
///
/// A quoted line with fewer than two whitespace-separated tokens is skipped.
///
/// # Example
/// ```rust
/// use tabstruct_core::parser::parse_raw_columns;
///
/// let schema = "CREATE TABLE `t` (\n  `id` int(11) NOT NULL,\n  PRIMARY KEY (`id`)\n)";
/// let columns = parse_raw_columns(schema);
/// assert_eq!(columns.len(), 1);
/// assert_eq!(columns[0].name, "id");
/// assert_eq!(columns[0].declared_type, "int(11)");
/// ```
pub fn parse_raw_columns(schema_text: &str) -> Vec<RawColumn> {
    let mut columns = Vec::new();

    for line in schema_text.lines() {
        let line = line.trim();
        if !line.starts_with(IDENTIFIER_QUOTE) {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let (Some(name_token), Some(type_token)) = (tokens.next(), tokens.next()) else {
            tracing::debug!("Skipping column line without a type: {}", line);
            continue;
        };

        columns.push(RawColumn {
            name: name_token.trim_matches(IDENTIFIER_QUOTE).to_string(),
            declared_type: type_token.trim_end_matches(',').to_string(),
        });
    }

    columns
}

/// Parses schema text into column descriptors with mapped Go types.
pub fn parse_columns(schema_text: &str) -> Vec<ColumnDescriptor> {
    parse_raw_columns(schema_text)
        .into_iter()
        .map(|raw| {
            let field_type = map_mysql_type(&raw.declared_type);
            ColumnDescriptor::new(raw.name, field_type)
        })
        .collect()
}
