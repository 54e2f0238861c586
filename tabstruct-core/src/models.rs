//! Data model shared by the parser and the renderer.
//!
//! A [`TableDescriptor`] is built once per invocation from the parsed
//! columns and handed to the renderer; nothing here outlives a single run.

use crate::identifier::{TableName, camel_case};
use std::fmt;

/// Field type emitted for a column in the generated Go struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// `int64`
    Int64,
    /// `int`
    Int,
    /// `float64`
    Float64,
    /// `time.Time`
    Time,
    /// `string`
    String,
    /// `unknown`, emitted when no mapping applies so the gap is visible
    Unknown,
}

impl TargetType {
    /// The Go spelling of this type.
    pub const fn as_go(self) -> &'static str {
        match self {
            Self::Int64 => "int64",
            Self::Int => "int",
            Self::Float64 => "float64",
            Self::Time => "time.Time",
            Self::String => "string",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_go())
    }
}

/// A column declaration as it appears in the schema text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawColumn {
    /// Column name with quoting delimiters removed
    pub name: String,
    /// Declared type token, e.g. `varchar(255)` or `int(11)`
    pub declared_type: String,
}

/// One column of the generated struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Original column name, verbatim
    pub column_name: String,
    /// UpperCamelCase field name
    pub field_name: String,
    /// Mapped Go type
    pub field_type: TargetType,
}

impl ColumnDescriptor {
    /// Derives the field name from the column name and records the mapped type.
    pub fn new(column_name: impl Into<String>, field_type: TargetType) -> Self {
        let column_name = column_name.into();
        Self {
            field_name: camel_case(&column_name),
            column_name,
            field_type,
        }
    }
}

/// Everything the renderer needs for one struct declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDescriptor {
    /// UpperCamelCase type name derived from the table name
    pub type_name: String,
    /// Columns in schema declaration order
    pub columns: Vec<ColumnDescriptor>,
}

impl TableDescriptor {
    /// Builds the descriptor for `table`, keeping `columns` in the given order.
    pub fn new(table: &TableName, columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            type_name: table.type_name(),
            columns,
        }
    }

    /// Columns whose declared type had no mapping.
    pub fn unknown_columns(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns
            .iter()
            .filter(|c| c.field_type == TargetType::Unknown)
    }
}
