//! Go struct rendering.
//!
//! The declaration is produced by an askama template
//! (`templates/struct.go.txt`) from typed context structs. Each field line
//! carries the field name, its Go type and, depending on [`TagStyle`], a
//! struct tag naming the original column.

use crate::Result;
use crate::models::{ColumnDescriptor, TableDescriptor};
use askama::Template;

/// Struct tag convention used to map fields back to their columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagStyle {
    /// No struct tag
    None,
    /// GORM: `` `gorm:"column:name"` ``
    #[default]
    Gorm,
    /// sqlx / database-sql scanners: `` `db:"name"` ``
    Sqlx,
}

impl TagStyle {
    /// The struct tag for `column_name`, or `None` when tags are disabled.
    pub fn tag(self, column_name: &str) -> Option<String> {
        match self {
            Self::None => None,
            Self::Gorm => Some(format!("`gorm:\"column:{column_name}\"`")),
            Self::Sqlx => Some(format!("`db:\"{column_name}\"`")),
        }
    }
}

/// Options controlling the rendered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Struct tag convention
    pub tag_style: TagStyle,
}

impl RenderOptions {
    /// Options using the given tag style.
    pub const fn with_tag_style(tag_style: TagStyle) -> Self {
        Self { tag_style }
    }
}

struct FieldLine<'a> {
    name: &'a str,
    ty: &'static str,
    tag: String,
}

impl<'a> FieldLine<'a> {
    fn new(column: &'a ColumnDescriptor, tag_style: TagStyle) -> Self {
        Self {
            name: &column.field_name,
            ty: column.field_type.as_go(),
            tag: tag_style
                .tag(&column.column_name)
                .map(|tag| format!("\t{tag}"))
                .unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "struct.go.txt", escape = "none")]
struct StructTemplate<'a> {
    type_name: &'a str,
    fields: Vec<FieldLine<'a>>,
}

/// Renders one Go struct declaration for `table`.
///
/// Fields appear in exactly the order of `table.columns`.
///
/// # Errors
/// Returns a template error if rendering fails, which indicates a defect in
/// the bundled template rather than bad input.
pub fn render(table: &TableDescriptor, options: &RenderOptions) -> Result<String> {
    let template = StructTemplate {
        type_name: &table.type_name,
        fields: table
            .columns
            .iter()
            .map(|column| FieldLine::new(column, options.tag_style))
            .collect(),
    };

    let rendered = template.render()?;
    Ok(rendered.trim_end().to_string())
}
