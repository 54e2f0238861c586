//! Identifier handling: snake_case to UpperCamelCase conversion and MySQL
//! table-name validation.

use crate::{Result, error::TabstructError};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Converts a snake_case identifier to UpperCamelCase.
///
/// Underscores are removed. The first character of the input and every
/// character following a removed underscore are uppercased; all other
/// characters pass through unchanged. A leading underscore therefore
/// disappears and capitalizes what follows it (`_leading` becomes `Leading`).
///
/// Uppercasing maps one character to one character. A character whose
/// uppercase form is several characters (`ß` → `SS`) is kept as is.
///
/// # Example
/// ```rust
/// use tabstruct_core::identifier::camel_case;
///
/// assert_eq!(camel_case("user_profile"), "UserProfile");
/// assert_eq!(camel_case("id"), "Id");
/// assert_eq!(camel_case("_leading"), "Leading");
/// ```
pub fn camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
            continue;
        }
        if capitalize_next {
            let upper = c.to_uppercase();
            if upper.len() == 1 {
                out.extend(upper);
            } else {
                out.push(c);
            }
            capitalize_next = false;
        } else {
            out.push(c);
        }
    }

    out
}

/// Unquoted MySQL identifier grammar: permitted characters, at most 64 of them.
#[allow(clippy::expect_used)]
fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[0-9A-Za-z$_\x{0080}-\x{FFFF}]{1,64}$").expect("Invalid identifier pattern")
    })
}

/// Validates a single identifier part against MySQL's unquoted grammar.
fn validate_part(part: &str, raw: &str) -> Result<()> {
    if !identifier_pattern().is_match(part) {
        return Err(TabstructError::configuration(format!(
            "Invalid table name '{raw}': identifiers must be 1-64 characters of [0-9A-Za-z$_] or U+0080..U+FFFF"
        )));
    }
    if part.chars().all(|c| c.is_ascii_digit()) {
        return Err(TabstructError::configuration(format!(
            "Invalid table name '{raw}': identifiers may not consist solely of digits"
        )));
    }
    Ok(())
}

/// A validated table reference, optionally qualified by its schema.
///
/// Only names that match MySQL's unquoted identifier grammar are accepted,
/// so the backtick-quoted form produced by [`TableName::quoted`] can be
/// spliced into a statement without escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName {
    schema: Option<String>,
    table: String,
}

impl TableName {
    /// Parses `table` or `schema.table`.
    ///
    /// # Errors
    /// Returns a configuration error if either part violates the identifier
    /// grammar or more than one `.` separator is present.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut parts = raw.split('.');
        let (schema, table) = match (parts.next(), parts.next(), parts.next()) {
            (Some(table), None, None) => (None, table),
            (Some(schema), Some(table), None) => (Some(schema), table),
            _ => {
                return Err(TabstructError::configuration(format!(
                    "Invalid table name '{raw}': expected `table` or `schema.table`"
                )));
            }
        };

        if let Some(schema) = schema {
            validate_part(schema, raw)?;
        }
        validate_part(table, raw)?;

        Ok(Self {
            schema: schema.map(str::to_string),
            table: table.to_string(),
        })
    }

    /// The unqualified table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The schema qualifier, if one was given.
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// Backtick-quoted form for use in SQL statements.
    pub fn quoted(&self) -> String {
        match &self.schema {
            Some(schema) => format!("`{schema}`.`{}`", self.table),
            None => format!("`{}`", self.table),
        }
    }

    /// Name of the generated type, derived from the unqualified table name.
    pub fn type_name(&self) -> String {
        camel_case(&self.table)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{schema}.{}", self.table),
            None => f.write_str(&self.table),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_camel_case_basic() {
        assert_eq!(camel_case("user_profile"), "UserProfile");
        assert_eq!(camel_case("id"), "Id");
        assert_eq!(camel_case("user_name"), "UserName");
        assert_eq!(camel_case(""), "");
    }

    #[test]
    fn test_camel_case_underscore_edges() {
        assert_eq!(camel_case("_leading"), "Leading");
        assert_eq!(camel_case("trailing_"), "Trailing");
        assert_eq!(camel_case("a__b"), "AB");
        assert_eq!(camel_case("___"), "");
    }

    #[test]
    fn test_camel_case_preserves_inner_case() {
        assert_eq!(camel_case("userID"), "UserID");
        assert_eq!(camel_case("html_URL_path"), "HtmlURLPath");
        assert_eq!(camel_case("col_2nd"), "Col2nd");
    }

    #[test]
    fn test_camel_case_uppercases_one_char_at_a_time() {
        assert_eq!(camel_case("ärger_über"), "ÄrgerÜber");
        assert_eq!(camel_case("straße_ßeite"), "Straßeßeite");
        assert_eq!(camel_case("ß_col"), "ßCol");
        assert_eq!(camel_case("ß").chars().count(), 1);
    }

    #[test]
    fn test_table_name_unqualified() {
        let name = TableName::parse("user_profile").unwrap();
        assert_eq!(name.table(), "user_profile");
        assert_eq!(name.schema(), None);
        assert_eq!(name.quoted(), "`user_profile`");
        assert_eq!(name.type_name(), "UserProfile");
        assert_eq!(name.to_string(), "user_profile");
    }

    #[test]
    fn test_table_name_qualified() {
        let name = TableName::parse("shop.order_items").unwrap();
        assert_eq!(name.schema(), Some("shop"));
        assert_eq!(name.quoted(), "`shop`.`order_items`");
        assert_eq!(name.type_name(), "OrderItems");
        assert_eq!(name.to_string(), "shop.order_items");
    }

    #[test]
    fn test_table_name_rejects_injection() {
        for raw in [
            "users; DROP TABLE users",
            "users`",
            "users --",
            "a.b.c",
            "",
            ".users",
            "users.",
            "12345",
        ] {
            let result = TableName::parse(raw);
            assert!(
                matches!(result, Err(TabstructError::Configuration { .. })),
                "expected rejection for {raw:?}"
            );
        }
    }

    #[test]
    fn test_table_name_length_limit() {
        assert!(TableName::parse(&"t".repeat(64)).is_ok());
        assert!(TableName::parse(&"t".repeat(65)).is_err());
    }

    #[test]
    fn test_table_name_accepts_extended_characters() {
        assert!(TableName::parse("$audit_log").is_ok());
        assert!(TableName::parse("1st_quarter").is_ok());
        assert!(TableName::parse("usuários").is_ok());
    }

    proptest! {
        #[test]
        fn camel_case_is_idempotent(s in "[a-zA-Z0-9_]{0,24}") {
            let once = camel_case(&s);
            prop_assert_eq!(camel_case(&once), once.clone());
            prop_assert!(!once.contains('_'));
        }

        #[test]
        fn camel_case_leaves_camel_input_unchanged(s in "[A-Z][a-zA-Z0-9]{0,24}") {
            prop_assert_eq!(camel_case(&s), s);
        }

        #[test]
        fn camel_case_capitalizes_each_segment(
            segments in proptest::collection::vec("[a-z][a-z0-9]{0,8}", 1..5)
        ) {
            let joined = segments.join("_");
            let expected: String = segments
                .iter()
                .map(|seg| {
                    let mut chars = seg.chars();
                    chars
                        .next()
                        .map(|c| c.to_ascii_uppercase().to_string() + chars.as_str())
                        .unwrap_or_default()
                })
                .collect();
            prop_assert_eq!(camel_case(&joined), expected);
        }
    }
}
