//! MySQL declared type to Go field type conversion.
//!
//! Mapping looks only at the base type name: the declared type truncated at
//! the first `(` or whitespace, so `int(11) unsigned` maps exactly like `int`.

use crate::models::TargetType;

/// Ordered prefix table. The first matching prefix wins, so `bigint` must be
/// checked before `int`.
const PREFIXES: &[(&str, TargetType)] = &[
    ("bigint", TargetType::Int64),
    ("int", TargetType::Int),
    ("smallint", TargetType::Int),
    ("tinyint", TargetType::Int),
    ("mediumint", TargetType::Int),
    ("decimal", TargetType::Float64),
    ("numeric", TargetType::Float64),
    ("float", TargetType::Float64),
    ("double", TargetType::Float64),
    ("datetime", TargetType::Time),
    ("date", TargetType::Time),
    ("timestamp", TargetType::Time),
    ("varchar", TargetType::String),
    ("char", TargetType::String),
    ("text", TargetType::String),
];

/// Strips length/precision suffixes and modifier keywords from a declared type.
///
/// # Example
/// ```rust
/// use tabstruct_core::adapters::mysql::type_mapping::base_type;
///
/// assert_eq!(base_type("int(11) unsigned"), "int");
/// assert_eq!(base_type("decimal(10,2)"), "decimal");
/// ```
pub fn base_type(declared_type: &str) -> &str {
    let end = declared_type
        .find(|c: char| c == '(' || c.is_whitespace())
        .unwrap_or(declared_type.len());
    &declared_type[..end]
}

/// Maps a MySQL declared type to its Go field type.
///
/// Matching is case-sensitive against MySQL's lowercase type names, as they
/// appear in `SHOW CREATE TABLE` output. Anything unrecognized maps to
/// [`TargetType::Unknown`] rather than a guess.
///
/// # Example
/// ```rust
/// use tabstruct_core::adapters::mysql::map_mysql_type;
/// use tabstruct_core::models::TargetType;
///
/// assert_eq!(map_mysql_type("varchar(255)"), TargetType::String);
/// assert_eq!(map_mysql_type("enum('a','b')"), TargetType::Unknown);
/// ```
pub fn map_mysql_type(declared_type: &str) -> TargetType {
    let base = base_type(declared_type);

    PREFIXES
        .iter()
        .find(|(prefix, _)| base.starts_with(*prefix))
        .map_or(TargetType::Unknown, |&(_, target)| target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_integer_types() {
        assert_eq!(map_mysql_type("bigint(20)"), TargetType::Int64);
        assert_eq!(map_mysql_type("bigint unsigned"), TargetType::Int64);
        assert_eq!(map_mysql_type("int(11)"), TargetType::Int);
        assert_eq!(map_mysql_type("int(11) unsigned"), TargetType::Int);
        assert_eq!(map_mysql_type("smallint(6)"), TargetType::Int);
        assert_eq!(map_mysql_type("tinyint(1)"), TargetType::Int);
        assert_eq!(map_mysql_type("mediumint(8)"), TargetType::Int);
        assert_eq!(map_mysql_type("integer"), TargetType::Int);
    }

    #[test]
    fn test_floating_point_types() {
        assert_eq!(map_mysql_type("decimal(10,2)"), TargetType::Float64);
        assert_eq!(map_mysql_type("numeric(8,3)"), TargetType::Float64);
        assert_eq!(map_mysql_type("float"), TargetType::Float64);
        assert_eq!(map_mysql_type("double"), TargetType::Float64);
    }

    #[test]
    fn test_temporal_types() {
        assert_eq!(map_mysql_type("datetime"), TargetType::Time);
        assert_eq!(map_mysql_type("datetime(6)"), TargetType::Time);
        assert_eq!(map_mysql_type("date"), TargetType::Time);
        assert_eq!(map_mysql_type("timestamp"), TargetType::Time);
    }

    #[test]
    fn test_string_types() {
        assert_eq!(map_mysql_type("varchar(255)"), TargetType::String);
        assert_eq!(map_mysql_type("char(36)"), TargetType::String);
        assert_eq!(map_mysql_type("text"), TargetType::String);
    }

    #[test]
    fn test_unmatched_types_are_unknown() {
        assert_eq!(map_mysql_type("enum('a','b')"), TargetType::Unknown);
        assert_eq!(map_mysql_type("json"), TargetType::Unknown);
        assert_eq!(map_mysql_type("blob"), TargetType::Unknown);
        assert_eq!(map_mysql_type("longtext"), TargetType::Unknown);
        assert_eq!(map_mysql_type("time"), TargetType::Unknown);
        assert_eq!(map_mysql_type(""), TargetType::Unknown);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(map_mysql_type("INT(11)"), TargetType::Unknown);
        assert_eq!(map_mysql_type("VarChar(10)"), TargetType::Unknown);
    }

    #[test]
    fn test_base_type() {
        assert_eq!(base_type("varchar(255)"), "varchar");
        assert_eq!(base_type("int(11) unsigned"), "int");
        assert_eq!(base_type("bigint unsigned"), "bigint");
        assert_eq!(base_type("text"), "text");
        assert_eq!(base_type(""), "");
    }

    proptest! {
        #[test]
        fn suffix_does_not_affect_mapping(
            base in "(bigint|int|smallint|tinyint|mediumint|decimal|float|double|datetime|date|timestamp|varchar|char|text|enum|json|blob)",
            length in 1u32..1000,
            modifier in proptest::sample::select(vec!["", " unsigned", " zerofill", " unsigned zerofill"]),
        ) {
            let declared = format!("{base}({length}){modifier}");
            prop_assert_eq!(map_mysql_type(&declared), map_mysql_type(&base));
        }
    }
}
