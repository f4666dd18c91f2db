//! Column descriptors.

use crate::types::SqlType;

/// Metadata about a storage column.
///
/// Descriptors are owned by the schema (the `Model` implementation), not by
/// consumers; builders hold `&'static` references into the schema's column
/// list.
#[derive(Debug, Clone)]
pub struct ColumnInfo {
    /// Rust field name
    pub name: &'static str,
    /// Database column name (may differ from field name)
    pub column_name: &'static str,
    /// SQL type for this column
    pub sql_type: SqlType,
    /// Whether this column is nullable
    pub nullable: bool,
    /// Whether this is a primary key
    pub primary_key: bool,
    /// Whether this column auto-increments
    pub auto_increment: bool,
    /// Enumerated label -> stored value table, if this column is enumerated.
    ///
    /// Lookup is by exact label match; the stored value is what the database
    /// actually holds for that label.
    pub enum_values: Option<&'static [(&'static str, i64)]>,
}

impl ColumnInfo {
    /// Create a new column descriptor with minimal required data.
    pub const fn new(name: &'static str, column_name: &'static str, sql_type: SqlType) -> Self {
        Self {
            name,
            column_name,
            sql_type,
            nullable: false,
            primary_key: false,
            auto_increment: false,
            enum_values: None,
        }
    }

    /// Set nullable flag.
    pub const fn nullable(mut self, value: bool) -> Self {
        self.nullable = value;
        self
    }

    /// Set primary key flag.
    pub const fn primary_key(mut self, value: bool) -> Self {
        self.primary_key = value;
        self
    }

    /// Set auto-increment flag.
    pub const fn auto_increment(mut self, value: bool) -> Self {
        self.auto_increment = value;
        self
    }

    /// Attach an enumerated label table.
    pub const fn enum_values(mut self, table: &'static [(&'static str, i64)]) -> Self {
        self.enum_values = Some(table);
        self
    }

    /// Check if this column is enumerated.
    pub const fn is_enum(&self) -> bool {
        self.enum_values.is_some()
    }

    /// Look up the stored value for an enumerated label.
    ///
    /// Returns `None` when the column is not enumerated or the label is not
    /// in the table.
    pub fn enum_stored_value(&self, label: &str) -> Option<i64> {
        self.enum_values?
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static STATUS_VALUES: &[(&str, i64)] = &[("active", 1), ("archived", 2)];

    #[test]
    fn test_builder_flags() {
        let col = ColumnInfo::new("id", "id", SqlType::BigInt)
            .primary_key(true)
            .auto_increment(true);
        assert!(col.primary_key);
        assert!(col.auto_increment);
        assert!(!col.nullable);
        assert!(!col.is_enum());
    }

    #[test]
    fn test_enum_lookup() {
        let col = ColumnInfo::new("status", "status", SqlType::Integer).enum_values(STATUS_VALUES);
        assert!(col.is_enum());
        assert_eq!(col.enum_stored_value("active"), Some(1));
        assert_eq!(col.enum_stored_value("archived"), Some(2));
        assert_eq!(col.enum_stored_value("deleted"), None);
    }

    #[test]
    fn test_enum_lookup_on_plain_column() {
        let col = ColumnInfo::new("name", "name", SqlType::Text);
        assert_eq!(col.enum_stored_value("anything"), None);
    }
}
