//! Model trait for table-mapped record types.
//!
//! The `Model` trait is the schema metadata surface a record type exposes:
//! table name, ordered storage columns, current field values, and which
//! columns are dirty (changed since their persisted baseline).

use std::time::{SystemTime, UNIX_EPOCH};

use crate::field::ColumnInfo;
use crate::value::Value;

/// Trait for types that can be mapped to database tables.
///
/// # Example
///
/// ```ignore
/// struct Hero {
///     id: Option<i64>,
///     name: String,
/// }
///
/// impl Model for Hero {
///     const TABLE_NAME: &'static str = "heroes";
///
///     fn columns() -> &'static [ColumnInfo] {
///         static COLUMNS: &[ColumnInfo] = &[
///             ColumnInfo::new("id", "id", SqlType::BigInt).primary_key(true),
///             ColumnInfo::new("name", "name", SqlType::Text),
///         ];
///         COLUMNS
///     }
///     // ...
/// }
/// ```
pub trait Model: Sized + Send + Sync {
    /// The name of the database table.
    const TABLE_NAME: &'static str;

    /// Get metadata for all storage columns, in schema-declared order.
    fn columns() -> &'static [ColumnInfo];

    /// Convert this instance to a row of column name -> value pairs.
    fn to_row(&self) -> Vec<(&'static str, Value)>;

    /// Column names whose values differ from their persisted baseline and
    /// are intended to be written.
    fn dirty_columns(&self) -> Vec<&'static str>;

    /// Current time for auto-touched timestamp columns, as a `Value`.
    ///
    /// The default reads the system clock as epoch seconds. Models with a
    /// configured time zone or a test clock override this.
    fn current_timestamp(&self) -> Value {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        Value::Timestamp(secs)
    }
}
