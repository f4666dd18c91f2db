//! Size-bounded multi-row INSERT statement builder.

use bulkops_core::quote::{quote_identifier, quote_value};
use bulkops_core::{ColumnInfo, Connection, Model, Result, Value};

use crate::config::InsertConfig;

/// Builds multi-row INSERT statements for a homogeneous batch of unsaved
/// records.
///
/// The builder inspects only the first record to determine the column list;
/// all records in one batch must share the same schema and the same dirty
/// column set. This precondition is asserted in debug builds and assumed in
/// release builds.
///
/// Construction resolves columns and override attributes eagerly; the
/// statement text itself is generated on first request and cached for the
/// lifetime of the instance. The input collection is only read, never
/// mutated.
#[derive(Debug)]
pub struct Insertor<'a, M: Model> {
    collection: &'a [M],
    columns: Vec<&'static ColumnInfo>,
    /// Override columns paired with their pre-encoded SQL literals, in
    /// override-map order.
    overrides: Vec<(&'static ColumnInfo, String)>,
    statements: Option<Vec<String>>,
    size_threshold: usize,
    buffer_capacity: usize,
}

impl<'a, M: Model> Insertor<'a, M> {
    /// Create a builder over `collection` with the given configuration.
    ///
    /// An empty collection is not an error; it produces no statements and a
    /// no-op [`execute`](Self::execute).
    pub fn new(collection: &'a [M], config: InsertConfig) -> Self {
        let InsertConfig {
            override_attributes,
            touch_created_at,
            touch_updated_at,
            set_all_columns,
            size_threshold,
            buffer_capacity,
        } = config;

        if collection.is_empty() {
            return Self {
                collection,
                columns: Vec::new(),
                overrides: Vec::new(),
                statements: None,
                size_threshold,
                buffer_capacity,
            };
        }

        #[cfg(debug_assertions)]
        {
            let first_dirty = collection[0].dirty_columns();
            for record in &collection[1..] {
                debug_assert_eq!(
                    record.dirty_columns(),
                    first_dirty,
                    "all records in a batch must share one dirty column set"
                );
            }
        }

        let first = &collection[0];

        // Either touch flag stamps both timestamp columns with one shared
        // timestamp. Auto-touch keys come first; caller-supplied overrides
        // for the same key replace the value without moving it.
        let mut effective: Vec<(&'static str, Value)> = Vec::new();
        if touch_created_at || touch_updated_at {
            let now = first.current_timestamp();
            effective.push(("created_at", now.clone()));
            effective.push(("updated_at", now));
        }
        for (name, value) in override_attributes {
            if let Some(entry) = effective.iter_mut().find(|(n, _)| *n == name) {
                entry.1 = value;
            } else {
                effective.push((name, value));
            }
        }

        let columns: Vec<&'static ColumnInfo> = if set_all_columns {
            M::columns().iter().collect()
        } else {
            let dirty = first.dirty_columns();
            M::columns()
                .iter()
                .filter(|c| dirty.contains(&c.name))
                .collect()
        };

        let mut overrides = Vec::with_capacity(effective.len());
        for (name, value) in effective {
            match M::columns().iter().find(|c| c.name == name) {
                Some(column) => {
                    let literal = encode_override_value(column, value);
                    overrides.push((column, literal));
                }
                None => {
                    tracing::debug!(
                        table = M::TABLE_NAME,
                        column = name,
                        "dropping override attribute for unknown column"
                    );
                }
            }
        }

        Self {
            collection,
            columns,
            overrides,
            statements: None,
            size_threshold,
            buffer_capacity,
        }
    }

    /// The generated statements, one per chunk, in chunk-index order.
    ///
    /// Generation happens once; subsequent calls return the cached result.
    pub fn statements(&mut self) -> &[String] {
        if self.statements.is_none() {
            self.statements = Some(self.build_statements());
        }
        self.statements.as_deref().unwrap_or(&[])
    }

    /// Execute every chunk through `conn`, in chunk-index order.
    ///
    /// The first channel error aborts remaining sends and propagates
    /// unchanged; chunks already executed stay applied. Returns the summed
    /// affected-row count.
    pub fn execute<C: Connection>(&mut self, conn: &mut C) -> Result<u64> {
        if self.statements.is_none() {
            self.statements = Some(self.build_statements());
        }
        let statements = self.statements.as_deref().unwrap_or(&[]);

        let mut affected = 0;
        for (index, sql) in statements.iter().enumerate() {
            tracing::debug!(
                table = M::TABLE_NAME,
                chunk = index,
                bytes = sql.len(),
                "executing insert chunk"
            );
            affected += conn.execute(sql)?;
        }
        Ok(affected)
    }

    fn build_statements(&self) -> Vec<String> {
        if self.collection.is_empty() {
            return Vec::new();
        }

        let prefix = self.statement_prefix();
        let last = self.collection.len() - 1;

        let mut statements = Vec::new();
        let mut current = String::with_capacity(self.buffer_capacity);
        current.push_str(&prefix);

        for (index, record) in self.collection.iter().enumerate() {
            let row = record.to_row();
            current.push('(');

            let mut first = true;
            for column in &self.columns {
                if !first {
                    current.push(',');
                }
                first = false;
                let value = row
                    .iter()
                    .find(|(name, _)| *name == column.name)
                    .map_or(Value::Null, |(_, v)| v.clone());
                current.push_str(&encode_record_value(column, value));
            }
            for (_, literal) in &self.overrides {
                if !first {
                    current.push(',');
                }
                first = false;
                current.push_str(literal);
            }

            current.push(')');

            // Check-after-append: a row is never split across chunks, so a
            // chunk may run slightly past the threshold before it is sealed.
            if current.len() > self.size_threshold && index != last {
                statements.push(std::mem::replace(
                    &mut current,
                    String::with_capacity(self.buffer_capacity),
                ));
                current.push_str(&prefix);
            } else if index != last {
                current.push(',');
            }
        }

        statements.push(current);

        tracing::debug!(
            table = M::TABLE_NAME,
            records = self.collection.len(),
            chunks = statements.len(),
            "built insert statements"
        );

        statements
    }

    /// The shared `INSERT INTO .. (..) VALUES ` header: record-derived
    /// columns in schema order, then override columns in override-map order.
    fn statement_prefix(&self) -> String {
        let mut prefix = String::from("INSERT INTO ");
        prefix.push_str(&quote_identifier(M::TABLE_NAME));
        prefix.push_str(" (");

        let mut first = true;
        let names = self
            .columns
            .iter()
            .map(|c| c.column_name)
            .chain(self.overrides.iter().map(|(c, _)| c.column_name));
        for name in names {
            if !first {
                prefix.push(',');
            }
            first = false;
            prefix.push_str(&quote_identifier(name));
        }

        prefix.push_str(") VALUES ");
        prefix
    }
}

/// Encode one record-derived value as a SQL literal.
///
/// Enumerated columns translate the symbolic label to its stored value; a
/// label missing from the table renders NULL, matching how the database
/// would reject the bare label anyway.
fn encode_record_value(column: &ColumnInfo, value: Value) -> String {
    let translated = if column.is_enum() {
        match value {
            Value::Null => Value::Null,
            Value::Text(label) => column
                .enum_stored_value(&label)
                .map_or(Value::Null, Value::BigInt),
            other => other,
        }
    } else {
        value
    };
    quote_value(&column.sql_type.cast_for_storage(translated))
}

/// Encode one override value as a SQL literal.
///
/// Unlike record values, an override label that misses the enum table falls
/// back to the raw value so callers can force verbatim literals.
fn encode_override_value(column: &ColumnInfo, value: Value) -> String {
    let translated = if column.is_enum() {
        match value {
            Value::Text(label) => match column.enum_stored_value(&label) {
                Some(stored) => Value::BigInt(stored),
                None => Value::Text(label),
            },
            other => other,
        }
    } else {
        value
    };
    quote_value(&column.sql_type.cast_for_storage(translated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulkops_core::SqlType;

    static STATUS_VALUES: &[(&str, i64)] = &[("draft", 10), ("published", 20)];

    fn status_column() -> ColumnInfo {
        ColumnInfo::new("status", "status", SqlType::Integer).enum_values(STATUS_VALUES)
    }

    #[test]
    fn test_encode_record_value_translates_label() {
        let col = status_column();
        assert_eq!(
            encode_record_value(&col, Value::Text("draft".to_string())),
            "10"
        );
    }

    #[test]
    fn test_encode_record_value_unknown_label_is_null() {
        let col = status_column();
        assert_eq!(
            encode_record_value(&col, Value::Text("bogus".to_string())),
            "NULL"
        );
    }

    #[test]
    fn test_encode_record_value_null_stays_null() {
        let col = status_column();
        assert_eq!(encode_record_value(&col, Value::Null), "NULL");
    }

    #[test]
    fn test_encode_override_value_unknown_label_falls_back_raw() {
        let col = status_column();
        assert_eq!(
            encode_override_value(&col, Value::Text("bogus".to_string())),
            "'bogus'"
        );
    }

    #[test]
    fn test_encode_override_value_translates_label() {
        let col = status_column();
        assert_eq!(
            encode_override_value(&col, Value::Text("published".to_string())),
            "20"
        );
    }
}
