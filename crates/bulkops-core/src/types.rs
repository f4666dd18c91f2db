//! SQL type definitions and storage casts.

use crate::value::Value;

/// SQL data types supported by BulkOps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlType {
    // Integer types
    TinyInt,
    SmallInt,
    Integer,
    BigInt,

    // Floating point
    Real,
    Double,

    // Fixed precision
    Decimal { precision: u8, scale: u8 },

    // Boolean
    Boolean,

    // String types
    Char(u32),
    VarChar(u32),
    Text,

    // Binary
    Blob,

    // Date/time types
    Date,
    Time,
    DateTime,
    Timestamp,

    // JSON
    Json,

    // Custom type name
    Custom(&'static str),
}

impl SqlType {
    /// Cast a value to the representation stored for this column type.
    ///
    /// This is the per-column storage cast applied before quoting. NULL
    /// always passes through unchanged; values already in storage form are
    /// returned as-is.
    pub fn cast_for_storage(&self, value: Value) -> Value {
        if value.is_null() {
            return Value::Null;
        }

        match self {
            // Booleans land in TINYINT(1) columns as 0/1.
            SqlType::Boolean | SqlType::TinyInt => match value {
                Value::Bool(b) => Value::TinyInt(i8::from(b)),
                other => other,
            },
            SqlType::SmallInt | SqlType::Integer | SqlType::BigInt => match value {
                Value::Bool(b) => Value::BigInt(i64::from(b)),
                other => other,
            },
            SqlType::Char(_) | SqlType::VarChar(_) | SqlType::Text => match value {
                Value::Text(s) => Value::Text(s),
                Value::Decimal(s) => Value::Text(s),
                other => other,
            },
            SqlType::DateTime | SqlType::Timestamp => match value {
                Value::BigInt(t) | Value::Timestamp(t) => Value::Timestamp(t),
                other => other,
            },
            _ => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_null_passthrough() {
        assert_eq!(SqlType::Integer.cast_for_storage(Value::Null), Value::Null);
        assert_eq!(SqlType::Text.cast_for_storage(Value::Null), Value::Null);
    }

    #[test]
    fn test_cast_bool_to_integer() {
        assert_eq!(
            SqlType::Boolean.cast_for_storage(Value::Bool(true)),
            Value::TinyInt(1)
        );
        assert_eq!(
            SqlType::BigInt.cast_for_storage(Value::Bool(false)),
            Value::BigInt(0)
        );
    }

    #[test]
    fn test_cast_timestamp_from_bigint() {
        assert_eq!(
            SqlType::Timestamp.cast_for_storage(Value::BigInt(1_700_000_000)),
            Value::Timestamp(1_700_000_000)
        );
    }

    #[test]
    fn test_cast_integer_passthrough() {
        assert_eq!(
            SqlType::Integer.cast_for_storage(Value::Int(42)),
            Value::Int(42)
        );
    }
}
