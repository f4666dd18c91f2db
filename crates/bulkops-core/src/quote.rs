//! SQL literal quoting for the MySQL text protocol.
//!
//! Generated statements carry every value inline, so quoting is the safety
//! boundary: strings are escaped, binary data is hex-encoded, NULL renders
//! as the bare keyword.

use crate::value::Value;

/// Escape a string for use in MySQL text protocol.
///
/// This escapes special characters to prevent SQL injection.
fn escape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('\'');
    for ch in s.chars() {
        match ch {
            '\'' => result.push_str("''"),
            '\\' => result.push_str("\\\\"),
            '\0' => result.push_str("\\0"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\x1a' => result.push_str("\\Z"), // Ctrl+Z
            _ => result.push(ch),
        }
    }
    result.push('\'');
    result
}

/// Escape bytes as a MySQL hex literal.
fn escape_bytes(data: &[u8]) -> String {
    let mut result = String::with_capacity(data.len() * 2 + 3);
    result.push_str("X'");
    for byte in data {
        result.push_str(&format!("{byte:02X}"));
    }
    result.push('\'');
    result
}

/// Quote an identifier (table or column name) with backticks.
///
/// Embedded backticks are doubled per MySQL identifier quoting rules.
pub fn quote_identifier(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 2);
    result.push('`');
    for ch in name.chars() {
        if ch == '`' {
            result.push_str("``");
        } else {
            result.push(ch);
        }
    }
    result.push('`');
    result
}

/// Render a `Value` as a ready-to-embed SQL literal.
///
/// NULL renders as the bare `NULL` keyword, numerics as bare digits, and
/// text as a quoted, escaped literal.
pub fn quote_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Value::TinyInt(i) => i.to_string(),
        Value::SmallInt(i) => i.to_string(),
        Value::Int(i) => i.to_string(),
        Value::BigInt(i) => i.to_string(),
        Value::Float(f) => {
            if f.is_nan() {
                "NULL".to_string()
            } else if f.is_infinite() {
                if f.is_sign_positive() {
                    "1e308".to_string()
                } else {
                    "-1e308".to_string()
                }
            } else {
                f.to_string()
            }
        }
        Value::Double(f) => {
            if f.is_nan() {
                "NULL".to_string()
            } else if f.is_infinite() {
                if f.is_sign_positive() {
                    "1e308".to_string()
                } else {
                    "-1e308".to_string()
                }
            } else {
                f.to_string()
            }
        }
        Value::Decimal(s) => s.clone(),
        Value::Text(s) => escape_string(s),
        Value::Bytes(b) => escape_bytes(b),
        Value::Timestamp(t) => format!("'{}'", t),
        Value::Json(j) => escape_string(&j.to_string()),
    }
}
