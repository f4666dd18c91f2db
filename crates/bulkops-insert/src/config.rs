//! Insertion configuration.

use bulkops_core::Value;

/// Per-statement buffer size at which a chunk is sealed and a new statement
/// started. Should stay a power of 2 below [`STATEMENT_BUFFER_CAPACITY`] and
/// safely under the server's statement-length ceiling (MySQL
/// `max_allowed_packet`).
pub const STATEMENT_SIZE_THRESHOLD: usize = 1 << 23;

/// Upfront capacity reserved for each chunk buffer. Sized above the
/// threshold because the splitting check runs after a row is appended, so a
/// chunk can grow slightly past the threshold before it is sealed.
pub const STATEMENT_BUFFER_CAPACITY: usize = 1 << 24;

/// Configuration for one bulk insertion.
///
/// Override attributes are kept in insertion order; that order is semantic,
/// it decides where the override columns appear in the generated column
/// list.
#[derive(Debug, Clone)]
pub struct InsertConfig {
    /// Column name -> value forced identically onto every record.
    pub override_attributes: Vec<(&'static str, Value)>,
    /// Stamp `created_at` and `updated_at` with the shared batch timestamp.
    ///
    /// Either touch flag injects both columns; the flags exist separately
    /// only to mirror the per-callsite intent.
    pub touch_created_at: bool,
    /// See [`Self::touch_created_at`]; either flag injects both columns.
    pub touch_updated_at: bool,
    /// Use every storage column instead of the first record's dirty set.
    pub set_all_columns: bool,
    /// Buffer size at which the current chunk is sealed.
    pub size_threshold: usize,
    /// Capacity reserved upfront for each chunk buffer.
    pub buffer_capacity: usize,
}

impl Default for InsertConfig {
    fn default() -> Self {
        Self {
            override_attributes: Vec::new(),
            touch_created_at: false,
            touch_updated_at: false,
            set_all_columns: false,
            size_threshold: STATEMENT_SIZE_THRESHOLD,
            buffer_capacity: STATEMENT_BUFFER_CAPACITY,
        }
    }
}

impl InsertConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force one value onto every record for the named column.
    ///
    /// Later calls for the same column replace the earlier value without
    /// changing its position in the override order.
    pub fn override_attribute(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        let value = value.into();
        if let Some(entry) = self
            .override_attributes
            .iter_mut()
            .find(|(name, _)| *name == column)
        {
            entry.1 = value;
        } else {
            self.override_attributes.push((column, value));
        }
        self
    }

    /// Set the `created_at` auto-touch flag.
    pub fn touch_created_at(mut self, value: bool) -> Self {
        self.touch_created_at = value;
        self
    }

    /// Set the `updated_at` auto-touch flag.
    pub fn touch_updated_at(mut self, value: bool) -> Self {
        self.touch_updated_at = value;
        self
    }

    /// Insert every storage column rather than only dirty ones.
    pub fn set_all_columns(mut self, value: bool) -> Self {
        self.set_all_columns = value;
        self
    }

    /// Override the chunk-sealing threshold.
    pub fn size_threshold(mut self, bytes: usize) -> Self {
        self.size_threshold = bytes;
        self
    }

    /// Override the per-chunk buffer preallocation.
    pub fn buffer_capacity(mut self, bytes: usize) -> Self {
        self.buffer_capacity = bytes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InsertConfig::new();
        assert!(config.override_attributes.is_empty());
        assert!(!config.touch_created_at);
        assert!(!config.touch_updated_at);
        assert!(!config.set_all_columns);
        assert_eq!(config.size_threshold, STATEMENT_SIZE_THRESHOLD);
        assert_eq!(config.buffer_capacity, STATEMENT_BUFFER_CAPACITY);
    }

    #[test]
    fn test_override_attribute_preserves_order() {
        let config = InsertConfig::new()
            .override_attribute("b", 1i64)
            .override_attribute("a", 2i64);
        let names: Vec<_> = config
            .override_attributes
            .iter()
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_override_attribute_replaces_in_place() {
        let config = InsertConfig::new()
            .override_attribute("a", 1i64)
            .override_attribute("b", 2i64)
            .override_attribute("a", 3i64);
        assert_eq!(config.override_attributes.len(), 2);
        assert_eq!(config.override_attributes[0], ("a", Value::BigInt(3)));
    }

    #[test]
    fn test_threshold_below_capacity() {
        assert!(STATEMENT_SIZE_THRESHOLD < STATEMENT_BUFFER_CAPACITY);
    }
}
