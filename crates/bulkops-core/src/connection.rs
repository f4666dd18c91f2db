//! Database connection trait.
//!
//! The builder hands each finished statement to a [`Connection`]; everything
//! about how that statement reaches the server (wire protocol, pooling,
//! transactions) is the driver's concern, not ours.

use crate::error::Result;

/// Trait for executing complete SQL statements.
///
/// Implementations own the underlying channel to the database. Execution is
/// synchronous: a call blocks the caller until the server answers. A
/// returned error is structured ([`crate::error::QueryError`] for server
/// failures) and carries the offending SQL when known.
pub trait Connection {
    /// Execute one complete SQL statement, returning the affected-row count.
    fn execute(&mut self, sql: &str) -> Result<u64>;
}
