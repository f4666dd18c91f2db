//! Bulk INSERT statement generation for BulkOps Rust.
//!
//! `bulkops-insert` turns a homogeneous collection of unsaved records into
//! a small number of multi-row INSERT statements instead of one statement
//! per record.
//!
//! # Role In The Architecture
//!
//! - **[`Insertor`]**: resolves the column list from the first record's
//!   dirty set (or the full schema), encodes every value inline, and splits
//!   the output into size-bounded chunks.
//! - **[`InsertConfig`]**: override attributes, timestamp auto-touch, column
//!   selection, and the size tuning knobs.
//!
//! Generated statements execute through the `Connection` trait from
//! `bulkops-core`, one chunk at a time, in order.
//!
//! # Example
//!
//! ```ignore
//! let mut insertor = Insertor::new(&heroes, InsertConfig::new().touch_created_at(true));
//! insertor.execute(&mut conn)?;
//! ```

pub mod config;
pub mod insertor;

pub use config::{InsertConfig, STATEMENT_BUFFER_CAPACITY, STATEMENT_SIZE_THRESHOLD};
pub use insertor::Insertor;
