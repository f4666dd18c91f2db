//! Core types and traits for BulkOps Rust.
//!
//! This crate provides the foundational abstractions bulk operations build
//! on:
//!
//! - `Model` trait for table-mapped record types (schema metadata, dirty
//!   tracking, clock access)
//! - `ColumnInfo` descriptors including enumerated-label tables
//! - `Connection` trait for the statement execution channel
//! - `Value` and the MySQL literal quoting used when inlining values

pub mod connection;
pub mod error;
pub mod field;
pub mod model;
pub mod quote;
pub mod types;
pub mod value;

pub use connection::Connection;
pub use error::{Error, QueryError, QueryErrorKind, Result};
pub use field::ColumnInfo;
pub use model::Model;
pub use quote::{quote_identifier, quote_value};
pub use types::SqlType;
pub use value::Value;
