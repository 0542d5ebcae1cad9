//! Core contracts and helpers for schemasmith.
//!
//! This crate defines the catalog data model, the error type, identifier
//! normalization and the connection settings shared by the introspection,
//! codegen and CLI crates.

pub mod connection;
pub mod error;
pub mod model;
pub mod naming;
pub mod redaction;

pub use connection::{
    ConnectionSettings, DEFAULT_NAMESPACE, DEFAULT_SCHEMA_PATH, SslMode, SynthConfig,
};
pub use error::{Error, Result};
pub use model::{CatalogSnapshot, ColumnDescriptor, SkippedTable, TableDescriptor};
pub use naming::{IdentifierRegistry, NameResolution, resolve_table_names, snake_to_camel};
pub use redaction::RedactedConnection;
