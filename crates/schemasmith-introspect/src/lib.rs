//! Catalog introspection for schemasmith.
//!
//! The [`CatalogReader`] trait is the seam between the synthesis pipeline and
//! a live database; [`introspect_catalog`] drives any reader through the
//! table-name collision policy and returns a [`CatalogSnapshot`].

pub mod adapter;
pub mod catalog;
pub mod memory;
pub mod options;
pub mod postgres;
pub mod script;

pub use adapter::CatalogReader;
pub use catalog::introspect_catalog;
pub use memory::StaticCatalog;
pub use options::IntrospectOptions;
pub use postgres::{ApplyReport, PostgresCatalog, apply_script, apply_statements, introspect_postgres};
pub use script::{TableTarget, altered_tables, split_statements};

pub use schemasmith_core::CatalogSnapshot;
