use async_trait::async_trait;

use schemasmith_core::{ColumnDescriptor, Result};

/// Trait implemented by anything that can answer catalog metadata queries.
#[async_trait]
pub trait CatalogReader {
    /// Returns the engine identifier (e.g. `postgres`).
    fn engine(&self) -> &'static str;

    /// Whether the namespace exists at all.
    async fn namespace_exists(&self, namespace: &str) -> Result<bool>;

    /// Table names in the namespace, in the catalog's own order.
    async fn list_tables(&self, namespace: &str) -> Result<Vec<String>>;

    /// Columns of one table, in ordinal order.
    async fn list_columns(&self, namespace: &str, table: &str) -> Result<Vec<ColumnDescriptor>>;
}
