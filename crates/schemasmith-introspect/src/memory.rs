use std::collections::BTreeMap;

use async_trait::async_trait;

use schemasmith_core::{ColumnDescriptor, Error, Result, TableDescriptor};

use crate::adapter::CatalogReader;

/// Catalog held entirely in memory.
///
/// Used to run the synthesis pipeline against fixed metadata, e.g. a snapshot
/// captured earlier or a test fixture.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    namespaces: BTreeMap<String, Vec<TableDescriptor>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an (initially empty) namespace.
    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespaces.entry(namespace.to_string()).or_default();
        self
    }

    /// Add a table to `namespace`, creating the namespace if needed.
    pub fn with_table(
        mut self,
        namespace: &str,
        name: &str,
        columns: Vec<ColumnDescriptor>,
    ) -> Self {
        self.namespaces
            .entry(namespace.to_string())
            .or_default()
            .push(TableDescriptor {
                source_name: name.to_string(),
                columns,
            });
        self
    }

    fn tables(&self, namespace: &str) -> Result<&[TableDescriptor]> {
        self.namespaces
            .get(namespace)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::SchemaNotFound(namespace.to_string()))
    }
}

#[async_trait]
impl CatalogReader for StaticCatalog {
    fn engine(&self) -> &'static str {
        "static"
    }

    async fn namespace_exists(&self, namespace: &str) -> Result<bool> {
        Ok(self.namespaces.contains_key(namespace))
    }

    async fn list_tables(&self, namespace: &str) -> Result<Vec<String>> {
        Ok(self
            .tables(namespace)?
            .iter()
            .map(|table| table.source_name.clone())
            .collect())
    }

    async fn list_columns(&self, namespace: &str, table: &str) -> Result<Vec<ColumnDescriptor>> {
        self.tables(namespace)?
            .iter()
            .find(|candidate| candidate.source_name == table)
            .map(|found| found.columns.clone())
            .ok_or_else(|| Error::Introspection(format!("table not found: {namespace}.{table}")))
    }
}
