use tracing::info;

use schemasmith_core::{ConnectionSettings, Result, TableDescriptor};

use super::PostgresCatalog;
use super::utils::query_error;
use crate::adapter::CatalogReader;
use crate::script::{TableTarget, altered_tables};

/// Outcome of running a statement script.
#[derive(Debug, Clone)]
pub struct ApplyReport {
    pub executed: usize,
    /// Column metadata for every `ALTER TABLE` target, read before the transaction.
    pub before: Vec<TableDescriptor>,
    /// The same targets, read back after commit.
    pub after: Vec<TableDescriptor>,
}

/// Run `statements` in order inside one transaction and commit. The columns of
/// every table the statements alter are read before and after.
///
/// Any failing statement rolls the whole transaction back. The connection is
/// closed on every exit path.
pub async fn apply_script(
    settings: &ConnectionSettings,
    namespace: &str,
    statements: &[String],
) -> Result<ApplyReport> {
    let catalog = PostgresCatalog::connect(settings).await?;
    let result = apply_statements(&catalog, namespace, statements).await;
    catalog.close().await;
    result
}

async fn describe_targets(
    catalog: &PostgresCatalog,
    namespace: &str,
    targets: &[TableTarget],
) -> Result<Vec<TableDescriptor>> {
    let mut tables = Vec::with_capacity(targets.len());
    for target in targets {
        let target_namespace = target.namespace.as_deref().unwrap_or(namespace);
        let columns = catalog.list_columns(target_namespace, &target.table).await?;
        tables.push(TableDescriptor {
            source_name: target.table.clone(),
            columns,
        });
    }
    Ok(tables)
}

/// [`apply_script`] over an already open catalog connection.
pub async fn apply_statements(
    catalog: &PostgresCatalog,
    namespace: &str,
    statements: &[String],
) -> Result<ApplyReport> {
    let targets = altered_tables(statements);
    let before = describe_targets(catalog, namespace, &targets).await?;

    let mut tx = catalog.pool().begin().await.map_err(query_error)?;
    for (idx, statement) in statements.iter().enumerate() {
        info!(event = "statement_started", index = idx + 1, total = statements.len());
        sqlx::query(statement)
            .execute(&mut *tx)
            .await
            .map_err(query_error)?;
    }
    tx.commit().await.map_err(query_error)?;
    info!(event = "statements_committed", count = statements.len());

    let after = describe_targets(catalog, namespace, &targets).await?;

    Ok(ApplyReport {
        executed: statements.len(),
        before,
        after,
    })
}
