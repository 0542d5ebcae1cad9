use tracing::{debug, info, warn};

use schemasmith_core::{CatalogSnapshot, Error, Result, TableDescriptor, resolve_table_names};

use crate::adapter::CatalogReader;
use crate::options::IntrospectOptions;

/// Read one namespace through `reader` and apply the collision policy.
///
/// Table names are sorted by byte order before the policy runs so the result
/// does not depend on the catalog's collation. Column queries are only issued
/// for tables that survive the policy.
pub async fn introspect_catalog<R>(reader: &R, opts: &IntrospectOptions) -> Result<CatalogSnapshot>
where
    R: CatalogReader + Sync + ?Sized,
{
    let namespace = opts.namespace.as_str();
    if !reader.namespace_exists(namespace).await? {
        return Err(Error::SchemaNotFound(namespace.to_string()));
    }

    let mut names = reader.list_tables(namespace).await?;
    names.sort();
    names.dedup();
    let discovered = names.len();
    info!(event = "tables_listed", namespace = %namespace, count = discovered);

    let resolution = resolve_table_names(&names);
    for skipped in &resolution.skipped {
        warn!(
            event = "table_skipped",
            table = %skipped.source_name,
            identifier = %skipped.identifier,
            retained_by = skipped.retained_by.as_deref().unwrap_or("-"),
        );
    }

    let mut tables = Vec::with_capacity(resolution.retained.len());
    for name in resolution.retained {
        let columns = reader.list_columns(namespace, &name).await?;
        debug!(event = "columns_listed", table = %name, count = columns.len());
        tables.push(TableDescriptor {
            source_name: name,
            columns,
        });
    }

    info!(
        event = "introspection_finished",
        engine = reader.engine(),
        discovered = discovered,
        retained = tables.len(),
    );

    Ok(CatalogSnapshot {
        namespace: namespace.to_string(),
        discovered,
        tables,
        skipped: resolution.skipped,
    })
}
