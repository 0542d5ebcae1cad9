use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use schemasmith_core::{CatalogSnapshot, ColumnDescriptor, ConnectionSettings, Result};

use crate::adapter::CatalogReader;
use crate::catalog::introspect_catalog;
use crate::options::IntrospectOptions;

mod apply;
mod mapper;
mod queries;
mod utils;

pub use apply::{ApplyReport, apply_script, apply_statements};

/// Catalog reader backed by a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PostgresCatalog {
    pool: PgPool,
}

impl PostgresCatalog {
    /// Wrap a pre-configured pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a single-connection pool from explicit settings.
    pub async fn connect(settings: &ConnectionSettings) -> Result<Self> {
        settings.validate()?;
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(utils::ACQUIRE_TIMEOUT)
            .connect_with(utils::connect_options(settings))
            .await
            .map_err(utils::connection_error)?;
        info!(event = "connected", connection = %settings.redacted());
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Release the underlying connection.
    pub async fn close(self) {
        self.pool.close().await;
    }
}

#[async_trait::async_trait]
impl CatalogReader for PostgresCatalog {
    fn engine(&self) -> &'static str {
        "postgres"
    }

    async fn namespace_exists(&self, namespace: &str) -> Result<bool> {
        queries::namespace_exists(&self.pool, namespace).await
    }

    async fn list_tables(&self, namespace: &str) -> Result<Vec<String>> {
        queries::list_tables(&self.pool, namespace).await
    }

    async fn list_columns(&self, namespace: &str, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let raw = queries::list_columns(&self.pool, namespace, table).await?;
        Ok(mapper::map_columns(raw))
    }
}

/// Connect, introspect one namespace and close the connection.
///
/// The connection is closed on every exit path before the result is returned.
pub async fn introspect_postgres(
    settings: &ConnectionSettings,
    opts: &IntrospectOptions,
) -> Result<CatalogSnapshot> {
    let catalog = PostgresCatalog::connect(settings).await?;
    let result = introspect_catalog(&catalog, opts).await;
    catalog.close().await;
    result
}
