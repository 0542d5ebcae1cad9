use sqlx::PgPool;

use schemasmith_core::Result;

use super::utils::query_error;

pub async fn namespace_exists(pool: &PgPool, namespace: &str) -> Result<bool> {
    sqlx::query_scalar::<_, bool>(
        "select exists(select 1 from pg_catalog.pg_namespace where nspname = $1)",
    )
    .bind(namespace)
    .fetch_one(pool)
    .await
    .map_err(query_error)
}

pub async fn list_tables(pool: &PgPool, namespace: &str) -> Result<Vec<String>> {
    sqlx::query_scalar::<_, String>(
        r#"
        select tablename::text
        from pg_catalog.pg_tables
        where schemaname = $1
        order by tablename
        "#,
    )
    .bind(namespace)
    .fetch_all(pool)
    .await
    .map_err(query_error)
}

#[derive(Debug, sqlx::FromRow)]
pub struct RawColumn {
    pub name: String,
    pub data_type: String,
    pub character_max_length: Option<i32>,
    pub is_nullable: bool,
    pub column_default: Option<String>,
}

pub async fn list_columns(pool: &PgPool, namespace: &str, table: &str) -> Result<Vec<RawColumn>> {
    sqlx::query_as::<_, RawColumn>(
        r#"
        select
          column_name::text as name,
          data_type::text as data_type,
          character_maximum_length::int4 as character_max_length,
          (is_nullable = 'YES') as is_nullable,
          column_default::text as column_default
        from information_schema.columns
        where table_schema = $1
          and table_name = $2
        order by ordinal_position
        "#,
    )
    .bind(namespace)
    .bind(table)
    .fetch_all(pool)
    .await
    .map_err(query_error)
}
