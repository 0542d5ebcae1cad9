use serde::{Deserialize, Serialize};

/// One column as reported by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub source_name: String,
    /// Catalog type name as spelled by `information_schema` (e.g. `character varying`).
    pub data_type: String,
    pub max_length: Option<i32>,
    pub nullable: bool,
    /// Raw default expression text, e.g. `nextval('users_id_seq'::regclass)`.
    pub default_expression: Option<String>,
}

impl ColumnDescriptor {
    pub fn new(source_name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            data_type: data_type.into(),
            max_length: None,
            nullable: true,
            default_expression: None,
        }
    }

    pub fn with_max_length(mut self, length: i32) -> Self {
        self.max_length = Some(length);
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn with_default(mut self, expression: impl Into<String>) -> Self {
        self.default_expression = Some(expression.into());
        self
    }
}

/// A catalog table and its columns in ordinal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
    pub source_name: String,
    pub columns: Vec<ColumnDescriptor>,
}

/// A table left out by the naming collision policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedTable {
    pub source_name: String,
    /// Generated identifier that was already claimed.
    pub identifier: String,
    /// Source table that owns the identifier in the emitted output.
    pub retained_by: Option<String>,
}

/// Result of introspecting one namespace, after collision filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub namespace: String,
    /// Number of tables the catalog listed before filtering.
    pub discovered: usize,
    pub tables: Vec<TableDescriptor>,
    pub skipped: Vec<SkippedTable>,
}

impl CatalogSnapshot {
    pub fn column_count(&self) -> usize {
        self.tables.iter().map(|table| table.columns.len()).sum()
    }
}
