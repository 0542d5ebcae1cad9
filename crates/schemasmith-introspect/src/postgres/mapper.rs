use schemasmith_core::ColumnDescriptor;

use super::queries::RawColumn;

pub fn map_columns(raw: Vec<RawColumn>) -> Vec<ColumnDescriptor> {
    raw.into_iter().map(map_column).collect()
}

fn map_column(col: RawColumn) -> ColumnDescriptor {
    ColumnDescriptor {
        source_name: col.name,
        data_type: col.data_type,
        max_length: col.character_max_length,
        nullable: col.is_nullable,
        default_expression: col.column_default.filter(|expr| !expr.trim().is_empty()),
    }
}
