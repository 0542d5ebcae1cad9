use std::collections::{BTreeSet, HashMap};

use tracing::{info, warn};

use schemasmith_core::{
    CatalogSnapshot, Error, IdentifierRegistry, Result, TableDescriptor, snake_to_camel,
};

use crate::classify::classify_column;
use crate::expr::ColumnExpr;
use crate::render::{export_name_problem, render_schema};
use crate::types::{TypeConstructor, is_mapped_type, map_type};

/// One table ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDefinition {
    pub export_name: String,
    pub source_name: String,
    pub columns: Vec<ColumnExpr>,
}

/// Rendered schema source plus what went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSource {
    pub text: String,
    /// Distinct column constructors, in import order.
    pub constructors: Vec<TypeConstructor>,
    pub tables: usize,
    pub columns: usize,
}

fn build_table(table: &TableDescriptor) -> TableDefinition {
    let mut properties: HashMap<String, &str> = HashMap::new();
    let mut columns = Vec::with_capacity(table.columns.len());

    for column in &table.columns {
        if !is_mapped_type(&column.data_type) {
            warn!(
                event = "unmapped_type",
                table = %table.source_name,
                column = %column.source_name,
                data_type = %column.data_type,
            );
        }
        let property = snake_to_camel(&column.source_name);
        if let Some(owner) = properties.get(&property) {
            warn!(
                event = "duplicate_property",
                table = %table.source_name,
                column = %column.source_name,
                property = %property,
                retained_by = %owner,
            );
            continue;
        }
        properties.insert(property.clone(), &column.source_name);
        columns.push(classify_column(
            property,
            column.source_name.clone(),
            map_type(&column.data_type, column.max_length),
            column.nullable,
            column.default_expression.as_deref(),
        ));
    }

    let export_name = snake_to_camel(&table.source_name);
    if let Some(problem) = export_name_problem(&export_name) {
        warn!(
            event = "invalid_export_name",
            table = %table.source_name,
            export_name = %export_name,
            problem = problem,
        );
    }

    TableDefinition {
        export_name,
        source_name: table.source_name.clone(),
        columns,
    }
}

/// Turn a snapshot into table definitions in snapshot order.
///
/// Fails if two tables would export the same identifier; the collision policy
/// applied during introspection is expected to make that impossible.
pub fn build_definitions(snapshot: &CatalogSnapshot) -> Result<Vec<TableDefinition>> {
    let mut registry = IdentifierRegistry::new();
    let mut definitions = Vec::with_capacity(snapshot.tables.len());

    for table in &snapshot.tables {
        let definition = build_table(table);
        if !registry.register(&definition.export_name, &definition.source_name) {
            let owner = registry.owner(&definition.export_name).unwrap_or_default();
            return Err(Error::DuplicateIdentifier(format!(
                "{} (from {} and {})",
                definition.export_name, owner, definition.source_name
            )));
        }
        definitions.push(definition);
    }

    Ok(definitions)
}

/// Render the whole schema source for a snapshot, in memory.
pub fn emit_schema(snapshot: &CatalogSnapshot) -> Result<SchemaSource> {
    let definitions = build_definitions(snapshot)?;
    let text = render_schema(&definitions);

    let constructors: BTreeSet<TypeConstructor> = definitions
        .iter()
        .flat_map(|table| table.columns.iter().map(|column| column.call.constructor))
        .collect();
    let columns = definitions.iter().map(|table| table.columns.len()).sum();

    info!(
        event = "schema_rendered",
        tables = definitions.len(),
        columns = columns,
        bytes = text.len(),
    );

    Ok(SchemaSource {
        text,
        constructors: constructors.into_iter().collect(),
        tables: definitions.len(),
        columns,
    })
}
