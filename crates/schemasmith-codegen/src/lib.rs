//! Drizzle schema-source synthesis from catalog snapshots.
//!
//! The pipeline is split into pure stages: [`types`] maps catalog types to
//! constructor calls, [`classify`] attaches key/default/not-null modifiers,
//! [`expr`] holds the resulting expression tree and [`render`] is the only
//! place that turns it into text. [`emit`] ties them together.

pub mod classify;
pub mod emit;
pub mod expr;
pub mod render;
pub mod types;

pub use classify::classify_column;
pub use emit::{SchemaSource, TableDefinition, build_definitions, emit_schema};
pub use expr::{ColumnExpr, DefaultClass, Literal, TypeCall};
pub use types::{TypeConstructor, is_mapped_type, map_type};
