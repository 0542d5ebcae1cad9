//! Text rendering for the column expression tree.
//!
//! Nothing else in the crate builds schema-source text; modifier order is
//! fixed here: key/default modifier first, then `.notNull()`.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::emit::TableDefinition;
use crate::expr::{ColumnExpr, DefaultClass, Literal, TypeCall};
use crate::types::TypeConstructor;

pub const TABLE_CONSTRUCTOR: &str = "pgTable";
pub const MODULE_PATH: &str = "drizzle-orm/pg-core";

/// Quote a string as a double-quoted literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '$')
}

const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Why `name` cannot be used as an `export const` binding, if it cannot.
pub fn export_name_problem(name: &str) -> Option<&'static str> {
    if !is_identifier(name) {
        Some("not a valid identifier")
    } else if RESERVED_WORDS.contains(&name) {
        Some("reserved word")
    } else if name == TABLE_CONSTRUCTOR
        || TypeConstructor::ALL
            .iter()
            .any(|constructor| constructor.name() == name)
    {
        Some("shadows an imported constructor")
    } else {
        None
    }
}

/// Object key: bare when it is a valid identifier, quoted otherwise.
pub fn property_key(value: &str) -> String {
    if is_identifier(value) {
        value.to_string()
    } else {
        string_literal(value)
    }
}

/// `import { pgTable, ... } from "drizzle-orm/pg-core";`
pub fn render_import(constructors: &BTreeSet<TypeConstructor>) -> String {
    let mut names = vec![TABLE_CONSTRUCTOR];
    names.extend(constructors.iter().map(|constructor| constructor.name()));
    format!(
        "import {{ {} }} from {};",
        names.join(", "),
        string_literal(MODULE_PATH)
    )
}

pub fn render_call(call: &TypeCall, column: &str) -> String {
    let mut out = format!("{}({}", call.constructor.name(), string_literal(column));
    if let Some(length) = call.length {
        let _ = write!(out, ", {{ length: {length} }}");
    }
    out.push(')');
    out
}

fn render_literal(literal: Literal) -> String {
    match literal {
        Literal::Bool(value) => value.to_string(),
        Literal::Int(value) => value.to_string(),
    }
}

/// `  key: ctor("col").modifiers(),`
pub fn render_column(expr: &ColumnExpr) -> String {
    let mut out = format!(
        "  {}: {}",
        property_key(&expr.property),
        render_call(&expr.call, &expr.column)
    );
    match expr.default {
        Some(DefaultClass::SequencePrimaryKey) => out.push_str(".primaryKey()"),
        Some(DefaultClass::Now) => out.push_str(".defaultNow()"),
        Some(DefaultClass::Literal(literal)) => {
            let _ = write!(out, ".default({})", render_literal(literal));
        }
        None => {}
    }
    if expr.not_null {
        out.push_str(".notNull()");
    }
    out.push(',');
    out
}

/// Lines of one `export const` block, including the closing `});`.
pub fn render_table(table: &TableDefinition) -> Vec<String> {
    let mut lines = Vec::with_capacity(table.columns.len() + 2);
    lines.push(format!(
        "export const {} = {TABLE_CONSTRUCTOR}({}, {{",
        table.export_name,
        string_literal(&table.source_name)
    ));
    lines.extend(table.columns.iter().map(render_column));
    lines.push("});".to_string());
    lines
}

/// Full schema source: import line, blank line, then each block followed by a
/// blank line. Always ends with a single newline.
pub fn render_schema(tables: &[TableDefinition]) -> String {
    let constructors: BTreeSet<TypeConstructor> = tables
        .iter()
        .flat_map(|table| table.columns.iter().map(|column| column.call.constructor))
        .collect();

    let mut lines = vec![render_import(&constructors), String::new()];
    for table in tables {
        lines.extend(render_table(table));
        lines.push(String::new());
    }
    lines.join("\n")
}
