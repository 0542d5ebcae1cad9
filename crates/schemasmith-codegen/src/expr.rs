use crate::types::TypeConstructor;

/// `<constructor>("<column>"[, { length: N }])`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCall {
    pub constructor: TypeConstructor,
    pub length: Option<i32>,
}

/// A static default value attached with `.default(...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    Bool(bool),
    Int(i64),
}

/// The single key/default modifier a column may carry.
///
/// Holding this in one `Option` makes the three classes mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultClass {
    /// Sequence-backed default; rendered as `.primaryKey()`.
    SequencePrimaryKey,
    /// Write-time timestamp; rendered as `.defaultNow()`.
    Now,
    Literal(Literal),
}

/// One column definition: a constructor call plus chained modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnExpr {
    /// Property key in the generated object (camelCase).
    pub property: String,
    /// Column name as stored in the catalog.
    pub column: String,
    pub call: TypeCall,
    pub default: Option<DefaultClass>,
    pub not_null: bool,
}

impl ColumnExpr {
    pub fn is_primary_key(&self) -> bool {
        matches!(self.default, Some(DefaultClass::SequencePrimaryKey))
    }
}
