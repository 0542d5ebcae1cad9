use crate::expr::TypeCall;

/// Column constructors exported by `drizzle-orm/pg-core`.
///
/// Declaration order is the order used in the generated import line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeConstructor {
    Serial,
    Integer,
    Bigint,
    Varchar,
    Text,
    Boolean,
    Timestamp,
    Json,
    Jsonb,
    Uuid,
    Real,
    DoublePrecision,
    Numeric,
    Date,
    Time,
    Bigserial,
    Smallint,
    Char,
}

impl TypeConstructor {
    pub const ALL: [TypeConstructor; 18] = [
        TypeConstructor::Serial,
        TypeConstructor::Integer,
        TypeConstructor::Bigint,
        TypeConstructor::Varchar,
        TypeConstructor::Text,
        TypeConstructor::Boolean,
        TypeConstructor::Timestamp,
        TypeConstructor::Json,
        TypeConstructor::Jsonb,
        TypeConstructor::Uuid,
        TypeConstructor::Real,
        TypeConstructor::DoublePrecision,
        TypeConstructor::Numeric,
        TypeConstructor::Date,
        TypeConstructor::Time,
        TypeConstructor::Bigserial,
        TypeConstructor::Smallint,
        TypeConstructor::Char,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TypeConstructor::Serial => "serial",
            TypeConstructor::Integer => "integer",
            TypeConstructor::Bigint => "bigint",
            TypeConstructor::Varchar => "varchar",
            TypeConstructor::Text => "text",
            TypeConstructor::Boolean => "boolean",
            TypeConstructor::Timestamp => "timestamp",
            TypeConstructor::Json => "json",
            TypeConstructor::Jsonb => "jsonb",
            TypeConstructor::Uuid => "uuid",
            TypeConstructor::Real => "real",
            TypeConstructor::DoublePrecision => "doublePrecision",
            TypeConstructor::Numeric => "numeric",
            TypeConstructor::Date => "date",
            TypeConstructor::Time => "time",
            TypeConstructor::Bigserial => "bigserial",
            TypeConstructor::Smallint => "smallint",
            TypeConstructor::Char => "char",
        }
    }

    /// Integer-family constructors take no length and accept numeric defaults.
    pub fn is_integer_family(self) -> bool {
        matches!(
            self,
            TypeConstructor::Integer
                | TypeConstructor::Bigint
                | TypeConstructor::Smallint
                | TypeConstructor::Serial
                | TypeConstructor::Bigserial
        )
    }

    /// Character constructors carry the declared maximum length.
    pub fn takes_length(self) -> bool {
        matches!(self, TypeConstructor::Varchar | TypeConstructor::Char)
    }
}

const TYPE_MAP: &[(&str, TypeConstructor)] = &[
    ("integer", TypeConstructor::Integer),
    ("bigint", TypeConstructor::Bigint),
    ("smallint", TypeConstructor::Smallint),
    ("serial", TypeConstructor::Serial),
    ("bigserial", TypeConstructor::Bigserial),
    ("character varying", TypeConstructor::Varchar),
    ("varchar", TypeConstructor::Varchar),
    ("character", TypeConstructor::Char),
    ("char", TypeConstructor::Char),
    ("text", TypeConstructor::Text),
    ("boolean", TypeConstructor::Boolean),
    ("timestamp without time zone", TypeConstructor::Timestamp),
    ("timestamp with time zone", TypeConstructor::Timestamp),
    ("date", TypeConstructor::Date),
    ("time", TypeConstructor::Time),
    ("time without time zone", TypeConstructor::Time),
    ("time with time zone", TypeConstructor::Time),
    ("json", TypeConstructor::Json),
    ("jsonb", TypeConstructor::Jsonb),
    ("uuid", TypeConstructor::Uuid),
    ("real", TypeConstructor::Real),
    ("double precision", TypeConstructor::DoublePrecision),
    ("numeric", TypeConstructor::Numeric),
    ("decimal", TypeConstructor::Numeric),
];

fn lookup(catalog_type: &str) -> Option<TypeConstructor> {
    let key = catalog_type.trim();
    TYPE_MAP
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, constructor)| *constructor)
}

/// Whether the catalog type has an entry in the mapping table.
pub fn is_mapped_type(catalog_type: &str) -> bool {
    lookup(catalog_type).is_some()
}

/// Map a catalog type to a constructor call. Unknown types become `text`.
pub fn map_type(catalog_type: &str, max_length: Option<i32>) -> TypeCall {
    let constructor = lookup(catalog_type).unwrap_or(TypeConstructor::Text);
    let length = if constructor.takes_length() {
        max_length
    } else {
        None
    };
    TypeCall {
        constructor,
        length,
    }
}
