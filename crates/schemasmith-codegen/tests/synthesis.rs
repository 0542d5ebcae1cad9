use schemasmith_codegen::{DefaultClass, TypeConstructor, build_definitions, emit_schema};
use schemasmith_core::ColumnDescriptor;
use schemasmith_introspect::{IntrospectOptions, StaticCatalog, introspect_catalog};

fn orders_catalog() -> StaticCatalog {
    StaticCatalog::new().with_table(
        "public",
        "orders",
        vec![
            ColumnDescriptor::new("id", "integer")
                .not_null()
                .with_default("nextval('orders_id_seq'::regclass)"),
            ColumnDescriptor::new("created_at", "timestamp without time zone")
                .not_null()
                .with_default("now()"),
        ],
    )
}

fn mixed_catalog() -> StaticCatalog {
    StaticCatalog::new()
        .with_table(
            "public",
            "user_profile",
            vec![
                ColumnDescriptor::new("id", "integer")
                    .not_null()
                    .with_default("nextval('user_profile_id_seq'::regclass)"),
                ColumnDescriptor::new("display_name", "character varying").with_max_length(120),
                ColumnDescriptor::new("is_active", "boolean")
                    .not_null()
                    .with_default("true"),
                ColumnDescriptor::new("login_count", "integer")
                    .not_null()
                    .with_default("0"),
                ColumnDescriptor::new("settings", "jsonb").with_default("'{}'::jsonb"),
                ColumnDescriptor::new("search", "tsvector"),
            ],
        )
        .with_table(
            "public",
            "userProfile",
            vec![ColumnDescriptor::new("id", "uuid").not_null()],
        )
        .with_table(
            "public",
            "anonymous_sessions",
            vec![
                ColumnDescriptor::new("id", "uuid").not_null(),
                ColumnDescriptor::new("expires_at", "timestamp with time zone").not_null(),
            ],
        )
}

#[tokio::test]
async fn orders_scenario() {
    let snapshot = introspect_catalog(&orders_catalog(), &IntrospectOptions::default())
        .await
        .expect("introspect");
    let definitions = build_definitions(&snapshot).expect("definitions");
    let orders = &definitions[0];
    assert_eq!(orders.columns[0].property, "id");
    assert_eq!(orders.columns[0].default, Some(DefaultClass::SequencePrimaryKey));
    assert!(orders.columns[0].not_null);
    assert_eq!(orders.columns[1].property, "createdAt");
    assert_eq!(orders.columns[1].default, Some(DefaultClass::Now));
    assert!(orders.columns[1].not_null);

    let source = emit_schema(&snapshot).expect("emit");
    let expected = "\
import { pgTable, integer, timestamp } from \"drizzle-orm/pg-core\";

export const orders = pgTable(\"orders\", {
  id: integer(\"id\").primaryKey().notNull(),
  createdAt: timestamp(\"created_at\").defaultNow().notNull(),
});
";
    assert_eq!(source.text, expected);
    assert_eq!(source.tables, 1);
    assert_eq!(source.columns, 2);
}

#[tokio::test]
async fn mixed_catalog_output() {
    let snapshot = introspect_catalog(&mixed_catalog(), &IntrospectOptions::default())
        .await
        .expect("introspect");
    let source = emit_schema(&snapshot).expect("emit");

    let expected = "\
import { pgTable, integer, varchar, text, boolean, timestamp, jsonb, uuid } from \"drizzle-orm/pg-core\";

export const anonymousSessions = pgTable(\"anonymous_sessions\", {
  id: uuid(\"id\").notNull(),
  expiresAt: timestamp(\"expires_at\").notNull(),
});

export const userProfile = pgTable(\"user_profile\", {
  id: integer(\"id\").primaryKey().notNull(),
  displayName: varchar(\"display_name\", { length: 120 }),
  isActive: boolean(\"is_active\").default(true).notNull(),
  loginCount: integer(\"login_count\").default(0).notNull(),
  settings: jsonb(\"settings\"),
  search: text(\"search\"),
});
";
    assert_eq!(source.text, expected);
    assert_eq!(
        source.constructors,
        vec![
            TypeConstructor::Integer,
            TypeConstructor::Varchar,
            TypeConstructor::Text,
            TypeConstructor::Boolean,
            TypeConstructor::Timestamp,
            TypeConstructor::Jsonb,
            TypeConstructor::Uuid,
        ]
    );
    assert_eq!(snapshot.skipped.len(), 1);
}

#[tokio::test]
async fn synthesis_is_byte_stable() {
    let catalog = mixed_catalog();
    let first = emit_schema(
        &introspect_catalog(&catalog, &IntrospectOptions::default())
            .await
            .expect("introspect"),
    )
    .expect("emit");
    let second = emit_schema(
        &introspect_catalog(&catalog, &IntrospectOptions::default())
            .await
            .expect("introspect"),
    )
    .expect("emit");
    assert_eq!(first.text, second.text);
}

#[tokio::test]
async fn every_export_name_is_unique() {
    let snapshot = introspect_catalog(&mixed_catalog(), &IntrospectOptions::default())
        .await
        .expect("introspect");
    let source = emit_schema(&snapshot).expect("emit");
    let headers: Vec<&str> = source
        .text
        .lines()
        .filter(|line| line.starts_with("export const "))
        .collect();
    let mut names: Vec<&str> = headers
        .iter()
        .filter_map(|line| line.split_whitespace().nth(2))
        .collect();
    let total = names.len();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), total);
}
