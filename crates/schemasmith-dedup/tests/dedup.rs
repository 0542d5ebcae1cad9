use std::collections::HashSet;

use schemasmith_dedup::{DedupOptions, HeaderPattern, deduplicate, definition_blocks};

const SESSIONS: &str = r#"export const sessions = pgTable("sessions", {
  id: uuid("id").notNull(),
  token: varchar("token", { length: 256 }).notNull(),
});"#;

fn dedup(source: &str) -> schemasmith_dedup::DedupOutcome {
    deduplicate(source, &DedupOptions::default()).expect("deduplicate")
}

fn block_names(source: &str) -> Vec<String> {
    let pattern = HeaderPattern::new("pgTable").expect("pattern");
    definition_blocks(source, &pattern)
        .into_iter()
        .map(|block| block.name)
        .collect()
}

#[test]
fn identical_sessions_blocks_collapse_to_one() {
    let source = format!("import {{ pgTable }} from \"drizzle-orm/pg-core\";\n\n{SESSIONS}\n\n{SESSIONS}\n");
    let outcome = dedup(&source);

    assert_eq!(outcome.duplicates_removed(), 1);
    assert_eq!(outcome.retained, vec!["sessions"]);
    assert_eq!(outcome.text.matches("export const sessions").count(), 1);
    assert_eq!(
        outcome.text,
        format!("import {{ pgTable }} from \"drizzle-orm/pg-core\";\n\n{SESSIONS}\n\n")
    );
}

#[test]
fn first_occurrence_is_kept_verbatim() {
    let first = "export const users = pgTable(\"users\", {\n  id: serial(\"id\").primaryKey(),\n});";
    let second = "export const users = pgTable(\"users\", {\n  id: uuid(\"id\"),\n  name: text(\"name\"),\n});";
    let source = format!("// header\n{first}\n{SESSIONS}\n{second}\n// footer");
    let outcome = dedup(&source);

    assert_eq!(outcome.text, format!("// header\n{first}\n{SESSIONS}\n// footer"));
    assert_eq!(outcome.retained, vec!["users", "sessions"]);
    assert_eq!(outcome.removed, vec!["users"]);
}

#[test]
fn deduplication_is_idempotent() {
    let inputs = [
        format!("{SESSIONS}\n{SESSIONS}\n{SESSIONS}"),
        format!("a\r\n{SESSIONS}\r\nb\r\n{SESSIONS}\r\n"),
        "export const x = pgTable(\"x\", {});\nexport const x = pgTable(\"x\", {});\n".to_string(),
        format!("{SESSIONS}\nexport const open = pgTable(\"open\", {{\n  id: serial(\"id\"),"),
        String::new(),
    ];

    for input in inputs {
        let once = dedup(&input);
        let twice = dedup(&once.text);
        assert_eq!(once.text, twice.text);
        assert_eq!(twice.duplicates_removed(), 0);
    }
}

#[test]
fn retained_blocks_have_unique_names() {
    let source = format!(
        "{SESSIONS}\nexport const users = pgTable(\"users\", {{}});\n{SESSIONS}\nexport const users = pgTable(\"users\", {{\n}});\n"
    );
    let outcome = dedup(&source);
    let names = block_names(&outcome.text);
    let unique: HashSet<&String> = names.iter().collect();
    assert_eq!(names.len(), unique.len());
    assert_eq!(names, vec!["sessions", "users"]);
}

#[test]
fn crlf_and_trailing_newline_survive() {
    let source = "// top\r\nexport const a = pgTable(\"a\", {\r\n  id: serial(\"id\"),\r\n});\r\n";
    let outcome = dedup(source);
    assert_eq!(outcome.text, source);
    assert!(outcome.removed.is_empty());
}

#[test]
fn unterminated_trailing_block_is_preserved() {
    let source = format!("{SESSIONS}\nexport const broken = pgTable(\"broken\", {{\n  id: serial(\"id\"),");
    let outcome = dedup(&source);
    assert_eq!(outcome.text, source);
    assert_eq!(outcome.unterminated.as_deref(), Some("broken"));
    assert_eq!(outcome.retained, vec!["sessions"]);
}

#[test]
fn nested_terminators_do_not_split_blocks() {
    let tricky = "export const events = pgTable(\"events\", {\n  payload: jsonb(\"payload\").default(sql`'{}'::jsonb);`),\n  note: text(\"note\").default(\");\"),\n});";
    let source = format!("{tricky}\n{tricky}\n");
    let outcome = dedup(&source);
    assert_eq!(outcome.text, format!("{tricky}\n"));
    assert_eq!(outcome.duplicates_removed(), 1);
}

#[test]
fn other_declarations_pass_through() {
    let source = format!(
        "export const roleEnum = pgEnum(\"role\", [\"user\", \"admin\"]);\n{SESSIONS}\nexport type Session = typeof sessions.$inferSelect;\n{SESSIONS}"
    );
    let outcome = dedup(&source);
    assert_eq!(
        outcome.text,
        format!(
            "export const roleEnum = pgEnum(\"role\", [\"user\", \"admin\"]);\n{SESSIONS}\nexport type Session = typeof sessions.$inferSelect;"
        )
    );
}

#[test]
fn rejects_invalid_constructor() {
    let options = DedupOptions {
        constructor: "pg Table".to_string(),
    };
    assert!(deduplicate("", &options).is_err());
}
