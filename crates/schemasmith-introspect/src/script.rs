//! Helpers for the statement runner: splitting a SQL script and finding the
//! tables its `ALTER TABLE` statements touch.

use std::sync::OnceLock;

use regex::Regex;

/// A table named by an `ALTER TABLE` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableTarget {
    pub namespace: Option<String>,
    pub table: String,
}

/// Split a script into statements on `;`, ignoring semicolons inside quoted
/// literals, quoted identifiers and `--` comments. Blank and comment-only
/// statements are dropped.
pub fn split_statements(script: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut chars = script.chars().peekable();
    let mut quote: Option<char> = None;
    let mut in_comment = false;

    while let Some(ch) = chars.next() {
        if in_comment {
            current.push(ch);
            if ch == '\n' {
                in_comment = false;
            }
            continue;
        }

        if let Some(open) = quote {
            current.push(ch);
            if ch == open {
                // doubled quote is an escaped quote
                if chars.peek() == Some(&open) {
                    current.push(open);
                    chars.next();
                } else {
                    quote = None;
                }
            }
            continue;
        }

        match ch {
            '\'' | '"' => {
                quote = Some(ch);
                current.push(ch);
            }
            '-' if chars.peek() == Some(&'-') => {
                in_comment = true;
                current.push(ch);
            }
            ';' => {
                push_statement(&mut statements, &current);
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    push_statement(&mut statements, &current);

    statements
}

fn push_statement(statements: &mut Vec<String>, raw: &str) {
    let has_code = raw
        .lines()
        .map(str::trim)
        .any(|line| !line.is_empty() && !line.starts_with("--"));
    if has_code {
        statements.push(raw.trim().to_string());
    }
}

fn alter_table_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(
                r#"(?is)^(?:\s*--[^\n]*\n)*\s*alter\s+table\s+(?:if\s+exists\s+)?(?:only\s+)?(?:("[^"]+"|[\w$]+)\.)?("[^"]+"|[\w$]+)"#,
            )
            .ok()
        })
        .as_ref()
}

fn unquote(ident: &str) -> String {
    ident.trim_matches('"').to_string()
}

/// Tables targeted by `ALTER TABLE` statements, in first-mention order.
pub fn altered_tables<S: AsRef<str>>(statements: &[S]) -> Vec<TableTarget> {
    let mut targets: Vec<TableTarget> = Vec::new();
    let Some(pattern) = alter_table_pattern() else {
        return targets;
    };
    for statement in statements {
        let Some(captures) = pattern.captures(statement.as_ref()) else {
            continue;
        };
        let target = TableTarget {
            namespace: captures.get(1).map(|m| unquote(m.as_str())),
            table: unquote(&captures[2]),
        };
        if !targets.contains(&target) {
            targets.push(target);
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_semicolons_outside_literals() {
        let script = "
            -- jsonb defaults; applied in order
            ALTER TABLE anonymous_sessions ALTER COLUMN media_files SET DEFAULT '[]'::jsonb;
            ALTER TABLE notes ALTER COLUMN body SET DEFAULT 'a;b';

            ;
        ";
        let statements = split_statements(script);
        assert_eq!(statements.len(), 2);
        assert!(statements[0].ends_with("SET DEFAULT '[]'::jsonb"));
        assert!(statements[1].ends_with("SET DEFAULT 'a;b'"));
    }

    #[test]
    fn keeps_escaped_quotes() {
        let statements = split_statements("select 'it''s; fine'; select 2");
        assert_eq!(statements, vec!["select 'it''s; fine'", "select 2"]);
    }

    #[test]
    fn extracts_alter_targets_once() {
        let statements = vec![
            "ALTER TABLE anonymous_sessions ALTER COLUMN a SET NOT NULL",
            "alter table if exists app.\"Orders\" add column total integer",
            "ALTER TABLE anonymous_sessions ALTER COLUMN b SET NOT NULL",
            "UPDATE users SET name = 'x'",
        ];
        let targets = altered_tables(&statements);
        assert_eq!(
            targets,
            vec![
                TableTarget {
                    namespace: None,
                    table: "anonymous_sessions".to_string(),
                },
                TableTarget {
                    namespace: Some("app".to_string()),
                    table: "Orders".to_string(),
                },
            ]
        );
    }
}
