use tracing::debug;

use crate::expr::{ColumnExpr, DefaultClass, Literal, TypeCall};
use crate::types::TypeConstructor;

const SEQUENCE_MARKER: &str = "nextval";
const CAST_MARKER: &str = "::";

/// Build the column expression, attaching modifiers in a fixed order:
/// sequence primary key, else write-time now, else a boolean literal, else an
/// integer literal; then not-null.
pub fn classify_column(
    property: String,
    column: String,
    call: TypeCall,
    nullable: bool,
    default_expression: Option<&str>,
) -> ColumnExpr {
    let default = default_expression.and_then(|expr| classify_default(&column, call.constructor, expr));
    ColumnExpr {
        property,
        column,
        call,
        default,
        not_null: !nullable,
    }
}

fn classify_default(column: &str, constructor: TypeConstructor, expr: &str) -> Option<DefaultClass> {
    if expr.contains(SEQUENCE_MARKER) {
        return Some(DefaultClass::SequencePrimaryKey);
    }

    let lowered = expr.to_ascii_lowercase();
    if lowered.contains("now()") || lowered.contains("current_timestamp") {
        return Some(DefaultClass::Now);
    }

    let literal = leading_literal(expr);
    if let Some(value) = boolean_literal(&literal, constructor) {
        return Some(DefaultClass::Literal(Literal::Bool(value)));
    }

    if constructor.is_integer_family() {
        return match literal.text.parse::<i64>() {
            Ok(value) => Some(DefaultClass::Literal(Literal::Int(value))),
            Err(err) => {
                debug!(
                    event = "malformed_default_expression",
                    column = %column,
                    expression = %expr,
                    error = %err,
                );
                None
            }
        };
    }

    None
}

/// Leading literal of a default expression, before any cast.
struct LeadingLiteral {
    text: String,
    quoted: bool,
}

fn leading_literal(expr: &str) -> LeadingLiteral {
    let head = expr.split(CAST_MARKER).next().unwrap_or_default();
    let mut text = head.trim();
    while let Some(inner) = text.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) {
        text = inner.trim();
    }
    let quoted = text.len() >= 2 && text.starts_with('\'') && text.ends_with('\'');
    LeadingLiteral {
        text: text.trim_matches('\'').trim().to_string(),
        quoted,
    }
}

/// Unquoted `true`/`false`, or a quoted one on a boolean column.
fn boolean_literal(literal: &LeadingLiteral, constructor: TypeConstructor) -> Option<bool> {
    if literal.quoted && constructor != TypeConstructor::Boolean {
        return None;
    }
    if literal.text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if literal.text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::map_type;

    fn classify(data_type: &str, nullable: bool, default: Option<&str>) -> ColumnExpr {
        classify_column(
            "col".to_string(),
            "col".to_string(),
            map_type(data_type, None),
            nullable,
            default,
        )
    }

    #[test]
    fn sequence_default_marks_primary_key_only() {
        let expr = classify("integer", false, Some("nextval('orders_id_seq'::regclass)"));
        assert_eq!(expr.default, Some(DefaultClass::SequencePrimaryKey));
        assert!(expr.is_primary_key());
        assert!(expr.not_null);
    }

    #[test]
    fn sequence_wins_even_when_now_appears() {
        let expr = classify("timestamp without time zone", true, Some("nextval('now()')"));
        assert_eq!(expr.default, Some(DefaultClass::SequencePrimaryKey));
    }

    #[test]
    fn write_time_defaults() {
        for default in ["now()", "CURRENT_TIMESTAMP", "timezone('utc'::text, now())"] {
            let expr = classify("timestamp without time zone", true, Some(default));
            assert_eq!(expr.default, Some(DefaultClass::Now), "{default}");
            assert!(!expr.not_null);
        }
    }

    #[test]
    fn boolean_literals() {
        assert_eq!(
            classify("boolean", false, Some("true")).default,
            Some(DefaultClass::Literal(Literal::Bool(true)))
        );
        assert_eq!(
            classify("boolean", false, Some("false")).default,
            Some(DefaultClass::Literal(Literal::Bool(false)))
        );
        assert_eq!(classify("text", true, Some("'true'::text")).default, None);
    }

    #[test]
    fn integer_literals_strip_casts_and_quotes() {
        assert_eq!(
            classify("integer", false, Some("0")).default,
            Some(DefaultClass::Literal(Literal::Int(0)))
        );
        assert_eq!(
            classify("bigint", true, Some("'-1'::integer")).default,
            Some(DefaultClass::Literal(Literal::Int(-1)))
        );
        assert_eq!(
            classify("smallint", true, Some("(5)")).default,
            Some(DefaultClass::Literal(Literal::Int(5)))
        );
    }

    #[test]
    fn malformed_integer_default_is_omitted() {
        let expr = classify("integer", false, Some("floor(random() * 10)::integer"));
        assert_eq!(expr.default, None);
        assert!(expr.not_null);
    }

    #[test]
    fn non_integer_literals_are_ignored() {
        assert_eq!(classify("numeric", true, Some("0.5")).default, None);
        assert_eq!(classify("jsonb", true, Some("'[]'::jsonb")).default, None);
        assert_eq!(classify("character varying", true, Some("'email'::character varying")).default, None);
    }
}
