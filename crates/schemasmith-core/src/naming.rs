//! Identifier normalization and the table-name collision policy.

use std::collections::{BTreeMap, HashMap};

use crate::model::SkippedTable;

/// Convert a snake_case catalog identifier into a camelCase export identifier.
///
/// The first segment is kept as-is. Every following segment is title-cased: a
/// letter is upper-cased when the character before it is not a letter and
/// lower-cased otherwise, so `oauth_2fa_codes` becomes `oauth2FaCodes` and
/// `user_p2p_links` becomes `userP2PLinks`. Names without underscores come back
/// unchanged, so `userProfile` and `user_profile` both yield `userProfile`.
pub fn snake_to_camel(name: &str) -> String {
    let mut segments = name.split('_');
    let mut out = String::with_capacity(name.len());
    if let Some(first) = segments.next() {
        out.push_str(first);
    }
    for segment in segments {
        push_title_case(&mut out, segment);
    }
    out
}

fn push_title_case(out: &mut String, segment: &str) {
    let mut after_letter = false;
    for ch in segment.chars() {
        if ch.is_alphabetic() {
            if after_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            after_letter = true;
        } else {
            out.push(ch);
            after_letter = false;
        }
    }
}

/// Whether a source name is written in snake_case style.
pub fn is_snake_style(name: &str) -> bool {
    name.contains('_')
}

/// Generated identifiers assigned during one synthesis run.
///
/// Registration order is preserved; the first owner of an identifier keeps it.
#[derive(Debug, Default, Clone)]
pub struct IdentifierRegistry {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `identifier` for `owner`. Returns `false` if it was already taken.
    pub fn register(&mut self, identifier: &str, owner: &str) -> bool {
        if self.index.contains_key(identifier) {
            return false;
        }
        self.index.insert(identifier.to_string(), self.entries.len());
        self.entries
            .push((identifier.to_string(), owner.to_string()));
        true
    }

    pub fn owner(&self, identifier: &str) -> Option<&str> {
        self.index
            .get(identifier)
            .map(|idx| self.entries[*idx].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of applying the collision policy to a table-name list.
#[derive(Debug, Clone, Default)]
pub struct NameResolution {
    /// Retained source names, in input order.
    pub retained: Vec<String>,
    pub skipped: Vec<SkippedTable>,
    pub registry: IdentifierRegistry,
}

/// Apply the collision policy over the full table-name list.
///
/// - a snake_case name is preferred over a camelCase name generating the same identifier;
/// - a camelCase name is kept only when no snake_case name generates its identifier;
/// - among equal candidates the first in input order wins.
pub fn resolve_table_names<S: AsRef<str>>(names: &[S]) -> NameResolution {
    let mut snake_owners: BTreeMap<String, &str> = BTreeMap::new();
    for name in names.iter().map(|name| name.as_ref()).filter(|name| is_snake_style(name)) {
        snake_owners.entry(snake_to_camel(name)).or_insert(name);
    }

    let mut resolution = NameResolution::default();
    for name in names.iter().map(|name| name.as_ref()) {
        let identifier = snake_to_camel(name);

        let retained_by = if let Some(owner) = resolution.registry.owner(&identifier) {
            Some(owner.to_string())
        } else if !is_snake_style(name) {
            snake_owners.get(&identifier).map(|owner| owner.to_string())
        } else {
            None
        };

        match retained_by {
            Some(owner) => resolution.skipped.push(SkippedTable {
                source_name: name.to_string(),
                identifier,
                retained_by: Some(owner),
            }),
            None => {
                resolution.registry.register(&identifier, name);
                resolution.retained.push(name.to_string());
            }
        }
    }

    resolution
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_snake_case_segments() {
        assert_eq!(snake_to_camel("created_at"), "createdAt");
        assert_eq!(snake_to_camel("user_profile_id"), "userProfileId");
        assert_eq!(snake_to_camel("users"), "users");
        assert_eq!(snake_to_camel("userProfile"), "userProfile");
        assert_eq!(snake_to_camel("api_URL"), "apiUrl");
        assert_eq!(snake_to_camel("a__b"), "aB");
    }

    #[test]
    fn letters_after_digits_start_a_word() {
        assert_eq!(snake_to_camel("oauth_2fa_codes"), "oauth2FaCodes");
        assert_eq!(snake_to_camel("user_p2p_links"), "userP2PLinks");
        assert_eq!(snake_to_camel("log_v2"), "logV2");
        assert_eq!(snake_to_camel("2fa_codes"), "2faCodes");
    }

    #[test]
    fn registry_keeps_first_owner() {
        let mut registry = IdentifierRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.register("userProfile", "user_profile"));
        assert!(!registry.register("userProfile", "userProfile"));
        assert_eq!(registry.owner("userProfile"), Some("user_profile"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn snake_case_wins_over_camel_case_in_either_order() {
        for names in [
            vec!["user_profile", "userProfile"],
            vec!["userProfile", "user_profile"],
        ] {
            let resolution = resolve_table_names(&names);
            assert_eq!(resolution.retained, vec!["user_profile".to_string()]);
            assert_eq!(resolution.skipped.len(), 1);
            assert_eq!(resolution.skipped[0].source_name, "userProfile");
            assert_eq!(
                resolution.skipped[0].retained_by.as_deref(),
                Some("user_profile")
            );
            assert_eq!(resolution.registry.len(), 1);
        }
    }

    #[test]
    fn camel_case_kept_without_snake_equivalent() {
        let resolution = resolve_table_names(&["orders", "userProfile", "audit_log"]);
        assert_eq!(
            resolution.retained,
            vec!["orders", "userProfile", "audit_log"]
        );
        assert!(resolution.skipped.is_empty());
    }

    #[test]
    fn first_snake_case_name_wins_ties() {
        let resolution = resolve_table_names(&["user_Profile", "user_profile"]);
        assert_eq!(resolution.retained, vec!["user_Profile".to_string()]);
        assert_eq!(resolution.skipped[0].source_name, "user_profile");
    }
}
