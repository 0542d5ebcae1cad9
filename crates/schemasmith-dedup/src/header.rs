use regex::Regex;

use schemasmith_core::{Error, Result};

/// Default table constructor recognized in declaration headers.
pub const DEFAULT_CONSTRUCTOR: &str = "pgTable";

/// Matches `export const <name> = <constructor>(` at the start of a line.
#[derive(Debug, Clone)]
pub struct HeaderPattern {
    regex: Regex,
}

impl HeaderPattern {
    pub fn new(constructor: &str) -> Result<Self> {
        let valid = !constructor.is_empty()
            && constructor
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '$');
        if !valid {
            return Err(Error::InvalidConfig(format!(
                "invalid table constructor: {constructor:?}"
            )));
        }

        let pattern = format!(
            r"^export\s+const\s+([A-Za-z_$][\w$]*)\s*=\s*{}\s*\(",
            regex::escape(constructor)
        );
        let regex = Regex::new(&pattern).map_err(|err| Error::InvalidConfig(err.to_string()))?;
        Ok(Self { regex })
    }

    /// Definition name declared on `line`, if it is a header.
    pub fn capture<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.regex
            .captures(line)
            .and_then(|captures| captures.get(1))
            .map(|name| name.as_str())
    }
}
