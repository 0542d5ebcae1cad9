use std::collections::HashSet;

use tracing::warn;

use schemasmith_core::Result;

use crate::header::{DEFAULT_CONSTRUCTOR, HeaderPattern};
use crate::scanner::{Segment, scan};

/// Options for a deduplication pass.
#[derive(Debug, Clone)]
pub struct DedupOptions {
    /// Table constructor recognized in declaration headers.
    pub constructor: String,
}

impl Default for DedupOptions {
    fn default() -> Self {
        Self {
            constructor: DEFAULT_CONSTRUCTOR.to_string(),
        }
    }
}

/// Result of a deduplication pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupOutcome {
    pub text: String,
    /// Names of retained definitions, in source order.
    pub retained: Vec<String>,
    /// Names of dropped repeats, one entry per dropped block.
    pub removed: Vec<String>,
    /// Name of a trailing block that never closed; its lines are kept as-is.
    pub unterminated: Option<String>,
}

impl DedupOutcome {
    pub fn duplicates_removed(&self) -> usize {
        self.removed.len()
    }
}

/// Keep the first block for every definition name and drop later repeats.
///
/// Lines outside blocks and retained blocks keep their original bytes and
/// relative order.
pub fn deduplicate(source: &str, options: &DedupOptions) -> Result<DedupOutcome> {
    let pattern = HeaderPattern::new(&options.constructor)?;

    let mut seen_names: HashSet<String> = HashSet::new();
    let mut output: Vec<&str> = Vec::new();
    let mut retained = Vec::new();
    let mut removed = Vec::new();
    let mut unterminated = None;

    for segment in scan(source, &pattern) {
        match segment {
            Segment::Line(line) => output.push(line),
            Segment::Block(block) => {
                if seen_names.insert(block.name.clone()) {
                    output.extend(block.raw_lines);
                    retained.push(block.name);
                } else {
                    warn!(
                        event = "duplicate_removed",
                        name = %block.name,
                        lines = block.raw_lines.len(),
                    );
                    removed.push(block.name);
                }
            }
            Segment::Unterminated(block) => {
                warn!(
                    event = "unterminated_block",
                    name = %block.name,
                    lines = block.raw_lines.len(),
                );
                output.extend(block.raw_lines);
                unterminated = Some(block.name);
            }
        }
    }

    Ok(DedupOutcome {
        text: output.join("\n"),
        retained,
        removed,
        unterminated,
    })
}
