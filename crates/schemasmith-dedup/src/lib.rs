//! Removal of repeated `export const <name> = pgTable(...)` declarations.
//!
//! The scanner is line oriented: it recognizes declaration headers, tracks
//! bracket depth inside a block, and closes the block on a line ending with
//! `);` once the depth is back to zero. It assumes definitions are not nested.

pub mod dedup;
pub mod header;
pub mod lexer;
pub mod scanner;

pub use dedup::{DedupOptions, DedupOutcome, deduplicate};
pub use header::HeaderPattern;
pub use lexer::DepthTracker;
pub use scanner::{DefinitionBlock, Segment, definition_blocks, scan};
