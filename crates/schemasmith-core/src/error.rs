use thiserror::Error;

/// Core error type shared across schemasmith crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The catalog could not be reached or refused the credentials.
    #[error("connection failure: {0}")]
    Connection(String),
    /// A catalog query failed after the connection was established.
    #[error("introspection failure: {0}")]
    Introspection(String),
    /// The requested namespace does not exist in the catalog.
    #[error("schema not found: {0}")]
    SchemaNotFound(String),
    /// Two emitted definitions would share a generated identifier.
    #[error("duplicate identifier: {0}")]
    DuplicateIdentifier(String),
    /// Settings are missing or contradictory.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results returned by schemasmith crates.
pub type Result<T> = std::result::Result<T, Error>;
