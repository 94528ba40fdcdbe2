use thiserror::Error;

/// Canonical result for every relq crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("table not found: {0}")]
    NotFound(String),

    #[error("table already exists: {0}")]
    AlreadyExists(String),

    #[error("column list unknown: {0}")]
    MissingSchema(String),

    #[error("missing column: {0}")]
    MissingColumn(String),

    #[error("aggregate over zero rows: {0}")]
    EmptyAggregate(String),

    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("arithmetic overflow: {0}")]
    Overflow(String),

    // Textual conditions and YAML recipes map their failures here.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("hashing error: {0}")]
    Hash(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Hash(e.to_string())
    }
}
