use thiserror::Error;

/// Structural parse failures. All variants are fatal for the file being
/// read: no partial-zone recovery, no retries.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("read {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{origin}:{line}: expected {expected} columns, found {found}")]
    ColumnCount {
        origin: String,
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("{origin}:{line}: malformed number `{token}`")]
    Number {
        origin: String,
        line: usize,
        token: String,
    },
    #[error("{origin}: no data rows")]
    Empty { origin: String },
}

pub type Result<T> = std::result::Result<T, ParseError>;
