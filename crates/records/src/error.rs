use agglo_core::Id;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing record files.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The file could not be opened or created.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The underlying CSV reader or writer failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A field is not a number.
    #[error("line {line}: cannot parse {column} value {value:?}")]
    Parse {
        line: u64,
        column: String,
        value: String,
    },

    /// A row is shorter or longer than the schema.
    #[error("line {line}: expected {expected} columns, found {actual}")]
    Width {
        line: u64,
        expected: usize,
        actual: usize,
    },

    /// The same id appears on more than one row.
    #[error("line {line}: duplicate record id {id}")]
    DuplicateId { line: u64, id: Id },
}

impl RecordError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
    pub fn parse(line: u64, column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Parse {
            line,
            column: column.into(),
            value: value.into(),
        }
    }
}
