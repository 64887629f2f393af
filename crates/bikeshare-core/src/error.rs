use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the bikeshare explorer.
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// A city data file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV file was malformed or lacks one of the expected columns.
    #[error("Failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A `Start Time` cell did not match any recognised layout.
    #[error("Invalid timestamp on line {line}: {value}")]
    TimestampParse { line: u64, value: String },

    /// A `Birth Year` cell was present but not numeric.
    #[error("Invalid birth year on line {line}: {value}")]
    InvalidBirthYear { line: u64, value: String },

    /// A statistic was requested over a table (or column) with no values.
    #[error("Cannot compute {0} over an empty table")]
    EmptyTable(&'static str),

    /// Standard input was closed while a prompt was waiting for an answer.
    #[error("Input closed before a valid answer was entered")]
    InputClosed,

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the bikeshare crates.
pub type Result<T> = std::result::Result<T, BikeshareError>;
