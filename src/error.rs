use std::path::PathBuf;

use thiserror::Error;

/// Failure to load the track dataset. Fatal at startup.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV missing required column '{0}'")]
    MissingColumn(String),

    #[error("CSV line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// A column name that is not one of the numeric feature columns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a numeric track field")]
pub struct InvalidFieldError(pub String);

/// Bad command-line configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid colour '{0}', expected a hex code such as #1D8348")]
    BadColor(String),

    #[error("palette must contain at least one colour")]
    EmptyPalette,

    #[error("sample size must be a positive integer, got '{0}'")]
    BadSampleSize(String),
}
