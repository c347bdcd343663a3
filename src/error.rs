// Error taxonomy for the analysis library.
//
// The core functions stay total over well-formed input: classification
// falls back to "Other" and matching to "No Match" rather than erroring.
// Errors are reserved for inputs the pipeline cannot proceed on at all
// (missing columns, empty candidate sets, degenerate mapping tables).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The caller handed the pipeline something it cannot work with:
    /// an empty candidate set, a table missing a required column, or
    /// an empty input table where one is required.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A mapping table or config value is unusable: an empty keyword
    /// table would make classification degenerate (always "Other"),
    /// so it is rejected up front instead.
    #[error("configuration error: {0}")]
    Config(String),

    /// A CSV export could not be parsed at all.
    #[error("failed to parse csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
