//! Unified error types for the sales backend.

use thiserror::Error;

/// Unified error type for the sales backend.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Sales dataset violates its invariants.
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Prometheus recorder could not be installed.
    #[error("metrics error: {0}")]
    Metrics(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while building a [`SalesDataset`](crate::sales::SalesDataset).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// The month catalog has no entries.
    #[error("dataset has no months")]
    Empty,

    /// Months and sales values are not parallel.
    #[error("length mismatch: {months} months but {sales} sales values")]
    LengthMismatch {
        /// Number of month labels.
        months: usize,
        /// Number of sales values.
        sales: usize,
    },

    /// A month label appears more than once.
    #[error("duplicate month label: {0}")]
    DuplicateMonth(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServerError>;
