//! Application layer errors

use thiserror::Error;

use crate::domain::endpoint::TimeRangeError;
use crate::domain::stores::StoreError;
use crate::infrastructure::keywords::KeywordSourceError;

/// Error surfaced to callers of the scoring service.
///
/// Only run-fatal conditions appear here. Per-component failures never do:
/// each scorer fails closed to its minimum score so that one missing signal
/// cannot abort the composite computation.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// Required endpoint configuration is absent. Fatal for the run; no
    /// partial result is returned.
    #[error("endpoint configuration not found for '{endpoint_id}'")]
    MissingData { endpoint_id: String },

    /// The requested window failed validation before any data was fetched.
    #[error("invalid time range: {0}")]
    InvalidTimeRange(#[from] TimeRangeError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    KeywordSource(#[from] KeywordSourceError),
}
