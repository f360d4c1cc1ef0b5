//! Endpoint domain errors

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Validation error for a requested scoring window.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeRangeError {
    #[error("time range start {start} is after end {end}")]
    Inverted {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("time range spans {days} days, maximum allowed is {max_days}")]
    TooLong { days: i64, max_days: i64 },
}
