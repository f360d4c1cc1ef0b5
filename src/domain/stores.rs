//! Async ports to the external config and log stores
//!
//! The engine performs no I/O itself; timeouts, retries, and backpressure
//! against the backing databases live behind these traits. Implementations
//! must be safe to call from concurrent scoring runs.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::endpoint::{EndpointConfig, TimeRange};
use crate::domain::traffic::TrafficSample;

/// Failure reported by a backing store.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store query failed: {0}")]
    Query(String),
}

/// Read access to endpoint configuration snapshots.
#[async_trait]
pub trait EndpointConfigStore: Send + Sync {
    /// Fetch the configuration snapshot for one endpoint, if it exists.
    async fn get(&self, endpoint_id: &str) -> Result<Option<EndpointConfig>, StoreError>;

    /// List all managed endpoints.
    async fn list(&self) -> Result<Vec<EndpointConfig>, StoreError>;
}

/// Read access to observed traffic logs.
#[async_trait]
pub trait TrafficLogStore: Send + Sync {
    /// Assemble the complete sample for one endpoint over `range`.
    ///
    /// Implementations paginate against the backing index as needed; the
    /// engine consumes the sample as a completed sequence.
    async fn sample(
        &self,
        endpoint_id: &str,
        range: &TimeRange,
    ) -> Result<TrafficSample, StoreError>;
}
