//! In-memory store adapters
//!
//! Suitable for tests and single-process demos. Production deployments put
//! the gateway's config database and log index behind the same ports.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::endpoint::{EndpointConfig, TimeRange};
use crate::domain::stores::{EndpointConfigStore, StoreError, TrafficLogStore};
use crate::domain::traffic::{LogEntry, TrafficSample};

/// Endpoint configuration snapshots held in memory.
#[derive(Default)]
pub struct InMemoryConfigStore {
    endpoints: RwLock<HashMap<String, EndpointConfig>>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, config: EndpointConfig) {
        self.endpoints
            .write()
            .await
            .insert(config.id.clone(), config);
    }
}

#[async_trait]
impl EndpointConfigStore for InMemoryConfigStore {
    async fn get(&self, endpoint_id: &str) -> Result<Option<EndpointConfig>, StoreError> {
        Ok(self.endpoints.read().await.get(endpoint_id).cloned())
    }

    async fn list(&self) -> Result<Vec<EndpointConfig>, StoreError> {
        let mut endpoints: Vec<EndpointConfig> =
            self.endpoints.read().await.values().cloned().collect();
        endpoints.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(endpoints)
    }
}

/// Traffic logs held in memory, filtered per request to the asked window.
#[derive(Default)]
pub struct InMemoryTrafficLogStore {
    entries: RwLock<HashMap<String, Vec<LogEntry>>>,
}

impl InMemoryTrafficLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record(&self, endpoint_id: &str, entry: LogEntry) {
        self.entries
            .write()
            .await
            .entry(endpoint_id.to_string())
            .or_default()
            .push(entry);
    }

    pub async fn record_all(&self, endpoint_id: &str, entries: Vec<LogEntry>) {
        self.entries
            .write()
            .await
            .entry(endpoint_id.to_string())
            .or_default()
            .extend(entries);
    }
}

#[async_trait]
impl TrafficLogStore for InMemoryTrafficLogStore {
    async fn sample(
        &self,
        endpoint_id: &str,
        range: &TimeRange,
    ) -> Result<TrafficSample, StoreError> {
        let entries = self.entries.read().await;
        let sample = entries
            .get(endpoint_id)
            .map(|logged| {
                TrafficSample::new(
                    logged
                        .iter()
                        .filter(|entry| range.contains(entry.timestamp))
                        .cloned()
                        .collect(),
                )
            })
            .unwrap_or_default();
        Ok(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn sample_is_scoped_to_the_requested_window() {
        let store = InMemoryTrafficLogStore::new();
        let inside = Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap();
        let outside = Utc.with_ymd_and_hms(2025, 6, 9, 10, 0, 0).unwrap();
        store.record("ep-1", LogEntry::new(inside, 200)).await;
        store.record("ep-1", LogEntry::new(outside, 200)).await;

        let range = TimeRange::new(
            Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 6, 7, 23, 59, 59).unwrap(),
        )
        .unwrap();
        let sample = store.sample("ep-1", &range).await.unwrap();
        assert_eq!(sample.len(), 1);

        let sample = store.sample("unknown", &range).await.unwrap();
        assert!(sample.is_empty());
    }
}
