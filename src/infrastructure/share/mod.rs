//! Share snapshot persistence
//!
//! A snapshot is written once and never mutated; links resolve to the report
//! exactly as it looked at creation time.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::reporting::ShareSnapshot;
use crate::domain::stores::StoreError;

/// Persistence port for shared report snapshots.
#[async_trait]
pub trait ShareSnapshotStore: Send + Sync {
    async fn put(&self, snapshot: ShareSnapshot) -> Result<(), StoreError>;

    async fn get(&self, token: Uuid) -> Result<Option<ShareSnapshot>, StoreError>;
}

/// Process-local snapshot store for tests and single-node deployments.
#[derive(Default)]
pub struct InMemoryShareSnapshotStore {
    snapshots: RwLock<HashMap<Uuid, ShareSnapshot>>,
}

impl InMemoryShareSnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShareSnapshotStore for InMemoryShareSnapshotStore {
    async fn put(&self, snapshot: ShareSnapshot) -> Result<(), StoreError> {
        self.snapshots
            .write()
            .await
            .insert(snapshot.token, snapshot);
        Ok(())
    }

    async fn get(&self, token: Uuid) -> Result<Option<ShareSnapshot>, StoreError> {
        Ok(self.snapshots.read().await.get(&token).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::reporting::{ReportSummary, StructuredReport};
    use crate::domain::endpoint::TimeRange;
    use crate::domain::scoring::{SecurityLevel, SensitiveDataFinding, TrafficStats};
    use chrono::{TimeZone, Utc};

    fn snapshot() -> ShareSnapshot {
        let range = TimeRange::new(
            Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 6, 7, 0, 0, 0).unwrap(),
        )
        .unwrap();
        ShareSnapshot {
            token: Uuid::new_v4(),
            created_at: Utc::now(),
            report: StructuredReport {
                summary: ReportSummary {
                    endpoint_id: "ep-1".to_string(),
                    endpoint_name: "orders".to_string(),
                    time_range: range,
                    overall_score: 81.5,
                    level: SecurityLevel::Good,
                    recommendation_count: 0,
                    critical_recommendations: 0,
                },
                components: Vec::new(),
                recommendations: Vec::new(),
                traffic: TrafficStats::default(),
                sensitive_data: SensitiveDataFinding::default(),
            },
        }
    }

    #[tokio::test]
    async fn stored_snapshot_resolves_by_token() {
        let store = InMemoryShareSnapshotStore::new();
        let snapshot = snapshot();
        let token = snapshot.token;
        store.put(snapshot.clone()).await.unwrap();
        assert_eq!(store.get(token).await.unwrap(), Some(snapshot));
    }

    #[tokio::test]
    async fn unknown_token_resolves_to_none() {
        let store = InMemoryShareSnapshotStore::new();
        assert_eq!(store.get(Uuid::new_v4()).await.unwrap(), None);
    }
}
