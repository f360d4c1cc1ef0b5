//! Traffic log entries and samples

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::endpoint::TimeRange;

/// One access-log record as delivered by the log store.
///
/// Header keys are normalized to lowercase on insertion so keyword matching
/// and lookups are case-insensitive. The body may be absent or truncated by
/// the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    #[serde(default)]
    headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub source_ip: Option<String>,
    #[serde(default)]
    pub consumer: Option<String>,
}

impl LogEntry {
    pub fn new(timestamp: DateTime<Utc>, status: u16) -> Self {
        Self {
            timestamp,
            status,
            headers: BTreeMap::new(),
            body: None,
            source_ip: None,
            consumer: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: impl Into<String>) -> Self {
        self.headers.insert(key.to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_source_ip(mut self, ip: impl Into<String>) -> Self {
        self.source_ip = Some(ip.into());
        self
    }

    pub fn with_consumer(mut self, consumer: impl Into<String>) -> Self {
        self.consumer = Some(consumer.into());
        self
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(&key.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}

/// Ordered sequence of log entries within one scoring window.
///
/// Read-only input to the engine; the log store assembles it (paginating
/// against the backing index as needed) before a run starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficSample {
    entries: Vec<LogEntry>,
}

impl TrafficSample {
    pub fn new(mut entries: Vec<LogEntry>) -> Self {
        entries.sort_by_key(|entry| entry.timestamp);
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Restrict the sample to entries inside `range`, preserving order.
    pub fn within(&self, range: &TimeRange) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| range.contains(entry.timestamp))
                .cloned()
                .collect(),
        }
    }
}
