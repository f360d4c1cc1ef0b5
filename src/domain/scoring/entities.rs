//! Scoring result entities
//!
//! Everything here is created fresh for one scoring run from externally
//! supplied facts and discarded once the result is delivered; nothing is
//! mutated after construction.

use serde::{Deserialize, Serialize};

use crate::domain::endpoint::TimeRange;
use crate::domain::scoring::value_objects::{ComponentKind, SecurityLevel, Severity};

/// Score for one security dimension, with the facts that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScore {
    pub component: ComponentKind,
    /// Sub-score in `[0, 100]`.
    pub score: f64,
    /// Fixed weight in `(0, 1]`; the nine weights sum to 1.0.
    pub weight: f64,
    /// Human-readable contributing facts, including degraded reasons when the
    /// scorer had to fail closed.
    pub facts: Vec<String>,
}

impl ComponentScore {
    pub fn level(&self) -> SecurityLevel {
        SecurityLevel::from_score(self.score)
    }

    pub fn below_threshold(&self) -> bool {
        self.score < self.component.acceptable_threshold()
    }
}

/// Per-keyword hit counts from the sensitive data scan.
///
/// `entries` counts matching entries, at most once per entry; the header and
/// body splits count entries where the keyword appeared in that location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordHits {
    pub keyword: String,
    pub entries: u64,
    pub header_hits: u64,
    pub body_hits: u64,
}

/// Result of scanning a traffic sample for sensitive keywords.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensitiveDataFinding {
    pub entries_scanned: u64,
    pub matched_entries: u64,
    /// Matching entries over scanned entries, percent, two decimals. Zero when
    /// nothing was scanned; `entries_scanned` distinguishes "no data" from
    /// "no sensitive data found".
    pub match_percentage: f64,
    pub keywords: Vec<KeywordHits>,
}

impl SensitiveDataFinding {
    pub fn has_matches(&self) -> bool {
        self.matched_entries > 0
    }
}

/// Aggregate traffic statistics for one scoring window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficStats {
    pub total_requests: u64,
    /// Request counts per hour of day, aggregated across all days in range.
    pub hourly_counts: [u64; 24],
    pub error_count: u64,
    /// Percent in `[0, 100]`, two decimals; zero for an empty sample.
    pub error_rate: f64,
    /// Distinct consumer identities seen in the sample; entries without a
    /// consumer are not counted.
    pub distinct_consumers: u64,
    /// Hours whose bucket count exceeded `mean + k * stddev`.
    pub anomalous_hours: Vec<u8>,
    /// Busiest hours of day, most loaded first.
    pub peak_hours: Vec<u8>,
}

impl Default for TrafficStats {
    fn default() -> Self {
        Self {
            total_requests: 0,
            hourly_counts: [0; 24],
            error_count: 0,
            error_rate: 0.0,
            distinct_consumers: 0,
            anomalous_hours: Vec::new(),
            peak_hours: Vec::new(),
        }
    }
}

/// One prioritized remediation item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub severity: Severity,
    pub component: ComponentKind,
    pub title: String,
    pub description: String,
}

/// The sole value the engine returns to its consumers.
///
/// Recomputed per request; consumers may cache or export it but it is never
/// persisted as authoritative state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeScoreResult {
    pub endpoint_id: String,
    pub endpoint_name: String,
    pub time_range: TimeRange,
    /// Weighted composite in `[0, 100]`, two decimals.
    pub overall_score: f64,
    pub level: SecurityLevel,
    /// All nine components in declaration order.
    pub components: Vec<ComponentScore>,
    pub traffic: TrafficStats,
    pub sensitive_data: SensitiveDataFinding,
    /// Severity-descending; ties broken by component declaration order.
    pub recommendations: Vec<Recommendation>,
}

impl CompositeScoreResult {
    pub fn component(&self, kind: ComponentKind) -> Option<&ComponentScore> {
        self.components.iter().find(|c| c.component == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_of(kind: ComponentKind, score: f64) -> ComponentScore {
        ComponentScore {
            component: kind,
            score,
            weight: 0.1,
            facts: Vec::new(),
        }
    }

    #[test]
    fn component_level_uses_the_shared_mapping() {
        assert_eq!(
            score_of(ComponentKind::ErrorRate, 95.0).level(),
            SecurityLevel::Excellent
        );
        assert_eq!(
            score_of(ComponentKind::ErrorRate, 62.0).level(),
            SecurityLevel::Fair
        );
        assert_eq!(
            score_of(ComponentKind::ErrorRate, 10.0).level(),
            SecurityLevel::Critical
        );
    }

    #[test]
    fn threshold_comparison_is_strict() {
        assert!(!score_of(ComponentKind::SslTlsStatus, 80.0).below_threshold());
        assert!(score_of(ComponentKind::SslTlsStatus, 79.9).below_threshold());
    }
}
