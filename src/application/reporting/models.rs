//! Report data models
//!
//! Every report reproduces fields of [`CompositeScoreResult`] verbatim; no
//! score, level, or finding is ever recomputed at report time. The concrete
//! document formats (PDF, Excel) render these structures elsewhere.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::endpoint::TimeRange;
use crate::domain::scoring::{
    ComponentKind, ComponentScore, Recommendation, SecurityLevel, SensitiveDataFinding, Severity,
    TrafficStats,
};

/// Per-endpoint report, sectioned the way exporters consume it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredReport {
    pub summary: ReportSummary,
    pub components: Vec<ComponentScore>,
    pub recommendations: Vec<Recommendation>,
    pub traffic: TrafficStats,
    pub sensitive_data: SensitiveDataFinding,
}

/// Summary section of a per-endpoint report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub endpoint_id: String,
    pub endpoint_name: String,
    pub time_range: TimeRange,
    pub overall_score: f64,
    pub level: SecurityLevel,
    pub recommendation_count: usize,
    pub critical_recommendations: usize,
}

/// Endpoint counts per qualitative level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelBreakdown {
    pub excellent: usize,
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
    pub critical: usize,
}

impl LevelBreakdown {
    pub fn count(&mut self, level: SecurityLevel) {
        match level {
            SecurityLevel::Excellent => self.excellent += 1,
            SecurityLevel::Good => self.good += 1,
            SecurityLevel::Fair => self.fair += 1,
            SecurityLevel::Poor => self.poor += 1,
            SecurityLevel::Critical => self.critical += 1,
        }
    }
}

/// Recommendation counts per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityBreakdown {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityBreakdown {
    pub fn count(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
        }
    }
}

/// One outstanding issue attributed to its endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointIssue {
    pub endpoint_id: String,
    pub endpoint_name: String,
    pub recommendation: Recommendation,
}

/// Fleet-wide rollup across many scored endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    pub generated_at: DateTime<Utc>,
    pub total_endpoints: usize,
    pub average_score: f64,
    pub endpoints_by_level: LevelBreakdown,
    pub total_recommendations: usize,
    pub recommendations_by_severity: SeverityBreakdown,
    /// Outstanding recommendation counts keyed by component.
    pub recommendations_by_component: BTreeMap<ComponentKind, usize>,
    /// Most urgent outstanding issues, severity-ordered, capped.
    pub top_issues: Vec<EndpointIssue>,
}

/// One pass/fail compliance criterion evaluated across the fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceCheck {
    pub name: String,
    pub passed: usize,
    pub failed: usize,
    pub failing_endpoints: Vec<String>,
}

/// Compliance rollup across many scored endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub generated_at: DateTime<Utc>,
    pub total_endpoints: usize,
    pub compliance_percentage: f64,
    pub checks: Vec<ComplianceCheck>,
}

/// Persisted snapshot behind a share link.
///
/// Stores the report as produced; a shared link always shows the scores from
/// the moment it was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareSnapshot {
    pub token: Uuid,
    pub created_at: DateTime<Utc>,
    pub report: StructuredReport,
}
