//! Reporting layer: structured reports, fleet rollups, and share snapshots.

pub mod models;
pub mod service;

pub use models::{
    ComplianceCheck, ComplianceReport, EndpointIssue, ExecutiveSummary, LevelBreakdown,
    ReportSummary, SeverityBreakdown, ShareSnapshot, StructuredReport,
};
pub use service::{build_report, compliance_report, create_snapshot, executive_summary};
