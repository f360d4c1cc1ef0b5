//! Report assembly
//!
//! Pure transformations from scoring results to report structures; exporters
//! and the share-link persistence consume these without touching the engine.

use std::collections::BTreeMap;

use chrono::Utc;
use uuid::Uuid;

use crate::application::reporting::models::{
    ComplianceCheck, ComplianceReport, EndpointIssue, ExecutiveSummary, LevelBreakdown,
    ReportSummary, SeverityBreakdown, ShareSnapshot, StructuredReport,
};
use crate::application::round2;
use crate::domain::scoring::{ComponentKind, CompositeScoreResult, Severity};

/// Number of issues retained in an executive summary.
const TOP_ISSUES: usize = 10;

/// Section a scoring result into the exporter-facing report shape.
pub fn build_report(result: &CompositeScoreResult) -> StructuredReport {
    StructuredReport {
        summary: ReportSummary {
            endpoint_id: result.endpoint_id.clone(),
            endpoint_name: result.endpoint_name.clone(),
            time_range: result.time_range,
            overall_score: result.overall_score,
            level: result.level,
            recommendation_count: result.recommendations.len(),
            critical_recommendations: result
                .recommendations
                .iter()
                .filter(|recommendation| recommendation.severity == Severity::Critical)
                .count(),
        },
        components: result.components.clone(),
        recommendations: result.recommendations.clone(),
        traffic: result.traffic.clone(),
        sensitive_data: result.sensitive_data.clone(),
    }
}

/// Roll up many scoring results into a fleet summary.
pub fn executive_summary(results: &[CompositeScoreResult]) -> ExecutiveSummary {
    let mut endpoints_by_level = LevelBreakdown::default();
    let mut recommendations_by_severity = SeverityBreakdown::default();
    let mut recommendations_by_component: BTreeMap<ComponentKind, usize> = BTreeMap::new();
    let mut issues: Vec<EndpointIssue> = Vec::new();
    let mut total_recommendations = 0usize;

    for result in results {
        endpoints_by_level.count(result.level);
        for recommendation in &result.recommendations {
            total_recommendations += 1;
            recommendations_by_severity.count(recommendation.severity);
            *recommendations_by_component
                .entry(recommendation.component)
                .or_default() += 1;
            issues.push(EndpointIssue {
                endpoint_id: result.endpoint_id.clone(),
                endpoint_name: result.endpoint_name.clone(),
                recommendation: recommendation.clone(),
            });
        }
    }

    issues.sort_by_key(|issue| issue.recommendation.severity);
    issues.truncate(TOP_ISSUES);

    let average_score = if results.is_empty() {
        0.0
    } else {
        round2(results.iter().map(|r| r.overall_score).sum::<f64>() / results.len() as f64)
    };

    ExecutiveSummary {
        generated_at: Utc::now(),
        total_endpoints: results.len(),
        average_score,
        endpoints_by_level,
        total_recommendations,
        recommendations_by_severity,
        recommendations_by_component,
        top_issues: issues,
    }
}

/// Evaluate the fixed compliance criteria across many scoring results.
pub fn compliance_report(results: &[CompositeScoreResult]) -> ComplianceReport {
    let mut checks = vec![
        ComplianceCheck {
            name: "Authentication configured".to_string(),
            passed: 0,
            failed: 0,
            failing_endpoints: Vec::new(),
        },
        ComplianceCheck {
            name: "IP whitelist configured".to_string(),
            passed: 0,
            failed: 0,
            failing_endpoints: Vec::new(),
        },
        ComplianceCheck {
            name: "Throttling enabled".to_string(),
            passed: 0,
            failed: 0,
            failing_endpoints: Vec::new(),
        },
        ComplianceCheck {
            name: "Error rate below 5%".to_string(),
            passed: 0,
            failed: 0,
            failing_endpoints: Vec::new(),
        },
        ComplianceCheck {
            name: "Overall score at least 60".to_string(),
            passed: 0,
            failed: 0,
            failing_endpoints: Vec::new(),
        },
    ];

    for result in results {
        let component_score = |kind: ComponentKind| {
            result
                .component(kind)
                .map(|component| component.score)
                .unwrap_or(0.0)
        };
        let outcomes = [
            component_score(ComponentKind::AuthenticationStrength) >= 50.0,
            component_score(ComponentKind::IpWhitelistCoverage) >= 50.0,
            component_score(ComponentKind::ThrottlingConfiguration) >= 50.0,
            result.traffic.error_rate < 5.0,
            result.overall_score >= 60.0,
        ];
        for (check, passed) in checks.iter_mut().zip(outcomes) {
            if passed {
                check.passed += 1;
            } else {
                check.failed += 1;
                check.failing_endpoints.push(result.endpoint_id.clone());
            }
        }
    }

    let total_checks = checks.len() * results.len();
    let total_passed: usize = checks.iter().map(|check| check.passed).sum();
    let compliance_percentage = if total_checks == 0 {
        0.0
    } else {
        round2(total_passed as f64 / total_checks as f64 * 100.0)
    };

    ComplianceReport {
        generated_at: Utc::now(),
        total_endpoints: results.len(),
        compliance_percentage,
        checks,
    }
}

/// Freeze a report behind a fresh share token.
pub fn create_snapshot(report: StructuredReport) -> ShareSnapshot {
    ShareSnapshot {
        token: Uuid::new_v4(),
        created_at: Utc::now(),
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeightsConfig;
    use crate::domain::endpoint::TimeRange;
    use crate::domain::scoring::{
        ComponentScore, Recommendation, SecurityLevel, SensitiveDataFinding, TrafficStats,
    };
    use chrono::TimeZone;

    fn result_with_score(id: &str, overall: f64) -> CompositeScoreResult {
        let weights = WeightsConfig::default();
        let range = TimeRange::new(
            Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 6, 7, 0, 0, 0).unwrap(),
        )
        .unwrap();
        CompositeScoreResult {
            endpoint_id: id.to_string(),
            endpoint_name: format!("{id}-name"),
            time_range: range,
            overall_score: overall,
            level: SecurityLevel::from_score(overall),
            components: ComponentKind::ALL
                .iter()
                .map(|&component| ComponentScore {
                    component,
                    score: overall,
                    weight: weights.weight_for(component),
                    facts: Vec::new(),
                })
                .collect(),
            traffic: TrafficStats::default(),
            sensitive_data: SensitiveDataFinding::default(),
            recommendations: vec![Recommendation {
                severity: Severity::High,
                component: ComponentKind::AuthenticationStrength,
                title: "Strengthen endpoint authentication".to_string(),
                description: String::new(),
            }],
        }
    }

    #[test]
    fn report_reproduces_result_fields_without_recomputation() {
        let result = result_with_score("ep-1", 72.5);
        let report = build_report(&result);
        assert_eq!(report.summary.overall_score, 72.5);
        assert_eq!(report.summary.level, SecurityLevel::Fair);
        assert_eq!(report.components, result.components);
        assert_eq!(report.recommendations, result.recommendations);
        assert_eq!(report.traffic, result.traffic);
        assert_eq!(report.sensitive_data, result.sensitive_data);
        assert_eq!(report.summary.recommendation_count, 1);
        assert_eq!(report.summary.critical_recommendations, 0);
    }

    #[test]
    fn executive_summary_aggregates_levels_and_severities() {
        let results = vec![
            result_with_score("ep-1", 95.0),
            result_with_score("ep-2", 50.0),
            result_with_score("ep-3", 30.0),
        ];
        let summary = executive_summary(&results);
        assert_eq!(summary.total_endpoints, 3);
        assert_eq!(summary.average_score, 58.33);
        assert_eq!(summary.endpoints_by_level.excellent, 1);
        assert_eq!(summary.endpoints_by_level.poor, 1);
        assert_eq!(summary.endpoints_by_level.critical, 1);
        assert_eq!(summary.total_recommendations, 3);
        assert_eq!(summary.recommendations_by_severity.high, 3);
        assert_eq!(
            summary.recommendations_by_component[&ComponentKind::AuthenticationStrength],
            3
        );
        assert_eq!(summary.top_issues.len(), 3);
    }

    #[test]
    fn compliance_counts_failures_per_check() {
        let results = vec![result_with_score("ep-1", 95.0), result_with_score("ep-2", 30.0)];
        let report = compliance_report(&results);
        assert_eq!(report.total_endpoints, 2);
        // ep-2 fails auth/whitelist/throttling (score 30) and overall >= 60;
        // both pass the error-rate check with empty traffic.
        let overall = report
            .checks
            .iter()
            .find(|check| check.name.contains("Overall"))
            .unwrap();
        assert_eq!(overall.passed, 1);
        assert_eq!(overall.failing_endpoints, vec!["ep-2".to_string()]);
        assert_eq!(report.compliance_percentage, 60.0);
    }

    #[test]
    fn snapshot_freezes_the_report() {
        let report = build_report(&result_with_score("ep-1", 80.0));
        let snapshot = create_snapshot(report.clone());
        assert_eq!(snapshot.report, report);
        let other = create_snapshot(report);
        assert_ne!(snapshot.token, other.token);
    }
}
