//! The nine component scorers
//!
//! Each scorer is a pure, total function from normalized facts to a score in
//! `[0, 100]` plus the contributing facts that explain it. A scorer never
//! fails: when its required signal is missing it fails closed to the minimum
//! score and records the degraded reason.

use crate::application::facts::EndpointFacts;
use crate::application::round2;
use crate::config::ScoringConfig;
use crate::domain::endpoint::AuthMethod;
use crate::domain::scoring::{
    ComponentKind, ComponentScore, SensitiveDataFinding, TrafficStats,
};

/// Score all nine components in declaration order.
pub fn score_components(
    facts: &EndpointFacts,
    stats: &TrafficStats,
    finding: &SensitiveDataFinding,
    config: &ScoringConfig,
) -> Vec<ComponentScore> {
    ComponentKind::ALL
        .iter()
        .map(|&component| {
            let (raw, contributing) = match component {
                ComponentKind::IpWhitelistCoverage => score_ip_whitelist(facts),
                ComponentKind::ThrottlingConfiguration => score_throttling(facts, config),
                ComponentKind::QuotaConfiguration => score_quota(facts),
                ComponentKind::AuthenticationStrength => score_authentication(facts),
                ComponentKind::AllowedHours => score_allowed_hours(facts),
                ComponentKind::TrafficAnomaly => score_traffic_anomaly(stats, config),
                ComponentKind::ErrorRate => score_error_rate(stats, config),
                ComponentKind::SslTlsStatus => score_ssl_tls(facts),
                ComponentKind::LoggingStatus => score_logging(finding),
            };
            ComponentScore {
                component,
                score: round2(raw.clamp(0.0, 100.0)),
                weight: config.weights.weight_for(component),
                facts: contributing,
            }
        })
        .collect()
}

/// 100 when a non-empty whitelist covers every observed source IP, scaled by
/// the covered fraction otherwise; 0 without a whitelist.
fn score_ip_whitelist(facts: &EndpointFacts) -> (f64, Vec<String>) {
    if facts.whitelist_entries == 0 {
        let reason = if facts.total_requests > 0 {
            format!(
                "no whitelist configured, {} distinct source ips observed",
                facts.observed_ips
            )
        } else {
            "no whitelist configured, no traffic observed in window".to_string()
        };
        return (0.0, vec![reason]);
    }

    let mut contributing = vec![format!("whitelist entries: {}", facts.whitelist_entries)];
    if facts.observed_ips == 0 {
        contributing.push("no source ips observed in window".to_string());
        return (100.0, contributing);
    }

    let coverage = facts.covered_ips as f64 / facts.observed_ips as f64;
    contributing.push(format!(
        "{} of {} observed source ips covered",
        facts.covered_ips, facts.observed_ips
    ));
    (coverage * 100.0, contributing)
}

/// 100 for a rule bounded at or below the safe threshold, 50 for a permissive
/// or unbounded rule, 0 without one.
fn score_throttling(facts: &EndpointFacts, config: &ScoringConfig) -> (f64, Vec<String>) {
    if !facts.throttle_configured {
        return (0.0, vec!["no throttling rule configured".to_string()]);
    }
    match facts.throttle_rate_per_hour {
        Some(rate) if rate <= config.safe_throttle_rate_per_hour => (
            100.0,
            vec![format!(
                "throttle bounded at {rate} req/hour (safe threshold {})",
                config.safe_throttle_rate_per_hour
            )],
        ),
        Some(rate) => (
            50.0,
            vec![format!(
                "throttle bound {rate} req/hour exceeds safe threshold {}",
                config.safe_throttle_rate_per_hour
            )],
        ),
        None => (
            50.0,
            vec!["throttling rule configured without a bound".to_string()],
        ),
    }
}

fn score_quota(facts: &EndpointFacts) -> (f64, Vec<String>) {
    if facts.quota_configured {
        (100.0, vec!["quota rule configured".to_string()])
    } else {
        (0.0, vec!["no quota rule configured".to_string()])
    }
}

/// Fixed strength table; unknown methods have already been folded into
/// [`AuthMethod::None`] at the domain boundary.
fn score_authentication(facts: &EndpointFacts) -> (f64, Vec<String>) {
    let score = match facts.auth_method {
        AuthMethod::None => 0.0,
        AuthMethod::ApiKey => 40.0,
        AuthMethod::Basic => 50.0,
        AuthMethod::OAuth => 80.0,
        AuthMethod::Jwt => 90.0,
        AuthMethod::Mtls => 100.0,
    };
    (
        score,
        vec![format!("authentication method: {}", facts.auth_method)],
    )
}

fn score_allowed_hours(facts: &EndpointFacts) -> (f64, Vec<String>) {
    if facts.allowed_hours_restricted {
        (100.0, vec!["access window restricted".to_string()])
    } else if facts.open_all_hours_justified {
        (
            100.0,
            vec!["open 24/7 with operator justification".to_string()],
        )
    } else {
        (
            0.0,
            vec!["open 24/7 without justification".to_string()],
        )
    }
}

/// 100 minus a fixed penalty per anomalous hour bucket, floored at 0.
fn score_traffic_anomaly(stats: &TrafficStats, config: &ScoringConfig) -> (f64, Vec<String>) {
    if stats.total_requests == 0 {
        return (
            100.0,
            vec!["no traffic observed in window".to_string()],
        );
    }
    let flagged = stats.anomalous_hours.len();
    let score = 100.0 - config.anomaly_penalty_per_bucket * flagged as f64;
    let mut contributing = vec![format!("anomalous hour buckets: {flagged}")];
    if !stats.anomalous_hours.is_empty() {
        contributing.push(format!(
            "anomalous hours: {:?}",
            stats.anomalous_hours
        ));
    }
    (score, contributing)
}

/// Linear from 100 at 0% errors down to 0 at the configured ceiling.
fn score_error_rate(stats: &TrafficStats, config: &ScoringConfig) -> (f64, Vec<String>) {
    if stats.total_requests == 0 {
        return (
            100.0,
            vec!["no traffic observed in window".to_string()],
        );
    }
    let score = 100.0 * (1.0 - stats.error_rate / config.error_rate_ceiling_percent);
    (
        score,
        vec![format!(
            "error rate {:.2}% ({} of {} requests)",
            stats.error_rate, stats.error_count, stats.total_requests
        )],
    )
}

/// Weighted split between the client-facing and backend TLS surfaces; the
/// client side dominates at 60/40.
fn score_ssl_tls(facts: &EndpointFacts) -> (f64, Vec<String>) {
    let client = facts.client_ssl_ratio * 100.0;
    let backend = facts.backend_ssl_ratio * 100.0;
    let score = 0.6 * client + 0.4 * backend;
    (
        score,
        vec![
            format!("client tls coverage: {:.0}%", client),
            format!("backend tls coverage: {:.0}%", backend),
        ],
    )
}

/// Tiered on the sensitive-data match percentage. A sample with nothing
/// scanned scores 100 ("no data"), distinct from a scanned-clean sample.
fn score_logging(finding: &SensitiveDataFinding) -> (f64, Vec<String>) {
    if finding.entries_scanned == 0 {
        return (
            100.0,
            vec!["no log entries scanned in window".to_string()],
        );
    }
    let score = logging_band(finding.match_percentage);
    let mut contributing = vec![format!(
        "sensitive data in {:.2}% of {} scanned entries",
        finding.match_percentage, finding.entries_scanned
    )];
    for hit in &finding.keywords {
        contributing.push(format!(
            "keyword '{}' in {} entries ({} header, {} body)",
            hit.keyword, hit.entries, hit.header_hits, hit.body_hits
        ));
    }
    (score, contributing)
}

/// First matching band, evaluated in ascending percentage order.
fn logging_band(percentage: f64) -> f64 {
    if percentage <= 0.0 {
        100.0
    } else if percentage <= 1.0 {
        80.0
    } else if percentage <= 5.0 {
        70.0
    } else if percentage <= 10.0 {
        60.0
    } else if percentage <= 20.0 {
        50.0
    } else if percentage <= 50.0 {
        40.0
    } else if percentage <= 80.0 {
        20.0
    } else {
        10.0
    }
}
