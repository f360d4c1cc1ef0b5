//! Recommendation generation
//!
//! Every component scoring below its acceptable threshold yields exactly one
//! recommendation; severity reflects how far below the threshold the score
//! fell. Recommendations are regenerated fresh each run and never stored.

use crate::domain::scoring::{ComponentKind, ComponentScore, Recommendation, Severity};

pub fn generate(components: &[ComponentScore]) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = components
        .iter()
        .filter(|component| component.below_threshold())
        .map(|component| {
            let threshold = component.component.acceptable_threshold();
            Recommendation {
                severity: severity_for(component.score, threshold),
                component: component.component,
                title: title_for(component.component).to_string(),
                description: format!(
                    "{} Score {:.2} is below the acceptable threshold {:.0}.",
                    advice_for(component.component),
                    component.score,
                    threshold
                ),
            }
        })
        .collect();

    // Input arrives in declaration order; the stable sort keeps that order
    // within each severity.
    recommendations.sort_by_key(|recommendation| recommendation.severity);
    recommendations
}

/// Severity from the score's fraction of the threshold.
fn severity_for(score: f64, threshold: f64) -> Severity {
    let ratio = score / threshold;
    if ratio < 0.25 {
        Severity::Critical
    } else if ratio < 0.5 {
        Severity::High
    } else if ratio < 0.75 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

fn title_for(component: ComponentKind) -> &'static str {
    match component {
        ComponentKind::IpWhitelistCoverage => "Restrict access with an IP whitelist",
        ComponentKind::ThrottlingConfiguration => "Configure request throttling",
        ComponentKind::QuotaConfiguration => "Configure a usage quota",
        ComponentKind::AuthenticationStrength => "Strengthen endpoint authentication",
        ComponentKind::AllowedHours => "Restrict the access window",
        ComponentKind::TrafficAnomaly => "Investigate traffic spikes",
        ComponentKind::ErrorRate => "Investigate the elevated error rate",
        ComponentKind::SslTlsStatus => "Enable TLS end to end",
        ComponentKind::LoggingStatus => "Mask sensitive data in logs",
    }
}

fn advice_for(component: ComponentKind) -> &'static str {
    match component {
        ComponentKind::IpWhitelistCoverage => {
            "Observed source addresses are not covered by a whitelist; add or extend the whitelist policy so only known consumers reach the endpoint."
        }
        ComponentKind::ThrottlingConfiguration => {
            "The endpoint accepts unbounded request rates; add a throttling rule sized to its historical peak."
        }
        ComponentKind::QuotaConfiguration => {
            "Add a quota rule for cost control and fair usage."
        }
        ComponentKind::AuthenticationStrength => {
            "The configured authentication is weak or absent; move to OAuth2, JWT, or mTLS."
        }
        ComponentKind::AllowedHours => {
            "Traffic is accepted around the clock; restrict access to the hours the endpoint is actually consumed, or record a justification."
        }
        ComponentKind::TrafficAnomaly => {
            "Hourly traffic deviates sharply from the endpoint's baseline; check for abuse or misconfigured clients."
        }
        ComponentKind::ErrorRate => {
            "A high share of requests fail; review backend health and error handling."
        }
        ComponentKind::SslTlsStatus => {
            "Part of the path to or from this endpoint is unencrypted; enable HTTPS on every deployment and backend address."
        }
        ComponentKind::LoggingStatus => {
            "Sensitive terms appear in request logs; configure log masking or filtering."
        }
    }
}
