//! Fact extraction
//!
//! Normalizes one endpoint configuration snapshot plus one traffic sample into
//! the fixed fact set the component scorers consume. Traffic-derived facts
//! default to zero for an empty sample; they are never null.

use std::collections::BTreeSet;

use crate::domain::endpoint::{AuthMethod, EndpointConfig};
use crate::domain::traffic::TrafficSample;

/// Normalized inputs for one scoring run.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointFacts {
    pub whitelist_entries: usize,
    /// Distinct source IPs observed in the sample.
    pub observed_ips: usize,
    /// Observed source IPs that appear in the whitelist.
    pub covered_ips: usize,
    pub throttle_configured: bool,
    pub throttle_rate_per_hour: Option<u32>,
    pub quota_configured: bool,
    pub auth_method: AuthMethod,
    pub allowed_hours_restricted: bool,
    pub open_all_hours_justified: bool,
    /// Fraction of client-facing deployments behind TLS, `[0, 1]`.
    pub client_ssl_ratio: f64,
    /// Fraction of backend addresses behind TLS, `[0, 1]`.
    pub backend_ssl_ratio: f64,
    pub total_requests: u64,
    pub error_count: u64,
}

impl EndpointFacts {
    pub fn extract(config: &EndpointConfig, sample: &TrafficSample) -> Self {
        let observed: BTreeSet<&str> = sample
            .entries()
            .iter()
            .filter_map(|entry| entry.source_ip.as_deref())
            .collect();
        let covered = observed
            .iter()
            .filter(|ip| config.whitelist_contains(ip))
            .count();

        Self {
            whitelist_entries: config.whitelist.len(),
            observed_ips: observed.len(),
            covered_ips: covered,
            throttle_configured: config.throttle.is_some(),
            throttle_rate_per_hour: config.throttle.and_then(|rule| rule.rate_per_hour),
            quota_configured: config.quota.is_some(),
            auth_method: config.auth_method,
            allowed_hours_restricted: config.allowed_hours.is_some(),
            open_all_hours_justified: config.open_all_hours_justified,
            client_ssl_ratio: config.client_ssl.ratio(),
            backend_ssl_ratio: config.backend_ssl.ratio(),
            total_requests: sample.len() as u64,
            error_count: sample
                .entries()
                .iter()
                .filter(|entry| entry.is_error())
                .count() as u64,
        }
    }
}
