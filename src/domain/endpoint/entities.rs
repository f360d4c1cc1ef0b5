//! Endpoint configuration snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{AllowedHours, AuthMethod, SslUsage};

/// Throttling rule configured on an endpoint.
///
/// `rate_per_hour: None` means the rule exists but carries no bound, which the
/// throttling scorer treats as permissive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrottleRule {
    pub rate_per_hour: Option<u32>,
}

impl ThrottleRule {
    pub fn bounded(rate_per_hour: u32) -> Self {
        Self {
            rate_per_hour: Some(rate_per_hour),
        }
    }

    pub fn unbounded() -> Self {
        Self { rate_per_hour: None }
    }
}

/// Quota rule configured on an endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaRule {
    pub limit: Option<u64>,
}

/// Immutable configuration snapshot of one managed API endpoint.
///
/// Owned by the config store; the engine only reads it. One snapshot is loaded
/// per scoring run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub id: String,
    pub name: String,
    /// Source addresses admitted by the whitelist policy; empty means no
    /// whitelist is configured.
    #[serde(default)]
    pub whitelist: Vec<String>,
    #[serde(default)]
    pub throttle: Option<ThrottleRule>,
    #[serde(default)]
    pub quota: Option<QuotaRule>,
    #[serde(default)]
    pub auth_method: AuthMethod,
    #[serde(default)]
    pub allowed_hours: Option<AllowedHours>,
    /// Operator acknowledgement that the endpoint is intentionally open 24/7.
    #[serde(default)]
    pub open_all_hours_justified: bool,
    #[serde(default)]
    pub client_ssl: SslUsage,
    #[serde(default)]
    pub backend_ssl: SslUsage,
    /// Environments the endpoint is deployed to, for report headers.
    #[serde(default)]
    pub deployed_environments: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl EndpointConfig {
    /// Minimal snapshot with every security control absent.
    pub fn bare(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            whitelist: Vec::new(),
            throttle: None,
            quota: None,
            auth_method: AuthMethod::None,
            allowed_hours: None,
            open_all_hours_justified: false,
            client_ssl: SslUsage::default(),
            backend_ssl: SslUsage::default(),
            deployed_environments: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn whitelist_contains(&self, source_ip: &str) -> bool {
        self.whitelist.iter().any(|entry| entry == source_ip)
    }
}
