//! Scoring value objects

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The nine security dimensions an endpoint is scored on.
///
/// Declaration order is load-bearing: component lists are emitted in this
/// order and it breaks severity ties when recommendations are sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    IpWhitelistCoverage,
    ThrottlingConfiguration,
    QuotaConfiguration,
    AuthenticationStrength,
    AllowedHours,
    TrafficAnomaly,
    ErrorRate,
    SslTlsStatus,
    LoggingStatus,
}

impl ComponentKind {
    /// All components in declaration order.
    pub const ALL: [ComponentKind; 9] = [
        ComponentKind::IpWhitelistCoverage,
        ComponentKind::ThrottlingConfiguration,
        ComponentKind::QuotaConfiguration,
        ComponentKind::AuthenticationStrength,
        ComponentKind::AllowedHours,
        ComponentKind::TrafficAnomaly,
        ComponentKind::ErrorRate,
        ComponentKind::SslTlsStatus,
        ComponentKind::LoggingStatus,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ComponentKind::IpWhitelistCoverage => "IP Whitelist Coverage",
            ComponentKind::ThrottlingConfiguration => "Throttling Configuration",
            ComponentKind::QuotaConfiguration => "Quota Configuration",
            ComponentKind::AuthenticationStrength => "Authentication Strength",
            ComponentKind::AllowedHours => "Allowed Hours",
            ComponentKind::TrafficAnomaly => "Traffic Anomaly",
            ComponentKind::ErrorRate => "Error Rate",
            ComponentKind::SslTlsStatus => "SSL/TLS Status",
            ComponentKind::LoggingStatus => "Logging Status",
        }
    }

    /// Score below which the component produces a remediation recommendation.
    pub fn acceptable_threshold(&self) -> f64 {
        match self {
            ComponentKind::IpWhitelistCoverage => 50.0,
            ComponentKind::ThrottlingConfiguration => 50.0,
            ComponentKind::QuotaConfiguration => 50.0,
            ComponentKind::AuthenticationStrength => 50.0,
            ComponentKind::AllowedHours => 50.0,
            ComponentKind::TrafficAnomaly => 70.0,
            ComponentKind::ErrorRate => 70.0,
            ComponentKind::SslTlsStatus => 80.0,
            ComponentKind::LoggingStatus => 70.0,
        }
    }
}

/// Remediation severity, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
            Severity::Low => write!(f, "low"),
        }
    }
}

/// Qualitative label for a score in `[0, 100]`.
///
/// The same mapping labels both the composite score and any individually
/// displayed sub-score; thresholds are inclusive lower bounds evaluated
/// top-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityLevel {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl SecurityLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            SecurityLevel::Excellent
        } else if score >= 75.0 {
            SecurityLevel::Good
        } else if score >= 60.0 {
            SecurityLevel::Fair
        } else if score >= 40.0 {
            SecurityLevel::Poor
        } else {
            SecurityLevel::Critical
        }
    }
}

impl std::fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecurityLevel::Excellent => write!(f, "Excellent"),
            SecurityLevel::Good => write!(f, "Good"),
            SecurityLevel::Fair => write!(f, "Fair"),
            SecurityLevel::Poor => write!(f, "Poor"),
            SecurityLevel::Critical => write!(f, "Critical"),
        }
    }
}

/// Immutable set of lowercase sensitive terms scanned for in logs.
///
/// Backed by a `BTreeSet` so iteration order, and therefore every per-keyword
/// finding list derived from it, is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensitiveKeywordSet {
    keywords: BTreeSet<String>,
}

impl SensitiveKeywordSet {
    pub fn new(keywords: impl IntoIterator<Item = String>) -> Self {
        Self {
            keywords: keywords
                .into_iter()
                .map(|kw| kw.trim().to_lowercase())
                .filter(|kw| !kw.is_empty())
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.contains(keyword)
    }
}
