//! Configuration management

pub mod validation;

pub use validation::{Validate, ValidationError};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::scoring::ComponentKind;

/// Component weights for the composite score.
///
/// Validated at process start to sum to 1.0 within `WEIGHT_SUM_TOLERANCE`;
/// a misconfiguration here is fatal at startup, never re-checked per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightsConfig {
    pub ip_whitelist_coverage: f64,
    pub throttling_configuration: f64,
    pub quota_configuration: f64,
    pub authentication_strength: f64,
    pub allowed_hours: f64,
    pub traffic_anomaly: f64,
    pub error_rate: f64,
    pub ssl_tls_status: f64,
    pub logging_status: f64,
}

/// Tolerance for the weight-sum invariant.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            ip_whitelist_coverage: 0.15,
            throttling_configuration: 0.15,
            quota_configuration: 0.05,
            authentication_strength: 0.20,
            allowed_hours: 0.05,
            traffic_anomaly: 0.05,
            error_rate: 0.05,
            ssl_tls_status: 0.10,
            logging_status: 0.20,
        }
    }
}

impl WeightsConfig {
    pub fn weight_for(&self, component: ComponentKind) -> f64 {
        match component {
            ComponentKind::IpWhitelistCoverage => self.ip_whitelist_coverage,
            ComponentKind::ThrottlingConfiguration => self.throttling_configuration,
            ComponentKind::QuotaConfiguration => self.quota_configuration,
            ComponentKind::AuthenticationStrength => self.authentication_strength,
            ComponentKind::AllowedHours => self.allowed_hours,
            ComponentKind::TrafficAnomaly => self.traffic_anomaly,
            ComponentKind::ErrorRate => self.error_rate,
            ComponentKind::SslTlsStatus => self.ssl_tls_status,
            ComponentKind::LoggingStatus => self.logging_status,
        }
    }

    pub fn sum(&self) -> f64 {
        ComponentKind::ALL
            .iter()
            .map(|kind| self.weight_for(*kind))
            .sum()
    }
}

/// Tunables for the scoring rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: WeightsConfig,
    /// `k` in the `mean + k * stddev` hourly anomaly threshold.
    pub anomaly_stddev_factor: f64,
    /// Points deducted from the traffic anomaly score per flagged hour bucket.
    pub anomaly_penalty_per_bucket: f64,
    /// Error rate (percent) at or above which the error-rate score reaches 0.
    pub error_rate_ceiling_percent: f64,
    /// Historical safe throttle rate; configured rules at or below this bound
    /// score full marks.
    pub safe_throttle_rate_per_hour: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            anomaly_stddev_factor: 2.0,
            anomaly_penalty_per_bucket: 25.0,
            error_rate_ceiling_percent: 20.0,
            safe_throttle_rate_per_hour: 1000,
        }
    }
}

/// Scoring window limits offered to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub default_range_days: i64,
    pub max_range_days: i64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_range_days: 7,
            max_range_days: 90,
        }
    }
}

/// Sensitive keyword list source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordsConfig {
    /// Flat file of comma-or-line-separated lowercase terms.
    pub file: PathBuf,
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("config/sensitive_keywords.txt"),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub analysis: AnalysisConfig,
    pub keywords: KeywordsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigLoadError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        // Add environment-specific config if ENV is set
        if let Ok(env) = std::env::var("ENV") {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{}", env)).required(false));
        }

        // Local config and environment variables last (highest priority)
        builder = builder
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("APIPOSTURE").separator("__"));

        let config: Config = builder.build()?.try_deserialize()?;

        config.validate()?;

        Ok(config)
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Configuration file error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Configuration validation error: {0}")]
    Validation(#[from] ValidationError),
}
