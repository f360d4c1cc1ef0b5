//! Configuration validation module

use crate::config::{AnalysisConfig, Config, KeywordsConfig, ScoringConfig, WEIGHT_SUM_TOLERANCE};

/// Trait for validating configuration sections
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Scoring configuration error: {message}")]
    Scoring { message: String },

    #[error("Analysis configuration error: {message}")]
    Analysis { message: String },

    #[error("Keywords configuration error: {message}")]
    Keywords { message: String },
}

impl ValidationError {
    pub fn scoring(message: impl Into<String>) -> Self {
        Self::Scoring {
            message: message.into(),
        }
    }

    pub fn analysis(message: impl Into<String>) -> Self {
        Self::Analysis {
            message: message.into(),
        }
    }

    pub fn keywords(message: impl Into<String>) -> Self {
        Self::Keywords {
            message: message.into(),
        }
    }
}

impl Validate for ScoringConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ValidationError::scoring(format!(
                "component weights must sum to 1.0, got {sum}"
            )));
        }
        for kind in crate::domain::scoring::ComponentKind::ALL {
            let weight = self.weights.weight_for(kind);
            if weight <= 0.0 || weight > 1.0 {
                return Err(ValidationError::scoring(format!(
                    "weight for {} must be in (0, 1], got {weight}",
                    kind.title()
                )));
            }
        }
        if self.anomaly_stddev_factor <= 0.0 {
            return Err(ValidationError::scoring(
                "anomaly_stddev_factor must be > 0",
            ));
        }
        if self.anomaly_penalty_per_bucket < 0.0 {
            return Err(ValidationError::scoring(
                "anomaly_penalty_per_bucket must be >= 0",
            ));
        }
        if self.error_rate_ceiling_percent <= 0.0 || self.error_rate_ceiling_percent > 100.0 {
            return Err(ValidationError::scoring(
                "error_rate_ceiling_percent must be in (0, 100]",
            ));
        }
        Ok(())
    }
}

impl Validate for AnalysisConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.default_range_days <= 0 {
            return Err(ValidationError::analysis("default_range_days must be > 0"));
        }
        if self.max_range_days < self.default_range_days {
            return Err(ValidationError::analysis(
                "max_range_days must be >= default_range_days",
            ));
        }
        Ok(())
    }
}

impl Validate for KeywordsConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.file.as_os_str().is_empty() {
            return Err(ValidationError::keywords("keyword file path is empty"));
        }
        Ok(())
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), ValidationError> {
        self.scoring.validate()?;
        self.analysis.validate()?;
        self.keywords.validate()?;
        Ok(())
    }
}
