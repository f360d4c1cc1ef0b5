//! Scoring service
//!
//! Orchestrates one scoring run: validate the window, fetch configuration and
//! traffic, then hand everything to the pure pipeline. The pipeline itself
//! never performs I/O, so two runs over the same inputs produce identical
//! results.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use crate::application::errors::ScoringError;
use crate::application::facts::EndpointFacts;
use crate::application::{aggregate, recommend, scorers, sensitive, traffic};
use crate::config::{AnalysisConfig, ScoringConfig};
use crate::domain::endpoint::{EndpointConfig, TimeRange, TimeRangeError};
use crate::domain::scoring::{CompositeScoreResult, SensitiveKeywordSet};
use crate::domain::stores::{EndpointConfigStore, TrafficLogStore};
use crate::domain::traffic::TrafficSample;
use crate::infrastructure::keywords::KeywordStore;

/// Entry point for scoring runs against the configured stores.
pub struct ScoringService {
    config_store: Arc<dyn EndpointConfigStore>,
    log_store: Arc<dyn TrafficLogStore>,
    keywords: Arc<KeywordStore>,
    scoring: ScoringConfig,
    analysis: AnalysisConfig,
}

impl ScoringService {
    pub fn new(
        config_store: Arc<dyn EndpointConfigStore>,
        log_store: Arc<dyn TrafficLogStore>,
        keywords: Arc<KeywordStore>,
        scoring: ScoringConfig,
        analysis: AnalysisConfig,
    ) -> Self {
        Self {
            config_store,
            log_store,
            keywords,
            scoring,
            analysis,
        }
    }

    /// The window used when the caller does not supply one, ending at `now`.
    pub fn default_range(&self, now: DateTime<Utc>) -> Result<TimeRange, TimeRangeError> {
        TimeRange::new(now - Duration::days(self.analysis.default_range_days), now)
    }

    /// Score one endpoint over `range`.
    ///
    /// Missing endpoint configuration is fatal for the run. A failing log
    /// store is not: the run degrades to an empty sample and the
    /// traffic-derived components score neutral.
    pub async fn score_endpoint(
        &self,
        endpoint_id: &str,
        range: TimeRange,
    ) -> Result<CompositeScoreResult, ScoringError> {
        self.check_range(&range)?;

        let config = self
            .config_store
            .get(endpoint_id)
            .await?
            .ok_or_else(|| ScoringError::MissingData {
                endpoint_id: endpoint_id.to_string(),
            })?;

        let sample = self.fetch_sample(endpoint_id, &range).await;
        let keywords = self.keywords.current();
        let result = self.run_pipeline(&config, &sample, &keywords, range);
        info!(
            endpoint_id,
            overall_score = result.overall_score,
            level = %result.level,
            recommendations = result.recommendations.len(),
            "scored endpoint"
        );
        Ok(result)
    }

    /// Score every managed endpoint over the same window.
    pub async fn score_all(
        &self,
        range: TimeRange,
    ) -> Result<Vec<CompositeScoreResult>, ScoringError> {
        self.check_range(&range)?;

        let configs = self.config_store.list().await?;
        let keywords = self.keywords.current();
        let mut results = Vec::with_capacity(configs.len());
        for config in &configs {
            let sample = self.fetch_sample(&config.id, &range).await;
            results.push(self.run_pipeline(config, &sample, &keywords, range));
        }
        info!(endpoints = results.len(), "scored all endpoints");
        Ok(results)
    }

    fn check_range(&self, range: &TimeRange) -> Result<(), ScoringError> {
        let days = range.days();
        if days > self.analysis.max_range_days {
            return Err(TimeRangeError::TooLong {
                days,
                max_days: self.analysis.max_range_days,
            }
            .into());
        }
        Ok(())
    }

    async fn fetch_sample(&self, endpoint_id: &str, range: &TimeRange) -> TrafficSample {
        match self.log_store.sample(endpoint_id, range).await {
            Ok(sample) => {
                debug!(endpoint_id, entries = sample.len(), "fetched traffic sample");
                sample
            }
            Err(error) => {
                warn!(endpoint_id, %error, "log store unavailable, scoring without traffic");
                TrafficSample::empty()
            }
        }
    }

    fn run_pipeline(
        &self,
        config: &EndpointConfig,
        sample: &TrafficSample,
        keywords: &SensitiveKeywordSet,
        range: TimeRange,
    ) -> CompositeScoreResult {
        let facts = EndpointFacts::extract(config, sample);
        let stats = traffic::analyze(sample, &self.scoring);
        let finding = sensitive::scan(sample, keywords);
        let components = scorers::score_components(&facts, &stats, &finding, &self.scoring);
        let overall_score = aggregate::composite_score(&components);
        let level = aggregate::level_for(overall_score);
        let recommendations = recommend::generate(&components);

        CompositeScoreResult {
            endpoint_id: config.id.clone(),
            endpoint_name: config.name.clone(),
            time_range: range,
            overall_score,
            level,
            components,
            traffic: stats,
            sensitive_data: finding,
            recommendations,
        }
    }
}
