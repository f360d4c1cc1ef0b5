//! Traffic anomaly analysis
//!
//! Builds a 24-bucket hour-of-day histogram across the whole window, computes
//! the error rate, and flags hour buckets whose count deviates beyond
//! `mean + k * stddev` from the bucket mean. Flags are informational inputs to
//! the traffic anomaly score, not alerts persisted anywhere.

use std::collections::BTreeSet;

use chrono::Timelike;

use crate::application::round2;
use crate::config::ScoringConfig;
use crate::domain::scoring::TrafficStats;
use crate::domain::traffic::TrafficSample;

/// Number of busiest hours reported in `peak_hours`.
const PEAK_HOURS: usize = 5;

pub fn analyze(sample: &TrafficSample, config: &ScoringConfig) -> TrafficStats {
    let mut hourly_counts = [0u64; 24];
    let mut error_count = 0u64;
    let mut consumers: BTreeSet<&str> = BTreeSet::new();

    for entry in sample.entries() {
        hourly_counts[entry.timestamp.hour() as usize] += 1;
        if entry.is_error() {
            error_count += 1;
        }
        if let Some(consumer) = entry.consumer.as_deref() {
            consumers.insert(consumer);
        }
    }

    let total_requests = sample.len() as u64;
    let error_rate = if total_requests == 0 {
        0.0
    } else {
        round2(error_count as f64 / total_requests as f64 * 100.0)
    };

    TrafficStats {
        total_requests,
        hourly_counts,
        error_count,
        error_rate,
        distinct_consumers: consumers.len() as u64,
        anomalous_hours: anomalous_hours(&hourly_counts, config.anomaly_stddev_factor),
        peak_hours: peak_hours(&hourly_counts),
    }
}

/// Hours whose count exceeds `mean + k * stddev` over the 24 buckets.
///
/// Uses the population standard deviation; a flat histogram has stddev 0 and
/// flags nothing.
fn anomalous_hours(hourly_counts: &[u64; 24], stddev_factor: f64) -> Vec<u8> {
    let mean = hourly_counts.iter().sum::<u64>() as f64 / 24.0;
    let variance = hourly_counts
        .iter()
        .map(|&count| {
            let delta = count as f64 - mean;
            delta * delta
        })
        .sum::<f64>()
        / 24.0;
    let stddev = variance.sqrt();
    if stddev == 0.0 {
        return Vec::new();
    }

    let threshold = mean + stddev_factor * stddev;
    hourly_counts
        .iter()
        .enumerate()
        .filter(|(_, &count)| count as f64 > threshold)
        .map(|(hour, _)| hour as u8)
        .collect()
}

/// Busiest non-empty hours, most loaded first, ties by earlier hour.
fn peak_hours(hourly_counts: &[u64; 24]) -> Vec<u8> {
    let mut hours: Vec<(u8, u64)> = hourly_counts
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .map(|(hour, &count)| (hour as u8, count))
        .collect();
    hours.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    hours.truncate(PEAK_HOURS);
    hours.into_iter().map(|(hour, _)| hour).collect()
}
