//! Property checks over the pure scoring pipeline.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use apiposture::application::facts::EndpointFacts;
use apiposture::application::{composite_score, level_for, recommend, scorers, sensitive, traffic};
use apiposture::config::ScoringConfig;
use apiposture::domain::endpoint::{
    AllowedHours, AuthMethod, EndpointConfig, QuotaRule, SslUsage, ThrottleRule,
};
use apiposture::domain::scoring::{SecurityLevel, SensitiveKeywordSet};
use apiposture::domain::traffic::{LogEntry, TrafficSample};

fn auth_method() -> impl Strategy<Value = AuthMethod> {
    prop_oneof![
        Just(AuthMethod::None),
        Just(AuthMethod::ApiKey),
        Just(AuthMethod::Basic),
        Just(AuthMethod::OAuth),
        Just(AuthMethod::Jwt),
        Just(AuthMethod::Mtls),
    ]
}

fn endpoint_config() -> impl Strategy<Value = EndpointConfig> {
    (
        prop::collection::vec("10\\.0\\.0\\.[0-9]{1,2}", 0..4),
        prop::option::of(0u32..100_000),
        any::<bool>(),
        auth_method(),
        prop::option::of((0u8..24, 0u8..24)),
        any::<bool>(),
        (0u32..50, 0u32..50),
        (0u32..50, 0u32..50),
    )
        .prop_map(
            |(whitelist, throttle, quota, auth, hours, justified, client, backend)| {
                let mut config = EndpointConfig::bare("ep-prop", "prop");
                config.whitelist = whitelist;
                config.throttle = throttle.map(ThrottleRule::bounded);
                config.quota = quota.then(|| QuotaRule { limit: Some(1000) });
                config.auth_method = auth;
                config.allowed_hours = hours.map(|(start, end)| AllowedHours::new(start, end));
                config.open_all_hours_justified = justified;
                config.client_ssl = SslUsage::new(client.0.max(client.1), client.1);
                config.backend_ssl = SslUsage::new(backend.0.max(backend.1), backend.1);
                config
            },
        )
}

fn traffic_sample() -> impl Strategy<Value = TrafficSample> {
    prop::collection::vec(
        (0u32..24, prop_oneof![Just(200u16), Just(404), Just(500)], any::<bool>()),
        0..80,
    )
    .prop_map(|rows| {
        let entries = rows
            .into_iter()
            .map(|(hour, status, leaky)| {
                let entry = LogEntry::new(
                    Utc.with_ymd_and_hms(2025, 6, 1, hour, 15, 0).unwrap(),
                    status,
                )
                .with_source_ip("10.0.0.7");
                if leaky {
                    entry.with_body("password=changeme")
                } else {
                    entry.with_body("ok")
                }
            })
            .collect();
        TrafficSample::new(entries)
    })
}

proptest! {
    #[test]
    fn every_component_score_stays_in_bounds(
        config in endpoint_config(),
        sample in traffic_sample(),
    ) {
        let scoring = ScoringConfig::default();
        let keywords = SensitiveKeywordSet::new(vec!["password".to_string()]);

        let facts = EndpointFacts::extract(&config, &sample);
        let stats = traffic::analyze(&sample, &scoring);
        let finding = sensitive::scan(&sample, &keywords);
        let components = scorers::score_components(&facts, &stats, &finding, &scoring);

        prop_assert_eq!(components.len(), 9);
        for component in &components {
            prop_assert!((0.0..=100.0).contains(&component.score));
            // Scores carry exactly two decimals.
            let scaled = component.score * 100.0;
            prop_assert!((scaled - scaled.round()).abs() < 1e-9);
        }

        let overall = composite_score(&components);
        prop_assert!((0.0..=100.0).contains(&overall));
        prop_assert_eq!(level_for(overall), SecurityLevel::from_score(overall));
    }

    #[test]
    fn recommendations_cover_exactly_the_failing_components(
        config in endpoint_config(),
        sample in traffic_sample(),
    ) {
        let scoring = ScoringConfig::default();
        let keywords = SensitiveKeywordSet::new(vec!["password".to_string()]);

        let facts = EndpointFacts::extract(&config, &sample);
        let stats = traffic::analyze(&sample, &scoring);
        let finding = sensitive::scan(&sample, &keywords);
        let components = scorers::score_components(&facts, &stats, &finding, &scoring);
        let recommendations = recommend::generate(&components);

        let failing = components.iter().filter(|c| c.below_threshold()).count();
        prop_assert_eq!(recommendations.len(), failing);
        for recommendation in &recommendations {
            let component = components
                .iter()
                .find(|c| c.component == recommendation.component)
                .expect("recommendation references a scored component");
            prop_assert!(component.below_threshold());
        }
    }

    #[test]
    fn scan_percentages_are_consistent(sample in traffic_sample()) {
        let keywords = SensitiveKeywordSet::new(vec!["password".to_string()]);
        let finding = sensitive::scan(&sample, &keywords);

        prop_assert_eq!(finding.entries_scanned, sample.len() as u64);
        prop_assert!(finding.matched_entries <= finding.entries_scanned);
        prop_assert!((0.0..=100.0).contains(&finding.match_percentage));
        if finding.matched_entries == 0 {
            prop_assert_eq!(finding.match_percentage, 0.0);
            prop_assert!(finding.keywords.is_empty());
        }
    }
}
