//! Sensitive data scanning
//!
//! Scans every entry of a traffic sample for the configured keywords, matching
//! case-insensitively against header values and body text. An entry matches
//! when any keyword appears in either location; per-keyword counts accumulate
//! across entries but an entry contributes at most once per keyword and
//! location.

use crate::application::round2;
use crate::domain::scoring::{KeywordHits, SensitiveDataFinding, SensitiveKeywordSet};
use crate::domain::traffic::TrafficSample;

pub fn scan(sample: &TrafficSample, keywords: &SensitiveKeywordSet) -> SensitiveDataFinding {
    let entries_scanned = sample.len() as u64;
    let mut matched_entries = 0u64;
    // Keyed in keyword order; SensitiveKeywordSet iterates sorted, so the
    // finding list is deterministic for identical inputs.
    let mut hits: Vec<KeywordHits> = keywords
        .iter()
        .map(|keyword| KeywordHits {
            keyword: keyword.to_string(),
            entries: 0,
            header_hits: 0,
            body_hits: 0,
        })
        .collect();

    for entry in sample.entries() {
        let header_text: String = entry
            .headers()
            .map(|(key, value)| format!("{key}:{value}\n"))
            .collect::<String>()
            .to_lowercase();
        let body_text = entry.body.as_deref().map(str::to_lowercase);

        let mut entry_matched = false;
        for hit in hits.iter_mut() {
            let in_headers = header_text.contains(&hit.keyword);
            let in_body = body_text
                .as_deref()
                .is_some_and(|body| body.contains(&hit.keyword));

            if in_headers {
                hit.header_hits += 1;
            }
            if in_body {
                hit.body_hits += 1;
            }
            if in_headers || in_body {
                hit.entries += 1;
                entry_matched = true;
            }
        }
        if entry_matched {
            matched_entries += 1;
        }
    }

    hits.retain(|hit| hit.entries > 0);

    let match_percentage = if entries_scanned == 0 {
        0.0
    } else {
        round2(matched_entries as f64 / entries_scanned as f64 * 100.0)
    };

    SensitiveDataFinding {
        entries_scanned,
        matched_entries,
        match_percentage,
        keywords: hits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traffic::LogEntry;
    use chrono::{TimeZone, Utc};

    fn keywords() -> SensitiveKeywordSet {
        SensitiveKeywordSet::new(["password", "tc"].map(String::from))
    }

    fn entry(minute: u32) -> LogEntry {
        LogEntry::new(
            Utc.with_ymd_and_hms(2025, 6, 1, 10, minute, 0).unwrap(),
            200,
        )
    }

    #[test]
    fn empty_sample_scans_nothing() {
        let finding = scan(&TrafficSample::empty(), &keywords());
        assert_eq!(finding.entries_scanned, 0);
        assert_eq!(finding.match_percentage, 0.0);
        assert!(!finding.has_matches());
    }

    #[test]
    fn matches_in_headers_and_body_are_split() {
        let sample = TrafficSample::new(vec![
            entry(1).with_header("Authorization", "Password=hunter2"),
            entry(2).with_body("{\"tc\": \"12345678901\"}"),
            entry(3).with_body("nothing to see"),
        ]);
        let finding = scan(&sample, &keywords());

        assert_eq!(finding.entries_scanned, 3);
        assert_eq!(finding.matched_entries, 2);
        assert_eq!(finding.match_percentage, 66.67);
        assert_eq!(finding.keywords.len(), 2);

        let password = &finding.keywords[0];
        assert_eq!(password.keyword, "password");
        assert_eq!(password.entries, 1);
        assert_eq!(password.header_hits, 1);
        assert_eq!(password.body_hits, 0);

        let tc = &finding.keywords[1];
        assert_eq!(tc.keyword, "tc");
        assert_eq!(tc.entries, 1);
        assert_eq!(tc.body_hits, 1);
    }

    #[test]
    fn entry_counts_once_per_keyword_even_with_repeats() {
        let sample = TrafficSample::new(vec![
            entry(1).with_body("password password password")
        ]);
        let finding = scan(&sample, &keywords());
        assert_eq!(finding.keywords[0].entries, 1);
        assert_eq!(finding.keywords[0].body_hits, 1);
    }

    #[test]
    fn percentage_is_monotone_in_matching_entries() {
        let mut entries = vec![entry(0).with_body("clean")];
        let mut previous = scan(&TrafficSample::new(entries.clone()), &keywords()).match_percentage;
        for minute in 1..10 {
            entries.push(entry(minute).with_body("password reset"));
            let current =
                scan(&TrafficSample::new(entries.clone()), &keywords()).match_percentage;
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn unmatched_keywords_are_omitted() {
        let sample = TrafficSample::new(vec![entry(1).with_body("password")]);
        let finding = scan(&sample, &keywords());
        assert_eq!(finding.keywords.len(), 1);
        assert_eq!(finding.keywords[0].keyword, "password");
    }
}
