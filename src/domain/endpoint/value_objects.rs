//! Endpoint value objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::TimeRangeError;

/// Authentication method configured on an endpoint.
///
/// Unknown methods reported by the config store deserialize as [`AuthMethod::None`]
/// so that an unmapped policy type is scored as unauthenticated rather than
/// failing the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    ApiKey,
    Basic,
    OAuth,
    Jwt,
    Mtls,
    // The fallback variant; serde requires it declared last.
    #[default]
    #[serde(other)]
    None,
}

impl std::fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AuthMethod::None => "none",
            AuthMethod::ApiKey => "api_key",
            AuthMethod::Basic => "basic",
            AuthMethod::OAuth => "oauth",
            AuthMethod::Jwt => "jwt",
            AuthMethod::Mtls => "mtls",
        };
        f.write_str(name)
    }
}

/// Inclusive time window a scoring run is evaluated over.
///
/// Construction validates `start <= end`; an inverted range is rejected before
/// any data acquisition takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TimeRangeError> {
        if start > end {
            return Err(TimeRangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Window length in whole hours, never less than 1.
    pub fn hours(&self) -> i64 {
        (self.end - self.start).num_hours().max(1)
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

/// SSL adoption across the deployments (client side) or backend addresses
/// (backend side) of an endpoint.
///
/// `total == 0` means nothing is deployed on that side, which is treated as
/// fully secured: there is no unencrypted surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslUsage {
    pub total: u32,
    pub secured: u32,
}

impl SslUsage {
    pub fn new(total: u32, secured: u32) -> Self {
        Self {
            total,
            secured: secured.min(total),
        }
    }

    /// Fraction of surfaces behind TLS, in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            f64::from(self.secured) / f64::from(self.total)
        }
    }

    pub fn all_secured(&self) -> bool {
        self.secured == self.total
    }
}

/// Daily access window `[start_hour, end_hour)` in the endpoint's timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedHours {
    pub start_hour: u8,
    pub end_hour: u8,
}

impl AllowedHours {
    pub fn new(start_hour: u8, end_hour: u8) -> Self {
        Self {
            start_hour: start_hour.min(23),
            end_hour: end_hour.min(24),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn time_range_rejects_inverted_bounds() {
        let start = Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        assert!(TimeRange::new(start, end).is_err());
        assert!(TimeRange::new(end, start).is_ok());
    }

    #[test]
    fn time_range_allows_degenerate_window() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let range = TimeRange::new(at, at).unwrap();
        assert_eq!(range.hours(), 1);
        assert!(range.contains(at));
    }

    #[test]
    fn unknown_auth_method_deserializes_as_none() {
        let method: AuthMethod = serde_json::from_str("\"saml\"").unwrap();
        assert_eq!(method, AuthMethod::None);
        let method: AuthMethod = serde_json::from_str("\"mtls\"").unwrap();
        assert_eq!(method, AuthMethod::Mtls);
        assert_eq!(AuthMethod::default(), AuthMethod::None);
    }

    #[test]
    fn known_auth_methods_round_trip() {
        for method in [
            AuthMethod::ApiKey,
            AuthMethod::Basic,
            AuthMethod::OAuth,
            AuthMethod::Jwt,
            AuthMethod::Mtls,
            AuthMethod::None,
        ] {
            let json = serde_json::to_string(&method).unwrap();
            let back: AuthMethod = serde_json::from_str(&json).unwrap();
            assert_eq!(back, method);
        }
    }

    #[test]
    fn ssl_usage_ratio_handles_empty_and_mixed() {
        assert_eq!(SslUsage::default().ratio(), 1.0);
        assert_eq!(SslUsage::new(4, 4).ratio(), 1.0);
        assert_eq!(SslUsage::new(4, 1).ratio(), 0.25);
        assert!(!SslUsage::new(4, 1).all_secured());
    }
}
