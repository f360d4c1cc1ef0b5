//! Application layer
//!
//! The scoring pipeline lives here: fact extraction, traffic analysis,
//! sensitive-data scanning, per-component scoring, aggregation, and
//! recommendation generation, wired together by [`service::ScoringService`].
//! Every function in this layer is deterministic for a given input.

pub mod errors;
pub mod facts;
pub mod recommend;
pub mod reporting;
pub mod scorers;
pub mod sensitive;
pub mod service;
pub mod traffic;

mod aggregate;

pub use aggregate::{composite_score, level_for};
pub use errors::ScoringError;
pub use service::ScoringService;

/// Round to two decimals, the precision every emitted score carries.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn round2_half_up() {
        assert_eq!(round2(66.666), 66.67);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(100.0), 100.0);
    }
}
