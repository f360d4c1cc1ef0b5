//! Score aggregation
//!
//! Combines the nine weighted sub-scores into one composite score and its
//! qualitative level. The weight-sum invariant is enforced once at startup by
//! configuration validation, never here.

use crate::application::round2;
use crate::domain::scoring::{ComponentScore, SecurityLevel};

/// Weighted composite in `[0, 100]`, rounded to two decimals.
pub fn composite_score(components: &[ComponentScore]) -> f64 {
    let weighted: f64 = components
        .iter()
        .map(|component| component.score * component.weight)
        .sum();
    round2(weighted.clamp(0.0, 100.0))
}

pub fn level_for(score: f64) -> SecurityLevel {
    SecurityLevel::from_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeightsConfig;
    use crate::domain::scoring::ComponentKind;

    fn components_with_uniform_score(score: f64) -> Vec<ComponentScore> {
        let weights = WeightsConfig::default();
        ComponentKind::ALL
            .iter()
            .map(|&component| ComponentScore {
                component,
                score,
                weight: weights.weight_for(component),
                facts: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn uniform_scores_pass_through_the_weighting() {
        assert_eq!(composite_score(&components_with_uniform_score(100.0)), 100.0);
        assert_eq!(composite_score(&components_with_uniform_score(0.0)), 0.0);
        assert_eq!(composite_score(&components_with_uniform_score(60.0)), 60.0);
    }

    #[test]
    fn composite_reflects_component_weights() {
        let mut components = components_with_uniform_score(100.0);
        // Zeroing authentication (weight 0.20) drops exactly 20 points.
        components[3].score = 0.0;
        assert_eq!(components[3].component, ComponentKind::AuthenticationStrength);
        assert_eq!(composite_score(&components), 80.0);
    }

    #[test]
    fn level_mapping_matches_display_thresholds() {
        assert_eq!(level_for(90.0), SecurityLevel::Excellent);
        assert_eq!(level_for(89.9), SecurityLevel::Good);
        assert_eq!(level_for(60.0), SecurityLevel::Fair);
        assert_eq!(level_for(39.9), SecurityLevel::Critical);
    }
}
