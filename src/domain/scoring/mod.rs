//! Scoring domain: component scores, findings, and the composite result

pub mod entities;
pub mod value_objects;

pub use entities::{
    ComponentScore, CompositeScoreResult, KeywordHits, Recommendation, SensitiveDataFinding,
    TrafficStats,
};
pub use value_objects::{ComponentKind, SecurityLevel, SensitiveKeywordSet, Severity};
