//! Endpoint domain: configuration snapshots and scoring windows

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::{EndpointConfig, QuotaRule, ThrottleRule};
pub use errors::TimeRangeError;
pub use value_objects::{AllowedHours, AuthMethod, SslUsage, TimeRange};
