//! Traffic domain: observed log entries for one endpoint

pub mod entities;

pub use entities::{LogEntry, TrafficSample};
