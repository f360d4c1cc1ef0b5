//! Apiposture - Security posture scoring for managed API endpoints
//!
//! This crate computes a composite security-posture score for an API endpoint
//! from its static configuration (whitelists, throttling, quota, auth method,
//! allowed hours, SSL) and a sample of its observed traffic over an
//! operator-selected time window.
//!
//! # Modules
//!
//! - [`config`] — Strongly-typed configuration with file and environment variable support
//! - [`domain`] — Endpoint, traffic, and scoring domain models
//! - [`application`] — The scoring pipeline, reporting, and the service layer
//! - [`infrastructure`] — Keyword sources and in-memory store adapters
//! - [`logging`] — Structured logging with tracing
//!
//! # Architecture
//!
//! ```text
//! apiposture/
//! ├── domain/           # Pure domain model
//! │   ├── endpoint/     # Endpoint configuration snapshot, time range
//! │   ├── traffic/      # Log entries and traffic samples
//! │   ├── scoring/      # Component scores, findings, recommendations
//! │   └── stores        # Async ports to the config and log stores
//! ├── application/      # Fact extraction, the nine scorers, the two
//! │                     # analyzers, aggregation, recommendations, reporting
//! ├── infrastructure/   # Keyword set loading + hot reload, memory adapters
//! └── config/           # Configuration management
//! ```
//!
//! The engine performs no I/O of its own: all data acquisition goes through
//! the store ports in [`domain::stores`], and one scoring run is a pure
//! function of the snapshot it is given.
//!
//! # Configuration
//!
//! ```rust,ignore
//! use apiposture::Config;
//!
//! let config = Config::load()?;
//! ```
//!
//! Environment variables use the `APIPOSTURE__` prefix with double underscore
//! separators:
//!
//! ```bash
//! APIPOSTURE__SCORING__ANOMALY_STDDEV_FACTOR=3.0
//! APIPOSTURE__KEYWORDS__FILE=config/sensitive_keywords.txt
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

pub use config::Config;
pub use logging::init_tracing;
