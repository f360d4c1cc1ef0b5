//! Domain layer - pure domain models and store ports

pub mod endpoint;
pub mod scoring;
pub mod stores;
pub mod traffic;
