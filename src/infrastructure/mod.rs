//! Infrastructure layer: adapters behind the domain ports.

pub mod keywords;
pub mod share;
pub mod stores;
