//! Strata Core - Domain types and traits
//!
//! This crate provides the foundational types for the Strata document
//! cache: parsed XML documents and the flat properties configuration
//! the rest of the system is wired from.

pub mod config;
pub mod document;
pub mod error;

pub use config::Configuration;
pub use document::Document;
pub use error::{ConfigError, DocumentError};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_defined() {
        assert!(!version().is_empty());
    }

    #[test]
    fn version_is_semver() {
        let v = version();
        assert_eq!(v.split('.').count(), 3, "Version should be semver");
    }
}
