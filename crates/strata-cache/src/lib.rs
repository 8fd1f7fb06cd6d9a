//! # Strata Cache
//!
//! An expiring, in-memory XML document cache backed by an ordered list
//! of pluggable document sources.
//!
//! A lookup serves a live cached entry or else queries the configured
//! sources in order, caching and returning the first hit. Sources are
//! wired up at startup from a flat properties configuration; hit and
//! miss latencies are aggregated under concurrent load.
//!
//! ## Example
//!
//! ```no_run
//! use strata_cache::DocumentCache;
//!
//! // Built from the properties file named by STRATA_CONFIG (or the
//! // built-in defaults) on first access, shared process-wide.
//! let cache = DocumentCache::global();
//!
//! match cache.get("invoices/template") {
//!     Ok(document) => println!("resolved <{}>", document.root_name()),
//!     Err(miss) => eprintln!("{miss}"),
//! }
//!
//! if let Some(stats) = cache.statistics() {
//!     println!("{stats}");
//! }
//! ```

pub mod engine;
pub mod error;
pub mod settings;
pub mod stats;

// Re-exports
pub use engine::DocumentCache;
pub use error::CacheError;
pub use settings::CacheSettings;
pub use stats::{CacheStatistics, LatencyAggregate, StatisticsSnapshot};

// Re-export the lower layers for consumers
pub use strata_core;
pub use strata_sources;
