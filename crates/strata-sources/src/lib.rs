//! # Strata Sources
//!
//! Document backends for the Strata cache.
//!
//! This crate defines the `DocumentSource` trait the cache engine
//! searches, the file-backed implementation, and the `SourceRegistry`
//! that instantiates and configures sources from a flat configuration.
//!
//! ## Example
//!
//! ```no_run
//! use strata_core::Configuration;
//! use strata_sources::SourceRegistry;
//!
//! let config = Configuration::from_properties(
//!     "source.main.class=file\nsource.main.basedir=documents\n",
//! ).unwrap();
//!
//! let sources = SourceRegistry::with_builtins().build(&config);
//! for source in &sources {
//!     if let Some(doc) = source.read_source("greeting") {
//!         println!("{} resolved greeting: {}", source.name(), doc.root_name());
//!     }
//! }
//! ```

pub mod error;
pub mod file;
pub mod registry;
pub mod source;

// Re-exports
pub use error::SourceError;
pub use file::FileSource;
pub use registry::{FILE_KIND, SourceFactory, SourceRegistry};
pub use source::DocumentSource;

// Re-export strata_core for consumers
pub use strata_core;
