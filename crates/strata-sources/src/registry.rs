//! Source registry: turns configuration into a live, ordered source list.

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, error, info};

use strata_core::Configuration;

use crate::file::FileSource;
use crate::source::DocumentSource;

/// Implementation identifier of the built-in file source.
pub const FILE_KIND: &str = "file";

/// Prefix shared by all source configuration keys.
const SOURCE_PREFIX: &str = "source.";

/// Factory producing a fresh, unconfigured source instance.
pub type SourceFactory = Box<dyn Fn() -> Box<dyn DocumentSource> + Send + Sync>;

/// A registry mapping implementation identifiers to source factories.
///
/// Configuration names each source's implementation by string
/// (`source.<id>.class=file`); the registry resolves that string to a
/// factory, instantiates the source and hands it its scoped
/// configuration. Hosts can register additional implementations before
/// building.
///
/// # Example
///
/// ```
/// use strata_core::Configuration;
/// use strata_sources::SourceRegistry;
///
/// let config = Configuration::from_properties(
///     "source.main.class=file\nsource.main.basedir=documents\n",
/// ).unwrap();
///
/// let sources = SourceRegistry::with_builtins().build(&config);
/// assert_eq!(sources.len(), 1);
/// assert_eq!(sources[0].name(), "main");
/// ```
#[derive(Default)]
pub struct SourceRegistry {
    factories: IndexMap<String, SourceFactory>,
}

impl SourceRegistry {
    /// Creates an empty registry with no known implementations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in implementations registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(FILE_KIND, || Box::new(FileSource::default()));
        registry
    }

    /// Registers a factory under an implementation identifier.
    ///
    /// Re-registering an identifier replaces the previous factory.
    pub fn register<F>(&mut self, kind: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn DocumentSource> + Send + Sync + 'static,
    {
        self.factories.insert(kind.into(), Box::new(factory));
    }

    /// Returns true if an implementation identifier is registered.
    pub fn contains(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    /// Returns the registered implementation identifiers.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Builds the ordered source list described by the configuration.
    ///
    /// Identifiers are discovered from `source.<id>.<rest>` keys in
    /// first-seen order; each id with a `source.<id>.class` entry is
    /// instantiated and configured. A failure to resolve or configure
    /// one source is logged and skipped; it never aborts the build.
    pub fn build(&self, config: &Configuration) -> Vec<Arc<dyn DocumentSource>> {
        let mut sources: Vec<Arc<dyn DocumentSource>> = Vec::new();

        for id in discover_source_ids(config) {
            let scope = format!("{SOURCE_PREFIX}{id}");

            let Some(kind) = config.scoped_get(&scope, "class") else {
                debug!(id, "source has no class entry, skipping");
                continue;
            };

            let Some(factory) = self.factories.get(kind) else {
                error!(id, kind, "unknown source implementation, skipping");
                continue;
            };

            let mut source = factory();
            match source.configure(config, &scope) {
                Ok(()) => {
                    info!(id, kind, "document source created");
                    sources.push(Arc::from(source));
                }
                Err(err) => {
                    error!(id, kind, error = %err, "failed to configure source, skipping");
                }
            }
        }

        sources
    }
}

/// Collects distinct `<id>` tokens from `source.<id>.<rest>` keys,
/// preserving first-seen order.
fn discover_source_ids(config: &Configuration) -> IndexSet<String> {
    let mut ids = IndexSet::new();

    for key in config.keys() {
        if let Some(rest) = key.strip_prefix(SOURCE_PREFIX) {
            if let Some((id, option)) = rest.split_once('.') {
                if !id.is_empty() && !option.is_empty() {
                    ids.insert(id.to_string());
                }
            }
        }
    }

    ids
}
