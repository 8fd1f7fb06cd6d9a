//! The document cache engine.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::{debug, trace};

use strata_core::{Configuration, Document};
use strata_sources::{DocumentSource, SourceRegistry};

use crate::error::CacheError;
use crate::settings::{self, CacheSettings};
use crate::stats::{CacheStatistics, StatisticsSnapshot};

/// An entry in the cache. Immutable once created; a later refetch for
/// the same key replaces it wholesale.
#[derive(Debug, Clone)]
struct CacheEntry {
    document: Arc<Document>,
    inserted_at: Instant,
}

/// An expiring, in-memory document cache backed by an ordered list of
/// document sources.
///
/// A lookup serves a live cached entry, or else queries the sources in
/// registration order and caches the first document found. Entries
/// expire passively: staleness is checked on access, and a stale entry
/// is replaced (never merged, never served) by the next successful
/// refetch. There is no background sweep, so entries for keys that are
/// never revisited stay in memory; the intended workload is a bounded,
/// slowly-changing key set.
///
/// All methods take `&self`; a single instance is meant to be shared
/// across threads, either behind your own `Arc` or via
/// [`DocumentCache::global`].
///
/// # Example
///
/// ```no_run
/// use strata_cache::DocumentCache;
///
/// let cache = DocumentCache::from_env();
/// match cache.get("orders/cancel") {
///     Ok(document) => println!("root element: {}", document.root_name()),
///     Err(miss) => eprintln!("{miss}"),
/// }
/// ```
pub struct DocumentCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    sources: RwLock<Vec<Arc<dyn DocumentSource>>>,
    expiry: Duration,
    statistics: Option<CacheStatistics>,
}

impl DocumentCache {
    /// Creates an empty cache with no sources.
    pub fn new(settings: CacheSettings) -> Self {
        Self::with_sources(settings, Vec::new())
    }

    /// Creates a cache over an already-built source list.
    pub fn with_sources(settings: CacheSettings, sources: Vec<Arc<dyn DocumentSource>>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            sources: RwLock::new(sources),
            expiry: settings.expiry,
            statistics: settings.statistics.then(CacheStatistics::new),
        }
    }

    /// Creates a cache from a configuration map, building its source
    /// list through the given registry.
    pub fn from_config(config: &Configuration, registry: &SourceRegistry) -> Self {
        Self::with_sources(CacheSettings::from_config(config), registry.build(config))
    }

    /// Performs the full bootstrap: loads the properties file named by
    /// `STRATA_CONFIG` (or the built-in defaults) and builds the
    /// source list with the built-in registry.
    pub fn from_env() -> Self {
        let config = settings::load_configuration();
        Self::from_config(&config, &SourceRegistry::with_builtins())
    }

    /// Returns the process-wide shared cache instance.
    ///
    /// The instance is built with [`DocumentCache::from_env`] on first
    /// access and lives for the remainder of the process. Hosts that
    /// prefer explicit dependency injection can ignore this and share
    /// an instance of their own.
    pub fn global() -> &'static DocumentCache {
        static GLOBAL: OnceLock<DocumentCache> = OnceLock::new();
        GLOBAL.get_or_init(DocumentCache::from_env)
    }

    /// Fetches the document identified by `key`.
    ///
    /// A live cached entry is a hit. Otherwise the sources are queried
    /// front to back; the first document found is cached (replacing any
    /// prior entry for the key, expired or not) and returned.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Miss`] when no source can resolve the key.
    /// A failed lookup leaves the cache exactly as it was: nothing is
    /// cached for the key, and a surviving stale entry stays in place
    /// (though it is never served).
    pub fn get(&self, key: &str) -> Result<Arc<Document>, CacheError> {
        let started = self.statistics.as_ref().map(|_| Instant::now());

        if let Some(document) = self.lookup_live(key) {
            debug!(key, "cache hit");
            if let (Some(stats), Some(started)) = (&self.statistics, started) {
                stats.record_hit(started.elapsed());
            }
            return Ok(document);
        }

        match self.search_sources(key) {
            Some(document) => {
                let document = Arc::new(document);
                let entry = CacheEntry {
                    document: Arc::clone(&document),
                    inserted_at: Instant::now(),
                };
                self.entries.write().insert(key.to_string(), entry);
                debug!(key, "cache miss, document cached");
                if let (Some(stats), Some(started)) = (&self.statistics, started) {
                    stats.record_miss(started.elapsed());
                }
                Ok(document)
            }
            None => {
                debug!(key, "no source could resolve key");
                Err(CacheError::miss(key))
            }
        }
    }

    /// Returns the cached document if its entry is still live.
    fn lookup_live(&self, key: &str) -> Option<Arc<Document>> {
        let entries = self.entries.read();
        let entry = entries.get(key)?;
        (entry.inserted_at.elapsed() < self.expiry).then(|| Arc::clone(&entry.document))
    }

    /// Searches the sources in registration order for the first match.
    ///
    /// Iterates over a snapshot of the list, so a concurrent add or
    /// remove never affects a lookup already in flight.
    fn search_sources(&self, key: &str) -> Option<Document> {
        let sources: Vec<Arc<dyn DocumentSource>> = self.sources.read().clone();
        trace!(key, sources = sources.len(), "searching sources");

        for source in &sources {
            trace!(key, source = source.name(), "querying source");
            if let Some(document) = source.read_source(key) {
                debug!(key, source = source.name(), "document found in source");
                return Some(document);
            }
        }

        None
    }

    /// Appends a source at the end of the search order.
    pub fn add_source(&self, source: Arc<dyn DocumentSource>) {
        debug!(source = source.name(), "source added");
        self.sources.write().push(source);
    }

    /// Removes all sources with the given name.
    ///
    /// Returns true if anything was removed. Entries already cached
    /// through the removed source are not invalidated.
    pub fn remove_source(&self, name: &str) -> bool {
        let mut sources = self.sources.write();
        let before = sources.len();
        sources.retain(|source| source.name() != name);
        let removed = sources.len() != before;
        if removed {
            debug!(source = name, "source removed");
        }
        removed
    }

    /// Returns the names of the registered sources, in search order.
    pub fn source_names(&self) -> Vec<String> {
        self.sources
            .read()
            .iter()
            .map(|source| source.name().to_string())
            .collect()
    }

    /// Returns the number of entries currently held, live or stale.
    pub fn entry_count(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns the configured entry expiry.
    pub fn expiry(&self) -> Duration {
        self.expiry
    }

    /// Returns a statistics snapshot, or `None` when collection is
    /// disabled.
    pub fn statistics(&self) -> Option<StatisticsSnapshot> {
        self.statistics.as_ref().map(CacheStatistics::snapshot)
    }

    /// Zeroes the statistics aggregates. A no-op when collection is
    /// disabled.
    pub fn reset_statistics(&self) {
        if let Some(stats) = &self.statistics {
            stats.reset();
        }
    }
}
