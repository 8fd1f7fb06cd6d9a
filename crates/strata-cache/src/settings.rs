//! Cache configuration resolution.

use std::path::Path;
use std::time::Duration;

use tracing::{error, info};

use strata_core::Configuration;
use strata_sources::file;

/// Configuration key for the entry expiry, in milliseconds.
pub const CFGKEY_CACHE_EXPIRY: &str = "cache.expiry";

/// Configuration key toggling statistics collection.
pub const CFGKEY_CACHE_STATISTICS: &str = "cache.statistics";

/// Environment variable naming the properties file to load.
pub const CONFIG_PATH_ENV: &str = "STRATA_CONFIG";

/// Properties file consulted when the environment variable is unset.
pub const DEFAULT_CONFIG_FILE: &str = "strata.properties";

/// Default entry expiry in milliseconds.
pub const DEFAULT_EXPIRY_MS: u64 = 30_000;

/// Resolved cache settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSettings {
    /// Maximum entry age before it must be revalidated against sources.
    pub expiry: Duration,
    /// Whether hit/miss statistics are collected. When off, the engine
    /// skips timing entirely rather than discarding measurements.
    pub statistics: bool,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            expiry: Duration::from_millis(DEFAULT_EXPIRY_MS),
            statistics: true,
        }
    }
}

impl CacheSettings {
    /// Resolves settings from a configuration map.
    ///
    /// Malformed values are logged and replaced with the defaults;
    /// resolution never fails.
    pub fn from_config(config: &Configuration) -> Self {
        let expiry_ms = config.get_u64(CFGKEY_CACHE_EXPIRY, DEFAULT_EXPIRY_MS);
        let statistics = config.get_bool(CFGKEY_CACHE_STATISTICS, true);

        info!(expiry_ms, statistics, "cache settings resolved");

        Self {
            expiry: Duration::from_millis(expiry_ms),
            statistics,
        }
    }

    /// Sets the expiry, chained.
    pub fn with_expiry(mut self, expiry: Duration) -> Self {
        self.expiry = expiry;
        self
    }

    /// Toggles statistics collection, chained.
    pub fn with_statistics(mut self, statistics: bool) -> Self {
        self.statistics = statistics;
        self
    }
}

/// Returns the built-in configuration used when no file is available.
///
/// Seeds a single file source reading the conventional directory, so a
/// bare process still resolves documents the standard way.
pub fn default_configuration() -> Configuration {
    let mut config = Configuration::new();
    config.insert("source.file.class", strata_sources::FILE_KIND);
    config.insert("source.file.basedir", file::DEFAULT_BASEDIR);
    config.insert(CFGKEY_CACHE_EXPIRY, DEFAULT_EXPIRY_MS.to_string());
    config.insert(CFGKEY_CACHE_STATISTICS, "true");
    config
}

/// Loads the process configuration from the conventional location.
///
/// The path comes from the `STRATA_CONFIG` environment variable,
/// falling back to `strata.properties` in the working directory. A
/// missing file is normal and logged at info; an unreadable or
/// malformed file is logged at error. Both cases fall back to the
/// built-in defaults.
pub fn load_configuration() -> Configuration {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

    match Configuration::load_file(Path::new(&path)) {
        Ok(config) => {
            info!(path, "loaded cache configuration");
            config
        }
        Err(err) if err.is_not_found() => {
            info!(path, "no configuration file found, using built-in defaults");
            default_configuration()
        }
        Err(err) => {
            error!(path, error = %err, "error reading configuration file, using built-in defaults");
            default_configuration()
        }
    }
}
