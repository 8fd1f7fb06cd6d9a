//! Flat key-value configuration backed by Java-style properties files.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// A flat configuration map of dotted string keys to string values.
///
/// This struct wraps an `IndexMap<String, String>` so iteration follows
/// insertion order, which in turn follows file order when loaded from a
/// properties file. Iteration order is load-bearing: the source registry
/// discovers source identifiers in the order their keys first appear.
///
/// Keys are case-sensitive and opaque; dotted prefixes (`source.main.`)
/// are a naming convention, not nesting.
///
/// # Example
///
/// ```
/// use strata_core::Configuration;
///
/// let config = Configuration::from_properties("cache.expiry = 5000").unwrap();
/// assert_eq!(config.get("cache.expiry"), Some("5000"));
/// assert_eq!(config.get_u64("cache.expiry", 30000), 5000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(flatten)]
    entries: IndexMap<String, String>,
}

impl Configuration {
    /// Creates a new empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from properties text.
    ///
    /// Supports the conventional `key=value` and `key: value` forms,
    /// `#` and `!` comment lines, and blank lines. A duplicate key keeps
    /// its first-seen position but takes the last value.
    pub fn from_properties(input: &str) -> Result<Self, ConfigError> {
        let mut entries = IndexMap::new();

        for (line_num, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            match split_property_line(line) {
                Some((key, value)) => {
                    entries.insert(key.trim().to_string(), value.trim().to_string());
                }
                None => {
                    return Err(ConfigError::parse(
                        "properties",
                        format!("Invalid syntax at line {}: missing separator", line_num + 1),
                    ));
                }
            }
        }

        Ok(Self { entries })
    }

    /// Loads configuration from a properties file on disk.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_properties(&text).map_err(|e| match e {
            ConfigError::Parse { message, .. } => {
                ConfigError::parse(path.display().to_string(), message)
            }
            other => other,
        })
    }

    /// Returns the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the value for `<scope>.<option>`, if present.
    ///
    /// Sources use this to read only the options under their assigned
    /// scope prefix.
    pub fn scoped_get(&self, scope: &str, option: &str) -> Option<&str> {
        self.entries
            .get(format!("{scope}.{option}").as_str())
            .map(String::as_str)
    }

    /// Returns an integer value, falling back to the default.
    ///
    /// A malformed value is logged and the default substituted; this is
    /// never a hard failure.
    pub fn get_u64(&self, key: &str, default: u64) -> u64 {
        match self.get(key) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(
                    key,
                    value = raw,
                    default,
                    "configuration value is not a valid integer, using default"
                );
                default
            }),
            None => default,
        }
    }

    /// Returns a boolean value, falling back to the default.
    ///
    /// Accepts `true`/`false` in any case. Anything else is logged and
    /// the default substituted.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => {
                    warn!(
                        key,
                        value = raw,
                        default,
                        "configuration value is not a valid boolean, using default"
                    );
                    default
                }
            },
            None => default,
        }
    }

    /// Inserts a key-value pair.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over key-value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if the configuration holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn split_property_line(line: &str) -> Option<(&str, &str)> {
    // Split on first '=' or ':'
    line.split_once(['=', ':'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_properties() {
        let input = "
        # Cache config
        cache.expiry=8080
        cache.statistics: true
        source.main.basedir = /var/xml
        ";

        let config = Configuration::from_properties(input).unwrap();

        assert_eq!(config.get("cache.expiry"), Some("8080"));
        assert_eq!(config.get("cache.statistics"), Some("true"));
        assert_eq!(config.get("source.main.basedir"), Some("/var/xml"));
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        let result = Configuration::from_properties("just-a-bare-word");

        let error = result.unwrap_err();
        assert!(format!("{}", error).contains("line 1"));
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let input = "# comment\n! also a comment\n\nkey=value\n";
        let config = Configuration::from_properties(input).unwrap();

        assert_eq!(config.len(), 1);
        assert_eq!(config.get("key"), Some("value"));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let input = "b=1\na=2\nc=3\n";
        let config = Configuration::from_properties(input).unwrap();

        let keys: Vec<&str> = config.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);

        let pairs: Vec<(&str, &str)> = config.iter().collect();
        assert_eq!(pairs[0], ("b", "1"));
    }

    #[test]
    fn test_duplicate_key_last_value_wins() {
        let config = Configuration::from_properties("k=first\nk=second\n").unwrap();

        assert_eq!(config.len(), 1);
        assert_eq!(config.get("k"), Some("second"));
    }

    #[test]
    fn test_get_u64_fallback() {
        let config = Configuration::from_properties("good=42\nbad=forty-two\n").unwrap();

        assert_eq!(config.get_u64("good", 7), 42);
        assert_eq!(config.get_u64("bad", 7), 7);
        assert_eq!(config.get_u64("absent", 7), 7);
    }

    #[test]
    fn test_get_bool_fallback() {
        let config = Configuration::from_properties("on=TRUE\noff=false\nodd=yes\n").unwrap();

        assert!(config.get_bool("on", false));
        assert!(!config.get_bool("off", true));
        assert!(config.get_bool("odd", true));
        assert!(!config.get_bool("absent", false));
    }

    #[test]
    fn test_scoped_get() {
        let config =
            Configuration::from_properties("source.main.basedir=data\nsource.alt.basedir=alt\n")
                .unwrap();

        assert_eq!(config.scoped_get("source.main", "basedir"), Some("data"));
        assert_eq!(config.scoped_get("source.alt", "basedir"), Some("alt"));
        assert_eq!(config.scoped_get("source.main", "extension"), None);
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strata.properties");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "cache.expiry=1000").unwrap();

        let config = Configuration::load_file(&path).unwrap();
        assert_eq!(config.get("cache.expiry"), Some("1000"));
    }

    #[test]
    fn test_load_file_missing() {
        let error = Configuration::load_file(Path::new("/nonexistent/strata.properties"))
            .unwrap_err();

        assert!(error.is_not_found());
    }

    #[test]
    fn test_serialize_to_json() {
        let mut config = Configuration::new();
        config.insert("cache.expiry", "30000");

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("cache.expiry"));

        let back: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
