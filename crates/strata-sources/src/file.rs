//! File-backed document source.

use std::path::PathBuf;

use tracing::{debug, trace, warn};

use strata_core::{Configuration, Document};

use crate::error::SourceError;
use crate::source::DocumentSource;

/// Default base directory searched for documents.
pub const DEFAULT_BASEDIR: &str = "xmlcache";

/// Default file extension appended to keys.
pub const DEFAULT_EXTENSION: &str = "xml";

/// A document source that maps keys to XML files under a base directory.
///
/// A key resolves to `<basedir>/<key>.<extension>`. Forward slashes in
/// the key are preserved verbatim, so keys can address nested sub-paths:
/// the key `orders/cancel` resolves to `xmlcache/orders/cancel.xml` with
/// the defaults.
///
/// A missing file, a path that is not a regular file, and a file that
/// fails to parse all read as "not found"; the parse failure is logged
/// but never surfaced to the cache's callers.
#[derive(Debug, Clone)]
pub struct FileSource {
    name: String,
    basedir: PathBuf,
    extension: String,
}

impl FileSource {
    /// Creates a file source rooted at the given directory.
    pub fn new(basedir: impl Into<PathBuf>) -> Self {
        Self {
            basedir: basedir.into(),
            ..Self::default()
        }
    }

    /// Returns the base directory this source reads from.
    pub fn basedir(&self) -> &PathBuf {
        &self.basedir
    }

    /// Resolves the on-disk path for a key.
    fn resolve(&self, key: &str) -> PathBuf {
        self.basedir.join(format!("{key}.{}", self.extension))
    }
}

impl Default for FileSource {
    fn default() -> Self {
        Self {
            name: "file".to_string(),
            basedir: PathBuf::from(DEFAULT_BASEDIR),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl DocumentSource for FileSource {
    fn read_source(&self, key: &str) -> Option<Document> {
        let path = self.resolve(key);

        if !path.is_file() {
            trace!(key, path = %path.display(), source = self.name, "no file for key");
            return None;
        }

        match Document::parse_file(&path) {
            Ok(document) => {
                debug!(key, path = %path.display(), source = self.name, "read document");
                Some(document)
            }
            Err(error) => {
                warn!(
                    key,
                    path = %path.display(),
                    source = self.name,
                    %error,
                    "failed to read document, treating as not found"
                );
                None
            }
        }
    }

    fn configure(&mut self, config: &Configuration, scope: &str) -> Result<(), SourceError> {
        if let Some(dir) = config.scoped_get(scope, "basedir") {
            if dir.trim().is_empty() {
                return Err(SourceError::configuration(scope, "basedir must not be empty"));
            }
            self.basedir = PathBuf::from(dir);
        }

        if let Some(ext) = config.scoped_get(scope, "extension") {
            let ext = ext.trim().trim_start_matches('.');
            if ext.is_empty() {
                return Err(SourceError::configuration(scope, "extension must not be empty"));
            }
            self.extension = ext.to_string();
        }

        // The instance takes the <id> token of its scope as its name.
        if let Some(id) = scope.rsplit('.').next() {
            self.name = id.to_string();
        }

        debug!(
            source = self.name,
            basedir = %self.basedir.display(),
            extension = self.extension,
            "file source configured"
        );

        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
