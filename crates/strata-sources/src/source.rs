//! Document source trait definition.

use strata_core::{Configuration, Document};

use crate::error::SourceError;

/// A backend capable of resolving a key to an XML document.
///
/// This trait abstracts over different document backends (filesystem,
/// database, HTTP, etc.) so the cache engine can search them without
/// knowing the underlying storage. Sources may perform I/O on every
/// `read_source` call; caching resolved documents is the engine's job,
/// not the source's.
///
/// # Implementors
///
/// - `FileSource` - Reads XML files from a base directory
///
/// # Example
///
/// ```
/// use strata_core::{Configuration, Document};
/// use strata_sources::{DocumentSource, SourceError};
///
/// #[derive(Debug)]
/// struct StaticSource;
///
/// impl DocumentSource for StaticSource {
///     fn read_source(&self, key: &str) -> Option<Document> {
///         (key == "greeting").then(|| Document::parse_str("<hello/>").unwrap())
///     }
///
///     fn configure(&mut self, _: &Configuration, _: &str) -> Result<(), SourceError> {
///         Ok(())
///     }
///
///     fn name(&self) -> &str {
///         "static"
///     }
/// }
/// ```
pub trait DocumentSource: Send + Sync {
    /// Searches this source for the document identified by `key`.
    ///
    /// Returns `None` when the key is unknown to this source. Not-found
    /// is an expected outcome, not an error. I/O or parse failures
    /// inside the source must be logged by the source itself and
    /// reported as `None`; they never propagate to the cache's callers.
    fn read_source(&self, key: &str) -> Option<Document>;

    /// Configures the source from its scoped configuration section.
    ///
    /// `scope` is the dotted prefix assigned to this instance (for
    /// example `source.main`). The source must read only keys under
    /// that prefix and apply its defaults for missing options.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Configuration` when the scoped options
    /// would produce an unusable source. The registry logs the error
    /// and drops the instance.
    fn configure(&mut self, config: &Configuration, scope: &str) -> Result<(), SourceError>;

    /// Returns the name of this source instance.
    ///
    /// Used for logging and for administrative removal by name. After
    /// `configure`, this is conventionally the `<id>` token of the
    /// configuration scope.
    fn name(&self) -> &str;
}
