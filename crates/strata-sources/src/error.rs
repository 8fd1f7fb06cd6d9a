//! Error types for document sources.

use thiserror::Error;

/// Errors that can occur while instantiating or configuring a source.
///
/// These never cross the cache lookup boundary: the registry logs them
/// and skips the offending source. Read-time failures inside a source
/// are not errors at all; they surface as "not found".
#[derive(Debug, Error)]
pub enum SourceError {
    /// The configured implementation identifier is not registered.
    #[error("unknown source implementation '{kind}' for source '{id}'")]
    UnknownKind {
        /// The source identifier from the configuration.
        id: String,
        /// The unrecognized implementation identifier.
        kind: String,
    },

    /// A source rejected its scoped configuration.
    #[error("invalid configuration under '{scope}': {message}")]
    Configuration {
        /// The dotted configuration prefix assigned to the source.
        scope: String,
        /// Why the configuration was rejected.
        message: String,
    },

    /// An I/O error occurred during source setup.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SourceError {
    /// Creates an UnknownKind error.
    pub fn unknown_kind(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnknownKind {
            id: id.into(),
            kind: kind.into(),
        }
    }

    /// Creates a Configuration error.
    pub fn configuration(scope: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            scope: scope.into(),
            message: message.into(),
        }
    }
}
