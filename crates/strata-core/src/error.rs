//! Error types for the Strata core crate.
//!
//! Two error families live here: `DocumentError` for XML parsing and
//! serialization, and `ConfigError` for configuration loading. Both
//! implement the standard `std::error::Error` trait via `thiserror`.
//!
//! Configuration problems are normally recovered close to where they
//! occur (log, substitute a default, continue); only operations that
//! have no sensible fallback return these errors to the caller.

use std::io;
use thiserror::Error;

/// Errors produced while parsing or serializing XML documents.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The content was not well-formed XML.
    #[error("malformed XML in '{source_name}': {message}")]
    Parse {
        /// Where the content came from (file path or "<string>").
        source_name: String,
        /// Description of the parse failure.
        message: String,
    },

    /// Writing a document back out as XML text failed.
    #[error("failed to serialize document: {message}")]
    Serialize {
        /// Description of the writer failure.
        message: String,
    },

    /// An I/O error occurred while reading document content.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl DocumentError {
    /// Creates a Parse error.
    pub fn parse(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Creates a Serialize error.
    pub fn serialize(message: impl Into<String>) -> Self {
        Self::Serialize {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates malformed content.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Returns true if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

/// Errors produced while loading or reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A line in a properties file had no `=` or `:` separator.
    #[error("failed to parse '{source_name}': {message}")]
    Parse {
        /// Where the content came from (file path or "<string>").
        source_name: String,
        /// Description of the parse failure.
        message: String,
    },

    /// A configuration value could not be interpreted as the expected type.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue {
        /// The offending configuration key.
        key: String,
        /// Why the value was rejected.
        message: String,
    },

    /// An I/O error occurred while reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ConfigError {
    /// Creates a Parse error.
    pub fn parse(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Creates an InvalidValue error.
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Returns true if the underlying cause is a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_parse_display() {
        let error = DocumentError::parse("book.xml", "unexpected end of stream");
        let msg = format!("{}", error);

        assert!(msg.contains("book.xml"));
        assert!(msg.contains("unexpected end of stream"));
        assert!(error.is_parse());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: DocumentError = io_error.into();

        assert!(error.is_io());
        assert!(!error.is_parse());
    }

    #[test]
    fn test_config_error_not_found() {
        let missing: ConfigError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        let denied: ConfigError = io::Error::new(io::ErrorKind::PermissionDenied, "no").into();

        assert!(missing.is_not_found());
        assert!(!denied.is_not_found());
    }

    #[test]
    fn test_invalid_value_display() {
        let error = ConfigError::invalid_value("cache.expiry", "not an integer");
        assert!(format!("{}", error).contains("cache.expiry"));
    }
}
