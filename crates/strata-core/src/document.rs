//! Parsed XML documents.

use std::fs;
use std::path::Path;

use xmltree::Element;

use crate::error::DocumentError;

/// An owned, parsed XML document.
///
/// This is the payload the cache stores and the sources produce. The
/// document is a full DOM tree, so equality is structural: two documents
/// parsed from the same bytes compare equal regardless of where they
/// were read from.
///
/// # Example
///
/// ```
/// use strata_core::Document;
///
/// let doc = Document::parse_str("<book><title>Dune</title></book>").unwrap();
/// assert_eq!(doc.root_name(), "book");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Parses a document from XML text.
    pub fn parse_str(text: &str) -> Result<Self, DocumentError> {
        let root = Element::parse(text.as_bytes())
            .map_err(|e| DocumentError::parse("<string>", e.to_string()))?;
        Ok(Self { root })
    }

    /// Parses a document from a file on disk.
    ///
    /// The file is read fully before parsing so that I/O failures and
    /// malformed content surface as distinct error variants.
    pub fn parse_file(path: &Path) -> Result<Self, DocumentError> {
        let text = fs::read_to_string(path)?;
        let root = Element::parse(text.as_bytes())
            .map_err(|e| DocumentError::parse(path.display().to_string(), e.to_string()))?;
        Ok(Self { root })
    }

    /// Wraps an already-built element tree.
    pub fn from_root(root: Element) -> Self {
        Self { root }
    }

    /// Returns the root element of the document.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Returns the name of the root element.
    pub fn root_name(&self) -> &str {
        &self.root.name
    }

    /// Serializes the document back to XML text.
    pub fn to_xml_string(&self) -> Result<String, DocumentError> {
        let mut buf = Vec::new();
        self.root
            .write(&mut buf)
            .map_err(|e| DocumentError::serialize(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| DocumentError::serialize(e.to_string()))
    }
}
