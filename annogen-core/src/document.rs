// annogen-core/src/document.rs
// ============================================================================
// Module: Annotation Documents
// Description: Owned handles for parsed annotation XML documents.
// Purpose: Give the configuration and generation layers a parsed, opaque
//          document representation independent of its on-disk origin.
// Dependencies: xmltree, thiserror
// ============================================================================

//! ## Overview
//! An [`AnnotationDocument`] is an annotation XML document that has already
//! been parsed into an owned element tree. Callers parse once, then hand the
//! handle to the configuration layer; no re-parsing happens downstream.
//! Document inputs are untrusted and parse failures surface as typed errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;

use thiserror::Error;
use xmltree::Element;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while parsing an annotation document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The input was not well-formed XML.
    #[error("annotation xml parse error: {0}")]
    Parse(String),
}

// ============================================================================
// SECTION: Annotation Documents
// ============================================================================

/// An owned, already-parsed annotation XML document.
///
/// The tree is opaque to the configuration layer; the generation pipeline
/// mines it for member comments once generation starts.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationDocument {
    /// Root element of the parsed document.
    root: Element,
}

impl AnnotationDocument {
    /// Parses an annotation document from a UTF-8 XML string.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Parse`] when the input is not well-formed XML.
    pub fn parse_str(text: &str) -> Result<Self, DocumentError> {
        Self::from_reader(text.as_bytes())
    }

    /// Parses an annotation document from a byte reader.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Parse`] when the input is not well-formed XML.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DocumentError> {
        let root = Element::parse(reader).map_err(|err| DocumentError::Parse(err.to_string()))?;
        Ok(Self { root })
    }

    /// Returns the root element of the parsed document.
    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Returns the name of the document's root element.
    #[must_use]
    pub fn root_name(&self) -> &str {
        &self.root.name
    }

    /// Consumes the handle and returns the owned root element.
    #[must_use]
    pub fn into_root(self) -> Element {
        self.root
    }
}

impl From<Element> for AnnotationDocument {
    fn from(root: Element) -> Self {
        Self { root }
    }
}
