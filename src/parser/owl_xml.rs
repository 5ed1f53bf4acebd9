//! OWL/XML parser placeholder

use super::OntologyParser;
use crate::error::{OwlError, OwlResult};
use crate::ontology::Ontology;

/// Placeholder parser for OWL/XML
///
/// OWL/XML input is not implemented; every call fails with
/// [`OwlError::UnsupportedFormat`].
pub struct OwlXmlParser;

impl OwlXmlParser {
    /// Create the placeholder parser
    pub fn new() -> Self {
        OwlXmlParser
    }
}

impl Default for OwlXmlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OntologyParser for OwlXmlParser {
    fn parse_str(&self, _content: &str) -> OwlResult<Ontology> {
        Err(OwlError::UnsupportedFormat(
            "OWL/XML parsing is not implemented".to_string(),
        ))
    }

    fn format_name(&self) -> &'static str {
        "OWL/XML"
    }
}
