//! OWL/XML serializer placeholder

use super::OntologySerializer;
use crate::error::{OwlError, OwlResult};
use crate::ontology::Ontology;

/// Placeholder serializer for OWL/XML
///
/// OWL/XML output is not implemented; every call fails with
/// [`OwlError::UnsupportedFormat`].
pub struct OwlXmlSerializer;

impl OwlXmlSerializer {
    /// Create the placeholder serializer
    pub fn new() -> Self {
        OwlXmlSerializer
    }
}

impl Default for OwlXmlSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl OntologySerializer for OwlXmlSerializer {
    fn serialize(&self, _ontology: &Ontology) -> OwlResult<String> {
        Err(OwlError::UnsupportedFormat(
            "OWL/XML serialization is not implemented".to_string(),
        ))
    }

    fn format_name(&self) -> &'static str {
        "OWL/XML"
    }
}
