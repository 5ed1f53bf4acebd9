//! Serializers for OWL2 ontology formats
//!
//! The Functional Syntax writer is the authoritative output form;
//! RDF/XML is a best-effort exchange mapping. Manchester Syntax and
//! OWL/XML are placeholders that fail explicitly.

pub mod functional;
pub mod manchester;
pub mod owl_xml;
pub mod rdf_xml;

pub use functional::FunctionalSyntaxSerializer;
pub use manchester::ManchesterSyntaxSerializer;
pub use owl_xml::OwlXmlSerializer;
pub use rdf_xml::RdfXmlSerializer;

use crate::error::OwlResult;
use crate::ontology::Ontology;
use std::path::Path;

/// Serializer trait for the supported output formats
pub trait OntologySerializer {
    /// Serialize an ontology to a string
    fn serialize(&self, ontology: &Ontology) -> OwlResult<String>;

    /// Serialize an ontology to a file
    fn serialize_to_file(&self, ontology: &Ontology, path: &Path) -> OwlResult<()> {
        let content = self.serialize(ontology)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the format name
    fn format_name(&self) -> &'static str;
}

/// Factory for creating serializers by file extension
pub struct SerializerFactory;

impl SerializerFactory {
    /// Create a serializer based on a file extension
    pub fn for_file_extension(ext: &str) -> Option<Box<dyn OntologySerializer>> {
        match ext.to_lowercase().as_str() {
            "ofn" | "owl" => Some(Box::new(FunctionalSyntaxSerializer::new())),
            "rdf" | "rdfs" | "xml" => Some(Box::new(RdfXmlSerializer::new())),
            "omn" => Some(Box::new(ManchesterSyntaxSerializer::new())),
            "owx" => Some(Box::new(OwlXmlSerializer::new())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_extensions() {
        assert_eq!(
            SerializerFactory::for_file_extension("ofn").map(|s| s.format_name()),
            Some("OWL Functional Syntax")
        );
        assert_eq!(
            SerializerFactory::for_file_extension("RDF").map(|s| s.format_name()),
            Some("RDF/XML")
        );
        assert!(SerializerFactory::for_file_extension("json").is_none());
    }

    #[test]
    fn test_placeholders_fail_explicitly() {
        let ontology = Ontology::new();
        assert!(ManchesterSyntaxSerializer::new().serialize(&ontology).is_err());
        assert!(OwlXmlSerializer::new().serialize(&ontology).is_err());
    }
}
