//! Parsers for OWL2 ontology formats
//!
//! The Functional Syntax parser is the authoritative input form;
//! RDF/XML is a best-effort exchange reader. Manchester Syntax and
//! OWL/XML are placeholders that fail explicitly.

pub mod functional;
pub mod manchester;
pub mod owl_xml;
pub mod rdf_xml;

pub use functional::FunctionalSyntaxParser;
pub use manchester::ManchesterSyntaxParser;
pub use owl_xml::OwlXmlParser;
pub use rdf_xml::RdfXmlParser;

use crate::error::OwlResult;
use crate::ontology::Ontology;
use std::path::Path;

/// Parser trait for the supported input formats
pub trait OntologyParser {
    /// Parse an ontology from a string
    fn parse_str(&self, content: &str) -> OwlResult<Ontology>;

    /// Parse an ontology from a file
    fn parse_file(&self, path: &Path) -> OwlResult<Ontology> {
        let content = std::fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Get the format name
    fn format_name(&self) -> &'static str;
}

/// Factory for creating parsers by file extension or content sniffing
pub struct ParserFactory;

impl ParserFactory {
    /// Create a parser based on a file extension
    pub fn for_file_extension(ext: &str) -> Option<Box<dyn OntologyParser>> {
        match ext.to_lowercase().as_str() {
            "ofn" | "owl" => Some(Box::new(FunctionalSyntaxParser::new())),
            "rdf" | "rdfs" | "xml" => Some(Box::new(RdfXmlParser::new())),
            "omn" => Some(Box::new(ManchesterSyntaxParser::new())),
            "owx" => Some(Box::new(OwlXmlParser::new())),
            _ => None,
        }
    }

    /// Auto-detect the format from the document head
    pub fn auto_detect(content: &str) -> Option<Box<dyn OntologyParser>> {
        let head = content.trim_start();
        if head.starts_with("Prefix(") || head.starts_with("Ontology(") {
            Some(Box::new(FunctionalSyntaxParser::new()))
        } else if head.starts_with("<rdf:RDF")
            || (head.starts_with("<?xml") && content.contains("<rdf:RDF"))
        {
            Some(Box::new(RdfXmlParser::new()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_extensions() {
        assert_eq!(
            ParserFactory::for_file_extension("ofn").map(|p| p.format_name()),
            Some("OWL Functional Syntax")
        );
        assert_eq!(
            ParserFactory::for_file_extension("RDF").map(|p| p.format_name()),
            Some("RDF/XML")
        );
        assert!(ParserFactory::for_file_extension("ttl").is_none());
    }

    #[test]
    fn test_auto_detect() {
        let functional = "Prefix(ex:=<http://example.org/u#>)\nOntology(<http://example.org/u>\n)";
        assert_eq!(
            ParserFactory::auto_detect(functional).map(|p| p.format_name()),
            Some("OWL Functional Syntax")
        );

        let rdf = "<?xml version=\"1.0\"?>\n<rdf:RDF xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\"></rdf:RDF>";
        assert_eq!(
            ParserFactory::auto_detect(rdf).map(|p| p.format_name()),
            Some("RDF/XML")
        );

        assert!(ParserFactory::auto_detect("@prefix ex: <http://example.org/> .").is_none());
    }
}
