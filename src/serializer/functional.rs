//! OWL2 Functional Syntax serializer
//!
//! Thin entry point over [`Ontology::to_functional_syntax`], which
//! owns the formatting rules. Exists so callers can treat all output
//! formats uniformly through [`OntologySerializer`].

use super::OntologySerializer;
use crate::error::OwlResult;
use crate::ontology::Ontology;

/// Serializer for OWL2 Functional Syntax
pub struct FunctionalSyntaxSerializer {
    indent: String,
}

impl FunctionalSyntaxSerializer {
    /// Create a serializer with the default four-space indent
    pub fn new() -> Self {
        Self::with_indent("    ")
    }

    /// Create a serializer with a custom indent string
    pub fn with_indent<S: Into<String>>(indent: S) -> Self {
        FunctionalSyntaxSerializer {
            indent: indent.into(),
        }
    }
}

impl Default for FunctionalSyntaxSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl OntologySerializer for FunctionalSyntaxSerializer {
    fn serialize(&self, ontology: &Ontology) -> OwlResult<String> {
        Ok(ontology.to_functional_syntax_indented(&self.indent))
    }

    fn format_name(&self) -> &'static str {
        "OWL Functional Syntax"
    }
}
