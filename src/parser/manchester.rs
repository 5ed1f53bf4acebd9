//! Manchester Syntax parser placeholder

use super::OntologyParser;
use crate::error::{OwlError, OwlResult};
use crate::ontology::Ontology;

/// Placeholder parser for Manchester Syntax
///
/// Manchester Syntax input is not implemented; every call fails with
/// [`OwlError::UnsupportedFormat`].
pub struct ManchesterSyntaxParser;

impl ManchesterSyntaxParser {
    /// Create the placeholder parser
    pub fn new() -> Self {
        ManchesterSyntaxParser
    }
}

impl Default for ManchesterSyntaxParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OntologyParser for ManchesterSyntaxParser {
    fn parse_str(&self, _content: &str) -> OwlResult<Ontology> {
        Err(OwlError::UnsupportedFormat(
            "Manchester Syntax parsing is not implemented".to_string(),
        ))
    }

    fn format_name(&self) -> &'static str {
        "Manchester Syntax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fails_explicitly() {
        let err = ManchesterSyntaxParser::new().parse_str("Class: Person").unwrap_err();
        assert!(matches!(err, OwlError::UnsupportedFormat(_)));
    }
}
