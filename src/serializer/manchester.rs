//! Manchester Syntax serializer placeholder

use super::OntologySerializer;
use crate::error::{OwlError, OwlResult};
use crate::ontology::Ontology;

/// Placeholder serializer for Manchester Syntax
///
/// Manchester Syntax output is not implemented; every call fails with
/// [`OwlError::UnsupportedFormat`].
pub struct ManchesterSyntaxSerializer;

impl ManchesterSyntaxSerializer {
    /// Create the placeholder serializer
    pub fn new() -> Self {
        ManchesterSyntaxSerializer
    }
}

impl Default for ManchesterSyntaxSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl OntologySerializer for ManchesterSyntaxSerializer {
    fn serialize(&self, _ontology: &Ontology) -> OwlResult<String> {
        Err(OwlError::UnsupportedFormat(
            "Manchester Syntax serialization is not implemented".to_string(),
        ))
    }

    fn format_name(&self) -> &'static str {
        "Manchester Syntax"
    }
}
