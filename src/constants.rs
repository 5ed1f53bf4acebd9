//! Well-known namespaces, datatype IRIs, and facet IRIs

use crate::iri::IRI;
use once_cell::sync::Lazy;

/// OWL namespace
pub const OWL_NS: &str = "http://www.w3.org/2002/07/owl#";
/// RDF namespace
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDFS namespace
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// XSD namespace
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

/// `rdf:type` predicate IRI
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdfs:subClassOf` predicate IRI
pub const RDFS_SUBCLASSOF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";

/// Common XSD datatype IRIs, available by name
pub mod xsd {
    use super::*;

    pub static STRING: Lazy<IRI> = Lazy::new(|| IRI::new_unchecked(format!("{XSD_NS}string")));
    pub static INTEGER: Lazy<IRI> = Lazy::new(|| IRI::new_unchecked(format!("{XSD_NS}integer")));
    pub static INT: Lazy<IRI> = Lazy::new(|| IRI::new_unchecked(format!("{XSD_NS}int")));
    pub static LONG: Lazy<IRI> = Lazy::new(|| IRI::new_unchecked(format!("{XSD_NS}long")));
    pub static DOUBLE: Lazy<IRI> = Lazy::new(|| IRI::new_unchecked(format!("{XSD_NS}double")));
    pub static FLOAT: Lazy<IRI> = Lazy::new(|| IRI::new_unchecked(format!("{XSD_NS}float")));
    pub static BOOLEAN: Lazy<IRI> = Lazy::new(|| IRI::new_unchecked(format!("{XSD_NS}boolean")));
    pub static DATE_TIME: Lazy<IRI> = Lazy::new(|| IRI::new_unchecked(format!("{XSD_NS}dateTime")));
    pub static DATE: Lazy<IRI> = Lazy::new(|| IRI::new_unchecked(format!("{XSD_NS}date")));
}

/// Constraining facet IRIs for datatype restrictions
pub mod facets {
    use super::*;

    pub static MIN_INCLUSIVE: Lazy<IRI> =
        Lazy::new(|| IRI::new_unchecked(format!("{XSD_NS}minInclusive")));
    pub static MAX_INCLUSIVE: Lazy<IRI> =
        Lazy::new(|| IRI::new_unchecked(format!("{XSD_NS}maxInclusive")));
    pub static MIN_EXCLUSIVE: Lazy<IRI> =
        Lazy::new(|| IRI::new_unchecked(format!("{XSD_NS}minExclusive")));
    pub static MAX_EXCLUSIVE: Lazy<IRI> =
        Lazy::new(|| IRI::new_unchecked(format!("{XSD_NS}maxExclusive")));
    pub static LENGTH: Lazy<IRI> = Lazy::new(|| IRI::new_unchecked(format!("{XSD_NS}length")));
    pub static MIN_LENGTH: Lazy<IRI> =
        Lazy::new(|| IRI::new_unchecked(format!("{XSD_NS}minLength")));
    pub static MAX_LENGTH: Lazy<IRI> =
        Lazy::new(|| IRI::new_unchecked(format!("{XSD_NS}maxLength")));
    pub static PATTERN: Lazy<IRI> = Lazy::new(|| IRI::new_unchecked(format!("{XSD_NS}pattern")));
}
