//! # owl2-ontology
//!
//! An in-memory OWL 2 ontology model with type-dispatched queries,
//! subgraph extraction, and Functional Syntax round-tripping.
//!
//! ## Features
//!
//! - **Structural data model**: entities, literals, recursive class
//!   expressions and data ranges, and every OWL 2 axiom kind as an
//!   immutable record with annotations
//! - **Indexed ontology store**: insertion-ordered axioms with
//!   type-dispatched queries and declaration-derived entity sets
//! - **Filtering engine**: class-membership selection, k-hop
//!   neighborhoods, shortest-path extraction, seeded sampling, and
//!   composable criteria that produce new ontologies sharing axiom
//!   records with the source
//! - **Functional Syntax round-trip** plus best-effort RDF/XML
//!   exchange
//!
//! ## Quick start
//!
//! ```rust
//! use owl2_ontology::{Class, DeclarationAxiom, Ontology, SubClassOfAxiom};
//!
//! let mut ontology = Ontology::with_iri("http://example.org/family");
//! ontology.register_prefix("fam", "http://example.org/family#");
//!
//! let person = Class::new("http://example.org/family#Person");
//! let parent = Class::new("http://example.org/family#Parent");
//! ontology.add_axiom(DeclarationAxiom::new(person.clone()));
//! ontology.add_axiom(DeclarationAxiom::new(parent.clone()));
//! ontology.add_axiom(SubClassOfAxiom::new(parent.into(), person.into()));
//!
//! assert_eq!(ontology.class_count(), 2);
//! assert_eq!(ontology.axiom_count(), 3);
//! let text = ontology.to_functional_syntax();
//! assert!(text.contains("SubClassOf(<http://example.org/family#Parent> \
//!                        <http://example.org/family#Person>)"));
//! ```
//!
//! ## Concurrency
//!
//! Read operations on one ontology are safe from multiple threads as
//! long as no mutating operation overlaps; mutations require
//! exclusive access. The filter engine is synchronous and CPU-bound
//! and never mutates its source.

/// Error types and the `OwlResult` alias
pub mod error;

/// IRI identity primitive with namespace/prefix decomposition
pub mod iri;

/// Well-known namespaces, XSD datatype IRIs, and facet IRIs
pub mod constants;

/// Entities, literals, and annotations
pub mod entities;

/// Axioms, class expressions, and data ranges
pub mod axioms;

/// Ontology store and query surface
pub mod ontology;

/// Filtering and subgraph extraction
pub mod filter;

/// Parsers for the supported input formats
pub mod parser;

/// Serializers for the supported output formats
pub mod serializer;

pub use axioms::*;
pub use entities::*;
pub use error::{OwlError, OwlResult};
pub use filter::{AxiomPredicate, FilterCriteria, FilterResult, OntologyFilter};
pub use iri::IRI;
pub use ontology::Ontology;
pub use parser::{
    FunctionalSyntaxParser, ManchesterSyntaxParser, OntologyParser, OwlXmlParser, ParserFactory,
    RdfXmlParser,
};
pub use serializer::{
    FunctionalSyntaxSerializer, ManchesterSyntaxSerializer, OntologySerializer, OwlXmlSerializer,
    RdfXmlSerializer, SerializerFactory,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
