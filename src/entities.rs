//! OWL2 entities, literals, and annotations
//!
//! Defines the seven entity kinds of an ontology vocabulary, the
//! polymorphic individual position used by assertion axioms, typed
//! literal values, and the recursive annotation record.

use crate::constants::xsd;
use crate::iri::IRI;
use std::fmt;
use std::sync::Arc;

/// Escape a lexical form for quoted output in Functional Syntax
pub(crate) fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

macro_rules! named_entity {
    ($(#[$doc:meta])* $name:ident, $kind:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name {
            iri: Arc<IRI>,
        }

        impl $name {
            /// Create a new entity with the given IRI
            pub fn new<I: Into<IRI>>(iri: I) -> Self {
                $name {
                    iri: Arc::new(iri.into()),
                }
            }

            /// Get the IRI of this entity
            pub fn iri(&self) -> &IRI {
                &self.iri
            }

            /// Get the shared IRI handle
            pub fn shared_iri(&self) -> &Arc<IRI> {
                &self.iri
            }
        }

        impl From<$name> for Entity {
            fn from(entity: $name) -> Self {
                Entity::$kind(entity)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.iri)
            }
        }
    };
}

named_entity!(
    /// A named class in OWL2
    Class,
    Class
);
named_entity!(
    /// A datatype in OWL2
    Datatype,
    Datatype
);
named_entity!(
    /// An object property in OWL2
    ObjectProperty,
    ObjectProperty
);
named_entity!(
    /// A data property in OWL2
    DataProperty,
    DataProperty
);
named_entity!(
    /// An annotation property in OWL2
    AnnotationProperty,
    AnnotationProperty
);
named_entity!(
    /// A named individual in OWL2
    NamedIndividual,
    NamedIndividual
);

/// The kind tag of a named entity, as used in `Declaration` axioms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Class,
    Datatype,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    NamedIndividual,
}

impl EntityKind {
    /// The Functional-Syntax keyword for this kind
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Class => "Class",
            EntityKind::Datatype => "Datatype",
            EntityKind::ObjectProperty => "ObjectProperty",
            EntityKind::DataProperty => "DataProperty",
            EntityKind::AnnotationProperty => "AnnotationProperty",
            EntityKind::NamedIndividual => "NamedIndividual",
        }
    }
}

/// Any named entity
///
/// Two entities compare equal iff they have the same kind and the
/// same IRI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Entity {
    Class(Class),
    Datatype(Datatype),
    ObjectProperty(ObjectProperty),
    DataProperty(DataProperty),
    AnnotationProperty(AnnotationProperty),
    NamedIndividual(NamedIndividual),
}

impl Entity {
    /// Get the kind tag of this entity
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Class(_) => EntityKind::Class,
            Entity::Datatype(_) => EntityKind::Datatype,
            Entity::ObjectProperty(_) => EntityKind::ObjectProperty,
            Entity::DataProperty(_) => EntityKind::DataProperty,
            Entity::AnnotationProperty(_) => EntityKind::AnnotationProperty,
            Entity::NamedIndividual(_) => EntityKind::NamedIndividual,
        }
    }

    /// Get the IRI of this entity
    pub fn iri(&self) -> &IRI {
        match self {
            Entity::Class(e) => e.iri(),
            Entity::Datatype(e) => e.iri(),
            Entity::ObjectProperty(e) => e.iri(),
            Entity::DataProperty(e) => e.iri(),
            Entity::AnnotationProperty(e) => e.iri(),
            Entity::NamedIndividual(e) => e.iri(),
        }
    }
}

/// An anonymous individual (blank node), identified by its node ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnonymousIndividual {
    node_id: String,
}

impl AnonymousIndividual {
    /// Create a new anonymous individual with the given node ID
    pub fn new<S: Into<String>>(node_id: S) -> Self {
        AnonymousIndividual {
            node_id: node_id.into(),
        }
    }

    /// Get the node ID of this individual
    pub fn node_id(&self) -> &str {
        &self.node_id
    }
}

impl fmt::Display for AnonymousIndividual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.node_id)
    }
}

/// Any individual (named or anonymous)
///
/// Assertion axioms are polymorphic over this type; queries that take
/// a `NamedIndividual` ignore anonymous positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Individual {
    Named(NamedIndividual),
    Anonymous(AnonymousIndividual),
}

impl Individual {
    /// Get the IRI of this individual if it is named
    pub fn iri(&self) -> Option<&IRI> {
        match self {
            Individual::Named(named) => Some(named.iri()),
            Individual::Anonymous(_) => None,
        }
    }

    /// Get the node ID of this individual if it is anonymous
    pub fn node_id(&self) -> Option<&str> {
        match self {
            Individual::Named(_) => None,
            Individual::Anonymous(anon) => Some(anon.node_id()),
        }
    }

    /// Check whether this individual is the given named individual
    pub fn is_named(&self, individual: &NamedIndividual) -> bool {
        matches!(self, Individual::Named(named) if named.iri() == individual.iri())
    }

    /// Render this individual in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        match self {
            Individual::Named(named) => format!("<{}>", named.iri()),
            Individual::Anonymous(anon) => anon.to_string(),
        }
    }
}

impl From<NamedIndividual> for Individual {
    fn from(individual: NamedIndividual) -> Self {
        Individual::Named(individual)
    }
}

impl From<AnonymousIndividual> for Individual {
    fn from(individual: AnonymousIndividual) -> Self {
        Individual::Anonymous(individual)
    }
}

/// A literal value in OWL2
///
/// Carries at most one of a datatype IRI or a language tag. A plain
/// literal (neither) is implicitly an `xsd:string`, but compares
/// distinct from a literal explicitly typed as `xsd:string`: equality
/// is on the full (lexical form, datatype, language tag) tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    lexical_form: String,
    datatype: Option<IRI>,
    language_tag: Option<String>,
}

impl Literal {
    /// Create a plain literal
    pub fn simple<S: Into<String>>(value: S) -> Self {
        Literal {
            lexical_form: value.into(),
            datatype: None,
            language_tag: None,
        }
    }

    /// Create a typed literal
    pub fn typed<S: Into<String>, D: Into<IRI>>(value: S, datatype: D) -> Self {
        Literal {
            lexical_form: value.into(),
            datatype: Some(datatype.into()),
            language_tag: None,
        }
    }

    /// Create a language-tagged literal
    pub fn lang_tagged<S: Into<String>, L: Into<String>>(value: S, language: L) -> Self {
        Literal {
            lexical_form: value.into(),
            datatype: None,
            language_tag: Some(language.into()),
        }
    }

    /// Get the lexical form of the literal
    pub fn lexical_form(&self) -> &str {
        &self.lexical_form
    }

    /// Get the explicit datatype of the literal
    pub fn datatype(&self) -> Option<&IRI> {
        self.datatype.as_ref()
    }

    /// Get the effective datatype: the explicit one, or `xsd:string`
    /// for plain literals
    pub fn effective_datatype(&self) -> &IRI {
        self.datatype.as_ref().unwrap_or(&xsd::STRING)
    }

    /// Get the language tag of the literal
    pub fn language_tag(&self) -> Option<&str> {
        self.language_tag.as_deref()
    }

    /// Check if this is a typed literal
    pub fn is_typed(&self) -> bool {
        self.datatype.is_some()
    }

    /// Check if this literal carries a language tag
    pub fn has_language_tag(&self) -> bool {
        self.language_tag.is_some()
    }

    /// Check if this is a plain literal (no datatype, no language tag)
    pub fn is_plain(&self) -> bool {
        self.datatype.is_none() && self.language_tag.is_none()
    }

    /// Render this literal in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        let mut out = format!("\"{}\"", escape_literal(&self.lexical_form));
        if let Some(lang) = &self.language_tag {
            out.push('@');
            out.push_str(lang);
        } else if let Some(datatype) = &self.datatype {
            out.push_str("^^<");
            out.push_str(datatype.as_str());
            out.push('>');
        }
        out
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_functional_syntax())
    }
}

/// Annotation values in OWL2
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationValue {
    /// IRI reference
    Iri(IRI),
    /// Literal value
    Literal(Literal),
    /// Anonymous individual
    AnonymousIndividual(AnonymousIndividual),
}

impl AnnotationValue {
    /// Render this value in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        match self {
            AnnotationValue::Iri(iri) => format!("<{iri}>"),
            AnnotationValue::Literal(literal) => literal.to_functional_syntax(),
            AnnotationValue::AnonymousIndividual(anon) => anon.to_string(),
        }
    }
}

impl From<IRI> for AnnotationValue {
    fn from(iri: IRI) -> Self {
        AnnotationValue::Iri(iri)
    }
}

impl From<Literal> for AnnotationValue {
    fn from(literal: Literal) -> Self {
        AnnotationValue::Literal(literal)
    }
}

impl From<AnonymousIndividual> for AnnotationValue {
    fn from(anon: AnonymousIndividual) -> Self {
        AnnotationValue::AnonymousIndividual(anon)
    }
}

impl From<&str> for AnnotationValue {
    fn from(s: &str) -> Self {
        AnnotationValue::Literal(Literal::simple(s))
    }
}

impl From<String> for AnnotationValue {
    fn from(s: String) -> Self {
        AnnotationValue::Literal(Literal::simple(s))
    }
}

/// An annotation in OWL2
///
/// Annotations are recursive: an annotation may carry annotations of
/// its own, which are emitted before the property-value pair in
/// Functional Syntax.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation {
    property: AnnotationProperty,
    value: AnnotationValue,
    annotations: Vec<Annotation>,
}

impl Annotation {
    /// Create a new annotation
    pub fn new<V: Into<AnnotationValue>>(property: AnnotationProperty, value: V) -> Self {
        Annotation {
            property,
            value: value.into(),
            annotations: Vec::new(),
        }
    }

    /// Create a new annotation carrying nested annotations
    pub fn with_annotations<V: Into<AnnotationValue>>(
        property: AnnotationProperty,
        value: V,
        annotations: Vec<Annotation>,
    ) -> Self {
        Annotation {
            property,
            value: value.into(),
            annotations,
        }
    }

    /// Get the annotation property
    pub fn property(&self) -> &AnnotationProperty {
        &self.property
    }

    /// Get the annotation value
    pub fn value(&self) -> &AnnotationValue {
        &self.value
    }

    /// Get the nested annotations
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Check whether this annotation carries nested annotations
    pub fn has_annotations(&self) -> bool {
        !self.annotations.is_empty()
    }

    /// Render this annotation in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        let mut out = String::from("Annotation(");
        for nested in &self.annotations {
            out.push_str(&nested.to_functional_syntax());
            out.push(' ');
        }
        out.push('<');
        out.push_str(self.property.iri().as_str());
        out.push_str("> ");
        out.push_str(&self.value.to_functional_syntax());
        out.push(')');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_identity() {
        let a = Class::new("http://example.org/Person");
        let b = Class::new("http://example.org/Person");
        let c = Class::new("http://example.org/Student");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_entity_kinds_distinct() {
        let class: Entity = Class::new("http://example.org/X").into();
        let prop: Entity = ObjectProperty::new("http://example.org/X").into();
        assert_ne!(class, prop);
        assert_eq!(class.iri(), prop.iri());
        assert_eq!(class.kind().name(), "Class");
        assert_eq!(prop.kind().name(), "ObjectProperty");
    }

    #[test]
    fn test_individual_positions() {
        let named: Individual = NamedIndividual::new("http://example.org/alice").into();
        let anon: Individual = AnonymousIndividual::new("n1").into();
        assert_eq!(named.iri().map(|i| i.as_str()), Some("http://example.org/alice"));
        assert_eq!(anon.node_id(), Some("n1"));
        assert_eq!(anon.to_functional_syntax(), "_:n1");
    }

    #[test]
    fn test_literal_equality_on_full_tuple() {
        let plain = Literal::simple("1");
        let as_int = Literal::typed("1", xsd::INT.clone());
        let as_string = Literal::typed("1", xsd::STRING.clone());
        assert_ne!(as_int, as_string);
        assert_ne!(plain, as_string);
        assert_eq!(plain.effective_datatype(), &*xsd::STRING);
    }

    #[test]
    fn test_literal_language_tag() {
        let en = Literal::lang_tagged("hello", "en");
        let de = Literal::lang_tagged("hello", "de");
        assert_ne!(en, de);
        assert_eq!(en.to_functional_syntax(), "\"hello\"@en");
    }

    #[test]
    fn test_literal_functional_syntax_escapes() {
        let lit = Literal::simple("line1\nline2 \"quoted\" \\slash");
        assert_eq!(
            lit.to_functional_syntax(),
            "\"line1\\nline2 \\\"quoted\\\" \\\\slash\""
        );
    }

    #[test]
    fn test_typed_literal_syntax() {
        let lit = Literal::typed("42", xsd::INTEGER.clone());
        assert_eq!(
            lit.to_functional_syntax(),
            "\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
    }

    #[test]
    fn test_annotation_nesting() {
        let comment = AnnotationProperty::new("http://www.w3.org/2000/01/rdf-schema#comment");
        let label = AnnotationProperty::new("http://www.w3.org/2000/01/rdf-schema#label");
        let nested = Annotation::new(label, "inner");
        let annotation = Annotation::with_annotations(comment, "outer", vec![nested.clone()]);

        assert!(annotation.has_annotations());
        assert_eq!(annotation.annotations(), &[nested]);
        assert_eq!(
            annotation.to_functional_syntax(),
            "Annotation(Annotation(<http://www.w3.org/2000/01/rdf-schema#label> \"inner\") \
             <http://www.w3.org/2000/01/rdf-schema#comment> \"outer\")"
        );
    }
}
