//! RDF/XML serializer
//!
//! Best-effort mapping of the supported axiom subset onto the
//! standard OWL 2 RDF patterns. Constructs without a direct pattern
//! (property chains, complex class expressions, negative assertions,
//! has-key) are skipped with a warning, and axiom-level annotations
//! are not reified. The Functional Syntax round-trip is the
//! authoritative form; this output targets interchange with
//! RDF-based tools.

use super::OntologySerializer;
use crate::axioms::{Axiom, ClassExpression, ObjectPropertyExpression, SubObjectPropertyExpression};
use crate::constants::{OWL_NS, RDF_NS, RDFS_NS, XSD_NS};
use crate::entities::{AnnotationValue, EntityKind, Individual, Literal};
use crate::error::OwlResult;
use crate::iri::IRI;
use crate::ontology::Ontology;
use indexmap::IndexMap;
use std::fmt::Write as _;

/// Serializer for the RDF/XML exchange format
pub struct RdfXmlSerializer;

impl RdfXmlSerializer {
    /// Create a new RDF/XML serializer
    pub fn new() -> Self {
        RdfXmlSerializer
    }
}

impl Default for RdfXmlSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl OntologySerializer for RdfXmlSerializer {
    fn serialize(&self, ontology: &Ontology) -> OwlResult<String> {
        Ok(Builder::new(ontology).build())
    }

    fn format_name(&self) -> &'static str {
        "RDF/XML"
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

struct Builder<'a> {
    ontology: &'a Ontology,
    /// prefix → namespace bindings for the document root
    namespaces: IndexMap<String, String>,
    generated: u32,
    body: String,
}

impl<'a> Builder<'a> {
    fn new(ontology: &'a Ontology) -> Self {
        let mut namespaces = IndexMap::new();
        namespaces.insert("rdf".to_string(), RDF_NS.to_string());
        namespaces.insert("rdfs".to_string(), RDFS_NS.to_string());
        namespaces.insert("owl".to_string(), OWL_NS.to_string());
        namespaces.insert("xsd".to_string(), XSD_NS.to_string());
        for (prefix, namespace) in ontology.prefix_map() {
            if prefix.is_empty() {
                continue;
            }
            if !namespaces.values().any(|bound| bound == namespace) {
                namespaces.insert(prefix.clone(), namespace.clone());
            }
        }
        Builder {
            ontology,
            namespaces,
            generated: 0,
            body: String::new(),
        }
    }

    fn build(mut self) -> String {
        let axioms = self.ontology.axioms().to_vec();
        let ontology_annotations = self.ontology.ontology_annotations().to_vec();

        // Properties rendered as XML elements need a bound prefix, so
        // collect them before the root element is written.
        for axiom in &axioms {
            match axiom.as_ref() {
                Axiom::ObjectPropertyAssertion(assertion) => {
                    self.ensure_qname(assertion.property().iri());
                }
                Axiom::DataPropertyAssertion(assertion) => {
                    self.ensure_qname(assertion.property().iri());
                }
                Axiom::AnnotationAssertion(assertion) => {
                    self.ensure_qname(assertion.property().iri());
                }
                _ => {}
            }
        }
        for annotation in &ontology_annotations {
            self.ensure_qname(annotation.property().iri());
        }

        self.write_ontology_header();
        for axiom in &axioms {
            if !axiom.annotations().is_empty() {
                log::debug!(
                    "RDF/XML output drops axiom annotations on {}",
                    axiom.axiom_type().name()
                );
            }
            self.write_axiom(axiom.as_ref());
        }

        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rdf:RDF");
        for (prefix, namespace) in &self.namespaces {
            let _ = write!(out, "\n    xmlns:{prefix}=\"{}\"", escape_xml(namespace));
        }
        out.push_str(">\n");
        out.push_str(&self.body);
        out.push_str("</rdf:RDF>\n");
        out
    }

    /// Get a qname for the IRI, binding a generated prefix when its
    /// namespace is unbound. Returns `None` for IRIs that do not
    /// decompose into namespace and local name.
    fn ensure_qname(&mut self, iri: &IRI) -> Option<String> {
        let local = iri.local_name()?;
        let namespace = iri.namespace().to_string();
        if let Some((prefix, _)) = self.namespaces.iter().find(|(_, ns)| **ns == namespace) {
            return Some(format!("{prefix}:{local}"));
        }
        self.generated += 1;
        let prefix = format!("ns{}", self.generated);
        self.namespaces.insert(prefix.clone(), namespace);
        Some(format!("{prefix}:{local}"))
    }

    fn write_ontology_header(&mut self) {
        let Some(iri) = self.ontology.iri() else {
            return;
        };
        let _ = write!(self.body, "  <owl:Ontology rdf:about=\"{}\"", escape_xml(iri.as_str()));
        let has_children = self.ontology.version_iri().is_some()
            || !self.ontology.imports().is_empty()
            || !self.ontology.ontology_annotations().is_empty();
        if !has_children {
            self.body.push_str("/>\n");
            return;
        }
        self.body.push_str(">\n");
        if let Some(version) = self.ontology.version_iri() {
            let _ = writeln!(
                self.body,
                "    <owl:versionIRI rdf:resource=\"{}\"/>",
                escape_xml(version.as_str())
            );
        }
        let imports: Vec<String> = self
            .ontology
            .imports()
            .iter()
            .map(|import| escape_xml(import.as_str()))
            .collect();
        for import in imports {
            let _ = writeln!(self.body, "    <owl:imports rdf:resource=\"{import}\"/>");
        }
        let annotations = self.ontology.ontology_annotations().to_vec();
        for annotation in annotations {
            let Some(qname) = self.ensure_qname(annotation.property().iri()) else {
                continue;
            };
            self.write_annotation_value(&qname, annotation.value().clone(), "    ");
        }
        self.body.push_str("  </owl:Ontology>\n");
    }

    fn write_annotation_value(&mut self, qname: &str, value: AnnotationValue, indent: &str) {
        match value {
            AnnotationValue::Iri(iri) => {
                let _ = writeln!(
                    self.body,
                    "{indent}<{qname} rdf:resource=\"{}\"/>",
                    escape_xml(iri.as_str())
                );
            }
            AnnotationValue::Literal(literal) => {
                self.write_literal_element(qname, &literal, indent);
            }
            AnnotationValue::AnonymousIndividual(anon) => {
                let _ = writeln!(
                    self.body,
                    "{indent}<{qname} rdf:nodeID=\"{}\"/>",
                    escape_xml(anon.node_id())
                );
            }
        }
    }

    fn write_literal_element(&mut self, qname: &str, literal: &Literal, indent: &str) {
        let text = escape_xml(literal.lexical_form());
        if let Some(lang) = literal.language_tag() {
            let _ = writeln!(
                self.body,
                "{indent}<{qname} xml:lang=\"{}\">{text}</{qname}>",
                escape_xml(lang)
            );
        } else if let Some(datatype) = literal.datatype() {
            let _ = writeln!(
                self.body,
                "{indent}<{qname} rdf:datatype=\"{}\">{text}</{qname}>",
                escape_xml(datatype.as_str())
            );
        } else {
            let _ = writeln!(self.body, "{indent}<{qname}>{text}</{qname}>");
        }
    }

    /// Element + single resource-valued child, the workhorse shape of
    /// the RDF mapping
    fn write_resource_statement(&mut self, element: &str, about: &IRI, child: &str, resource: &IRI) {
        let _ = writeln!(
            self.body,
            "  <{element} rdf:about=\"{}\">\n    <{child} rdf:resource=\"{}\"/>\n  </{element}>",
            escape_xml(about.as_str()),
            escape_xml(resource.as_str())
        );
    }

    fn named_class(expr: &ClassExpression) -> Option<&IRI> {
        expr.as_named().map(|class| class.iri())
    }

    fn direct_property(expr: &ObjectPropertyExpression) -> Option<&IRI> {
        match expr {
            ObjectPropertyExpression::ObjectProperty(property) => Some(property.iri()),
            ObjectPropertyExpression::ObjectInverseOf(_) => None,
        }
    }

    fn named_individual(individual: &Individual) -> Option<&IRI> {
        individual.iri()
    }

    fn skip(&self, axiom: &Axiom) {
        log::warn!(
            "RDF/XML output has no mapping for this {} axiom; skipped",
            axiom.axiom_type().name()
        );
    }

    fn write_axiom(&mut self, axiom: &Axiom) {
        match axiom {
            Axiom::Declaration(decl) => {
                let element = match decl.entity().kind() {
                    EntityKind::Class => "owl:Class",
                    EntityKind::Datatype => "rdfs:Datatype",
                    EntityKind::ObjectProperty => "owl:ObjectProperty",
                    EntityKind::DataProperty => "owl:DatatypeProperty",
                    EntityKind::AnnotationProperty => "owl:AnnotationProperty",
                    EntityKind::NamedIndividual => "owl:NamedIndividual",
                };
                let _ = writeln!(
                    self.body,
                    "  <{element} rdf:about=\"{}\"/>",
                    escape_xml(decl.entity().iri().as_str())
                );
            }
            Axiom::SubClassOf(sub) => {
                match (Self::named_class(sub.sub_class()), Self::named_class(sub.super_class())) {
                    (Some(sub_iri), Some(super_iri)) => {
                        self.write_resource_statement(
                            "owl:Class",
                            sub_iri,
                            "rdfs:subClassOf",
                            super_iri,
                        );
                    }
                    _ => self.skip(axiom),
                }
            }
            Axiom::EquivalentClasses(equiv) => {
                self.write_member_pairs(
                    axiom,
                    equiv.classes().iter().map(Self::named_class).collect(),
                    "owl:Class",
                    "owl:equivalentClass",
                );
            }
            Axiom::DisjointClasses(disjoint) => {
                self.write_member_pairs(
                    axiom,
                    disjoint.classes().iter().map(Self::named_class).collect(),
                    "owl:Class",
                    "owl:disjointWith",
                );
            }
            Axiom::SubObjectPropertyOf(sub) => {
                let simple = match sub.sub_property() {
                    SubObjectPropertyExpression::Expression(expr) => Self::direct_property(expr),
                    SubObjectPropertyExpression::PropertyChain(_) => None,
                };
                match (simple, Self::direct_property(sub.super_property())) {
                    (Some(sub_iri), Some(super_iri)) => {
                        self.write_resource_statement(
                            "owl:ObjectProperty",
                            sub_iri,
                            "rdfs:subPropertyOf",
                            super_iri,
                        );
                    }
                    _ => self.skip(axiom),
                }
            }
            Axiom::EquivalentObjectProperties(equiv) => {
                self.write_member_pairs(
                    axiom,
                    equiv.properties().iter().map(Self::direct_property).collect(),
                    "owl:ObjectProperty",
                    "owl:equivalentProperty",
                );
            }
            Axiom::DisjointObjectProperties(disjoint) => {
                self.write_member_pairs(
                    axiom,
                    disjoint.properties().iter().map(Self::direct_property).collect(),
                    "owl:ObjectProperty",
                    "owl:propertyDisjointWith",
                );
            }
            Axiom::InverseObjectProperties(inverse) => {
                match (
                    Self::direct_property(inverse.first()),
                    Self::direct_property(inverse.second()),
                ) {
                    (Some(first), Some(second)) => {
                        self.write_resource_statement(
                            "owl:ObjectProperty",
                            first,
                            "owl:inverseOf",
                            second,
                        );
                    }
                    _ => self.skip(axiom),
                }
            }
            Axiom::ObjectPropertyDomain(domain) => {
                match (
                    Self::direct_property(domain.property()),
                    Self::named_class(domain.domain()),
                ) {
                    (Some(property), Some(class)) => {
                        self.write_resource_statement(
                            "owl:ObjectProperty",
                            property,
                            "rdfs:domain",
                            class,
                        );
                    }
                    _ => self.skip(axiom),
                }
            }
            Axiom::ObjectPropertyRange(range) => {
                match (
                    Self::direct_property(range.property()),
                    Self::named_class(range.range()),
                ) {
                    (Some(property), Some(class)) => {
                        self.write_resource_statement(
                            "owl:ObjectProperty",
                            property,
                            "rdfs:range",
                            class,
                        );
                    }
                    _ => self.skip(axiom),
                }
            }
            Axiom::FunctionalObjectProperty(_)
            | Axiom::InverseFunctionalObjectProperty(_)
            | Axiom::ReflexiveObjectProperty(_)
            | Axiom::IrreflexiveObjectProperty(_)
            | Axiom::SymmetricObjectProperty(_)
            | Axiom::AsymmetricObjectProperty(_)
            | Axiom::TransitiveObjectProperty(_) => {
                self.write_characteristic(axiom);
            }
            Axiom::SubDataPropertyOf(sub) => {
                self.write_resource_statement(
                    "owl:DatatypeProperty",
                    sub.sub_property().iri(),
                    "rdfs:subPropertyOf",
                    sub.super_property().iri(),
                );
            }
            Axiom::EquivalentDataProperties(equiv) => {
                self.write_member_pairs(
                    axiom,
                    equiv.properties().iter().map(|p| Some(p.iri())).collect(),
                    "owl:DatatypeProperty",
                    "owl:equivalentProperty",
                );
            }
            Axiom::DisjointDataProperties(disjoint) => {
                self.write_member_pairs(
                    axiom,
                    disjoint.properties().iter().map(|p| Some(p.iri())).collect(),
                    "owl:DatatypeProperty",
                    "owl:propertyDisjointWith",
                );
            }
            Axiom::DataPropertyDomain(domain) => match Self::named_class(domain.domain()) {
                Some(class) => {
                    self.write_resource_statement(
                        "owl:DatatypeProperty",
                        domain.property().iri(),
                        "rdfs:domain",
                        class,
                    );
                }
                None => self.skip(axiom),
            },
            Axiom::DataPropertyRange(range) => match range.range().as_datatype() {
                Some(datatype) => {
                    self.write_resource_statement(
                        "owl:DatatypeProperty",
                        range.property().iri(),
                        "rdfs:range",
                        datatype.iri(),
                    );
                }
                None => self.skip(axiom),
            },
            Axiom::FunctionalDataProperty(functional) => {
                let functional_iri = IRI::new_unchecked(format!("{OWL_NS}FunctionalProperty"));
                self.write_resource_statement(
                    "owl:DatatypeProperty",
                    functional.property().iri(),
                    "rdf:type",
                    &functional_iri,
                );
            }
            Axiom::ClassAssertion(assertion) => {
                match (
                    Self::named_class(assertion.class_expression()),
                    Self::named_individual(assertion.individual()),
                ) {
                    (Some(class), Some(individual)) => {
                        self.write_resource_statement(
                            "owl:NamedIndividual",
                            individual,
                            "rdf:type",
                            class,
                        );
                    }
                    _ => self.skip(axiom),
                }
            }
            Axiom::ObjectPropertyAssertion(assertion) => {
                match (
                    Self::named_individual(assertion.source()),
                    Self::named_individual(assertion.target()),
                ) {
                    (Some(source), Some(target)) => {
                        let Some(qname) = self.ensure_qname(assertion.property().iri()) else {
                            self.skip(axiom);
                            return;
                        };
                        let _ = writeln!(
                            self.body,
                            "  <rdf:Description rdf:about=\"{}\">\n    <{qname} rdf:resource=\"{}\"/>\n  </rdf:Description>",
                            escape_xml(source.as_str()),
                            escape_xml(target.as_str())
                        );
                    }
                    _ => self.skip(axiom),
                }
            }
            Axiom::DataPropertyAssertion(assertion) => {
                match Self::named_individual(assertion.source()) {
                    Some(source) => {
                        let value = assertion.value().clone();
                        let Some(qname) = self.ensure_qname(assertion.property().iri()) else {
                            self.skip(axiom);
                            return;
                        };
                        let _ = writeln!(
                            self.body,
                            "  <rdf:Description rdf:about=\"{}\">",
                            escape_xml(source.as_str())
                        );
                        self.write_literal_element(&qname, &value, "    ");
                        self.body.push_str("  </rdf:Description>\n");
                    }
                    None => self.skip(axiom),
                }
            }
            Axiom::SameIndividual(same) => {
                self.write_member_pairs(
                    axiom,
                    same.individuals().iter().map(Self::named_individual).collect(),
                    "owl:NamedIndividual",
                    "owl:sameAs",
                );
            }
            Axiom::DifferentIndividuals(different) => {
                self.write_member_pairs(
                    axiom,
                    different
                        .individuals()
                        .iter()
                        .map(Self::named_individual)
                        .collect(),
                    "owl:NamedIndividual",
                    "owl:differentFrom",
                );
            }
            Axiom::AnnotationAssertion(assertion) => {
                let value = assertion.value().clone();
                let Some(qname) = self.ensure_qname(assertion.property().iri()) else {
                    self.skip(axiom);
                    return;
                };
                let _ = writeln!(
                    self.body,
                    "  <rdf:Description rdf:about=\"{}\">",
                    escape_xml(assertion.subject().as_str())
                );
                self.write_annotation_value(&qname, value, "    ");
                self.body.push_str("  </rdf:Description>\n");
            }
            Axiom::SubAnnotationPropertyOf(sub) => {
                self.write_resource_statement(
                    "owl:AnnotationProperty",
                    sub.sub_property().iri(),
                    "rdfs:subPropertyOf",
                    sub.super_property().iri(),
                );
            }
            Axiom::AnnotationPropertyDomain(domain) => {
                self.write_resource_statement(
                    "owl:AnnotationProperty",
                    domain.property().iri(),
                    "rdfs:domain",
                    domain.domain(),
                );
            }
            Axiom::AnnotationPropertyRange(range) => {
                self.write_resource_statement(
                    "owl:AnnotationProperty",
                    range.property().iri(),
                    "rdfs:range",
                    range.range(),
                );
            }
            Axiom::DisjointUnion(_)
            | Axiom::NegativeObjectPropertyAssertion(_)
            | Axiom::NegativeDataPropertyAssertion(_)
            | Axiom::DatatypeDefinition(_)
            | Axiom::HasKey(_) => self.skip(axiom),
        }
    }

    fn write_characteristic(&mut self, axiom: &Axiom) {
        let (expr, characteristic) = match axiom {
            Axiom::FunctionalObjectProperty(a) => (a.property(), "FunctionalProperty"),
            Axiom::InverseFunctionalObjectProperty(a) => {
                (a.property(), "InverseFunctionalProperty")
            }
            Axiom::ReflexiveObjectProperty(a) => (a.property(), "ReflexiveProperty"),
            Axiom::IrreflexiveObjectProperty(a) => (a.property(), "IrreflexiveProperty"),
            Axiom::SymmetricObjectProperty(a) => (a.property(), "SymmetricProperty"),
            Axiom::AsymmetricObjectProperty(a) => (a.property(), "AsymmetricProperty"),
            Axiom::TransitiveObjectProperty(a) => (a.property(), "TransitiveProperty"),
            _ => unreachable!("caller matched a characteristic axiom"),
        };
        match Self::direct_property(expr) {
            Some(property) => {
                let type_iri = IRI::new_unchecked(format!("{OWL_NS}{characteristic}"));
                self.write_resource_statement("owl:ObjectProperty", property, "rdf:type", &type_iri);
            }
            None => self.skip(axiom),
        }
    }

    /// First member gets one child element per remaining member.
    /// Bails out with a warning when any member is unnamed.
    fn write_member_pairs(
        &mut self,
        axiom: &Axiom,
        members: Vec<Option<&IRI>>,
        element: &str,
        child: &str,
    ) {
        let named: Option<Vec<&IRI>> = members.into_iter().collect();
        match named {
            Some(members) if members.len() >= 2 => {
                let _ = writeln!(
                    self.body,
                    "  <{element} rdf:about=\"{}\">",
                    escape_xml(members[0].as_str())
                );
                for member in &members[1..] {
                    let _ = writeln!(
                        self.body,
                        "    <{child} rdf:resource=\"{}\"/>",
                        escape_xml(member.as_str())
                    );
                }
                let _ = writeln!(self.body, "  </{element}>");
            }
            _ => self.skip(axiom),
        }
    }
}
