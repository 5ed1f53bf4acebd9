//! RDF/XML parser
//!
//! Best-effort DOM-level reader for the RDF patterns the RDF/XML
//! serializer emits: typed entity elements with `rdf:about`, nested
//! resource-valued children, and literal-valued property children.
//! Unrecognized elements are skipped with a warning; reified axiom
//! annotations are not recovered.

use super::OntologyParser;
use crate::axioms::{
    AnnotationAssertionAxiom, AnnotationPropertyDomainAxiom, AnnotationPropertyRangeAxiom,
    AsymmetricObjectPropertyAxiom, ClassAssertionAxiom, DataPropertyAssertionAxiom,
    DataPropertyDomainAxiom, DataPropertyRangeAxiom, DataRange, DeclarationAxiom,
    DifferentIndividualsAxiom, DisjointClassesAxiom, EquivalentClassesAxiom,
    FunctionalDataPropertyAxiom, FunctionalObjectPropertyAxiom,
    InverseFunctionalObjectPropertyAxiom, InverseObjectPropertiesAxiom,
    IrreflexiveObjectPropertyAxiom, ObjectPropertyAssertionAxiom, ObjectPropertyDomainAxiom,
    ObjectPropertyRangeAxiom, ReflexiveObjectPropertyAxiom, SameIndividualAxiom,
    SubAnnotationPropertyOfAxiom, SubClassOfAxiom, SubDataPropertyOfAxiom,
    SubObjectPropertyOfAxiom, SymmetricObjectPropertyAxiom, TransitiveObjectPropertyAxiom,
};
use crate::constants::{OWL_NS, RDF_NS, RDFS_NS};
use crate::entities::{
    AnnotationProperty, Class, DataProperty, Datatype, Literal, NamedIndividual, ObjectProperty,
};
use crate::error::{OwlError, OwlResult};
use crate::iri::IRI;
use crate::ontology::Ontology;
use xmltree::{Element, XMLNode};

/// Parser for the RDF/XML exchange format
pub struct RdfXmlParser;

impl RdfXmlParser {
    /// Create a new RDF/XML parser
    pub fn new() -> Self {
        RdfXmlParser
    }
}

impl Default for RdfXmlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OntologyParser for RdfXmlParser {
    fn parse_str(&self, content: &str) -> OwlResult<Ontology> {
        let root = Element::parse(content.as_bytes())
            .map_err(|e| OwlError::parse(format!("malformed XML: {e}"), 0, 0))?;
        if root.name != "RDF" {
            return Err(OwlError::parse(
                format!("expected rdf:RDF document root, found '{}'", root.name),
                0,
                0,
            ));
        }
        read_document(&root)
    }

    fn format_name(&self) -> &'static str {
        "RDF/XML"
    }
}

fn read_document(root: &Element) -> OwlResult<Ontology> {
    let mut ontology = Ontology::new();

    if let Some(bindings) = &root.namespaces {
        for (prefix, namespace) in bindings.0.iter() {
            if !prefix.is_empty() && prefix != "xml" && prefix != "xmlns" {
                ontology.register_prefix(prefix.clone(), namespace.clone());
            }
        }
    }

    for node in &root.children {
        let XMLNode::Element(element) = node else {
            continue;
        };
        read_element(element, &mut ontology)?;
    }
    Ok(ontology)
}

fn namespace_of(element: &Element) -> &str {
    element.namespace.as_deref().unwrap_or("")
}

fn about_iri(element: &Element) -> OwlResult<Option<IRI>> {
    match element.attributes.get("about") {
        Some(value) => Ok(Some(IRI::new(value.as_str()).map_err(invalid_iri)?)),
        None => Ok(None),
    }
}

fn resource_iri(element: &Element) -> OwlResult<Option<IRI>> {
    match element.attributes.get("resource") {
        Some(value) => Ok(Some(IRI::new(value.as_str()).map_err(invalid_iri)?)),
        None => Ok(None),
    }
}

fn invalid_iri(error: OwlError) -> OwlError {
    OwlError::parse(error.to_string(), 0, 0)
}

fn child_elements(element: &Element) -> impl Iterator<Item = &Element> {
    element.children.iter().filter_map(|node| match node {
        XMLNode::Element(child) => Some(child),
        _ => None,
    })
}

fn literal_of(element: &Element) -> OwlResult<Literal> {
    let text = element
        .get_text()
        .map(|cow| cow.into_owned())
        .unwrap_or_default();
    if let Some(datatype) = element.attributes.get("datatype") {
        Ok(Literal::typed(
            text,
            IRI::new(datatype.as_str()).map_err(invalid_iri)?,
        ))
    } else if let Some(lang) = element.attributes.get("lang") {
        Ok(Literal::lang_tagged(text, lang.clone()))
    } else {
        Ok(Literal::simple(text))
    }
}

fn property_iri(element: &Element) -> OwlResult<IRI> {
    IRI::new(format!("{}{}", namespace_of(element), element.name)).map_err(invalid_iri)
}

fn read_element(element: &Element, ontology: &mut Ontology) -> OwlResult<()> {
    let namespace = namespace_of(element).to_string();
    match (namespace.as_str(), element.name.as_str()) {
        (OWL_NS, "Ontology") => read_ontology_header(element, ontology),
        (OWL_NS, "Class") => read_class(element, ontology),
        (OWL_NS, "ObjectProperty") => read_object_property(element, ontology),
        (OWL_NS, "DatatypeProperty") => read_data_property(element, ontology),
        (OWL_NS, "AnnotationProperty") => read_annotation_property(element, ontology),
        (OWL_NS, "NamedIndividual") => read_individual(element, ontology, true),
        (RDFS_NS, "Datatype") => {
            if let Some(iri) = about_iri(element)? {
                ontology.add_axiom(DeclarationAxiom::new(Datatype::new(iri)));
            }
            Ok(())
        }
        (RDF_NS, "Description") => read_individual(element, ontology, false),
        _ => {
            log::warn!(
                "skipping unrecognized RDF/XML element {{{namespace}}}{}",
                element.name
            );
            Ok(())
        }
    }
}

fn read_ontology_header(element: &Element, ontology: &mut Ontology) -> OwlResult<()> {
    if let Some(iri) = about_iri(element)? {
        ontology.set_iri(iri);
    }
    for child in child_elements(element) {
        match (namespace_of(child), child.name.as_str()) {
            (OWL_NS, "versionIRI") => {
                if let Some(iri) = resource_iri(child)? {
                    ontology.set_version_iri(iri);
                }
            }
            (OWL_NS, "imports") => {
                if let Some(iri) = resource_iri(child)? {
                    ontology.add_import(iri);
                }
            }
            _ => {
                let property = AnnotationProperty::new(property_iri(child)?);
                let annotation = match resource_iri(child)? {
                    Some(iri) => crate::entities::Annotation::new(property, iri),
                    None => crate::entities::Annotation::new(property, literal_of(child)?),
                };
                ontology.add_ontology_annotation(annotation);
            }
        }
    }
    Ok(())
}

fn read_class(element: &Element, ontology: &mut Ontology) -> OwlResult<()> {
    let Some(iri) = about_iri(element)? else {
        log::warn!("skipping owl:Class without rdf:about");
        return Ok(());
    };
    let class = Class::new(iri);
    ontology.add_axiom(DeclarationAxiom::new(class.clone()));

    for child in child_elements(element) {
        let Some(target) = resource_iri(child)? else {
            continue;
        };
        match (namespace_of(child), child.name.as_str()) {
            (RDFS_NS, "subClassOf") => {
                ontology.add_axiom(SubClassOfAxiom::new(
                    class.clone().into(),
                    Class::new(target).into(),
                ));
            }
            (OWL_NS, "equivalentClass") => {
                ontology.add_axiom(EquivalentClassesAxiom::new(vec![
                    class.clone().into(),
                    Class::new(target).into(),
                ]));
            }
            (OWL_NS, "disjointWith") => {
                ontology.add_axiom(DisjointClassesAxiom::new(vec![
                    class.clone().into(),
                    Class::new(target).into(),
                ]));
            }
            _ => log::warn!("skipping unrecognized owl:Class child '{}'", child.name),
        }
    }
    Ok(())
}

fn read_object_property(element: &Element, ontology: &mut Ontology) -> OwlResult<()> {
    let Some(iri) = about_iri(element)? else {
        log::warn!("skipping owl:ObjectProperty without rdf:about");
        return Ok(());
    };
    let property = ObjectProperty::new(iri);
    ontology.add_axiom(DeclarationAxiom::new(property.clone()));

    for child in child_elements(element) {
        let Some(target) = resource_iri(child)? else {
            continue;
        };
        match (namespace_of(child), child.name.as_str()) {
            (RDFS_NS, "subPropertyOf") => {
                ontology.add_axiom(SubObjectPropertyOfAxiom::new(
                    crate::axioms::ObjectPropertyExpression::from(property.clone()),
                    ObjectProperty::new(target).into(),
                ));
            }
            (OWL_NS, "inverseOf") => {
                ontology.add_axiom(InverseObjectPropertiesAxiom::new(
                    property.clone().into(),
                    ObjectProperty::new(target).into(),
                ));
            }
            (RDFS_NS, "domain") => {
                ontology.add_axiom(ObjectPropertyDomainAxiom::new(
                    property.clone().into(),
                    Class::new(target).into(),
                ));
            }
            (RDFS_NS, "range") => {
                ontology.add_axiom(ObjectPropertyRangeAxiom::new(
                    property.clone().into(),
                    Class::new(target).into(),
                ));
            }
            (RDF_NS, "type") => {
                read_property_characteristic(&property, target.as_str(), ontology);
            }
            _ => log::warn!(
                "skipping unrecognized owl:ObjectProperty child '{}'",
                child.name
            ),
        }
    }
    Ok(())
}

fn read_property_characteristic(property: &ObjectProperty, type_iri: &str, ontology: &mut Ontology) {
    let expr = crate::axioms::ObjectPropertyExpression::from(property.clone());
    match type_iri.strip_prefix(OWL_NS) {
        Some("FunctionalProperty") => {
            ontology.add_axiom(FunctionalObjectPropertyAxiom::new(expr));
        }
        Some("InverseFunctionalProperty") => {
            ontology.add_axiom(InverseFunctionalObjectPropertyAxiom::new(expr));
        }
        Some("ReflexiveProperty") => {
            ontology.add_axiom(ReflexiveObjectPropertyAxiom::new(expr));
        }
        Some("IrreflexiveProperty") => {
            ontology.add_axiom(IrreflexiveObjectPropertyAxiom::new(expr));
        }
        Some("SymmetricProperty") => {
            ontology.add_axiom(SymmetricObjectPropertyAxiom::new(expr));
        }
        Some("AsymmetricProperty") => {
            ontology.add_axiom(AsymmetricObjectPropertyAxiom::new(expr));
        }
        Some("TransitiveProperty") => {
            ontology.add_axiom(TransitiveObjectPropertyAxiom::new(expr));
        }
        _ => log::warn!("skipping unrecognized property type '{type_iri}'"),
    }
}

fn read_data_property(element: &Element, ontology: &mut Ontology) -> OwlResult<()> {
    let Some(iri) = about_iri(element)? else {
        log::warn!("skipping owl:DatatypeProperty without rdf:about");
        return Ok(());
    };
    let property = DataProperty::new(iri);
    ontology.add_axiom(DeclarationAxiom::new(property.clone()));

    for child in child_elements(element) {
        let Some(target) = resource_iri(child)? else {
            continue;
        };
        match (namespace_of(child), child.name.as_str()) {
            (RDFS_NS, "subPropertyOf") => {
                ontology.add_axiom(SubDataPropertyOfAxiom::new(
                    property.clone(),
                    DataProperty::new(target),
                ));
            }
            (RDFS_NS, "domain") => {
                ontology.add_axiom(DataPropertyDomainAxiom::new(
                    property.clone(),
                    Class::new(target).into(),
                ));
            }
            (RDFS_NS, "range") => {
                ontology.add_axiom(DataPropertyRangeAxiom::new(
                    property.clone(),
                    DataRange::Datatype(Datatype::new(target)),
                ));
            }
            (RDF_NS, "type") => {
                if target.as_str() == format!("{OWL_NS}FunctionalProperty") {
                    ontology.add_axiom(FunctionalDataPropertyAxiom::new(property.clone()));
                } else {
                    log::warn!("skipping unrecognized data property type '{target}'");
                }
            }
            _ => log::warn!(
                "skipping unrecognized owl:DatatypeProperty child '{}'",
                child.name
            ),
        }
    }
    Ok(())
}

fn read_annotation_property(element: &Element, ontology: &mut Ontology) -> OwlResult<()> {
    let Some(iri) = about_iri(element)? else {
        log::warn!("skipping owl:AnnotationProperty without rdf:about");
        return Ok(());
    };
    let property = AnnotationProperty::new(iri);
    ontology.add_axiom(DeclarationAxiom::new(property.clone()));

    for child in child_elements(element) {
        let Some(target) = resource_iri(child)? else {
            continue;
        };
        match (namespace_of(child), child.name.as_str()) {
            (RDFS_NS, "subPropertyOf") => {
                ontology.add_axiom(SubAnnotationPropertyOfAxiom::new(
                    property.clone(),
                    AnnotationProperty::new(target),
                ));
            }
            (RDFS_NS, "domain") => {
                ontology.add_axiom(AnnotationPropertyDomainAxiom::new(property.clone(), target));
            }
            (RDFS_NS, "range") => {
                ontology.add_axiom(AnnotationPropertyRangeAxiom::new(property.clone(), target));
            }
            _ => log::warn!(
                "skipping unrecognized owl:AnnotationProperty child '{}'",
                child.name
            ),
        }
    }
    Ok(())
}

/// Read an individual-shaped element. `declare` distinguishes
/// `owl:NamedIndividual` (declares its subject) from a plain
/// `rdf:Description`.
fn read_individual(element: &Element, ontology: &mut Ontology, declare: bool) -> OwlResult<()> {
    let Some(iri) = about_iri(element)? else {
        log::warn!("skipping individual element without rdf:about");
        return Ok(());
    };
    let individual = NamedIndividual::new(iri.clone());
    if declare {
        ontology.add_axiom(DeclarationAxiom::new(individual.clone()));
    }

    for child in child_elements(element) {
        let child_namespace = namespace_of(child).to_string();
        match resource_iri(child)? {
            Some(target) => match (child_namespace.as_str(), child.name.as_str()) {
                (RDF_NS, "type") => {
                    ontology.add_axiom(ClassAssertionAxiom::new(
                        Class::new(target).into(),
                        individual.clone(),
                    ));
                }
                (OWL_NS, "sameAs") => {
                    ontology.add_axiom(SameIndividualAxiom::new(vec![
                        individual.clone().into(),
                        NamedIndividual::new(target).into(),
                    ]));
                }
                (OWL_NS, "differentFrom") => {
                    ontology.add_axiom(DifferentIndividualsAxiom::new(vec![
                        individual.clone().into(),
                        NamedIndividual::new(target).into(),
                    ]));
                }
                (RDFS_NS | OWL_NS, _) => {
                    // Annotation vocabulary pointing at a resource.
                    ontology.add_axiom(AnnotationAssertionAxiom::new(
                        AnnotationProperty::new(property_iri(child)?),
                        iri.clone(),
                        target,
                    ));
                }
                _ => {
                    ontology.add_axiom(ObjectPropertyAssertionAxiom::new(
                        ObjectProperty::new(property_iri(child)?),
                        individual.clone(),
                        NamedIndividual::new(target),
                    ));
                }
            },
            None => {
                let literal = literal_of(child)?;
                if matches!(child_namespace.as_str(), RDFS_NS | OWL_NS) {
                    ontology.add_axiom(AnnotationAssertionAxiom::new(
                        AnnotationProperty::new(property_iri(child)?),
                        iri.clone(),
                        literal,
                    ));
                } else {
                    ontology.add_axiom(DataPropertyAssertionAxiom::new(
                        DataProperty::new(property_iri(child)?),
                        individual.clone(),
                        literal,
                    ));
                }
            }
        }
    }
    Ok(())
}
