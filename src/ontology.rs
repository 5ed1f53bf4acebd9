//! Ontology structure and management
//!
//! The ontology is an ordered collection of axioms plus metadata: an
//! optional ontology/version IRI, an import set, ontology-level
//! annotations, and a bidirectional prefix map. Axiom enumeration
//! always yields insertion order; duplicates are permitted. Entity
//! sets are derived from declaration axioms on demand.

use crate::axioms::{
    Axiom, ClassAssertionAxiom, DataPropertyAssertionAxiom, DeclarationAxiom,
    DisjointClassesAxiom, EquivalentClassesAxiom, ObjectPropertyAssertionAxiom,
    SubClassOfAxiom, SubDataPropertyOfAxiom, SubObjectPropertyOfAxiom,
};
use crate::constants::{OWL_NS, RDF_NS, RDFS_NS, XSD_NS};
use crate::entities::{
    Annotation, AnnotationProperty, Class, DataProperty, Datatype, Entity, EntityKind,
    NamedIndividual, ObjectProperty,
};
use crate::iri::IRI;
use hashbrown::HashSet;
use indexmap::{IndexMap, IndexSet};
use std::fmt::Write as _;
use std::sync::Arc;

/// An OWL2 ontology
///
/// Holds an insertion-ordered axiom sequence together with ontology
/// metadata. Axioms are shared (`Arc`) so filtered subgraphs reuse
/// the records of their source ontology. Mutations are atomic per
/// call; read operations never change state.
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    iri: Option<IRI>,
    version_iri: Option<IRI>,
    imports: IndexSet<IRI>,
    ontology_annotations: Vec<Annotation>,
    prefix_to_namespace: IndexMap<String, String>,
    namespace_to_prefix: hashbrown::HashMap<String, String>,
    axioms: Vec<Arc<Axiom>>,
}

impl Ontology {
    /// Create a new empty ontology with the standard prefixes
    /// (`owl`, `rdf`, `rdfs`, `xsd`) registered
    pub fn new() -> Self {
        let mut ontology = Ontology {
            iri: None,
            version_iri: None,
            imports: IndexSet::new(),
            ontology_annotations: Vec::new(),
            prefix_to_namespace: IndexMap::new(),
            namespace_to_prefix: hashbrown::HashMap::new(),
            axioms: Vec::new(),
        };
        ontology.register_prefix("owl", OWL_NS);
        ontology.register_prefix("rdf", RDF_NS);
        ontology.register_prefix("rdfs", RDFS_NS);
        ontology.register_prefix("xsd", XSD_NS);
        ontology
    }

    /// Create a new ontology with the given ontology IRI
    pub fn with_iri<I: Into<IRI>>(iri: I) -> Self {
        let mut ontology = Self::new();
        ontology.iri = Some(iri.into());
        ontology
    }

    /// Create a new ontology with ontology and version IRIs
    pub fn with_iri_and_version<I: Into<IRI>, V: Into<IRI>>(iri: I, version_iri: V) -> Self {
        let mut ontology = Self::with_iri(iri);
        ontology.version_iri = Some(version_iri.into());
        ontology
    }

    // ---- metadata ----

    /// Get the ontology IRI
    pub fn iri(&self) -> Option<&IRI> {
        self.iri.as_ref()
    }

    /// Set the ontology IRI
    pub fn set_iri<I: Into<IRI>>(&mut self, iri: I) {
        self.iri = Some(iri.into());
    }

    /// Get the version IRI
    pub fn version_iri(&self) -> Option<&IRI> {
        self.version_iri.as_ref()
    }

    /// Set the version IRI
    pub fn set_version_iri<I: Into<IRI>>(&mut self, version_iri: I) {
        self.version_iri = Some(version_iri.into());
    }

    /// Add an import declaration
    pub fn add_import<I: Into<IRI>>(&mut self, import_iri: I) {
        self.imports.insert(import_iri.into());
    }

    /// Remove an import declaration
    pub fn remove_import(&mut self, import_iri: &IRI) {
        self.imports.shift_remove(import_iri);
    }

    /// Check whether the given IRI is imported
    pub fn has_import(&self, import_iri: &IRI) -> bool {
        self.imports.contains(import_iri)
    }

    /// Get the import declarations in insertion order
    pub fn imports(&self) -> &IndexSet<IRI> {
        &self.imports
    }

    /// Add an annotation on the ontology itself
    pub fn add_ontology_annotation(&mut self, annotation: Annotation) {
        self.ontology_annotations.push(annotation);
    }

    /// Get the annotations on the ontology itself
    pub fn ontology_annotations(&self) -> &[Annotation] {
        &self.ontology_annotations
    }

    /// Replace the ontology-level annotations
    pub fn set_ontology_annotations(&mut self, annotations: Vec<Annotation>) {
        self.ontology_annotations = annotations;
    }

    /// Clear the ontology-level annotations
    pub fn clear_ontology_annotations(&mut self) {
        self.ontology_annotations.clear();
    }

    // ---- prefix management ----

    /// Register a prefix/namespace pair
    ///
    /// The mapping is bidirectional and kept internally consistent:
    /// any prior mapping of either the prefix or the namespace is
    /// removed before the new pair is inserted.
    pub fn register_prefix<P: Into<String>, N: Into<String>>(&mut self, prefix: P, namespace: N) {
        let prefix = prefix.into();
        let namespace = namespace.into();

        // Re-registering an identical pair keeps its position in the
        // map, so serialization order is stable across round trips.
        if self.prefix_to_namespace.get(&prefix) == Some(&namespace) {
            return;
        }

        if let Some(old_namespace) = self.prefix_to_namespace.get(&prefix) {
            self.namespace_to_prefix.remove(old_namespace);
        }
        if let Some(old_prefix) = self.namespace_to_prefix.get(&namespace) {
            self.prefix_to_namespace.shift_remove(old_prefix);
        }

        self.prefix_to_namespace.insert(prefix.clone(), namespace.clone());
        self.namespace_to_prefix.insert(namespace, prefix);
    }

    /// Look up the namespace registered for a prefix
    pub fn namespace_for_prefix(&self, prefix: &str) -> Option<&str> {
        self.prefix_to_namespace.get(prefix).map(String::as_str)
    }

    /// Look up the prefix registered for a namespace
    pub fn prefix_for_namespace(&self, namespace: &str) -> Option<&str> {
        self.namespace_to_prefix.get(namespace).map(String::as_str)
    }

    /// Remove a prefix and its namespace mapping
    pub fn remove_prefix(&mut self, prefix: &str) {
        if let Some(namespace) = self.prefix_to_namespace.shift_remove(prefix) {
            self.namespace_to_prefix.remove(&namespace);
        }
    }

    /// Clear all prefix mappings, including the standard ones
    pub fn clear_prefixes(&mut self) {
        self.prefix_to_namespace.clear();
        self.namespace_to_prefix.clear();
    }

    /// Get the prefix→namespace map in registration order
    pub fn prefix_map(&self) -> &IndexMap<String, String> {
        &self.prefix_to_namespace
    }

    // ---- axiom management ----

    /// Append an axiom to the ontology
    ///
    /// Duplicates are permitted; insertion order is the canonical
    /// output order. Returns `true` when the axiom was appended.
    pub fn add_axiom<A: Into<Axiom>>(&mut self, axiom: A) -> bool {
        self.axioms.push(Arc::new(axiom.into()));
        true
    }

    /// Append an already-shared axiom record without copying it
    pub fn add_shared_axiom(&mut self, axiom: Arc<Axiom>) -> bool {
        self.axioms.push(axiom);
        true
    }

    /// Remove the first axiom that is structurally equal to the given
    /// one. Returns `true` iff exactly one occurrence was removed.
    pub fn remove_axiom(&mut self, axiom: &Axiom) -> bool {
        if let Some(position) = self.axioms.iter().position(|stored| stored.as_ref() == axiom) {
            self.axioms.remove(position);
            true
        } else {
            false
        }
    }

    /// Check whether a structurally equal axiom is present
    pub fn contains_axiom(&self, axiom: &Axiom) -> bool {
        self.axioms.iter().any(|stored| stored.as_ref() == axiom)
    }

    /// Get all axioms in insertion order
    pub fn axioms(&self) -> &[Arc<Axiom>] {
        &self.axioms
    }

    /// Remove all axioms
    pub fn clear_axioms(&mut self) {
        self.axioms.clear();
    }

    // ---- axiom queries by type family ----

    /// Get all declaration axioms
    pub fn declaration_axioms(&self) -> Vec<&DeclarationAxiom> {
        self.axioms
            .iter()
            .filter_map(|axiom| match axiom.as_ref() {
                Axiom::Declaration(decl) => Some(decl),
                _ => None,
            })
            .collect()
    }

    /// Get all class axioms (subsumption, equivalence, disjointness,
    /// disjoint union)
    pub fn class_axioms(&self) -> Vec<&Axiom> {
        self.family_axioms(Axiom::is_class_axiom)
    }

    /// Get all object-property axioms
    pub fn object_property_axioms(&self) -> Vec<&Axiom> {
        self.family_axioms(Axiom::is_object_property_axiom)
    }

    /// Get all data-property axioms
    pub fn data_property_axioms(&self) -> Vec<&Axiom> {
        self.family_axioms(Axiom::is_data_property_axiom)
    }

    /// Get all assertion axioms
    pub fn assertion_axioms(&self) -> Vec<&Axiom> {
        self.family_axioms(Axiom::is_assertion_axiom)
    }

    /// Get all annotation axioms
    pub fn annotation_axioms(&self) -> Vec<&Axiom> {
        self.family_axioms(Axiom::is_annotation_axiom)
    }

    fn family_axioms(&self, predicate: fn(&Axiom) -> bool) -> Vec<&Axiom> {
        self.axioms
            .iter()
            .map(Arc::as_ref)
            .filter(|axiom| predicate(axiom))
            .collect()
    }

    // ---- entity-keyed axiom queries ----

    /// Get the subclass axioms whose subclass position is exactly the
    /// given named class
    pub fn subclass_axioms_for_subclass(&self, class: &Class) -> Vec<&SubClassOfAxiom> {
        self.axioms
            .iter()
            .filter_map(|axiom| match axiom.as_ref() {
                Axiom::SubClassOf(sub)
                    if sub.sub_class().as_named().is_some_and(|c| c.iri() == class.iri()) =>
                {
                    Some(sub)
                }
                _ => None,
            })
            .collect()
    }

    /// Get the subclass axioms whose superclass position is exactly
    /// the given named class
    pub fn subclass_axioms_for_superclass(&self, class: &Class) -> Vec<&SubClassOfAxiom> {
        self.axioms
            .iter()
            .filter_map(|axiom| match axiom.as_ref() {
                Axiom::SubClassOf(sub)
                    if sub
                        .super_class()
                        .as_named()
                        .is_some_and(|c| c.iri() == class.iri()) =>
                {
                    Some(sub)
                }
                _ => None,
            })
            .collect()
    }

    /// Get the equivalent-classes axioms with the given class as a
    /// named member
    pub fn equivalent_classes_axioms(&self, class: &Class) -> Vec<&EquivalentClassesAxiom> {
        self.axioms
            .iter()
            .filter_map(|axiom| match axiom.as_ref() {
                Axiom::EquivalentClasses(equiv) if equiv.contains_named_member(class) => {
                    Some(equiv)
                }
                _ => None,
            })
            .collect()
    }

    /// Get the disjoint-classes axioms with the given class as a
    /// named member
    pub fn disjoint_classes_axioms(&self, class: &Class) -> Vec<&DisjointClassesAxiom> {
        self.axioms
            .iter()
            .filter_map(|axiom| match axiom.as_ref() {
                Axiom::DisjointClasses(disjoint) if disjoint.contains_named_member(class) => {
                    Some(disjoint)
                }
                _ => None,
            })
            .collect()
    }

    /// Get the sub-object-property axioms
    ///
    /// The property argument does not currently narrow the result;
    /// every sub-object-property axiom is returned.
    pub fn sub_object_property_axioms(
        &self,
        _property: &ObjectProperty,
    ) -> Vec<&SubObjectPropertyOfAxiom> {
        self.axioms
            .iter()
            .filter_map(|axiom| match axiom.as_ref() {
                Axiom::SubObjectPropertyOf(sub) => Some(sub),
                _ => None,
            })
            .collect()
    }

    /// Get the sub-data-property axioms mentioning the given property
    /// on either side
    pub fn sub_data_property_axioms(&self, property: &DataProperty) -> Vec<&SubDataPropertyOfAxiom> {
        self.axioms
            .iter()
            .filter_map(|axiom| match axiom.as_ref() {
                Axiom::SubDataPropertyOf(sub)
                    if sub.sub_property().iri() == property.iri()
                        || sub.super_property().iri() == property.iri() =>
                {
                    Some(sub)
                }
                _ => None,
            })
            .collect()
    }

    /// Get the class assertions whose subject is the given named
    /// individual. Assertions on anonymous individuals are ignored.
    pub fn class_assertions(&self, individual: &NamedIndividual) -> Vec<&ClassAssertionAxiom> {
        self.axioms
            .iter()
            .filter_map(|axiom| match axiom.as_ref() {
                Axiom::ClassAssertion(assertion)
                    if assertion.individual().is_named(individual) =>
                {
                    Some(assertion)
                }
                _ => None,
            })
            .collect()
    }

    /// Get the object property assertions whose subject is the given
    /// named individual
    pub fn object_property_assertions(
        &self,
        individual: &NamedIndividual,
    ) -> Vec<&ObjectPropertyAssertionAxiom> {
        self.axioms
            .iter()
            .filter_map(|axiom| match axiom.as_ref() {
                Axiom::ObjectPropertyAssertion(assertion)
                    if assertion.source().is_named(individual) =>
                {
                    Some(assertion)
                }
                _ => None,
            })
            .collect()
    }

    /// Get the data property assertions whose subject is the given
    /// named individual
    pub fn data_property_assertions(
        &self,
        individual: &NamedIndividual,
    ) -> Vec<&DataPropertyAssertionAxiom> {
        self.axioms
            .iter()
            .filter_map(|axiom| match axiom.as_ref() {
                Axiom::DataPropertyAssertion(assertion)
                    if assertion.source().is_named(individual) =>
                {
                    Some(assertion)
                }
                _ => None,
            })
            .collect()
    }

    // ---- derived entity sets ----
    //
    // Entity sets are derived from declaration axioms only. An entity
    // referenced by an axiom but never declared does not appear here.

    fn declared_iris(&self, kind: EntityKind) -> impl Iterator<Item = &IRI> + '_ {
        self.axioms.iter().filter_map(move |axiom| match axiom.as_ref() {
            Axiom::Declaration(decl) if decl.entity().kind() == kind => Some(decl.entity().iri()),
            _ => None,
        })
    }

    /// Get the declared classes
    pub fn classes(&self) -> HashSet<Class> {
        self.declared_iris(EntityKind::Class)
            .map(|iri| Class::new(iri.clone()))
            .collect()
    }

    /// Get the declared object properties
    pub fn object_properties(&self) -> HashSet<ObjectProperty> {
        self.declared_iris(EntityKind::ObjectProperty)
            .map(|iri| ObjectProperty::new(iri.clone()))
            .collect()
    }

    /// Get the declared data properties
    pub fn data_properties(&self) -> HashSet<DataProperty> {
        self.declared_iris(EntityKind::DataProperty)
            .map(|iri| DataProperty::new(iri.clone()))
            .collect()
    }

    /// Get the declared annotation properties
    pub fn annotation_properties(&self) -> HashSet<AnnotationProperty> {
        self.declared_iris(EntityKind::AnnotationProperty)
            .map(|iri| AnnotationProperty::new(iri.clone()))
            .collect()
    }

    /// Get the declared named individuals
    pub fn individuals(&self) -> HashSet<NamedIndividual> {
        self.declared_iris(EntityKind::NamedIndividual)
            .map(|iri| NamedIndividual::new(iri.clone()))
            .collect()
    }

    /// Get the declared datatypes
    pub fn datatypes(&self) -> HashSet<Datatype> {
        self.declared_iris(EntityKind::Datatype)
            .map(|iri| Datatype::new(iri.clone()))
            .collect()
    }

    fn is_declared(&self, kind: EntityKind, iri: &IRI) -> bool {
        self.declared_iris(kind).any(|declared| declared == iri)
    }

    /// Check whether the given class is declared
    pub fn contains_class(&self, class: &Class) -> bool {
        self.is_declared(EntityKind::Class, class.iri())
    }

    /// Check whether the given object property is declared
    pub fn contains_object_property(&self, property: &ObjectProperty) -> bool {
        self.is_declared(EntityKind::ObjectProperty, property.iri())
    }

    /// Check whether the given data property is declared
    pub fn contains_data_property(&self, property: &DataProperty) -> bool {
        self.is_declared(EntityKind::DataProperty, property.iri())
    }

    /// Check whether the given annotation property is declared
    pub fn contains_annotation_property(&self, property: &AnnotationProperty) -> bool {
        self.is_declared(EntityKind::AnnotationProperty, property.iri())
    }

    /// Check whether the given named individual is declared
    pub fn contains_individual(&self, individual: &NamedIndividual) -> bool {
        self.is_declared(EntityKind::NamedIndividual, individual.iri())
    }

    /// Check whether the given datatype is declared
    pub fn contains_datatype(&self, datatype: &Datatype) -> bool {
        self.is_declared(EntityKind::Datatype, datatype.iri())
    }

    /// Check whether the given entity is declared
    pub fn contains_entity(&self, entity: &Entity) -> bool {
        self.is_declared(entity.kind(), entity.iri())
    }

    // ---- statistics ----

    /// Get the number of axioms
    pub fn axiom_count(&self) -> usize {
        self.axioms.len()
    }

    /// Get the number of declared entities across all kinds
    pub fn entity_count(&self) -> usize {
        self.class_count()
            + self.object_property_count()
            + self.data_property_count()
            + self.annotation_properties().len()
            + self.individual_count()
            + self.datatypes().len()
    }

    /// Get the number of declared classes
    pub fn class_count(&self) -> usize {
        self.classes().len()
    }

    /// Get the number of declared object properties
    pub fn object_property_count(&self) -> usize {
        self.object_properties().len()
    }

    /// Get the number of declared data properties
    pub fn data_property_count(&self) -> usize {
        self.data_properties().len()
    }

    /// Get the number of declared named individuals
    pub fn individual_count(&self) -> usize {
        self.individuals().len()
    }

    /// Check whether the ontology holds no axioms
    pub fn is_empty(&self) -> bool {
        self.axioms.is_empty()
    }

    /// Produce a human-readable statistics report
    pub fn statistics(&self) -> String {
        let mut out = String::from("Ontology Statistics:\n");
        if let Some(iri) = &self.iri {
            let _ = writeln!(out, "  IRI: {iri}");
        }
        let _ = writeln!(out, "  Total Axioms: {}", self.axiom_count());
        let _ = writeln!(out, "  Total Entities: {}", self.entity_count());
        let _ = writeln!(out, "    Classes: {}", self.class_count());
        let _ = writeln!(out, "    Object Properties: {}", self.object_property_count());
        let _ = writeln!(out, "    Data Properties: {}", self.data_property_count());
        let _ = writeln!(
            out,
            "    Annotation Properties: {}",
            self.annotation_properties().len()
        );
        let _ = writeln!(out, "    Individuals: {}", self.individual_count());
        let _ = writeln!(out, "    Datatypes: {}", self.datatypes().len());
        let _ = writeln!(out, "  Imports: {}", self.imports.len());
        out
    }

    // ---- serialization ----

    /// Render the ontology in Functional Syntax with the default
    /// four-space indent
    pub fn to_functional_syntax(&self) -> String {
        self.to_functional_syntax_indented("    ")
    }

    /// Render the ontology in Functional Syntax with a custom indent
    ///
    /// Prefix declarations are emitted inside the `Ontology(` body in
    /// registration order, then imports, ontology annotations, and
    /// axioms in insertion order.
    pub fn to_functional_syntax_indented(&self, indent: &str) -> String {
        let mut out = String::from("Ontology(");
        if let Some(iri) = &self.iri {
            let _ = write!(out, "<{iri}>");
            if let Some(version) = &self.version_iri {
                let _ = write!(out, " <{version}>");
            }
        }
        out.push('\n');

        for (prefix, namespace) in &self.prefix_to_namespace {
            let _ = writeln!(out, "{indent}Prefix({prefix}:=<{namespace}>)");
        }
        for import in &self.imports {
            let _ = writeln!(out, "{indent}Import(<{import}>)");
        }
        for annotation in &self.ontology_annotations {
            let _ = writeln!(out, "{indent}{}", annotation.to_functional_syntax());
        }
        for axiom in &self.axioms {
            let _ = writeln!(out, "{indent}{}", axiom.to_functional_syntax());
        }

        out.push(')');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axioms::{ClassExpression, ObjectPropertyDomainAxiom};

    fn class(local: &str) -> Class {
        Class::new(format!("http://example.org/u#{local}"))
    }

    fn subclass(sub: &str, superclass: &str) -> Axiom {
        SubClassOfAxiom::new(class(sub).into(), class(superclass).into()).into()
    }

    #[test]
    fn test_empty_ontology() {
        let ontology = Ontology::new();
        assert!(ontology.is_empty());
        assert_eq!(ontology.axiom_count(), 0);
        assert_eq!(ontology.entity_count(), 0);
        // Standard prefixes are pre-registered.
        assert_eq!(ontology.namespace_for_prefix("owl"), Some(OWL_NS));
        assert_eq!(ontology.namespace_for_prefix("xsd"), Some(XSD_NS));
    }

    #[test]
    fn test_add_remove_restores_state() {
        let mut ontology = Ontology::new();
        let axiom = subclass("Student", "Person");

        assert!(ontology.add_axiom(axiom.clone()));
        assert_eq!(ontology.axiom_count(), 1);
        assert!(ontology.contains_axiom(&axiom));

        assert!(ontology.remove_axiom(&axiom));
        assert_eq!(ontology.axiom_count(), 0);
        assert!(!ontology.contains_axiom(&axiom));
    }

    #[test]
    fn test_remove_axiom_first_match_only() {
        let mut ontology = Ontology::new();
        let axiom = subclass("Student", "Person");
        ontology.add_axiom(axiom.clone());
        ontology.add_axiom(axiom.clone());
        assert_eq!(ontology.axiom_count(), 2);

        assert!(ontology.remove_axiom(&axiom));
        assert_eq!(ontology.axiom_count(), 1);
        assert!(ontology.contains_axiom(&axiom));

        assert!(ontology.remove_axiom(&axiom));
        assert!(!ontology.remove_axiom(&axiom));
    }

    #[test]
    fn test_axioms_keep_insertion_order() {
        let mut ontology = Ontology::new();
        ontology.add_axiom(subclass("A", "B"));
        ontology.add_axiom(subclass("B", "C"));
        ontology.add_axiom(subclass("A", "B"));

        let rendered: Vec<String> = ontology
            .axioms()
            .iter()
            .map(|axiom| axiom.to_functional_syntax())
            .collect();
        assert!(rendered[0].contains("u#A"));
        assert!(rendered[1].contains("u#B"));
        assert_eq!(rendered[0], rendered[2]);
    }

    #[test]
    fn test_derived_sets_come_from_declarations_only() {
        let mut ontology = Ontology::new();
        ontology.add_axiom(DeclarationAxiom::new(class("Person")));
        // Student is referenced but never declared.
        ontology.add_axiom(subclass("Student", "Person"));

        assert_eq!(ontology.class_count(), 1);
        assert!(ontology.contains_class(&class("Person")));
        assert!(!ontology.contains_class(&class("Student")));
    }

    #[test]
    fn test_subclass_queries_named_positions_only() {
        let mut ontology = Ontology::new();
        ontology.add_axiom(subclass("Student", "Person"));
        // Complex subclass position must not match the named query.
        let complex = SubClassOfAxiom::new(
            ClassExpression::object_some_values_from(
                ObjectProperty::new("http://example.org/u#enrolledIn"),
                class("Course").into(),
            ),
            class("Student").into(),
        );
        ontology.add_axiom(complex);

        let for_sub = ontology.subclass_axioms_for_subclass(&class("Student"));
        assert_eq!(for_sub.len(), 1);
        let for_super = ontology.subclass_axioms_for_superclass(&class("Student"));
        assert_eq!(for_super.len(), 1);
        let none = ontology.subclass_axioms_for_subclass(&class("Course"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_prefix_bijection_overwrite() {
        let mut ontology = Ontology::new();
        ontology.register_prefix("ex", "http://example.org/u#");
        ontology.register_prefix("ex", "http://other.example#");

        assert_eq!(
            ontology.namespace_for_prefix("ex"),
            Some("http://other.example#")
        );
        assert_eq!(ontology.prefix_for_namespace("http://example.org/u#"), None);
        assert_eq!(
            ontology.prefix_for_namespace("http://other.example#"),
            Some("ex")
        );
    }

    #[test]
    fn test_prefix_bijection_namespace_reassigned() {
        let mut ontology = Ontology::new();
        ontology.register_prefix("a", "http://ns.example/#");
        ontology.register_prefix("b", "http://ns.example/#");

        assert_eq!(ontology.namespace_for_prefix("a"), None);
        assert_eq!(ontology.namespace_for_prefix("b"), Some("http://ns.example/#"));
        assert_eq!(ontology.prefix_for_namespace("http://ns.example/#"), Some("b"));
    }

    #[test]
    fn test_imports() {
        let mut ontology = Ontology::new();
        let import = IRI::new("http://example.org/upper").unwrap();
        ontology.add_import(import.clone());
        assert!(ontology.has_import(&import));
        assert_eq!(ontology.imports().len(), 1);

        ontology.remove_import(&import);
        assert!(!ontology.has_import(&import));
    }

    #[test]
    fn test_functional_syntax_scenario() {
        let mut ontology = Ontology::with_iri("http://example.org/u");
        ontology.register_prefix("ex", "http://example.org/u#");
        ontology.add_axiom(DeclarationAxiom::new(class("Person")));
        ontology.add_axiom(DeclarationAxiom::new(class("Student")));
        ontology.add_axiom(DeclarationAxiom::new(ObjectProperty::new(
            "http://example.org/u#teaches",
        )));
        ontology.add_axiom(subclass("Student", "Person"));
        ontology.add_axiom(ObjectPropertyDomainAxiom::new(
            ObjectProperty::new("http://example.org/u#teaches").into(),
            class("Person").into(),
        ));

        let output = ontology.to_functional_syntax();
        assert!(output.starts_with("Ontology(<http://example.org/u>\n"));
        assert!(output.contains("Declaration(Class(<http://example.org/u#Person>))"));
        assert!(output.contains("Declaration(Class(<http://example.org/u#Student>))"));
        assert!(output.contains("Declaration(ObjectProperty(<http://example.org/u#teaches>))"));
        assert!(output
            .contains("SubClassOf(<http://example.org/u#Student> <http://example.org/u#Person>)"));
        assert!(output.contains(
            "ObjectPropertyDomain(<http://example.org/u#teaches> <http://example.org/u#Person>)"
        ));
        assert!(output.ends_with(')'));
    }

    #[test]
    fn test_assertion_queries_ignore_anonymous() {
        use crate::entities::AnonymousIndividual;

        let mut ontology = Ontology::new();
        let alice = NamedIndividual::new("http://example.org/u#alice");
        ontology.add_axiom(ClassAssertionAxiom::new(class("Person").into(), alice.clone()));
        ontology.add_axiom(ClassAssertionAxiom::new(
            class("Person").into(),
            AnonymousIndividual::new("n1"),
        ));

        assert_eq!(ontology.class_assertions(&alice).len(), 1);
    }

    #[test]
    fn test_statistics_report() {
        let mut ontology = Ontology::with_iri("http://example.org/u");
        ontology.add_axiom(DeclarationAxiom::new(class("Person")));
        let report = ontology.statistics();
        assert!(report.contains("Ontology Statistics:"));
        assert!(report.contains("IRI: http://example.org/u"));
        assert!(report.contains("Total Axioms: 1"));
        assert!(report.contains("Classes: 1"));
    }
}
