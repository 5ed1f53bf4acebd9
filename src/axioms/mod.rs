//! OWL2 axioms: logical statements about entities
//!
//! Every axiom is an immutable record carrying its structural payload
//! plus an optional list of annotations, wrapped into the [`Axiom`]
//! sum type the ontology store holds. Type-dispatched queries match
//! on the [`AxiomType`] discriminator.

pub mod annotation_axioms;
pub mod assertions;
pub mod class_axioms;
pub mod class_expressions;
pub mod data_ranges;
pub mod property_axioms;

pub use annotation_axioms::*;
pub use assertions::*;
pub use class_axioms::*;
pub use class_expressions::*;
pub use data_ranges::*;
pub use property_axioms::*;

use crate::entities::{Annotation, Datatype, Entity, Individual};
use smallvec::SmallVec;

/// Format a leading annotation block for an axiom's functional form.
/// Annotations come first inside the parentheses, each followed by a
/// single space.
pub(crate) fn format_annotations(annotations: &[Annotation]) -> String {
    let mut out = String::new();
    for annotation in annotations {
        out.push_str(&annotation.to_functional_syntax());
        out.push(' ');
    }
    out
}

/// Declaration axiom: states that a named entity exists in the
/// ontology's vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclarationAxiom {
    entity: Entity,
    annotations: SmallVec<[Annotation; 4]>,
}

impl DeclarationAxiom {
    /// Declare the given entity
    pub fn new<E: Into<Entity>>(entity: E) -> Self {
        Self::with_annotations(entity, Vec::new())
    }

    /// Declare the given entity with annotations
    pub fn with_annotations<E: Into<Entity>>(entity: E, annotations: Vec<Annotation>) -> Self {
        DeclarationAxiom {
            entity: entity.into(),
            annotations: annotations.into(),
        }
    }

    /// Get the declared entity
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Get the annotations on this axiom
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Render this axiom in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        format!(
            "Declaration({}{}(<{}>))",
            format_annotations(&self.annotations),
            self.entity.kind().name(),
            self.entity.iri()
        )
    }
}

/// Datatype definition axiom: names a datatype for a data range
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatatypeDefinitionAxiom {
    datatype: Datatype,
    data_range: DataRange,
    annotations: SmallVec<[Annotation; 4]>,
}

impl DatatypeDefinitionAxiom {
    /// Create a new datatype definition
    pub fn new(datatype: Datatype, data_range: DataRange) -> Self {
        Self::with_annotations(datatype, data_range, Vec::new())
    }

    /// Create a new datatype definition with annotations
    pub fn with_annotations(
        datatype: Datatype,
        data_range: DataRange,
        annotations: Vec<Annotation>,
    ) -> Self {
        DatatypeDefinitionAxiom {
            datatype,
            data_range,
            annotations: annotations.into(),
        }
    }

    /// Get the defined datatype
    pub fn datatype(&self) -> &Datatype {
        &self.datatype
    }

    /// Get the defining data range
    pub fn data_range(&self) -> &DataRange {
        &self.data_range
    }

    /// Get the annotations on this axiom
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Render this axiom in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        format!(
            "DatatypeDefinition({}<{}> {})",
            format_annotations(&self.annotations),
            self.datatype.iri(),
            self.data_range.to_functional_syntax()
        )
    }
}

/// Has-key axiom: instances of the class expression are uniquely
/// identified by the listed property values
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HasKeyAxiom {
    class_expression: ClassExpression,
    object_properties: Vec<ObjectPropertyExpression>,
    data_properties: Vec<crate::entities::DataProperty>,
    annotations: SmallVec<[Annotation; 4]>,
}

impl HasKeyAxiom {
    /// Create a new has-key axiom
    pub fn new(
        class_expression: ClassExpression,
        object_properties: Vec<ObjectPropertyExpression>,
        data_properties: Vec<crate::entities::DataProperty>,
    ) -> Self {
        Self::with_annotations(class_expression, object_properties, data_properties, Vec::new())
    }

    /// Create a new has-key axiom with annotations
    pub fn with_annotations(
        class_expression: ClassExpression,
        object_properties: Vec<ObjectPropertyExpression>,
        data_properties: Vec<crate::entities::DataProperty>,
        annotations: Vec<Annotation>,
    ) -> Self {
        HasKeyAxiom {
            class_expression,
            object_properties,
            data_properties,
            annotations: annotations.into(),
        }
    }

    /// Get the keyed class expression
    pub fn class_expression(&self) -> &ClassExpression {
        &self.class_expression
    }

    /// Get the object property keys
    pub fn object_properties(&self) -> &[ObjectPropertyExpression] {
        &self.object_properties
    }

    /// Get the data property keys
    pub fn data_properties(&self) -> &[crate::entities::DataProperty] {
        &self.data_properties
    }

    /// Get the annotations on this axiom
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Render this axiom in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        let opes = self
            .object_properties
            .iter()
            .map(|p| p.to_functional_syntax())
            .collect::<Vec<_>>()
            .join(" ");
        let dps = self
            .data_properties
            .iter()
            .map(|p| format!("<{}>", p.iri()))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "HasKey({}{} ({}) ({}))",
            format_annotations(&self.annotations),
            self.class_expression.to_functional_syntax(),
            opes,
            dps
        )
    }
}

macro_rules! axiom_variants {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        /// Any OWL2 axiom
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum Axiom {
            $($variant($ty),)*
        }

        /// Axiom type discriminator for type-dispatched queries
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum AxiomType {
            $($variant,)*
        }

        impl AxiomType {
            /// The Functional-Syntax keyword for this axiom type
            pub fn name(&self) -> &'static str {
                match self {
                    $(AxiomType::$variant => stringify!($variant),)*
                }
            }
        }

        impl Axiom {
            /// Get the type discriminator of this axiom
            pub fn axiom_type(&self) -> AxiomType {
                match self {
                    $(Axiom::$variant(_) => AxiomType::$variant,)*
                }
            }

            /// Get the annotations on this axiom
            pub fn annotations(&self) -> &[Annotation] {
                match self {
                    $(Axiom::$variant(axiom) => axiom.annotations(),)*
                }
            }

            /// Render this axiom in Functional Syntax
            pub fn to_functional_syntax(&self) -> String {
                match self {
                    $(Axiom::$variant(axiom) => axiom.to_functional_syntax(),)*
                }
            }
        }

        $(
            impl From<$ty> for Axiom {
                fn from(axiom: $ty) -> Self {
                    Axiom::$variant(axiom)
                }
            }
        )*
    };
}

axiom_variants! {
    Declaration(DeclarationAxiom),
    SubClassOf(SubClassOfAxiom),
    EquivalentClasses(EquivalentClassesAxiom),
    DisjointClasses(DisjointClassesAxiom),
    DisjointUnion(DisjointUnionAxiom),
    SubObjectPropertyOf(SubObjectPropertyOfAxiom),
    EquivalentObjectProperties(EquivalentObjectPropertiesAxiom),
    DisjointObjectProperties(DisjointObjectPropertiesAxiom),
    InverseObjectProperties(InverseObjectPropertiesAxiom),
    ObjectPropertyDomain(ObjectPropertyDomainAxiom),
    ObjectPropertyRange(ObjectPropertyRangeAxiom),
    FunctionalObjectProperty(FunctionalObjectPropertyAxiom),
    InverseFunctionalObjectProperty(InverseFunctionalObjectPropertyAxiom),
    ReflexiveObjectProperty(ReflexiveObjectPropertyAxiom),
    IrreflexiveObjectProperty(IrreflexiveObjectPropertyAxiom),
    SymmetricObjectProperty(SymmetricObjectPropertyAxiom),
    AsymmetricObjectProperty(AsymmetricObjectPropertyAxiom),
    TransitiveObjectProperty(TransitiveObjectPropertyAxiom),
    SubDataPropertyOf(SubDataPropertyOfAxiom),
    EquivalentDataProperties(EquivalentDataPropertiesAxiom),
    DisjointDataProperties(DisjointDataPropertiesAxiom),
    DataPropertyDomain(DataPropertyDomainAxiom),
    DataPropertyRange(DataPropertyRangeAxiom),
    FunctionalDataProperty(FunctionalDataPropertyAxiom),
    SameIndividual(SameIndividualAxiom),
    DifferentIndividuals(DifferentIndividualsAxiom),
    ClassAssertion(ClassAssertionAxiom),
    ObjectPropertyAssertion(ObjectPropertyAssertionAxiom),
    NegativeObjectPropertyAssertion(NegativeObjectPropertyAssertionAxiom),
    DataPropertyAssertion(DataPropertyAssertionAxiom),
    NegativeDataPropertyAssertion(NegativeDataPropertyAssertionAxiom),
    AnnotationAssertion(AnnotationAssertionAxiom),
    SubAnnotationPropertyOf(SubAnnotationPropertyOfAxiom),
    AnnotationPropertyDomain(AnnotationPropertyDomainAxiom),
    AnnotationPropertyRange(AnnotationPropertyRangeAxiom),
    DatatypeDefinition(DatatypeDefinitionAxiom),
    HasKey(HasKeyAxiom),
}

impl Axiom {
    /// Check whether this is a class axiom (subsumption, equivalence,
    /// disjointness, disjoint union)
    pub fn is_class_axiom(&self) -> bool {
        matches!(
            self,
            Axiom::SubClassOf(_)
                | Axiom::EquivalentClasses(_)
                | Axiom::DisjointClasses(_)
                | Axiom::DisjointUnion(_)
        )
    }

    /// Check whether this is an object-property axiom
    pub fn is_object_property_axiom(&self) -> bool {
        matches!(
            self,
            Axiom::SubObjectPropertyOf(_)
                | Axiom::EquivalentObjectProperties(_)
                | Axiom::DisjointObjectProperties(_)
                | Axiom::InverseObjectProperties(_)
                | Axiom::ObjectPropertyDomain(_)
                | Axiom::ObjectPropertyRange(_)
                | Axiom::FunctionalObjectProperty(_)
                | Axiom::InverseFunctionalObjectProperty(_)
                | Axiom::ReflexiveObjectProperty(_)
                | Axiom::IrreflexiveObjectProperty(_)
                | Axiom::SymmetricObjectProperty(_)
                | Axiom::AsymmetricObjectProperty(_)
                | Axiom::TransitiveObjectProperty(_)
        )
    }

    /// Check whether this is a data-property axiom
    pub fn is_data_property_axiom(&self) -> bool {
        matches!(
            self,
            Axiom::SubDataPropertyOf(_)
                | Axiom::EquivalentDataProperties(_)
                | Axiom::DisjointDataProperties(_)
                | Axiom::DataPropertyDomain(_)
                | Axiom::DataPropertyRange(_)
                | Axiom::FunctionalDataProperty(_)
        )
    }

    /// Check whether this is an assertion axiom about individuals
    pub fn is_assertion_axiom(&self) -> bool {
        matches!(
            self,
            Axiom::SameIndividual(_)
                | Axiom::DifferentIndividuals(_)
                | Axiom::ClassAssertion(_)
                | Axiom::ObjectPropertyAssertion(_)
                | Axiom::NegativeObjectPropertyAssertion(_)
                | Axiom::DataPropertyAssertion(_)
                | Axiom::NegativeDataPropertyAssertion(_)
        )
    }

    /// Check whether this is an annotation axiom
    pub fn is_annotation_axiom(&self) -> bool {
        matches!(
            self,
            Axiom::AnnotationAssertion(_)
                | Axiom::SubAnnotationPropertyOf(_)
                | Axiom::AnnotationPropertyDomain(_)
                | Axiom::AnnotationPropertyRange(_)
        )
    }

    /// Collect every named entity this axiom mentions
    ///
    /// Used to materialize declarations for filtered subgraphs. Literal
    /// datatypes inside data values are not part of the signature.
    pub fn signature(&self) -> Vec<Entity> {
        let mut out = Vec::new();
        match self {
            Axiom::Declaration(axiom) => out.push(axiom.entity().clone()),
            Axiom::SubClassOf(axiom) => {
                class_expression_signature(axiom.sub_class(), &mut out);
                class_expression_signature(axiom.super_class(), &mut out);
            }
            Axiom::EquivalentClasses(axiom) => {
                for expr in axiom.classes() {
                    class_expression_signature(expr, &mut out);
                }
            }
            Axiom::DisjointClasses(axiom) => {
                for expr in axiom.classes() {
                    class_expression_signature(expr, &mut out);
                }
            }
            Axiom::DisjointUnion(axiom) => {
                out.push(Entity::Class(axiom.class().clone()));
                for expr in axiom.disjoint_classes() {
                    class_expression_signature(expr, &mut out);
                }
            }
            Axiom::SubObjectPropertyOf(axiom) => {
                for expr in axiom.sub_property().expressions() {
                    out.push(Entity::ObjectProperty(expr.property().clone()));
                }
                out.push(Entity::ObjectProperty(
                    axiom.super_property().property().clone(),
                ));
            }
            Axiom::EquivalentObjectProperties(axiom) => {
                for expr in axiom.properties() {
                    out.push(Entity::ObjectProperty(expr.property().clone()));
                }
            }
            Axiom::DisjointObjectProperties(axiom) => {
                for expr in axiom.properties() {
                    out.push(Entity::ObjectProperty(expr.property().clone()));
                }
            }
            Axiom::InverseObjectProperties(axiom) => {
                out.push(Entity::ObjectProperty(axiom.first().property().clone()));
                out.push(Entity::ObjectProperty(axiom.second().property().clone()));
            }
            Axiom::ObjectPropertyDomain(axiom) => {
                out.push(Entity::ObjectProperty(axiom.property().property().clone()));
                class_expression_signature(axiom.domain(), &mut out);
            }
            Axiom::ObjectPropertyRange(axiom) => {
                out.push(Entity::ObjectProperty(axiom.property().property().clone()));
                class_expression_signature(axiom.range(), &mut out);
            }
            Axiom::FunctionalObjectProperty(axiom) => {
                out.push(Entity::ObjectProperty(axiom.property().property().clone()));
            }
            Axiom::InverseFunctionalObjectProperty(axiom) => {
                out.push(Entity::ObjectProperty(axiom.property().property().clone()));
            }
            Axiom::ReflexiveObjectProperty(axiom) => {
                out.push(Entity::ObjectProperty(axiom.property().property().clone()));
            }
            Axiom::IrreflexiveObjectProperty(axiom) => {
                out.push(Entity::ObjectProperty(axiom.property().property().clone()));
            }
            Axiom::SymmetricObjectProperty(axiom) => {
                out.push(Entity::ObjectProperty(axiom.property().property().clone()));
            }
            Axiom::AsymmetricObjectProperty(axiom) => {
                out.push(Entity::ObjectProperty(axiom.property().property().clone()));
            }
            Axiom::TransitiveObjectProperty(axiom) => {
                out.push(Entity::ObjectProperty(axiom.property().property().clone()));
            }
            Axiom::SubDataPropertyOf(axiom) => {
                out.push(Entity::DataProperty(axiom.sub_property().clone()));
                out.push(Entity::DataProperty(axiom.super_property().clone()));
            }
            Axiom::EquivalentDataProperties(axiom) => {
                for property in axiom.properties() {
                    out.push(Entity::DataProperty(property.clone()));
                }
            }
            Axiom::DisjointDataProperties(axiom) => {
                for property in axiom.properties() {
                    out.push(Entity::DataProperty(property.clone()));
                }
            }
            Axiom::DataPropertyDomain(axiom) => {
                out.push(Entity::DataProperty(axiom.property().clone()));
                class_expression_signature(axiom.domain(), &mut out);
            }
            Axiom::DataPropertyRange(axiom) => {
                out.push(Entity::DataProperty(axiom.property().clone()));
                data_range_signature(axiom.range(), &mut out);
            }
            Axiom::FunctionalDataProperty(axiom) => {
                out.push(Entity::DataProperty(axiom.property().clone()));
            }
            Axiom::SameIndividual(axiom) => {
                individuals_signature(axiom.individuals(), &mut out);
            }
            Axiom::DifferentIndividuals(axiom) => {
                individuals_signature(axiom.individuals(), &mut out);
            }
            Axiom::ClassAssertion(axiom) => {
                class_expression_signature(axiom.class_expression(), &mut out);
                individuals_signature(std::slice::from_ref(axiom.individual()), &mut out);
            }
            Axiom::ObjectPropertyAssertion(axiom) => {
                out.push(Entity::ObjectProperty(axiom.property().clone()));
                individuals_signature(std::slice::from_ref(axiom.source()), &mut out);
                individuals_signature(std::slice::from_ref(axiom.target()), &mut out);
            }
            Axiom::NegativeObjectPropertyAssertion(axiom) => {
                out.push(Entity::ObjectProperty(axiom.property().clone()));
                individuals_signature(std::slice::from_ref(axiom.source()), &mut out);
                individuals_signature(std::slice::from_ref(axiom.target()), &mut out);
            }
            Axiom::DataPropertyAssertion(axiom) => {
                out.push(Entity::DataProperty(axiom.property().clone()));
                individuals_signature(std::slice::from_ref(axiom.source()), &mut out);
            }
            Axiom::NegativeDataPropertyAssertion(axiom) => {
                out.push(Entity::DataProperty(axiom.property().clone()));
                individuals_signature(std::slice::from_ref(axiom.source()), &mut out);
            }
            Axiom::AnnotationAssertion(axiom) => {
                out.push(Entity::AnnotationProperty(axiom.property().clone()));
            }
            Axiom::SubAnnotationPropertyOf(axiom) => {
                out.push(Entity::AnnotationProperty(axiom.sub_property().clone()));
                out.push(Entity::AnnotationProperty(axiom.super_property().clone()));
            }
            Axiom::AnnotationPropertyDomain(axiom) => {
                out.push(Entity::AnnotationProperty(axiom.property().clone()));
            }
            Axiom::AnnotationPropertyRange(axiom) => {
                out.push(Entity::AnnotationProperty(axiom.property().clone()));
            }
            Axiom::DatatypeDefinition(axiom) => {
                out.push(Entity::Datatype(axiom.datatype().clone()));
                data_range_signature(axiom.data_range(), &mut out);
            }
            Axiom::HasKey(axiom) => {
                class_expression_signature(axiom.class_expression(), &mut out);
                for expr in axiom.object_properties() {
                    out.push(Entity::ObjectProperty(expr.property().clone()));
                }
                for property in axiom.data_properties() {
                    out.push(Entity::DataProperty(property.clone()));
                }
            }
        }
        out
    }
}

fn class_expression_signature(expr: &ClassExpression, out: &mut Vec<Entity>) {
    let mut classes = Vec::new();
    expr.named_classes(&mut classes);
    out.extend(classes.into_iter().map(Entity::Class));

    let mut properties = Vec::new();
    expr.object_properties(&mut properties);
    out.extend(properties.into_iter().map(Entity::ObjectProperty));
}

fn data_range_signature(range: &DataRange, out: &mut Vec<Entity>) {
    let mut datatypes = Vec::new();
    range.datatypes(&mut datatypes);
    out.extend(datatypes.into_iter().map(Entity::Datatype));
}

fn individuals_signature(individuals: &[Individual], out: &mut Vec<Entity>) {
    for individual in individuals {
        if let Individual::Named(named) = individual {
            out.push(Entity::NamedIndividual(named.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Class, NamedIndividual, ObjectProperty};

    fn class(local: &str) -> Class {
        Class::new(format!("http://example.org/u#{local}"))
    }

    #[test]
    fn test_declaration_functional_syntax() {
        let axiom = DeclarationAxiom::new(class("Person"));
        assert_eq!(
            axiom.to_functional_syntax(),
            "Declaration(Class(<http://example.org/u#Person>))"
        );
    }

    #[test]
    fn test_axiom_type_names() {
        let decl: Axiom = DeclarationAxiom::new(class("A")).into();
        let sub: Axiom = SubClassOfAxiom::new(class("A").into(), class("B").into()).into();
        assert_eq!(decl.axiom_type().name(), "Declaration");
        assert_eq!(sub.axiom_type().name(), "SubClassOf");
    }

    #[test]
    fn test_family_predicates_partition() {
        let sub: Axiom = SubClassOfAxiom::new(class("A").into(), class("B").into()).into();
        assert!(sub.is_class_axiom());
        assert!(!sub.is_object_property_axiom());
        assert!(!sub.is_assertion_axiom());

        let assertion: Axiom = ClassAssertionAxiom::new(
            class("A").into(),
            NamedIndividual::new("http://example.org/u#a"),
        )
        .into();
        assert!(assertion.is_assertion_axiom());
        assert!(!assertion.is_class_axiom());

        let decl: Axiom = DeclarationAxiom::new(class("A")).into();
        assert!(!decl.is_class_axiom());
        assert!(!decl.is_annotation_axiom());
    }

    #[test]
    fn test_structural_equality_for_removal() {
        let a: Axiom = SubClassOfAxiom::new(class("A").into(), class("B").into()).into();
        let b: Axiom = SubClassOfAxiom::new(class("A").into(), class("B").into()).into();
        let c: Axiom = SubClassOfAxiom::new(class("B").into(), class("A").into()).into();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_signature_of_assertion() {
        let axiom: Axiom = ObjectPropertyAssertionAxiom::new(
            ObjectProperty::new("http://example.org/u#p"),
            NamedIndividual::new("http://example.org/u#a"),
            NamedIndividual::new("http://example.org/u#b"),
        )
        .into();

        let signature = axiom.signature();
        assert_eq!(signature.len(), 3);
        assert!(signature
            .iter()
            .any(|e| matches!(e, Entity::ObjectProperty(_))));
        assert_eq!(
            signature
                .iter()
                .filter(|e| matches!(e, Entity::NamedIndividual(_)))
                .count(),
            2
        );
    }

    #[test]
    fn test_signature_of_subclass_with_restriction() {
        let expr = ClassExpression::object_some_values_from(
            ObjectProperty::new("http://example.org/u#teaches"),
            class("Course").into(),
        );
        let axiom: Axiom = SubClassOfAxiom::new(class("Teacher").into(), expr).into();
        let signature = axiom.signature();

        assert!(signature.contains(&Entity::Class(class("Teacher"))));
        assert!(signature.contains(&Entity::Class(class("Course"))));
        assert!(signature.contains(&Entity::ObjectProperty(ObjectProperty::new(
            "http://example.org/u#teaches"
        ))));
    }

    #[test]
    fn test_has_key_syntax() {
        let axiom = HasKeyAxiom::new(
            class("Person").into(),
            vec![],
            vec![crate::entities::DataProperty::new("http://example.org/u#ssn")],
        );
        assert_eq!(
            axiom.to_functional_syntax(),
            "HasKey(<http://example.org/u#Person> () (<http://example.org/u#ssn>))"
        );
    }
}
