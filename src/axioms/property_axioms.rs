//! Object-property and data-property axioms

use super::class_expressions::{ClassExpression, ObjectPropertyExpression};
use super::data_ranges::DataRange;
use super::format_annotations;
use crate::entities::{Annotation, DataProperty};
use smallvec::SmallVec;

/// The sub side of a `SubObjectPropertyOf` axiom: a single property
/// expression, or a property chain
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SubObjectPropertyExpression {
    Expression(ObjectPropertyExpression),
    PropertyChain(Vec<ObjectPropertyExpression>),
}

impl SubObjectPropertyExpression {
    /// Collect the property expressions on this side
    pub fn expressions(&self) -> &[ObjectPropertyExpression] {
        match self {
            SubObjectPropertyExpression::Expression(expr) => std::slice::from_ref(expr),
            SubObjectPropertyExpression::PropertyChain(chain) => chain,
        }
    }

    /// Render this expression in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        match self {
            SubObjectPropertyExpression::Expression(expr) => expr.to_functional_syntax(),
            SubObjectPropertyExpression::PropertyChain(chain) => {
                format!("ObjectPropertyChain({})", join_property_expressions(chain))
            }
        }
    }
}

impl From<ObjectPropertyExpression> for SubObjectPropertyExpression {
    fn from(expr: ObjectPropertyExpression) -> Self {
        SubObjectPropertyExpression::Expression(expr)
    }
}

/// Sub-object-property axiom, including the property-chain form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubObjectPropertyOfAxiom {
    sub_property: SubObjectPropertyExpression,
    super_property: ObjectPropertyExpression,
    annotations: SmallVec<[Annotation; 4]>,
}

impl SubObjectPropertyOfAxiom {
    /// Create a new sub-object-property axiom
    pub fn new<S: Into<SubObjectPropertyExpression>>(
        sub_property: S,
        super_property: ObjectPropertyExpression,
    ) -> Self {
        Self::with_annotations(sub_property, super_property, Vec::new())
    }

    /// Create a new sub-object-property axiom with annotations
    pub fn with_annotations<S: Into<SubObjectPropertyExpression>>(
        sub_property: S,
        super_property: ObjectPropertyExpression,
        annotations: Vec<Annotation>,
    ) -> Self {
        SubObjectPropertyOfAxiom {
            sub_property: sub_property.into(),
            super_property,
            annotations: annotations.into(),
        }
    }

    /// Get the sub property side
    pub fn sub_property(&self) -> &SubObjectPropertyExpression {
        &self.sub_property
    }

    /// Get the super property
    pub fn super_property(&self) -> &ObjectPropertyExpression {
        &self.super_property
    }

    /// Get the annotations on this axiom
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Render this axiom in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        format!(
            "SubObjectPropertyOf({}{} {})",
            format_annotations(&self.annotations),
            self.sub_property.to_functional_syntax(),
            self.super_property.to_functional_syntax()
        )
    }
}

macro_rules! property_list_axiom {
    ($(#[$doc:meta])* $name:ident, $keyword:literal, $item:ty, $render:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            properties: Vec<$item>,
            annotations: SmallVec<[Annotation; 4]>,
        }

        impl $name {
            /// Create a new axiom over the given properties
            pub fn new(properties: Vec<$item>) -> Self {
                Self::with_annotations(properties, Vec::new())
            }

            /// Create a new axiom with annotations
            pub fn with_annotations(
                properties: Vec<$item>,
                annotations: Vec<Annotation>,
            ) -> Self {
                $name {
                    properties,
                    annotations: annotations.into(),
                }
            }

            /// Get the member properties
            pub fn properties(&self) -> &[$item] {
                &self.properties
            }

            /// Get the annotations on this axiom
            pub fn annotations(&self) -> &[Annotation] {
                &self.annotations
            }

            /// Render this axiom in Functional Syntax
            pub fn to_functional_syntax(&self) -> String {
                let render: fn(&$item) -> String = $render;
                let body = self
                    .properties
                    .iter()
                    .map(render)
                    .collect::<Vec<_>>()
                    .join(" ");
                format!(
                    "{}({}{})",
                    $keyword,
                    format_annotations(&self.annotations),
                    body
                )
            }
        }
    };
}

property_list_axiom!(
    /// Equivalent object properties axiom
    EquivalentObjectPropertiesAxiom,
    "EquivalentObjectProperties",
    ObjectPropertyExpression,
    |p| p.to_functional_syntax()
);

property_list_axiom!(
    /// Disjoint object properties axiom
    DisjointObjectPropertiesAxiom,
    "DisjointObjectProperties",
    ObjectPropertyExpression,
    |p| p.to_functional_syntax()
);

property_list_axiom!(
    /// Equivalent data properties axiom
    EquivalentDataPropertiesAxiom,
    "EquivalentDataProperties",
    DataProperty,
    |p| format!("<{}>", p.iri())
);

property_list_axiom!(
    /// Disjoint data properties axiom
    DisjointDataPropertiesAxiom,
    "DisjointDataProperties",
    DataProperty,
    |p| format!("<{}>", p.iri())
);

/// Inverse object properties axiom: each property is the inverse of
/// the other
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InverseObjectPropertiesAxiom {
    first: ObjectPropertyExpression,
    second: ObjectPropertyExpression,
    annotations: SmallVec<[Annotation; 4]>,
}

impl InverseObjectPropertiesAxiom {
    /// Create a new inverse object properties axiom
    pub fn new(first: ObjectPropertyExpression, second: ObjectPropertyExpression) -> Self {
        Self::with_annotations(first, second, Vec::new())
    }

    /// Create a new inverse object properties axiom with annotations
    pub fn with_annotations(
        first: ObjectPropertyExpression,
        second: ObjectPropertyExpression,
        annotations: Vec<Annotation>,
    ) -> Self {
        InverseObjectPropertiesAxiom {
            first,
            second,
            annotations: annotations.into(),
        }
    }

    /// Get the first property
    pub fn first(&self) -> &ObjectPropertyExpression {
        &self.first
    }

    /// Get the second property
    pub fn second(&self) -> &ObjectPropertyExpression {
        &self.second
    }

    /// Get the annotations on this axiom
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Render this axiom in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        format!(
            "InverseObjectProperties({}{} {})",
            format_annotations(&self.annotations),
            self.first.to_functional_syntax(),
            self.second.to_functional_syntax()
        )
    }
}

/// Object property domain axiom
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectPropertyDomainAxiom {
    property: ObjectPropertyExpression,
    domain: ClassExpression,
    annotations: SmallVec<[Annotation; 4]>,
}

impl ObjectPropertyDomainAxiom {
    /// Create a new object property domain axiom
    pub fn new(property: ObjectPropertyExpression, domain: ClassExpression) -> Self {
        Self::with_annotations(property, domain, Vec::new())
    }

    /// Create a new object property domain axiom with annotations
    pub fn with_annotations(
        property: ObjectPropertyExpression,
        domain: ClassExpression,
        annotations: Vec<Annotation>,
    ) -> Self {
        ObjectPropertyDomainAxiom {
            property,
            domain,
            annotations: annotations.into(),
        }
    }

    /// Get the property
    pub fn property(&self) -> &ObjectPropertyExpression {
        &self.property
    }

    /// Get the domain class expression
    pub fn domain(&self) -> &ClassExpression {
        &self.domain
    }

    /// Get the annotations on this axiom
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Render this axiom in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        format!(
            "ObjectPropertyDomain({}{} {})",
            format_annotations(&self.annotations),
            self.property.to_functional_syntax(),
            self.domain.to_functional_syntax()
        )
    }
}

/// Object property range axiom
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectPropertyRangeAxiom {
    property: ObjectPropertyExpression,
    range: ClassExpression,
    annotations: SmallVec<[Annotation; 4]>,
}

impl ObjectPropertyRangeAxiom {
    /// Create a new object property range axiom
    pub fn new(property: ObjectPropertyExpression, range: ClassExpression) -> Self {
        Self::with_annotations(property, range, Vec::new())
    }

    /// Create a new object property range axiom with annotations
    pub fn with_annotations(
        property: ObjectPropertyExpression,
        range: ClassExpression,
        annotations: Vec<Annotation>,
    ) -> Self {
        ObjectPropertyRangeAxiom {
            property,
            range,
            annotations: annotations.into(),
        }
    }

    /// Get the property
    pub fn property(&self) -> &ObjectPropertyExpression {
        &self.property
    }

    /// Get the range class expression
    pub fn range(&self) -> &ClassExpression {
        &self.range
    }

    /// Get the annotations on this axiom
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Render this axiom in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        format!(
            "ObjectPropertyRange({}{} {})",
            format_annotations(&self.annotations),
            self.property.to_functional_syntax(),
            self.range.to_functional_syntax()
        )
    }
}

macro_rules! object_property_characteristic_axiom {
    ($(#[$doc:meta])* $name:ident, $keyword:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            property: ObjectPropertyExpression,
            annotations: SmallVec<[Annotation; 4]>,
        }

        impl $name {
            /// Create a new characteristic axiom for the given property
            pub fn new(property: ObjectPropertyExpression) -> Self {
                Self::with_annotations(property, Vec::new())
            }

            /// Create a new characteristic axiom with annotations
            pub fn with_annotations(
                property: ObjectPropertyExpression,
                annotations: Vec<Annotation>,
            ) -> Self {
                $name {
                    property,
                    annotations: annotations.into(),
                }
            }

            /// Get the property
            pub fn property(&self) -> &ObjectPropertyExpression {
                &self.property
            }

            /// Get the annotations on this axiom
            pub fn annotations(&self) -> &[Annotation] {
                &self.annotations
            }

            /// Render this axiom in Functional Syntax
            pub fn to_functional_syntax(&self) -> String {
                format!(
                    "{}({}{})",
                    $keyword,
                    format_annotations(&self.annotations),
                    self.property.to_functional_syntax()
                )
            }
        }
    };
}

object_property_characteristic_axiom!(
    /// Functional object property axiom
    FunctionalObjectPropertyAxiom,
    "FunctionalObjectProperty"
);
object_property_characteristic_axiom!(
    /// Inverse functional object property axiom
    InverseFunctionalObjectPropertyAxiom,
    "InverseFunctionalObjectProperty"
);
object_property_characteristic_axiom!(
    /// Reflexive object property axiom
    ReflexiveObjectPropertyAxiom,
    "ReflexiveObjectProperty"
);
object_property_characteristic_axiom!(
    /// Irreflexive object property axiom
    IrreflexiveObjectPropertyAxiom,
    "IrreflexiveObjectProperty"
);
object_property_characteristic_axiom!(
    /// Symmetric object property axiom
    SymmetricObjectPropertyAxiom,
    "SymmetricObjectProperty"
);
object_property_characteristic_axiom!(
    /// Asymmetric object property axiom
    AsymmetricObjectPropertyAxiom,
    "AsymmetricObjectProperty"
);
object_property_characteristic_axiom!(
    /// Transitive object property axiom
    TransitiveObjectPropertyAxiom,
    "TransitiveObjectProperty"
);

/// Sub-data-property axiom
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubDataPropertyOfAxiom {
    sub_property: DataProperty,
    super_property: DataProperty,
    annotations: SmallVec<[Annotation; 4]>,
}

impl SubDataPropertyOfAxiom {
    /// Create a new sub-data-property axiom
    pub fn new(sub_property: DataProperty, super_property: DataProperty) -> Self {
        Self::with_annotations(sub_property, super_property, Vec::new())
    }

    /// Create a new sub-data-property axiom with annotations
    pub fn with_annotations(
        sub_property: DataProperty,
        super_property: DataProperty,
        annotations: Vec<Annotation>,
    ) -> Self {
        SubDataPropertyOfAxiom {
            sub_property,
            super_property,
            annotations: annotations.into(),
        }
    }

    /// Get the sub property
    pub fn sub_property(&self) -> &DataProperty {
        &self.sub_property
    }

    /// Get the super property
    pub fn super_property(&self) -> &DataProperty {
        &self.super_property
    }

    /// Get the annotations on this axiom
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Render this axiom in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        format!(
            "SubDataPropertyOf({}<{}> <{}>)",
            format_annotations(&self.annotations),
            self.sub_property.iri(),
            self.super_property.iri()
        )
    }
}

/// Data property domain axiom
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataPropertyDomainAxiom {
    property: DataProperty,
    domain: ClassExpression,
    annotations: SmallVec<[Annotation; 4]>,
}

impl DataPropertyDomainAxiom {
    /// Create a new data property domain axiom
    pub fn new(property: DataProperty, domain: ClassExpression) -> Self {
        Self::with_annotations(property, domain, Vec::new())
    }

    /// Create a new data property domain axiom with annotations
    pub fn with_annotations(
        property: DataProperty,
        domain: ClassExpression,
        annotations: Vec<Annotation>,
    ) -> Self {
        DataPropertyDomainAxiom {
            property,
            domain,
            annotations: annotations.into(),
        }
    }

    /// Get the property
    pub fn property(&self) -> &DataProperty {
        &self.property
    }

    /// Get the domain class expression
    pub fn domain(&self) -> &ClassExpression {
        &self.domain
    }

    /// Get the annotations on this axiom
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Render this axiom in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        format!(
            "DataPropertyDomain({}<{}> {})",
            format_annotations(&self.annotations),
            self.property.iri(),
            self.domain.to_functional_syntax()
        )
    }
}

/// Data property range axiom
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataPropertyRangeAxiom {
    property: DataProperty,
    range: DataRange,
    annotations: SmallVec<[Annotation; 4]>,
}

impl DataPropertyRangeAxiom {
    /// Create a new data property range axiom
    pub fn new(property: DataProperty, range: DataRange) -> Self {
        Self::with_annotations(property, range, Vec::new())
    }

    /// Create a new data property range axiom with annotations
    pub fn with_annotations(
        property: DataProperty,
        range: DataRange,
        annotations: Vec<Annotation>,
    ) -> Self {
        DataPropertyRangeAxiom {
            property,
            range,
            annotations: annotations.into(),
        }
    }

    /// Get the property
    pub fn property(&self) -> &DataProperty {
        &self.property
    }

    /// Get the range data range
    pub fn range(&self) -> &DataRange {
        &self.range
    }

    /// Get the annotations on this axiom
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Render this axiom in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        format!(
            "DataPropertyRange({}<{}> {})",
            format_annotations(&self.annotations),
            self.property.iri(),
            self.range.to_functional_syntax()
        )
    }
}

/// Functional data property axiom
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionalDataPropertyAxiom {
    property: DataProperty,
    annotations: SmallVec<[Annotation; 4]>,
}

impl FunctionalDataPropertyAxiom {
    /// Create a new functional data property axiom
    pub fn new(property: DataProperty) -> Self {
        Self::with_annotations(property, Vec::new())
    }

    /// Create a new functional data property axiom with annotations
    pub fn with_annotations(property: DataProperty, annotations: Vec<Annotation>) -> Self {
        FunctionalDataPropertyAxiom {
            property,
            annotations: annotations.into(),
        }
    }

    /// Get the property
    pub fn property(&self) -> &DataProperty {
        &self.property
    }

    /// Get the annotations on this axiom
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Render this axiom in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        format!(
            "FunctionalDataProperty({}<{}>)",
            format_annotations(&self.annotations),
            self.property.iri()
        )
    }
}

fn join_property_expressions(expressions: &[ObjectPropertyExpression]) -> String {
    expressions
        .iter()
        .map(|expr| expr.to_functional_syntax())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ObjectProperty;

    fn prop(local: &str) -> ObjectPropertyExpression {
        ObjectPropertyExpression::ObjectProperty(ObjectProperty::new(format!(
            "http://example.org/u#{local}"
        )))
    }

    #[test]
    fn test_sub_object_property_simple_form() {
        let axiom = SubObjectPropertyOfAxiom::new(prop("teaches"), prop("interactsWith"));
        assert_eq!(
            axiom.to_functional_syntax(),
            "SubObjectPropertyOf(<http://example.org/u#teaches> \
             <http://example.org/u#interactsWith>)"
        );
    }

    #[test]
    fn test_sub_object_property_chain_form() {
        let axiom = SubObjectPropertyOfAxiom::new(
            SubObjectPropertyExpression::PropertyChain(vec![prop("hasParent"), prop("hasParent")]),
            prop("hasGrandparent"),
        );
        assert_eq!(
            axiom.to_functional_syntax(),
            "SubObjectPropertyOf(ObjectPropertyChain(<http://example.org/u#hasParent> \
             <http://example.org/u#hasParent>) <http://example.org/u#hasGrandparent>)"
        );
        assert_eq!(axiom.sub_property().expressions().len(), 2);
    }

    #[test]
    fn test_characteristic_axiom_syntax() {
        let axiom = TransitiveObjectPropertyAxiom::new(prop("ancestorOf"));
        assert_eq!(
            axiom.to_functional_syntax(),
            "TransitiveObjectProperty(<http://example.org/u#ancestorOf>)"
        );
    }

    #[test]
    fn test_inverse_object_properties() {
        let axiom = InverseObjectPropertiesAxiom::new(prop("hasParent"), prop("hasChild"));
        assert_eq!(axiom.first(), &prop("hasParent"));
        assert_eq!(axiom.second(), &prop("hasChild"));
    }

    #[test]
    fn test_data_property_range_syntax() {
        use crate::axioms::data_ranges::DataRange;
        use crate::constants::xsd;
        use crate::entities::Datatype;

        let axiom = DataPropertyRangeAxiom::new(
            DataProperty::new("http://example.org/u#hasAge"),
            DataRange::Datatype(Datatype::new(xsd::INTEGER.clone())),
        );
        assert_eq!(
            axiom.to_functional_syntax(),
            "DataPropertyRange(<http://example.org/u#hasAge> \
             <http://www.w3.org/2001/XMLSchema#integer>)"
        );
    }
}
