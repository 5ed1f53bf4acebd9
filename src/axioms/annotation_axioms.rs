//! Annotation axioms: non-logical statements about IRIs

use super::format_annotations;
use crate::entities::{Annotation, AnnotationProperty, AnnotationValue};
use crate::iri::IRI;
use smallvec::SmallVec;

/// Annotation assertion axiom: attaches an annotation value to a
/// subject IRI
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationAssertionAxiom {
    property: AnnotationProperty,
    subject: IRI,
    value: AnnotationValue,
    annotations: SmallVec<[Annotation; 4]>,
}

impl AnnotationAssertionAxiom {
    /// Create a new annotation assertion
    pub fn new<V: Into<AnnotationValue>>(
        property: AnnotationProperty,
        subject: IRI,
        value: V,
    ) -> Self {
        Self::with_annotations(property, subject, value, Vec::new())
    }

    /// Create a new annotation assertion with annotations
    pub fn with_annotations<V: Into<AnnotationValue>>(
        property: AnnotationProperty,
        subject: IRI,
        value: V,
        annotations: Vec<Annotation>,
    ) -> Self {
        AnnotationAssertionAxiom {
            property,
            subject,
            value: value.into(),
            annotations: annotations.into(),
        }
    }

    /// Get the annotation property
    pub fn property(&self) -> &AnnotationProperty {
        &self.property
    }

    /// Get the subject IRI
    pub fn subject(&self) -> &IRI {
        &self.subject
    }

    /// Get the annotation value
    pub fn value(&self) -> &AnnotationValue {
        &self.value
    }

    /// Get the annotations on this axiom
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Render this axiom in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        format!(
            "AnnotationAssertion({}<{}> <{}> {})",
            format_annotations(&self.annotations),
            self.property.iri(),
            self.subject,
            self.value.to_functional_syntax()
        )
    }
}

/// Sub-annotation-property axiom
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubAnnotationPropertyOfAxiom {
    sub_property: AnnotationProperty,
    super_property: AnnotationProperty,
    annotations: SmallVec<[Annotation; 4]>,
}

impl SubAnnotationPropertyOfAxiom {
    /// Create a new sub-annotation-property axiom
    pub fn new(sub_property: AnnotationProperty, super_property: AnnotationProperty) -> Self {
        Self::with_annotations(sub_property, super_property, Vec::new())
    }

    /// Create a new sub-annotation-property axiom with annotations
    pub fn with_annotations(
        sub_property: AnnotationProperty,
        super_property: AnnotationProperty,
        annotations: Vec<Annotation>,
    ) -> Self {
        SubAnnotationPropertyOfAxiom {
            sub_property,
            super_property,
            annotations: annotations.into(),
        }
    }

    /// Get the sub property
    pub fn sub_property(&self) -> &AnnotationProperty {
        &self.sub_property
    }

    /// Get the super property
    pub fn super_property(&self) -> &AnnotationProperty {
        &self.super_property
    }

    /// Get the annotations on this axiom
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Render this axiom in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        format!(
            "SubAnnotationPropertyOf({}<{}> <{}>)",
            format_annotations(&self.annotations),
            self.sub_property.iri(),
            self.super_property.iri()
        )
    }
}

macro_rules! annotation_property_scope_axiom {
    ($(#[$doc:meta])* $name:ident, $keyword:literal, $scope:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            property: AnnotationProperty,
            $scope: IRI,
            annotations: SmallVec<[Annotation; 4]>,
        }

        impl $name {
            /// Create a new axiom
            pub fn new(property: AnnotationProperty, $scope: IRI) -> Self {
                Self::with_annotations(property, $scope, Vec::new())
            }

            /// Create a new axiom with annotations
            pub fn with_annotations(
                property: AnnotationProperty,
                $scope: IRI,
                annotations: Vec<Annotation>,
            ) -> Self {
                $name {
                    property,
                    $scope,
                    annotations: annotations.into(),
                }
            }

            /// Get the annotation property
            pub fn property(&self) -> &AnnotationProperty {
                &self.property
            }

            /// Get the scoped IRI
            pub fn $scope(&self) -> &IRI {
                &self.$scope
            }

            /// Get the annotations on this axiom
            pub fn annotations(&self) -> &[Annotation] {
                &self.annotations
            }

            /// Render this axiom in Functional Syntax
            pub fn to_functional_syntax(&self) -> String {
                format!(
                    "{}({}<{}> <{}>)",
                    $keyword,
                    format_annotations(&self.annotations),
                    self.property.iri(),
                    self.$scope
                )
            }
        }
    };
}

annotation_property_scope_axiom!(
    /// Annotation property domain axiom
    AnnotationPropertyDomainAxiom,
    "AnnotationPropertyDomain",
    domain
);
annotation_property_scope_axiom!(
    /// Annotation property range axiom
    AnnotationPropertyRangeAxiom,
    "AnnotationPropertyRange",
    range
);
