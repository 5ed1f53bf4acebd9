//! Assertion axioms: facts about specific individuals

use super::class_expressions::ClassExpression;
use super::format_annotations;
use crate::entities::{Annotation, DataProperty, Individual, Literal, ObjectProperty};
use smallvec::SmallVec;

macro_rules! individual_list_axiom {
    ($(#[$doc:meta])* $name:ident, $keyword:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            individuals: Vec<Individual>,
            annotations: SmallVec<[Annotation; 4]>,
        }

        impl $name {
            /// Create a new axiom over the given individuals
            pub fn new(individuals: Vec<Individual>) -> Self {
                Self::with_annotations(individuals, Vec::new())
            }

            /// Create a new axiom with annotations
            pub fn with_annotations(
                individuals: Vec<Individual>,
                annotations: Vec<Annotation>,
            ) -> Self {
                $name {
                    individuals,
                    annotations: annotations.into(),
                }
            }

            /// Get the member individuals
            pub fn individuals(&self) -> &[Individual] {
                &self.individuals
            }

            /// Get the annotations on this axiom
            pub fn annotations(&self) -> &[Annotation] {
                &self.annotations
            }

            /// Render this axiom in Functional Syntax
            pub fn to_functional_syntax(&self) -> String {
                let body = self
                    .individuals
                    .iter()
                    .map(|ind| ind.to_functional_syntax())
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

individual_list_axiom!(
    /// Same individual axiom: all members denote the same individual
    SameIndividualAxiom,
    "SameIndividual"
);
individual_list_axiom!(
    /// Different individuals axiom: all members denote pairwise
    /// different individuals
    DifferentIndividualsAxiom,
    "DifferentIndividuals"
);

/// Class assertion axiom: the individual is an instance of the class
/// expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassAssertionAxiom {
    class_expression: ClassExpression,
    individual: Individual,
    annotations: SmallVec<[Annotation; 4]>,
}

impl ClassAssertionAxiom {
    /// Create a new class assertion
    pub fn new<I: Into<Individual>>(class_expression: ClassExpression, individual: I) -> Self {
        Self::with_annotations(class_expression, individual, Vec::new())
    }

    /// Create a new class assertion with annotations
    pub fn with_annotations<I: Into<Individual>>(
        class_expression: ClassExpression,
        individual: I,
        annotations: Vec<Annotation>,
    ) -> Self {
        ClassAssertionAxiom {
            class_expression,
            individual: individual.into(),
            annotations: annotations.into(),
        }
    }

    /// Get the asserted class expression
    pub fn class_expression(&self) -> &ClassExpression {
        &self.class_expression
    }

    /// Get the individual
    pub fn individual(&self) -> &Individual {
        &self.individual
    }

    /// Get the annotations on this axiom
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Render this axiom in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        format!(
            "ClassAssertion({}{} {})",
            format_annotations(&self.annotations),
            self.class_expression.to_functional_syntax(),
            self.individual.to_functional_syntax()
        )
    }
}

macro_rules! object_assertion_axiom {
    ($(#[$doc:meta])* $name:ident, $keyword:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            property: ObjectProperty,
            source: Individual,
            target: Individual,
            annotations: SmallVec<[Annotation; 4]>,
        }

        impl $name {
            /// Create a new assertion
            pub fn new<S: Into<Individual>, T: Into<Individual>>(
                property: ObjectProperty,
                source: S,
                target: T,
            ) -> Self {
                Self::with_annotations(property, source, target, Vec::new())
            }

            /// Create a new assertion with annotations
            pub fn with_annotations<S: Into<Individual>, T: Into<Individual>>(
                property: ObjectProperty,
                source: S,
                target: T,
                annotations: Vec<Annotation>,
            ) -> Self {
                $name {
                    property,
                    source: source.into(),
                    target: target.into(),
                    annotations: annotations.into(),
                }
            }

            /// Get the property
            pub fn property(&self) -> &ObjectProperty {
                &self.property
            }

            /// Get the source (subject) individual
            pub fn source(&self) -> &Individual {
                &self.source
            }

            /// Get the target (object) individual
            pub fn target(&self) -> &Individual {
                &self.target
            }

            /// Get the annotations on this axiom
            pub fn annotations(&self) -> &[Annotation] {
                &self.annotations
            }

            /// Render this axiom in Functional Syntax
            pub fn to_functional_syntax(&self) -> String {
                format!(
                    "{}({}<{}> {} {})",
                    $keyword,
                    format_annotations(&self.annotations),
                    self.property.iri(),
                    self.source.to_functional_syntax(),
                    self.target.to_functional_syntax()
                )
            }
        }
    };
}

object_assertion_axiom!(
    /// Object property assertion: the property holds between source
    /// and target
    ObjectPropertyAssertionAxiom,
    "ObjectPropertyAssertion"
);
object_assertion_axiom!(
    /// Negative object property assertion: the property does not hold
    /// between source and target
    NegativeObjectPropertyAssertionAxiom,
    "NegativeObjectPropertyAssertion"
);

macro_rules! data_assertion_axiom {
    ($(#[$doc:meta])* $name:ident, $keyword:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            property: DataProperty,
            source: Individual,
            value: Literal,
            annotations: SmallVec<[Annotation; 4]>,
        }

        impl $name {
            /// Create a new assertion
            pub fn new<S: Into<Individual>>(
                property: DataProperty,
                source: S,
                value: Literal,
            ) -> Self {
                Self::with_annotations(property, source, value, Vec::new())
            }

            /// Create a new assertion with annotations
            pub fn with_annotations<S: Into<Individual>>(
                property: DataProperty,
                source: S,
                value: Literal,
                annotations: Vec<Annotation>,
            ) -> Self {
                $name {
                    property,
                    source: source.into(),
                    value,
                    annotations: annotations.into(),
                }
            }

            /// Get the property
            pub fn property(&self) -> &DataProperty {
                &self.property
            }

            /// Get the source (subject) individual
            pub fn source(&self) -> &Individual {
                &self.source
            }

            /// Get the literal value
            pub fn value(&self) -> &Literal {
                &self.value
            }

            /// Get the annotations on this axiom
            pub fn annotations(&self) -> &[Annotation] {
                &self.annotations
            }

            /// Render this axiom in Functional Syntax
            pub fn to_functional_syntax(&self) -> String {
                format!(
                    "{}({}<{}> {} {})",
                    $keyword,
                    format_annotations(&self.annotations),
                    self.property.iri(),
                    self.source.to_functional_syntax(),
                    self.value.to_functional_syntax()
                )
            }
        }
    };
}

data_assertion_axiom!(
    /// Data property assertion: the individual has the literal value
    /// for the property
    DataPropertyAssertionAxiom,
    "DataPropertyAssertion"
);
data_assertion_axiom!(
    /// Negative data property assertion: the individual does not have
    /// the literal value for the property
    NegativeDataPropertyAssertionAxiom,
    "NegativeDataPropertyAssertion"
);
