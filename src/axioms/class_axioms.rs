//! Class axioms: subsumption, equivalence, disjointness

use super::class_expressions::ClassExpression;
use super::format_annotations;
use crate::entities::{Annotation, Class};
use smallvec::SmallVec;

/// Subclass axiom: the first expression is subsumed by the second
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubClassOfAxiom {
    sub_class: ClassExpression,
    super_class: ClassExpression,
    annotations: SmallVec<[Annotation; 4]>,
}

impl SubClassOfAxiom {
    /// Create a new subclass axiom
    pub fn new(sub_class: ClassExpression, super_class: ClassExpression) -> Self {
        Self::with_annotations(sub_class, super_class, Vec::new())
    }

    /// Create a new subclass axiom with annotations
    pub fn with_annotations(
        sub_class: ClassExpression,
        super_class: ClassExpression,
        annotations: Vec<Annotation>,
    ) -> Self {
        SubClassOfAxiom {
            sub_class,
            super_class,
            annotations: annotations.into(),
        }
    }

    /// Get the subclass expression
    pub fn sub_class(&self) -> &ClassExpression {
        &self.sub_class
    }

    /// Get the superclass expression
    pub fn super_class(&self) -> &ClassExpression {
        &self.super_class
    }

    /// Get the annotations on this axiom
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Render this axiom in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        format!(
            "SubClassOf({}{} {})",
            format_annotations(&self.annotations),
            self.sub_class.to_functional_syntax(),
            self.super_class.to_functional_syntax()
        )
    }
}

/// Equivalent classes axiom over two or more class expressions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EquivalentClassesAxiom {
    classes: Vec<ClassExpression>,
    annotations: SmallVec<[Annotation; 4]>,
}

impl EquivalentClassesAxiom {
    /// Create a new equivalent classes axiom
    pub fn new(classes: Vec<ClassExpression>) -> Self {
        Self::with_annotations(classes, Vec::new())
    }

    /// Create a new equivalent classes axiom with annotations
    pub fn with_annotations(classes: Vec<ClassExpression>, annotations: Vec<Annotation>) -> Self {
        EquivalentClassesAxiom {
            classes,
            annotations: annotations.into(),
        }
    }

    /// Get the member class expressions
    pub fn classes(&self) -> &[ClassExpression] {
        &self.classes
    }

    /// Check whether the given class appears as a named member
    pub fn contains_named_member(&self, class: &Class) -> bool {
        self.classes
            .iter()
            .any(|expr| expr.as_named().is_some_and(|c| c.iri() == class.iri()))
    }

    /// Get the annotations on this axiom
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Render this axiom in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        format!(
            "EquivalentClasses({}{})",
            format_annotations(&self.annotations),
            join_expressions(&self.classes)
        )
    }
}

/// Disjoint classes axiom over two or more class expressions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisjointClassesAxiom {
    classes: Vec<ClassExpression>,
    annotations: SmallVec<[Annotation; 4]>,
}

impl DisjointClassesAxiom {
    /// Create a new disjoint classes axiom
    pub fn new(classes: Vec<ClassExpression>) -> Self {
        Self::with_annotations(classes, Vec::new())
    }

    /// Create a new disjoint classes axiom with annotations
    pub fn with_annotations(classes: Vec<ClassExpression>, annotations: Vec<Annotation>) -> Self {
        DisjointClassesAxiom {
            classes,
            annotations: annotations.into(),
        }
    }

    /// Get the member class expressions
    pub fn classes(&self) -> &[ClassExpression] {
        &self.classes
    }

    /// Check whether the given class appears as a named member
    pub fn contains_named_member(&self, class: &Class) -> bool {
        self.classes
            .iter()
            .any(|expr| expr.as_named().is_some_and(|c| c.iri() == class.iri()))
    }

    /// Get the annotations on this axiom
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Render this axiom in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        format!(
            "DisjointClasses({}{})",
            format_annotations(&self.annotations),
            join_expressions(&self.classes)
        )
    }
}

/// Disjoint union axiom: a named class is the disjoint union of the
/// member expressions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisjointUnionAxiom {
    class: Class,
    disjoint_classes: Vec<ClassExpression>,
    annotations: SmallVec<[Annotation; 4]>,
}

impl DisjointUnionAxiom {
    /// Create a new disjoint union axiom
    pub fn new(class: Class, disjoint_classes: Vec<ClassExpression>) -> Self {
        Self::with_annotations(class, disjoint_classes, Vec::new())
    }

    /// Create a new disjoint union axiom with annotations
    pub fn with_annotations(
        class: Class,
        disjoint_classes: Vec<ClassExpression>,
        annotations: Vec<Annotation>,
    ) -> Self {
        DisjointUnionAxiom {
            class,
            disjoint_classes,
            annotations: annotations.into(),
        }
    }

    /// Get the unioned class
    pub fn class(&self) -> &Class {
        &self.class
    }

    /// Get the disjoint member expressions
    pub fn disjoint_classes(&self) -> &[ClassExpression] {
        &self.disjoint_classes
    }

    /// Get the annotations on this axiom
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Render this axiom in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        format!(
            "DisjointUnion({}<{}> {})",
            format_annotations(&self.annotations),
            self.class.iri(),
            join_expressions(&self.disjoint_classes)
        )
    }
}

fn join_expressions(expressions: &[ClassExpression]) -> String {
    expressions
        .iter()
        .map(|expr| expr.to_functional_syntax())
        .collect::<Vec<_>>()
        .join(" ")
}
