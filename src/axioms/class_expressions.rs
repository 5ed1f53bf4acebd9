//! Class expressions in OWL2
//!
//! Recursive descriptions of sets of individuals. The five
//! constructors supported here are the ones the Functional-Syntax
//! round-trip guarantees: named classes, intersections, unions, and
//! the existential/universal property restrictions.

use crate::entities::{Class, ObjectProperty};
use crate::error::{OwlError, OwlResult};
use crate::iri::IRI;

/// An object property or the inverse of one
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectPropertyExpression {
    /// Direct property reference
    ObjectProperty(ObjectProperty),
    /// Inverse of a named property
    ObjectInverseOf(ObjectProperty),
}

impl ObjectPropertyExpression {
    /// Get the underlying named property
    pub fn property(&self) -> &ObjectProperty {
        match self {
            ObjectPropertyExpression::ObjectProperty(p) => p,
            ObjectPropertyExpression::ObjectInverseOf(p) => p,
        }
    }

    /// Check whether this is an inverse reference
    pub fn is_inverse(&self) -> bool {
        matches!(self, ObjectPropertyExpression::ObjectInverseOf(_))
    }

    /// Render this expression in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        match self {
            ObjectPropertyExpression::ObjectProperty(p) => format!("<{}>", p.iri()),
            ObjectPropertyExpression::ObjectInverseOf(p) => {
                format!("ObjectInverseOf(<{}>)", p.iri())
            }
        }
    }
}

impl From<ObjectProperty> for ObjectPropertyExpression {
    fn from(property: ObjectProperty) -> Self {
        ObjectPropertyExpression::ObjectProperty(property)
    }
}

/// A class expression in OWL2
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassExpression {
    /// Named class
    Class(Class),
    /// Intersection of two or more operands
    ObjectIntersectionOf(Vec<ClassExpression>),
    /// Union of two or more operands
    ObjectUnionOf(Vec<ClassExpression>),
    /// Existential restriction over an object property
    ObjectSomeValuesFrom(ObjectPropertyExpression, Box<ClassExpression>),
    /// Universal restriction over an object property
    ObjectAllValuesFrom(ObjectPropertyExpression, Box<ClassExpression>),
}

impl ClassExpression {
    /// Build an intersection, enforcing the two-operand minimum
    pub fn object_intersection_of(operands: Vec<ClassExpression>) -> OwlResult<Self> {
        if operands.len() < 2 {
            return Err(OwlError::InvalidArgument(format!(
                "ObjectIntersectionOf requires at least 2 operands, got {}",
                operands.len()
            )));
        }
        Ok(ClassExpression::ObjectIntersectionOf(operands))
    }

    /// Build a union, enforcing the two-operand minimum
    pub fn object_union_of(operands: Vec<ClassExpression>) -> OwlResult<Self> {
        if operands.len() < 2 {
            return Err(OwlError::InvalidArgument(format!(
                "ObjectUnionOf requires at least 2 operands, got {}",
                operands.len()
            )));
        }
        Ok(ClassExpression::ObjectUnionOf(operands))
    }

    /// Build an existential restriction
    pub fn object_some_values_from<P: Into<ObjectPropertyExpression>>(
        property: P,
        filler: ClassExpression,
    ) -> Self {
        ClassExpression::ObjectSomeValuesFrom(property.into(), Box::new(filler))
    }

    /// Build a universal restriction
    pub fn object_all_values_from<P: Into<ObjectPropertyExpression>>(
        property: P,
        filler: ClassExpression,
    ) -> Self {
        ClassExpression::ObjectAllValuesFrom(property.into(), Box::new(filler))
    }

    /// Check if this is a simple named class
    pub fn is_named(&self) -> bool {
        matches!(self, ClassExpression::Class(_))
    }

    /// Get the named class if this is a simple class expression
    pub fn as_named(&self) -> Option<&Class> {
        match self {
            ClassExpression::Class(class) => Some(class),
            _ => None,
        }
    }

    /// Check if this expression mentions the given class anywhere
    pub fn contains_class(&self, class_iri: &IRI) -> bool {
        match self {
            ClassExpression::Class(class) => class.iri() == class_iri,
            ClassExpression::ObjectIntersectionOf(operands)
            | ClassExpression::ObjectUnionOf(operands) => {
                operands.iter().any(|op| op.contains_class(class_iri))
            }
            ClassExpression::ObjectSomeValuesFrom(_, filler)
            | ClassExpression::ObjectAllValuesFrom(_, filler) => filler.contains_class(class_iri),
        }
    }

    /// Collect the named classes mentioned in this expression
    pub fn named_classes(&self, out: &mut Vec<Class>) {
        match self {
            ClassExpression::Class(class) => out.push(class.clone()),
            ClassExpression::ObjectIntersectionOf(operands)
            | ClassExpression::ObjectUnionOf(operands) => {
                for op in operands {
                    op.named_classes(out);
                }
            }
            ClassExpression::ObjectSomeValuesFrom(_, filler)
            | ClassExpression::ObjectAllValuesFrom(_, filler) => filler.named_classes(out),
        }
    }

    /// Collect the object properties mentioned in this expression
    pub fn object_properties(&self, out: &mut Vec<ObjectProperty>) {
        match self {
            ClassExpression::Class(_) => {}
            ClassExpression::ObjectIntersectionOf(operands)
            | ClassExpression::ObjectUnionOf(operands) => {
                for op in operands {
                    op.object_properties(out);
                }
            }
            ClassExpression::ObjectSomeValuesFrom(property, filler)
            | ClassExpression::ObjectAllValuesFrom(property, filler) => {
                out.push(property.property().clone());
                filler.object_properties(out);
            }
        }
    }

    /// Render this expression in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        match self {
            ClassExpression::Class(class) => format!("<{}>", class.iri()),
            ClassExpression::ObjectIntersectionOf(operands) => {
                format!("ObjectIntersectionOf({})", join_expressions(operands))
            }
            ClassExpression::ObjectUnionOf(operands) => {
                format!("ObjectUnionOf({})", join_expressions(operands))
            }
            ClassExpression::ObjectSomeValuesFrom(property, filler) => format!(
                "ObjectSomeValuesFrom({} {})",
                property.to_functional_syntax(),
                filler.to_functional_syntax()
            ),
            ClassExpression::ObjectAllValuesFrom(property, filler) => format!(
                "ObjectAllValuesFrom({} {})",
                property.to_functional_syntax(),
                filler.to_functional_syntax()
            ),
        }
    }
}

fn join_expressions(operands: &[ClassExpression]) -> String {
    operands
        .iter()
        .map(|op| op.to_functional_syntax())
        .collect::<Vec<_>>()
        .join(" ")
}

impl From<Class> for ClassExpression {
    fn from(class: Class) -> Self {
        ClassExpression::Class(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(local: &str) -> ClassExpression {
        ClassExpression::from(Class::new(format!("http://example.org/u#{local}")))
    }

    #[test]
    fn test_intersection_arity_enforced() {
        assert!(ClassExpression::object_intersection_of(vec![]).is_err());
        assert!(ClassExpression::object_intersection_of(vec![class("A")]).is_err());
        assert!(
            ClassExpression::object_intersection_of(vec![class("A"), class("B")]).is_ok()
        );
    }

    #[test]
    fn test_union_arity_enforced() {
        assert!(ClassExpression::object_union_of(vec![class("A")]).is_err());
        assert!(ClassExpression::object_union_of(vec![class("A"), class("B")]).is_ok());
    }

    #[test]
    fn test_structural_equality_is_deep() {
        let a = ClassExpression::object_some_values_from(
            ObjectProperty::new("http://example.org/u#teaches"),
            class("Course"),
        );
        let b = ClassExpression::object_some_values_from(
            ObjectProperty::new("http://example.org/u#teaches"),
            class("Course"),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_contains_class_recurses() {
        let expr = ClassExpression::object_intersection_of(vec![
            class("Person"),
            ClassExpression::object_some_values_from(
                ObjectProperty::new("http://example.org/u#teaches"),
                class("Course"),
            ),
        ])
        .unwrap();

        let course = IRI::new("http://example.org/u#Course").unwrap();
        let student = IRI::new("http://example.org/u#Student").unwrap();
        assert!(expr.contains_class(&course));
        assert!(!expr.contains_class(&student));
    }

    #[test]
    fn test_functional_syntax_nesting() {
        let expr = ClassExpression::object_all_values_from(
            ObjectPropertyExpression::ObjectInverseOf(ObjectProperty::new(
                "http://example.org/u#taughtBy",
            )),
            class("Person"),
        );
        assert_eq!(
            expr.to_functional_syntax(),
            "ObjectAllValuesFrom(ObjectInverseOf(<http://example.org/u#taughtBy>) \
             <http://example.org/u#Person>)"
        );
    }

    #[test]
    fn test_signature_collection() {
        let expr = ClassExpression::object_union_of(vec![
            class("A"),
            ClassExpression::object_some_values_from(
                ObjectProperty::new("http://example.org/u#p"),
                class("B"),
            ),
        ])
        .unwrap();

        let mut classes = Vec::new();
        expr.named_classes(&mut classes);
        assert_eq!(classes.len(), 2);

        let mut properties = Vec::new();
        expr.object_properties(&mut properties);
        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0].iri().as_str(), "http://example.org/u#p");
    }
}
