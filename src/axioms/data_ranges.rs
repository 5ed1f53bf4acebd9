//! Data ranges in OWL2
//!
//! Recursive descriptions of sets of data values, parallel to class
//! expressions.

use crate::entities::{Datatype, Literal};
use crate::error::{OwlError, OwlResult};
use crate::iri::IRI;

/// A constraining facet applied inside a datatype restriction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FacetRestriction {
    facet: IRI,
    value: Literal,
}

impl FacetRestriction {
    /// Create a new facet restriction
    pub fn new<F: Into<IRI>>(facet: F, value: Literal) -> Self {
        FacetRestriction {
            facet: facet.into(),
            value,
        }
    }

    /// Get the facet IRI (e.g. `xsd:minInclusive`)
    pub fn facet(&self) -> &IRI {
        &self.facet
    }

    /// Get the restriction value
    pub fn value(&self) -> &Literal {
        &self.value
    }
}

/// A data range in OWL2
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataRange {
    /// Named datatype
    Datatype(Datatype),
    /// Intersection of two or more data ranges
    DataIntersectionOf(Vec<DataRange>),
    /// Union of two or more data ranges
    DataUnionOf(Vec<DataRange>),
    /// Complement of a data range
    DataComplementOf(Box<DataRange>),
    /// Enumeration of literals
    DataOneOf(Vec<Literal>),
    /// Datatype constrained by facet restrictions
    DatatypeRestriction(Datatype, Vec<FacetRestriction>),
}

impl DataRange {
    /// Build an intersection, enforcing the two-operand minimum
    pub fn data_intersection_of(operands: Vec<DataRange>) -> OwlResult<Self> {
        if operands.len() < 2 {
            return Err(OwlError::InvalidArgument(format!(
                "DataIntersectionOf requires at least 2 operands, got {}",
                operands.len()
            )));
        }
        Ok(DataRange::DataIntersectionOf(operands))
    }

    /// Build a union, enforcing the two-operand minimum
    pub fn data_union_of(operands: Vec<DataRange>) -> OwlResult<Self> {
        if operands.len() < 2 {
            return Err(OwlError::InvalidArgument(format!(
                "DataUnionOf requires at least 2 operands, got {}",
                operands.len()
            )));
        }
        Ok(DataRange::DataUnionOf(operands))
    }

    /// Build a literal enumeration, which must not be empty
    pub fn data_one_of(literals: Vec<Literal>) -> OwlResult<Self> {
        if literals.is_empty() {
            return Err(OwlError::InvalidArgument(
                "DataOneOf requires at least 1 literal".to_string(),
            ));
        }
        Ok(DataRange::DataOneOf(literals))
    }

    /// Get the named datatype if this is a simple data range
    pub fn as_datatype(&self) -> Option<&Datatype> {
        match self {
            DataRange::Datatype(datatype) => Some(datatype),
            _ => None,
        }
    }

    /// Collect the named datatypes mentioned in this data range
    pub fn datatypes(&self, out: &mut Vec<Datatype>) {
        match self {
            DataRange::Datatype(datatype) => out.push(datatype.clone()),
            DataRange::DataIntersectionOf(operands) | DataRange::DataUnionOf(operands) => {
                for op in operands {
                    op.datatypes(out);
                }
            }
            DataRange::DataComplementOf(inner) => inner.datatypes(out),
            DataRange::DataOneOf(_) => {}
            DataRange::DatatypeRestriction(datatype, _) => out.push(datatype.clone()),
        }
    }

    /// Render this data range in Functional Syntax
    pub fn to_functional_syntax(&self) -> String {
        match self {
            DataRange::Datatype(datatype) => format!("<{}>", datatype.iri()),
            DataRange::DataIntersectionOf(operands) => {
                format!("DataIntersectionOf({})", join_ranges(operands))
            }
            DataRange::DataUnionOf(operands) => {
                format!("DataUnionOf({})", join_ranges(operands))
            }
            DataRange::DataComplementOf(inner) => {
                format!("DataComplementOf({})", inner.to_functional_syntax())
            }
            DataRange::DataOneOf(literals) => {
                let body = literals
                    .iter()
                    .map(|lit| lit.to_functional_syntax())
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("DataOneOf({body})")
            }
            DataRange::DatatypeRestriction(datatype, restrictions) => {
                let mut out = format!("DatatypeRestriction(<{}>", datatype.iri());
                for restriction in restrictions {
                    out.push_str(&format!(
                        " <{}> {}",
                        restriction.facet(),
                        restriction.value().to_functional_syntax()
                    ));
                }
                out.push(')');
                out
            }
        }
    }
}

fn join_ranges(operands: &[DataRange]) -> String {
    operands
        .iter()
        .map(|op| op.to_functional_syntax())
        .collect::<Vec<_>>()
        .join(" ")
}

impl From<Datatype> for DataRange {
    fn from(datatype: Datatype) -> Self {
        DataRange::Datatype(datatype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{facets, xsd};

    fn dt(iri: &IRI) -> DataRange {
        DataRange::Datatype(Datatype::new(iri.clone()))
    }

    #[test]
    fn test_arity_enforced() {
        assert!(DataRange::data_intersection_of(vec![dt(&xsd::INT)]).is_err());
        assert!(DataRange::data_union_of(vec![]).is_err());
        assert!(DataRange::data_one_of(vec![]).is_err());
        assert!(DataRange::data_union_of(vec![dt(&xsd::INT), dt(&xsd::LONG)]).is_ok());
    }

    #[test]
    fn test_one_of_syntax() {
        let range = DataRange::data_one_of(vec![
            Literal::simple("red"),
            Literal::simple("green"),
        ])
        .unwrap();
        assert_eq!(range.to_functional_syntax(), "DataOneOf(\"red\" \"green\")");
    }

    #[test]
    fn test_restriction_syntax() {
        let range = DataRange::DatatypeRestriction(
            Datatype::new(xsd::INTEGER.clone()),
            vec![FacetRestriction::new(
                facets::MIN_INCLUSIVE.clone(),
                Literal::typed("0", xsd::INTEGER.clone()),
            )],
        );
        assert_eq!(
            range.to_functional_syntax(),
            "DatatypeRestriction(<http://www.w3.org/2001/XMLSchema#integer> \
             <http://www.w3.org/2001/XMLSchema#minInclusive> \
             \"0\"^^<http://www.w3.org/2001/XMLSchema#integer>)"
        );
    }

    #[test]
    fn test_complement_collects_datatypes() {
        let range = DataRange::DataComplementOf(Box::new(dt(&xsd::BOOLEAN)));
        let mut datatypes = Vec::new();
        range.datatypes(&mut datatypes);
        assert_eq!(datatypes.len(), 1);
        assert_eq!(datatypes[0].iri(), &*xsd::BOOLEAN);
    }
}
