//! OWL2 Functional Syntax parser
//!
//! Stream tokenizer plus recursive descent over the Functional Syntax
//! grammar. Every error carries the source line and column; a failed
//! parse returns no partial ontology. Prefix declarations are
//! accepted both before the `Ontology(` form and inside its body, so
//! the parser consumes everything the serializer emits.

use super::OntologyParser;
use crate::axioms::{
    AnnotationAssertionAxiom, AnnotationPropertyDomainAxiom, AnnotationPropertyRangeAxiom,
    AsymmetricObjectPropertyAxiom, Axiom, ClassAssertionAxiom, ClassExpression,
    DataPropertyAssertionAxiom, DataPropertyDomainAxiom, DataPropertyRangeAxiom, DataRange,
    DatatypeDefinitionAxiom, DeclarationAxiom, DifferentIndividualsAxiom, DisjointClassesAxiom,
    DisjointDataPropertiesAxiom, DisjointObjectPropertiesAxiom, DisjointUnionAxiom,
    EquivalentClassesAxiom, EquivalentDataPropertiesAxiom, EquivalentObjectPropertiesAxiom,
    FacetRestriction, FunctionalDataPropertyAxiom, FunctionalObjectPropertyAxiom, HasKeyAxiom,
    InverseFunctionalObjectPropertyAxiom, InverseObjectPropertiesAxiom,
    IrreflexiveObjectPropertyAxiom, NegativeDataPropertyAssertionAxiom,
    NegativeObjectPropertyAssertionAxiom, ObjectPropertyAssertionAxiom,
    ObjectPropertyDomainAxiom, ObjectPropertyExpression, ObjectPropertyRangeAxiom,
    ReflexiveObjectPropertyAxiom, SameIndividualAxiom,
    SubAnnotationPropertyOfAxiom, SubClassOfAxiom, SubDataPropertyOfAxiom,
    SubObjectPropertyExpression, SubObjectPropertyOfAxiom, SymmetricObjectPropertyAxiom,
    TransitiveObjectPropertyAxiom,
};
use crate::constants::{OWL_NS, RDF_NS, RDFS_NS, XSD_NS};
use crate::entities::{
    Annotation, AnnotationProperty, AnnotationValue, AnonymousIndividual, Class, DataProperty,
    Datatype, Individual, Literal, NamedIndividual, ObjectProperty,
};
use crate::error::{OwlError, OwlResult};
use crate::iri::IRI;
use crate::ontology::Ontology;
use std::collections::HashMap;

/// Parser for OWL2 Functional Syntax
pub struct FunctionalSyntaxParser;

impl FunctionalSyntaxParser {
    /// Create a new Functional Syntax parser
    pub fn new() -> Self {
        FunctionalSyntaxParser
    }
}

impl Default for FunctionalSyntaxParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OntologyParser for FunctionalSyntaxParser {
    fn parse_str(&self, content: &str) -> OwlResult<Ontology> {
        Parser::new(content).parse_document()
    }

    fn format_name(&self) -> &'static str {
        "OWL Functional Syntax"
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    prefixes: HashMap<String, String>,
}

impl Parser {
    fn new(content: &str) -> Self {
        let mut prefixes = HashMap::new();
        prefixes.insert("owl".to_string(), OWL_NS.to_string());
        prefixes.insert("rdf".to_string(), RDF_NS.to_string());
        prefixes.insert("rdfs".to_string(), RDFS_NS.to_string());
        prefixes.insert("xsd".to_string(), XSD_NS.to_string());
        Parser {
            chars: content.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            prefixes,
        }
    }

    // ---- cursor primitives ----

    fn error<S: Into<String>>(&self, message: S) -> OwlError {
        OwlError::parse(message, self.line, self.column)
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c.into()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else if c == '#' {
                // Comment to end of line.
                while let Some(c) = self.peek() {
                    self.advance();
                    if c == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_char(&mut self, expected: char) -> OwlResult<()> {
        self.skip_whitespace();
        if self.match_char(expected) {
            Ok(())
        } else {
            match self.peek() {
                Some(found) => Err(self.error(format!("expected '{expected}' but found '{found}'"))),
                None => Err(self.error(format!("expected '{expected}' but found end of input"))),
            }
        }
    }

    /// Match a literal keyword, restoring the cursor on failure
    fn match_keyword(&mut self, keyword: &str) -> bool {
        let saved = (self.pos, self.line, self.column);
        for expected in keyword.chars() {
            if self.peek() != Some(expected) {
                (self.pos, self.line, self.column) = saved;
                return false;
            }
            self.advance();
        }
        true
    }

    /// Read a bare token: identifier or abbreviated IRI
    fn read_token(&mut self) -> String {
        self.skip_whitespace();
        let mut token = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() || matches!(c, '(' | ')' | '<' | '>' | '"' | '#') {
                break;
            }
            token.push(c);
            self.advance();
        }
        token
    }

    fn read_quoted_string(&mut self) -> OwlResult<String> {
        self.skip_whitespace();
        if !self.match_char('"') {
            return Err(self.error("expected '\"' at start of string literal"));
        }
        let mut out = String::new();
        loop {
            match self.advance() {
                None => return Err(self.error("unterminated string literal")),
                Some('"') => return Ok(out),
                Some('\\') => match self.advance() {
                    None => return Err(self.error("unterminated escape sequence")),
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('r') => out.push('\r'),
                    Some('"') => out.push('"'),
                    Some('\\') => out.push('\\'),
                    Some(other) => out.push(other),
                },
                Some(c) => out.push(c),
            }
        }
    }

    /// Read a full (`<...>`) or abbreviated (`prefix:local`) IRI
    fn read_iri(&mut self) -> OwlResult<IRI> {
        self.skip_whitespace();
        if self.match_char('<') {
            let mut iri = String::new();
            loop {
                match self.advance() {
                    None => return Err(self.error("unterminated IRI; expected '>'")),
                    Some('>') => break,
                    Some(c) => iri.push(c),
                }
            }
            IRI::new(iri).map_err(|e| self.error(e.to_string()))
        } else {
            let token = self.read_token();
            self.expand_abbreviated(&token)
        }
    }

    fn expand_abbreviated(&self, token: &str) -> OwlResult<IRI> {
        if token.is_empty() {
            return Err(self.error("expected an IRI"));
        }
        let Some((prefix, local)) = token.split_once(':') else {
            return Err(self.error(format!("'{token}' is not a valid abbreviated IRI")));
        };
        let Some(namespace) = self.prefixes.get(prefix) else {
            return Err(self.error(format!("unknown prefix '{prefix}'")));
        };
        IRI::new(format!("{namespace}{local}")).map_err(|e| self.error(e.to_string()))
    }

    // ---- document structure ----

    fn parse_document(&mut self) -> OwlResult<Ontology> {
        let mut ontology = Ontology::new();

        self.skip_whitespace();
        while self.match_keyword("Prefix(") {
            self.parse_prefix_declaration(&mut ontology)?;
            self.skip_whitespace();
        }

        if !self.match_keyword("Ontology(") {
            return Err(self.error("expected 'Ontology(' at top level"));
        }
        self.parse_ontology(&mut ontology)?;

        self.skip_whitespace();
        if !self.is_at_end() {
            return Err(self.error("unexpected content after closing ')'"));
        }
        Ok(ontology)
    }

    fn parse_prefix_declaration(&mut self, ontology: &mut Ontology) -> OwlResult<()> {
        self.skip_whitespace();
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c == ':' || c.is_whitespace() || c == ')' {
                break;
            }
            name.push(c);
            self.advance();
        }
        self.expect_char(':')?;
        self.expect_char('=')?;
        let namespace = self.read_iri()?;
        self.expect_char(')')?;

        self.prefixes
            .insert(name.clone(), namespace.as_str().to_string());
        ontology.register_prefix(name, namespace.as_str());
        Ok(())
    }

    fn parse_ontology(&mut self, ontology: &mut Ontology) -> OwlResult<()> {
        self.skip_whitespace();
        if self.peek() == Some('<') {
            let iri = self.read_iri()?;
            ontology.set_iri(iri);
            self.skip_whitespace();
            if self.peek() == Some('<') {
                let version = self.read_iri()?;
                ontology.set_version_iri(version);
            }
        }

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.error("unexpected end of input; expected ')'")),
                Some(')') => {
                    self.advance();
                    return Ok(());
                }
                _ => {}
            }

            if self.match_keyword("Prefix(") {
                self.parse_prefix_declaration(ontology)?;
            } else if self.match_keyword("Import(") {
                let import = self.read_iri()?;
                self.expect_char(')')?;
                ontology.add_import(import);
            } else {
                let keyword = self.read_token();
                if keyword.is_empty() {
                    return Err(self.error("expected an axiom keyword"));
                }
                if keyword == "Annotation" {
                    self.expect_char('(')?;
                    let annotation = self.parse_annotation_body()?;
                    ontology.add_ontology_annotation(annotation);
                } else {
                    let axiom = self.parse_axiom(&keyword)?;
                    ontology.add_axiom(axiom);
                }
            }
        }
    }

    // ---- annotations ----

    fn parse_annotations(&mut self) -> OwlResult<Vec<Annotation>> {
        let mut annotations = Vec::new();
        loop {
            self.skip_whitespace();
            if !self.match_keyword("Annotation(") {
                break;
            }
            annotations.push(self.parse_annotation_body()?);
        }
        Ok(annotations)
    }

    /// Body of an `Annotation(...)` form, after the opening keyword
    fn parse_annotation_body(&mut self) -> OwlResult<Annotation> {
        let nested = self.parse_annotations()?;
        let property = AnnotationProperty::new(self.read_iri()?);
        let value = self.parse_annotation_value()?;
        self.expect_char(')')?;
        Ok(Annotation::with_annotations(property, value, nested))
    }

    fn parse_annotation_value(&mut self) -> OwlResult<AnnotationValue> {
        self.skip_whitespace();
        match self.peek() {
            Some('"') => Ok(AnnotationValue::Literal(self.parse_literal()?)),
            Some('_') => Ok(AnnotationValue::AnonymousIndividual(
                self.parse_anonymous_individual()?,
            )),
            _ => Ok(AnnotationValue::Iri(self.read_iri()?)),
        }
    }

    // ---- terms ----

    fn parse_literal(&mut self) -> OwlResult<Literal> {
        let lexical_form = self.read_quoted_string()?;
        if self.match_keyword("^^") {
            let datatype = self.read_iri()?;
            Ok(Literal::typed(lexical_form, datatype))
        } else if self.match_char('@') {
            let mut tag = String::new();
            while let Some(c) = self.peek() {
                if c.is_alphanumeric() || c == '-' {
                    tag.push(c);
                    self.advance();
                } else {
                    break;
                }
            }
            if tag.is_empty() {
                return Err(self.error("expected a language tag after '@'"));
            }
            Ok(Literal::lang_tagged(lexical_form, tag))
        } else {
            Ok(Literal::simple(lexical_form))
        }
    }

    fn parse_anonymous_individual(&mut self) -> OwlResult<AnonymousIndividual> {
        if !self.match_keyword("_:") {
            return Err(self.error("expected '_:' at start of anonymous individual"));
        }
        let mut node_id = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                node_id.push(c);
                self.advance();
            } else {
                break;
            }
        }
        if node_id.is_empty() {
            return Err(self.error("empty node ID in anonymous individual"));
        }
        Ok(AnonymousIndividual::new(node_id))
    }

    fn parse_individual(&mut self) -> OwlResult<Individual> {
        self.skip_whitespace();
        if self.peek() == Some('_') {
            Ok(Individual::Anonymous(self.parse_anonymous_individual()?))
        } else {
            Ok(Individual::Named(NamedIndividual::new(self.read_iri()?)))
        }
    }

    // ---- expressions ----

    fn parse_class_expression(&mut self) -> OwlResult<ClassExpression> {
        self.skip_whitespace();
        if self.peek() == Some('<') {
            return Ok(ClassExpression::Class(Class::new(self.read_iri()?)));
        }

        let token = self.read_token();
        match token.as_str() {
            "ObjectIntersectionOf" => {
                let operands = self.parse_class_expression_list()?;
                ClassExpression::object_intersection_of(operands)
                    .map_err(|e| self.error(e.to_string()))
            }
            "ObjectUnionOf" => {
                let operands = self.parse_class_expression_list()?;
                ClassExpression::object_union_of(operands).map_err(|e| self.error(e.to_string()))
            }
            "ObjectSomeValuesFrom" => {
                self.expect_char('(')?;
                let property = self.parse_object_property_expression()?;
                let filler = self.parse_class_expression()?;
                self.expect_char(')')?;
                Ok(ClassExpression::object_some_values_from(property, filler))
            }
            "ObjectAllValuesFrom" => {
                self.expect_char('(')?;
                let property = self.parse_object_property_expression()?;
                let filler = self.parse_class_expression()?;
                self.expect_char(')')?;
                Ok(ClassExpression::object_all_values_from(property, filler))
            }
            _ => Ok(ClassExpression::Class(Class::new(
                self.expand_abbreviated(&token)?,
            ))),
        }
    }

    fn parse_class_expression_list(&mut self) -> OwlResult<Vec<ClassExpression>> {
        self.expect_char('(')?;
        let mut operands = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.error("unexpected end of input in class expression list")),
                Some(')') => {
                    self.advance();
                    return Ok(operands);
                }
                _ => operands.push(self.parse_class_expression()?),
            }
        }
    }

    fn parse_object_property_expression(&mut self) -> OwlResult<ObjectPropertyExpression> {
        self.skip_whitespace();
        if self.peek() == Some('<') {
            return Ok(ObjectPropertyExpression::ObjectProperty(ObjectProperty::new(
                self.read_iri()?,
            )));
        }
        if self.match_keyword("ObjectInverseOf(") {
            let property = ObjectProperty::new(self.read_iri()?);
            self.expect_char(')')?;
            return Ok(ObjectPropertyExpression::ObjectInverseOf(property));
        }
        let token = self.read_token();
        Ok(ObjectPropertyExpression::ObjectProperty(ObjectProperty::new(
            self.expand_abbreviated(&token)?,
        )))
    }

    fn parse_sub_object_property(&mut self) -> OwlResult<SubObjectPropertyExpression> {
        self.skip_whitespace();
        if self.match_keyword("ObjectPropertyChain(") {
            let mut chain = Vec::new();
            loop {
                self.skip_whitespace();
                match self.peek() {
                    None => return Err(self.error("unexpected end of input in property chain")),
                    Some(')') => {
                        self.advance();
                        return Ok(SubObjectPropertyExpression::PropertyChain(chain));
                    }
                    _ => chain.push(self.parse_object_property_expression()?),
                }
            }
        }
        Ok(SubObjectPropertyExpression::Expression(
            self.parse_object_property_expression()?,
        ))
    }

    fn parse_data_range(&mut self) -> OwlResult<DataRange> {
        self.skip_whitespace();
        if self.peek() == Some('<') {
            return Ok(DataRange::Datatype(Datatype::new(self.read_iri()?)));
        }

        let token = self.read_token();
        match token.as_str() {
            "DataIntersectionOf" => {
                let operands = self.parse_data_range_list()?;
                DataRange::data_intersection_of(operands).map_err(|e| self.error(e.to_string()))
            }
            "DataUnionOf" => {
                let operands = self.parse_data_range_list()?;
                DataRange::data_union_of(operands).map_err(|e| self.error(e.to_string()))
            }
            "DataComplementOf" => {
                self.expect_char('(')?;
                let inner = self.parse_data_range()?;
                self.expect_char(')')?;
                Ok(DataRange::DataComplementOf(Box::new(inner)))
            }
            "DataOneOf" => {
                self.expect_char('(')?;
                let mut literals = Vec::new();
                loop {
                    self.skip_whitespace();
                    match self.peek() {
                        None => return Err(self.error("unexpected end of input in DataOneOf")),
                        Some(')') => {
                            self.advance();
                            break;
                        }
                        _ => literals.push(self.parse_literal()?),
                    }
                }
                DataRange::data_one_of(literals).map_err(|e| self.error(e.to_string()))
            }
            "DatatypeRestriction" => {
                self.expect_char('(')?;
                let datatype = Datatype::new(self.read_iri()?);
                let mut restrictions = Vec::new();
                loop {
                    self.skip_whitespace();
                    match self.peek() {
                        None => {
                            return Err(
                                self.error("unexpected end of input in DatatypeRestriction")
                            )
                        }
                        Some(')') => {
                            self.advance();
                            break;
                        }
                        _ => {
                            let facet = self.read_iri()?;
                            let value = self.parse_literal()?;
                            restrictions.push(FacetRestriction::new(facet, value));
                        }
                    }
                }
                Ok(DataRange::DatatypeRestriction(datatype, restrictions))
            }
            _ => Ok(DataRange::Datatype(Datatype::new(
                self.expand_abbreviated(&token)?,
            ))),
        }
    }

    fn parse_data_range_list(&mut self) -> OwlResult<Vec<DataRange>> {
        self.expect_char('(')?;
        let mut operands = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.error("unexpected end of input in data range list")),
                Some(')') => {
                    self.advance();
                    return Ok(operands);
                }
                _ => operands.push(self.parse_data_range()?),
            }
        }
    }

    // ---- axioms ----

    fn parse_axiom(&mut self, keyword: &str) -> OwlResult<Axiom> {
        self.expect_char('(')?;
        let annotations = self.parse_annotations()?;

        let axiom: Axiom = match keyword {
            "Declaration" => {
                self.skip_whitespace();
                let entity_type = self.read_token();
                self.expect_char('(')?;
                let iri = self.read_iri()?;
                self.expect_char(')')?;
                let axiom: Axiom = match entity_type.as_str() {
                    "Class" => DeclarationAxiom::with_annotations(Class::new(iri), annotations),
                    "Datatype" => {
                        DeclarationAxiom::with_annotations(Datatype::new(iri), annotations)
                    }
                    "ObjectProperty" => {
                        DeclarationAxiom::with_annotations(ObjectProperty::new(iri), annotations)
                    }
                    "DataProperty" => {
                        DeclarationAxiom::with_annotations(DataProperty::new(iri), annotations)
                    }
                    "AnnotationProperty" => DeclarationAxiom::with_annotations(
                        AnnotationProperty::new(iri),
                        annotations,
                    ),
                    "NamedIndividual" => {
                        DeclarationAxiom::with_annotations(NamedIndividual::new(iri), annotations)
                    }
                    other => {
                        return Err(
                            self.error(format!("unknown entity type '{other}' in Declaration"))
                        )
                    }
                }
                .into();
                self.expect_char(')')?;
                return Ok(axiom);
            }
            "SubClassOf" => {
                let sub_class = self.parse_class_expression()?;
                let super_class = self.parse_class_expression()?;
                SubClassOfAxiom::with_annotations(sub_class, super_class, annotations).into()
            }
            "EquivalentClasses" => {
                let classes = self.parse_class_expressions_until_close()?;
                return Ok(EquivalentClassesAxiom::with_annotations(classes, annotations).into());
            }
            "DisjointClasses" => {
                let classes = self.parse_class_expressions_until_close()?;
                return Ok(DisjointClassesAxiom::with_annotations(classes, annotations).into());
            }
            "DisjointUnion" => {
                let class = Class::new(self.read_iri()?);
                let members = self.parse_class_expressions_until_close()?;
                return Ok(
                    DisjointUnionAxiom::with_annotations(class, members, annotations).into()
                );
            }
            "SubObjectPropertyOf" => {
                let sub_property = self.parse_sub_object_property()?;
                let super_property = self.parse_object_property_expression()?;
                SubObjectPropertyOfAxiom::with_annotations(sub_property, super_property, annotations)
                    .into()
            }
            "EquivalentObjectProperties" => {
                let properties = self.parse_property_expressions_until_close()?;
                return Ok(
                    EquivalentObjectPropertiesAxiom::with_annotations(properties, annotations)
                        .into(),
                );
            }
            "DisjointObjectProperties" => {
                let properties = self.parse_property_expressions_until_close()?;
                return Ok(
                    DisjointObjectPropertiesAxiom::with_annotations(properties, annotations).into(),
                );
            }
            "InverseObjectProperties" => {
                let first = self.parse_object_property_expression()?;
                let second = self.parse_object_property_expression()?;
                InverseObjectPropertiesAxiom::with_annotations(first, second, annotations).into()
            }
            "ObjectPropertyDomain" => {
                let property = self.parse_object_property_expression()?;
                let domain = self.parse_class_expression()?;
                ObjectPropertyDomainAxiom::with_annotations(property, domain, annotations).into()
            }
            "ObjectPropertyRange" => {
                let property = self.parse_object_property_expression()?;
                let range = self.parse_class_expression()?;
                ObjectPropertyRangeAxiom::with_annotations(property, range, annotations).into()
            }
            "FunctionalObjectProperty" => {
                let property = self.parse_object_property_expression()?;
                FunctionalObjectPropertyAxiom::with_annotations(property, annotations).into()
            }
            "InverseFunctionalObjectProperty" => {
                let property = self.parse_object_property_expression()?;
                InverseFunctionalObjectPropertyAxiom::with_annotations(property, annotations).into()
            }
            "ReflexiveObjectProperty" => {
                let property = self.parse_object_property_expression()?;
                ReflexiveObjectPropertyAxiom::with_annotations(property, annotations).into()
            }
            "IrreflexiveObjectProperty" => {
                let property = self.parse_object_property_expression()?;
                IrreflexiveObjectPropertyAxiom::with_annotations(property, annotations).into()
            }
            "SymmetricObjectProperty" => {
                let property = self.parse_object_property_expression()?;
                SymmetricObjectPropertyAxiom::with_annotations(property, annotations).into()
            }
            "AsymmetricObjectProperty" => {
                let property = self.parse_object_property_expression()?;
                AsymmetricObjectPropertyAxiom::with_annotations(property, annotations).into()
            }
            "TransitiveObjectProperty" => {
                let property = self.parse_object_property_expression()?;
                TransitiveObjectPropertyAxiom::with_annotations(property, annotations).into()
            }
            "SubDataPropertyOf" => {
                let sub_property = DataProperty::new(self.read_iri()?);
                let super_property = DataProperty::new(self.read_iri()?);
                SubDataPropertyOfAxiom::with_annotations(sub_property, super_property, annotations)
                    .into()
            }
            "EquivalentDataProperties" => {
                let properties = self.parse_data_properties_until_close()?;
                return Ok(
                    EquivalentDataPropertiesAxiom::with_annotations(properties, annotations).into(),
                );
            }
            "DisjointDataProperties" => {
                let properties = self.parse_data_properties_until_close()?;
                return Ok(
                    DisjointDataPropertiesAxiom::with_annotations(properties, annotations).into(),
                );
            }
            "DataPropertyDomain" => {
                let property = DataProperty::new(self.read_iri()?);
                let domain = self.parse_class_expression()?;
                DataPropertyDomainAxiom::with_annotations(property, domain, annotations).into()
            }
            "DataPropertyRange" => {
                let property = DataProperty::new(self.read_iri()?);
                let range = self.parse_data_range()?;
                DataPropertyRangeAxiom::with_annotations(property, range, annotations).into()
            }
            "FunctionalDataProperty" => {
                let property = DataProperty::new(self.read_iri()?);
                FunctionalDataPropertyAxiom::with_annotations(property, annotations).into()
            }
            "SameIndividual" => {
                let individuals = self.parse_individuals_until_close()?;
                return Ok(SameIndividualAxiom::with_annotations(individuals, annotations).into());
            }
            "DifferentIndividuals" => {
                let individuals = self.parse_individuals_until_close()?;
                return Ok(
                    DifferentIndividualsAxiom::with_annotations(individuals, annotations).into(),
                );
            }
            "ClassAssertion" => {
                let class_expression = self.parse_class_expression()?;
                let individual = self.parse_individual()?;
                ClassAssertionAxiom::with_annotations(class_expression, individual, annotations)
                    .into()
            }
            "ObjectPropertyAssertion" => {
                let property = ObjectProperty::new(self.read_iri()?);
                let source = self.parse_individual()?;
                let target = self.parse_individual()?;
                ObjectPropertyAssertionAxiom::with_annotations(property, source, target, annotations)
                    .into()
            }
            "NegativeObjectPropertyAssertion" => {
                let property = ObjectProperty::new(self.read_iri()?);
                let source = self.parse_individual()?;
                let target = self.parse_individual()?;
                NegativeObjectPropertyAssertionAxiom::with_annotations(
                    property,
                    source,
                    target,
                    annotations,
                )
                .into()
            }
            "DataPropertyAssertion" => {
                let property = DataProperty::new(self.read_iri()?);
                let source = self.parse_individual()?;
                let value = self.parse_literal()?;
                DataPropertyAssertionAxiom::with_annotations(property, source, value, annotations)
                    .into()
            }
            "NegativeDataPropertyAssertion" => {
                let property = DataProperty::new(self.read_iri()?);
                let source = self.parse_individual()?;
                let value = self.parse_literal()?;
                NegativeDataPropertyAssertionAxiom::with_annotations(
                    property,
                    source,
                    value,
                    annotations,
                )
                .into()
            }
            "AnnotationAssertion" => {
                let property = AnnotationProperty::new(self.read_iri()?);
                let subject = self.read_iri()?;
                let value = self.parse_annotation_value()?;
                AnnotationAssertionAxiom::with_annotations(property, subject, value, annotations)
                    .into()
            }
            "SubAnnotationPropertyOf" => {
                let sub_property = AnnotationProperty::new(self.read_iri()?);
                let super_property = AnnotationProperty::new(self.read_iri()?);
                SubAnnotationPropertyOfAxiom::with_annotations(
                    sub_property,
                    super_property,
                    annotations,
                )
                .into()
            }
            "AnnotationPropertyDomain" => {
                let property = AnnotationProperty::new(self.read_iri()?);
                let domain = self.read_iri()?;
                AnnotationPropertyDomainAxiom::with_annotations(property, domain, annotations)
                    .into()
            }
            "AnnotationPropertyRange" => {
                let property = AnnotationProperty::new(self.read_iri()?);
                let range = self.read_iri()?;
                AnnotationPropertyRangeAxiom::with_annotations(property, range, annotations).into()
            }
            "DatatypeDefinition" => {
                let datatype = Datatype::new(self.read_iri()?);
                let data_range = self.parse_data_range()?;
                DatatypeDefinitionAxiom::with_annotations(datatype, data_range, annotations).into()
            }
            "HasKey" => {
                let class_expression = self.parse_class_expression()?;
                self.expect_char('(')?;
                let mut object_properties = Vec::new();
                loop {
                    self.skip_whitespace();
                    match self.peek() {
                        None => return Err(self.error("unexpected end of input in HasKey")),
                        Some(')') => {
                            self.advance();
                            break;
                        }
                        _ => object_properties.push(self.parse_object_property_expression()?),
                    }
                }
                self.expect_char('(')?;
                let data_properties = self.parse_data_properties_until_close()?;
                HasKeyAxiom::with_annotations(
                    class_expression,
                    object_properties,
                    data_properties,
                    annotations,
                )
                .into()
            }
            other => return Err(self.error(format!("unknown axiom type '{other}'"))),
        };

        self.expect_char(')')?;
        Ok(axiom)
    }

    fn parse_class_expressions_until_close(&mut self) -> OwlResult<Vec<ClassExpression>> {
        let mut expressions = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.error("unexpected end of input; expected ')'")),
                Some(')') => {
                    self.advance();
                    return Ok(expressions);
                }
                _ => expressions.push(self.parse_class_expression()?),
            }
        }
    }

    fn parse_property_expressions_until_close(
        &mut self,
    ) -> OwlResult<Vec<ObjectPropertyExpression>> {
        let mut expressions = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.error("unexpected end of input; expected ')'")),
                Some(')') => {
                    self.advance();
                    return Ok(expressions);
                }
                _ => expressions.push(self.parse_object_property_expression()?),
            }
        }
    }

    fn parse_data_properties_until_close(&mut self) -> OwlResult<Vec<DataProperty>> {
        let mut properties = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.error("unexpected end of input; expected ')'")),
                Some(')') => {
                    self.advance();
                    return Ok(properties);
                }
                _ => properties.push(DataProperty::new(self.read_iri()?)),
            }
        }
    }

    fn parse_individuals_until_close(&mut self) -> OwlResult<Vec<Individual>> {
        let mut individuals = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.error("unexpected end of input; expected ')'")),
                Some(')') => {
                    self.advance();
                    return Ok(individuals);
                }
                _ => individuals.push(self.parse_individual()?),
            }
        }
    }
}
