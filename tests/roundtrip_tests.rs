//! Functional Syntax round-trip tests
//!
//! `parse(serialize(O))` must recover the ontology, and
//! `serialize(parse(s))` must reproduce serializer output exactly.

use owl2_ontology::constants::xsd;
use owl2_ontology::{
    Annotation, AnnotationAssertionAxiom, AnnotationProperty, Class, ClassAssertionAxiom,
    ClassExpression, DataProperty, DataPropertyAssertionAxiom, DataPropertyRangeAxiom, DataRange,
    Datatype, DeclarationAxiom, EquivalentClassesAxiom, FunctionalSyntaxParser, Literal,
    NamedIndividual, ObjectProperty, ObjectPropertyAssertionAxiom, Ontology, OntologyParser,
    SubClassOfAxiom, SubObjectPropertyExpression, SubObjectPropertyOfAxiom,
    TransitiveObjectPropertyAxiom, IRI,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const NS: &str = "http://example.org/u#";

fn parse(content: &str) -> Ontology {
    FunctionalSyntaxParser::new()
        .parse_str(content)
        .expect("serializer output must parse")
}

fn rich_ontology() -> Ontology {
    let mut ontology = Ontology::with_iri_and_version(
        "http://example.org/u",
        "http://example.org/u/1.0",
    );
    ontology.register_prefix("ex", NS);
    ontology.add_import(IRI::new("http://example.org/upper").unwrap());
    ontology.add_ontology_annotation(Annotation::new(
        AnnotationProperty::new("http://www.w3.org/2000/01/rdf-schema#label"),
        "University ontology",
    ));

    ontology.add_axiom(DeclarationAxiom::new(Class::new(format!("{NS}Person"))));
    ontology.add_axiom(DeclarationAxiom::new(Class::new(format!("{NS}Student"))));
    ontology.add_axiom(DeclarationAxiom::new(ObjectProperty::new(format!(
        "{NS}teaches"
    ))));
    ontology.add_axiom(DeclarationAxiom::new(DataProperty::new(format!("{NS}hasAge"))));
    ontology.add_axiom(DeclarationAxiom::new(NamedIndividual::new(format!("{NS}alice"))));

    ontology.add_axiom(SubClassOfAxiom::with_annotations(
        Class::new(format!("{NS}Student")).into(),
        Class::new(format!("{NS}Person")).into(),
        vec![Annotation::new(
            AnnotationProperty::new("http://www.w3.org/2000/01/rdf-schema#comment"),
            "students are people",
        )],
    ));
    ontology.add_axiom(SubClassOfAxiom::new(
        Class::new(format!("{NS}Professor")).into(),
        ClassExpression::object_some_values_from(
            ObjectProperty::new(format!("{NS}teaches")),
            Class::new(format!("{NS}Course")).into(),
        ),
    ));
    ontology.add_axiom(EquivalentClassesAxiom::new(vec![
        Class::new(format!("{NS}Person")).into(),
        Class::new(format!("{NS}Human")).into(),
    ]));
    ontology.add_axiom(SubObjectPropertyOfAxiom::new(
        SubObjectPropertyExpression::PropertyChain(vec![
            ObjectProperty::new(format!("{NS}hasParent")).into(),
            ObjectProperty::new(format!("{NS}hasParent")).into(),
        ]),
        ObjectProperty::new(format!("{NS}hasGrandparent")).into(),
    ));
    ontology.add_axiom(TransitiveObjectPropertyAxiom::new(
        ObjectProperty::new(format!("{NS}ancestorOf")).into(),
    ));
    ontology.add_axiom(DataPropertyRangeAxiom::new(
        DataProperty::new(format!("{NS}hasAge")),
        DataRange::Datatype(Datatype::new(xsd::INTEGER.clone())),
    ));
    ontology.add_axiom(ClassAssertionAxiom::new(
        Class::new(format!("{NS}Person")).into(),
        NamedIndividual::new(format!("{NS}alice")),
    ));
    ontology.add_axiom(ObjectPropertyAssertionAxiom::new(
        ObjectProperty::new(format!("{NS}teaches")),
        NamedIndividual::new(format!("{NS}alice")),
        NamedIndividual::new(format!("{NS}logic101")),
    ));
    ontology.add_axiom(DataPropertyAssertionAxiom::new(
        DataProperty::new(format!("{NS}hasAge")),
        NamedIndividual::new(format!("{NS}alice")),
        Literal::typed("30", xsd::INTEGER.clone()),
    ));
    ontology.add_axiom(DataPropertyAssertionAxiom::new(
        DataProperty::new(format!("{NS}motto")),
        NamedIndividual::new(format!("{NS}alice")),
        Literal::lang_tagged("wissen ist macht", "de"),
    ));
    ontology.add_axiom(AnnotationAssertionAxiom::new(
        AnnotationProperty::new("http://www.w3.org/2000/01/rdf-schema#label"),
        IRI::new(format!("{NS}Person")).unwrap(),
        Literal::simple("Person"),
    ));
    ontology
}

#[test]
fn parse_recovers_the_serialized_ontology() {
    let source = rich_ontology();
    let text = source.to_functional_syntax();
    let parsed = parse(&text);

    assert_eq!(parsed.iri(), source.iri());
    assert_eq!(parsed.version_iri(), source.version_iri());
    assert_eq!(parsed.imports(), source.imports());
    assert_eq!(parsed.ontology_annotations(), source.ontology_annotations());
    assert_eq!(parsed.axiom_count(), source.axiom_count());
    for axiom in source.axioms() {
        assert!(
            parsed.contains_axiom(axiom),
            "missing after round trip: {}",
            axiom.to_functional_syntax()
        );
    }
}

#[test]
fn serialize_after_parse_is_identity_on_serializer_output() {
    let text = rich_ontology().to_functional_syntax();
    let reparsed = parse(&text).to_functional_syntax();
    assert_eq!(reparsed, text);
}

#[test]
fn double_round_trip_is_stable() {
    let once = parse(&rich_ontology().to_functional_syntax()).to_functional_syntax();
    let twice = parse(&once).to_functional_syntax();
    assert_eq!(twice, once);
}

#[test]
fn empty_ontology_round_trips() {
    let text = Ontology::new().to_functional_syntax();
    let parsed = parse(&text);
    assert_eq!(parsed.axiom_count(), 0);
    assert_eq!(parsed.to_functional_syntax(), text);
}

#[test]
fn escaped_literals_survive_the_round_trip() {
    let mut ontology = Ontology::new();
    let tricky = "line\nbreak\ttab \"quotes\" back\\slash";
    ontology.add_axiom(DataPropertyAssertionAxiom::new(
        DataProperty::new(format!("{NS}note")),
        NamedIndividual::new(format!("{NS}a")),
        Literal::simple(tricky),
    ));

    let parsed = parse(&ontology.to_functional_syntax());
    match parsed.axioms()[0].as_ref() {
        owl2_ontology::Axiom::DataPropertyAssertion(assertion) => {
            assert_eq!(assertion.value().lexical_form(), tricky);
        }
        other => panic!("unexpected axiom {other:?}"),
    }
}

fn class_of(index: usize) -> Class {
    Class::new(format!("{NS}C{index}"))
}

fn individual_of(index: usize) -> NamedIndividual {
    NamedIndividual::new(format!("{NS}i{index}"))
}

proptest! {
    #[test]
    fn generated_class_graphs_round_trip(
        subclass_pairs in prop::collection::vec((0usize..8, 0usize..8), 0..12),
        declared in prop::collection::vec(0usize..8, 0..8),
    ) {
        let mut ontology = Ontology::with_iri("http://example.org/u");
        for index in declared {
            ontology.add_axiom(DeclarationAxiom::new(class_of(index)));
        }
        for (sub, superclass) in subclass_pairs {
            ontology.add_axiom(SubClassOfAxiom::new(
                class_of(sub).into(),
                class_of(superclass).into(),
            ));
        }

        let text = ontology.to_functional_syntax();
        let parsed = FunctionalSyntaxParser::new().parse_str(&text).unwrap();

        prop_assert_eq!(parsed.axiom_count(), ontology.axiom_count());
        for axiom in ontology.axioms() {
            prop_assert!(parsed.contains_axiom(axiom));
        }
        prop_assert_eq!(parsed.to_functional_syntax(), text);
    }

    #[test]
    fn generated_assertions_round_trip(
        edges in prop::collection::vec((0usize..5, 0usize..5), 0..10),
        values in prop::collection::vec("[ -~]{0,12}", 0..6),
    ) {
        let mut ontology = Ontology::with_iri("http://example.org/u");
        for (source, target) in edges {
            ontology.add_axiom(ObjectPropertyAssertionAxiom::new(
                ObjectProperty::new(format!("{NS}p")),
                individual_of(source),
                individual_of(target),
            ));
        }
        for (index, value) in values.into_iter().enumerate() {
            ontology.add_axiom(DataPropertyAssertionAxiom::new(
                DataProperty::new(format!("{NS}v")),
                individual_of(index),
                Literal::simple(value),
            ));
        }

        let text = ontology.to_functional_syntax();
        let parsed = FunctionalSyntaxParser::new().parse_str(&text).unwrap();

        prop_assert_eq!(parsed.axiom_count(), ontology.axiom_count());
        for axiom in ontology.axioms() {
            prop_assert!(parsed.contains_axiom(axiom));
        }
        prop_assert_eq!(parsed.to_functional_syntax(), text);
    }
}
