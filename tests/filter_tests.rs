//! Integration tests for the filter and subgraph-extraction engine

use hashbrown::HashSet;
use owl2_ontology::{
    Axiom, Class, ClassAssertionAxiom, DeclarationAxiom, NamedIndividual, ObjectProperty,
    ObjectPropertyAssertionAxiom, Ontology, OntologyFilter, IRI,
};

const NS: &str = "http://example.org/u#";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn iri(local: &str) -> IRI {
    IRI::new(format!("{NS}{local}")).unwrap()
}

fn individual(local: &str) -> NamedIndividual {
    NamedIndividual::new(iri(local))
}

fn assertion(property: &str, source: &str, target: &str) -> ObjectPropertyAssertionAxiom {
    ObjectPropertyAssertionAxiom::new(
        ObjectProperty::new(iri(property)),
        individual(source),
        individual(target),
    )
}

fn set(names: &[&str]) -> HashSet<IRI> {
    names.iter().map(|name| iri(name)).collect()
}

/// Individuals a, b, c, d connected as p(a,b), p(b,c), p(c,d)
fn chain_ontology() -> Ontology {
    let mut ontology = Ontology::with_iri("http://example.org/u");
    ontology.register_prefix("ex", NS);
    for name in ["a", "b", "c", "d"] {
        ontology.add_axiom(DeclarationAxiom::new(individual(name)));
    }
    ontology.add_axiom(assertion("p", "a", "b"));
    ontology.add_axiom(assertion("p", "b", "c"));
    ontology.add_axiom(assertion("p", "c", "d"));
    ontology
}

#[test]
fn neighborhood_depths_on_the_chain() {
    // Scenario: two hops from a reach {a, b, c}; ten hops saturate.
    init_logging();
    let ontology = chain_ontology();
    let filter = OntologyFilter::new(&ontology);

    let two = filter.extract_neighborhood(&iri("a"), 2);
    assert_eq!(two.included_individuals, set(&["a", "b", "c"]));

    let ten = filter.extract_neighborhood(&iri("a"), 10);
    assert_eq!(ten.included_individuals, set(&["a", "b", "c", "d"]));
}

#[test]
fn neighborhood_depth_zero_is_seed_restricted_to_present() {
    let ontology = chain_ontology();
    let filter = OntologyFilter::new(&ontology);

    let mut seeds = set(&["a", "d"]);
    seeds.insert(iri("phantom"));
    let result = filter.extract_neighborhood_of(&seeds, 0);
    assert_eq!(result.included_individuals, set(&["a", "d"]));
}

#[test]
fn neighborhood_grows_monotonically() {
    let ontology = chain_ontology();
    let filter = OntologyFilter::new(&ontology);
    for depth in 0..4 {
        let smaller = filter.extract_neighborhood(&iri("b"), depth).included_individuals;
        let larger = filter
            .extract_neighborhood(&iri("b"), depth + 1)
            .included_individuals;
        assert!(smaller.is_subset(&larger), "depth {depth} not monotone");
    }
}

#[test]
fn path_extraction_keeps_exactly_the_chain() {
    // Scenario: the only path a..d is the full chain.
    let ontology = chain_ontology();
    let filter = OntologyFilter::new(&ontology);
    let result = filter.extract_path(&iri("a"), &iri("d"));

    assert_eq!(result.included_individuals, set(&["a", "b", "c", "d"]));
    let surviving: Vec<String> = result
        .ontology
        .axioms()
        .iter()
        .filter(|axiom| matches!(axiom.as_ref(), Axiom::ObjectPropertyAssertion(_)))
        .map(|axiom| axiom.to_functional_syntax())
        .collect();
    assert_eq!(surviving.len(), 3);
    for pair in [("a", "b"), ("b", "c"), ("c", "d")] {
        let expected = assertion("p", pair.0, pair.1).to_functional_syntax();
        assert!(surviving.contains(&expected));
    }
}

#[test]
fn path_to_unknown_target_is_empty_with_metadata() {
    let ontology = chain_ontology();
    let filter = OntologyFilter::new(&ontology);
    let result = filter.extract_path(&iri("a"), &iri("x"));

    assert!(result.included_individuals.is_empty());
    let assertion_count = result
        .ontology
        .axioms()
        .iter()
        .filter(|axiom| axiom.is_assertion_axiom())
        .count();
    assert_eq!(assertion_count, 0);
    assert_eq!(
        result.ontology.iri().map(|iri| iri.as_str()),
        Some("http://example.org/u")
    );
    assert_eq!(result.ontology.namespace_for_prefix("ex"), Some(NS));
}

#[test]
fn path_nonempty_iff_reachable() {
    let mut ontology = chain_ontology();
    // Disconnected island: e-f
    ontology.add_axiom(assertion("p", "e", "f"));

    let filter = OntologyFilter::new(&ontology);
    assert!(!filter
        .extract_path(&iri("a"), &iri("d"))
        .included_individuals
        .is_empty());
    assert!(filter
        .extract_path(&iri("a"), &iri("f"))
        .included_individuals
        .is_empty());
}

#[test]
fn class_filter_scenario() {
    // Scenario: instances of A are {i1, i2}; the B assertion must not
    // survive, while p(i1, i3) does.
    init_logging();
    let mut ontology = Ontology::new();
    ontology.add_axiom(DeclarationAxiom::new(Class::new(iri("A"))));
    ontology.add_axiom(DeclarationAxiom::new(Class::new(iri("B"))));
    ontology.add_axiom(ClassAssertionAxiom::new(
        Class::new(iri("A")).into(),
        individual("i1"),
    ));
    ontology.add_axiom(ClassAssertionAxiom::new(
        Class::new(iri("A")).into(),
        individual("i2"),
    ));
    ontology.add_axiom(ClassAssertionAxiom::new(
        Class::new(iri("B")).into(),
        individual("i3"),
    ));
    ontology.add_axiom(assertion("p", "i1", "i3"));

    let filter = OntologyFilter::new(&ontology);
    let result = filter.filter_by_classes(&set(&["A"]));

    assert_eq!(result.included_individuals, set(&["i1", "i2"]));

    let rendered: Vec<String> = result
        .ontology
        .axioms()
        .iter()
        .map(|axiom| axiom.to_functional_syntax())
        .collect();
    assert_eq!(
        rendered
            .iter()
            .filter(|line| line.starts_with("ClassAssertion(<http://example.org/u#A>"))
            .count(),
        2
    );
    assert!(!rendered
        .iter()
        .any(|line| line.starts_with("ClassAssertion(<http://example.org/u#B>")));
    assert!(rendered.contains(&assertion("p", "i1", "i3").to_functional_syntax()));
    assert!(rendered.contains(&"Declaration(Class(<http://example.org/u#A>))".to_string()));
}

#[test]
fn filtered_axioms_come_from_the_source() {
    // Every axiom in the output except materialized declarations must
    // exist in the source ontology.
    let ontology = chain_ontology();
    let filter = OntologyFilter::new(&ontology);
    let result = filter.extract_neighborhood(&iri("a"), 1);

    for axiom in result.ontology.axioms() {
        if matches!(axiom.as_ref(), Axiom::Declaration(_)) {
            continue;
        }
        assert!(ontology.contains_axiom(axiom));
    }
}

#[test]
fn excluding_individuals_drops_their_axioms() {
    let mut ontology = Ontology::new();
    ontology.add_axiom(ClassAssertionAxiom::new(
        Class::new(iri("A")).into(),
        individual("i1"),
    ));
    ontology.add_axiom(assertion("p", "i1", "i3"));

    let result = OntologyFilter::new(&ontology)
        .with_classes(set(&["A"]))
        .exclude_individuals(set(&["i3"]))
        .with_max_depth(0)
        .execute();

    assert_eq!(result.included_individuals, set(&["i1"]));
    assert!(!result
        .ontology
        .axioms()
        .iter()
        .any(|axiom| matches!(axiom.as_ref(), Axiom::ObjectPropertyAssertion(_))));
}

#[test]
fn builder_composes_criteria() {
    let ontology = chain_ontology();
    let result = OntologyFilter::new(&ontology)
        .with_individuals(set(&["a"]))
        .with_max_depth(1)
        .include_declarations(false)
        .include_class_hierarchy(false)
        .include_property_hierarchy(false)
        .execute();

    assert_eq!(result.included_individuals, set(&["a", "b"]));
    assert!(result
        .ontology
        .axioms()
        .iter()
        .all(|axiom| matches!(axiom.as_ref(), Axiom::ObjectPropertyAssertion(_))));
}

#[test]
fn random_sample_is_reproducible_for_a_seed() {
    let ontology = chain_ontology();
    let filter = OntologyFilter::new(&ontology);

    let first = filter.random_sample(2, 42);
    let second = filter.random_sample(2, 42);
    assert_eq!(first.included_individuals, second.included_individuals);
    assert_eq!(first.filtered_individual_count, 2);
}

#[test]
fn result_counts_reflect_source_and_output() {
    let ontology = chain_ontology();
    let filter = OntologyFilter::new(&ontology);
    let result = filter.extract_neighborhood(&iri("a"), 1);

    assert_eq!(result.original_axiom_count, 7);
    assert_eq!(result.original_individual_count, 4);
    assert_eq!(result.filtered_individual_count, 2);
    assert_eq!(result.filtered_axiom_count, result.ontology.axiom_count());
}
