//! Ontology filtering and subgraph extraction
//!
//! Produces new ontologies from hash-based selection (individuals,
//! class membership, property values) and graph traversal (k-hop
//! neighborhoods, shortest paths) over the object-property assertion
//! graph, plus reproducible random sampling. Every entry point is a
//! thin wrapper around [`OntologyFilter::apply_filter`], so all
//! filters share one semantics.
//!
//! The filter never mutates the source ontology and never splits an
//! axiom: each axiom is kept or dropped whole. Output ontologies
//! share axiom records with the source.

use crate::axioms::{Axiom, DeclarationAxiom};
use crate::entities::{Entity, Individual, Literal};
use crate::iri::IRI;
use crate::ontology::Ontology;
use hashbrown::{HashMap, HashSet};
use petgraph::graphmap::UnGraphMap;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// Arbitrary axiom predicate attached to filter criteria
pub type AxiomPredicate = Arc<dyn Fn(&Axiom) -> bool + Send + Sync>;

/// Criteria for filtering ontology content
///
/// Field defaults select nothing and keep every augmentation flag on:
/// empty seed sets, no property-value constraints, unlimited
/// traversal depth, and declarations plus class/property hierarchy
/// inclusion enabled.
#[derive(Clone)]
pub struct FilterCriteria {
    /// Individuals to include explicitly
    pub include_individuals: HashSet<IRI>,
    /// Classes whose instances should be included
    pub include_classes: HashSet<IRI>,
    /// Individuals to exclude; axioms referencing them are dropped
    pub exclude_individuals: HashSet<IRI>,
    /// Property IRI → allowed lexical forms; seeds must match every
    /// entry
    pub property_value_filters: HashMap<IRI, HashSet<String>>,
    /// Maximum traversal depth from the seed set: `Some(0)` keeps the
    /// seeds only, `None` expands without bound
    pub max_depth: Option<u32>,
    /// Add class hierarchy axioms whose named members are all
    /// referenced by surviving axioms
    pub include_class_hierarchy: bool,
    /// Add property hierarchy axioms whose members are all referenced
    /// by surviving axioms
    pub include_property_hierarchy: bool,
    /// Add declarations for every entity referenced by surviving
    /// axioms
    pub include_declarations: bool,
    /// Additional predicate a copied axiom must satisfy
    pub axiom_predicate: Option<AxiomPredicate>,
}

impl FilterCriteria {
    /// Criteria with empty selections and all augmentation flags on
    pub fn new() -> Self {
        FilterCriteria {
            include_individuals: HashSet::new(),
            include_classes: HashSet::new(),
            exclude_individuals: HashSet::new(),
            property_value_filters: HashMap::new(),
            max_depth: None,
            include_class_hierarchy: true,
            include_property_hierarchy: true,
            include_declarations: true,
            axiom_predicate: None,
        }
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterCriteria")
            .field("include_individuals", &self.include_individuals)
            .field("include_classes", &self.include_classes)
            .field("exclude_individuals", &self.exclude_individuals)
            .field("property_value_filters", &self.property_value_filters)
            .field("max_depth", &self.max_depth)
            .field("include_class_hierarchy", &self.include_class_hierarchy)
            .field("include_property_hierarchy", &self.include_property_hierarchy)
            .field("include_declarations", &self.include_declarations)
            .field("axiom_predicate", &self.axiom_predicate.is_some())
            .finish()
    }
}

/// Result of a filtering operation
#[derive(Debug, Clone)]
pub struct FilterResult {
    /// The filtered ontology
    pub ontology: Ontology,
    /// Axiom count of the source ontology
    pub original_axiom_count: usize,
    /// Axiom count of the filtered ontology
    pub filtered_axiom_count: usize,
    /// Individual count of the source ontology
    pub original_individual_count: usize,
    /// Individual count that survived the filter
    pub filtered_individual_count: usize,
    /// IRIs of the individuals that survived
    pub included_individuals: HashSet<IRI>,
}

/// Ontology filtering and subgraph extraction
///
/// Construct with a source ontology, then either call one of the
/// direct filter methods or accumulate criteria through the builder
/// methods and finish with [`execute`](Self::execute).
pub struct OntologyFilter<'a> {
    ontology: &'a Ontology,
    criteria: FilterCriteria,
}

impl<'a> OntologyFilter<'a> {
    /// Create a filter over the given source ontology
    pub fn new(ontology: &'a Ontology) -> Self {
        OntologyFilter {
            ontology,
            criteria: FilterCriteria::new(),
        }
    }

    /// Get the source ontology
    pub fn ontology(&self) -> &Ontology {
        self.ontology
    }

    // ---- direct filters ----

    /// Extract the subgraph of axioms referencing any of the given
    /// individuals
    pub fn filter_by_individuals(&self, iris: &HashSet<IRI>) -> FilterResult {
        let mut criteria = FilterCriteria::new();
        criteria.include_individuals = iris.clone();
        criteria.max_depth = Some(0);
        self.apply_filter(&criteria)
    }

    /// Extract the subgraph around all instances of the given classes
    pub fn filter_by_classes(&self, class_iris: &HashSet<IRI>) -> FilterResult {
        let mut criteria = FilterCriteria::new();
        criteria.include_classes = class_iris.clone();
        criteria.max_depth = Some(0);
        self.apply_filter(&criteria)
    }

    /// Extract the subgraph around individuals carrying the given
    /// data property value
    ///
    /// The match is on full literal equality: lexical form, datatype,
    /// and language tag.
    pub fn filter_by_property(&self, property: &IRI, value: &Literal) -> FilterResult {
        let mut seeds = HashSet::new();
        for axiom in self.ontology.axioms() {
            if let Axiom::DataPropertyAssertion(assertion) = axiom.as_ref() {
                if assertion.property().iri() == property && assertion.value() == value {
                    if let Individual::Named(named) = assertion.source() {
                        seeds.insert(named.iri().clone());
                    }
                }
            }
        }
        self.filter_by_individuals(&seeds)
    }

    /// Extract the subgraph around individuals with the given object
    /// property pointing at the target individual
    pub fn filter_by_object_property(&self, property: &IRI, target: &IRI) -> FilterResult {
        let mut seeds = HashSet::new();
        for axiom in self.ontology.axioms() {
            if let Axiom::ObjectPropertyAssertion(assertion) = axiom.as_ref() {
                if assertion.property().iri() == property
                    && assertion.target().iri() == Some(target)
                {
                    if let Individual::Named(named) = assertion.source() {
                        seeds.insert(named.iri().clone());
                    }
                }
            }
        }
        self.filter_by_individuals(&seeds)
    }

    /// Extract the k-hop neighborhood around a single seed individual
    pub fn extract_neighborhood(&self, seed: &IRI, depth: u32) -> FilterResult {
        let mut seeds = HashSet::new();
        seeds.insert(seed.clone());
        self.extract_neighborhood_of(&seeds, depth)
    }

    /// Extract the k-hop neighborhood around a set of seed individuals
    ///
    /// Traversal runs over the undirected graph induced by object
    /// property assertions between named individuals. Depth 0 keeps
    /// the seeds only; each step expands exactly one hop.
    pub fn extract_neighborhood_of(&self, seeds: &HashSet<IRI>, depth: u32) -> FilterResult {
        let mut criteria = FilterCriteria::new();
        criteria.include_individuals = seeds.clone();
        criteria.max_depth = Some(depth);
        self.apply_filter(&criteria)
    }

    /// Extract the union of all shortest paths between two individuals
    ///
    /// When no path exists (or either endpoint is absent), the result
    /// is an empty ontology with the source metadata preserved.
    pub fn extract_path(&self, start: &IRI, end: &IRI) -> FilterResult {
        let graph = AssertionGraph::build(self.ontology);
        let vertices = graph.shortest_path_vertices(start, end);
        log::debug!(
            "path extraction {start} -> {end}: {} vertices on shortest paths",
            vertices.len()
        );

        let mut criteria = FilterCriteria::new();
        criteria.include_individuals = vertices;
        criteria.max_depth = Some(0);
        self.apply_filter(&criteria)
    }

    /// Deterministically sample `n` individuals and extract their
    /// subgraph
    ///
    /// Candidates are sorted by IRI before sampling, so a fixed seed
    /// always selects the same individuals.
    pub fn random_sample(&self, n: usize, seed: u64) -> FilterResult {
        let mut candidates: Vec<IRI> = self.all_individuals().into_iter().collect();
        candidates.sort();

        let mut rng = StdRng::seed_from_u64(seed);
        candidates.shuffle(&mut rng);
        candidates.truncate(n);

        let seeds: HashSet<IRI> = candidates.into_iter().collect();
        self.filter_by_individuals(&seeds)
    }

    // ---- builder ----

    /// Add individuals to the seed set
    pub fn with_individuals(mut self, iris: HashSet<IRI>) -> Self {
        self.criteria.include_individuals.extend(iris);
        self
    }

    /// Add classes whose instances join the seed set
    pub fn with_classes(mut self, class_iris: HashSet<IRI>) -> Self {
        self.criteria.include_classes.extend(class_iris);
        self
    }

    /// Exclude individuals; axioms referencing them are dropped
    pub fn exclude_individuals(mut self, iris: HashSet<IRI>) -> Self {
        self.criteria.exclude_individuals.extend(iris);
        self
    }

    /// Constrain seeds to those matching the property-value filter
    pub fn with_property_value<S: Into<String>>(mut self, property: IRI, value: S) -> Self {
        self.criteria
            .property_value_filters
            .entry(property)
            .or_default()
            .insert(value.into());
        self
    }

    /// Set the maximum traversal depth
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.criteria.max_depth = Some(depth);
        self
    }

    /// Toggle class hierarchy inclusion
    pub fn include_class_hierarchy(mut self, include: bool) -> Self {
        self.criteria.include_class_hierarchy = include;
        self
    }

    /// Toggle property hierarchy inclusion
    pub fn include_property_hierarchy(mut self, include: bool) -> Self {
        self.criteria.include_property_hierarchy = include;
        self
    }

    /// Toggle declaration inclusion
    pub fn include_declarations(mut self, include: bool) -> Self {
        self.criteria.include_declarations = include;
        self
    }

    /// Attach an arbitrary predicate copied axioms must satisfy
    pub fn with_axiom_predicate(mut self, predicate: AxiomPredicate) -> Self {
        self.criteria.axiom_predicate = Some(predicate);
        self
    }

    /// Execute the accumulated criteria
    pub fn execute(&self) -> FilterResult {
        self.apply_filter(&self.criteria)
    }

    // ---- the single filter implementation ----

    /// Apply filter criteria and build the filtered ontology
    ///
    /// This is the one implementation every other entry point wraps.
    pub fn apply_filter(&self, criteria: &FilterCriteria) -> FilterResult {
        let all_individuals = self.all_individuals();

        // Seed set: explicit individuals plus class instances, minus
        // exclusions.
        let mut seeds: HashSet<IRI> = criteria.include_individuals.clone();
        for class_iri in &criteria.include_classes {
            seeds.extend(self.individuals_of_class(class_iri));
        }
        for excluded in &criteria.exclude_individuals {
            seeds.remove(excluded);
        }

        // Property-value constraints: a seed must match every filter.
        if !criteria.property_value_filters.is_empty() {
            seeds.retain(|iri| self.matches_property_filters(iri, &criteria.property_value_filters));
        }

        // Neighborhood expansion over the assertion graph.
        let included: HashSet<IRI> = if criteria.max_depth == Some(0) {
            seeds
                .into_iter()
                .filter(|iri| all_individuals.contains(iri))
                .collect()
        } else {
            let graph = AssertionGraph::build(self.ontology);
            graph.bfs(&seeds, criteria.max_depth)
        };

        let mut result = FilterResult {
            ontology: self.copy_metadata(),
            original_axiom_count: self.ontology.axiom_count(),
            filtered_axiom_count: 0,
            original_individual_count: all_individuals.len(),
            filtered_individual_count: included.len(),
            included_individuals: included,
        };

        // Pass 1: copy every axiom referencing an included individual,
        // skipping axioms touching excluded ones.
        let mut kept: Vec<bool> = vec![false; self.ontology.axioms().len()];
        for (index, axiom) in self.ontology.axioms().iter().enumerate() {
            let referenced = axiom_individuals(axiom);
            if referenced.is_empty() {
                continue;
            }
            let hits_included = referenced
                .iter()
                .any(|iri| result.included_individuals.contains(*iri));
            let hits_excluded = referenced
                .iter()
                .any(|iri| criteria.exclude_individuals.contains(*iri));
            if !hits_included || hits_excluded {
                continue;
            }
            if let Some(predicate) = &criteria.axiom_predicate {
                if !predicate(axiom) {
                    continue;
                }
            }
            kept[index] = true;
            result.ontology.add_shared_axiom(axiom.clone());
        }

        // Reference sets for the hierarchy and declaration passes are
        // computed from the pass-1 survivors.
        let mut referenced_entities: Vec<Entity> = Vec::new();
        let mut seen_entities: HashSet<Entity> = HashSet::new();
        for (index, axiom) in self.ontology.axioms().iter().enumerate() {
            if !kept[index] {
                continue;
            }
            for entity in axiom.signature() {
                if seen_entities.insert(entity.clone()) {
                    referenced_entities.push(entity);
                }
            }
        }

        if criteria.include_class_hierarchy {
            self.add_class_hierarchy(&mut result.ontology, &mut kept, &seen_entities);
        }
        if criteria.include_property_hierarchy {
            self.add_property_hierarchy(&mut result.ontology, &mut kept, &seen_entities);
        }

        if criteria.include_declarations {
            // Hierarchy axioms are surviving axioms too; their
            // signatures join the declaration set.
            for (index, axiom) in self.ontology.axioms().iter().enumerate() {
                if !kept[index] {
                    continue;
                }
                for entity in axiom.signature() {
                    if seen_entities.insert(entity.clone()) {
                        referenced_entities.push(entity);
                    }
                }
            }
            let mut declared: HashSet<Entity> = result
                .ontology
                .declaration_axioms()
                .iter()
                .map(|decl| decl.entity().clone())
                .collect();
            for entity in referenced_entities {
                if declared.insert(entity.clone()) {
                    result.ontology.add_axiom(DeclarationAxiom::new(entity));
                }
            }
        }

        result.filtered_axiom_count = result.ontology.axiom_count();
        log::debug!(
            "filter kept {} of {} axioms, {} of {} individuals",
            result.filtered_axiom_count,
            result.original_axiom_count,
            result.filtered_individual_count,
            result.original_individual_count
        );
        result
    }

    // ---- helpers ----

    /// All named individuals present in the ontology: declared ones
    /// plus any appearing in an assertion position
    fn all_individuals(&self) -> HashSet<IRI> {
        let mut individuals: HashSet<IRI> = self
            .ontology
            .individuals()
            .into_iter()
            .map(|ind| ind.iri().clone())
            .collect();
        for axiom in self.ontology.axioms() {
            for iri in axiom_individuals(axiom) {
                individuals.insert(iri.clone());
            }
        }
        individuals
    }

    /// Named individuals asserted to be instances of the given class
    fn individuals_of_class(&self, class_iri: &IRI) -> Vec<IRI> {
        let mut out = Vec::new();
        for axiom in self.ontology.axioms() {
            if let Axiom::ClassAssertion(assertion) = axiom.as_ref() {
                let named_class = assertion
                    .class_expression()
                    .as_named()
                    .is_some_and(|class| class.iri() == class_iri);
                if named_class {
                    if let Individual::Named(named) = assertion.individual() {
                        out.push(named.iri().clone());
                    }
                }
            }
        }
        out
    }

    /// Check the individual against every property-value filter
    fn matches_property_filters(
        &self,
        individual: &IRI,
        filters: &HashMap<IRI, HashSet<String>>,
    ) -> bool {
        filters.iter().all(|(property, allowed)| {
            self.ontology.axioms().iter().any(|axiom| {
                if let Axiom::DataPropertyAssertion(assertion) = axiom.as_ref() {
                    assertion.property().iri() == property
                        && assertion.source().iri() == Some(individual)
                        && allowed.contains(assertion.value().lexical_form())
                } else {
                    false
                }
            })
        })
    }

    /// Add class axioms whose named members are all referenced
    fn add_class_hierarchy(
        &self,
        target: &mut Ontology,
        kept: &mut [bool],
        referenced: &HashSet<Entity>,
    ) {
        for (index, axiom) in self.ontology.axioms().iter().enumerate() {
            if kept[index] || !axiom.is_class_axiom() {
                continue;
            }
            let members: Vec<Entity> = axiom
                .signature()
                .into_iter()
                .filter(|entity| matches!(entity, Entity::Class(_)))
                .collect();
            if !members.is_empty() && members.iter().all(|entity| referenced.contains(entity)) {
                kept[index] = true;
                target.add_shared_axiom(axiom.clone());
            }
        }
    }

    /// Add property hierarchy axioms whose members are all referenced
    fn add_property_hierarchy(
        &self,
        target: &mut Ontology,
        kept: &mut [bool],
        referenced: &HashSet<Entity>,
    ) {
        for (index, axiom) in self.ontology.axioms().iter().enumerate() {
            if kept[index] {
                continue;
            }
            let hierarchy = matches!(
                axiom.as_ref(),
                Axiom::SubObjectPropertyOf(_)
                    | Axiom::EquivalentObjectProperties(_)
                    | Axiom::DisjointObjectProperties(_)
                    | Axiom::InverseObjectProperties(_)
                    | Axiom::SubDataPropertyOf(_)
                    | Axiom::EquivalentDataProperties(_)
                    | Axiom::DisjointDataProperties(_)
            );
            if !hierarchy {
                continue;
            }
            let members: Vec<Entity> = axiom
                .signature()
                .into_iter()
                .filter(|entity| {
                    matches!(entity, Entity::ObjectProperty(_) | Entity::DataProperty(_))
                })
                .collect();
            if !members.is_empty() && members.iter().all(|entity| referenced.contains(entity)) {
                kept[index] = true;
                target.add_shared_axiom(axiom.clone());
            }
        }
    }

    /// Copy ontology metadata: IRI, version IRI, imports, prefixes,
    /// and ontology-level annotations
    fn copy_metadata(&self) -> Ontology {
        let mut target = Ontology::new();
        if let Some(iri) = self.ontology.iri() {
            target.set_iri(iri.clone());
        }
        if let Some(version) = self.ontology.version_iri() {
            target.set_version_iri(version.clone());
        }
        for import in self.ontology.imports() {
            target.add_import(import.clone());
        }
        target.clear_prefixes();
        for (prefix, namespace) in self.ontology.prefix_map() {
            target.register_prefix(prefix.clone(), namespace.clone());
        }
        target.set_ontology_annotations(self.ontology.ontology_annotations().to_vec());
        target
    }
}

/// Named-individual IRIs an axiom references in assertion positions
fn axiom_individuals(axiom: &Axiom) -> Vec<&IRI> {
    fn named(individual: &Individual) -> Option<&IRI> {
        individual.iri()
    }

    match axiom {
        Axiom::SameIndividual(same) => same.individuals().iter().filter_map(named).collect(),
        Axiom::DifferentIndividuals(different) => {
            different.individuals().iter().filter_map(named).collect()
        }
        Axiom::ClassAssertion(assertion) => named(assertion.individual()).into_iter().collect(),
        Axiom::ObjectPropertyAssertion(assertion) => named(assertion.source())
            .into_iter()
            .chain(named(assertion.target()))
            .collect(),
        Axiom::NegativeObjectPropertyAssertion(assertion) => named(assertion.source())
            .into_iter()
            .chain(named(assertion.target()))
            .collect(),
        Axiom::DataPropertyAssertion(assertion) => {
            named(assertion.source()).into_iter().collect()
        }
        Axiom::NegativeDataPropertyAssertion(assertion) => {
            named(assertion.source()).into_iter().collect()
        }
        _ => Vec::new(),
    }
}

/// Undirected adjacency view over object-property assertions between
/// named individuals
struct AssertionGraph {
    ids: HashMap<IRI, u32>,
    graph: UnGraphMap<u32, ()>,
}

impl AssertionGraph {
    fn build(ontology: &Ontology) -> Self {
        fn id_of(iri: &IRI, ids: &mut HashMap<IRI, u32>) -> u32 {
            if let Some(&id) = ids.get(iri) {
                id
            } else {
                let id = ids.len() as u32;
                ids.insert(iri.clone(), id);
                id
            }
        }

        let mut ids: HashMap<IRI, u32> = HashMap::new();
        let mut graph: UnGraphMap<u32, ()> = UnGraphMap::new();

        // Every declared individual is a node, so isolated individuals
        // participate in traversal with degree zero.
        for individual in ontology.individuals() {
            let id = id_of(individual.iri(), &mut ids);
            graph.add_node(id);
        }

        for axiom in ontology.axioms() {
            if let Axiom::ObjectPropertyAssertion(assertion) = axiom.as_ref() {
                if let (Some(source), Some(target)) =
                    (assertion.source().iri(), assertion.target().iri())
                {
                    let source_id = id_of(source, &mut ids);
                    let target_id = id_of(target, &mut ids);
                    graph.add_node(source_id);
                    graph.add_node(target_id);
                    // Self-edges never change reachability.
                    if source_id != target_id {
                        graph.add_edge(source_id, target_id, ());
                    }
                }
            }
        }

        AssertionGraph { ids, graph }
    }

    /// Layered BFS from the seed set. `depth` of `None` expands
    /// without bound; `Some(k)` expands exactly `k` hops.
    fn bfs(&self, seeds: &HashSet<IRI>, depth: Option<u32>) -> HashSet<IRI> {
        let mut visited_ids: HashSet<u32> = HashSet::new();
        let mut frontier: Vec<u32> = Vec::new();

        for seed in seeds {
            if let Some(&id) = self.ids.get(seed) {
                if visited_ids.insert(id) {
                    frontier.push(id);
                }
            }
        }

        let mut hops = 0u32;
        while !frontier.is_empty() && depth.map_or(true, |limit| hops < limit) {
            let mut next = Vec::new();
            for node in frontier {
                for neighbor in self.graph.neighbors(node) {
                    if visited_ids.insert(neighbor) {
                        next.push(neighbor);
                    }
                }
            }
            frontier = next;
            hops += 1;
        }

        self.ids
            .iter()
            .filter(|(_, id)| visited_ids.contains(*id))
            .map(|(iri, _)| iri.clone())
            .collect()
    }

    /// Vertices lying on any shortest path between the endpoints.
    /// Empty when either endpoint is missing or unreachable.
    fn shortest_path_vertices(&self, start: &IRI, end: &IRI) -> HashSet<IRI> {
        let (Some(&start_id), Some(&end_id)) = (self.ids.get(start), self.ids.get(end)) else {
            return HashSet::new();
        };

        let from_start = self.distances(start_id);
        let Some(&total) = from_start.get(&end_id) else {
            return HashSet::new();
        };
        let from_end = self.distances(end_id);

        self.ids
            .iter()
            .filter(|(_, id)| {
                match (from_start.get(*id), from_end.get(*id)) {
                    (Some(a), Some(b)) => a + b == total,
                    _ => false,
                }
            })
            .map(|(iri, _)| iri.clone())
            .collect()
    }

    fn distances(&self, origin: u32) -> HashMap<u32, u32> {
        let mut distances: HashMap<u32, u32> = HashMap::new();
        let mut queue = VecDeque::new();
        distances.insert(origin, 0);
        queue.push_back(origin);

        while let Some(node) = queue.pop_front() {
            let next_distance = distances[&node] + 1;
            for neighbor in self.graph.neighbors(node) {
                if !distances.contains_key(&neighbor) {
                    distances.insert(neighbor, next_distance);
                    queue.push_back(neighbor);
                }
            }
        }
        distances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axioms::{
        ClassAssertionAxiom, DataPropertyAssertionAxiom, ObjectPropertyAssertionAxiom,
        SubClassOfAxiom,
    };
    use crate::entities::{Class, DataProperty, NamedIndividual, ObjectProperty};

    fn iri(local: &str) -> IRI {
        IRI::new_unchecked(format!("http://example.org/u#{local}"))
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

    /// Chain fixture: p(a,b), p(b,c), p(c,d)
    fn chain_ontology() -> Ontology {
        let mut ontology = Ontology::with_iri("http://example.org/u");
        for name in ["a", "b", "c", "d"] {
            ontology.add_axiom(DeclarationAxiom::new(individual(name)));
        }
        ontology.add_axiom(assertion("p", "a", "b"));
        ontology.add_axiom(assertion("p", "b", "c"));
        ontology.add_axiom(assertion("p", "c", "d"));
        ontology
    }

    fn included(result: &FilterResult) -> HashSet<IRI> {
        result.included_individuals.clone()
    }

    fn set(names: &[&str]) -> HashSet<IRI> {
        names.iter().map(|name| iri(name)).collect()
    }

    #[test]
    fn test_neighborhood_depth_zero_is_seeds() {
        let ontology = chain_ontology();
        let filter = OntologyFilter::new(&ontology);
        let result = filter.extract_neighborhood(&iri("a"), 0);
        assert_eq!(included(&result), set(&["a"]));
    }

    #[test]
    fn test_neighborhood_two_hops() {
        let ontology = chain_ontology();
        let filter = OntologyFilter::new(&ontology);
        let result = filter.extract_neighborhood(&iri("a"), 2);
        assert_eq!(included(&result), set(&["a", "b", "c"]));
    }

    #[test]
    fn test_neighborhood_saturates() {
        let ontology = chain_ontology();
        let filter = OntologyFilter::new(&ontology);
        let result = filter.extract_neighborhood(&iri("a"), 10);
        assert_eq!(included(&result), set(&["a", "b", "c", "d"]));
    }

    #[test]
    fn test_neighborhood_monotone_in_depth() {
        let ontology = chain_ontology();
        let filter = OntologyFilter::new(&ontology);
        for depth in 0..4 {
            let smaller = included(&filter.extract_neighborhood(&iri("a"), depth));
            let larger = included(&filter.extract_neighborhood(&iri("a"), depth + 1));
            assert!(smaller.is_subset(&larger));
        }
    }

    #[test]
    fn test_neighborhood_is_undirected() {
        let ontology = chain_ontology();
        let filter = OntologyFilter::new(&ontology);
        let result = filter.extract_neighborhood(&iri("d"), 1);
        assert_eq!(included(&result), set(&["c", "d"]));
    }

    #[test]
    fn test_neighborhood_absent_seed() {
        let ontology = chain_ontology();
        let filter = OntologyFilter::new(&ontology);
        let result = filter.extract_neighborhood(&iri("ghost"), 3);
        assert!(included(&result).is_empty());
        assert_eq!(result.filtered_axiom_count, 0);
    }

    #[test]
    fn test_path_extraction() {
        let ontology = chain_ontology();
        let filter = OntologyFilter::new(&ontology);
        let result = filter.extract_path(&iri("a"), &iri("d"));

        assert_eq!(included(&result), set(&["a", "b", "c", "d"]));
        let assertions = result
            .ontology
            .axioms()
            .iter()
            .filter(|axiom| matches!(axiom.as_ref(), Axiom::ObjectPropertyAssertion(_)))
            .count();
        assert_eq!(assertions, 3);
    }

    #[test]
    fn test_path_unreachable_returns_empty_with_metadata() {
        let ontology = chain_ontology();
        let filter = OntologyFilter::new(&ontology);
        let result = filter.extract_path(&iri("a"), &iri("missing"));

        assert!(included(&result).is_empty());
        assert_eq!(result.ontology.axiom_count(), 0);
        assert_eq!(
            result.ontology.iri().map(|iri| iri.as_str()),
            Some("http://example.org/u")
        );
    }

    #[test]
    fn test_path_includes_all_shortest_paths() {
        // Diamond: a-b-d and a-c-d are both shortest.
        let mut ontology = Ontology::new();
        ontology.add_axiom(assertion("p", "a", "b"));
        ontology.add_axiom(assertion("p", "a", "c"));
        ontology.add_axiom(assertion("p", "b", "d"));
        ontology.add_axiom(assertion("p", "c", "d"));
        // Longer detour must stay out.
        ontology.add_axiom(assertion("p", "a", "e"));
        ontology.add_axiom(assertion("p", "e", "f"));
        ontology.add_axiom(assertion("p", "f", "d"));

        let filter = OntologyFilter::new(&ontology);
        let result = filter.extract_path(&iri("a"), &iri("d"));
        assert_eq!(included(&result), set(&["a", "b", "c", "d"]));
    }

    #[test]
    fn test_filter_by_classes_scenario() {
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

        assert_eq!(included(&result), set(&["i1", "i2"]));

        let rendered: Vec<String> = result
            .ontology
            .axioms()
            .iter()
            .map(|axiom| axiom.to_functional_syntax())
            .collect();
        let class_a_assertions = rendered
            .iter()
            .filter(|s| s.starts_with("ClassAssertion(<http://example.org/u#A>"))
            .count();
        assert_eq!(class_a_assertions, 2);
        assert!(!rendered
            .iter()
            .any(|s| s.starts_with("ClassAssertion(<http://example.org/u#B>")));
        // p(i1, i3) survives because i1 is retained.
        assert!(rendered
            .iter()
            .any(|s| s.starts_with("ObjectPropertyAssertion")));
        // Declarations are materialized for surviving entities.
        assert!(rendered
            .iter()
            .any(|s| s == &"Declaration(Class(<http://example.org/u#A>))".to_string()));
    }

    #[test]
    fn test_exclusion_drops_axioms_referencing_excluded() {
        let mut ontology = Ontology::new();
        ontology.add_axiom(ClassAssertionAxiom::new(
            Class::new(iri("A")).into(),
            individual("i1"),
        ));
        ontology.add_axiom(assertion("p", "i1", "i3"));

        let filter = OntologyFilter::new(&ontology)
            .with_classes(set(&["A"]))
            .exclude_individuals(set(&["i3"]))
            .with_max_depth(0);
        let result = filter.execute();

        assert_eq!(included(&result), set(&["i1"]));
        assert!(!result
            .ontology
            .axioms()
            .iter()
            .any(|axiom| matches!(axiom.as_ref(), Axiom::ObjectPropertyAssertion(_))));
    }

    #[test]
    fn test_filter_by_property_full_literal_equality() {
        use crate::constants::xsd;

        let mut ontology = Ontology::new();
        let age = DataProperty::new(iri("hasAge"));
        ontology.add_axiom(DataPropertyAssertionAxiom::new(
            age.clone(),
            individual("i1"),
            Literal::typed("30", xsd::INTEGER.clone()),
        ));
        ontology.add_axiom(DataPropertyAssertionAxiom::new(
            age.clone(),
            individual("i2"),
            Literal::simple("30"),
        ));

        let filter = OntologyFilter::new(&ontology);
        let typed = filter.filter_by_property(&iri("hasAge"), &Literal::typed("30", xsd::INTEGER.clone()));
        assert_eq!(included(&typed), set(&["i1"]));

        let plain = filter.filter_by_property(&iri("hasAge"), &Literal::simple("30"));
        assert_eq!(included(&plain), set(&["i2"]));
    }

    #[test]
    fn test_filter_by_object_property_target() {
        let ontology = chain_ontology();
        let filter = OntologyFilter::new(&ontology);
        let result = filter.filter_by_object_property(&iri("p"), &iri("c"));
        // Only b has p pointing at c.
        assert_eq!(included(&result), set(&["b"]));
    }

    #[test]
    fn test_random_sample_reproducible() {
        let ontology = chain_ontology();
        let filter = OntologyFilter::new(&ontology);

        let first = filter.random_sample(2, 42);
        let second = filter.random_sample(2, 42);
        assert_eq!(first.included_individuals, second.included_individuals);
        assert_eq!(first.included_individuals.len(), 2);

        let other_seed = filter.random_sample(2, 7);
        assert_eq!(other_seed.included_individuals.len(), 2);
    }

    #[test]
    fn test_random_sample_larger_than_population() {
        let ontology = chain_ontology();
        let filter = OntologyFilter::new(&ontology);
        let result = filter.random_sample(100, 1);
        assert_eq!(result.included_individuals.len(), 4);
    }

    #[test]
    fn test_class_hierarchy_inclusion() {
        let mut ontology = Ontology::new();
        ontology.add_axiom(ClassAssertionAxiom::new(
            Class::new(iri("Student")).into(),
            individual("i1"),
        ));
        ontology.add_axiom(ClassAssertionAxiom::new(
            Class::new(iri("Person")).into(),
            individual("i1"),
        ));
        // Both members referenced by surviving assertions: included.
        ontology.add_axiom(SubClassOfAxiom::new(
            Class::new(iri("Student")).into(),
            Class::new(iri("Person")).into(),
        ));
        // Organization is not referenced by surviving axioms: stays out.
        ontology.add_axiom(SubClassOfAxiom::new(
            Class::new(iri("Person")).into(),
            Class::new(iri("Organization")).into(),
        ));

        let filter = OntologyFilter::new(&ontology);
        let result = filter.filter_by_individuals(&set(&["i1"]));
        let kept: Vec<String> = result
            .ontology
            .axioms()
            .iter()
            .filter(|axiom| matches!(axiom.as_ref(), Axiom::SubClassOf(_)))
            .map(|axiom| axiom.to_functional_syntax())
            .collect();
        assert_eq!(kept.len(), 1);
        assert!(kept[0].contains("u#Student"));
    }

    #[test]
    fn test_hierarchy_flags_off() {
        let mut ontology = Ontology::new();
        ontology.add_axiom(ClassAssertionAxiom::new(
            Class::new(iri("Student")).into(),
            individual("i1"),
        ));
        ontology.add_axiom(SubClassOfAxiom::new(
            Class::new(iri("Student")).into(),
            Class::new(iri("Student")).into(),
        ));

        let filter = OntologyFilter::new(&ontology)
            .with_individuals(set(&["i1"]))
            .with_max_depth(0)
            .include_class_hierarchy(false)
            .include_declarations(false);
        let result = filter.execute();

        assert_eq!(result.ontology.axiom_count(), 1);
    }

    #[test]
    fn test_axiom_predicate() {
        let ontology = chain_ontology();
        let filter = OntologyFilter::new(&ontology)
            .with_individuals(set(&["a", "b", "c", "d"]))
            .with_max_depth(0)
            .include_declarations(false)
            .with_axiom_predicate(Arc::new(|axiom: &Axiom| {
                // Drop every assertion mentioning d.
                !axiom.to_functional_syntax().contains("u#d")
            }));
        let result = filter.execute();

        let assertions = result
            .ontology
            .axioms()
            .iter()
            .filter(|axiom| matches!(axiom.as_ref(), Axiom::ObjectPropertyAssertion(_)))
            .count();
        assert_eq!(assertions, 2);
    }

    #[test]
    fn test_property_value_filter_in_criteria() {
        use crate::constants::xsd;

        let mut ontology = Ontology::new();
        let status = DataProperty::new(iri("status"));
        for (name, value) in [("i1", "active"), ("i2", "inactive")] {
            ontology.add_axiom(ClassAssertionAxiom::new(
                Class::new(iri("A")).into(),
                individual(name),
            ));
            ontology.add_axiom(DataPropertyAssertionAxiom::new(
                status.clone(),
                individual(name),
                Literal::typed(value, xsd::STRING.clone()),
            ));
        }

        let filter = OntologyFilter::new(&ontology)
            .with_classes(set(&["A"]))
            .with_property_value(iri("status"), "active")
            .with_max_depth(0);
        let result = filter.execute();

        assert_eq!(included(&result), set(&["i1"]));
    }

    #[test]
    fn test_unlimited_depth_expands_component() {
        let ontology = chain_ontology();
        let filter = OntologyFilter::new(&ontology).with_individuals(set(&["a"]));
        // Builder default depth is unlimited.
        let result = filter.execute();
        assert_eq!(included(&result), set(&["a", "b", "c", "d"]));
    }

    #[test]
    fn test_metadata_copied() {
        let mut ontology = chain_ontology();
        ontology.register_prefix("ex", "http://example.org/u#");
        ontology.add_import(iri("upper"));

        let filter = OntologyFilter::new(&ontology);
        let result = filter.filter_by_individuals(&set(&["a"]));

        assert_eq!(
            result.ontology.namespace_for_prefix("ex"),
            Some("http://example.org/u#")
        );
        assert!(result.ontology.has_import(&iri("upper")));
    }

    #[test]
    fn test_filtered_axioms_are_shared_with_source() {
        let ontology = chain_ontology();
        let filter = OntologyFilter::new(&ontology);
        let result = filter.filter_by_individuals(&set(&["a"]));

        let copied = result
            .ontology
            .axioms()
            .iter()
            .filter(|axiom| matches!(axiom.as_ref(), Axiom::ObjectPropertyAssertion(_)))
            .all(|axiom| {
                ontology
                    .axioms()
                    .iter()
                    .any(|source| Arc::ptr_eq(source, axiom))
            });
        assert!(copied);
    }
}
