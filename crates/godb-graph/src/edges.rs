//! Edge collection: typed parent edges per namespace partition.
//!
//! Each partition keeps its edges in insertion order and a directed graph
//! (parent -> child) used as the adjacency for closure computation.

use std::collections::HashMap;

use godb_core::entities::{Edge, IS_A};
use godb_core::enums::Namespace;
use godb_parser::{parse_is_a, parse_relationship};
use rustworkx_core::petgraph::Direction;
use rustworkx_core::petgraph::graph::{DiGraph, NodeIndex};
use tracing::trace;

use crate::classify::Classification;

/// Direct edges of one namespace partition.
#[derive(Debug, Clone)]
pub struct PartitionGraph {
    namespace: Namespace,
    edges: Vec<Edge>,
    graph: DiGraph<String, String>,
    id_to_index: HashMap<String, NodeIndex>,
    dropped: usize,
}

impl PartitionGraph {
    #[must_use]
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            edges: Vec::new(),
            graph: DiGraph::new(),
            id_to_index: HashMap::new(),
            dropped: 0,
        }
    }

    /// Record a direct edge and extend the adjacency.
    pub fn add_edge(&mut self, edge: Edge) {
        let parent = self.node(&edge.parent);
        let child = self.node(&edge.child);
        self.graph.add_edge(parent, child, edge.relationship.clone());
        self.edges.push(edge);
    }

    fn node(&mut self, id: &str) -> NodeIndex {
        if let Some(idx) = self.id_to_index.get(id) {
            return *idx;
        }
        let idx = self.graph.add_node(id.to_string());
        self.id_to_index.insert(id.to_string(), idx);
        idx
    }

    #[must_use]
    pub const fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// Edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    /// Direct children of `parent` (one entry per edge).
    pub fn children<'a>(&'a self, parent: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.id_to_index
            .get(parent)
            .into_iter()
            .flat_map(move |idx| self.graph.neighbors_directed(*idx, Direction::Outgoing))
            .map(move |child| self.graph[child].as_str())
    }

    /// Edges rejected for this partition (unknown or obsolete parent, malformed value).
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    /// Every term id that appears as a parent or child.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub(crate) const fn graph(&self) -> &DiGraph<String, String> {
        &self.graph
    }
}

/// The three partition graphs, in [`Namespace::ALL`] order.
#[derive(Debug, Clone)]
pub struct EdgeSets {
    partitions: [PartitionGraph; 3],
}

impl EdgeSets {
    fn new() -> Self {
        Self {
            partitions: Namespace::ALL.map(PartitionGraph::new),
        }
    }

    #[must_use]
    pub fn get(&self, namespace: Namespace) -> &PartitionGraph {
        &self.partitions[slot(namespace)]
    }

    fn get_mut(&mut self, namespace: Namespace) -> &mut PartitionGraph {
        &mut self.partitions[slot(namespace)]
    }

    #[must_use]
    pub const fn partitions(&self) -> &[PartitionGraph; 3] {
        &self.partitions
    }

    #[must_use]
    pub fn into_partitions(self) -> [PartitionGraph; 3] {
        self.partitions
    }
}

const fn slot(namespace: Namespace) -> usize {
    match namespace {
        Namespace::BiologicalProcess => 0,
        Namespace::MolecularFunction => 1,
        Namespace::CellularComponent => 2,
    }
}

/// Collect `is_a` and `relationship` edges of every active term with a
/// known namespace, keeping only edges whose parent is an active term.
#[must_use]
pub fn collect_edges(classification: &Classification) -> EdgeSets {
    let mut sets = EdgeSets::new();

    for record in &classification.active {
        let Some(namespace) = record.term.namespace else {
            continue;
        };
        let child = record.term.id.as_str();
        let partition = sets.get_mut(namespace);

        let is_a = record
            .stanza
            .is_a()
            .iter()
            .map(|raw| parse_is_a(raw).map(|parent| (IS_A, parent)));
        let relationships = record
            .stanza
            .relationships()
            .iter()
            .map(|raw| parse_relationship(raw));

        for candidate in is_a.chain(relationships) {
            match candidate {
                Some((relationship, parent)) if classification.is_active(parent) => {
                    partition.add_edge(Edge::new(child, parent, relationship));
                }
                other => {
                    trace!(child, edge = ?other, "dropping edge");
                    partition.dropped += 1;
                }
            }
        }
    }

    sets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use godb_core::ids::IdPattern;
    use godb_parser::parse_str;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    fn edges_of(text: &str) -> EdgeSets {
        let stanzas = parse_str(text).collect::<Result<Vec<_>, _>>().unwrap();
        collect_edges(&classify(stanzas, &IdPattern::default()))
    }

    #[test]
    fn chain_edges_in_bp() {
        let sets = edges_of(
            "[Term]\nid: GO:0000001\nnamespace: biological_process\n\n\
             [Term]\nid: GO:0000002\nnamespace: biological_process\nis_a: GO:0000001\n\n\
             [Term]\nid: GO:0000003\nnamespace: biological_process\nis_a: GO:0000002\n",
        );
        let bp = sets.get(Namespace::BiologicalProcess);
        assert_eq!(
            bp.edges(),
            [
                Edge::new("GO:0000002", "GO:0000001", "is_a"),
                Edge::new("GO:0000003", "GO:0000002", "is_a"),
            ]
        );
        assert!(sets.get(Namespace::MolecularFunction).edges().is_empty());
        assert!(sets.get(Namespace::CellularComponent).edges().is_empty());
    }

    #[test]
    fn relationship_edges_carry_their_type() {
        let sets = edges_of(
            "[Term]\nid: GO:1\nnamespace: cellular_component\n\n\
             [Term]\nid: GO:2\nnamespace: cellular_component\nrelationship: part_of GO:1 ! whole\nrelationship: broken\n",
        );
        let cc = sets.get(Namespace::CellularComponent);
        assert_eq!(cc.edges(), [Edge::new("GO:2", "GO:1", "part_of")]);
        assert_eq!(cc.dropped(), 1);
    }

    #[test]
    fn edges_to_obsolete_or_unknown_parents_are_dropped() {
        let sets = edges_of(
            "[Term]\nid: GO:1\nnamespace: molecular_function\nis_obsolete: true\n\n\
             [Term]\nid: GO:2\nnamespace: molecular_function\nis_a: GO:1\nis_a: GO:404\nrelationship: regulates GO:1\n",
        );
        let mf = sets.get(Namespace::MolecularFunction);
        assert!(mf.edges().is_empty());
        assert_eq!(mf.dropped(), 3);
        assert_eq!(mf.node_count(), 0);
    }

    #[test]
    fn obsolete_child_contributes_nothing() {
        let sets = edges_of(
            "[Term]\nid: GO:1\nnamespace: biological_process\n\n\
             [Term]\nid: GO:2\nnamespace: biological_process\nis_obsolete: true\nis_a: GO:1\n",
        );
        assert!(sets.get(Namespace::BiologicalProcess).edges().is_empty());
    }

    #[test]
    fn partition_follows_child_namespace() {
        let sets = edges_of(
            "[Term]\nid: GO:1\nnamespace: biological_process\n\n\
             [Term]\nid: GO:2\nnamespace: molecular_function\nis_a: GO:1\n",
        );
        assert!(sets.get(Namespace::BiologicalProcess).edges().is_empty());
        assert_eq!(
            sets.get(Namespace::MolecularFunction).edges(),
            [Edge::new("GO:2", "GO:1", "is_a")]
        );
    }

    #[test]
    fn unknown_namespace_contributes_no_edges() {
        let sets = edges_of(
            "[Term]\nid: GO:1\nnamespace: biological_process\n\n[Term]\nid: GO:2\nis_a: GO:1\n",
        );
        for partition in sets.partitions() {
            assert!(partition.edges().is_empty());
        }
    }

    #[test]
    fn children_adjacency() {
        let sets = edges_of(
            "[Term]\nid: GO:1\nnamespace: biological_process\n\n\
             [Term]\nid: GO:2\nnamespace: biological_process\nis_a: GO:1\n\n\
             [Term]\nid: GO:3\nnamespace: biological_process\nis_a: GO:1\nrelationship: part_of GO:2\n",
        );
        let bp = sets.get(Namespace::BiologicalProcess);
        let children: BTreeSet<_> = bp.children("GO:1").collect();
        assert_eq!(children, BTreeSet::from(["GO:2", "GO:3"]));
        assert_eq!(bp.children("GO:2").collect::<Vec<_>>(), vec!["GO:3"]);
        assert_eq!(bp.children("GO:3").count(), 0);
        assert_eq!(bp.children("GO:missing").count(), 0);
    }
}
