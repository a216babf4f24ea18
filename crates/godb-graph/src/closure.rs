//! Transitive closure per partition.
//!
//! Every node of the partition graph is used as an ancestor in turn and a
//! breadth-first walk over parent -> child edges collects its descendants.
//! The walk's visited set guarantees each `(ancestor, descendant)` pair is
//! produced once, even across diamonds, and that the walk terminates on
//! cyclic input (whose closure is otherwise unspecified).

use godb_core::entities::ClosurePair;
use rustworkx_core::petgraph::visit::Bfs;

use crate::edges::PartitionGraph;

/// All `(ancestor, descendant)` pairs reachable through one or more edges.
///
/// Pairs are enumerated ancestor by ancestor in first-seen node order.
#[must_use]
pub fn transitive_closure(partition: &PartitionGraph) -> Vec<ClosurePair> {
    let graph = partition.graph();
    let mut pairs = Vec::new();

    for ancestor in graph.node_indices() {
        if graph.neighbors(ancestor).next().is_none() {
            continue;
        }
        let ancestor_id = graph[ancestor].as_str();
        let mut bfs = Bfs::new(graph, ancestor);
        while let Some(node) = bfs.next(graph) {
            if node != ancestor {
                pairs.push(ClosurePair::new(ancestor_id, &graph[node]));
            }
        }
    }

    pairs
}
