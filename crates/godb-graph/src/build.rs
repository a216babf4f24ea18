//! End-to-end build from parsed stanzas to store-ready collections.

use godb_core::entities::{ClosurePair, Edge, Synonym, Term};
use godb_core::enums::Namespace;
use godb_core::ids::IdPattern;
use godb_parser::StanzaRecord;
use rayon::prelude::*;
use tracing::debug;

use crate::classify::classify;
use crate::closure::transitive_closure;
use crate::edges::collect_edges;
use crate::observer::{BuildEvent, BuildObserver};
use crate::synonyms::collect_synonyms;

/// Direct edges and closure of one namespace partition.
#[derive(Debug, Clone)]
pub struct PartitionResult {
    pub namespace: Namespace,
    pub edges: Vec<Edge>,
    pub closure: Vec<ClosurePair>,
}

/// Everything the store needs.
#[derive(Debug, Clone, Default)]
pub struct OntologyBuild {
    pub active: Vec<Term>,
    pub obsolete: Vec<Term>,
    pub synonyms: Vec<Synonym>,
    /// One entry per namespace, in [`Namespace::ALL`] order.
    pub partitions: Vec<PartitionResult>,
}

impl OntologyBuild {
    #[must_use]
    pub fn partition(&self, namespace: Namespace) -> Option<&PartitionResult> {
        self.partitions.iter().find(|p| p.namespace == namespace)
    }
}

/// Classify, collect synonyms and edges, then compute every partition's
/// closure in parallel.
#[must_use]
pub fn build_ontology(
    stanzas: Vec<StanzaRecord>,
    pattern: &IdPattern,
    observer: &dyn BuildObserver,
) -> OntologyBuild {
    let classification = classify(stanzas, pattern);
    debug!(
        active = classification.active.len(),
        obsolete = classification.obsolete.len(),
        rejected = classification.rejected,
        "classified terms"
    );
    observer.on_event(&BuildEvent::Classified {
        active: classification.active.len(),
        obsolete: classification.obsolete.len(),
        rejected: classification.rejected,
    });

    let synonyms = collect_synonyms(&classification.active);
    observer.on_event(&BuildEvent::SynonymsCollected {
        count: synonyms.len(),
    });

    let edge_sets = collect_edges(&classification);
    for partition in edge_sets.partitions() {
        debug!(
            namespace = %partition.namespace(),
            edges = partition.edges().len(),
            dropped = partition.dropped(),
            nodes = partition.node_count(),
            "collected edges"
        );
        observer.on_event(&BuildEvent::EdgesCollected {
            namespace: partition.namespace(),
            edges: partition.edges().len(),
            dropped: partition.dropped(),
        });
    }

    let closures: Vec<Vec<ClosurePair>> = edge_sets
        .partitions()
        .par_iter()
        .map(transitive_closure)
        .collect();

    let partitions: Vec<PartitionResult> = edge_sets
        .into_partitions()
        .into_iter()
        .zip(closures)
        .map(|(graph, closure)| PartitionResult {
            namespace: graph.namespace(),
            closure,
            edges: graph.into_edges(),
        })
        .collect();

    for partition in &partitions {
        debug!(
            namespace = %partition.namespace,
            edges = partition.edges.len(),
            pairs = partition.closure.len(),
            "computed closure"
        );
        observer.on_event(&BuildEvent::ClosureComputed {
            namespace: partition.namespace,
            pairs: partition.closure.len(),
        });
    }

    OntologyBuild {
        active: classification.active.into_iter().map(|r| r.term).collect(),
        obsolete: classification.obsolete.into_iter().map(|r| r.term).collect(),
        synonyms,
        partitions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoopObserver;
    use godb_parser::parse_str;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    fn stanzas(text: &str) -> Vec<StanzaRecord> {
        parse_str(text).collect::<Result<Vec<_>, _>>().unwrap()
    }

    const TEXT: &str = "\
[Term]
id: GO:0000001
name: root
namespace: biological_process

[Term]
id: GO:0000002
name: middle
namespace: biological_process
is_a: GO:0000001

[Term]
id: GO:0000003
name: leaf
namespace: biological_process
is_a: GO:0000002

[Term]
id: GO:0000009
name: gone
namespace: biological_process
is_a: GO:0000001
is_obsolete: true
";

    #[test]
    fn partitions_in_fixed_order() {
        let build = build_ontology(stanzas(TEXT), &IdPattern::default(), &NoopObserver);
        let order: Vec<_> = build.partitions.iter().map(|p| p.namespace).collect();
        assert_eq!(order, Namespace::ALL.to_vec());
        assert!(build.partition(Namespace::MolecularFunction).unwrap().edges.is_empty());
    }

    #[test]
    fn obsolete_terms_split_out() {
        let build = build_ontology(stanzas(TEXT), &IdPattern::default(), &NoopObserver);
        assert_eq!(build.active.len(), 3);
        assert_eq!(build.obsolete.len(), 1);
        assert_eq!(build.obsolete[0].id, "GO:0000009");
        let bp = build.partition(Namespace::BiologicalProcess).unwrap();
        assert!(bp.edges.iter().all(|e| e.child != "GO:0000009"));
        assert_eq!(bp.closure.len(), 3);
    }

    #[test]
    fn observer_sees_every_stage() {
        let events = Mutex::new(Vec::new());
        let record = |event: &BuildEvent| events.lock().unwrap().push(*event);
        let _ = build_ontology(stanzas(TEXT), &IdPattern::default(), &record);

        let events = events.into_inner().unwrap();
        assert_eq!(events.len(), 1 + 1 + 3 + 3);
        assert_eq!(
            events[0],
            BuildEvent::Classified {
                active: 3,
                obsolete: 1,
                rejected: 0
            }
        );
        assert_eq!(
            events[5],
            BuildEvent::ClosureComputed {
                namespace: Namespace::BiologicalProcess,
                pairs: 3
            }
        );
    }
}
