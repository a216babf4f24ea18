//! # godb-graph
//!
//! Turns parsed stanzas into the typed collections the store is built from.
//!
//! Pipeline, leaves first:
//! 1. [`classify`]: keep stanzas whose id matches the ontology pattern and
//!    split them into active and obsolete terms.
//! 2. [`synonyms`]: text synonyms and alternate ids of active terms.
//! 3. [`edges`]: typed parent edges per namespace partition, kept only when
//!    the parent is an active term, plus the parent to children adjacency.
//! 4. [`closure`]: the full ancestor/descendant relation per partition.
//!
//! [`build::build_ontology`] runs all four and reports progress through a
//! [`BuildObserver`].

pub mod build;
pub mod classify;
pub mod closure;
pub mod edges;
pub mod observer;
pub mod synonyms;

pub use build::{OntologyBuild, PartitionResult, build_ontology};
pub use classify::{Classification, TermRecord, classify};
pub use closure::transitive_closure;
pub use edges::{EdgeSets, PartitionGraph, collect_edges};
pub use observer::{BuildEvent, BuildObserver, NoopObserver};
pub use synonyms::collect_synonyms;
