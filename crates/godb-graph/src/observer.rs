//! Progress reporting hooks for the build pipeline.
//!
//! The pipeline never prints; callers that want progress pass an observer.

use godb_core::enums::Namespace;

/// A pipeline milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildEvent {
    Classified {
        active: usize,
        obsolete: usize,
        rejected: usize,
    },
    SynonymsCollected {
        count: usize,
    },
    EdgesCollected {
        namespace: Namespace,
        edges: usize,
        dropped: usize,
    },
    ClosureComputed {
        namespace: Namespace,
        pairs: usize,
    },
}

/// Receives [`BuildEvent`]s as the pipeline advances.
pub trait BuildObserver {
    fn on_event(&self, event: &BuildEvent);
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl BuildObserver for NoopObserver {
    fn on_event(&self, _event: &BuildEvent) {}
}

impl<F> BuildObserver for F
where
    F: Fn(&BuildEvent),
{
    fn on_event(&self, event: &BuildEvent) {
        self(event);
    }
}
