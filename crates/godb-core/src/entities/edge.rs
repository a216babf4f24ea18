/// Relationship type recorded for `is_a:` tags.
pub const IS_A: &str = "is_a";

/// A direct, typed parent edge inside one namespace partition.
///
/// The partition is the child's namespace; the parent is always an active
/// term when the edge reaches the output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub child: String,
    pub parent: String,
    /// `"is_a"` or a relationship keyword such as `"part_of"`.
    pub relationship: String,
}

impl Edge {
    #[must_use]
    pub fn new(child: &str, parent: &str, relationship: &str) -> Self {
        Self {
            child: child.to_string(),
            parent: parent.to_string(),
            relationship: relationship.to_string(),
        }
    }
}

/// `descendant` is reachable from `ancestor` through one or more direct edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClosurePair {
    pub ancestor: String,
    pub descendant: String,
}

impl ClosurePair {
    #[must_use]
    pub fn new(ancestor: &str, descendant: &str) -> Self {
        Self {
            ancestor: ancestor.to_string(),
            descendant: descendant.to_string(),
        }
    }
}
