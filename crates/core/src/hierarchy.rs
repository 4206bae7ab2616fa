/// Capability an external hierarchy supplies so it can be browsed as a tree.
///
/// The hierarchy keeps full ownership of its nodes; the browsing layer only
/// ever sees shared references. Implementations must report an ordered,
/// finite child list that stays stable for the duration of a browsing
/// session, and must not mutate anything while doing so.
pub trait Hierarchy {
    /// Opaque handle to one element of the browsed hierarchy. Nodes are
    /// compared by reference identity, never by value.
    type Node;

    /// Ordered children of `node`, possibly empty.
    fn children<'a>(&'a self, node: &'a Self::Node) -> &'a [Self::Node];
}
