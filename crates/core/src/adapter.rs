use std::sync::{Arc, Mutex};

use crate::error::AdapterError;
use crate::hierarchy::Hierarchy;

/// Observer slot required by generic tree-model surfaces.
///
/// The adapter is read-only for the whole browsing session and never fires
/// `hierarchy_changed`; the registration exists purely to satisfy surfaces
/// that insist on subscribing.
pub trait ModelListener {
    fn hierarchy_changed(&self);
}

/// Read-only adapter exposing an arbitrary hierarchy through the minimal
/// contract a tree-navigation surface needs.
///
/// The adapter holds the root supplied at construction for its whole
/// lifetime and carries no other state besides the never-fired listener
/// set. All queries are pure; nothing here mutates the hierarchy.
///
/// Every query takes a node reachable from [`root()`](Self::root). Passing
/// a node from a different hierarchy is a caller bug; the opaque contract
/// offers no membership check, so such calls yield unspecified (but still
/// memory-safe) answers.
pub struct HierarchyAdapter<'h, H: Hierarchy> {
    hierarchy: &'h H,
    root: &'h H::Node,
    listeners: Mutex<Vec<Arc<dyn ModelListener>>>,
}

impl<'h, H: Hierarchy> HierarchyAdapter<'h, H> {
    /// Wraps `hierarchy` for one browsing session, rooted at `root`.
    pub fn new(hierarchy: &'h H, root: &'h H::Node) -> Self {
        Self { hierarchy, root, listeners: Mutex::new(Vec::new()) }
    }

    /// The fixed root supplied at construction. Never fails and returns the
    /// identical node across repeated calls.
    pub fn root(&self) -> &'h H::Node {
        self.root
    }

    /// Number of children of `node`.
    pub fn child_count(&self, node: &H::Node) -> usize {
        self.hierarchy.children(node).len()
    }

    /// Child of `node` at `index`, failing fast when the index is outside
    /// `[0, child_count)`.
    pub fn child_at(&self, node: &'h H::Node, index: usize) -> Result<&'h H::Node, AdapterError> {
        let children = self.hierarchy.children(node);
        children.get(index).ok_or(AdapterError::OutOfRange { index, len: children.len() })
    }

    /// Position of `child` among `node`'s children, found by scanning for
    /// reference identity. `None` is the not-found sentinel: navigation
    /// surfaces probe memberships speculatively, so this is a normal query
    /// outcome rather than an error.
    pub fn index_of(&self, node: &H::Node, child: &H::Node) -> Option<usize> {
        self.hierarchy.children(node).iter().position(|candidate| std::ptr::eq(candidate, child))
    }

    /// Whether `node` has zero children.
    pub fn is_leaf(&self, node: &H::Node) -> bool {
        self.child_count(node) == 0
    }

    /// Registers `listener`. Listeners are keyed by pointer identity;
    /// registering the same listener twice leaves a single entry. No event
    /// is ever fired, since the hierarchy is read-only for the session.
    pub fn add_listener(&self, listener: Arc<dyn ModelListener>) {
        let mut listeners = self.listeners.lock().unwrap();
        if !listeners.iter().any(|existing| Arc::ptr_eq(existing, &listener)) {
            listeners.push(listener);
        }
    }

    /// Removes `listener` if present. Removing an absent listener is a
    /// no-op, never an error.
    pub fn remove_listener(&self, listener: &Arc<dyn ModelListener>) {
        self.listeners.lock().unwrap().retain(|existing| !Arc::ptr_eq(existing, listener));
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }

    /// Accepts and ignores edit requests: the hierarchy is never edited
    /// through the tree view. Guaranteed not to fail.
    pub fn set_value<V>(&self, _node: &H::Node, _new_value: V) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[derive(Debug)]
    struct TestNode {
        label: &'static str,
        children: Vec<TestNode>,
    }

    impl TestNode {
        fn leaf(label: &'static str) -> Self {
            Self { label, children: Vec::new() }
        }

        fn branch(label: &'static str, children: Vec<TestNode>) -> Self {
            Self { label, children }
        }
    }

    struct TestHierarchy {
        root: TestNode,
    }

    impl Hierarchy for TestHierarchy {
        type Node = TestNode;

        fn children<'a>(&'a self, node: &'a TestNode) -> &'a [TestNode] {
            &node.children
        }
    }

    struct NoopListener;

    impl ModelListener for NoopListener {
        fn hierarchy_changed(&self) {}
    }

    // root -> [x -> [x1, x2], y]
    #[fixture]
    fn hierarchy() -> TestHierarchy {
        TestHierarchy {
            root: TestNode::branch(
                "root",
                vec![
                    TestNode::branch("x", vec![TestNode::leaf("x1"), TestNode::leaf("x2")]),
                    TestNode::leaf("y"),
                ],
            ),
        }
    }

    fn shape_of(node: &TestNode) -> Vec<(&'static str, usize)> {
        let mut shape = vec![(node.label, node.children.len())];
        for child in &node.children {
            shape.extend(shape_of(child));
        }
        shape
    }

    #[rstest]
    fn root_is_stable_across_calls(hierarchy: TestHierarchy) {
        let adapter = HierarchyAdapter::new(&hierarchy, &hierarchy.root);
        assert!(std::ptr::eq(adapter.root(), adapter.root()));
        assert!(std::ptr::eq(adapter.root(), &hierarchy.root));
    }

    #[rstest]
    fn child_navigation_matches_the_declared_order(hierarchy: TestHierarchy) {
        let adapter = HierarchyAdapter::new(&hierarchy, &hierarchy.root);
        assert_eq!(adapter.child_count(adapter.root()), 2);

        let x = adapter.child_at(adapter.root(), 0).expect("first child");
        let y = adapter.child_at(adapter.root(), 1).expect("second child");
        assert_eq!(x.label, "x");
        assert_eq!(y.label, "y");
    }

    #[rstest]
    fn child_at_fails_fast_outside_the_valid_range(hierarchy: TestHierarchy) {
        let adapter = HierarchyAdapter::new(&hierarchy, &hierarchy.root);
        let result = adapter.child_at(adapter.root(), 2);
        assert!(matches!(result, Err(AdapterError::OutOfRange { index: 2, len: 2 })));
    }

    #[rstest]
    fn index_round_trips_for_every_child(hierarchy: TestHierarchy) {
        let adapter = HierarchyAdapter::new(&hierarchy, &hierarchy.root);
        let mut stack = vec![adapter.root()];
        while let Some(node) = stack.pop() {
            for index in 0..adapter.child_count(node) {
                let child = adapter.child_at(node, index).expect("valid index");
                assert_eq!(adapter.index_of(node, child), Some(index));
                stack.push(child);
            }
        }
    }

    #[rstest]
    fn index_of_non_child_is_the_none_sentinel(hierarchy: TestHierarchy) {
        let adapter = HierarchyAdapter::new(&hierarchy, &hierarchy.root);
        let x = adapter.child_at(adapter.root(), 0).expect("x");
        let grandchild = adapter.child_at(x, 0).expect("x1");

        // A descendant is not a direct child.
        assert_eq!(adapter.index_of(adapter.root(), grandchild), None);

        // Equal-looking nodes from outside the hierarchy are not children
        // either: identity is by reference, not by value.
        let foreign = TestNode::leaf("y");
        assert_eq!(adapter.index_of(adapter.root(), &foreign), None);
    }

    #[rstest]
    fn leaf_reports_follow_child_counts(hierarchy: TestHierarchy) {
        let adapter = HierarchyAdapter::new(&hierarchy, &hierarchy.root);
        let mut stack = vec![adapter.root()];
        while let Some(node) = stack.pop() {
            assert_eq!(adapter.is_leaf(node), adapter.child_count(node) == 0);
            for index in 0..adapter.child_count(node) {
                stack.push(adapter.child_at(node, index).expect("valid index"));
            }
        }
    }

    #[rstest]
    fn queries_and_set_value_leave_the_hierarchy_unchanged(hierarchy: TestHierarchy) {
        let before = shape_of(&hierarchy.root);

        let adapter = HierarchyAdapter::new(&hierarchy, &hierarchy.root);
        let root = adapter.root();
        let _ = adapter.child_count(root);
        let x = adapter.child_at(root, 0).expect("x");
        let _ = adapter.index_of(root, x);
        let _ = adapter.index_of(x, root);
        let _ = adapter.is_leaf(x);
        adapter.set_value(x, "ignored");
        adapter.set_value(root, 42);

        assert_eq!(shape_of(&hierarchy.root), before);
    }

    #[rstest]
    fn listener_registration_is_identity_keyed(hierarchy: TestHierarchy) {
        let adapter = HierarchyAdapter::new(&hierarchy, &hierarchy.root);
        let listener: Arc<dyn ModelListener> = Arc::new(NoopListener);

        adapter.add_listener(Arc::clone(&listener));
        adapter.add_listener(Arc::clone(&listener));
        assert_eq!(adapter.listener_count(), 1);

        let absent: Arc<dyn ModelListener> = Arc::new(NoopListener);
        adapter.remove_listener(&absent);
        assert_eq!(adapter.listener_count(), 1);

        adapter.remove_listener(&listener);
        assert_eq!(adapter.listener_count(), 0);
    }
}
