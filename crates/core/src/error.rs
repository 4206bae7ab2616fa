use thiserror::Error;

/// Programmer errors caught at the adapter boundary.
///
/// A missing child is not represented here: membership probes are a normal
/// query outcome and [`HierarchyAdapter::index_of`](crate::HierarchyAdapter::index_of)
/// reports them as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// `child_at` was asked for an index outside `[0, child_count)`.
    #[error("child index {index} is out of range for a node with {len} children")]
    OutOfRange { index: usize, len: usize },
}
