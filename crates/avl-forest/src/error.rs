use thiserror::Error;

/// A broken structural invariant reported by
/// [`AvlTree::assert_valid`](crate::AvlTree::assert_valid).
///
/// Node numbers are arena indices at the time of the check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("root node {0} has a parent")]
    RootHasParent(u32),
    #[error("node {child} does not link back to its parent {parent}")]
    BrokenParentLink { parent: u32, child: u32 },
    #[error("node {node} caches height {actual}, expected {expected}")]
    HeightMismatch { node: u32, expected: i32, actual: i32 },
    #[error("node {node} has balance factor {bf}")]
    Unbalanced { node: u32, bf: i32 },
    #[error("nodes {prev} and {next} are out of order")]
    OrderViolated { prev: u32, next: u32 },
    #[error("tree reports {size} values but {reachable} nodes are reachable")]
    SizeMismatch { size: usize, reachable: usize },
    #[error("arena holds {slots} slots for {size} values")]
    ArenaLeak { slots: usize, size: usize },
}
