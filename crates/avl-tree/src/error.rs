use thiserror::Error;

/// Invariant violations reported by [`crate::validate::assert_avl_tree`] and
/// [`crate::AvlTree::assert_valid`].
///
/// Nodes are identified by their arena index.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AvlError {
    #[error("node {node}: cached height {actual}, expected {expected}")]
    HeightMismatch { node: u32, expected: u32, actual: u32 },
    #[error("node {node}: balance factor {balance} outside -1..=1")]
    Unbalanced { node: u32, balance: i32 },
    #[error("node {node}: key out of order after node {prev}")]
    OrderViolated { prev: u32, node: u32 },
    #[error("tree reaches {reachable} nodes but the arena holds {stored}")]
    SizeMismatch { reachable: usize, stored: usize },
}
