//! Arena-based AVL tree.
//!
//! A self-balancing binary search tree that keeps
//! `|height(left) - height(right)| <= 1` at every node, so search, insert and
//! remove are O(log n).
//!
//! Nodes live in a caller- or tree-owned `Vec<N>` arena and every "pointer"
//! is an `Option<u32>` index into it. Each index is linked from exactly one
//! place (a parent's `l`/`r` or the root slot), so subtrees are exclusively
//! owned and rotations only relink indices.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`], [`KeyNode`], [`AvlNodeLike`] traits and [`AvlNode`] |
//! [`util`] | `height`, `balance_factor`, `update_height`, in-order walks |
//! [`rotate`] | single and double rotations |
//! [`insert`](mod@insert) | recursive insert + rebalance |
//! [`search`](mod@search) | recursive lookup |
//! [`remove`](mod@remove) | recursive delete + rebalance |
//! [`validate`] | invariant checker |
//! [`print`](mod@print) | debug tree dump |
//! [`tree`] | [`AvlTree`], the owning wrapper |
//!
//! ```
//! use avl_tree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in [10, 20, 30, 15, 25] {
//!     tree.insert(key);
//! }
//! assert!(tree.contains(&15));
//! assert!(!tree.contains(&99));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![10, 15, 20, 25, 30]);
//! ```

pub mod error;
pub mod insert;
pub mod print;
pub mod remove;
pub mod rotate;
pub mod search;
pub mod tree;
pub mod types;
pub mod util;
pub mod validate;

pub use error::AvlError;
pub use insert::insert;
pub use remove::{rebalance, remove};
pub use rotate::{left_right_rotate, right_left_rotate, rotate_left, rotate_right};
pub use search::search;
pub use tree::{AvlTree, Iter};
pub use types::{default_comparator, AvlNode, AvlNodeLike, KeyNode, Node};
pub use util::{balance_factor, first, height, last, update_height};
pub use validate::assert_avl_tree;
