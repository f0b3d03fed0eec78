//! Node trait definitions and the concrete AVL node.
//!
//! Nodes live in a [`Vec`]-backed arena owned by the tree. Each child link is
//! an `Option<u32>` index into that arena, `None` being the absent subtree.
//! All engine functions take the arena as `&[N]` / `&mut [N]` and work with
//! indices.

use std::cmp::Ordering;

/// Child links (`l`, `r`).
///
/// No parent link is stored: every engine operation is a recursive descent
/// from the root, and the caller re-links whatever subtree root comes back.
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Keyed node interface used by search, insert and remove.
pub trait KeyNode<K>: Node {
    fn key(&self) -> &K;
}

/// AVL-specific node behavior: a cached subtree height.
pub trait AvlNodeLike: Node {
    fn height(&self) -> u32;
    fn set_height(&mut self, height: u32);
}

/// Comparator used when the tree is built without one: the key's [`Ord`].
pub fn default_comparator<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

/// One key of the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvlNode<K> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    /// Height of the subtree rooted here. A leaf has height 1.
    pub h: u32,
}

impl<K> AvlNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            l: None,
            r: None,
            k,
            h: 1,
        }
    }
}

impl<K> From<K> for AvlNode<K> {
    fn from(k: K) -> Self {
        Self::new(k)
    }
}

impl<K> Node for AvlNode<K> {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K> KeyNode<K> for AvlNode<K> {
    fn key(&self) -> &K {
        &self.k
    }
}

impl<K> AvlNodeLike for AvlNode<K> {
    fn height(&self) -> u32 {
        self.h
    }

    fn set_height(&mut self, height: u32) {
        self.h = height;
    }
}
