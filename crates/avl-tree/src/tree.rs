use std::cmp::Ordering;
use std::fmt;

use log::debug;

use crate::error::AvlError;
use crate::insert::insert;
use crate::print::print;
use crate::remove::{relink, remove};
use crate::search::search;
use crate::types::{default_comparator, AvlNode};
use crate::util::{first, height, last, size, InOrder};
use crate::validate::assert_avl_tree;

/// AVL tree of unique keys.
///
/// Nodes are stored in an arena and addressed by `u32` index; `root` is the
/// only entry point. The arena is kept compact: it holds exactly the nodes
/// reachable from the root.
pub struct AvlTree<K, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    root: Option<u32>,
    comparator: C,
    arena: Vec<AvlNode<K>>,
}

impl<K> AvlTree<K, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for AvlTree<K, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> AvlTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            arena: Vec::new(),
        }
    }

    /// Inserts `key`, rebalancing as needed.
    ///
    /// Returns `false`, leaving the tree untouched, if an equal key is
    /// already present.
    pub fn insert(&mut self, key: K) -> bool {
        let (root, inserted) = insert(&mut self.arena, self.root, key, &self.comparator);
        self.root = Some(root);
        match inserted {
            Some(idx) => {
                debug!("insert: new node {idx}, size {}", self.arena.len());
                true
            }
            None => {
                debug!("insert: duplicate key rejected");
                false
            }
        }
    }

    /// Arena index of the node holding `key`.
    pub fn find(&self, key: &K) -> Option<u32> {
        search(&self.arena, self.root, key, &self.comparator)
    }

    /// The stored key equal to `key`, if any.
    pub fn search(&self, key: &K) -> Option<&K> {
        self.find(key).map(|i| &self.arena[i as usize].k)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes `key` and returns the stored key, or `None` if absent.
    pub fn remove(&mut self, key: &K) -> Option<K> {
        let (root, removed) = remove(&mut self.arena, self.root, key, &self.comparator);
        self.root = root;
        let removed = removed?;

        let last = (self.arena.len() - 1) as u32;
        if removed != last {
            relink(
                &mut self.arena,
                &mut self.root,
                last,
                removed,
                &self.comparator,
            );
        }
        let node = self.arena.swap_remove(removed as usize);
        debug!("remove: freed node {removed}, size {}", self.arena.len());
        Some(node.k)
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree, `0` when empty.
    pub fn height(&self) -> u32 {
        height(&self.arena, self.root)
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    /// Node at arena index `idx`.
    ///
    /// Indices are stable across inserts but a removal may move the last
    /// node of the arena into the freed slot.
    pub fn node(&self, idx: u32) -> &AvlNode<K> {
        &self.arena[idx as usize]
    }

    /// Smallest key.
    pub fn first(&self) -> Option<&K> {
        first(&self.arena, self.root).map(|i| &self.arena[i as usize].k)
    }

    /// Largest key.
    pub fn last(&self) -> Option<&K> {
        last(&self.arena, self.root).map(|i| &self.arena[i as usize].k)
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            arena: &self.arena,
            inner: InOrder::new(&self.arena, self.root),
        }
    }

    /// Checks heights, balance and ordering of every node, and that the
    /// arena holds no unreachable nodes.
    pub fn assert_valid(&self) -> Result<(), AvlError> {
        assert_avl_tree(&self.arena, self.root, &self.comparator)?;
        let reachable = size(&self.arena, self.root);
        if reachable != self.arena.len() {
            return Err(AvlError::SizeMismatch {
                reachable,
                stored: self.arena.len(),
            });
        }
        Ok(())
    }
}

/// Ascending iterator over the keys of an [`AvlTree`].
pub struct Iter<'a, K> {
    arena: &'a [AvlNode<K>],
    inner: InOrder<'a, AvlNode<K>>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|i| &self.arena[i as usize].k)
    }
}

impl<'a, K, C> IntoIterator for &'a AvlTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, C> Extend<K> for AvlTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: fmt::Debug, C> fmt::Display for AvlTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(_) => write!(f, "AvlTree\n└─ {}", print(&self.arena, self.root, "   ")),
            None => write!(f, "AvlTree ∅"),
        }
    }
}

impl<K: fmt::Debug, C> fmt::Debug for AvlTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
