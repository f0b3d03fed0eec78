//! Recursive deletion with AVL rebalancing.
//!
//! Unlike insertion, removing a key can shorten a subtree so that several
//! ancestors fall out of balance, so every node on the way back up is
//! re-heighted and rebalanced.

use std::cmp::Ordering;

use crate::rotate::{left_right_rotate, right_left_rotate, rotate_left, rotate_right};
use crate::types::{AvlNodeLike, KeyNode};
use crate::util::{balance_factor, get_l, get_r, set_l, set_r, update_height};

/// Refreshes the height of `n` and rotates it back into balance if needed.
///
/// Returns the new subtree root. The rotation is chosen from the balance of
/// the heavy child rather than from a key, which also covers the
/// "child perfectly balanced" shape that only deletion can produce.
pub fn rebalance<N: AvlNodeLike>(arena: &mut [N], n: u32) -> u32 {
    update_height(arena, n);
    let balance = balance_factor(arena, Some(n));
    if balance > 1 {
        if balance_factor(arena, get_l(arena, n)) >= 0 {
            rotate_right(arena, n)
        } else {
            left_right_rotate(arena, n)
        }
    } else if balance < -1 {
        if balance_factor(arena, get_r(arena, n)) <= 0 {
            rotate_left(arena, n)
        } else {
            right_left_rotate(arena, n)
        }
    } else {
        n
    }
}

/// Removes `key` from the subtree rooted at `node`.
///
/// Returns the new subtree root and the arena index of the unlinked node, or
/// `None` if the key was not present. The unlinked node is left in the arena
/// as a detached leaf; reclaiming its slot is up to the caller.
pub fn remove<K, N, C>(
    arena: &mut [N],
    node: Option<u32>,
    key: &K,
    comparator: &C,
) -> (Option<u32>, Option<u32>)
where
    N: AvlNodeLike + KeyNode<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let Some(n) = node else {
        return (None, None);
    };

    match comparator(key, arena[n as usize].key()) {
        Ordering::Less => {
            let l = get_l(arena, n);
            let (l, removed) = remove(arena, l, key, comparator);
            if removed.is_none() {
                return (Some(n), None);
            }
            set_l(arena, n, l);
            (Some(rebalance(arena, n)), removed)
        }
        Ordering::Greater => {
            let r = get_r(arena, n);
            let (r, removed) = remove(arena, r, key, comparator);
            if removed.is_none() {
                return (Some(n), None);
            }
            set_r(arena, n, r);
            (Some(rebalance(arena, n)), removed)
        }
        Ordering::Equal => {
            let l = get_l(arena, n);
            let r = get_r(arena, n);
            set_l(arena, n, None);
            set_r(arena, n, None);
            arena[n as usize].set_height(1);

            let replacement = match (l, r) {
                (None, None) => None,
                (Some(c), None) | (None, Some(c)) => Some(c),
                (Some(l), Some(r)) => {
                    // In-order successor takes the removed node's place.
                    let (r, successor) = remove_min(arena, r);
                    set_l(arena, successor, Some(l));
                    set_r(arena, successor, r);
                    Some(rebalance(arena, successor))
                }
            };
            (replacement, Some(n))
        }
    }
}

/// Unlinks the leftmost node under `n`.
///
/// Returns the rebalanced remainder and the index of the unlinked node.
fn remove_min<N: AvlNodeLike>(arena: &mut [N], n: u32) -> (Option<u32>, u32) {
    match get_l(arena, n) {
        None => {
            let r = get_r(arena, n);
            set_r(arena, n, None);
            (r, n)
        }
        Some(l) => {
            let (l, min) = remove_min(arena, l);
            set_l(arena, n, l);
            (Some(rebalance(arena, n)), min)
        }
    }
}

/// Re-points the single link referring to `from` so that it refers to `to`.
///
/// Used when the arena is compacted by moving its last node into a freed
/// slot. `from` must be reachable from `root`; it is located by its key.
pub(crate) fn relink<K, N, C>(
    arena: &mut [N],
    root: &mut Option<u32>,
    from: u32,
    to: u32,
    comparator: &C,
) where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> Ordering,
{
    if *root == Some(from) {
        *root = Some(to);
        return;
    }

    let mut curr = root.expect("relinked node must be reachable from the root");
    loop {
        let go_left = comparator(arena[from as usize].key(), arena[curr as usize].key())
            == Ordering::Less;
        let child = if go_left {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
        match child {
            Some(c) if c == from => {
                if go_left {
                    set_l(arena, curr, Some(to));
                } else {
                    set_r(arena, curr, Some(to));
                }
                return;
            }
            Some(c) => curr = c,
            None => unreachable!("relinked node must be reachable from the root"),
        }
    }
}
