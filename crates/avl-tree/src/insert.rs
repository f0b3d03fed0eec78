//! Recursive insertion with AVL rebalancing.

use std::cmp::Ordering;

use crate::rotate::{left_right_rotate, right_left_rotate, rotate_left, rotate_right};
use crate::types::{AvlNodeLike, KeyNode};
use crate::util::{balance_factor, get_l, get_r, set_l, set_r, update_height};

/// Inserts `key` into the subtree rooted at `node`.
///
/// Returns the new subtree root, which the caller must store back into the
/// slot it descended from, and the arena index of the freshly created node.
/// The index is `None` when an equal key already exists, in which case the
/// subtree is left untouched.
///
/// A new key changes the height of a single subtree by at most one, so at
/// most one node on the way back up ends up out of balance and one (single
/// or double) rotation there restores the whole tree.
pub fn insert<K, N, C>(
    arena: &mut Vec<N>,
    node: Option<u32>,
    key: K,
    comparator: &C,
) -> (u32, Option<u32>)
where
    N: AvlNodeLike + KeyNode<K> + From<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let Some(n) = node else {
        let idx = arena.len() as u32;
        arena.push(N::from(key));
        return (idx, Some(idx));
    };

    let inserted = match comparator(&key, arena[n as usize].key()) {
        Ordering::Less => {
            let l = get_l(arena, n);
            let (l, inserted) = insert(arena, l, key, comparator);
            set_l(arena, n, Some(l));
            inserted
        }
        Ordering::Greater => {
            let r = get_r(arena, n);
            let (r, inserted) = insert(arena, r, key, comparator);
            set_r(arena, n, Some(r));
            inserted
        }
        Ordering::Equal => None,
    };

    let Some(inserted) = inserted else {
        return (n, None);
    };

    update_height(arena, n);
    (rebalance_after_insert(arena, n, inserted, comparator), Some(inserted))
}

/// Picks the rotation for `n` by comparing the new key against the child on
/// the heavy side. Cases are checked in order: left-left, right-right,
/// left-right, right-left.
fn rebalance_after_insert<K, N, C>(
    arena: &mut [N],
    n: u32,
    inserted: u32,
    comparator: &C,
) -> u32
where
    N: AvlNodeLike + KeyNode<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let balance = balance_factor(arena, Some(n));
    if (-1..=1).contains(&balance) {
        return n;
    }

    let key = arena[inserted as usize].key();
    let vs_left = get_l(arena, n).map(|l| comparator(key, arena[l as usize].key()));
    let vs_right = get_r(arena, n).map(|r| comparator(key, arena[r as usize].key()));

    if balance > 1 && vs_left == Some(Ordering::Less) {
        rotate_right(arena, n)
    } else if balance < -1 && vs_right == Some(Ordering::Greater) {
        rotate_left(arena, n)
    } else if balance > 1 && vs_left == Some(Ordering::Greater) {
        left_right_rotate(arena, n)
    } else if balance < -1 && vs_right == Some(Ordering::Less) {
        right_left_rotate(arena, n)
    } else {
        n
    }
}
