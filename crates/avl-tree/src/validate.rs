//! Structural invariant checks.

use std::cmp::Ordering;

use crate::error::AvlError;
use crate::types::{AvlNodeLike, KeyNode};
use crate::util::{balance_factor, get_l, get_r, height, InOrder};

/// Checks every node reachable from `root` for a correct cached height, a
/// balance factor within `-1..=1` and strictly increasing in-order keys.
pub fn assert_avl_tree<K, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), AvlError>
where
    N: AvlNodeLike + KeyNode<K>,
    C: Fn(&K, &K) -> Ordering,
{
    if let Some(root) = root {
        validate_heights(arena, root)?;
    }

    let mut prev: Option<u32> = None;
    for node in InOrder::new(arena, root) {
        if let Some(prev) = prev {
            let cmp = comparator(arena[prev as usize].key(), arena[node as usize].key());
            if cmp != Ordering::Less {
                return Err(AvlError::OrderViolated { prev, node });
            }
        }
        prev = Some(node);
    }

    Ok(())
}

/// Post-order so that a child is reported before its ancestors.
fn validate_heights<N: AvlNodeLike>(arena: &[N], node: u32) -> Result<(), AvlError> {
    let l = get_l(arena, node);
    let r = get_r(arena, node);
    if let Some(l) = l {
        validate_heights(arena, l)?;
    }
    if let Some(r) = r {
        validate_heights(arena, r)?;
    }

    let expected = 1 + height(arena, l).max(height(arena, r));
    let actual = arena[node as usize].height();
    if actual != expected {
        return Err(AvlError::HeightMismatch {
            node,
            expected,
            actual,
        });
    }

    let balance = balance_factor(arena, Some(node));
    if !(-1..=1).contains(&balance) {
        return Err(AvlError::Unbalanced { node, balance });
    }

    Ok(())
}
