//! Rotation primitives.
//!
//! Each rotation takes a subtree root and returns the new subtree root. The
//! caller re-links the returned index into whatever slot pointed at the old
//! root. Only links and the heights of the two moved nodes change; nothing is
//! allocated or freed.

use log::trace;

use crate::types::AvlNodeLike;
use crate::util::{get_l, get_r, set_l, set_r, update_height};

/// Right rotation around `y`.
///
/// ```text
///       y            x
///      / \          / \
///     x   C   =>   A   y
///    / \              / \
///   A   B            B   C
/// ```
///
/// Panics if `y` has no left child.
pub fn rotate_right<N: AvlNodeLike>(arena: &mut [N], y: u32) -> u32 {
    let x = get_l(arena, y).expect("rotate_right requires a left child");
    let b = get_r(arena, x);

    set_r(arena, x, Some(y));
    set_l(arena, y, b);

    update_height(arena, y);
    update_height(arena, x);

    trace!("rotate_right: node {y} -> new root {x}");
    x
}

/// Left rotation around `x`, mirror of [`rotate_right`].
///
/// Panics if `x` has no right child.
pub fn rotate_left<N: AvlNodeLike>(arena: &mut [N], x: u32) -> u32 {
    let y = get_r(arena, x).expect("rotate_left requires a right child");
    let b = get_l(arena, y);

    set_l(arena, y, Some(x));
    set_r(arena, x, b);

    update_height(arena, x);
    update_height(arena, y);

    trace!("rotate_left: node {x} -> new root {y}");
    y
}

/// Left rotation of the left child, then right rotation of `n`.
///
/// Fixes a left-heavy node whose left child is right-heavy.
pub fn left_right_rotate<N: AvlNodeLike>(arena: &mut [N], n: u32) -> u32 {
    let l = get_l(arena, n).expect("left_right_rotate requires a left child");
    let l = rotate_left(arena, l);
    set_l(arena, n, Some(l));
    rotate_right(arena, n)
}

/// Right rotation of the right child, then left rotation of `n`.
///
/// Fixes a right-heavy node whose right child is left-heavy.
pub fn right_left_rotate<N: AvlNodeLike>(arena: &mut [N], n: u32) -> u32 {
    let r = get_r(arena, n).expect("right_left_rotate requires a right child");
    let r = rotate_right(arena, r);
    set_r(arena, n, Some(r));
    rotate_left(arena, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AvlNode;
    use crate::util::{height, InOrder};

    fn keys(arena: &[AvlNode<char>], root: u32) -> String {
        InOrder::new(arena, Some(root))
            .map(|i| arena[i as usize].k)
            .collect()
    }

    /// Builds a node per key; links are set by the caller.
    fn nodes(keys: &str) -> Vec<AvlNode<char>> {
        keys.chars().map(AvlNode::new).collect()
    }

    #[test]
    fn right_rotation_moves_inner_grandchild() {
        // y=3, x=1, A=0, B=2, C=4 (keys a..e in order)
        let mut arena = nodes("abcde");
        arena[3].l = Some(1);
        arena[3].r = Some(4);
        arena[1].l = Some(0);
        arena[1].r = Some(2);
        for i in [0, 2, 4, 1, 3] {
            update_height(&mut arena, i);
        }
        let before = keys(&arena, 3);

        let root = rotate_right(&mut arena, 3);
        assert_eq!(root, 1);
        assert_eq!(arena[1].l, Some(0));
        assert_eq!(arena[1].r, Some(3));
        assert_eq!(arena[3].l, Some(2));
        assert_eq!(arena[3].r, Some(4));
        assert_eq!(height(&arena, Some(3)), 2);
        assert_eq!(height(&arena, Some(1)), 3);
        assert_eq!(keys(&arena, root), before);
    }

    #[test]
    fn left_rotation_on_right_chain() {
        let mut arena = nodes("abc");
        arena[0].r = Some(1);
        arena[1].r = Some(2);
        for i in [2, 1, 0] {
            update_height(&mut arena, i);
        }

        let root = rotate_left(&mut arena, 0);
        assert_eq!(root, 1);
        assert_eq!(arena[1].l, Some(0));
        assert_eq!(arena[1].r, Some(2));
        assert_eq!(arena[0].r, None);
        assert_eq!(height(&arena, Some(1)), 2);
        assert_eq!(height(&arena, Some(0)), 1);
        assert_eq!(keys(&arena, root), "abc");
    }

    #[test]
    fn double_rotations_promote_grandchild() {
        // c -> a -> b (left, then right)
        let mut arena = nodes("abc");
        arena[2].l = Some(0);
        arena[0].r = Some(1);
        for i in [1, 0, 2] {
            update_height(&mut arena, i);
        }
        let root = left_right_rotate(&mut arena, 2);
        assert_eq!(root, 1);
        assert_eq!((arena[1].l, arena[1].r), (Some(0), Some(2)));
        assert_eq!(height(&arena, Some(1)), 2);
        assert_eq!(keys(&arena, root), "abc");

        // a -> c -> b (right, then left)
        let mut arena = nodes("abc");
        arena[0].r = Some(2);
        arena[2].l = Some(1);
        for i in [1, 2, 0] {
            update_height(&mut arena, i);
        }
        let root = right_left_rotate(&mut arena, 0);
        assert_eq!(root, 1);
        assert_eq!((arena[1].l, arena[1].r), (Some(0), Some(2)));
        assert_eq!(height(&arena, Some(0)), 1);
        assert_eq!(height(&arena, Some(2)), 1);
        assert_eq!(keys(&arena, root), "abc");
    }

    #[test]
    #[should_panic(expected = "rotate_right requires a left child")]
    fn right_rotation_without_left_child_panics() {
        let mut arena = nodes("a");
        rotate_right(&mut arena, 0);
    }
}
