//! Height/balance queries and index walks shared by the engine.

use crate::types::{AvlNodeLike, Node};

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Cached height of `node`, `0` for an absent subtree.
#[inline]
pub fn height<N: AvlNodeLike>(arena: &[N], node: Option<u32>) -> u32 {
    match node {
        Some(i) => arena[i as usize].height(),
        None => 0,
    }
}

/// `height(left) - height(right)`, `0` for an absent subtree.
#[inline]
pub fn balance_factor<N: AvlNodeLike>(arena: &[N], node: Option<u32>) -> i32 {
    match node {
        Some(i) => {
            let l = height(arena, get_l(arena, i)) as i32;
            let r = height(arena, get_r(arena, i)) as i32;
            l - r
        }
        None => 0,
    }
}

/// Recomputes the cached height of `idx` from its children.
///
/// Children must already be current.
#[inline]
pub fn update_height<N: AvlNodeLike>(arena: &mut [N], idx: u32) {
    let l = height(arena, get_l(arena, idx));
    let r = height(arena, get_r(arena, idx));
    arena[idx as usize].set_height(1 + l.max(r));
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// Number of nodes reachable from `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    match root {
        Some(i) => 1 + size(arena, get_l(arena, i)) + size(arena, get_r(arena, i)),
        None => 0,
    }
}

/// In-order walk over node indices.
///
/// Keeps the pending left spine on an explicit stack since nodes carry no
/// parent link.
pub struct InOrder<'a, N> {
    arena: &'a [N],
    stack: Vec<u32>,
}

impl<'a, N: Node> InOrder<'a, N> {
    pub fn new(arena: &'a [N], root: Option<u32>) -> Self {
        let mut it = Self {
            arena,
            stack: Vec::new(),
        };
        it.push_left(root);
        it
    }

    fn push_left(&mut self, mut curr: Option<u32>) {
        while let Some(i) = curr {
            self.stack.push(i);
            curr = get_l(self.arena, i);
        }
    }
}

impl<N: Node> Iterator for InOrder<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let i = self.stack.pop()?;
        self.push_left(get_r(self.arena, i));
        Some(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AvlNode;

    //      2
    //     / \
    //    1   3
    //         \
    //          4
    fn fixture() -> (Vec<AvlNode<i32>>, Option<u32>) {
        let mut arena: Vec<AvlNode<i32>> = (1..=4).map(AvlNode::new).collect();
        arena[1].l = Some(0);
        arena[1].r = Some(2);
        arena[2].r = Some(3);
        update_height(&mut arena, 3);
        update_height(&mut arena, 2);
        update_height(&mut arena, 0);
        update_height(&mut arena, 1);
        (arena, Some(1))
    }

    #[test]
    fn absent_subtree_has_zero_height_and_balance() {
        let arena: Vec<AvlNode<i32>> = Vec::new();
        assert_eq!(height(&arena, None), 0);
        assert_eq!(balance_factor(&arena, None), 0);
    }

    #[test]
    fn heights_and_balance_factors() {
        let (arena, root) = fixture();
        assert_eq!(height(&arena, root), 3);
        assert_eq!(height(&arena, Some(3)), 1);
        assert_eq!(balance_factor(&arena, root), -1);
        assert_eq!(balance_factor(&arena, Some(2)), -1);
        assert_eq!(balance_factor(&arena, Some(0)), 0);
    }

    #[test]
    fn walks() {
        let (arena, root) = fixture();
        assert_eq!(first(&arena, root), Some(0));
        assert_eq!(last(&arena, root), Some(3));
        assert_eq!(size(&arena, root), 4);
        let keys: Vec<i32> = InOrder::new(&arena, root)
            .map(|i| arena[i as usize].k)
            .collect();
        assert_eq!(keys, vec![1, 2, 3, 4]);
        assert_eq!(InOrder::new(&arena, None).count(), 0);
    }
}
