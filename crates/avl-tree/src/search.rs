use std::cmp::Ordering;

use crate::types::KeyNode;
use crate::util::{get_l, get_r};

/// Binary-search descent from `node`.
///
/// Returns the arena index holding a key equal to `key`, or `None`.
pub fn search<K, N, C>(arena: &[N], node: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let n = node?;
    match comparator(key, arena[n as usize].key()) {
        Ordering::Equal => Some(n),
        Ordering::Less => search(arena, get_l(arena, n), key, comparator),
        Ordering::Greater => search(arena, get_r(arena, n), key, comparator),
    }
}
