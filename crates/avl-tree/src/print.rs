//! Box-drawing tree dump used by `Display for AvlTree`.

use std::fmt::Debug;

use crate::types::{AvlNodeLike, KeyNode};

/// Renders one child given the indentation for its own children.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Appends one line per child below a parent line, with `├─` / `└─`
/// branches. Trailing `None` children are dropped; inner ones are skipped.
pub fn print_tree(tab: &str, children: &[Option<&PrintChild>]) -> String {
    let mut out = String::new();

    let Some(last) = children.iter().rposition(Option::is_some) else {
        return out;
    };

    for (i, child_opt) in children.iter().enumerate().take(last + 1) {
        let Some(child_fn) = *child_opt else {
            continue;
        };

        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let child = child_fn(&child_tab);
        let branch = if child.is_empty() {
            "│"
        } else if is_last {
            "└─"
        } else {
            "├─"
        };

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        if !child.is_empty() {
            out.push(' ');
            out.push_str(&child);
        }
    }

    out
}

/// Renders the subtree at `node` as `key [h=height]` lines.
///
/// An absent child next to a present one is shown as `∅`; leaves have no
/// child lines.
pub fn print<K, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    N: AvlNodeLike + KeyNode<K>,
{
    let Some(i) = node else {
        return "∅".to_string();
    };

    let n = &arena[i as usize];
    let (l, r) = (n.l(), n.r());
    let left = |tab: &str| print::<K, N>(arena, l, tab);
    let right = |tab: &str| print::<K, N>(arena, r, tab);
    let children: [Option<&PrintChild>; 2] = if l.is_none() && r.is_none() {
        [None, None]
    } else {
        [Some(&left), Some(&right)]
    };

    format!(
        "{:?} [h={}]{}",
        n.key(),
        n.height(),
        print_tree(tab, &children)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insert::insert;
    use crate::types::{default_comparator, AvlNode};

    fn build(keys: &[i32]) -> (Vec<AvlNode<i32>>, Option<u32>) {
        let mut arena = Vec::new();
        let mut root = None;
        for &k in keys {
            root = Some(insert(&mut arena, root, k, &default_comparator).0);
        }
        (arena, root)
    }

    #[test]
    fn prints_empty_and_leaf() {
        let (arena, _) = build(&[]);
        assert_eq!(print(&arena, None, ""), "∅");
        let (arena, root) = build(&[1]);
        assert_eq!(print(&arena, root, ""), "1 [h=1]");
    }

    #[test]
    fn prints_nested_tree() {
        let (arena, root) = build(&[10, 20, 30, 15]);
        assert_eq!(
            print(&arena, root, ""),
            "20 [h=3]\n├─ 10 [h=2]\n│  ├─ ∅\n│  └─ 15 [h=1]\n└─ 30 [h=1]"
        );
    }

    #[test]
    fn print_tree_skips_missing_children() {
        let a = |_: &str| "a".to_string();
        let b = |_: &str| "b".to_string();
        let children: [Option<&PrintChild>; 4] = [Some(&a), None, Some(&b), None];
        assert_eq!(print_tree("", &[]), "");
        assert_eq!(print_tree("", &children), "\n├─ a\n└─ b");
    }
}
