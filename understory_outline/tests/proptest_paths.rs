// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based tests for path ordering and flatten order.
//!
//! 1. `Path::compare` is antisymmetric and agrees with equality.
//! 2. `Path::compare` is transitive.
//! 3. A strict prefix always sorts first.
//! 4. Rows from any flatten pass are strictly increasing by path.
//! 5. A row's parent key matches the item addressed by its parent path.

use core::cmp::Ordering;

use proptest::prelude::*;
use proptest::sample::Index;
use understory_outline::{FlattenMode, Item, Outline, Path};

fn path() -> impl Strategy<Value = Path> {
    proptest::collection::vec(0_usize..4, 0..6).prop_map(|v| Path::from_slice(&v))
}

/// Builds a tree where node `i + 1` hangs below a previously created node.
fn tree(parents: &[Index], collapsed: &[bool]) -> Outline<u32, ()> {
    let mut children: Vec<Vec<u32>> = vec![Vec::new(); parents.len() + 1];
    for (i, parent) in parents.iter().enumerate() {
        children[parent.index(i + 1)].push(i as u32 + 1);
    }

    fn build(key: u32, children: &[Vec<u32>], collapsed: &[bool]) -> Item<u32, ()> {
        Item::new(key, ())
            .with_collapsed(collapsed.get(key as usize).copied().unwrap_or(false))
            .with_children(
                children[key as usize]
                    .iter()
                    .map(|&child| build(child, children, collapsed)),
            )
    }

    Outline::new(build(0, &children, collapsed))
}

proptest! {
    #[test]
    fn compare_is_antisymmetric(a in path(), b in path()) {
        let ab = Path::compare(&a, &b);
        prop_assert_eq!(ab, Path::compare(&b, &a).reverse());
        prop_assert_eq!(ab == Ordering::Equal, a == b);
    }
}

proptest! {
    #[test]
    fn compare_is_transitive(a in path(), b in path(), c in path()) {
        let mut sorted = [a, b, c];
        sorted.sort();
        prop_assert_ne!(Path::compare(&sorted[0], &sorted[1]), Ordering::Greater);
        prop_assert_ne!(Path::compare(&sorted[1], &sorted[2]), Ordering::Greater);
        prop_assert_ne!(Path::compare(&sorted[0], &sorted[2]), Ordering::Greater);
    }
}

proptest! {
    #[test]
    fn strict_prefix_sorts_first(
        a in path(),
        suffix in proptest::collection::vec(0_usize..4, 1..4),
    ) {
        let b: Path = a.as_slice().iter().copied().chain(suffix).collect();
        prop_assert!(a.is_ancestor_of(&b));
        prop_assert_eq!(Path::compare(&a, &b), Ordering::Less);
        prop_assert_eq!(Path::compare(&b, &a), Ordering::Greater);
    }
}

proptest! {
    #[test]
    fn flatten_is_in_document_order(
        parents in proptest::collection::vec(any::<Index>(), 0..40),
        collapsed in proptest::collection::vec(any::<bool>(), 0..41),
    ) {
        let outline = tree(&parents, &collapsed);
        for mode in [FlattenMode::Visible, FlattenMode::All] {
            let rows = outline.flatten(mode);
            for pair in rows.as_slice().windows(2) {
                prop_assert_eq!(Path::compare(&pair[0].path, &pair[1].path), Ordering::Less);
            }
        }
        prop_assert_eq!(outline.flatten(FlattenMode::All).len(), parents.len());
    }
}

proptest! {
    #[test]
    fn parent_keys_follow_paths(
        parents in proptest::collection::vec(any::<Index>(), 0..40),
    ) {
        let outline = tree(&parents, &[]);
        let rows = outline.flatten(FlattenMode::All);
        for row in &rows {
            let parent_path = row.path.parent().unwrap();
            let parent = outline.item_at(&parent_path).unwrap();
            prop_assert_eq!(*parent.key(), row.parent);
            prop_assert_eq!(row.depth, row.path.len() - 1);
        }
    }
}
