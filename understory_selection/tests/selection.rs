// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_selection` crate.
//!
//! These exercise the bookkeeping API (contents, anchor, revision) and the
//! click combinators against a small hand-built tree order.

use understory_selection::{Modifiers, Selection, TreeOrder};

/// Rows in visible order with their parent keys.
struct Order(Vec<(u32, Option<u32>)>);

impl TreeOrder<u32> for Order {
    fn visible_index(&self, key: &u32) -> Option<usize> {
        self.0.iter().position(|(k, _)| k == key)
    }

    fn visible_key(&self, index: usize) -> Option<&u32> {
        self.0.get(index).map(|(k, _)| k)
    }

    fn visible_len(&self) -> usize {
        self.0.len()
    }

    fn parent(&self, key: &u32) -> Option<&u32> {
        self.0.iter().find(|(k, _)| k == key)?.1.as_ref()
    }

    fn contains(&self, key: &u32) -> bool {
        self.visible_index(key).is_some()
    }
}

/// Ten sibling rows `r0..r9` with keys `0..10`.
fn flat() -> Order {
    Order((0..10).map(|k| (k, None)).collect())
}

#[test]
fn empty_selection_basics() {
    let sel = Selection::<u32>::new();
    assert!(sel.is_empty());
    assert_eq!(sel.len(), 0);
    assert_eq!(sel.anchor(), None);
    assert_eq!(sel.revision(), 0);
}

#[test]
fn select_only_sets_anchor_and_bumps_revision() {
    let mut sel = Selection::new();
    sel.select_only(1);

    assert_eq!(sel.items(), &[1]);
    assert_eq!(sel.anchor(), Some(&1));
    assert_eq!(sel.revision(), 1);

    // No-op: selecting the same singleton again should not change revision.
    sel.select_only(1);
    assert_eq!(sel.revision(), 1);
}

#[test]
fn clear_empties_and_bumps_revision_only_on_change() {
    let mut sel = Selection::new();
    sel.clear();
    assert_eq!(sel.revision(), 0);

    sel.select_only(1);
    sel.clear();
    assert!(sel.is_empty());
    assert_eq!(sel.anchor(), None);
    assert_eq!(sel.revision(), 2);
}

#[test]
fn replace_with_dedups_and_keeps_anchor() {
    let mut sel = Selection::new();
    sel.set_anchor(7);
    sel.replace_with([1, 2, 2, 3]);
    assert_eq!(sel.items(), &[1, 2, 3]);
    assert_eq!(sel.anchor(), Some(&7));

    let rev = sel.revision();
    sel.replace_with([1, 2, 3]);
    assert_eq!(sel.revision(), rev);
}

#[test]
fn extend_with_adds_items_and_does_not_move_anchor() {
    let mut sel = Selection::new();
    sel.select_only(1);
    sel.extend_with([2]);
    let rev_before = sel.revision();

    sel.extend_with([2, 3, 3, 4]);
    assert_eq!(sel.items(), &[1, 2, 3, 4]);
    assert_eq!(sel.anchor(), Some(&1));
    assert!(sel.revision() > rev_before);

    let rev_before = sel.revision();
    sel.extend_with([1, 4]);
    assert_eq!(sel.revision(), rev_before);
}

#[test]
fn toggle_and_remove_leave_anchor_alone() {
    let mut sel = Selection::new();
    sel.select_only(1);
    sel.toggle(2);
    assert_eq!(sel.items(), &[1, 2]);

    sel.toggle(1);
    assert_eq!(sel.items(), &[2]);
    assert_eq!(sel.anchor(), Some(&1));

    // Removing a non-existent key is a no-op.
    let rev = sel.revision();
    sel.remove(&99);
    assert_eq!(sel.revision(), rev);

    sel.remove(&2);
    assert!(sel.is_empty());
    assert!(sel.revision() > rev);
}

#[test]
fn set_and_clear_anchor_are_noops_when_unchanged() {
    let mut sel = Selection::<u32>::new();
    sel.set_anchor(1);
    let rev = sel.revision();
    sel.set_anchor(1);
    assert_eq!(sel.revision(), rev);

    sel.clear_anchor();
    assert!(sel.anchor().is_none());
    assert!(sel.revision() > rev);

    let rev = sel.revision();
    sel.clear_anchor();
    assert_eq!(sel.revision(), rev);
}

#[test]
fn shift_click_selects_the_visible_range() {
    let order = flat();
    let mut sel = Selection::new();
    sel.click(2, Modifiers::empty(), &order);
    sel.click(6, Modifiers::RANGE, &order);
    assert_eq!(sel.items(), &[2, 3, 4, 5, 6]);
    assert_eq!(sel.anchor(), Some(&6));
}

#[test]
fn shift_click_backwards_unions_with_current() {
    let order = flat();
    let mut sel = Selection::new();
    sel.click(9, Modifiers::empty(), &order);
    sel.click(6, Modifiers::TOGGLE, &order);
    sel.click(4, Modifiers::RANGE, &order);
    assert_eq!(sel.items(), &[9, 6, 4, 5]);
}

#[test]
fn toggle_click_builds_a_sparse_selection() {
    let order = flat();
    let mut sel = Selection::new();
    sel.click(1, Modifiers::empty(), &order);
    sel.click(5, Modifiers::TOGGLE, &order);
    sel.click(8, Modifiers::TOGGLE, &order);
    sel.click(5, Modifiers::TOGGLE, &order);
    assert_eq!(sel.items(), &[1, 8]);
    assert_eq!(sel.anchor(), Some(&5));
}

#[test]
fn stale_keys_are_dropped_on_next_click() {
    let order = Order(vec![(1, None), (2, None)]);
    let mut sel = Selection::new();
    sel.replace_with([1, 40, 41]);
    sel.click(2, Modifiers::TOGGLE, &order);
    assert_eq!(sel.items(), &[1, 2]);
}

#[test]
fn nested_range_keeps_descendants_only() {
    // 1 ─┬─ 2
    //    └─ 3
    // 4
    let order = Order(vec![(1, None), (2, Some(1)), (3, Some(1)), (4, None)]);
    let mut sel = Selection::new();
    sel.click(4, Modifiers::empty(), &order);
    sel.click(2, Modifiers::RANGE, &order);
    // 1 is not in the range 2..=4, so nothing is pruned.
    assert_eq!(sel.items(), &[4, 2, 3]);

    sel.click(1, Modifiers::TOGGLE, &order);
    assert_eq!(sel.items(), &[4, 1]);
}
