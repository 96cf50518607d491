// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click combinators and ancestor exclusion.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

use crate::Selection;

bitflags::bitflags! {
    /// Modifier state of a click, as far as selection is concerned.
    ///
    /// Hosts map platform keys onto these flags (typically Ctrl/Cmd for
    /// [`Modifiers::TOGGLE`] and Shift for [`Modifiers::RANGE`]).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Add the clicked key if absent, remove it if present.
        const TOGGLE = 1 << 0;
        /// Extend from the anchor to the clicked key in visible order.
        const RANGE = 1 << 1;
    }
}

/// Row order and parent links of the tree a selection lives in.
///
/// Visible indices are dense ordinals over the rows currently shown.
/// [`TreeOrder::contains`] may report keys that exist but are hidden under a
/// collapsed ancestor; keys it does not report are treated as stale.
pub trait TreeOrder<K> {
    /// Ordinal of `key` among the visible rows.
    fn visible_index(&self, key: &K) -> Option<usize>;

    /// Key of the visible row at `index`.
    fn visible_key(&self, index: usize) -> Option<&K>;

    /// Number of visible rows.
    fn visible_len(&self) -> usize;

    /// Parent of `key`, or `None` for keys without a parent row or the root.
    fn parent(&self, key: &K) -> Option<&K>;

    /// Returns `true` if `key` is still present in the tree.
    fn contains(&self, key: &K) -> bool;

    /// Returns `true` if `key` lies strictly below `ancestor`.
    fn is_descendant_of(&self, key: &K, ancestor: &K) -> bool
    where
        K: PartialEq,
    {
        let mut cursor = self.parent(key);
        while let Some(parent) = cursor {
            if parent == ancestor {
                return true;
            }
            cursor = self.parent(parent);
        }
        false
    }
}

impl<K> Selection<K>
where
    K: Clone + Eq + Hash,
{
    /// Applies a click on `key` with `modifiers`.
    ///
    /// Keys not present in `order` are dropped first. Clicking a key that is
    /// not a visible row is a no-op and leaves the anchor untouched.
    ///
    /// Returns `true` if the selected keys or the anchor changed.
    pub fn click(&mut self, key: K, modifiers: Modifiers, order: &impl TreeOrder<K>) -> bool {
        let Some(clicked) = order.visible_index(&key) else {
            return false;
        };

        let mut next: Vec<K> = self
            .items
            .iter()
            .filter(|k| order.contains(k))
            .cloned()
            .collect();

        let range_from = self
            .anchor
            .as_ref()
            .filter(|_| modifiers.contains(Modifiers::RANGE))
            .and_then(|anchor| order.visible_index(anchor));

        if let Some(anchor) = range_from {
            let (start, end) = if anchor <= clicked {
                (anchor, clicked)
            } else {
                (clicked, anchor)
            };
            for index in start..=end {
                if let Some(k) = order.visible_key(index)
                    && !next.contains(k)
                {
                    next.push(k.clone());
                }
            }
        } else if modifiers == Modifiers::TOGGLE {
            match next.iter().position(|k| *k == key) {
                Some(idx) => {
                    next.remove(idx);
                }
                None => next.push(key.clone()),
            }
        } else {
            next.clear();
            next.push(key.clone());
        }

        if next.contains(&key) {
            next.retain(|k| !order.is_descendant_of(k, &key));
        }
        exclude_ancestors(&mut next, order);

        self.commit(next, Some(key))
    }

    /// Drops every selected key that has a selected descendant.
    ///
    /// Returns `true` if anything was removed.
    pub fn prune_ancestors(&mut self, order: &impl TreeOrder<K>) -> bool {
        let mut items = self.items.clone();
        exclude_ancestors(&mut items, order);
        let anchor = self.anchor.clone();
        self.commit(items, anchor)
    }

    /// Drops selected keys that are no longer present in `order`.
    ///
    /// A stale anchor is cleared as well. Returns `true` if anything changed.
    pub fn retain_present(&mut self, order: &impl TreeOrder<K>) -> bool {
        let items = self
            .items
            .iter()
            .filter(|k| order.contains(k))
            .cloned()
            .collect();
        let anchor = self.anchor.clone().filter(|a| order.contains(a));
        self.commit(items, anchor)
    }
}

/// Removes keys that have a selected descendant, preserving order.
fn exclude_ancestors<K, O>(items: &mut Vec<K>, order: &O)
where
    K: Clone + Eq + Hash,
    O: TreeOrder<K> + ?Sized,
{
    if items.len() < 2 {
        return;
    }
    let mut shadowed: HashSet<K> = HashSet::new();
    {
        let selected: HashSet<&K> = items.iter().collect();
        for key in items.iter() {
            let mut cursor = order.parent(key);
            while let Some(parent) = cursor {
                if selected.contains(parent) && !shadowed.insert(parent.clone()) {
                    // Everything above was already walked from a sibling.
                    break;
                }
                cursor = order.parent(parent);
            }
        }
    }
    if !shadowed.is_empty() {
        items.retain(|k| !shadowed.contains(k));
    }
}
