// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Selection: tree-aware selection sets.
//!
//! This crate tracks which rows of a hierarchical list are selected and maps
//! pointer clicks with modifiers onto selection changes. It does not own the
//! tree; the row order and parent links come from a [`TreeOrder`]
//! implementation supplied per call (for example `understory_outline::Rows`
//! with the `outline_adapter` feature).
//!
//! The core type is [`Selection`], a small container that tracks:
//! - The set of selected keys.
//! - An optional **anchor** key: the last explicitly clicked key, used as the
//!   pivot for range selection and reported as the "current" row.
//! - A monotonically increasing **revision** counter that bumps when the
//!   selection changes.
//!
//! ## Click combinators
//!
//! [`Selection::click`] applies one of three combinators chosen by
//! [`Modifiers`]:
//!
//! - No modifiers: replace the selection with the clicked key.
//! - [`Modifiers::TOGGLE`]: add the key if absent, remove it if present.
//! - [`Modifiers::RANGE`]: add every visible row between the anchor and the
//!   clicked key. Without a visible anchor this degrades to a plain click.
//!   `RANGE` wins when both flags are set.
//!
//! The anchor always moves to the clicked key, whichever combinator fired.
//!
//! ## Ancestor exclusion
//!
//! A selection never contains both an item and one of its ancestors. After
//! every click, if the clicked key is selected its selected descendants are
//! dropped (the click targeted the ancestor). Then any remaining key with a
//! selected descendant is dropped, so the descendant wins.
//!
//! ```rust
//! use understory_selection::{Modifiers, Selection, TreeOrder};
//!
//! // A flat list of `(key, parent)` pairs in visible order.
//! struct List(Vec<(u32, Option<u32>)>);
//!
//! impl TreeOrder<u32> for List {
//!     fn visible_index(&self, key: &u32) -> Option<usize> {
//!         self.0.iter().position(|(k, _)| k == key)
//!     }
//!     fn visible_key(&self, index: usize) -> Option<&u32> {
//!         self.0.get(index).map(|(k, _)| k)
//!     }
//!     fn visible_len(&self) -> usize {
//!         self.0.len()
//!     }
//!     fn parent(&self, key: &u32) -> Option<&u32> {
//!         self.0.iter().find(|(k, _)| k == key)?.1.as_ref()
//!     }
//!     fn contains(&self, key: &u32) -> bool {
//!         self.visible_index(key).is_some()
//!     }
//! }
//!
//! // 1 has children 2 and 3.
//! let rows = List(vec![(1, None), (2, Some(1)), (3, Some(1)), (4, None)]);
//! let mut selection = Selection::new();
//!
//! selection.click(2, Modifiers::empty(), &rows);
//! selection.click(4, Modifiers::RANGE, &rows);
//! assert_eq!(selection.items(), &[2, 3, 4]);
//!
//! // Toggling the parent in removes its selected children.
//! selection.click(1, Modifiers::TOGGLE, &rows);
//! assert_eq!(selection.items(), &[4, 1]);
//! assert_eq!(selection.anchor(), Some(&1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
mod tree;

pub use tree::{Modifiers, TreeOrder};

use alloc::vec::Vec;

/// A selection container tracking a set of keys plus an anchor and a revision.
///
/// Keys are stored in a small `Vec<K>` in insertion order with uniqueness
/// enforced by equality. The anchor is stored by value and need not be
/// selected: toggling the clicked key off leaves it as the anchor.
#[derive(Clone, Debug, Default)]
pub struct Selection<K> {
    items: Vec<K>,
    anchor: Option<K>,
    revision: u64,
}

impl<K> Selection<K> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            anchor: None,
            revision: 0,
        }
    }

    /// Returns `true` if the selection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the selected keys in insertion order.
    #[must_use]
    pub fn items(&self) -> &[K] {
        &self.items
    }

    /// Returns an iterator over the selected keys.
    pub fn iter(&self) -> core::slice::Iter<'_, K> {
        self.items.iter()
    }

    /// Returns the anchor ("current") key, if any.
    #[must_use]
    pub fn anchor(&self) -> Option<&K> {
        self.anchor.as_ref()
    }

    /// Returns the current revision counter.
    ///
    /// The revision is bumped only when a mutation changes the selected keys
    /// or the anchor. No-op calls leave it unchanged, so observers can use it
    /// as a cheap "did anything change?" marker.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Removes all keys from the selection and clears the anchor.
    pub fn clear(&mut self) {
        if self.items.is_empty() && self.anchor.is_none() {
            return;
        }

        self.items.clear();
        self.anchor = None;
        self.bump_revision();
    }

    /// Clears the anchor while leaving the selected keys untouched.
    pub fn clear_anchor(&mut self) {
        if self.anchor.take().is_some() {
            self.bump_revision();
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<K> Selection<K>
where
    K: Clone + PartialEq,
{
    /// Returns `true` if the selection currently contains `key`.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.position_of(key).is_some()
    }

    /// Replaces the selection with a single key and makes it the anchor.
    pub fn select_only(&mut self, key: K) {
        if self.items.len() == 1 && self.items[0] == key && self.anchor.as_ref() == Some(&key) {
            return;
        }

        self.items.clear();
        self.items.push(key.clone());
        self.anchor = Some(key);
        self.bump_revision();
    }

    /// Toggles `key` in the selection. The anchor is left unchanged.
    pub fn toggle(&mut self, key: K) {
        match self.position_of(&key) {
            Some(idx) => {
                self.items.remove(idx);
            }
            None => self.items.push(key),
        }
        self.bump_revision();
    }

    /// Removes `key` from the selection if present. The anchor is left unchanged.
    pub fn remove(&mut self, key: &K) {
        if let Some(idx) = self.position_of(key) {
            self.items.remove(idx);
            self.bump_revision();
        }
    }

    /// Appends the keys not already selected. Duplicates in the input are ignored.
    pub fn extend_with<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        let len = self.items.len();
        for key in keys {
            if self.position_of(&key).is_none() {
                self.items.push(key);
            }
        }
        if self.items.len() != len {
            self.bump_revision();
        }
    }

    /// Replaces the selected keys with the provided batch.
    ///
    /// Duplicates in the input are ignored. The anchor is left unchanged.
    pub fn replace_with<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        let mut items: Vec<K> = Vec::new();
        for key in keys {
            if !items.contains(&key) {
                items.push(key);
            }
        }
        let anchor = self.anchor.clone();
        self.commit(items, anchor);
    }

    /// Sets the anchor to `key`, selected or not.
    pub fn set_anchor(&mut self, key: K) {
        if self.anchor.as_ref() != Some(&key) {
            self.anchor = Some(key);
            self.bump_revision();
        }
    }

    fn position_of(&self, key: &K) -> Option<usize> {
        self.items.iter().position(|k| k == key)
    }

    /// Installs new contents, bumping the revision only on a semantic change.
    ///
    /// Returns `true` if anything changed.
    fn commit(&mut self, items: Vec<K>, anchor: Option<K>) -> bool {
        if items == self.items && anchor == self.anchor {
            return false;
        }
        self.items = items;
        self.anchor = anchor;
        self.bump_revision();
        true
    }
}

impl<'a, K> IntoIterator for &'a Selection<K> {
    type Item = &'a K;
    type IntoIter = core::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
