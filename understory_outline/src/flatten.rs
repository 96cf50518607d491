// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattening an [`Outline`] into an ordered row sequence.
//!
//! Rows are produced depth-first in pre-order. In [`FlattenMode::Visible`],
//! the children of a collapsed item are skipped entirely. In
//! [`FlattenMode::All`], every item becomes a row and rows below a collapsed
//! ancestor are reported with `visible == false`.
//!
//! Flattening is O(total items) and is expected to be re-run after every
//! structural change; nothing is cached across passes.

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::item::{Item, Outline};
use crate::path::Path;

/// Which items a flatten pass turns into rows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlattenMode {
    /// Only items whose ancestors are all expanded.
    #[default]
    Visible,
    /// Every item, ignoring collapse.
    All,
}

/// External selection state consulted while flattening.
///
/// Hosts that keep selection on the items themselves can pass `()`, which
/// reports nothing and leaves the item flags in charge.
pub trait RowMarks<K> {
    /// Returns `true` if `key` is selected.
    fn is_selected(&self, key: &K) -> bool;

    /// Returns `true` if `key` is the current (anchor) key.
    fn is_current(&self, _key: &K) -> bool {
        false
    }
}

impl<K> RowMarks<K> for () {
    fn is_selected(&self, _key: &K) -> bool {
        false
    }
}

/// One row of a flatten pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowInfo<K> {
    /// The item's key.
    pub key: K,
    /// Key of the parent item; the outline root for top-level rows.
    pub parent: K,
    /// Structural path from the root.
    pub path: Path,
    /// Nesting depth (`path.len() - 1`).
    pub depth: usize,
    /// Whether the row is selected (item flag or external mark).
    pub selected: bool,
    /// Whether the row is the current (anchor) row.
    pub current: bool,
    /// Whether every ancestor is expanded.
    pub visible: bool,
    /// Ordinal among visible rows, or `None` if hidden.
    pub visible_offset: Option<usize>,
    /// Whether the item has children (shown or not).
    pub has_children: bool,
    /// Whether the item is collapsed.
    pub collapsed: bool,
}

/// Sorts rows into document order by path.
pub fn sort_document_order<K>(rows: &mut [RowInfo<K>]) {
    rows.sort_by(|a, b| Path::compare(&a.path, &b.path));
}

/// The result of a flatten pass.
///
/// Besides the ordered rows, `Rows` keeps the visible-ordinal table and a
/// key index, so ordinal, parent and ancestor queries are cheap. Parent links
/// are the keys recorded on each row; they never own anything.
#[derive(Clone)]
pub struct Rows<K> {
    root: K,
    mode: FlattenMode,
    rows: Vec<RowInfo<K>>,
    visible: Vec<usize>,
    index: HashMap<K, usize>,
}

impl<K: fmt::Debug> fmt::Debug for Rows<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rows")
            .field("root", &self.root)
            .field("mode", &self.mode)
            .field("rows", &self.rows.len())
            .field("visible", &self.visible.len())
            .finish_non_exhaustive()
    }
}

impl<K> Rows<K>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    /// Key of the outline root the rows were produced from.
    pub fn root(&self) -> K {
        self.root
    }

    /// The mode this pass ran in.
    pub fn mode(&self) -> FlattenMode {
        self.mode
    }

    /// Number of rows (visible or not).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in document order.
    pub fn as_slice(&self) -> &[RowInfo<K>] {
        &self.rows
    }

    /// Iterates all rows in document order.
    pub fn iter(&self) -> core::slice::Iter<'_, RowInfo<K>> {
        self.rows.iter()
    }

    /// Returns the row at `index` in document order.
    pub fn get(&self, index: usize) -> Option<&RowInfo<K>> {
        self.rows.get(index)
    }

    /// Returns the document-order index of `key`.
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Returns `true` if `key` has a row in this pass.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the row for `key`.
    pub fn row(&self, key: &K) -> Option<&RowInfo<K>> {
        self.index_of(key).map(|index| &self.rows[index])
    }

    /// Returns the row for `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` has no row. Callers use this where a missing row means
    /// the row cache is out of sync with the outline.
    pub fn expect_row(&self, key: &K) -> &RowInfo<K> {
        self.row(key)
            .unwrap_or_else(|| panic!("no row for key {key:?}; re-flatten after mutating"))
    }

    /// Number of visible rows.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Returns the visible row with ordinal `offset`.
    pub fn visible(&self, offset: usize) -> Option<&RowInfo<K>> {
        self.visible.get(offset).map(|&index| &self.rows[index])
    }

    /// Iterates visible rows in order.
    pub fn visible_rows(&self) -> impl Iterator<Item = &RowInfo<K>> + '_ {
        self.visible.iter().map(|&index| &self.rows[index])
    }

    /// Returns the visible ordinal of `key`, if it is visible.
    pub fn visible_offset_of(&self, key: &K) -> Option<usize> {
        self.row(key).and_then(|row| row.visible_offset)
    }

    /// Returns the parent key of `key`, or `None` for the root or an unknown key.
    pub fn parent_of(&self, key: &K) -> Option<K> {
        self.row(key).map(|row| row.parent)
    }

    /// Iterates the strict ancestors of `key`, innermost first, ending with the root.
    pub fn ancestors(&self, key: &K) -> Ancestors<'_, K> {
        Ancestors {
            rows: self,
            next: self.parent_of(key),
        }
    }

    /// Returns `true` if `key` is a strict descendant of `ancestor`.
    pub fn is_descendant_of(&self, key: &K, ancestor: &K) -> bool {
        self.ancestors(key).any(|k| k == *ancestor)
    }

    /// Exclusive end of the subtree that starts at document index `start`.
    ///
    /// Rows `start + 1 .. end` are the descendants of `rows[start]` present in
    /// this pass.
    pub fn subtree_end(&self, start: usize) -> usize {
        let Some(first) = self.rows.get(start) else {
            return start;
        };
        let depth = first.depth;
        let mut end = start + 1;
        while end < self.rows.len() && self.rows[end].depth > depth {
            end += 1;
        }
        end
    }
}

impl<'a, K> IntoIterator for &'a Rows<K> {
    type Item = &'a RowInfo<K>;
    type IntoIter = core::slice::Iter<'a, RowInfo<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Iterator over the ancestors of a row; see [`Rows::ancestors`].
#[derive(Debug)]
pub struct Ancestors<'a, K> {
    rows: &'a Rows<K>,
    next: Option<K>,
}

impl<K> Iterator for Ancestors<'_, K>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    type Item = K;

    fn next(&mut self) -> Option<K> {
        let current = self.next?;
        self.next = self.rows.parent_of(&current);
        Some(current)
    }
}

impl<K, T> Outline<K, T>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    /// Flattens the outline using only item-level selection flags.
    ///
    /// ```rust
    /// use understory_outline::{FlattenMode, Item, Outline};
    ///
    /// let outline = Outline::new(
    ///     Item::new(0_u32, ())
    ///         .with_child(Item::new(1, ()).with_collapsed(true).with_child(Item::new(2, ())))
    ///         .with_child(Item::new(3, ())),
    /// );
    ///
    /// let visible = outline.flatten(FlattenMode::Visible);
    /// assert_eq!(visible.iter().map(|row| row.key).collect::<Vec<_>>(), [1, 3]);
    ///
    /// let all = outline.flatten(FlattenMode::All);
    /// assert!(!all.expect_row(&2).visible);
    /// ```
    pub fn flatten(&self, mode: FlattenMode) -> Rows<K> {
        self.flatten_with(mode, &())
    }

    /// Flattens the outline, consulting `marks` for external selection state.
    pub fn flatten_with(&self, mode: FlattenMode, marks: &impl RowMarks<K>) -> Rows<K> {
        let root = self.root();
        let mut out = Rows {
            root: *root.key(),
            mode,
            rows: Vec::new(),
            visible: Vec::new(),
            index: HashMap::new(),
        };
        let mut path = Path::root();
        walk(root, &mut path, false, mode, marks, &mut out);
        out
    }
}

fn walk<K, T>(
    parent: &Item<K, T>,
    path: &mut Path,
    hidden: bool,
    mode: FlattenMode,
    marks: &impl RowMarks<K>,
    out: &mut Rows<K>,
) where
    K: Copy + Eq + Hash,
{
    for (index, item) in parent.children().iter().enumerate() {
        path.push(index);

        let key = *item.key();
        let row_index = out.rows.len();
        let visible_offset = (!hidden).then(|| out.visible.len());
        if !hidden {
            out.visible.push(row_index);
        }
        out.index.insert(key, row_index);
        out.rows.push(RowInfo {
            key,
            parent: *parent.key(),
            path: path.clone(),
            depth: path.depth(),
            selected: item.is_selected() || marks.is_selected(&key),
            current: marks.is_current(&key),
            visible: !hidden,
            visible_offset,
            has_children: item.has_children(),
            collapsed: item.is_collapsed(),
        });

        if !item.is_collapsed() || mode == FlattenMode::All {
            walk(
                item,
                path,
                hidden || item.is_collapsed(),
                mode,
                marks,
                out,
            );
        }

        path.pop();
    }
}
