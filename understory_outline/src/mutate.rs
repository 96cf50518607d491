// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Moving and copying rows to a [`Placement`].
//!
//! Both operations take the rows produced by the most recent flatten pass.
//! Sources are sorted into document order, de-duplicated, and any source that
//! lives inside another source's subtree is dropped (it travels with its
//! ancestor).
//!
//! ## Index correction
//!
//! A move removes every source before inserting. Removal runs from the last
//! source to the first, so removing a later sibling never shifts an earlier
//! one that is still pending. Each removed source that shares the destination
//! parent and sat before the insertion index shifts that index down by one:
//!
//! ```rust
//! use understory_outline::{FlattenMode, Item, Outline, Placement};
//!
//! let mut outline = Outline::new(
//!     Item::new("P", ())
//!         .with_child(Item::new("X", ()))
//!         .with_child(Item::new("Y", ()))
//!         .with_child(Item::new("Z", ())),
//! );
//! let rows = outline.flatten(FlattenMode::Visible);
//!
//! // Move X before Z: original index 2, corrected to 1.
//! outline
//!     .move_rows(&[rows.expect_row(&"X").clone()], &Placement::before("P", "Z"))
//!     .unwrap();
//!
//! let order: Vec<_> = outline.root().children().iter().map(|i| *i.key()).collect();
//! assert_eq!(order, ["Y", "X", "Z"]);
//! ```
//!
//! A copy removes nothing, so its insertion index is never corrected.

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashSet;

use crate::flatten::RowInfo;
use crate::item::{Item, Outline};
use crate::path::Path;

/// Structural target of a move or copy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement<K> {
    /// The item that receives the inserted children.
    pub parent: K,
    /// Insert before this child of `parent`; `None` appends.
    pub before: Option<K>,
}

impl<K> Placement<K> {
    /// Appends to the end of `parent`'s children.
    pub fn append(parent: K) -> Self {
        Self {
            parent,
            before: None,
        }
    }

    /// Inserts before `before`, which must be a child of `parent`.
    pub fn before(parent: K, before: K) -> Self {
        Self {
            parent,
            before: Some(before),
        }
    }
}

/// Error returned when a move or copy is rejected. No mutation has occurred.
#[derive(Clone, PartialEq, Eq)]
pub enum MutationError<K> {
    /// The placement's parent is not in the outline.
    UnknownParent(K),
    /// The `before` reference is not a child of the placement's parent.
    UnknownBefore {
        /// The placement's parent.
        parent: K,
        /// The missing sibling reference.
        before: K,
    },
    /// The placement's parent is a source or lies inside a source's subtree.
    Cycle {
        /// The placement's parent.
        parent: K,
        /// The source that contains it.
        source: K,
    },
    /// The outline root was passed as a source.
    RootSource,
    /// No source rows were given.
    NoSources,
    /// A copy would reuse a key that is already in the outline or in the batch.
    DuplicateKey(K),
}

impl<K: fmt::Debug> fmt::Debug for MutationError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownParent(parent) => write!(f, "UnknownParent({parent:?})"),
            Self::UnknownBefore { parent, before } => {
                write!(f, "UnknownBefore {{ parent: {parent:?}, before: {before:?} }}")
            }
            Self::Cycle { parent, source } => {
                write!(f, "Cycle {{ parent: {parent:?}, source: {source:?} }}")
            }
            Self::RootSource => f.write_str("RootSource"),
            Self::NoSources => f.write_str("NoSources"),
            Self::DuplicateKey(key) => write!(f, "DuplicateKey({key:?})"),
        }
    }
}

impl<K: fmt::Debug> fmt::Display for MutationError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownParent(parent) => write!(f, "drop parent {parent:?} is not in the outline"),
            Self::UnknownBefore { parent, before } => {
                write!(f, "{before:?} is not a child of drop parent {parent:?}")
            }
            Self::Cycle { parent, source } => write!(
                f,
                "dropping {source:?} into {parent:?} would make it its own descendant"
            ),
            Self::RootSource => f.write_str("the outline root cannot be moved or copied"),
            Self::NoSources => f.write_str("nothing to move or copy"),
            Self::DuplicateKey(key) => write!(f, "copied key {key:?} is already in use"),
        }
    }
}

impl<K: fmt::Debug> core::error::Error for MutationError<K> {}

impl<K, T> Outline<K, T>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    /// Moves `sources` to `placement`, returning the moved keys in document order.
    ///
    /// The destination parent is expanded so the moved rows are visible.
    ///
    /// # Panics
    ///
    /// Panics if a source row's path no longer leads to its key, meaning the
    /// rows were produced before a later mutation.
    pub fn move_rows(
        &mut self,
        sources: &[RowInfo<K>],
        placement: &Placement<K>,
    ) -> Result<Vec<K>, MutationError<K>> {
        let sources = self.prepare_sources(sources, placement)?;
        let parent_path = self
            .path_of(&placement.parent)
            .ok_or(MutationError::UnknownParent(placement.parent))?;
        let mut index = self.insertion_index(&parent_path, placement)?;

        let mut moved = Vec::with_capacity(sources.len());
        for (path, key) in sources.iter().rev() {
            let item = self.remove_at(path, key);
            if path.parent().as_ref() == Some(&parent_path)
                && path.last().is_some_and(|last| last < index)
            {
                index -= 1;
            }
            moved.push(item);
        }
        moved.reverse();

        let keys = moved.iter().map(|item| *item.key()).collect();
        // Removals may have shifted the parent's own path.
        let parent = self
            .find_mut(&placement.parent)
            .unwrap_or_else(|| unreachable!("guards keep the drop parent outside every source"));
        parent.set_collapsed(false);
        parent.children_mut().splice(index..index, moved);
        Ok(keys)
    }

    /// Copies `sources` to `placement`, returning the keys of the new top-level copies.
    ///
    /// Each source subtree is deep-cloned with keys from `fresh_key`. Sources
    /// stay where they are. The destination parent is expanded.
    ///
    /// Fails with [`MutationError::DuplicateKey`] if `fresh_key` returns a key
    /// already in the outline, or the same key twice.
    ///
    /// # Panics
    ///
    /// Panics if a source row's path no longer leads to its key.
    pub fn copy_rows(
        &mut self,
        sources: &[RowInfo<K>],
        placement: &Placement<K>,
        mut fresh_key: impl FnMut(&K) -> K,
    ) -> Result<Vec<K>, MutationError<K>>
    where
        T: Clone,
    {
        let sources = self.prepare_sources(sources, placement)?;
        let parent_path = self
            .path_of(&placement.parent)
            .ok_or(MutationError::UnknownParent(placement.parent))?;
        let index = self.insertion_index(&parent_path, placement)?;

        let copies: Vec<Item<K, T>> = sources
            .iter()
            .map(|(path, key)| self.source_at(path, key).clone_with_keys(&mut fresh_key))
            .collect();
        check_fresh_keys(self, &copies)?;
        let keys = copies.iter().map(|item| *item.key()).collect();

        let parent = self
            .item_at_mut(&parent_path)
            .unwrap_or_else(|| unreachable!("parent path was resolved above"));
        parent.set_collapsed(false);
        parent.children_mut().splice(index..index, copies);
        Ok(keys)
    }

    /// Sorts, de-duplicates and guards the sources. Nothing is mutated.
    fn prepare_sources(
        &self,
        sources: &[RowInfo<K>],
        placement: &Placement<K>,
    ) -> Result<Vec<(Path, K)>, MutationError<K>> {
        let root = self.root_key();
        if sources.is_empty() {
            return Err(MutationError::NoSources);
        }
        let mut sorted: Vec<(Path, K)> = sources
            .iter()
            .map(|row| (row.path.clone(), row.key))
            .collect();
        sorted.sort_by(|a, b| Path::compare(&a.0, &b.0));

        let mut kept: Vec<(Path, K)> = Vec::with_capacity(sorted.len());
        for (path, key) in sorted {
            if key == root || path.is_root() {
                return Err(MutationError::RootSource);
            }
            // Sorted order puts a subtree directly after its root.
            if let Some((last, _)) = kept.last()
                && (*last == path || last.is_ancestor_of(&path))
            {
                continue;
            }
            self.source_at(&path, &key);
            kept.push((path, key));
        }

        for (_, key) in &kept {
            if placement.parent == *key || self.is_descendant_of(&placement.parent, key) {
                return Err(MutationError::Cycle {
                    parent: placement.parent,
                    source: *key,
                });
            }
        }
        Ok(kept)
    }

    fn insertion_index(
        &self,
        parent_path: &Path,
        placement: &Placement<K>,
    ) -> Result<usize, MutationError<K>> {
        let parent = self
            .item_at(parent_path)
            .ok_or(MutationError::UnknownParent(placement.parent))?;
        match placement.before {
            None => Ok(parent.children().len()),
            Some(before) => parent
                .children()
                .iter()
                .position(|child| *child.key() == before)
                .ok_or(MutationError::UnknownBefore {
                    parent: placement.parent,
                    before,
                }),
        }
    }

    fn source_at(&self, path: &Path, key: &K) -> &Item<K, T> {
        match self.item_at(path) {
            Some(item) if item.key() == key => item,
            _ => panic!("row {key:?} at {path:?} is out of sync with the outline"),
        }
    }

    fn remove_at(&mut self, path: &Path, key: &K) -> Item<K, T> {
        let (Some(parent_path), Some(index)) = (path.parent(), path.last()) else {
            panic!("row {key:?} has an empty path");
        };
        let Some(parent) = self.item_at_mut(&parent_path) else {
            panic!("row {key:?} at {path:?} is out of sync with the outline");
        };
        let item = parent.children_mut().remove(index);
        debug_assert!(item.key() == key, "removed {:?}, expected {key:?}", item.key());
        item
    }
}

/// Rejects copies whose keys collide with the outline or with each other.
fn check_fresh_keys<K, T>(
    outline: &Outline<K, T>,
    copies: &[Item<K, T>],
) -> Result<(), MutationError<K>>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    let mut seen = HashSet::new();
    let mut stack: Vec<&Item<K, T>> = copies.iter().collect();
    while let Some(item) = stack.pop() {
        let key = *item.key();
        if !seen.insert(key) || outline.contains(&key) {
            return Err(MutationError::DuplicateKey(key));
        }
        stack.extend(item.children());
    }
    Ok(())
}
