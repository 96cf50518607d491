// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The owned item tree: [`Item`] nodes under an [`Outline`] root.

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashSet;

use crate::path::Path;

/// A node in the hierarchical structure.
///
/// Each item exclusively owns its children. There is no stored back-reference
/// to the parent; parent links are produced per flatten pass as keys on
/// [`RowInfo`](crate::RowInfo), so a row never keeps its parent alive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item<K, T> {
    key: K,
    data: T,
    children: Vec<Self>,
    collapsed: bool,
    selected: bool,
}

impl<K, T> Item<K, T> {
    /// Creates an expanded, unselected leaf.
    pub fn new(key: K, data: T) -> Self {
        Self {
            key,
            data,
            children: Vec::new(),
            collapsed: false,
            selected: false,
        }
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several children in order.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Sets the collapse flag.
    #[must_use]
    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    /// Sets the selection flag, for hosts that track selection on items.
    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// The item's key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The host payload.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Mutable access to the host payload.
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// The ordered children.
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Mutable access to the children.
    ///
    /// Callers must keep keys unique across the outline.
    pub fn children_mut(&mut self) -> &mut Vec<Self> {
        &mut self.children
    }

    /// Returns `true` if the item has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns `true` if the item's children are hidden from visible rows.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Sets the collapse flag.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    /// Returns the item-level selection flag.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Sets the item-level selection flag.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Number of descendants (excluding `self`).
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

impl<K: PartialEq, T> Item<K, T> {
    /// Finds `key` in this subtree (including `self`).
    pub fn find(&self, key: &K) -> Option<&Self> {
        if self.key == *key {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(key))
    }

    /// Finds `key` in this subtree (including `self`), mutably.
    pub fn find_mut(&mut self, key: &K) -> Option<&mut Self> {
        if self.key == *key {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(key))
    }

    /// Returns `true` if `key` is `self` or one of its descendants.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    fn path_to(&self, key: &K, path: &mut Path) -> bool {
        if self.key == *key {
            return true;
        }
        for (index, child) in self.children.iter().enumerate() {
            path.push(index);
            if child.path_to(key, path) {
                return true;
            }
            path.pop();
        }
        false
    }
}

impl<K, T: Clone> Item<K, T> {
    /// Deep-copies this subtree, assigning every node a fresh key.
    ///
    /// Collapse and selection flags are carried over.
    pub fn clone_with_keys(&self, fresh_key: &mut impl FnMut(&K) -> K) -> Self {
        Self {
            key: fresh_key(&self.key),
            data: self.data.clone(),
            children: self
                .children
                .iter()
                .map(|child| child.clone_with_keys(fresh_key))
                .collect(),
            collapsed: self.collapsed,
            selected: self.selected,
        }
    }
}

/// Error returned when an outline violates its structural invariants.
#[derive(Clone, PartialEq, Eq)]
pub enum OutlineError<K> {
    /// The same key appears more than once in the tree.
    DuplicateKey(K),
}

impl<K: fmt::Debug> fmt::Debug for OutlineError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey(key) => write!(f, "DuplicateKey({key:?})"),
        }
    }
}

impl<K: fmt::Debug> fmt::Display for OutlineError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey(key) => write!(f, "key {key:?} appears more than once"),
        }
    }
}

impl<K: fmt::Debug> core::error::Error for OutlineError<K> {}

/// An owned hierarchy of [`Item`]s below a root.
///
/// The root's children are the top-level rows. The root itself is never a
/// row: it cannot be selected or dragged, but it is a valid drop parent.
///
/// ```rust
/// use understory_outline::{Item, Outline};
///
/// let outline = Outline::new(
///     Item::new(0_u32, "root")
///         .with_child(Item::new(1, "src").with_child(Item::new(2, "lib.rs")))
///         .with_child(Item::new(3, "Cargo.toml")),
/// );
///
/// assert_eq!(outline.len(), 3);
/// assert_eq!(outline.parent_of(&2), Some(1));
/// assert_eq!(outline.path_of(&3).unwrap().as_slice(), &[1]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outline<K, T> {
    root: Item<K, T>,
}

impl<K, T> Outline<K, T>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    /// Wraps `root` as an outline.
    ///
    /// # Panics (debug only)
    ///
    /// Panics in debug builds if keys are not unique. Use
    /// [`Outline::try_new`] to check in all builds.
    pub fn new(root: Item<K, T>) -> Self {
        let outline = Self { root };
        #[cfg(debug_assertions)]
        if let Err(err) = outline.validate() {
            panic!("invalid outline: {err}");
        }
        outline
    }

    /// Wraps `root` as an outline after checking key uniqueness.
    pub fn try_new(root: Item<K, T>) -> Result<Self, OutlineError<K>> {
        let outline = Self { root };
        outline.validate()?;
        Ok(outline)
    }

    /// Checks that every key in the tree is unique.
    pub fn validate(&self) -> Result<(), OutlineError<K>> {
        let mut seen = HashSet::new();
        let mut stack: Vec<&Item<K, T>> = Vec::from([&self.root]);
        while let Some(item) = stack.pop() {
            if !seen.insert(item.key) {
                return Err(OutlineError::DuplicateKey(item.key));
            }
            stack.extend(item.children.iter());
        }
        Ok(())
    }

    /// The root item.
    pub fn root(&self) -> &Item<K, T> {
        &self.root
    }

    /// Mutable access to the root item.
    pub fn root_mut(&mut self) -> &mut Item<K, T> {
        &mut self.root
    }

    /// The root's key.
    pub fn root_key(&self) -> K {
        self.root.key
    }

    /// Consumes the outline, returning the root.
    pub fn into_root(self) -> Item<K, T> {
        self.root
    }

    /// Number of rows (all items except the root), ignoring collapse.
    pub fn len(&self) -> usize {
        self.root.descendant_count()
    }

    /// Returns `true` if the root has no children.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Finds the item with `key`, including the root.
    pub fn find(&self, key: &K) -> Option<&Item<K, T>> {
        self.root.find(key)
    }

    /// Finds the item with `key`, including the root, mutably.
    pub fn find_mut(&mut self, key: &K) -> Option<&mut Item<K, T>> {
        self.root.find_mut(key)
    }

    /// Returns `true` if `key` is present (including the root).
    pub fn contains(&self, key: &K) -> bool {
        self.root.contains(key)
    }

    /// Computes the current path of `key`. The root's path is empty.
    pub fn path_of(&self, key: &K) -> Option<Path> {
        let mut path = Path::root();
        self.root.path_to(key, &mut path).then_some(path)
    }

    /// Returns the key of `key`'s parent, or `None` for the root or an
    /// unknown key.
    pub fn parent_of(&self, key: &K) -> Option<K> {
        let parent = self.path_of(key)?.parent()?;
        self.item_at(&parent).map(|item| item.key)
    }

    /// Resolves a path to an item.
    pub fn item_at(&self, path: &Path) -> Option<&Item<K, T>> {
        let mut item = &self.root;
        for &index in path.as_slice() {
            item = item.children.get(index)?;
        }
        Some(item)
    }

    /// Resolves a path to an item, mutably.
    pub fn item_at_mut(&mut self, path: &Path) -> Option<&mut Item<K, T>> {
        let mut item = &mut self.root;
        for &index in path.as_slice() {
            item = item.children.get_mut(index)?;
        }
        Some(item)
    }

    /// Returns `true` if `key` is a strict descendant of `ancestor`.
    pub fn is_descendant_of(&self, key: &K, ancestor: &K) -> bool {
        if key == ancestor {
            return false;
        }
        self.find(ancestor).is_some_and(|item| item.contains(key))
    }

    /// Sets the collapse flag of `key`. Returns `true` if the flag changed.
    pub fn set_collapsed(&mut self, key: &K, collapsed: bool) -> bool {
        match self.find_mut(key) {
            Some(item) if item.collapsed != collapsed => {
                item.collapsed = collapsed;
                true
            }
            _ => false,
        }
    }

    /// Flips the collapse flag of `key`. Returns `false` if `key` is unknown.
    pub fn toggle_collapsed(&mut self, key: &K) -> bool {
        match self.find_mut(key) {
            Some(item) => {
                item.collapsed = !item.collapsed;
                true
            }
            None => false,
        }
    }

    /// Clears the collapse flag on every item.
    pub fn expand_all(&mut self) {
        fn expand<K, T>(item: &mut Item<K, T>) {
            item.collapsed = false;
            item.children.iter_mut().for_each(expand);
        }
        expand(&mut self.root);
    }
}
