// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural paths: root→item sequences of sibling indices.
//!
//! A [`Path`] identifies a position in an [`Outline`](crate::Outline) by the
//! index of each item among its siblings, starting below the root. The empty
//! path addresses the root itself.
//!
//! Paths are totally ordered in document order (depth-first pre-order):
//! indices are compared lexicographically and a strict prefix sorts before
//! any longer path it prefixes, so an ancestor always sorts before its
//! descendants.
//!
//! ```rust
//! use core::cmp::Ordering;
//! use understory_outline::Path;
//!
//! let parent = Path::from_slice(&[1]);
//! let child = parent.child(0);
//! let uncle = Path::from_slice(&[2]);
//!
//! assert_eq!(Path::compare(&parent, &child), Ordering::Less);
//! assert_eq!(Path::compare(&child, &uncle), Ordering::Less);
//! assert!(parent.is_ancestor_of(&child));
//! ```
//!
//! Paths are only meaningful for the flatten pass that produced them. Any
//! structural mutation invalidates previously computed paths.

use core::cmp::Ordering;
use core::fmt;

use smallvec::SmallVec;

/// Inline capacity for path indices before spilling to the heap.
const INLINE_DEPTH: usize = 8;

/// Root→item sequence of sibling indices.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(SmallVec<[usize; INLINE_DEPTH]>);

impl Path {
    /// Returns the empty path, which addresses the root.
    #[must_use]
    pub fn root() -> Self {
        Self(SmallVec::new())
    }

    /// Builds a path from a slice of sibling indices.
    #[must_use]
    pub fn from_slice(indices: &[usize]) -> Self {
        Self(SmallVec::from_slice(indices))
    }

    /// Compares two paths in document order.
    ///
    /// Indices are compared pairwise; the first difference decides. If one
    /// path is a strict prefix of the other, the shorter (the ancestor) sorts
    /// first.
    #[must_use]
    pub fn compare(a: &Self, b: &Self) -> Ordering {
        for (x, y) in a.0.iter().zip(b.0.iter()) {
            match x.cmp(y) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        a.0.len().cmp(&b.0.len())
    }

    /// Returns the sibling indices.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Returns the number of indices in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the path has no indices.
    ///
    /// Equivalent to [`Path::is_root`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Depth of the addressed row: `len - 1`.
    ///
    /// Top-level rows have depth `0`. The root path also reports `0`.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Index of the addressed item among its siblings.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Path of the parent, or `None` for the root path.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            return None;
        }
        Some(Self(SmallVec::from_slice(&self.0[..self.0.len() - 1])))
    }

    /// Path of the child at `index` below this one.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut out = self.clone();
        out.0.push(index);
        out
    }

    /// Returns `true` if `self` is a strict prefix of `other`.
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self.0.len() < other.0.len() && other.0.starts_with(&self.0)
    }

    pub(crate) fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

impl Ord for Path {
    fn cmp(&self, other: &Self) -> Ordering {
        Self::compare(self, other)
    }
}

impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl AsRef<[usize]> for Path {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl From<&[usize]> for Path {
    fn from(indices: &[usize]) -> Self {
        Self::from_slice(indices)
    }
}

impl FromIterator<usize> for Path {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn p(indices: &[usize]) -> Path {
        Path::from_slice(indices)
    }

    #[test]
    fn prefix_sorts_before_extension() {
        assert_eq!(Path::compare(&p(&[0]), &p(&[0, 0])), Ordering::Less);
        assert_eq!(Path::compare(&p(&[0, 0]), &p(&[0])), Ordering::Greater);
        assert_eq!(Path::compare(&Path::root(), &p(&[0])), Ordering::Less);
    }

    #[test]
    fn first_difference_decides() {
        assert_eq!(Path::compare(&p(&[0, 5, 9]), &p(&[1])), Ordering::Less);
        assert_eq!(Path::compare(&p(&[2, 0]), &p(&[1, 7, 7])), Ordering::Greater);
        assert_eq!(Path::compare(&p(&[3, 1]), &p(&[3, 1])), Ordering::Equal);
    }

    #[test]
    fn sorting_yields_document_order() {
        let mut paths = vec![p(&[1]), p(&[0, 1]), p(&[0]), p(&[1, 0, 0]), p(&[0, 0])];
        paths.sort();
        let expected: Vec<Path> = vec![p(&[0]), p(&[0, 0]), p(&[0, 1]), p(&[1]), p(&[1, 0, 0])];
        assert_eq!(paths, expected);
    }

    #[test]
    fn parent_child_and_depth() {
        let path = p(&[2, 4]);
        assert_eq!(path.depth(), 1);
        assert_eq!(path.last(), Some(4));
        assert_eq!(path.parent(), Some(p(&[2])));
        assert_eq!(p(&[2]).parent(), Some(Path::root()));
        assert_eq!(Path::root().parent(), None);
        assert_eq!(path.child(0), p(&[2, 4, 0]));
    }

    #[test]
    fn ancestry_is_strict() {
        assert!(p(&[1]).is_ancestor_of(&p(&[1, 0])));
        assert!(Path::root().is_ancestor_of(&p(&[3])));
        assert!(!p(&[1]).is_ancestor_of(&p(&[1])));
        assert!(!p(&[1, 0]).is_ancestor_of(&p(&[1])));
        assert!(!p(&[1]).is_ancestor_of(&p(&[2, 0])));
    }

    #[test]
    fn deep_paths_spill_without_changing_order() {
        let deep: Path = (0..20).collect();
        let deeper = deep.child(0);
        assert_eq!(deep.len(), 20);
        assert!(deep.is_ancestor_of(&deeper));
        assert!(deep < deeper);
    }
}
