// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host acceptance policy for drop targets.

/// Decides whether a parent may receive a dragged payload.
///
/// The resolver never inspects payload semantics; it asks this policy and
/// separately guards against dropping an item into its own subtree.
///
/// Closures of the shape `Fn(&K, Option<&K>) -> bool` implement this trait.
///
/// ```rust
/// use understory_outline_drop::DropAcceptance;
///
/// // Only folders (even keys here) accept children.
/// let folders_only = |parent: &u32, _dragged: Option<&u32>| parent % 2 == 0;
/// assert!(folders_only.can_accept(&4, Some(&7)));
/// assert!(!folders_only.can_insert(&3, None, None));
/// ```
pub trait DropAcceptance<K> {
    /// Returns `true` if `parent` can take `dragged` as a child.
    ///
    /// `dragged` is `None` for external payloads that are not rows.
    fn can_accept(&self, parent: &K, dragged: Option<&K>) -> bool;

    /// Returns `true` if `dragged` may be inserted into `parent` before `before`.
    ///
    /// `before` is `None` for an append. Defaults to [`DropAcceptance::can_accept`].
    fn can_insert(&self, parent: &K, before: Option<&K>, dragged: Option<&K>) -> bool {
        let _ = before;
        self.can_accept(parent, dragged)
    }
}

impl<K, F> DropAcceptance<K> for F
where
    F: Fn(&K, Option<&K>) -> bool,
{
    fn can_accept(&self, parent: &K, dragged: Option<&K>) -> bool {
        self(parent, dragged)
    }
}

/// Accepts every structurally valid drop.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AcceptAll;

impl<K> DropAcceptance<K> for AcceptAll {
    fn can_accept(&self, _parent: &K, _dragged: Option<&K>) -> bool {
        true
    }
}
