// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outline adapter: drive a [`Selection`] from `understory_outline` rows.
//!
//! [`Rows`] answers ordinal and parent queries for [`Selection::click`].
//! Flatten in [`FlattenMode::All`](understory_outline::FlattenMode::All) so
//! keys hidden under a collapsed ancestor stay selected; a
//! [`FlattenMode::Visible`](understory_outline::FlattenMode::Visible) pass
//! treats them as stale.
//!
//! ## Example
//!
//! ```rust
//! use understory_outline::{FlattenMode, Item, Outline};
//! use understory_selection::{Modifiers, Selection};
//!
//! let outline = Outline::new(
//!     Item::new(0_u32, ())
//!         .with_child(Item::new(1, ()).with_child(Item::new(2, ())))
//!         .with_child(Item::new(3, ())),
//! );
//! let rows = outline.flatten(FlattenMode::All);
//!
//! let mut selection = Selection::new();
//! selection.click(2, Modifiers::empty(), &rows);
//! selection.click(3, Modifiers::RANGE, &rows);
//! assert_eq!(selection.items(), &[2, 3]);
//!
//! // Feed the selection back into the next flatten pass.
//! let rows = outline.flatten_with(FlattenMode::All, &selection);
//! assert!(rows.expect_row(&2).selected);
//! assert!(rows.expect_row(&3).current);
//! ```

use core::fmt::Debug;
use core::hash::Hash;

use understory_outline::{RowMarks, Rows};

use crate::{Selection, TreeOrder};

impl<K> TreeOrder<K> for Rows<K>
where
    K: Copy + Eq + Hash + Debug,
{
    fn visible_index(&self, key: &K) -> Option<usize> {
        self.visible_offset_of(key)
    }

    fn visible_key(&self, index: usize) -> Option<&K> {
        self.visible(index).map(|row| &row.key)
    }

    fn visible_len(&self) -> usize {
        Self::visible_len(self)
    }

    fn parent(&self, key: &K) -> Option<&K> {
        self.row(key).map(|row| &row.parent)
    }

    fn contains(&self, key: &K) -> bool {
        Self::contains(self, key)
    }
}

impl<K: PartialEq> RowMarks<K> for Selection<K> {
    fn is_selected(&self, key: &K) -> bool {
        self.iter().any(|k| k == key)
    }

    fn is_current(&self, key: &K) -> bool {
        self.anchor() == Some(key)
    }
}
