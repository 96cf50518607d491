// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row geometry providers.
//!
//! The resolver asks a [`RowGeometry`] for each row's rectangle after layout.
//! Entries belong to one flatten pass: rebuild or invalidate them whenever the
//! rows are re-flattened. A row without a rectangle is treated as a zero
//! rectangle at the origin.

use core::fmt::Debug;
use core::hash::{BuildHasher, Hash};

use hashbrown::HashMap;
use kurbo::Rect;
use understory_outline::Rows;

/// Supplies laid-out row rectangles.
pub trait RowGeometry<K> {
    /// Rectangle of the row for `key`, or `None` if it has not been laid out.
    fn row_rect(&self, key: &K) -> Option<Rect>;

    /// Vertical offset of the first row (the height of any header above the rows).
    fn header_offset(&self) -> f64 {
        0.0
    }
}

impl<K, F> RowGeometry<K> for F
where
    F: Fn(&K) -> Option<Rect>,
{
    fn row_rect(&self, key: &K) -> Option<Rect> {
        self(key)
    }
}

impl<K, S> RowGeometry<K> for HashMap<K, Rect, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn row_rect(&self, key: &K) -> Option<Rect> {
        self.get(key).copied()
    }
}

/// Fixed-height rows stacked below a header, in visible order.
///
/// ```rust
/// use kurbo::Rect;
/// use understory_outline::{FlattenMode, Item, Outline};
/// use understory_outline_drop::{RowGeometry, UniformRows};
///
/// let outline = Outline::new(
///     Item::new(0_u32, ()).with_child(Item::new(1, ())).with_child(Item::new(2, ())),
/// );
/// let rows = outline.flatten(FlattenMode::All);
/// let geometry = UniformRows::new(&rows, 20.0).with_header_offset(4.0).with_width(100.0);
///
/// assert_eq!(geometry.row_rect(&2), Some(Rect::new(0.0, 24.0, 100.0, 44.0)));
/// assert_eq!(geometry.row_rect(&0), None);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct UniformRows<'a, K> {
    rows: &'a Rows<K>,
    row_height: f64,
    header_offset: f64,
    width: f64,
}

impl<'a, K> UniformRows<'a, K> {
    /// Lays out the visible rows of `rows` at `row_height` each.
    #[must_use]
    pub fn new(rows: &'a Rows<K>, row_height: f64) -> Self {
        Self {
            rows,
            row_height,
            header_offset: 0.0,
            width: 0.0,
        }
    }

    /// Sets the height of the header above the first row.
    #[must_use]
    pub fn with_header_offset(mut self, header_offset: f64) -> Self {
        self.header_offset = header_offset;
        self
    }

    /// Sets the row width reported in each rectangle.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }
}

impl<K> RowGeometry<K> for UniformRows<'_, K>
where
    K: Copy + Eq + Hash + Debug,
{
    fn row_rect(&self, key: &K) -> Option<Rect> {
        let offset = self.rows.visible_offset_of(key)?;
        let y0 = self.header_offset + self.row_height * offset as f64;
        Some(Rect::new(0.0, y0, self.width, y0 + self.row_height))
    }

    fn header_offset(&self) -> f64 {
        self.header_offset
    }
}
