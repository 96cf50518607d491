// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer position to [`DropLocation`].

use core::fmt::Debug;
use core::hash::Hash;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Point, Rect};
use understory_outline::{Placement, RowInfo, Rows};

use crate::{DropAcceptance, DropConfig, DropLocation, Indicator, RowGeometry};

/// Over-row threshold for snapping to the gap above.
const BEFORE_BAND: f64 = 0.25;
/// Over-row threshold for snapping to the gap below.
const AFTER_BAND: f64 = 0.75;
/// Split point between the gaps when the row itself is not a valid target.
const MIDPOINT: f64 = 0.5;

/// What the pointer is over.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Hover {
    /// The visible row with this ordinal.
    Row(usize),
    /// Background above the first row.
    Above,
    /// Background below the last row.
    Below,
}

/// Resolves pointer positions against one flatten pass.
///
/// Uses the visible rows of `rows` in order. The resolver is cheap to build;
/// create one per pointer event or keep it for the duration of a pass.
pub struct DropResolver<'a, K, G: ?Sized, A: ?Sized> {
    rows: &'a Rows<K>,
    geometry: &'a G,
    acceptance: &'a A,
    dragged: &'a [K],
    config: DropConfig,
}

impl<K: Debug, G: ?Sized, A: ?Sized> Debug for DropResolver<'_, K, G, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DropResolver")
            .field("rows", self.rows)
            .field("dragged", &self.dragged)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a, K, G, A> DropResolver<'a, K, G, A>
where
    K: Copy + Eq + Hash + Debug,
    G: RowGeometry<K> + ?Sized,
    A: DropAcceptance<K> + ?Sized,
{
    /// Creates a resolver for an external payload (nothing in the tree is dragged).
    pub fn new(rows: &'a Rows<K>, geometry: &'a G, acceptance: &'a A, config: DropConfig) -> Self {
        Self {
            rows,
            geometry,
            acceptance,
            dragged: &[],
            config,
        }
    }

    /// Sets the keys being dragged. Their subtrees are never valid parents.
    #[must_use]
    pub fn with_dragged(mut self, dragged: &'a [K]) -> Self {
        self.dragged = dragged;
        self
    }

    /// Resolves the drop location for `pointer` over `hover`.
    ///
    /// Returns `None` when no candidate is acceptable.
    pub fn resolve(&self, hover: Hover, pointer: Point) -> Option<DropLocation<K>> {
        let row = match hover {
            Hover::Row(index) => self.rows.visible(index).map(|row| (index, row)),
            Hover::Above | Hover::Below => None,
        };
        let Some((index, row)) = row else {
            return self.resolve_background(hover, pointer);
        };

        if self.config.non_reorderable {
            let over = self.over_location(row);
            if self.is_acceptable(&over) {
                return Some(over);
            }
            let parent = self.over_key(row.parent);
            return self.is_acceptable(&parent).then_some(parent);
        }

        let depth = self.drop_depth(pointer.x);
        let pos = self.drop_pos(&row.key, pointer.y);
        let before = self.between_location(index, depth);
        let over = self.over_location(row);
        let after = self.between_location(index + 1, depth);

        if self.is_acceptable(&over) {
            if pos < BEFORE_BAND && self.is_acceptable(&before) {
                Some(before)
            } else if pos > AFTER_BAND && self.is_acceptable(&after) {
                Some(after)
            } else {
                Some(over)
            }
        } else if pos < MIDPOINT && self.is_acceptable(&before) {
            Some(before)
        } else if self.is_acceptable(&after) {
            Some(after)
        } else {
            None
        }
    }

    fn resolve_background(&self, hover: Hover, pointer: Point) -> Option<DropLocation<K>> {
        let location = if self.config.non_reorderable {
            self.over_key(self.rows.root())
        } else {
            let index = match hover {
                Hover::Above => 0,
                Hover::Row(_) | Hover::Below => self.rows.visible_len(),
            };
            self.between_location(index, self.drop_depth(pointer.x))
        };
        self.is_acceptable(&location).then_some(location)
    }

    /// Requested drop depth for a horizontal pointer position.
    ///
    /// `max(0, round((x - indicator_offset) / indent_unit))`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the value is rounded and clamped to be non-negative before casting"
    )]
    pub fn drop_depth(&self, x: f64) -> usize {
        let DropConfig {
            indent_unit,
            indicator_offset,
            ..
        } = self.config;
        if indent_unit <= 0.0 || indent_unit.is_nan() {
            return 0;
        }
        let depth = ((x - indicator_offset) / indent_unit).round();
        if depth.is_nan() || depth <= 0.0 {
            0
        } else {
            depth as usize
        }
    }

    /// Fractional vertical position of `y` within the row for `key`, in `[0, 1]`.
    ///
    /// Rows without a usable height report `0.5`.
    #[must_use]
    pub fn drop_pos(&self, key: &K, y: f64) -> f64 {
        let rect = self.rect(key);
        let height = rect.height();
        if height <= 0.0 || height.is_nan() {
            return MIDPOINT;
        }
        let pos = (y - rect.y0) / height;
        if pos.is_nan() { MIDPOINT } else { pos.clamp(0.0, 1.0) }
    }

    /// Structural location of the gap before visible row `index`.
    ///
    /// At a dedent (the next row is shallower than the previous one, or there
    /// is no next row) `requested_depth` picks how many levels to climb from
    /// the previous row before appending.
    pub fn between_location(&self, index: usize, requested_depth: usize) -> DropLocation<K> {
        let len = self.rows.visible_len();
        if len == 0 {
            return DropLocation {
                placement: Placement::append(self.rows.root()),
                indicator: Indicator::Between {
                    top: self.geometry.header_offset(),
                    depth: 0,
                },
            };
        }

        let next = self.rows.visible(index);
        let prev = index
            .checked_sub(1)
            .and_then(|prev| self.rows.visible(prev.min(len - 1)));
        let Some(prev) = prev else {
            // Gap above the first row.
            return self.before_row(self.visible_row(0));
        };

        match next {
            Some(next) if next.depth >= prev.depth => self.before_row(next),
            Some(next) if requested_depth <= next.depth => self.before_row(next),
            _ => {
                let floor = next.map_or(0, |next| next.depth);
                let depth = requested_depth.clamp(floor, prev.depth);
                let climb = prev.depth - depth;
                let parent = self.rows.ancestors(&prev.key).nth(climb).unwrap_or_else(|| {
                    panic!("row {:?} at depth {} has fewer than {climb} ancestors", prev.key, prev.depth)
                });
                DropLocation {
                    placement: Placement::append(parent),
                    indicator: Indicator::Between {
                        top: self.rect(&prev.key).y1,
                        depth,
                    },
                }
            }
        }
    }

    /// Location that drops into `row`, appending to its children.
    pub fn over_location(&self, row: &RowInfo<K>) -> DropLocation<K> {
        self.over_key(row.key)
    }

    fn over_key(&self, key: K) -> DropLocation<K> {
        let indicator = if key == self.rows.root() {
            let top = self.geometry.header_offset();
            let bottom = self
                .rows
                .visible_len()
                .checked_sub(1)
                .and_then(|last| self.rows.visible(last))
                .map_or(top, |last| self.rect(&last.key).y1);
            Indicator::Over {
                top,
                height: (bottom - top).max(0.0),
            }
        } else {
            let rect = self.rect(&key);
            Indicator::Over {
                top: rect.y0,
                height: rect.height(),
            }
        };
        DropLocation {
            placement: Placement::append(key),
            indicator,
        }
    }

    /// Returns `true` if the host accepts `location` and it would not drop a
    /// dragged item into its own subtree.
    pub fn is_acceptable(&self, location: &DropLocation<K>) -> bool {
        let Placement { parent, before } = &location.placement;
        let inside_dragged = self
            .dragged
            .iter()
            .any(|dragged| parent == dragged || self.rows.is_descendant_of(parent, dragged));
        if inside_dragged {
            return false;
        }
        if self.dragged.is_empty() {
            self.acceptance.can_insert(parent, before.as_ref(), None)
        } else {
            self.dragged
                .iter()
                .all(|dragged| self.acceptance.can_insert(parent, before.as_ref(), Some(dragged)))
        }
    }

    fn before_row(&self, row: &RowInfo<K>) -> DropLocation<K> {
        DropLocation {
            placement: Placement::before(row.parent, row.key),
            indicator: Indicator::Between {
                top: self.rect(&row.key).y0,
                depth: row.depth,
            },
        }
    }

    fn visible_row(&self, index: usize) -> &'a RowInfo<K> {
        self.rows
            .visible(index)
            .unwrap_or_else(|| panic!("no visible row {index}"))
    }

    fn rect(&self, key: &K) -> Rect {
        self.geometry.row_rect(key).unwrap_or(Rect::ZERO)
    }
}

/// Resolves a drop in one call.
///
/// Equivalent to building a [`DropResolver`] with `dragged` and calling
/// [`DropResolver::resolve`].
pub fn resolve_drop<K, G, A>(
    rows: &Rows<K>,
    hover: Hover,
    pointer: Point,
    geometry: &G,
    dragged: &[K],
    acceptance: &A,
    config: DropConfig,
) -> Option<DropLocation<K>>
where
    K: Copy + Eq + Hash + Debug,
    G: RowGeometry<K> + ?Sized,
    A: DropAcceptance<K> + ?Sized,
{
    DropResolver::new(rows, geometry, acceptance, config)
        .with_dragged(dragged)
        .resolve(hover, pointer)
}
