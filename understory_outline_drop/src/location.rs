// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved drop locations and their indicators.

use understory_outline::Placement;

/// How a drop location is drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Indicator {
    /// A horizontal bar at the gap between rows.
    Between {
        /// Vertical position of the bar.
        top: f64,
        /// Nesting depth the inserted rows will have.
        depth: usize,
    },
    /// A highlight over the row that will receive the drop.
    Over {
        /// Top of the highlighted row.
        top: f64,
        /// Height of the highlighted row.
        height: f64,
    },
}

/// A resolved drop target: where the rows go and how to show it.
///
/// Locations compare by value, so a host can skip repainting when the
/// pointer moves but the location stays the same.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DropLocation<K> {
    /// Structural target for the mutation.
    pub placement: Placement<K>,
    /// Visual cue for the user.
    pub indicator: Indicator,
}

impl<K> DropLocation<K> {
    /// Returns `true` for a reparent-into location.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.indicator, Indicator::Over { .. })
    }

    /// Returns `true` for an insert-between location.
    #[must_use]
    pub fn is_between(&self) -> bool {
        matches!(self.indicator, Indicator::Between { .. })
    }

    /// Depth of a between indicator.
    #[must_use]
    pub fn depth(&self) -> Option<usize> {
        match self.indicator {
            Indicator::Between { depth, .. } => Some(depth),
            Indicator::Over { .. } => None,
        }
    }
}
