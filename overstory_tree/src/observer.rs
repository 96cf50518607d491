// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notifications.

use understory_outline::Rows;
use understory_outline_drop::DropLocation;
use understory_selection::Selection;

/// Receives change notifications from a [`TreeSurface`](crate::TreeSurface).
///
/// All methods default to doing nothing. Notifications are delivered
/// synchronously, in the order the changes happen, from inside the call that
/// caused them.
pub trait TreeObserver<K> {
    /// The selection changed. `rows` already carries the new marks.
    fn selection_changed(&mut self, selection: &Selection<K>, rows: &Rows<K>) {
        let _ = (selection, rows);
    }

    /// The drop indicator moved, appeared, or (with `None`) went away.
    fn drop_location_changed(&mut self, location: Option<&DropLocation<K>>) {
        let _ = location;
    }

    /// The rows were rebuilt after a structural or collapse change.
    fn rows_changed(&mut self, rows: &Rows<K>) {
        let _ = rows;
    }
}
