// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree surface: one outline with its rows, selection and drag session.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use kurbo::Point;
use understory_event_state::drag::{DragOutcome, DragSession, DropEffect};
use understory_outline::{FlattenMode, MutationError, Outline, RowInfo, Rows};
use understory_outline_drop::{
    DropAcceptance, DropConfig, DropLocation, DropResolver, Hover, RowGeometry,
};
use understory_selection::{Modifiers, Selection};

use crate::TreeObserver;

/// Result of [`TreeSurface::drop`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome<K> {
    /// The sources were moved; their keys in document order.
    Moved(Vec<K>),
    /// Copies were inserted; the keys of the new top-level copies.
    Copied(Vec<K>),
    /// The drag ended without a valid drop location. Nothing changed.
    NoTarget,
    /// The outline refused the mutation. Nothing changed.
    Rejected(MutationError<K>),
    /// No drag was in progress.
    NotDragging,
}

/// An outline wired to its rows, selection, drag session and observers.
///
/// Rows are flattened in [`FlattenMode::All`] so selected keys survive
/// collapsing their ancestors. Every change that affects the rows re-flattens
/// synchronously before notifying observers.
pub struct TreeSurface<K, T> {
    outline: Outline<K, T>,
    rows: Rows<K>,
    selection: Selection<K>,
    drag: DragSession<K, DropLocation<K>>,
    config: DropConfig,
    observers: Vec<Box<dyn TreeObserver<K>>>,
    fresh_key: Box<dyn FnMut(&K) -> K>,
}

impl<K: fmt::Debug, T> fmt::Debug for TreeSurface<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeSurface")
            .field("rows", &self.rows)
            .field("selection", &self.selection)
            .field("drag", &self.drag)
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl<K, T> TreeSurface<K, T>
where
    K: Copy + Eq + Hash + fmt::Debug + 'static,
    T: Clone,
{
    /// Wraps `outline`. `fresh_key` mints keys for copied items.
    pub fn new(outline: Outline<K, T>, fresh_key: impl FnMut(&K) -> K + 'static) -> Self {
        let selection = Selection::new();
        let rows = outline.flatten_with(FlattenMode::All, &selection);
        Self {
            outline,
            rows,
            selection,
            drag: DragSession::new(),
            config: DropConfig::default(),
            observers: Vec::new(),
            fresh_key: Box::new(fresh_key),
        }
    }

    /// Sets the drop resolution settings.
    #[must_use]
    pub fn with_config(mut self, config: DropConfig) -> Self {
        self.config = config;
        self
    }

    /// Registers an observer. Observers are notified in registration order.
    pub fn add_observer(&mut self, observer: impl TreeObserver<K> + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The outline.
    pub fn outline(&self) -> &Outline<K, T> {
        &self.outline
    }

    /// All rows of the current pass, hidden ones included.
    pub fn rows(&self) -> &Rows<K> {
        &self.rows
    }

    /// Rows currently shown, in order.
    pub fn visible_rows(&self) -> impl Iterator<Item = &RowInfo<K>> + '_ {
        self.rows.visible_rows()
    }

    /// The selection.
    pub fn selection(&self) -> &Selection<K> {
        &self.selection
    }

    /// The drag session.
    pub fn drag(&self) -> &DragSession<K, DropLocation<K>> {
        &self.drag
    }

    /// Drop resolution settings.
    pub fn config(&self) -> &DropConfig {
        &self.config
    }

    /// Replaces the drop resolution settings.
    pub fn set_config(&mut self, config: DropConfig) {
        self.config = config;
    }

    /// Mutates the outline directly, then refreshes.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut Outline<K, T>) -> R) -> R {
        let result = f(&mut self.outline);
        self.refresh();
        result
    }

    /// Re-flattens the outline and drops stale or shadowed selection keys.
    ///
    /// A drag whose dragged row no longer exists is cancelled.
    pub fn refresh(&mut self) {
        self.rows = self.outline.flatten_with(FlattenMode::All, &self.selection);
        let retained = self.selection.retain_present(&self.rows);
        let pruned = self.selection.prune_ancestors(&self.rows);
        if retained || pruned {
            self.rows = self.outline.flatten_with(FlattenMode::All, &self.selection);
            self.notify_selection();
        }
        if self
            .drag
            .dragged()
            .is_some_and(|dragged| !self.rows.contains(dragged))
        {
            self.cancel_drag();
        }
        let Self {
            observers, rows, ..
        } = self;
        for observer in observers.iter_mut() {
            observer.rows_changed(rows);
        }
    }

    /// Applies a click on the row for `key`.
    ///
    /// Returns `true` if the selection changed.
    pub fn click(&mut self, key: K, modifiers: Modifiers) -> bool {
        if !self.selection.click(key, modifiers, &self.rows) {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            key = ?key,
            modifiers = ?modifiers,
            selected = self.selection.len(),
            "tree.selection_changed"
        );
        self.rows = self.outline.flatten_with(FlattenMode::All, &self.selection);
        self.notify_selection();
        true
    }

    /// Collapses or expands `key`. Returns `true` if the flag changed.
    pub fn set_collapsed(&mut self, key: &K, collapsed: bool) -> bool {
        if !self.outline.set_collapsed(key, collapsed) {
            return false;
        }
        self.refresh();
        true
    }

    /// Flips the collapse flag of `key`. Returns `false` for unknown keys.
    pub fn toggle_collapsed(&mut self, key: &K) -> bool {
        if !self.outline.toggle_collapsed(key) {
            return false;
        }
        self.refresh();
        true
    }

    /// Starts dragging the row for `key`.
    ///
    /// Only visible rows can be dragged. A drag already in progress is
    /// cancelled first. Returns `true` if the drag started.
    pub fn begin_drag(&mut self, key: K, pointer: Point, effect: DropEffect) -> bool {
        if self.rows.visible_offset_of(&key).is_none() {
            return false;
        }
        self.cancel_drag();
        self.drag.start(key, pointer, effect);
        #[cfg(feature = "tracing")]
        tracing::debug!(key = ?key, effect = ?effect, "tree.drag_started");
        true
    }

    /// Resolves the drop location under `pointer`.
    ///
    /// Observers hear about the location only when it differs from the
    /// previous one. Returns the current location.
    pub fn drag_over<G, A>(
        &mut self,
        hover: Hover,
        pointer: Point,
        geometry: &G,
        acceptance: &A,
    ) -> Option<&DropLocation<K>>
    where
        G: RowGeometry<K> + ?Sized,
        A: DropAcceptance<K> + ?Sized,
    {
        if !self.drag.is_dragging() {
            return None;
        }
        self.drag.update(pointer);
        let dragged = self.drag_sources();
        let location = DropResolver::new(&self.rows, geometry, acceptance, self.config)
            .with_dragged(&dragged)
            .resolve(hover, pointer);
        if self.drag.set_location(location) {
            #[cfg(feature = "tracing")]
            tracing::debug!(location = ?self.drag.location(), "tree.drop_location_changed");
            self.notify_location();
        }
        self.drag.location()
    }

    /// Switches between move and copy mid-drag. Returns `true` if it changed.
    pub fn set_drop_effect(&mut self, effect: DropEffect) -> bool {
        self.drag.set_effect(effect)
    }

    /// Ends the drag by dropping at the current location.
    ///
    /// The sources are every selected row when the dragged row is selected,
    /// otherwise just the dragged row. The outline is re-flattened before
    /// this returns.
    pub fn drop(&mut self) -> DropOutcome<K> {
        let sources: Vec<RowInfo<K>> = self
            .drag_sources()
            .iter()
            .filter_map(|key| self.rows.row(key).cloned())
            .collect();
        let had_location = self.drag.location().is_some();
        let outcome = self.drag.drop();
        if had_location {
            self.notify_location();
        }

        let Some(DragOutcome {
            location, effect, ..
        }) = outcome
        else {
            return DropOutcome::NotDragging;
        };
        let Some(location) = location else {
            #[cfg(feature = "tracing")]
            tracing::debug!("tree.drop_without_target");
            return DropOutcome::NoTarget;
        };

        let result = match effect {
            DropEffect::Move => self
                .outline
                .move_rows(&sources, &location.placement)
                .map(DropOutcome::Moved),
            DropEffect::Copy => self
                .outline
                .copy_rows(&sources, &location.placement, &mut *self.fresh_key)
                .map(DropOutcome::Copied),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            effect = ?effect,
            placement = ?location.placement,
            outcome = ?result,
            "tree.drop"
        );

        match result {
            Ok(outcome) => {
                self.refresh();
                outcome
            }
            Err(err) => DropOutcome::Rejected(err),
        }
    }

    /// Cancels the drag. Returns `true` if one was in progress.
    pub fn cancel_drag(&mut self) -> bool {
        let had_location = self.drag.location().is_some();
        let cancelled = self.drag.cancel();
        if had_location {
            self.notify_location();
        }
        #[cfg(feature = "tracing")]
        if cancelled {
            tracing::debug!("tree.drag_cancelled");
        }
        cancelled
    }

    /// Keys that move with the dragged row.
    fn drag_sources(&self) -> Vec<K> {
        let Some(&dragged) = self.drag.dragged() else {
            return Vec::new();
        };
        if self.selection.contains(&dragged) {
            self.selection.items().to_vec()
        } else {
            alloc::vec![dragged]
        }
    }

    fn notify_selection(&mut self) {
        let Self {
            observers,
            selection,
            rows,
            ..
        } = self;
        for observer in observers.iter_mut() {
            observer.selection_changed(selection, rows);
        }
    }

    fn notify_location(&mut self) {
        let Self { observers, drag, .. } = self;
        for observer in observers.iter_mut() {
            observer.drop_location_changed(drag.location());
        }
    }
}
