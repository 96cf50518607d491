// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: the dragged key, pointer deltas, drop effect and current location.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragSession::start`], passing the dragged key, the
//!    initial pointer position and the initial [`DropEffect`].
//! 2) On each move event, call [`DragSession::update`] to get the movement
//!    delta, resolve a drop location, and record it with
//!    [`DragSession::set_location`]. Repaint only when it returns `true`.
//! 3) Finish with [`DragSession::drop`] (yielding a [`DragOutcome`]) or
//!    [`DragSession::cancel`]. Both clear the location and the dragged key.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_event_state::drag::{DragPhase, DragSession, DropEffect};
//!
//! let mut drag = DragSession::<u32, u32>::new();
//! drag.start(1, Point::new(10.0, 20.0), DropEffect::Move);
//!
//! // Move to (15, 25) - delta is (5, 5)
//! assert_eq!(drag.update(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//!
//! drag.set_location(Some(4));
//! assert!(drag.cancel());
//! assert_eq!(drag.phase(), DragPhase::Cancelled);
//! assert_eq!(drag.dragged(), None);
//! assert_eq!(drag.location(), None);
//! ```

use kurbo::{Point, Vec2};

/// Phase of a [`DragSession`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A key is being dragged.
    Dragging,
    /// The last gesture ended with a drop.
    Dropped,
    /// The last gesture was cancelled.
    Cancelled,
}

/// What a drop does with its sources.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DropEffect {
    /// Remove the sources and insert them at the target.
    #[default]
    Move,
    /// Insert deep copies at the target and leave the sources in place.
    Copy,
}

impl DropEffect {
    /// Maps the platform copy modifier (Alt/Option, Ctrl on some hosts) to an effect.
    #[must_use]
    pub fn from_copy_modifier(copy: bool) -> Self {
        if copy { Self::Copy } else { Self::Move }
    }
}

/// Result of a completed drop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DragOutcome<K, L> {
    /// The key that was dragged.
    pub dragged: K,
    /// The location shown when the drop happened, if any.
    pub location: Option<L>,
    /// The effect in force when the drop happened.
    pub effect: DropEffect,
}

/// State machine for one drag gesture at a time.
///
/// `K` is the dragged key type, `L` the host's drop location type.
#[derive(Clone, Debug)]
pub struct DragSession<K, L> {
    phase: DragPhase,
    dragged: Option<K>,
    start_pos: Option<Point>,
    last_pos: Option<Point>,
    effect: DropEffect,
    location: Option<L>,
}

impl<K, L> Default for DragSession<K, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, L> DragSession<K, L> {
    /// Creates an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
            dragged: None,
            start_pos: None,
            last_pos: None,
            effect: DropEffect::Move,
            location: None,
        }
    }

    /// Starts dragging `key` from `pos`.
    ///
    /// Starting while a drag is in progress replaces it; the old location is
    /// discarded.
    pub fn start(&mut self, key: K, pos: Point, effect: DropEffect) {
        self.phase = DragPhase::Dragging;
        self.dragged = Some(key);
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.effect = effect;
        self.location = None;
    }

    /// Records a new pointer position, returning the delta since the last one.
    ///
    /// Returns `None` when no drag is in progress.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        if self.phase != DragPhase::Dragging {
            return None;
        }
        let last = self.last_pos.replace(pos)?;
        Some(pos - last)
    }

    /// Offset of `current_pos` from the drag start.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        if self.phase != DragPhase::Dragging {
            return None;
        }
        self.start_pos.map(|start| current_pos - start)
    }

    /// Position the drag started from.
    #[must_use]
    pub fn start_position(&self) -> Option<Point> {
        self.start_pos
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// The key being dragged.
    #[must_use]
    pub fn dragged(&self) -> Option<&K> {
        self.dragged.as_ref()
    }

    /// The drop location currently shown.
    #[must_use]
    pub fn location(&self) -> Option<&L> {
        self.location.as_ref()
    }

    /// The drop effect in force.
    #[must_use]
    pub fn effect(&self) -> DropEffect {
        self.effect
    }

    /// Changes the drop effect, typically when the copy modifier is pressed or released.
    ///
    /// Returns `true` if the effect changed. Ignored outside a drag.
    pub fn set_effect(&mut self, effect: DropEffect) -> bool {
        if self.phase != DragPhase::Dragging || self.effect == effect {
            return false;
        }
        self.effect = effect;
        true
    }

    /// Ends the gesture with a drop.
    ///
    /// Returns `None` if no drag was in progress. The location and dragged key
    /// are cleared either way.
    pub fn drop(&mut self) -> Option<DragOutcome<K, L>> {
        let outcome = match (self.phase, self.dragged.take()) {
            (DragPhase::Dragging, Some(dragged)) => {
                self.phase = DragPhase::Dropped;
                Some(DragOutcome {
                    dragged,
                    location: self.location.take(),
                    effect: self.effect,
                })
            }
            _ => None,
        };
        self.clear();
        outcome
    }

    /// Ends the gesture without dropping.
    ///
    /// Returns `true` if a drag was in progress. The location and dragged key
    /// are cleared either way.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.phase == DragPhase::Dragging;
        if was_dragging {
            self.phase = DragPhase::Cancelled;
        }
        self.clear();
        was_dragging
    }

    /// Returns to [`DragPhase::Idle`], discarding any gesture in progress.
    pub fn reset(&mut self) {
        self.phase = DragPhase::Idle;
        self.clear();
    }

    fn clear(&mut self) {
        self.dragged = None;
        self.start_pos = None;
        self.last_pos = None;
        self.location = None;
        self.effect = DropEffect::Move;
    }
}

impl<K, L: PartialEq> DragSession<K, L> {
    /// Records the drop location resolved for the current pointer position.
    ///
    /// Returns `true` only if the location differs by value from the previous
    /// one. Ignored outside a drag.
    pub fn set_location(&mut self, location: Option<L>) -> bool {
        if self.phase != DragPhase::Dragging || self.location == location {
            return false;
        }
        self.location = location;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragging() -> DragSession<u32, u32> {
        let mut drag = DragSession::new();
        drag.start(1, Point::new(10.0, 20.0), DropEffect::Move);
        drag
    }

    #[test]
    fn new_session_is_idle() {
        let drag = DragSession::<u32, u32>::default();
        assert_eq!(drag.phase(), DragPhase::Idle);
        assert!(!drag.is_dragging());
        assert_eq!(drag.dragged(), None);
        assert_eq!(drag.start_position(), None);
    }

    #[test]
    fn start_sets_dragging_state() {
        let drag = dragging();
        assert!(drag.is_dragging());
        assert_eq!(drag.dragged(), Some(&1));
        assert_eq!(drag.start_position(), Some(Point::new(10.0, 20.0)));
        assert_eq!(drag.effect(), DropEffect::Move);
    }

    #[test]
    fn update_returns_delta_when_dragging() {
        let mut drag = dragging();
        assert_eq!(drag.update(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn update_returns_none_when_not_dragging() {
        let mut drag = DragSession::<u32, u32>::new();
        assert_eq!(drag.update(Point::new(15.0, 25.0)), None);
    }

    #[test]
    fn multiple_updates_track_incremental_deltas() {
        let mut drag = DragSession::<u32, u32>::new();
        drag.start(1, Point::new(0.0, 0.0), DropEffect::Move);

        assert_eq!(drag.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(drag.update(Point::new(10.0, 10.0)), Some(Vec2::new(2.0, 3.0)));
    }

    #[test]
    fn total_offset_calculates_from_start() {
        let mut drag = dragging();
        drag.update(Point::new(15.0, 25.0));
        assert_eq!(
            drag.total_offset(Point::new(20.0, 35.0)),
            Some(Vec2::new(10.0, 15.0))
        );
    }

    #[test]
    fn negative_movement_deltas() {
        let mut drag = DragSession::<u32, u32>::new();
        drag.start(1, Point::new(100.0, 100.0), DropEffect::Move);
        assert_eq!(drag.update(Point::new(90.0, 85.0)), Some(Vec2::new(-10.0, -15.0)));
    }

    #[test]
    fn set_location_reports_changes_only() {
        let mut drag = dragging();
        assert!(drag.set_location(Some(3)));
        assert!(!drag.set_location(Some(3)));
        assert!(drag.set_location(Some(4)));
        assert!(drag.set_location(None));
        assert!(!drag.set_location(None));
    }

    #[test]
    fn set_location_is_ignored_when_idle() {
        let mut drag = DragSession::<u32, u32>::new();
        assert!(!drag.set_location(Some(3)));
        assert_eq!(drag.location(), None);
    }

    #[test]
    fn drop_yields_outcome_and_clears() {
        let mut drag = dragging();
        drag.set_location(Some(9));
        assert!(drag.set_effect(DropEffect::Copy));
        assert!(!drag.set_effect(DropEffect::Copy));

        let outcome = drag.drop();
        assert_eq!(
            outcome,
            Some(DragOutcome {
                dragged: 1,
                location: Some(9),
                effect: DropEffect::Copy,
            })
        );
        assert_eq!(drag.phase(), DragPhase::Dropped);
        assert_eq!(drag.dragged(), None);
        assert_eq!(drag.location(), None);
        assert_eq!(drag.total_offset(Point::ZERO), None);
    }

    #[test]
    fn drop_without_location_still_reports_the_drag() {
        let mut drag = dragging();
        let outcome = drag.drop().unwrap();
        assert_eq!(outcome.location, None);
        assert_eq!(drag.drop(), None);
    }

    #[test]
    fn cancel_clears_and_is_terminal() {
        let mut drag = dragging();
        drag.set_location(Some(2));
        assert!(drag.cancel());
        assert_eq!(drag.phase(), DragPhase::Cancelled);
        assert_eq!(drag.location(), None);
        assert_eq!(drag.dragged(), None);

        assert!(!drag.cancel());
        assert_eq!(drag.drop(), None);
        assert_eq!(drag.phase(), DragPhase::Cancelled);
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut drag = dragging();
        drag.reset();
        assert_eq!(drag.phase(), DragPhase::Idle);
        assert_eq!(drag.dragged(), None);
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = dragging();
        drag.set_location(Some(5));
        drag.update(Point::new(12.0, 22.0));

        drag.start(2, Point::new(50.0, 60.0), DropEffect::Copy);
        assert_eq!(drag.dragged(), Some(&2));
        assert_eq!(drag.location(), None);
        assert_eq!(drag.effect(), DropEffect::Copy);
        assert_eq!(
            drag.total_offset(Point::new(55.0, 65.0)),
            Some(Vec2::new(5.0, 5.0))
        );
    }

    #[test]
    fn copy_modifier_maps_to_effect() {
        assert_eq!(DropEffect::from_copy_modifier(true), DropEffect::Copy);
        assert_eq!(DropEffect::from_copy_modifier(false), DropEffect::Move);
    }
}
