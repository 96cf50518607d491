// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Event State: the drag gesture state machine for tree drag-and-drop.
//!
//! [`drag::DragSession`] tracks one drag gesture from start to its terminal
//! event. It records what is being dragged, how far the pointer has moved,
//! whether the drop would move or copy, and the drop location currently shown
//! to the user.
//!
//! ## Design Philosophy
//!
//! - **Minimal and focused**: the session knows nothing about trees, rows or
//!   geometry. Locations are an opaque type chosen by the host (for example
//!   `understory_outline_drop::DropLocation`).
//! - **Change-only reporting**: [`drag::DragSession::set_location`] reports
//!   whether the location actually changed, so indicator repaints and
//!   notifications fire once per change.
//! - **Unconditional teardown**: dropping and cancelling both clear the
//!   location and the dragged key, whatever state the gesture was in.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle ──start──▶ Dragging ──drop──▶ Dropped ──┐
//!                    │                         ├──start/reset──▶ …
//!                    └──────cancel──▶ Cancelled┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_event_state::drag::{DragPhase, DragSession, DropEffect};
//!
//! let mut drag = DragSession::<u32, &str>::new();
//! drag.start(7, Point::new(10.0, 10.0), DropEffect::Move);
//!
//! assert!(drag.set_location(Some("before 3")));
//! assert!(!drag.set_location(Some("before 3")));
//!
//! drag.set_effect(DropEffect::from_copy_modifier(true));
//! let outcome = drag.drop().unwrap();
//! assert_eq!(outcome.dragged, 7);
//! assert_eq!(outcome.location, Some("before 3"));
//! assert_eq!(outcome.effect, DropEffect::Copy);
//!
//! assert_eq!(drag.phase(), DragPhase::Dropped);
//! assert_eq!(drag.location(), None);
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod drag;
