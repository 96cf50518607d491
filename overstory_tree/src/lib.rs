// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Tree: a tree surface wiring outline, selection, and drag-and-drop.
//!
//! [`TreeSurface`] owns an [`Outline`](understory_outline::Outline) together
//! with everything a tree view keeps next to it:
//!
//! - the flattened [`Rows`](understory_outline::Rows) of the current pass,
//! - a [`Selection`](understory_selection::Selection) with tree-aware clicks,
//! - a [`DragSession`](understory_event_state::drag::DragSession) whose
//!   location is a resolved [`DropLocation`](understory_outline_drop::DropLocation).
//!
//! Every operation that changes one of these re-flattens synchronously and
//! tells the registered [`TreeObserver`]s what changed. Drop locations are
//! reported only when they differ from the last one.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use overstory_tree::{DropOutcome, TreeSurface};
//! use understory_event_state::drag::DropEffect;
//! use understory_outline::{Item, Outline};
//! use understory_outline_drop::{AcceptAll, Hover, UniformRows};
//! use understory_selection::Modifiers;
//!
//! let outline = Outline::new(
//!     Item::new(0_u32, "root")
//!         .with_child(Item::new(1, "x"))
//!         .with_child(Item::new(2, "y"))
//!         .with_child(Item::new(3, "z")),
//! );
//! let mut tree = TreeSurface::new(outline, |key| key + 100);
//!
//! tree.click(1, Modifiers::empty());
//! assert_eq!(tree.selection().items(), &[1]);
//!
//! // Drag "x" to the bottom edge of "y".
//! tree.begin_drag(1, Point::new(4.0, 10.0), DropEffect::Move);
//! let rows = tree.rows().clone();
//! let geometry = UniformRows::new(&rows, 20.0);
//! let pointer = Point::new(4.0, 39.0);
//! tree.drag_over(Hover::Row(1), pointer, &geometry, &AcceptAll);
//! assert_eq!(tree.drop(), DropOutcome::Moved(vec![1]));
//!
//! let order: Vec<u32> = tree.visible_rows().map(|row| row.key).collect();
//! assert_eq!(order, [2, 1, 3]);
//! ```
//!
//! Enable the `tracing` feature to emit debug events for selection, drag, and
//! mutation changes.
//!
//! This crate is `no_std` compatible.

#![no_std]

extern crate alloc;

mod observer;
mod surface;

pub use observer::TreeObserver;
pub use surface::{DropOutcome, TreeSurface};
