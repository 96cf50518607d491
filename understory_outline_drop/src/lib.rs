// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Outline Drop: resolve pointer geometry to tree drop locations.
//!
//! While a row is dragged over a hierarchical list, every pointer move has to
//! answer "where would this land?". This crate answers it for the rows of an
//! [`understory_outline::Rows`] pass, producing a [`DropLocation`]: the
//! structural [`Placement`](understory_outline::Placement) to pass to
//! `Outline::move_rows`/`copy_rows`, plus an [`Indicator`] to draw.
//!
//! ## Two kinds of location
//!
//! - **Over**: drop into the hovered row, appending to its children.
//! - **Between**: insert at a gap between rows, at a chosen depth.
//!
//! The vertical position within the hovered row picks between them. With the
//! row itself acceptable, the top quarter snaps to the gap above and the
//! bottom quarter to the gap below. Otherwise the row is split at its middle.
//!
//! The horizontal position picks the depth of a gap. Where the rows dedent
//! (a nested subtree ends), dragging left climbs out of the nested levels:
//!
//! ```text
//! A              depth 0
//! └─ B           depth 1
//!    └─ C        depth 2
//! ─────────────  gap before D: depth 2 → append to B,
//!                              depth 1 → append to A,
//!                              depth 0 → before D
//! D              depth 0
//! ```
//!
//! ## Acceptance
//!
//! A host [`DropAcceptance`] policy decides which parents take which payloads.
//! Independently of the policy, a location whose parent is a dragged row or
//! lies inside a dragged subtree is never produced.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_outline::{FlattenMode, Item, Outline, Placement};
//! use understory_outline_drop::{AcceptAll, DropConfig, Hover, UniformRows, resolve_drop};
//!
//! let outline = Outline::new(
//!     Item::new(0_u32, ())
//!         .with_child(Item::new(1, ()).with_child(Item::new(2, ())))
//!         .with_child(Item::new(3, ())),
//! );
//! let rows = outline.flatten(FlattenMode::All);
//! let geometry = UniformRows::new(&rows, 20.0);
//!
//! // Near the bottom of the row for key 2, with the pointer at depth 0.
//! let location = resolve_drop(
//!     &rows,
//!     Hover::Row(1),
//!     Point::new(0.0, 39.0),
//!     &geometry,
//!     &[3],
//!     &AcceptAll,
//!     DropConfig::default(),
//! )
//! .unwrap();
//!
//! // Row 3 follows at depth 0, so the gap snaps to "before 3".
//! assert_eq!(location.placement, Placement::before(0, 3));
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

mod accept;
mod config;
mod geometry;
mod location;
mod resolve;

pub use accept::{AcceptAll, DropAcceptance};
pub use config::DropConfig;
pub use geometry::{RowGeometry, UniformRows};
pub use location::{DropLocation, Indicator};
pub use resolve::{DropResolver, Hover, resolve_drop};
