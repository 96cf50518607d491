// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Outline: an owned item tree with flattening and structural mutation.
//!
//! This crate models the data side of a hierarchical list widget (file trees,
//! layer panels, document outlines). It owns the items, projects them into an
//! ordered row sequence, and performs move/copy operations that keep sibling
//! indices consistent. It does not paint anything and knows nothing about
//! pointer input; see `understory_outline_drop` for turning pointer geometry
//! into a [`Placement`], and `understory_selection` for click combinators.
//!
//! ## Concepts
//!
//! - [`Item`]: a node with a stable key, a host payload, owned children, and
//!   `collapsed`/`selected` flags.
//! - [`Outline`]: owns the root item. The root's children are the top-level
//!   rows; the root itself is never a row.
//! - [`Path`]: sibling indices from the root to an item, totally ordered in
//!   document order.
//! - [`Rows`]: the result of a flatten pass. Each [`RowInfo`] records its
//!   parent key, path, depth, and visibility. Parent links are keys, so rows
//!   never own or borrow the items they describe.
//! - [`Placement`]: a structural target (`parent` plus optional `before`
//!   sibling) consumed by [`Outline::move_rows`] and [`Outline::copy_rows`].
//!
//! Rows and paths are only valid for the pass that produced them. Re-flatten
//! after every structural change.
//!
//! ## Example
//!
//! ```rust
//! use understory_outline::{FlattenMode, Item, Outline, Placement};
//!
//! let mut outline = Outline::new(
//!     Item::new(0_u32, "root")
//!         .with_child(
//!             Item::new(1, "src")
//!                 .with_collapsed(true)
//!                 .with_child(Item::new(2, "lib.rs")),
//!         )
//!         .with_child(Item::new(3, "README.md")),
//! );
//!
//! // Collapsed children are omitted from the visible projection.
//! let rows = outline.flatten(FlattenMode::Visible);
//! let keys: Vec<_> = rows.iter().map(|row| row.key).collect();
//! assert_eq!(keys, [1, 3]);
//!
//! // The collapse-ignoring projection still reports them.
//! let all = outline.flatten(FlattenMode::All);
//! assert!(!all.expect_row(&2).visible);
//!
//! // Move README.md into src; the destination is expanded.
//! let moved = outline
//!     .move_rows(&[rows.expect_row(&3).clone()], &Placement::append(1))
//!     .unwrap();
//! assert_eq!(moved, [3]);
//!
//! let rows = outline.flatten(FlattenMode::Visible);
//! let keys: Vec<_> = rows.iter().map(|row| (row.key, row.depth)).collect();
//! assert_eq!(keys, [(1, 0), (2, 1), (3, 1)]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod flatten;
mod item;
mod mutate;
mod path;

pub use flatten::{Ancestors, FlattenMode, RowInfo, RowMarks, Rows, sort_document_order};
pub use item::{Item, Outline, OutlineError};
pub use mutate::{MutationError, Placement};
pub use path::Path;
