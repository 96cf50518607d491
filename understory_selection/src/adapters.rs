// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration helpers for other Understory crates.
//!
//! Modules in this file are behind feature flags so `understory_selection`
//! can remain usable in contexts that do not depend on those crates.
//!
//! - [`outline`] (`outline_adapter` feature): use
//!   [`understory_outline::Rows`] as the [`crate::TreeOrder`] for clicks, and
//!   a [`crate::Selection`] as the row marks of a flatten pass.

#[cfg(feature = "outline_adapter")]
pub mod outline;
