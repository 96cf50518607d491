// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolver configuration.

/// Geometry and mode settings for drop resolution.
///
/// ```rust
/// use understory_outline_drop::DropConfig;
///
/// let config = DropConfig::default().with_indent_unit(20.0).with_indicator_offset(8.0);
/// assert_eq!(config.indicator_left(2), 48.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DropConfig {
    /// Horizontal pixels per depth level.
    pub indent_unit: f64,
    /// Horizontal position of depth 0, relative to the pointer coordinate space.
    pub indicator_offset: f64,
    /// Only allow dropping into rows, never between them.
    pub non_reorderable: bool,
}

impl Default for DropConfig {
    fn default() -> Self {
        Self {
            indent_unit: 16.0,
            indicator_offset: 0.0,
            non_reorderable: false,
        }
    }
}

impl DropConfig {
    /// Sets [`DropConfig::indent_unit`].
    #[must_use]
    pub fn with_indent_unit(mut self, indent_unit: f64) -> Self {
        self.indent_unit = indent_unit;
        self
    }

    /// Sets [`DropConfig::indicator_offset`].
    #[must_use]
    pub fn with_indicator_offset(mut self, indicator_offset: f64) -> Self {
        self.indicator_offset = indicator_offset;
        self
    }

    /// Sets [`DropConfig::non_reorderable`].
    #[must_use]
    pub fn with_non_reorderable(mut self, non_reorderable: bool) -> Self {
        self.non_reorderable = non_reorderable;
        self
    }

    /// Left edge of a between indicator drawn at `depth`.
    #[must_use]
    pub fn indicator_left(&self, depth: usize) -> f64 {
        self.indicator_offset + self.indent_unit * depth as f64
    }
}
