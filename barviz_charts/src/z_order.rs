// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for chart-generated marks.
//!
//! Renderers should sort by `(z_index, MarkId)` for a deterministic tie-break.

/// Filled series marks (bars).
pub const SERIES_FILL: i32 = 0;
/// Per-bar value labels.
pub const SERIES_LABELS: i32 = 15;
/// Reference lines drawn over bars.
pub const REFERENCE_RULES: i32 = 20;

/// Axis domain line and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;

/// Annotation text (reference labels, source notes).
pub const ANNOTATIONS: i32 = 70;
/// Chart-level titles.
pub const TITLES: i32 = 80;
