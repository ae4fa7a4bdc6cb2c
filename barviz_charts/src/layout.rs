// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-margin chart layout.
//!
//! The view is split into a plot rectangle inset by explicit margins. Guides (axes, titles,
//! annotations) are drawn into the margins, relative to the plot.

use kurbo::Rect;

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in chart coordinate units.
    pub width: f64,
    /// Height in chart coordinate units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Space reserved around the plot, per side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Above the plot (title, subtitle, reference label).
    pub top: f64,
    /// Right of the plot (value labels of the longest bars).
    pub right: f64,
    /// Below the plot (x axis, source note).
    pub bottom: f64,
    /// Left of the plot (category labels).
    pub left: f64,
}

impl Margins {
    /// Creates margins.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(160.0, 50.0, 80.0, 180.0)
    }
}

/// Output of the arrange pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// Outer chart bounds, starting at the origin.
    pub view: Rect,
    /// The plot (data) rectangle.
    pub plot: Rect,
}

impl ChartLayout {
    /// Insets `view_size` by `margins`.
    ///
    /// Negative margins are treated as zero, and the plot never gets a negative size.
    pub fn arrange(view_size: Size, margins: Margins) -> Self {
        let view = Rect::new(0.0, 0.0, view_size.width.max(0.0), view_size.height.max(0.0));
        let x0 = margins.left.max(0.0).min(view.x1);
        let y0 = margins.top.max(0.0).min(view.y1);
        let x1 = (view.x1 - margins.right.max(0.0)).max(x0);
        let y1 = (view.y1 - margins.bottom.max(0.0)).max(y0);
        Self {
            view,
            plot: Rect::new(x0, y0, x1, y1),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn default_margins_leave_a_570_by_260_plot() {
        let layout = ChartLayout::arrange(Size::new(800.0, 500.0), Margins::default());
        assert_eq!(layout.plot, Rect::new(180.0, 160.0, 750.0, 420.0));
        assert_eq!(layout.plot.width(), 570.0);
        assert_eq!(layout.plot.height(), 260.0);
    }

    #[test]
    fn oversized_margins_collapse_the_plot() {
        let layout = ChartLayout::arrange(Size::new(100.0, 100.0), Margins::default());
        assert_eq!(layout.plot.width(), 0.0);
        assert_eq!(layout.plot.height(), 0.0);
    }
}
