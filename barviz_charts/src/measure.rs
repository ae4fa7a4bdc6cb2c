// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for layout.
//!
//! Shaping stays downstream, so chart code only needs rough extents. Callers can plug in a
//! real text measurement backend or use [`HeuristicTextMeasurer`].

use kurbo::Rect;

use crate::mark::{Mark, MarkPayload, TextAnchor, TextBaseline, TextMark};

/// A minimal text measurement interface.
pub trait TextMeasurer {
    /// Returns `(width, height)` in the same coordinate system as the marks.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// A tiny heuristic text measurer suitable for demos and early layout.
///
/// It assumes an average glyph width of ~0.6em and height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = 0.6 * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}

/// Estimates the bounds of a text mark from its anchor and baseline.
pub fn text_bounds(measurer: &dyn TextMeasurer, text: &TextMark) -> Rect {
    let (w, h) = measurer.measure(&text.text, text.font_size);
    let (x, y) = (text.pos.x, text.pos.y);
    let (x0, x1) = match text.anchor {
        TextAnchor::Start => (x, x + w),
        TextAnchor::Middle => (x - w * 0.5, x + w * 0.5),
        TextAnchor::End => (x - w, x),
    };
    let (y0, y1) = match text.baseline {
        TextBaseline::Middle => (y - h * 0.5, y + h * 0.5),
        // Roughly 0.8em ascent and 0.2em descent.
        TextBaseline::Alphabetic => (y - 0.8 * h, y + 0.2 * h),
        TextBaseline::Hanging => (y, y + h),
    };
    Rect::new(x0, y0, x1, y1)
}

/// Estimates the bounds of any mark.
pub fn mark_bounds(measurer: &dyn TextMeasurer, mark: &Mark) -> Rect {
    match &mark.payload {
        MarkPayload::Rect(r) => r.rect,
        MarkPayload::Rule(r) => Rect::from_points(r.line.p0, r.line.p1),
        MarkPayload::Text(t) => text_bounds(measurer, t),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Point;
    use peniko::Brush;

    use super::*;
    use crate::mark::FontWeight;

    #[test]
    fn anchors_shift_text_bounds() {
        let measurer = HeuristicTextMeasurer;
        let mut text = TextMark {
            pos: Point::new(100.0, 50.0),
            text: "abcde".into(),
            font_size: 10.0,
            font_weight: FontWeight::NORMAL,
            anchor: TextAnchor::End,
            baseline: TextBaseline::Middle,
            fill: Brush::default(),
        };
        assert_eq!(text_bounds(&measurer, &text), Rect::new(70.0, 45.0, 100.0, 55.0));
        text.anchor = TextAnchor::Middle;
        text.baseline = TextBaseline::Hanging;
        assert_eq!(text_bounds(&measurer, &text), Rect::new(85.0, 50.0, 115.0, 60.0));
    }
}
