// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart titles.
//!
//! The title and its subtitle lines are centered over the plot, at fixed distances above it.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::{Brush, Color};
use peniko::color::palette::css;

use crate::mark::{FontWeight, Mark, MarkId, TextAnchor, TextBaseline};
use crate::measure::TextMeasurer;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// A chart-level title with optional subtitle lines.
#[derive(Clone, Debug)]
pub struct TitleSpec {
    /// Stable mark id; subtitle line `i` uses the next index `1 + i` in the same family.
    pub id: MarkId,
    /// Title text (unshaped).
    pub text: String,
    /// Subtitle lines, top to bottom.
    pub subtitle: Vec<String>,
    /// Title font size.
    pub font_size: f64,
    /// Title font weight.
    pub font_weight: FontWeight,
    /// Subtitle font size.
    pub subtitle_font_size: f64,
    /// Title fill paint.
    pub fill: Brush,
    /// Subtitle fill paint.
    pub subtitle_fill: Brush,
    /// Distance from the plot top up to the title baseline.
    pub offset: f64,
    /// Distance from the plot top up to the first subtitle baseline.
    pub subtitle_offset: f64,
    /// Subtitle line height as a multiple of the measured text height.
    pub line_spacing: f64,
}

impl TitleSpec {
    /// Creates a bold 18px title 120 units above the plot.
    pub fn new(id: MarkId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            subtitle: Vec::new(),
            font_size: 18.0,
            font_weight: FontWeight::BOLD,
            subtitle_font_size: 12.0,
            fill: Brush::Solid(css::BLACK),
            subtitle_fill: Brush::Solid(Color::from_rgb8(0x66, 0x66, 0x66)),
            offset: 120.0,
            subtitle_offset: 90.0,
            line_spacing: 1.2,
        }
    }

    /// Appends a subtitle line.
    pub fn with_subtitle_line(mut self, line: impl Into<String>) -> Self {
        self.subtitle.push(line.into());
        self
    }

    /// Sets the title font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the title fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the subtitle fill paint.
    pub fn with_subtitle_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.subtitle_fill = fill.into();
        self
    }

    /// Sets the distances above the plot for the title and the first subtitle line.
    pub fn with_offsets(mut self, offset: f64, subtitle_offset: f64) -> Self {
        self.offset = offset;
        self.subtitle_offset = subtitle_offset;
        self
    }

    /// Emits the title and subtitle marks centered over `plot`.
    pub fn marks(&self, measurer: &dyn TextMeasurer, plot: Rect) -> Vec<Mark> {
        let x = 0.5 * (plot.x0 + plot.x1);
        let mut out = Vec::with_capacity(1 + self.subtitle.len());
        out.push(
            TextMarkSpec::new(self.id, Point::new(x, plot.y0 - self.offset), self.text.clone())
                .with_font_size(self.font_size)
                .with_font_weight(self.font_weight)
                .with_fill(self.fill.clone())
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Alphabetic)
                .with_z_index(z_order::TITLES)
                .mark(),
        );

        let mut y = plot.y0 - self.subtitle_offset;
        for (i, line) in self.subtitle.iter().enumerate() {
            let (_, h) = measurer.measure(line, self.subtitle_font_size);
            out.push(
                TextMarkSpec::new(
                    MarkId::new(self.id.family(), self.id.index() + 1 + i as u64),
                    Point::new(x, y),
                    line.clone(),
                )
                .with_font_size(self.subtitle_font_size)
                .with_fill(self.subtitle_fill.clone())
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Alphabetic)
                .with_z_index(z_order::TITLES)
                .mark(),
            );
            y += h * self.line_spacing;
        }
        out
    }
}
