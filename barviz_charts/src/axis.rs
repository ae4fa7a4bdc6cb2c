// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! An axis is a domain line along one plot edge plus a tick and a label per tick value.
//! Linear scales get "nice" tick values; category scales get one tick per band center.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use barviz_model::{CategoryScale, RecordSet, ScaleLinear, format_tick};

use crate::mark::{FontWeight, Mark, MarkId, StrokeStyle, TextAnchor, TextBaseline};
use crate::rule_mark::RuleMarkSpec;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Axis styling.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis domain line and tick marks.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
    /// Font weight for tick labels.
    pub label_font_weight: FontWeight,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            rule: StrokeStyle::default(),
            label_fill: Brush::Solid(css::BLACK),
            label_font_size: 12.0,
            label_font_weight: FontWeight::NORMAL,
        }
    }
}

/// Which plot edge an axis sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// Below the plot; ticks run along x.
    Bottom,
    /// Left of the plot; ticks run along y.
    Left,
}

/// An axis specification.
#[derive(Clone, Debug)]
pub struct AxisSpec {
    /// Id family. The domain line uses index 0, tick `i` index `1 + 2i`, and its label
    /// index `2 + 2i`.
    pub family: u32,
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of ticks for linear scales.
    pub tick_count: usize,
    /// Tick line length, pointing away from the plot.
    pub tick_size: f64,
    /// Gap between the tick end and its label.
    pub tick_padding: f64,
    /// Whether to draw the domain line.
    pub show_domain: bool,
    /// Axis styling.
    pub style: AxisStyle,
}

impl AxisSpec {
    /// Creates an axis with 10 ticks, 6-unit ticks and 3 units of label padding.
    pub fn new(family: u32, orient: AxisOrient) -> Self {
        Self {
            family,
            orient,
            tick_count: 10,
            tick_size: 6.0,
            tick_padding: 3.0,
            show_domain: true,
            style: AxisStyle::default(),
        }
    }

    /// Creates a bottom axis.
    pub fn bottom(family: u32) -> Self {
        Self::new(family, AxisOrient::Bottom)
    }

    /// Creates a left axis.
    pub fn left(family: u32) -> Self {
        Self::new(family, AxisOrient::Left)
    }

    /// Sets the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets the tick length.
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Enables or disables the domain line.
    pub fn with_domain(mut self, show_domain: bool) -> Self {
        self.show_domain = show_domain;
        self
    }

    /// Sets the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Generates marks for a linear scale whose range starts at the plot's origin edge.
    ///
    /// Bottom axes grow rightwards from `plot.x0`; left axes grow upwards from `plot.y1`.
    pub fn linear_marks(&self, plot: Rect, scale: &ScaleLinear) -> Vec<Mark> {
        let step = scale.tick_step(self.tick_count);
        let ticks = scale.ticks(self.tick_count).into_iter().map(|v| {
            let pos = match self.orient {
                AxisOrient::Bottom => plot.x0 + scale.map(v),
                AxisOrient::Left => plot.y1 - scale.map(v),
            };
            (pos, format_tick(v, step))
        });
        self.marks(plot, ticks)
    }

    /// Generates marks for a category scale, labelled with the record names.
    pub fn category_marks(
        &self,
        plot: Rect,
        scale: &CategoryScale,
        records: &RecordSet,
    ) -> Vec<Mark> {
        let origin = match self.orient {
            AxisOrient::Bottom => plot.x0,
            AxisOrient::Left => plot.y0,
        };
        let ticks = records
            .iter()
            .enumerate()
            .map(|(row, record)| (origin + scale.band(row).center(), record.name.clone()));
        self.marks(plot, ticks)
    }

    fn marks(&self, plot: Rect, ticks: impl Iterator<Item = (f64, String)>) -> Vec<Mark> {
        let mut out = Vec::new();
        let rule = &self.style.rule;
        let tick_size = self.tick_size.abs();
        let label_gap = tick_size + self.tick_padding.max(0.0);

        if self.show_domain {
            let id = MarkId::new(self.family, 0);
            let domain = match self.orient {
                AxisOrient::Bottom => RuleMarkSpec::horizontal(id, plot.y1, plot.x0, plot.x1),
                AxisOrient::Left => RuleMarkSpec::vertical(id, plot.x0, plot.y0, plot.y1),
            };
            out.push(domain.with_stroke(rule.clone()).mark());
        }

        for (i, (pos, label)) in ticks.enumerate() {
            let tick_id = MarkId::new(self.family, 1 + 2 * i as u64);
            let label_id = MarkId::new(self.family, 2 + 2 * i as u64);
            let (tick, label_pos, anchor, baseline) = match self.orient {
                AxisOrient::Bottom => (
                    RuleMarkSpec::vertical(tick_id, pos, plot.y1, plot.y1 + tick_size),
                    Point::new(pos, plot.y1 + label_gap),
                    TextAnchor::Middle,
                    TextBaseline::Hanging,
                ),
                AxisOrient::Left => (
                    RuleMarkSpec::horizontal(tick_id, pos, plot.x0 - tick_size, plot.x0),
                    Point::new(plot.x0 - label_gap, pos),
                    TextAnchor::End,
                    TextBaseline::Middle,
                ),
            };
            out.push(tick.with_stroke(rule.clone()).mark());
            out.push(
                TextMarkSpec::new(label_id, label_pos, label)
                    .with_font_size(self.style.label_font_size)
                    .with_font_weight(self.style.label_font_weight)
                    .with_fill(self.style.label_fill.clone())
                    .with_anchor(anchor)
                    .with_baseline(baseline)
                    .with_z_index(z_order::AXIS_LABELS)
                    .mark(),
            );
        }

        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use barviz_model::{Record, category_scale};

    use super::*;
    use crate::mark::MarkPayload;

    fn labels(marks: &[Mark]) -> Vec<&str> {
        marks
            .iter()
            .filter_map(|m| m.as_text().map(|t| t.text.as_str()))
            .collect()
    }

    #[test]
    fn bottom_axis_places_nice_ticks_inside_the_plot() {
        let plot = Rect::new(180.0, 160.0, 750.0, 420.0);
        let scale = ScaleLinear::new((0.0, 47.6), (0.0, plot.width()));
        let marks = AxisSpec::bottom(1).with_tick_count(5).linear_marks(plot, &scale);

        assert_eq!(labels(&marks), vec!["0", "10", "20", "30", "40"]);
        let first = marks
            .iter()
            .find_map(|m| m.as_text())
            .expect("a tick label");
        assert_eq!(first.pos, Point::new(180.0, 429.0));
        assert_eq!(first.anchor, TextAnchor::Middle);

        // Domain line plus one tick rule per label.
        let rules = marks
            .iter()
            .filter(|m| matches!(m.payload, MarkPayload::Rule(_)))
            .count();
        assert_eq!(rules, 6);
    }

    #[test]
    fn left_axis_labels_every_band_center() {
        let records = RecordSet::new(vec![
            Record::new("Saldaña", 47.6, 7.3),
            Record::new("Capitanejo", 45.6, 4.5),
        ])
        .unwrap();
        let plot = Rect::new(100.0, 0.0, 300.0, 200.0);
        let scale = category_scale(&records, plot.height(), 0.2).unwrap();
        let style = AxisStyle {
            label_font_weight: FontWeight::BOLD,
            ..AxisStyle::default()
        };
        let marks = AxisSpec::left(1)
            .with_domain(false)
            .with_style(style)
            .category_marks(plot, &scale, &records);

        assert_eq!(labels(&marks), vec!["Saldaña", "Capitanejo"]);
        let second = marks
            .iter()
            .filter_map(|m| m.as_text())
            .nth(1)
            .expect("second label");
        assert_eq!(second.pos, Point::new(91.0, 150.0));
        assert_eq!(second.anchor, TextAnchor::End);
        assert_eq!(second.font_weight, FontWeight::BOLD);
    }
}
