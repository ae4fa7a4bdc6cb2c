// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal bar and value label generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::{Brush, Color};

use barviz_model::{ChartModel, RecordSet, format_fixed};

use crate::mark::{Mark, MarkId, MarkPayload, RectMark, TextAnchor, TextBaseline};
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// One horizontal bar per record.
///
/// Bars start at the left edge of the plot, take their length from the magnitude scale,
/// their band from the category scale, and their fill from the color scale.
#[derive(Clone, Debug)]
pub struct BarMarkSpec {
    /// Id family; the bar for row `i` gets index `i`.
    pub family: u32,
    /// Rendering order hint ([`Mark::z_index`]).
    pub z_index: i32,
}

impl BarMarkSpec {
    /// Creates a bar mark spec.
    pub fn new(family: u32) -> Self {
        Self {
            family,
            z_index: z_order::SERIES_FILL,
        }
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates one rect mark per record, bound to its row.
    pub fn marks(&self, plot: Rect, records: &RecordSet, model: &ChartModel) -> Vec<Mark> {
        records
            .iter()
            .enumerate()
            .map(|(row, record)| {
                let band = model.bar_band(row);
                let y0 = plot.y0 + band.offset;
                let rect = Rect::new(
                    plot.x0,
                    y0,
                    plot.x0 + model.bar_length(record),
                    y0 + band.size,
                );
                Mark::new(
                    MarkId::for_row(self.family, row),
                    self.z_index,
                    MarkPayload::Rect(RectMark {
                        rect,
                        fill: Brush::Solid(model.bar_color(record)),
                    }),
                )
                .with_row(row)
            })
            .collect()
    }
}

/// A numeric label just past the end of each bar.
#[derive(Clone, Debug)]
pub struct ValueLabelSpec {
    /// Id family; the label for row `i` gets index `i`.
    pub family: u32,
    /// Gap between the bar end and the label.
    pub dx: f64,
    /// Decimals shown.
    pub digits: usize,
    /// Font size.
    pub font_size: f64,
    /// Fill paint.
    pub fill: Brush,
}

impl ValueLabelSpec {
    /// Creates a label spec: one decimal, 12px, dark grey, 5 units past the bar.
    pub fn new(family: u32) -> Self {
        Self {
            family,
            dx: 5.0,
            digits: 1,
            font_size: 12.0,
            fill: Brush::Solid(Color::from_rgb8(0x33, 0x33, 0x33)),
        }
    }

    /// Sets the number of decimals.
    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Generates one text mark per record, vertically centered on its band.
    pub fn marks(&self, plot: Rect, records: &RecordSet, model: &ChartModel) -> Vec<Mark> {
        records
            .iter()
            .enumerate()
            .map(|(row, record)| {
                let pos = Point::new(
                    plot.x0 + model.bar_length(record) + self.dx,
                    plot.y0 + model.bar_band(row).center(),
                );
                TextMarkSpec::new(
                    MarkId::for_row(self.family, row),
                    pos,
                    format_fixed(record.rate, self.digits),
                )
                .with_font_size(self.font_size)
                .with_fill(self.fill.clone())
                .with_anchor(TextAnchor::Start)
                .with_baseline(TextBaseline::Middle)
                .with_z_index(z_order::SERIES_LABELS)
                .mark()
                .with_row(row)
            })
            .collect()
    }
}
