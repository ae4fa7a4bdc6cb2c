// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference (average) line.
//!
//! A dashed vertical rule across the plot at the model's reference value, with a label above the
//! plot. The value itself comes from [`barviz_model::ChartModel::reference`], so the chart
//! follows whichever [`barviz_model::ReferencePolicy`] the model was built with.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use barviz_model::{ChartModel, format_fixed};

use crate::mark::{Mark, MarkId, StrokeStyle, TextAnchor, TextBaseline};
use crate::rule_mark::RuleMarkSpec;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Reference line styling and label text.
#[derive(Clone, Debug)]
pub struct ReferenceLineSpec {
    /// Id family; the rule uses index 0, the label index 1.
    pub family: u32,
    /// Rule styling.
    pub stroke: StrokeStyle,
    /// Text placed before the formatted value.
    pub label_prefix: String,
    /// Decimals shown in the label.
    pub digits: usize,
    /// Horizontal offset of the label from the rule.
    pub label_dx: f64,
    /// Distance of the label above the plot top.
    pub label_dy: f64,
    /// Label font size.
    pub font_size: f64,
    /// Label fill paint.
    pub label_fill: Brush,
}

impl ReferenceLineSpec {
    /// Creates a red `5,5` dashed line labelled `"City Average: <value>"`.
    pub fn new(family: u32) -> Self {
        Self {
            family,
            stroke: StrokeStyle::dashed(css::RED, 1.0, &[5.0, 5.0]),
            label_prefix: String::from("City Average: "),
            digits: 1,
            label_dx: 5.0,
            label_dy: 10.0,
            font_size: 12.0,
            label_fill: Brush::Solid(css::RED),
        }
    }

    /// Sets the label prefix.
    pub fn with_label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.label_prefix = prefix.into();
        self
    }

    /// Sets the rule styling.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Returns the label text for `value`.
    pub fn label(&self, value: f64) -> String {
        let mut text = self.label_prefix.clone();
        text.push_str(&format_fixed(value, self.digits));
        text
    }

    /// Generates the rule and its label.
    pub fn marks(&self, plot: Rect, model: &ChartModel) -> Vec<Mark> {
        let value = model.reference();
        let x = plot.x0 + model.magnitude().map(value);
        let rule = RuleMarkSpec::vertical(MarkId::new(self.family, 0), x, plot.y0, plot.y1)
            .with_stroke(self.stroke.clone())
            .with_z_index(z_order::REFERENCE_RULES)
            .mark();
        let label = TextMarkSpec::new(
            MarkId::new(self.family, 1),
            Point::new(x + self.label_dx, plot.y0 - self.label_dy),
            self.label(value),
        )
        .with_font_size(self.font_size)
        .with_fill(self.label_fill.clone())
        .with_anchor(TextAnchor::Start)
        .with_baseline(TextBaseline::Alphabetic)
        .with_z_index(z_order::ANNOTATIONS)
        .mark();
        alloc::vec![rule, label]
    }
}
