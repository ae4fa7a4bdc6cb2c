// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal bar chart composition.
//!
//! [`BarChartSpec`] owns layout inputs, model options, and guide specs. Building it against a
//! [`RecordSet`] produces a [`BarChart`]: the resolved layout, the [`ChartModel`], and the full
//! mark list (series, labels, axes, reference line, titles, annotations).

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::{Brush, Color};

use barviz_model::{
    ChartModel, ColorRamp, DisplayText, HoverText, ModelConfig, ModelError, RecordSet,
    ReferencePolicy,
};

use crate::axis::{AxisSpec, AxisStyle};
use crate::bar_mark::{BarMarkSpec, ValueLabelSpec};
use crate::layout::{ChartLayout, Margins, Size};
use crate::mark::{FontWeight, Mark, MarkId, TextAnchor, TextBaseline};
use crate::measure::TextMeasurer;
use crate::reference::ReferenceLineSpec;
use crate::text_mark::TextMarkSpec;
use crate::title::TitleSpec;
use crate::z_order;

/// A small note anchored to the lower-right corner of the plot, e.g. a data source.
#[derive(Clone, Debug)]
pub struct SourceNoteSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Note text.
    pub text: String,
    /// Inset from the plot's right edge.
    pub dx: f64,
    /// Distance below the plot bottom.
    pub dy: f64,
    /// Font size.
    pub font_size: f64,
    /// Fill paint.
    pub fill: Brush,
}

impl SourceNoteSpec {
    /// Creates a 10px grey note 10 units in from the right edge and 50 units below the plot.
    pub fn new(id: MarkId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            dx: 10.0,
            dy: 50.0,
            font_size: 10.0,
            fill: Brush::Solid(Color::from_rgb8(0x66, 0x66, 0x66)),
        }
    }

    /// Generates the note mark.
    pub fn mark(&self, plot: Rect) -> Mark {
        TextMarkSpec::new(
            self.id,
            Point::new(plot.x1 - self.dx, plot.y1 + self.dy),
            self.text.clone(),
        )
        .with_font_size(self.font_size)
        .with_fill(self.fill.clone())
        .with_anchor(TextAnchor::End)
        .with_baseline(TextBaseline::Alphabetic)
        .with_z_index(z_order::ANNOTATIONS)
        .mark()
    }
}

/// A horizontal bar chart description.
#[derive(Clone, Debug)]
pub struct BarChartSpec {
    /// Outer view size.
    pub view_size: Size,
    /// Margins around the plot.
    pub margins: Margins,
    /// Fraction of each category slot left as gap, in `[0, 1)`.
    pub padding: f64,
    /// Reference line policy.
    pub reference: ReferencePolicy,
    /// Ramp for the bar colors.
    pub ramp: ColorRamp,
    /// Bar marks.
    pub bars: BarMarkSpec,
    /// Optional value labels.
    pub value_labels: Option<ValueLabelSpec>,
    /// Optional magnitude axis (below the plot).
    pub x_axis: Option<AxisSpec>,
    /// Optional category axis (left of the plot).
    pub y_axis: Option<AxisSpec>,
    /// Optional reference line.
    pub reference_line: Option<ReferenceLineSpec>,
    /// Optional title.
    pub title: Option<TitleSpec>,
    /// Optional source note.
    pub source: Option<SourceNoteSpec>,
}

impl Default for BarChartSpec {
    fn default() -> Self {
        Self {
            view_size: Size::new(800.0, 500.0),
            margins: Margins::default(),
            padding: 0.2,
            reference: ReferencePolicy::Mean,
            ramp: ColorRamp::default(),
            bars: BarMarkSpec::new(Self::BAR_FAMILY),
            value_labels: Some(ValueLabelSpec::new(Self::VALUE_LABEL_FAMILY)),
            x_axis: Some(AxisSpec::bottom(Self::X_AXIS_FAMILY).with_tick_count(5)),
            y_axis: Some(AxisSpec::left(Self::Y_AXIS_FAMILY).with_style(AxisStyle {
                label_font_weight: FontWeight::BOLD,
                ..AxisStyle::default()
            })),
            reference_line: Some(ReferenceLineSpec::new(Self::REFERENCE_FAMILY)),
            title: None,
            source: None,
        }
    }
}

impl BarChartSpec {
    /// Id family of the bars.
    pub const BAR_FAMILY: u32 = 1;
    /// Id family of the value labels.
    pub const VALUE_LABEL_FAMILY: u32 = 2;
    /// Id family of the magnitude axis.
    pub const X_AXIS_FAMILY: u32 = 3;
    /// Id family of the category axis.
    pub const Y_AXIS_FAMILY: u32 = 4;
    /// Id family of the reference line and its label.
    pub const REFERENCE_FAMILY: u32 = 5;
    /// Id family reserved for the title and subtitle lines.
    pub const TITLE_FAMILY: u32 = 6;
    /// Id family of the source note.
    pub const SOURCE_FAMILY: u32 = 7;

    /// Sets the outer view size.
    pub fn with_view_size(mut self, view_size: Size) -> Self {
        self.view_size = view_size;
        self
    }

    /// Sets the plot margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the category padding fraction.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the reference line policy.
    pub fn with_reference(mut self, reference: ReferencePolicy) -> Self {
        self.reference = reference;
        self
    }

    /// Sets the color ramp.
    pub fn with_ramp(mut self, ramp: ColorRamp) -> Self {
        self.ramp = ramp;
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: TitleSpec) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets the source note text.
    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        self.source = Some(SourceNoteSpec::new(MarkId::new(Self::SOURCE_FAMILY, 0), text));
        self
    }

    /// Removes the value labels.
    pub fn without_value_labels(mut self) -> Self {
        self.value_labels = None;
        self
    }

    /// Removes the reference line.
    pub fn without_reference_line(mut self) -> Self {
        self.reference_line = None;
        self
    }

    /// Computes the layout.
    pub fn layout(&self) -> ChartLayout {
        ChartLayout::arrange(self.view_size, self.margins)
    }

    /// Returns the model configuration for a resolved layout.
    pub fn model_config(&self, layout: &ChartLayout) -> ModelConfig {
        ModelConfig::new(layout.plot.width(), layout.plot.height())
            .with_padding(self.padding)
            .with_reference(self.reference)
            .with_ramp(self.ramp.clone())
    }

    /// Builds the model and every mark for `records`.
    pub fn build(
        &self,
        records: &RecordSet,
        measurer: &dyn TextMeasurer,
    ) -> Result<BarChart, ModelError> {
        let layout = self.layout();
        let model = ChartModel::new(records, &self.model_config(&layout))?;
        let plot = layout.plot;

        let mut marks = self.bars.marks(plot, records, &model);
        if let Some(labels) = &self.value_labels {
            marks.extend(labels.marks(plot, records, &model));
        }
        if let Some(axis) = &self.x_axis {
            marks.extend(axis.linear_marks(plot, model.magnitude()));
        }
        if let Some(axis) = &self.y_axis {
            marks.extend(axis.category_marks(plot, model.category(), records));
        }
        if let Some(reference) = &self.reference_line {
            marks.extend(reference.marks(plot, &model));
        }
        if let Some(title) = &self.title {
            marks.extend(title.marks(measurer, plot));
        }
        if let Some(source) = &self.source {
            marks.push(source.mark(plot));
        }
        log::debug!("built bar chart: {} marks over plot {:?}", marks.len(), plot);

        Ok(BarChart {
            layout,
            model,
            marks,
        })
    }
}

/// A built chart: layout, model, and marks.
#[derive(Clone, Debug)]
pub struct BarChart {
    /// Resolved layout.
    pub layout: ChartLayout,
    /// The model the marks were generated from.
    pub model: ChartModel,
    /// Every generated mark, in generation order.
    pub marks: Vec<Mark>,
}

impl BarChart {
    /// Returns the marks sorted by `(z_index, id)`.
    pub fn paint_order(&self) -> Vec<&Mark> {
        let mut out: Vec<&Mark> = self.marks.iter().collect();
        out.sort_by_key(|m| (m.z_index, m.id));
        out
    }

    /// Returns the row of the bar under `point`, if any.
    pub fn row_at(&self, point: Point) -> Option<usize> {
        let plot = self.layout.plot;
        let row = self.model.category().scale().index_at(point.y - plot.y0)?;
        self.marks
            .iter()
            .filter(|m| m.row == Some(row))
            .find_map(Mark::as_rect)
            .filter(|r| r.rect.contains(point))
            .map(|_| row)
    }

    /// Asks `hover` for the text of the bar under `point`.
    pub fn hover_text(
        &self,
        point: Point,
        records: &RecordSet,
        hover: &dyn HoverText,
    ) -> Option<DisplayText> {
        let record = records.get(self.row_at(point)?)?;
        Some(hover.on_hover(record))
    }
}
