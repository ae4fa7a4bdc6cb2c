// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal bar chart marks for `barviz_model`.
//!
//! This crate is a thin layer above `barviz_model`:
//! - **Layout** splits a view into a plot rectangle and margins.
//! - **Mark specs** turn the model's scales into rects, rules and text in view coordinates.
//! - **Composition** ([`BarChartSpec`]) assembles bars, value labels, axes, a reference line,
//!   titles and notes, and supports hover hit-testing.
//!
//! Text shaping and painting are out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod axis;
mod bar_chart;
mod bar_mark;
mod layout;
mod mark;
mod measure;
mod reference;
mod rule_mark;
mod text_mark;
mod title;
mod z_order;

pub use axis::{AxisOrient, AxisSpec, AxisStyle};
pub use bar_chart::{BarChart, BarChartSpec, SourceNoteSpec};
pub use bar_mark::{BarMarkSpec, ValueLabelSpec};
pub use layout::{ChartLayout, Margins, Size};
pub use mark::{
    FontWeight, Mark, MarkId, MarkPayload, RectMark, RuleMark, StrokeStyle, TextAnchor,
    TextBaseline, TextMark,
};
pub use measure::{HeuristicTextMeasurer, TextMeasurer, mark_bounds, text_bounds};
pub use reference::ReferenceLineSpec;
pub use rule_mark::RuleMarkSpec;
pub use text_mark::TextMarkSpec;
pub use title::TitleSpec;
pub use z_order::*;
