// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer-agnostic marks.
//!
//! A mark is one drawable primitive in scene coordinates. Renderers should paint marks sorted
//! by `(z_index, id)` for a deterministic order.

extern crate alloc;

use alloc::string::String;

use kurbo::{Line, Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;
use smallvec::SmallVec;

/// Stable mark identity.
///
/// Chart-generated ids carry a family tag in the high 32 bits and a per-family index in the
/// low 32 bits, so families never overlap however many rows or ticks they hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    const INDEX_MASK: u64 = 0xFFFF_FFFF;

    /// Wraps a raw id.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Id of mark `index` within `family`. Only the low 32 bits of `index` are kept.
    pub const fn new(family: u32, index: u64) -> Self {
        Self(((family as u64) << 32) | (index & Self::INDEX_MASK))
    }

    /// Id for the mark of `row` in a family of per-row marks.
    pub const fn for_row(family: u32, row: usize) -> Self {
        Self::new(family, row as u64)
    }

    /// Returns the family tag.
    #[allow(clippy::cast_possible_truncation, reason = "shifted down to 32 bits")]
    pub const fn family(self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Returns the index within the family.
    pub const fn index(self) -> u64 {
        self.0 & Self::INDEX_MASK
    }
}

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor point.
    Start,
    /// Text is centered on the anchor point.
    Middle,
    /// Text ends at the anchor point.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The anchor point is the vertical middle of the text.
    Middle,
    /// The anchor point is on the alphabetic baseline.
    Alphabetic,
    /// The anchor point is the top of the text.
    Hanging,
}

/// CSS-style font weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Paint, width and optional dash pattern for stroked marks.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
    /// Alternating dash/gap lengths; empty for a solid line.
    pub dash: SmallVec<[f64; 4]>,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
            dash: SmallVec::new(),
        }
    }

    /// Convenience for a dashed stroke.
    pub fn dashed(brush: impl Into<Brush>, stroke_width: f64, dash: &[f64]) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
            dash: SmallVec::from_slice(dash),
        }
    }

    /// Returns `true` if a dash pattern is set.
    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// A filled rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectMark {
    /// Geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// A single line of unshaped text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// A stroked straight segment.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleMark {
    /// Segment geometry.
    pub line: Line,
    /// Stroke styling.
    pub stroke: StrokeStyle,
}

/// Drawable content of a [`Mark`].
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A filled rectangle.
    Rect(RectMark),
    /// A text run.
    Text(TextMark),
    /// A stroked segment.
    Rule(RuleMark),
}

/// One drawable primitive with identity and paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable id.
    pub id: MarkId,
    /// Rendering order hint; lower paints first.
    pub z_index: i32,
    /// Source record row for data-bound marks.
    pub row: Option<usize>,
    /// What to draw.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a mark that is not bound to a record.
    pub fn new(id: MarkId, z_index: i32, payload: MarkPayload) -> Self {
        Self {
            id,
            z_index,
            row: None,
            payload,
        }
    }

    /// Binds the mark to a record row.
    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    /// Returns the text payload, if this is a text mark.
    pub fn as_text(&self) -> Option<&TextMark> {
        match &self.payload {
            MarkPayload::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the rectangle payload, if this is a rect mark.
    pub fn as_rect(&self) -> Option<&RectMark> {
        match &self.payload {
            MarkPayload::Rect(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the rule payload, if this is a rule mark.
    pub fn as_rule(&self) -> Option<&RuleMark> {
        match &self.payload {
            MarkPayload::Rule(r) => Some(r),
            _ => None,
        }
    }
}
