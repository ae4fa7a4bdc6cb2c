// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover text for records.
//!
//! Pointer handling belongs to the rendering layer. When a record is hovered, the renderer asks
//! a [`HoverText`] implementation what to display and decides itself where and how to show it.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::format::format_grouped;
use crate::record::Record;

/// One `label: value` line of hover text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayLine {
    /// Emphasized label.
    pub label: String,
    /// Value text.
    pub value: String,
}

/// Text to show for a hovered record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayText {
    /// Lines in display order.
    pub lines: Vec<DisplayLine>,
}

impl DisplayText {
    /// Appends a line.
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.lines.push(DisplayLine {
            label: label.into(),
            value: value.into(),
        });
    }

    /// Appends a line, builder style.
    pub fn with_line(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(label, value);
        self
    }

    /// Joins the lines as `label: value`, one per line.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&line.label);
            out.push_str(": ");
            out.push_str(&line.value);
        }
        out
    }
}

/// Capability the rendering layer calls when a record is hovered.
pub trait HoverText {
    /// Returns the text to display for `record`.
    fn on_hover(&self, record: &Record) -> DisplayText;
}

impl<F> HoverText for F
where
    F: Fn(&Record) -> DisplayText,
{
    fn on_hover(&self, record: &Record) -> DisplayText {
        self(record)
    }
}

/// Default hover text: name, grouped population, and distance with a unit.
///
/// The population line is left out for records without a population.
#[derive(Clone, Debug)]
pub struct RecordTooltip {
    /// Label for the record name.
    pub name_label: String,
    /// Label for the population.
    pub population_label: String,
    /// Label for the distance.
    pub distance_label: String,
    /// Unit appended to the distance.
    pub distance_unit: String,
}

impl Default for RecordTooltip {
    fn default() -> Self {
        Self {
            name_label: String::from("Municipality"),
            population_label: String::from("Population"),
            distance_label: String::from("Distance to Nearest Hospital"),
            distance_unit: String::from("km"),
        }
    }
}

impl HoverText for RecordTooltip {
    fn on_hover(&self, record: &Record) -> DisplayText {
        let mut text = DisplayText::default();
        text.push(self.name_label.as_str(), record.name.as_str());
        if let Some(population) = record.population {
            text.push(self.population_label.as_str(), format_grouped(population));
        }
        text.push(
            self.distance_label.as_str(),
            alloc::format!("{} {}", record.distance, self.distance_unit),
        );
        text
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn default_tooltip_lists_name_population_and_distance() {
        let record = Record::new("Leticia", 34.3, 10.6).with_population(48_918);
        let text = RecordTooltip::default().on_hover(&record);
        assert_eq!(
            text.to_plain_text(),
            "Municipality: Leticia\nPopulation: 48,918\nDistance to Nearest Hospital: 10.6 km"
        );
    }

    #[test]
    fn population_line_is_skipped_when_absent() {
        let record = Record::new("City G", 2.9, 6.0);
        let text = RecordTooltip::default().on_hover(&record);
        assert_eq!(text.lines.len(), 2);
        assert_eq!(text.lines[1].value, "6 km");
    }

    #[test]
    fn closures_are_hover_text() {
        let hover = |r: &Record| DisplayText::default().with_line("Rate", alloc::format!("{}", r.rate));
        let text = hover.on_hover(&Record::new("A", 1.5, 0.0));
        assert_eq!(text.to_plain_text(), "Rate: 1.5");
    }
}
