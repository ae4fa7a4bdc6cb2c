// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart model: every scale and statistic a bar chart renderer needs, computed once.

use peniko::Color;

use crate::config::{ModelConfig, ReferencePolicy};
use crate::error::ModelError;
use crate::record::{Record, RecordSet};
use crate::scale::{
    Band, CategoryScale, ScaleLinear, ScaleSequential, category_scale, color_scale,
    magnitude_scale,
};
use crate::stats::Summary;

/// Scales and statistics derived from a [`RecordSet`].
///
/// The model is immutable. Build a new one if the records or the output size change.
#[derive(Clone, Debug)]
pub struct ChartModel {
    magnitude: ScaleLinear,
    category: CategoryScale,
    color: ScaleSequential,
    rate: Summary,
    reference: f64,
}

impl ChartModel {
    /// Validates `config` and derives every scale from `records`.
    pub fn new(records: &RecordSet, config: &ModelConfig) -> Result<Self, ModelError> {
        config.validate()?;
        let magnitude = magnitude_scale(records, config.output_width)?;
        let category = category_scale(records, config.output_height, config.padding)?;
        let color = color_scale(records, config.ramp.clone())?;
        let rate = Summary::of(records.records(), |r| r.rate)?;
        let reference = match config.reference {
            ReferencePolicy::Mean => rate.mean,
            ReferencePolicy::Fixed(value) => value,
        };
        log::debug!(
            "built chart model: {} rows, rate in [{}, {}], mean {}, reference {}",
            records.len(),
            rate.min,
            rate.max,
            rate.mean,
            reference
        );
        Ok(Self {
            magnitude,
            category,
            color,
            rate,
            reference,
        })
    }

    /// Magnitude scale: `rate -> [0, output_width]`.
    pub fn magnitude(&self) -> &ScaleLinear {
        &self.magnitude
    }

    /// Category scale: record name -> band.
    pub fn category(&self) -> &CategoryScale {
        &self.category
    }

    /// Color scale: `distance -> Color`.
    pub fn color(&self) -> &ScaleSequential {
        &self.color
    }

    /// Mean and extent of `rate`.
    pub fn rate_summary(&self) -> Summary {
        self.rate
    }

    /// Arithmetic mean of `rate`.
    pub fn mean(&self) -> f64 {
        self.rate.mean
    }

    /// Value the reference line marks, after applying the [`ReferencePolicy`].
    pub fn reference(&self) -> f64 {
        self.reference
    }

    /// Horizontal extent of the bar for `record`.
    pub fn bar_length(&self, record: &Record) -> f64 {
        self.magnitude.map(record.rate)
    }

    /// Fill color for `record`.
    pub fn bar_color(&self, record: &Record) -> Color {
        self.color.map(record.distance)
    }

    /// Band for the record at `row`.
    pub fn bar_band(&self, row: usize) -> Band {
        self.category.band(row)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::ColorRamp;

    fn records() -> RecordSet {
        RecordSet::new(vec![
            Record::new("A", 1.0, 2.0),
            Record::new("B", 2.0, 4.0),
            Record::new("C", 3.0, 6.0),
        ])
        .unwrap()
    }

    #[test]
    fn computes_every_output() {
        let records = records();
        let model = ChartModel::new(&records, &ModelConfig::new(300.0, 90.0)).unwrap();
        assert_eq!(model.mean(), 2.0);
        assert_eq!(model.reference(), 2.0);
        assert_eq!(model.magnitude().map(3.0), 300.0);
        assert!((model.bar_length(&records.records()[0]) - 100.0).abs() < 1e-9);

        let b = model.category().get("B").unwrap();
        assert!((b.offset - 33.0).abs() < 1e-9, "offset {}", b.offset);
        assert!((b.size - 24.0).abs() < 1e-9, "size {}", b.size);
        assert_eq!(model.bar_band(1), b);

        let ramp = ColorRamp::reds();
        assert_eq!(
            model.bar_color(&records.records()[2]).components,
            ramp.sample(1.0).components
        );
    }

    #[test]
    fn color_follows_distance_not_rate() {
        let records = RecordSet::new(vec![
            Record::new("Near", 9.0, 2.0),
            Record::new("Mid", 5.0, 4.0),
            Record::new("Far", 1.0, 6.0),
        ])
        .unwrap();
        let model = ChartModel::new(&records, &ModelConfig::new(300.0, 90.0)).unwrap();
        let ramp = ColorRamp::reds();
        let rows = records.records();
        assert_eq!(model.bar_color(&rows[0]).components, ramp.sample(0.0).components);
        assert_eq!(model.bar_color(&rows[1]).components, ramp.sample(0.5).components);
        assert_eq!(model.bar_color(&rows[2]).components, ramp.sample(1.0).components);

        let summary = model.rate_summary();
        assert_eq!((summary.min, summary.max), (1.0, 9.0));
        assert_eq!(summary.mean, model.mean());
    }

    #[test]
    fn fixed_reference_overrides_mean() {
        let config = ModelConfig::new(300.0, 90.0).with_reference(ReferencePolicy::Fixed(3.0));
        let model = ChartModel::new(&records(), &config).unwrap();
        assert_eq!(model.mean(), 2.0);
        assert_eq!(model.reference(), 3.0);
    }

    #[test]
    fn rejects_empty_records_and_bad_config() {
        let empty = RecordSet::new(vec![]).unwrap();
        assert_eq!(
            ChartModel::new(&empty, &ModelConfig::default()).unwrap_err(),
            ModelError::EmptyInput
        );
        let err = ChartModel::new(&records(), &ModelConfig::new(300.0, 90.0).with_padding(1.5))
            .unwrap_err();
        assert!(
            matches!(err, ModelError::InvalidParameter { name: "padding", .. }),
            "got {err:?}"
        );
    }
}
