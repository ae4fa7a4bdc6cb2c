// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale types and the builders that derive them from a record set.
//!
//! Scales map from data space into an output range that starts at zero; renderers
//! translate the results into their own coordinate space.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::Color;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::ModelError;
use crate::ramp::ColorRamp;
use crate::record::RecordSet;
use crate::stats::extent;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A zero-width domain maps every value to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns `true` if the domain has zero width.
    pub fn is_degenerate(&self) -> bool {
        self.domain.0 == self.domain.1
    }

    /// Returns “nice” tick values lying inside the domain.
    ///
    /// Ticks are spaced by 1, 2, or 5 times a power of ten, aiming for about `count` ticks.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut min, mut max) = self.domain;
        if count == 0 || !min.is_finite() || !max.is_finite() {
            return Vec::new();
        }
        if min == max {
            return alloc::vec![min];
        }
        if min > max {
            core::mem::swap(&mut min, &mut max);
        }
        let step = nice_step((max - min) / count as f64);
        if step == 0.0 {
            return alloc::vec![min, max];
        }

        let start = (min / step).ceil();
        let stop = (max / step).floor();
        let n_f = (stop - start).round();
        if !n_f.is_finite() || n_f < 0.0 {
            return Vec::new();
        }
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        let n = n_f as u64;
        (0..=n).map(|i| (start + i as f64) * step).collect()
    }

    /// Returns the spacing [`ScaleLinear::ticks`] uses for `count` ticks.
    pub fn tick_step(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        nice_step((self.domain.1 - self.domain.0).abs() / count as f64)
    }
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// A discrete band scale: `count` equal slots over a range, with padding.
///
/// Padding is measured in units of the slot step: `padding_inner` is the fraction of each step
/// left empty between adjacent bands, and `padding_outer` is the number of steps left empty
/// before the first and after the last band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale covering `count` bands over `range`, with no padding.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.0,
            padding_outer: 0.0,
        }
    }

    /// Sets inner and outer padding in step units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Splits each slot so that a fraction `padding` of it is gap, half above and half below.
    ///
    /// Every slot then has the same size (`span / count`), and band sizes plus gaps add up to
    /// the full range.
    pub fn with_uniform_padding(self, padding: f64) -> Self {
        self.with_padding(padding, 0.5 * padding)
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let (r0, r1) = self.range;
        let n = self.count as f64;
        let denom = (n - self.padding_inner + 2.0 * self.padding_outer).max(1.0);
        (r1 - r0).abs() / denom
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Returns the start offset of the band at `index`.
    pub fn offset(&self, index: usize) -> f64 {
        let step = self.step();
        self.start() + step * self.padding_outer + step * index as f64
    }

    /// Returns the band containing `position`, if any.
    ///
    /// Positions that fall in padding gaps return `None`.
    pub fn index_at(&self, position: f64) -> Option<usize> {
        let step = self.step();
        if step <= 0.0 || !position.is_finite() {
            return None;
        }
        let rel = position - self.start() - step * self.padding_outer;
        if rel < 0.0 {
            return None;
        }
        let slot = (rel / step).floor();
        if slot >= self.count as f64 {
            return None;
        }
        if rel - slot * step > self.band_width() {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "non-negative and below `count`"
        )]
        let index = slot as usize;
        Some(index)
    }

    fn start(&self) -> f64 {
        let (r0, r1) = self.range;
        r0.min(r1)
    }
}

/// Position and size of one category band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    /// Start of the band along the category axis.
    pub offset: f64,
    /// Size of the band along the category axis.
    pub size: f64,
}

impl Band {
    /// Returns the band center.
    pub fn center(&self) -> f64 {
        self.offset + 0.5 * self.size
    }
}

/// A band scale keyed by record name.
#[derive(Clone, Debug)]
pub struct CategoryScale {
    scale: ScaleBand,
    rows: HashMap<String, usize>,
}

impl CategoryScale {
    /// Returns the band for the record called `name`.
    pub fn get(&self, name: &str) -> Option<Band> {
        self.rows.get(name).map(|&row| self.band(row))
    }

    /// Returns the band for the record at `row`.
    ///
    /// Rows past the end still get a position; callers index with rows of the same set.
    pub fn band(&self, row: usize) -> Band {
        Band {
            offset: self.scale.offset(row),
            size: self.scale.band_width(),
        }
    }

    /// Returns the underlying positional scale.
    pub fn scale(&self) -> &ScaleBand {
        &self.scale
    }

    /// Returns the number of bands.
    pub fn len(&self) -> usize {
        self.scale.count()
    }

    /// Returns `true` if the scale has no bands.
    pub fn is_empty(&self) -> bool {
        self.scale.count() == 0
    }
}

/// A continuous scale from numbers to colors along a [`ColorRamp`].
#[derive(Clone, Debug)]
pub struct ScaleSequential {
    domain: (f64, f64),
    ramp: ColorRamp,
}

impl ScaleSequential {
    /// Creates a sequential scale over `domain`.
    pub fn new(domain: (f64, f64), ramp: ColorRamp) -> Self {
        Self { domain, ramp }
    }

    /// Maps a value to a color, clamping to the domain.
    ///
    /// A zero-width domain maps every value to the middle of the ramp.
    pub fn map(&self, x: f64) -> Color {
        let (d0, d1) = self.domain;
        let denom = d1 - d0;
        if denom == 0.0 {
            return self.ramp.sample(0.5);
        }
        self.ramp.sample((x - d0) / denom)
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the ramp.
    pub fn ramp(&self) -> &ColorRamp {
        &self.ramp
    }

    /// Returns `true` if the domain has zero width.
    pub fn is_degenerate(&self) -> bool {
        self.domain.0 == self.domain.1
    }
}

fn check_extent(name: &'static str, value: f64) -> Result<(), ModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ModelError::InvalidParameter { name, value })
    }
}

/// Builds the magnitude scale `[0, max(rate)] -> [0, output_width]`.
///
/// When every rate is zero the domain is degenerate and every value maps to `0`.
pub fn magnitude_scale(records: &RecordSet, output_width: f64) -> Result<ScaleLinear, ModelError> {
    check_extent("output_width", output_width)?;
    let (_, max) = extent(records.records(), |r| r.rate)?;
    if max == 0.0 {
        log::debug!("magnitude domain is degenerate; all bars have zero width");
    }
    Ok(ScaleLinear::new((0.0, max), (0.0, output_width)))
}

/// Builds one band per record, in input order, over `[0, output_height]`.
///
/// `padding` is the fraction of each slot left as gap and must lie in `[0, 1)`.
pub fn category_scale(
    records: &RecordSet,
    output_height: f64,
    padding: f64,
) -> Result<CategoryScale, ModelError> {
    check_extent("output_height", output_height)?;
    if !(0.0..1.0).contains(&padding) {
        return Err(ModelError::InvalidParameter {
            name: "padding",
            value: padding,
        });
    }
    if records.is_empty() {
        return Err(ModelError::EmptyInput);
    }
    let scale =
        ScaleBand::new((0.0, output_height), records.len()).with_uniform_padding(padding);
    let rows = records
        .iter()
        .enumerate()
        .map(|(row, r)| (r.name.clone(), row))
        .collect();
    Ok(CategoryScale { scale, rows })
}

/// Builds a sequential color scale over `[min(distance), max(distance)]`.
pub fn color_scale(records: &RecordSet, ramp: ColorRamp) -> Result<ScaleSequential, ModelError> {
    let domain = extent(records.records(), |r| r.distance)?;
    if domain.0 == domain.1 {
        log::debug!("color domain is degenerate; every bar gets the ramp midpoint");
    }
    Ok(ScaleSequential::new(domain, ramp))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::Record;

    fn set(rows: &[(&str, f64, f64)]) -> RecordSet {
        RecordSet::new(
            rows.iter()
                .map(|&(name, rate, distance)| Record::new(name, rate, distance))
                .collect(),
        )
        .unwrap()
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() <= 1e-9, "{a} != {b}");
    }

    #[test]
    fn magnitude_maps_max_to_width_and_zero_to_zero() {
        let records = set(&[("A", 10.0, 1.0), ("B", 20.0, 2.0)]);
        let s = magnitude_scale(&records, 100.0).unwrap();
        assert_close(s.map(20.0), 100.0);
        assert_close(s.map(10.0), 50.0);
        assert_close(s.map(0.0), 0.0);
    }

    #[test]
    fn magnitude_is_monotonic() {
        let records = set(&[("A", 47.6, 7.3), ("B", 45.6, 4.5), ("C", 27.2, 13.7)]);
        let s = magnitude_scale(&records, 570.0).unwrap();
        let mut prev = s.map(0.0);
        for i in 1..=100 {
            let x = 47.6 * f64::from(i) / 100.0;
            let y = s.map(x);
            assert!(y >= prev, "not monotonic at {x}");
            prev = y;
        }
        assert_close(prev, 570.0);
    }

    #[test]
    fn all_zero_rates_map_to_zero_width() {
        let records = set(&[("A", 0.0, 1.0), ("B", 0.0, 2.0)]);
        let s = magnitude_scale(&records, 100.0).unwrap();
        assert!(s.is_degenerate());
        assert_eq!(s.map(0.0), 0.0);
        assert_eq!(s.map(5.0), 0.0);
    }

    #[test]
    fn builders_reject_empty_input_and_bad_parameters() {
        let empty = RecordSet::new(vec![]).unwrap();
        assert_eq!(
            magnitude_scale(&empty, 100.0).unwrap_err(),
            ModelError::EmptyInput
        );
        assert_eq!(
            category_scale(&empty, 100.0, 0.2).unwrap_err(),
            ModelError::EmptyInput
        );
        assert_eq!(
            color_scale(&empty, ColorRamp::reds()).unwrap_err(),
            ModelError::EmptyInput
        );

        let records = set(&[("A", 1.0, 1.0)]);
        assert!(matches!(
            magnitude_scale(&records, 0.0),
            Err(ModelError::InvalidParameter {
                name: "output_width",
                ..
            })
        ), "zero width must be rejected");
        assert!(matches!(
            category_scale(&records, 100.0, 1.0),
            Err(ModelError::InvalidParameter {
                name: "padding",
                ..
            })
        ), "padding of 1 must be rejected");
        assert!(matches!(
            category_scale(&records, f64::NAN, 0.0),
            Err(ModelError::InvalidParameter {
                name: "output_height",
                ..
            })
        ), "NaN height must be rejected");
    }

    #[test]
    fn two_bands_of_eighty_with_twenty_gap() {
        let records = set(&[("A", 10.0, 1.0), ("B", 20.0, 2.0)]);
        let c = category_scale(&records, 200.0, 0.2).unwrap();
        let a = c.get("A").unwrap();
        let b = c.get("B").unwrap();
        assert_close(a.size, 80.0);
        assert_close(b.size, 80.0);
        assert_close(b.offset - (a.offset + a.size), 20.0);
        assert_close(a.offset, 10.0);
        assert_close(200.0 - (b.offset + b.size), 10.0);
        assert!(c.get("C").is_none());
    }

    #[test]
    fn bands_and_gaps_fill_the_height() {
        for n in 1..=12_usize {
            for &p in &[0.0, 0.1, 0.2, 0.5, 0.95] {
                let rows: Vec<_> = (0..n)
                    .map(|i| Record::new(alloc::format!("m{i}"), 1.0, 1.0))
                    .collect();
                let records = RecordSet::new(rows).unwrap();
                let c = category_scale(&records, 260.0, p).unwrap();
                let step = c.scale().step();
                let bands: f64 = (0..n).map(|i| c.band(i).size).sum();
                let gaps = n as f64 * step * p;
                assert_close(bands + gaps, 260.0);
                for i in 1..n {
                    let prev = c.band(i - 1);
                    assert!(
                        c.band(i).offset >= prev.offset + prev.size - 1e-9,
                        "bands overlap at n={n} p={p}"
                    );
                }
            }
        }
    }

    #[test]
    fn band_index_at_skips_gaps() {
        let band = ScaleBand::new((0.0, 200.0), 2).with_uniform_padding(0.2);
        assert_eq!(band.index_at(5.0), None);
        assert_eq!(band.index_at(50.0), Some(0));
        assert_eq!(band.index_at(95.0), None);
        assert_eq!(band.index_at(150.0), Some(1));
        assert_eq!(band.index_at(195.0), None);
        assert_eq!(band.index_at(-1.0), None);
    }

    #[test]
    fn degenerate_color_domain_is_constant() {
        let records = set(&[("A", 1.0, 3.0), ("B", 2.0, 3.0)]);
        let s = color_scale(&records, ColorRamp::reds()).unwrap();
        assert!(s.is_degenerate());
        let c0 = s.map(0.0);
        for x in [3.0, 10.0, -4.0, f64::NAN] {
            assert_eq!(s.map(x).components, c0.components);
        }
    }

    #[test]
    fn color_scale_hits_ramp_endpoints() {
        let records = set(&[("A", 1.0, 4.5), ("B", 2.0, 27.3)]);
        let ramp = ColorRamp::reds();
        let s = color_scale(&records, ramp.clone()).unwrap();
        assert_eq!(s.domain(), (4.5, 27.3));
        assert_eq!(s.map(4.5).components, ramp.sample(0.0).components);
        assert_eq!(s.map(27.3).components, ramp.sample(1.0).components);
        assert_eq!(s.map(100.0).components, ramp.sample(1.0).components);
    }

    #[test]
    fn ticks_stay_inside_domain() {
        let s = ScaleLinear::new((0.0, 47.6), (0.0, 570.0));
        assert_eq!(s.ticks(5), vec![0.0, 10.0, 20.0, 30.0, 40.0]);
        assert_eq!(s.tick_step(5), 10.0);

        let s = ScaleLinear::new((0.0, 5.2), (0.0, 570.0));
        assert_eq!(s.ticks(5), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);

        let s = ScaleLinear::new((3.0, 3.0), (0.0, 1.0));
        assert_eq!(s.ticks(5), vec![3.0]);
        assert!(s.ticks(0).is_empty());
    }
}
