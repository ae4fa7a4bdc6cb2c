// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Summary statistics over a selected record attribute.

use crate::error::ModelError;

/// Mean and extent of one attribute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    /// Arithmetic mean.
    pub mean: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

impl Summary {
    /// Summarizes the values picked by `selector`.
    pub fn of<T>(items: &[T], selector: impl Fn(&T) -> f64) -> Result<Self, ModelError> {
        let (min, max) = extent(items, &selector)?;
        let mean = mean(items, &selector)?;
        Ok(Self { mean, min, max })
    }
}

/// Returns the arithmetic mean of the values picked by `selector`.
///
/// Fails with [`ModelError::EmptyInput`] instead of returning `NaN` for an empty slice.
/// The mean is accumulated incrementally, so large finite values do not overflow to infinity.
pub fn mean<T>(items: &[T], selector: impl Fn(&T) -> f64) -> Result<f64, ModelError> {
    if items.is_empty() {
        return Err(ModelError::EmptyInput);
    }
    let mut m = 0.0;
    for (k, item) in items.iter().enumerate() {
        m += (selector(item) - m) / (k + 1) as f64;
    }
    Ok(m)
}

/// Returns `(min, max)` of the values picked by `selector`.
pub fn extent<T>(items: &[T], selector: impl Fn(&T) -> f64) -> Result<(f64, f64), ModelError> {
    let mut values = items.iter().map(selector);
    let first = values.next().ok_or(ModelError::EmptyInput)?;
    Ok(values.fold((first, first), |(min, max), v| (min.min(v), max.max(v))))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;
    use crate::Record;

    fn rates(values: &[f64]) -> Vec<Record> {
        values
            .iter()
            .enumerate()
            .map(|(i, &rate)| Record::new(alloc::format!("r{i}"), rate, 0.0))
            .collect()
    }

    #[test]
    fn mean_of_one_two_three_is_two() {
        let records = rates(&[1.0, 2.0, 3.0]);
        assert_eq!(mean(&records, |r| r.rate), Ok(2.0));
    }

    #[test]
    fn mean_of_huge_values_stays_finite() {
        let records = rates(&[f64::MAX, f64::MAX]);
        assert_eq!(mean(&records, |r| r.rate), Ok(f64::MAX));

        let records = rates(&[f64::MAX, 0.0]);
        assert_eq!(mean(&records, |r| r.rate), Ok(f64::MAX / 2.0));
    }

    #[test]
    fn empty_input_is_an_error() {
        let records: Vec<Record> = Vec::new();
        assert_eq!(mean(&records, |r| r.rate), Err(ModelError::EmptyInput));
        assert_eq!(extent(&records, |r| r.rate), Err(ModelError::EmptyInput));
        assert_eq!(
            Summary::of(&records, |r| r.rate),
            Err(ModelError::EmptyInput)
        );
    }

    #[test]
    fn summary_tracks_extent() {
        let records = rates(&[27.2, 47.6, 31.8]);
        let s = Summary::of(&records, |r| r.rate).unwrap();
        assert_eq!(s.min, 27.2);
        assert_eq!(s.max, 47.6);
        assert!((s.mean - 35.533_333_333_333_33).abs() < 1e-9);
    }
}
