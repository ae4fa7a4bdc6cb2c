// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model configuration.

use crate::error::ModelError;
use crate::ramp::ColorRamp;

/// Where the reference (average) line sits.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ReferencePolicy {
    /// The arithmetic mean of `rate` over the record set.
    #[default]
    Mean,
    /// A value chosen by the host application, e.g. a published city-wide average.
    ///
    /// Must be finite and non-negative.
    Fixed(f64),
}

/// Inputs for [`crate::ChartModel::new`] besides the records.
#[derive(Clone, Debug)]
pub struct ModelConfig {
    /// Width of the magnitude range. Finite and `> 0`.
    pub output_width: f64,
    /// Height of the category range. Finite and `> 0`.
    pub output_height: f64,
    /// Fraction of each category slot left as gap, in `[0, 1)`.
    pub padding: f64,
    /// Reference line policy.
    pub reference: ReferencePolicy,
    /// Ramp used by the color scale.
    pub ramp: ColorRamp,
}

impl ModelConfig {
    /// Creates a config for the given output size with `padding = 0.2`, a computed mean
    /// reference line, and the default red ramp.
    pub fn new(output_width: f64, output_height: f64) -> Self {
        Self {
            output_width,
            output_height,
            padding: 0.2,
            reference: ReferencePolicy::Mean,
            ramp: ColorRamp::default(),
        }
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

    /// Checks every field against its documented range.
    pub fn validate(&self) -> Result<(), ModelError> {
        let positive = [
            ("output_width", self.output_width),
            ("output_height", self.output_height),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ModelError::InvalidParameter { name, value });
            }
        }
        if !(0.0..1.0).contains(&self.padding) {
            return Err(ModelError::InvalidParameter {
                name: "padding",
                value: self.padding,
            });
        }
        if let ReferencePolicy::Fixed(value) = self.reference
            && (!value.is_finite() || value < 0.0)
        {
            return Err(ModelError::InvalidParameter {
                name: "reference",
                value,
            });
        }
        Ok(())
    }
}

impl Default for ModelConfig {
    /// The plot area of an 800x500 view with 160/50/80/180 margins.
    fn default() -> Self {
        Self::new(570.0, 260.0)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(ModelConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_fields() {
        let bad = [
            ModelConfig::new(0.0, 10.0),
            ModelConfig::new(10.0, -1.0),
            ModelConfig::new(f64::INFINITY, 10.0),
            ModelConfig::new(10.0, 10.0).with_padding(1.0),
            ModelConfig::new(10.0, 10.0).with_padding(-0.1),
            ModelConfig::new(10.0, 10.0).with_reference(ReferencePolicy::Fixed(f64::NAN)),
            ModelConfig::new(10.0, 10.0).with_reference(ReferencePolicy::Fixed(-3.0)),
        ];
        for config in bad {
            assert!(
                matches!(config.validate(), Err(ModelError::InvalidParameter { .. })),
                "expected rejection for {config:?}"
            );
        }
    }
}
