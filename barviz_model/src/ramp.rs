// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sequential color ramps.
//!
//! A ramp is sampled with `t` in `[0, 1]`. The built-in ramps are the 9-class sequential
//! ColorBrewer schemes, interpolated with a uniform cubic B-spline in sRGB by default so that
//! the ramp passes smoothly through light-to-dark steps.

use peniko::Color;
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// How a [`ColorRamp`] blends between its stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Interpolation {
    /// Piecewise-linear blending between neighbouring stops.
    Linear,
    /// Uniform cubic B-spline through all stops.
    #[default]
    Basis,
}

/// An ordered list of color stops sampled by a parameter in `[0, 1]`.
#[derive(Clone, Debug)]
pub struct ColorRamp {
    stops: SmallVec<[Color; 9]>,
    interpolation: Interpolation,
}

const REDS: [[u8; 3]; 9] = [
    [0xff, 0xf5, 0xf0],
    [0xfe, 0xe0, 0xd2],
    [0xfc, 0xbb, 0xa1],
    [0xfc, 0x92, 0x72],
    [0xfb, 0x6a, 0x4a],
    [0xef, 0x3b, 0x2c],
    [0xcb, 0x18, 0x1d],
    [0xa5, 0x0f, 0x15],
    [0x67, 0x00, 0x0d],
];

const BLUES: [[u8; 3]; 9] = [
    [0xf7, 0xfb, 0xff],
    [0xde, 0xeb, 0xf7],
    [0xc6, 0xdb, 0xef],
    [0x9e, 0xca, 0xe1],
    [0x6b, 0xae, 0xd6],
    [0x42, 0x92, 0xc6],
    [0x21, 0x71, 0xb5],
    [0x08, 0x51, 0x9c],
    [0x08, 0x30, 0x6b],
];

const GREENS: [[u8; 3]; 9] = [
    [0xf7, 0xfc, 0xf5],
    [0xe5, 0xf5, 0xe0],
    [0xc7, 0xe9, 0xc0],
    [0xa1, 0xd9, 0x9b],
    [0x74, 0xc4, 0x76],
    [0x41, 0xab, 0x5d],
    [0x23, 0x8b, 0x45],
    [0x00, 0x6d, 0x2c],
    [0x00, 0x44, 0x1b],
];

const ORANGES: [[u8; 3]; 9] = [
    [0xff, 0xf5, 0xeb],
    [0xfe, 0xe6, 0xce],
    [0xfd, 0xd0, 0xa2],
    [0xfd, 0xae, 0x6b],
    [0xfd, 0x8d, 0x3c],
    [0xf1, 0x69, 0x13],
    [0xd9, 0x48, 0x01],
    [0xa6, 0x36, 0x03],
    [0x7f, 0x27, 0x04],
];

impl ColorRamp {
    /// Creates a ramp from explicit stops.
    ///
    /// Returns `None` if fewer than two stops are given.
    pub fn new(stops: impl IntoIterator<Item = Color>) -> Option<Self> {
        let stops: SmallVec<[Color; 9]> = stops.into_iter().collect();
        if stops.len() < 2 {
            return None;
        }
        Some(Self {
            stops,
            interpolation: Interpolation::default(),
        })
    }

    fn from_rgb8(table: &[[u8; 3]; 9]) -> Self {
        Self {
            stops: table
                .iter()
                .map(|&[r, g, b]| Color::from_rgb8(r, g, b))
                .collect(),
            interpolation: Interpolation::default(),
        }
    }

    /// White to dark red.
    pub fn reds() -> Self {
        Self::from_rgb8(&REDS)
    }

    /// White to dark blue.
    pub fn blues() -> Self {
        Self::from_rgb8(&BLUES)
    }

    /// White to dark green.
    pub fn greens() -> Self {
        Self::from_rgb8(&GREENS)
    }

    /// White to dark orange.
    pub fn oranges() -> Self {
        Self::from_rgb8(&ORANGES)
    }

    /// Sets the interpolation mode.
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Returns the interpolation mode.
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Returns the color stops.
    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// Samples the ramp at `t`, clamped to `[0, 1]`. `NaN` samples the start.
    pub fn sample(&self, t: f64) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let n = self.stops.len() - 1;
        // Segment index; the last segment also owns `t == 1`.
        let i = {
            let scaled = (t * n as f64).floor();
            #[allow(
                clippy::cast_possible_truncation,
                reason = "t is clamped to [0, 1], so the value lies in 0..=n"
            )]
            let i = scaled as usize;
            i.min(n - 1)
        };
        let local = t * n as f64 - i as f64;
        let v1 = self.stops[i].components;
        let v2 = self.stops[i + 1].components;

        let out: [f32; 4] = match self.interpolation {
            Interpolation::Linear => core::array::from_fn(|c| lerp(v1[c], v2[c], local)),
            Interpolation::Basis => {
                // Missing outer neighbours are reflected through the end stops.
                let v0 = (i > 0).then(|| self.stops[i - 1].components);
                let v3 = (i + 2 <= n).then(|| self.stops[i + 2].components);
                core::array::from_fn(|c| {
                    let p0 = v0.map_or(2.0 * v1[c] - v2[c], |v| v[c]);
                    let p3 = v3.map_or(2.0 * v2[c] - v1[c], |v| v[c]);
                    basis(local, p0, v1[c], v2[c], p3)
                })
            }
        };
        Color::new(out.map(|c| c.clamp(0.0, 1.0)))
    }
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self::reds()
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "color components are stored as f32"
)]
fn lerp(a: f32, b: f32, t: f64) -> f32 {
    let t = t as f32;
    a + (b - a) * t
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "color components are stored as f32"
)]
fn basis(t: f64, v0: f32, v1: f32, v2: f32, v3: f32) -> f32 {
    let t1 = t as f32;
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn assert_rgb8(color: Color, expected: [u8; 3]) {
        let rgba = color.to_rgba8();
        assert_eq!([rgba.r, rgba.g, rgba.b], expected, "got {color:?}");
    }

    #[test]
    fn endpoints_reproduce_first_and_last_stops() {
        for interpolation in [Interpolation::Linear, Interpolation::Basis] {
            let ramp = ColorRamp::reds().with_interpolation(interpolation);
            assert_rgb8(ramp.sample(0.0), [0xff, 0xf5, 0xf0]);
            assert_rgb8(ramp.sample(1.0), [0x67, 0x00, 0x0d]);
            assert_rgb8(ramp.sample(-3.0), [0xff, 0xf5, 0xf0]);
            assert_rgb8(ramp.sample(f64::NAN), [0xff, 0xf5, 0xf0]);
        }
    }

    #[test]
    fn linear_ramp_passes_through_interior_stops() {
        let ramp = ColorRamp::blues().with_interpolation(Interpolation::Linear);
        // Stop 4 of 8 sits exactly at t = 0.5.
        assert_rgb8(ramp.sample(0.5), [0x6b, 0xae, 0xd6]);
    }

    #[test]
    fn basis_smooths_interior_stops() {
        // t = 0.5 is the start of segment 4: (stop3 + 4 * stop4 + stop5) / 6.
        let ramp = ColorRamp::reds();
        assert_rgb8(ramp.sample(0.5), [249, 105, 76]);
        // Linear passes through stop 4 itself.
        let linear = ramp.with_interpolation(Interpolation::Linear);
        assert_rgb8(linear.sample(0.5), [0xfb, 0x6a, 0x4a]);
    }

    #[test]
    fn sequential_ramps_darken_monotonically() {
        for (name, ramp) in [
            ("reds", ColorRamp::reds()),
            ("blues", ColorRamp::blues()),
            ("greens", ColorRamp::greens()),
            ("oranges", ColorRamp::oranges()),
        ] {
            let mut prev = f32::INFINITY;
            for i in 0..=20 {
                let c = ramp.sample(f64::from(i) / 20.0).components;
                let lightness = c[0] + c[1] + c[2];
                assert!(lightness <= prev + 1e-6, "{name} lightened at step {i}");
                prev = lightness;
            }
        }
    }

    #[test]
    fn every_ramp_starts_light_and_ends_dark() {
        assert_rgb8(ColorRamp::greens().sample(0.0), [0xf7, 0xfc, 0xf5]);
        assert_rgb8(ColorRamp::greens().sample(1.0), [0x00, 0x44, 0x1b]);
        assert_rgb8(ColorRamp::oranges().sample(0.0), [0xff, 0xf5, 0xeb]);
        assert_rgb8(ColorRamp::oranges().sample(1.0), [0x7f, 0x27, 0x04]);
    }

    #[test]
    fn needs_two_stops() {
        assert!(ColorRamp::new([Color::from_rgb8(0, 0, 0)]).is_none());
        let ramp = ColorRamp::new([Color::from_rgb8(0, 0, 0), Color::from_rgb8(255, 255, 255)])
            .unwrap()
            .with_interpolation(Interpolation::Linear);
        assert_rgb8(ramp.sample(0.5), [0x80, 0x80, 0x80]);
    }
}
