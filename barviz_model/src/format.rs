// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for labels and hover text.

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats `value` with exactly `digits` decimals.
pub fn format_fixed(value: f64, digits: usize) -> String {
    alloc::format!("{value:.digits$}")
}

/// Formats an integer with `,` thousands separators (`48918` -> `"48,918"`).
pub fn format_grouped(value: u64) -> String {
    let digits = alloc::format!("{value}");
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats an axis tick, using just enough decimals to tell ticks `step` apart.
pub fn format_tick(value: f64, step: f64) -> String {
    // Avoid "-0" for ticks that land on zero.
    let value = if value == 0.0 { 0.0 } else { value };
    format_fixed(value, decimals_for_step(step.abs()))
}

#[allow(clippy::cast_possible_truncation, reason = "clamped to 0..=10")]
fn decimals_for_step(step: f64) -> usize {
    if !step.is_finite() || step == 0.0 || step >= 1.0 {
        return 0;
    }
    (-step.log10()).ceil().clamp(0.0, 10.0) as usize
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn fixed_rounds_to_requested_digits() {
        assert_eq!(format_fixed(47.6, 1), "47.6");
        assert_eq!(format_fixed(3.0, 1), "3.0");
        assert_eq!(format_fixed(35.533_333, 1), "35.5");
    }

    #[test]
    fn grouped_inserts_separators() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(5479), "5,479");
        assert_eq!(format_grouped(48_918), "48,918");
        assert_eq!(format_grouped(1_234_567), "1,234,567");
    }

    #[test]
    fn tick_decimals_follow_step() {
        assert_eq!(format_tick(20.0, 10.0), "20");
        assert_eq!(format_tick(1.5, 0.5), "1.5");
        assert_eq!(format_tick(0.25, 0.05), "0.25");
        assert_eq!(format_tick(-0.0, 1.0), "0");
    }
}
