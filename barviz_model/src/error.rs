// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for record ingestion and model construction.

extern crate alloc;

use alloc::string::String;

/// A numeric record attribute that participates in validation or scales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Cases per 1000 population.
    Rate,
    /// Distance to the nearest hospital, in km.
    Distance,
}

impl Field {
    /// Returns the attribute name used in messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rate => "rate",
            Self::Distance => "distance",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned when ingesting records or building a [`crate::ChartModel`].
///
/// Degenerate domains (every value equal) are not errors; scales fall back to a constant output.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// An operation that needs at least one record was given none.
    #[error("empty input: at least one record is required")]
    EmptyInput,
    /// A record carries a non-finite or negative numeric attribute.
    #[error("invalid record at row {row}: {field} must be finite and non-negative, got {value}")]
    InvalidRecord {
        /// Row index of the offending record in input order.
        row: usize,
        /// The attribute that failed validation.
        field: Field,
        /// The rejected value.
        value: f64,
    },
    /// Two records share the same name.
    #[error("duplicate record name {name:?}")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },
    /// A configuration value is outside its documented range.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        /// The parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
