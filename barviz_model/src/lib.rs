// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure chart model for categorical bar charts.
//!
//! This crate turns an ordered set of records into the mappings a renderer needs:
//! - **Scales** map record values into output coordinates (linear magnitude, category bands)
//!   or colors (sequential ramps).
//! - **Statistics** summarize a record attribute (mean, extent).
//! - **Hover text** is a capability the rendering layer calls when a record is pointed at.
//!
//! Nothing here draws. Marks, layout and serialization live downstream (see `barviz_charts`).

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod config;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod model;
mod ramp;
mod record;
mod scale;
mod stats;
mod tooltip;

pub use config::{ModelConfig, ReferencePolicy};
pub use error::{Field, ModelError};
pub use format::{format_fixed, format_grouped, format_tick};
pub use model::ChartModel;
pub use ramp::{ColorRamp, Interpolation};
pub use record::{Record, RecordSet};
pub use scale::{
    Band, CategoryScale, ScaleBand, ScaleLinear, ScaleSequential, category_scale, color_scale,
    magnitude_scale,
};
pub use stats::{Summary, extent, mean};
pub use tooltip::{DisplayLine, DisplayText, HoverText, RecordTooltip};
