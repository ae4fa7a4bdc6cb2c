// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the dengue spread-rate chart as SVG on stdout.
//!
//! Pass `placeholder` as the first argument to chart the placeholder cities instead of the
//! Colombian municipalities. Set `RUST_LOG=debug` to see model and chart diagnostics.

mod data;
mod svg;

use std::process::ExitCode;

use barviz_charts::{BarChartSpec, HeuristicTextMeasurer, MarkId, TitleSpec};
use barviz_model::{ModelError, RecordTooltip};

fn run(sample: &str) -> Result<String, ModelError> {
    let records = match sample {
        "placeholder" => data::placeholder()?,
        _ => data::colombia()?,
    };
    log::info!("charting {} records from the {sample} sample", records.len());

    let title = TitleSpec::new(
        MarkId::new(BarChartSpec::TITLE_FAMILY, 0),
        "Top Dengue Spreading Cities in Colombia",
    )
    .with_subtitle_line("Dengue is a mosquito-borne viral infection that can cause severe illness.")
    .with_subtitle_line(
        "Travelers should be cautious, especially in these cities with high spread-rate.",
    );
    let spec = BarChartSpec::default()
        .with_title(title)
        .with_source("Data from physionet.org/content/multimodal-satellite-data/1.0.0/");

    let chart = spec.build(&records, &HeuristicTextMeasurer)?;
    let rates = chart.model.rate_summary();
    log::info!(
        "spread rate in [{:.1}, {:.1}], mean {:.2}, reference line at {:.2}",
        rates.min,
        rates.max,
        rates.mean,
        chart.model.reference()
    );
    Ok(svg::to_svg_string(&chart, &records, &RecordTooltip::default()))
}

fn main() -> ExitCode {
    env_logger::init();

    let sample = std::env::args().nth(1).unwrap_or_else(|| "colombia".to_string());
    match run(&sample) {
        Ok(svg) => {
            print!("{svg}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("failed to build chart: {err}");
            ExitCode::FAILURE
        }
    }
}
