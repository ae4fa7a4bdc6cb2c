// Copyright 2025 the Barviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump for a built [`BarChart`].

use std::fmt::Write as _;

use peniko::Brush;

use barviz_charts::{BarChart, FontWeight, MarkPayload, StrokeStyle, TextAnchor, TextBaseline};
use barviz_model::{HoverText, RecordSet};

/// Serializes `chart` in paint order.
///
/// Bars carry a `<title>` child with the hover text of their record, which browsers show as a
/// native tooltip.
pub(crate) fn to_svg_string(chart: &BarChart, records: &RecordSet, hover: &dyn HoverText) -> String {
    let view = chart.layout.view;
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    let _ = write!(
        out,
        r#"viewBox="{} {} {} {}" width="{}" height="{}" font-family="sans-serif">"#,
        view.x0,
        view.y0,
        view.width(),
        view.height(),
        view.width(),
        view.height()
    );
    out.push('\n');

    for mark in chart.paint_order() {
        match &mark.payload {
            MarkPayload::Rect(r) => {
                let _ = write!(
                    out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    r.rect.x0,
                    r.rect.y0,
                    r.rect.width(),
                    r.rect.height(),
                );
                write_paint_attr(&mut out, "fill", &r.fill);
                match mark.row.and_then(|row| records.get(row)) {
                    Some(record) => {
                        let text = hover.on_hover(record).to_plain_text();
                        let _ = writeln!(out, "><title>{}</title></rect>", escape_xml(&text));
                    }
                    None => out.push_str("/>\n"),
                }
            }
            MarkPayload::Text(t) => {
                let baseline = match t.baseline {
                    TextBaseline::Middle => "middle",
                    TextBaseline::Alphabetic => "alphabetic",
                    TextBaseline::Hanging => "hanging",
                };
                let _ = write!(
                    out,
                    r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                    t.pos.x, t.pos.y, t.font_size, baseline
                );
                if t.font_weight != FontWeight::NORMAL {
                    let _ = write!(out, r#" font-weight="{}""#, t.font_weight.0);
                }
                out.push_str(match t.anchor {
                    TextAnchor::Start => r#" text-anchor="start""#,
                    TextAnchor::Middle => r#" text-anchor="middle""#,
                    TextAnchor::End => r#" text-anchor="end""#,
                });
                write_paint_attr(&mut out, "fill", &t.fill);
                out.push('>');
                out.push_str(&escape_xml(&t.text));
                out.push_str("</text>\n");
            }
            MarkPayload::Rule(r) => {
                let _ = write!(
                    out,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                    r.line.p0.x, r.line.p0.y, r.line.p1.x, r.line.p1.y
                );
                write_stroke_attrs(&mut out, &r.stroke);
                out.push_str("/>\n");
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn write_stroke_attrs(out: &mut String, stroke: &StrokeStyle) {
    write_paint_attr(out, "stroke", &stroke.brush);
    let _ = write!(out, r#" stroke-width="{}""#, stroke.stroke_width);
    if stroke.is_dashed() {
        let dash: Vec<String> = stroke.dash.iter().map(|d| d.to_string()).collect();
        let _ = write!(out, r#" stroke-dasharray="{}""#, dash.join(","));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
