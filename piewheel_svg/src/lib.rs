// Copyright 2026 the Piewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export backend for piewheel frame ops.
//!
//! This crate turns one chart frame (a `&[FrameOp]` from
//! [`piewheel_chart::PieChart::frame`]) into an SVG document string.
//!
//! This is intended for debugging/inspection and snapshotting, not
//! pixel-perfect rendering:
//! - Wedges are flattened to cubic paths at a fixed tolerance.
//! - Legend labels use a plain `<text>` element with no font metrics; hosts
//!   that need precise text lay it out themselves.
//!
//! ## Example
//!
//! ```rust
//! use piewheel_chart::{ChartOptions, PieChart, SWEEP_TICKS};
//! use piewheel_store::Record;
//! use piewheel_svg::SvgSurface;
//!
//! let mut chart = PieChart::new(ChartOptions::default());
//! chart.render(&[Record::new("a", "Food", 10.0)], 0);
//! let ops = chart.frame(SWEEP_TICKS);
//!
//! let surface = SvgSurface::new(chart.options());
//! let svg = surface.render(&ops, 450, 450);
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;

use kurbo::Point;
use peniko::Color;
use piewheel_chart::{ChartOptions, FrameOp};
use piewheel_layout::wedge_path;

/// Flattening tolerance for wedge outlines.
const WEDGE_TOLERANCE: f64 = 0.1;

/// Placement of the legend column.
#[derive(Clone, Copy, Debug)]
pub struct LegendStyle {
    /// Top-left anchor of the first legend row.
    pub origin: Point,
    /// Radius of the circular color swatch.
    pub swatch_radius: f64,
    /// Vertical distance between rows.
    pub row_height: f64,
    /// Gap between a swatch and its label.
    pub label_gap: f64,
    /// Font size for labels, in user units.
    pub font_size: f64,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            origin: Point::new(190.0, -140.0),
            swatch_radius: 7.0,
            row_height: 24.0,
            label_gap: 10.0,
            font_size: 14.0,
        }
    }
}

/// An SVG document builder for chart frames.
///
/// The surface copies the chart's annulus geometry at construction; the
/// frame ops only carry angular spans. The emitted document centers the
/// coordinate system with a `viewBox` spanning `(-width/2, -height/2)` to
/// `(width/2, height/2)`, so the chart's local origin lands mid-document.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    /// Stroke drawn between adjacent wedges; `None` disables it.
    pub wedge_stroke: Option<(Color, f64)>,
    /// Legend placement.
    pub legend: LegendStyle,
}

impl SvgSurface {
    /// Creates a surface matching the given chart's geometry.
    #[must_use]
    pub fn new(options: &ChartOptions) -> Self {
        Self {
            center: options.center,
            outer_radius: options.outer_radius,
            inner_radius: options.inner_radius,
            wedge_stroke: Some((Color::WHITE, 3.0)),
            legend: LegendStyle::default(),
        }
    }

    /// Renders one frame into an SVG document.
    pub fn render(&self, ops: &[FrameOp], width: u32, height: u32) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"{} {} {width} {height}\">",
            fmt_f64(-f64::from(width) / 2.0),
            fmt_f64(-f64::from(height) / 2.0),
        );

        for op in ops {
            match op {
                FrameOp::Wedge { span, color, .. } => {
                    if span.is_empty() {
                        continue;
                    }
                    let path = wedge_path(
                        self.center,
                        self.outer_radius,
                        self.inner_radius,
                        *span,
                        WEDGE_TOLERANCE,
                    );
                    let (fill, opacity) = color_to_svg(*color);
                    let _ = write!(out, "<path d=\"{}\" fill=\"{fill}\"", path.to_svg());
                    if opacity < 1.0 {
                        let _ = write!(out, " fill-opacity=\"{}\"", fmt_f64(f64::from(opacity)));
                    }
                    if let Some((stroke, stroke_width)) = self.wedge_stroke {
                        let (stroke, _) = color_to_svg(stroke);
                        let _ = write!(
                            out,
                            " stroke=\"{stroke}\" stroke-width=\"{}\"",
                            fmt_f64(stroke_width)
                        );
                    }
                    out.push_str("/>");
                }
                FrameOp::LegendSwatch { index, color } => {
                    let (fill, _) = color_to_svg(*color);
                    let row = self.legend_row(*index);
                    let _ = write!(
                        out,
                        "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{fill}\"/>",
                        fmt_f64(row.x),
                        fmt_f64(row.y),
                        fmt_f64(self.legend.swatch_radius),
                    );
                }
                FrameOp::LegendLabel { index, text, color } => {
                    let (fill, _) = color_to_svg(*color);
                    let row = self.legend_row(*index);
                    let x = row.x + self.legend.swatch_radius + self.legend.label_gap;
                    let y = row.y + self.legend.font_size / 3.0;
                    let _ = write!(
                        out,
                        "<text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{fill}\">{}</text>",
                        fmt_f64(x),
                        fmt_f64(y),
                        fmt_f64(self.legend.font_size),
                        escape_text(text),
                    );
                }
            }
        }

        out.push_str("</svg>");
        out
    }

    fn legend_row(&self, index: usize) -> Point {
        Point::new(
            self.legend.origin.x,
            self.legend.origin.y + index_to_f64(index) * self.legend.row_height,
        )
    }
}

fn index_to_f64(index: usize) -> f64 {
    u32::try_from(index).map_or(f64::MAX, f64::from)
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn fmt_f64(v: f64) -> String {
    // Keep output readable and stable enough for debugging.
    if !v.is_finite() {
        return format!("{v}");
    }
    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
