// Copyright 2026 the Piewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer configuration.

use kurbo::Point;
use peniko::Color;

bitflags::bitflags! {
    /// Feature flags controlling optional renderer behavior.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ChartFlags: u8 {
        /// Emit legend swatch/label ops for every name in the color domain.
        const LEGEND = 0b0000_0001;
        /// Fade a hovered segment's fill toward the highlight color.
        const HOVER_HIGHLIGHT = 0b0000_0010;
    }
}

impl Default for ChartFlags {
    fn default() -> Self {
        Self::HOVER_HIGHLIGHT
    }
}

/// Static configuration for a [`PieChart`](crate::PieChart).
///
/// The geometry fields describe the annulus in the host's local coordinate
/// space; hit testing and the SVG exporter both read them. Legend text
/// defaults to white, matching the dark-background styling the chart is
/// designed for.
#[derive(Clone, Debug)]
pub struct ChartOptions {
    /// Optional behavior toggles.
    pub flags: ChartFlags,
    /// Center of the annulus in local coordinates.
    pub center: Point,
    /// Outer radius of the annulus.
    pub outer_radius: f64,
    /// Inner radius of the annulus (half the outer radius by default).
    pub inner_radius: f64,
    /// Fill color a hovered segment fades toward.
    pub highlight: Color,
    /// Color used for legend label text.
    pub legend_text: Color,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            flags: ChartFlags::default(),
            center: Point::ZERO,
            outer_radius: 150.0,
            inner_radius: 75.0,
            highlight: Color::WHITE,
            legend_text: Color::WHITE,
        }
    }
}
