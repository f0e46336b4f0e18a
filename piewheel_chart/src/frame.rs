// Copyright 2026 the Piewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain-old-data frame operations emitted by the chart.

use alloc::string::String;

use peniko::Color;
use piewheel_layout::AngularSpan;
use piewheel_store::RecordId;

/// One legend row: a distinct record name and its assigned color.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// The record name this row keys.
    pub name: String,
    /// The swatch color, shared with every segment of that name.
    pub color: Color,
}

/// One draw operation for the current frame.
///
/// Ops arrive in draw order: wedges first (current list order, exiting
/// segments last), then legend rows top to bottom. The ops are deliberately
/// backend-agnostic plain data; geometry beyond the angular span (center,
/// radii) comes from the chart's [`ChartOptions`](crate::ChartOptions).
#[derive(Clone, Debug, PartialEq)]
pub enum FrameOp {
    /// Fill one segment's annular wedge.
    Wedge {
        /// Id of the record the wedge encodes.
        id: RecordId,
        /// The currently displayed angular span (mid-animation spans
        /// included).
        span: AngularSpan,
        /// Fill color, with any hover fade already applied.
        color: Color,
    },
    /// Draw the color swatch for legend row `index`.
    LegendSwatch {
        /// Zero-based legend row.
        index: usize,
        /// Swatch color.
        color: Color,
    },
    /// Draw the text label for legend row `index`.
    LegendLabel {
        /// Zero-based legend row.
        index: usize,
        /// The record name.
        text: String,
        /// Label color.
        color: Color,
    },
}
