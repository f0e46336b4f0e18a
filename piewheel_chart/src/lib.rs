// Copyright 2026 the Piewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piewheel Chart: live pie chart reconciliation, animation, and interaction.
//!
//! [`PieChart`] turns the current record list into retained per-segment
//! visual state and reconciles it against the previous rendering, keyed by
//! record id. Each render classifies every segment as entering, updating, or
//! exiting and starts the matching animated transition:
//!
//! - *Updating* segments tween from their currently displayed span to the
//!   newly computed one.
//! - *Entering* segments sweep open from a zero-width span at their final end
//!   angle.
//! - *Exiting* segments sweep closed toward their own end angle, then their
//!   retained state is dropped.
//!
//! ## Time model
//!
//! The chart owns no clock. Hosts pass a monotonically increasing `u64` tick
//! value into every call; span transitions run for [`SWEEP_TICKS`] and the
//! hover fill fade for [`HIGHLIGHT_TICKS`]. Transitions are fire-and-forget:
//! a render that lands mid-animation starts its tween from whatever span the
//! in-flight transition currently displays, so handoffs stay smooth.
//!
//! ## Frames
//!
//! [`PieChart::frame`] samples every live transition and emits plain-old-data
//! [`FrameOp`]s (wedges, then legend swatches and labels). Backends replay
//! the ops however they like; `piewheel_svg` is the debug exporter.
//!
//! ## Minimal example
//!
//! ```rust
//! use piewheel_chart::{ChartOptions, FrameOp, PieChart, SWEEP_TICKS};
//! use piewheel_store::Record;
//!
//! let mut chart = PieChart::new(ChartOptions::default());
//!
//! let records = [
//!     Record::new("a", "Food", 10.0),
//!     Record::new("b", "Rent", 30.0),
//! ];
//! chart.render(&records, 0);
//!
//! // After the sweep animation settles, two wedges tile the circle.
//! let ops = chart.frame(SWEEP_TICKS);
//! let wedges = ops
//!     .iter()
//!     .filter(|op| matches!(op, FrameOp::Wedge { .. }))
//!     .count();
//! assert_eq!(wedges, 2);
//! ```
//!
//! For the full subscription loop (change feed in, deletes out) see the
//! [`driver`] module.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod chart;
pub mod driver;
mod frame;
mod options;
mod tween;

pub use chart::{PieChart, SegmentPhase};
pub use frame::{FrameOp, LegendEntry};
pub use options::{ChartFlags, ChartOptions};
pub use tween::{Fade, SpanTween};

/// Duration of enter/update/exit span transitions, in host ticks.
pub const SWEEP_TICKS: u64 = 750;

/// Duration of the hover fill fade, in host ticks.
pub const HIGHLIGHT_TICKS: u64 = 300;
