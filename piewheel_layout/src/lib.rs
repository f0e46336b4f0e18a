// Copyright 2026 the Piewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piewheel Layout: angular pie layout and ordinal color assignment.
//!
//! Given the current record list, this crate computes the derived visual
//! encoding of a pie chart:
//!
//! - [`layout`]: contiguous angular spans proportional to each record's cost
//!   share, in list order (no sorting).
//! - [`ColorScale`]: an ordinal name → color mapping over a fixed palette,
//!   rebuilt from the distinct names currently present.
//! - [`wedge_path`]: annular wedge geometry for one span, as a
//!   [`kurbo::BezPath`].
//!
//! The crate is purely derivational: it owns no retained state between
//! updates beyond the color scale's domain, and it never mutates records.
//! Reconciliation and animation live in `piewheel_chart`.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::f64::consts::TAU;
//! use piewheel_layout::layout;
//! use piewheel_store::Record;
//!
//! let records = [
//!     Record::new("a", "Food", 10.0),
//!     Record::new("b", "Rent", 30.0),
//! ];
//!
//! let slices = layout(&records);
//! assert_eq!(slices.len(), 2);
//! // "a" holds a quarter of the circle, "b" the rest.
//! assert!((slices[0].span.sweep() - TAU / 4.0).abs() < 1e-12);
//! assert!((slices[1].span.end - TAU).abs() < 1e-12);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod pie;
mod span;

pub use color::{ColorScale, Palette, blend};
pub use pie::{Slice, layout};
pub use span::{AngularSpan, wedge_path};
