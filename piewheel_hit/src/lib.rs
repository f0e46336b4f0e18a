// Copyright 2026 the Piewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piewheel Hit: geometry-level hit testing for annular pie wedges.
//!
//! This crate answers one question: given a pointer position in local
//! coordinates, does it land inside a wedge of an annulus? It is the
//! resolution step between raw pointer events and segment-level interaction
//! (hover highlight, click-to-delete) in `piewheel_chart`.
//!
//! The types here are intentionally small building blocks: a wedge is
//! described by raw polar parameters rather than chart-level types, so the
//! crate stays independent of layout and rendering.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::f64::consts::PI;
//! use kurbo::Point;
//! use piewheel_hit::{AnnularWedge, HitParams};
//!
//! let wedge = AnnularWedge {
//!     center: Point::new(0.0, 0.0),
//!     outer_radius: 150.0,
//!     inner_radius: 75.0,
//!     start_angle: 0.0,
//!     sweep: PI / 2.0,
//! };
//!
//! let params = HitParams::default();
//! // A point in the first quadrant, radius 100: inside.
//! assert!(wedge.hit_test_local(Point::new(70.0, 70.0), &params).is_some());
//! // Inside the hole: outside the wedge.
//! assert!(wedge.hit_test_local(Point::new(10.0, 10.0), &params).is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use core::f64::consts::TAU;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

/// Tolerances applied during wedge hit testing.
#[derive(Clone, Copy, Debug)]
pub struct HitParams {
    /// Slack added on both sides of the radial band, in local units.
    ///
    /// Angular membership is exact; only the radius check is softened, so
    /// adjacent wedges never both claim the same pointer position.
    pub radial_tolerance: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self {
            radial_tolerance: 0.0,
        }
    }
}

/// Polar coordinates of a successful wedge hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WedgeHit {
    /// Distance from the wedge center.
    pub radius: f64,
    /// Angle from the wedge's start edge, normalized into `[0, 2π)`.
    pub angle_from_start: f64,
}

/// An annular wedge (donut slice) in local coordinates.
///
/// `sweep` is the angular width in radians, measured from `start_angle` in
/// kurbo's angle convention. A non-positive sweep never hits; a sweep of
/// `2π` or more covers the whole band.
#[derive(Clone, Copy, Debug)]
pub struct AnnularWedge {
    /// Center of the annulus.
    pub center: Point,
    /// Outer radius of the band.
    pub outer_radius: f64,
    /// Inner radius of the band (`0.0` for a full pie slice).
    pub inner_radius: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// Angular width in radians.
    pub sweep: f64,
}

impl AnnularWedge {
    /// Tests a point in local coordinates against this wedge.
    ///
    /// Returns the polar coordinates of the hit, or `None` when the point
    /// falls outside the radial band (beyond `radial_tolerance`) or outside
    /// the angular interval.
    #[must_use]
    pub fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<WedgeHit> {
        if self.sweep <= 0.0 {
            return None;
        }

        let offset = pt - self.center;
        let radius = offset.hypot();
        if radius < self.inner_radius - params.radial_tolerance
            || radius > self.outer_radius + params.radial_tolerance
        {
            return None;
        }

        let angle = offset.y.atan2(offset.x);
        // Euclidean remainder by hand; `f64::rem_euclid` needs std.
        let mut from_start = angle - self.start_angle;
        from_start -= TAU * (from_start / TAU).floor();

        if self.sweep >= TAU || from_start < self.sweep {
            Some(WedgeHit {
                radius,
                angle_from_start: from_start,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{PI, TAU};

    use super::*;

    fn quadrant_wedge() -> AnnularWedge {
        AnnularWedge {
            center: Point::new(0.0, 0.0),
            outer_radius: 150.0,
            inner_radius: 75.0,
            start_angle: 0.0,
            sweep: PI / 2.0,
        }
    }

    #[test]
    fn hits_inside_the_band_and_interval() {
        let wedge = quadrant_wedge();
        let params = HitParams::default();

        let hit = wedge
            .hit_test_local(Point::new(70.0, 70.0), &params)
            .unwrap();
        assert!((hit.radius - 98.99).abs() < 0.01);
        assert!((hit.angle_from_start - PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn misses_the_hole_and_the_outside() {
        let wedge = quadrant_wedge();
        let params = HitParams::default();

        assert!(wedge.hit_test_local(Point::new(10.0, 10.0), &params).is_none());
        assert!(
            wedge
                .hit_test_local(Point::new(200.0, 200.0), &params)
                .is_none()
        );
    }

    #[test]
    fn misses_outside_the_angular_interval() {
        let wedge = quadrant_wedge();
        let params = HitParams::default();

        // Radius is right, angle is in the second quadrant.
        assert!(
            wedge
                .hit_test_local(Point::new(-70.0, 70.0), &params)
                .is_none()
        );
    }

    #[test]
    fn radial_tolerance_softens_the_band_only() {
        let wedge = quadrant_wedge();
        let params = HitParams {
            radial_tolerance: 5.0,
        };

        // Just past the outer edge along the 45° ray.
        let just_outside = Point::new(108.0, 108.0);
        assert!(
            wedge
                .hit_test_local(just_outside, &HitParams::default())
                .is_none()
        );
        assert!(wedge.hit_test_local(just_outside, &params).is_some());

        // Tolerance never bends the angular check.
        assert!(
            wedge
                .hit_test_local(Point::new(-70.0, 70.0), &params)
                .is_none()
        );
    }

    #[test]
    fn wrapping_interval_crosses_zero() {
        let wedge = AnnularWedge {
            center: Point::new(0.0, 0.0),
            outer_radius: 150.0,
            inner_radius: 0.0,
            start_angle: -PI / 4.0,
            sweep: PI / 2.0,
        };
        let params = HitParams::default();

        assert!(wedge.hit_test_local(Point::new(100.0, 0.0), &params).is_some());
        assert!(
            wedge
                .hit_test_local(Point::new(100.0, 30.0), &params)
                .is_some()
        );
        assert!(
            wedge
                .hit_test_local(Point::new(0.0, 100.0), &params)
                .is_none()
        );
    }

    #[test]
    fn zero_sweep_never_hits() {
        let mut wedge = quadrant_wedge();
        wedge.sweep = 0.0;

        assert!(
            wedge
                .hit_test_local(Point::new(100.0, 1.0), &HitParams::default())
                .is_none()
        );
    }

    #[test]
    fn full_turn_covers_the_band() {
        let mut wedge = quadrant_wedge();
        wedge.sweep = TAU;

        for pt in [
            Point::new(100.0, 0.0),
            Point::new(-100.0, 0.0),
            Point::new(0.0, -100.0),
        ] {
            assert!(wedge.hit_test_local(pt, &HitParams::default()).is_some());
        }
    }
}
