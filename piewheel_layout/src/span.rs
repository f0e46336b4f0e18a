// Copyright 2026 the Piewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angular spans and wedge geometry.

use kurbo::{BezPath, CircleSegment, Point, Shape};

/// The `[start, end)` angular interval assigned to one segment, in radians.
///
/// Angles follow kurbo's convention: measured from the positive X axis,
/// increasing toward positive Y. Layout guarantees `start <= end` for spans
/// it produces; a zero-sweep span is a legitimate value used as the start
/// point of an entering segment and the end point of an exiting one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AngularSpan {
    /// Start angle in radians.
    pub start: f64,
    /// End angle in radians.
    pub end: f64,
}

impl AngularSpan {
    /// Creates a span from start and end angles.
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Returns the angular width of the span.
    #[must_use]
    pub fn sweep(self) -> f64 {
        self.end - self.start
    }

    /// Returns `true` if the span has no angular width.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.sweep() == 0.0
    }

    /// Returns the zero-sweep span sitting at this span's end angle.
    ///
    /// Entering segments sweep open from here; exiting segments sweep closed
    /// toward it, so both transitions pivot on a single visual edge.
    #[must_use]
    pub const fn collapsed_at_end(self) -> Self {
        Self {
            start: self.end,
            end: self.end,
        }
    }

    /// Linearly interpolates both angles toward `other`.
    ///
    /// `t` is not clamped; callers clamp when sampling a transition.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            start: self.start + (other.start - self.start) * t,
            end: self.end + (other.end - self.end) * t,
        }
    }
}

/// Builds the annular wedge path for one span.
///
/// `outer_radius` and `inner_radius` are in local units around `center`;
/// passing `inner_radius == 0.0` yields a plain pie slice. `tolerance` is the
/// curve flattening tolerance forwarded to kurbo.
#[must_use]
pub fn wedge_path(
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    span: AngularSpan,
    tolerance: f64,
) -> BezPath {
    CircleSegment::new(center, outer_radius, inner_radius, span.start, span.sweep())
        .to_path(tolerance)
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{PI, TAU};

    use super::*;

    #[test]
    fn sweep_and_empty() {
        let span = AngularSpan::new(0.0, PI);
        assert_eq!(span.sweep(), PI);
        assert!(!span.is_empty());

        let collapsed = span.collapsed_at_end();
        assert_eq!(collapsed.start, PI);
        assert!(collapsed.is_empty());
    }

    #[test]
    fn lerp_moves_both_angles() {
        let from = AngularSpan::new(0.0, PI);
        let to = AngularSpan::new(PI / 2.0, TAU);

        let mid = from.lerp(to, 0.5);
        assert!((mid.start - PI / 4.0).abs() < 1e-12);
        assert!((mid.end - (PI + TAU) / 2.0).abs() < 1e-12);

        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);
    }

    #[test]
    fn wedge_path_is_closed_and_bounded() {
        let path = wedge_path(
            Point::new(0.0, 0.0),
            150.0,
            75.0,
            AngularSpan::new(0.0, PI / 2.0),
            0.1,
        );

        let bbox = path.bounding_box();
        assert!(bbox.width() > 0.0 && bbox.height() > 0.0);
        assert!(bbox.max_x() <= 150.0 + 0.5);
        assert!(bbox.max_y() <= 150.0 + 0.5);
    }
}
