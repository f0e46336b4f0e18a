// Copyright 2026 the Piewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick-based linear transitions.

use piewheel_layout::AngularSpan;

/// A linear transition between two angular spans over a fixed tick window.
///
/// Both angles interpolate independently and clamp at the endpoints, so
/// sampling before `start` yields `from` and sampling after the window
/// yields `to`. A zero duration snaps to `to` immediately.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpanTween {
    from: AngularSpan,
    to: AngularSpan,
    start: u64,
    duration: u64,
}

impl SpanTween {
    /// Creates a transition from `from` to `to` starting at `start`.
    #[must_use]
    pub const fn new(from: AngularSpan, to: AngularSpan, start: u64, duration: u64) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    /// A degenerate transition pinned at `span`.
    #[must_use]
    pub const fn fixed(span: AngularSpan) -> Self {
        Self::new(span, span, 0, 0)
    }

    /// The span this transition settles on.
    #[must_use]
    pub const fn target(self) -> AngularSpan {
        self.to
    }

    /// Samples the displayed span at the given tick.
    #[must_use]
    pub fn sample(self, now: u64) -> AngularSpan {
        if self.duration == 0 || now >= self.start.saturating_add(self.duration) {
            return self.to;
        }
        if now <= self.start {
            return self.from;
        }
        let t = (now - self.start) as f64 / self.duration as f64;
        self.from.lerp(self.to, t)
    }

    /// Returns `true` once the transition has settled on its target.
    #[must_use]
    pub fn is_finished(self, now: u64) -> bool {
        now >= self.start.saturating_add(self.duration)
    }
}

/// A linear transition over the unit interval, used for fill fades.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fade {
    from: f64,
    to: f64,
    start: u64,
    duration: u64,
}

impl Fade {
    /// Creates a fade from `from` to `to` starting at `start`.
    #[must_use]
    pub const fn new(from: f64, to: f64, start: u64, duration: u64) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    /// Samples the fade factor at the given tick.
    #[must_use]
    pub fn sample(self, now: u64) -> f64 {
        if self.duration == 0 || now >= self.start.saturating_add(self.duration) {
            return self.to;
        }
        if now <= self.start {
            return self.from;
        }
        let t = (now - self.start) as f64 / self.duration as f64;
        self.from + (self.to - self.from) * t
    }

    /// Returns `true` once the fade has settled on its target.
    #[must_use]
    pub fn is_finished(self, now: u64) -> bool {
        now >= self.start.saturating_add(self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_tween_clamps_at_both_ends() {
        let from = AngularSpan::new(0.0, 1.0);
        let to = AngularSpan::new(1.0, 3.0);
        let tween = SpanTween::new(from, to, 100, 200);

        assert_eq!(tween.sample(0), from);
        assert_eq!(tween.sample(100), from);
        assert_eq!(tween.sample(300), to);
        assert_eq!(tween.sample(1_000), to);
        assert!(!tween.is_finished(299));
        assert!(tween.is_finished(300));
    }

    #[test]
    fn span_tween_interpolates_linearly() {
        let tween = SpanTween::new(
            AngularSpan::new(0.0, 1.0),
            AngularSpan::new(1.0, 3.0),
            0,
            100,
        );

        let mid = tween.sample(50);
        assert!((mid.start - 0.5).abs() < 1e-12);
        assert!((mid.end - 2.0).abs() < 1e-12);
    }

    #[test]
    fn zero_duration_snaps_to_target() {
        let to = AngularSpan::new(1.0, 2.0);
        let tween = SpanTween::new(AngularSpan::new(0.0, 0.0), to, 10, 0);

        assert_eq!(tween.sample(0), to);
        assert!(tween.is_finished(10));
    }

    #[test]
    fn fixed_tween_never_moves() {
        let span = AngularSpan::new(0.5, 2.5);
        let tween = SpanTween::fixed(span);

        assert_eq!(tween.sample(0), span);
        assert_eq!(tween.sample(u64::MAX), span);
        assert_eq!(tween.target(), span);
    }

    #[test]
    fn fade_runs_both_directions() {
        let up = Fade::new(0.0, 1.0, 0, 100);
        assert_eq!(up.sample(0), 0.0);
        assert!((up.sample(50) - 0.5).abs() < 1e-12);
        assert_eq!(up.sample(100), 1.0);

        let down = Fade::new(1.0, 0.0, 0, 100);
        assert!((down.sample(25) - 0.75).abs() < 1e-12);
        assert_eq!(down.sample(100), 0.0);
    }

    #[test]
    fn fade_handoff_starts_from_sampled_value() {
        let up = Fade::new(0.0, 1.0, 0, 100);
        let mid = up.sample(40);

        // Pointer leaves mid-fade: the reverse fade picks up where the
        // forward one currently is.
        let down = Fade::new(mid, 0.0, 40, 100);
        assert!((down.sample(40) - mid).abs() < 1e-12);
        assert_eq!(down.sample(140), 0.0);
    }
}
