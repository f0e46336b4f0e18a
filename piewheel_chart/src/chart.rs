// Copyright 2026 the Piewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained segment state and per-render reconciliation.

use alloc::string::ToString;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use kurbo::Point;
use peniko::Color;
use piewheel_hit::{AnnularWedge, HitParams};
use piewheel_layout::{AngularSpan, ColorScale, blend, layout};
use piewheel_store::{Record, RecordId};
use smallvec::SmallVec;

use crate::frame::{FrameOp, LegendEntry};
use crate::options::{ChartFlags, ChartOptions};
use crate::tween::{Fade, SpanTween};
use crate::{HIGHLIGHT_TICKS, SWEEP_TICKS};

/// Per-render classification of one segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SegmentPhase {
    /// Present now, not before: sweeping open from its end angle.
    Entering,
    /// Present before and now: tweening between spans.
    Updating,
    /// Present before, not now: sweeping closed, then dropped.
    Exiting,
}

/// Retained visual state for one segment, keyed by record id.
#[derive(Clone, Debug)]
struct SegmentState {
    tween: SpanTween,
    color: Color,
    highlight: Option<Fade>,
    phase: SegmentPhase,
}

impl SegmentState {
    fn fill(&self, highlight: Color, now: u64) -> Color {
        match &self.highlight {
            Some(fade) => blend(self.color, highlight, fade.sample(now)),
            None => self.color,
        }
    }
}

/// A live-updating pie chart.
///
/// The chart mirrors nothing itself; callers hand it the full current record
/// list via [`render`](Self::render) after every applied change batch, then
/// sample animation frames with [`frame`](Self::frame). See the crate docs
/// for the reconciliation rules.
#[derive(Clone, Debug)]
pub struct PieChart {
    options: ChartOptions,
    segments: HashMap<RecordId, SegmentState>,
    /// Draw order: current list order, exiting segments appended.
    order: Vec<RecordId>,
    scale: ColorScale,
    legend: Vec<LegendEntry>,
    hovered: Option<RecordId>,
}

impl PieChart {
    /// Creates an empty chart with the given options.
    #[must_use]
    pub fn new(options: ChartOptions) -> Self {
        Self {
            options,
            segments: HashMap::new(),
            order: Vec::new(),
            scale: ColorScale::default(),
            legend: Vec::new(),
            hovered: None,
        }
    }

    /// Returns the chart's configuration.
    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Returns the id of the currently hovered segment, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<&RecordId> {
        self.hovered.as_ref()
    }

    /// Returns the current legend rows in slot order.
    ///
    /// Empty unless [`ChartFlags::LEGEND`] is set.
    #[must_use]
    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    /// Returns the classification of the segment with the given id, if it is
    /// currently retained.
    #[must_use]
    pub fn phase(&self, id: &RecordId) -> Option<SegmentPhase> {
        self.segments.get(id).map(|s| s.phase)
    }

    /// Returns the span the given segment displays at `now`.
    #[must_use]
    pub fn span_of(&self, id: &RecordId, now: u64) -> Option<AngularSpan> {
        self.segments.get(id).map(|s| s.tween.sample(now))
    }

    /// Reconciles the chart against the full current record list.
    ///
    /// Call this exactly once per applied change batch. Every retained
    /// segment is reclassified by comparing the previous and current id sets;
    /// transitions start at `now` and run for [`SWEEP_TICKS`]. Colors are
    /// refreshed from the rebuilt scale for all segments, so palette slots
    /// may shift when the set of distinct names changes.
    pub fn render(&mut self, records: &[Record], now: u64) {
        let slices = layout(records);
        self.scale.assign(records);

        let mut order = Vec::with_capacity(slices.len());
        for slice in &slices {
            let id = &slice.record.id;
            let color = self
                .scale
                .color_of(&slice.record.name)
                .unwrap_or(self.options.highlight);
            match self.segments.get_mut(id) {
                Some(state) => {
                    // Mid-animation handoff: continue from whatever the
                    // in-flight transition currently displays.
                    let from = state.tween.sample(now);
                    state.tween = SpanTween::new(from, slice.span, now, SWEEP_TICKS);
                    state.color = color;
                    state.phase = SegmentPhase::Updating;
                }
                None => {
                    let seed = slice.span.collapsed_at_end();
                    self.segments.insert(
                        id.clone(),
                        SegmentState {
                            tween: SpanTween::new(seed, slice.span, now, SWEEP_TICKS),
                            color,
                            highlight: None,
                            phase: SegmentPhase::Entering,
                        },
                    );
                }
            }
            order.push(id.clone());
        }

        let current: HashSet<&RecordId> = order.iter().collect();
        let mut exits: SmallVec<[RecordId; 4]> = SmallVec::new();
        for id in &self.order {
            if current.contains(id) {
                continue;
            }
            let Some(state) = self.segments.get_mut(id) else {
                continue;
            };
            if state.phase != SegmentPhase::Exiting {
                let from = state.tween.sample(now);
                state.tween = SpanTween::new(from, from.collapsed_at_end(), now, SWEEP_TICKS);
                state.phase = SegmentPhase::Exiting;
            }
            exits.push(id.clone());
        }
        drop(current);
        order.extend(exits);
        self.order = order;

        // An exiting segment cannot stay hovered.
        if let Some(hovered) = &self.hovered
            && self
                .segments
                .get(hovered)
                .is_none_or(|s| s.phase == SegmentPhase::Exiting)
        {
            self.hovered = None;
        }

        self.legend.clear();
        if self.options.flags.contains(ChartFlags::LEGEND) {
            self.legend.extend(self.scale.domain().map(|(name, color)| {
                LegendEntry {
                    name: name.to_string(),
                    color,
                }
            }));
        }
    }

    /// Samples every live transition and emits this frame's draw ops.
    ///
    /// Exiting segments whose sweep-closed transition has finished are
    /// dropped here, before the ops are built. Wedge ops come first in draw
    /// order, then legend swatch/label pairs when the legend is enabled.
    pub fn frame(&mut self, now: u64) -> Vec<FrameOp> {
        let mut order = core::mem::take(&mut self.order);
        order.retain(|id| match self.segments.get(id) {
            Some(state) if state.phase == SegmentPhase::Exiting && state.tween.is_finished(now) => {
                self.segments.remove(id);
                false
            }
            Some(_) => true,
            None => false,
        });
        self.order = order;

        let mut ops = Vec::with_capacity(self.order.len() + 2 * self.legend.len());
        for id in &self.order {
            let Some(state) = self.segments.get(id) else {
                continue;
            };
            ops.push(FrameOp::Wedge {
                id: id.clone(),
                span: state.tween.sample(now),
                color: state.fill(self.options.highlight, now),
            });
        }
        for (index, entry) in self.legend.iter().enumerate() {
            ops.push(FrameOp::LegendSwatch {
                index,
                color: entry.color,
            });
            ops.push(FrameOp::LegendLabel {
                index,
                text: entry.name.clone(),
                color: self.options.legend_text,
            });
        }
        ops
    }

    /// Processes a pointer move, returning the id of the segment now under
    /// the pointer.
    ///
    /// With [`ChartFlags::HOVER_HIGHLIGHT`] set, hover changes start fill
    /// fades over [`HIGHLIGHT_TICKS`]: the newly hovered segment fades
    /// toward the highlight color, the previously hovered one fades back.
    /// Fades pick up from their currently sampled factor, so rapid hover
    /// flips stay smooth.
    pub fn pointer_moved(&mut self, pt: Point, now: u64) -> Option<RecordId> {
        let hit = self.hit_at(pt, now);
        if hit != self.hovered {
            if self.options.flags.contains(ChartFlags::HOVER_HIGHLIGHT) {
                if let Some(prev) = self.hovered.take()
                    && let Some(state) = self.segments.get_mut(&prev)
                {
                    let factor = state.highlight.map_or(0.0, |f| f.sample(now));
                    state.highlight = Some(Fade::new(factor, 0.0, now, HIGHLIGHT_TICKS));
                }
                if let Some(next) = &hit
                    && let Some(state) = self.segments.get_mut(next)
                {
                    let factor = state.highlight.map_or(0.0, |f| f.sample(now));
                    state.highlight = Some(Fade::new(factor, 1.0, now, HIGHLIGHT_TICKS));
                }
            }
            self.hovered = hit.clone();
        }
        hit
    }

    /// Resolves a pointer press to the segment under the pointer.
    ///
    /// The chart itself never mutates any store; hosts (or
    /// [`driver::ChartDriver`](crate::driver::ChartDriver)) issue the delete
    /// request for the returned id.
    #[must_use]
    pub fn pointer_pressed(&self, pt: Point, now: u64) -> Option<RecordId> {
        self.hit_at(pt, now)
    }

    /// Hit test against the currently displayed (sampled) spans.
    ///
    /// Exiting segments are skipped: they are already on their way out and
    /// clicking them would re-issue a delete for a gone document.
    fn hit_at(&self, pt: Point, now: u64) -> Option<RecordId> {
        let params = HitParams::default();
        for id in &self.order {
            let Some(state) = self.segments.get(id) else {
                continue;
            };
            if state.phase == SegmentPhase::Exiting {
                continue;
            }
            let span = state.tween.sample(now);
            let wedge = AnnularWedge {
                center: self.options.center,
                outer_radius: self.options.outer_radius,
                inner_radius: self.options.inner_radius,
                start_angle: span.start,
                sweep: span.sweep(),
            };
            if wedge.hit_test_local(pt, &params).is_some() {
                return Some(id.clone());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::TAU;

    use super::*;

    fn rec(id: &str, name: &str, cost: f64) -> Record {
        Record::new(id, name, cost)
    }

    fn id(s: &str) -> RecordId {
        RecordId::new(s)
    }

    fn wedge_spans(ops: &[FrameOp]) -> Vec<(RecordId, AngularSpan)> {
        ops.iter()
            .filter_map(|op| match op {
                FrameOp::Wedge { id, span, .. } => Some((id.clone(), *span)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn first_render_enters_all_segments() {
        let mut chart = PieChart::new(ChartOptions::default());
        chart.render(&[rec("a", "Food", 10.0), rec("b", "Rent", 30.0)], 0);

        assert_eq!(chart.phase(&id("a")), Some(SegmentPhase::Entering));
        assert_eq!(chart.phase(&id("b")), Some(SegmentPhase::Entering));

        // At tick zero each wedge sits collapsed at its final end angle.
        let spans = wedge_spans(&chart.frame(0));
        assert!(spans.iter().all(|(_, span)| span.is_empty()));

        // Fully swept open, the two spans tile 25% / 75%.
        let spans = wedge_spans(&chart.frame(SWEEP_TICKS));
        assert!((spans[0].1.sweep() - TAU * 0.25).abs() < 1e-12);
        assert!((spans[1].1.sweep() - TAU * 0.75).abs() < 1e-12);
    }

    #[test]
    fn rerendering_the_same_list_is_pure_update() {
        let records = [rec("a", "Food", 10.0), rec("b", "Rent", 30.0)];
        let mut chart = PieChart::new(ChartOptions::default());
        chart.render(&records, 0);
        let settled = wedge_spans(&chart.frame(SWEEP_TICKS));

        chart.render(&records, SWEEP_TICKS);

        assert_eq!(chart.phase(&id("a")), Some(SegmentPhase::Updating));
        assert_eq!(chart.phase(&id("b")), Some(SegmentPhase::Updating));
        // Degenerate update: the spans do not move at any sample point.
        let mid = wedge_spans(&chart.frame(SWEEP_TICKS + SWEEP_TICKS / 3));
        assert_eq!(mid, settled);
    }

    #[test]
    fn modified_cost_tweens_between_spans() {
        let mut chart = PieChart::new(ChartOptions::default());
        chart.render(&[rec("a", "Food", 10.0), rec("b", "Rent", 30.0)], 0);
        let _ = chart.frame(SWEEP_TICKS);

        // "a" grows to an even split.
        chart.render(&[rec("a", "Food", 30.0), rec("b", "Rent", 30.0)], SWEEP_TICKS);

        let old = TAU * 0.25;
        let target = TAU * 0.5;
        let start = chart.span_of(&id("a"), SWEEP_TICKS).unwrap();
        assert!((start.sweep() - old).abs() < 1e-12);

        let mid = chart.span_of(&id("a"), SWEEP_TICKS + SWEEP_TICKS / 2).unwrap();
        assert!(mid.sweep() > old && mid.sweep() < target);

        let done = chart.span_of(&id("a"), 2 * SWEEP_TICKS).unwrap();
        assert!((done.sweep() - target).abs() < 1e-12);
    }

    #[test]
    fn removal_sweeps_closed_and_drops_state() {
        let mut chart = PieChart::new(ChartOptions::default());
        chart.render(&[rec("a", "Food", 10.0), rec("b", "Rent", 30.0)], 0);
        let _ = chart.frame(SWEEP_TICKS);

        chart.render(&[rec("a", "Food", 10.0)], SWEEP_TICKS);
        assert_eq!(chart.phase(&id("b")), Some(SegmentPhase::Exiting));

        // Mid-exit the wedge is still drawn, shrinking toward its end angle.
        let spans = wedge_spans(&chart.frame(SWEEP_TICKS + SWEEP_TICKS / 2));
        assert_eq!(spans.len(), 2);
        let b_span = spans.iter().find(|(i, _)| *i == id("b")).unwrap().1;
        assert!(b_span.sweep() > 0.0 && b_span.sweep() < TAU * 0.75);

        // Once finished, the segment is gone and the survivor owns the circle.
        let spans = wedge_spans(&chart.frame(2 * SWEEP_TICKS));
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].0, id("a"));
        assert!((spans[0].1.sweep() - TAU).abs() < 1e-12);
        assert_eq!(chart.phase(&id("b")), None);
    }

    #[test]
    fn mid_animation_render_hands_off_smoothly() {
        let mut chart = PieChart::new(ChartOptions::default());
        chart.render(&[rec("a", "Food", 10.0)], 0);

        // Re-render halfway through the entering sweep.
        let halfway = chart.span_of(&id("a"), SWEEP_TICKS / 2).unwrap();
        chart.render(&[rec("a", "Food", 10.0)], SWEEP_TICKS / 2);

        // The new tween starts exactly where the old one was sampled.
        let resumed = chart.span_of(&id("a"), SWEEP_TICKS / 2).unwrap();
        assert_eq!(resumed, halfway);
    }

    #[test]
    fn readded_id_revives_an_exiting_segment() {
        let mut chart = PieChart::new(ChartOptions::default());
        chart.render(&[rec("a", "Food", 10.0)], 0);
        let _ = chart.frame(SWEEP_TICKS);

        chart.render(&[], SWEEP_TICKS);
        assert_eq!(chart.phase(&id("a")), Some(SegmentPhase::Exiting));

        chart.render(&[rec("a", "Food", 10.0)], SWEEP_TICKS + 100);
        assert_eq!(chart.phase(&id("a")), Some(SegmentPhase::Updating));

        let spans = wedge_spans(&chart.frame(2 * SWEEP_TICKS + 100));
        assert_eq!(spans.len(), 1);
        assert!((spans[0].1.sweep() - TAU).abs() < 1e-12);
    }

    #[test]
    fn hover_fades_toward_highlight_and_back() {
        let options = ChartOptions {
            center: Point::ZERO,
            ..ChartOptions::default()
        };
        let highlight = options.highlight;
        let mut chart = PieChart::new(options);
        chart.render(&[rec("a", "Food", 10.0)], 0);
        let _ = chart.frame(SWEEP_TICKS);

        let base = {
            let ops = chart.frame(SWEEP_TICKS);
            match &ops[0] {
                FrameOp::Wedge { color, .. } => *color,
                other => panic!("expected wedge, got {other:?}"),
            }
        };

        // A point on the annulus; the single segment owns the full circle.
        let over = Point::new(100.0, 0.0);
        let hovered = chart.pointer_moved(over, SWEEP_TICKS);
        assert_eq!(hovered, Some(id("a")));
        assert_eq!(chart.hovered(), Some(&id("a")));

        // After the fade completes the fill is the highlight color.
        let ops = chart.frame(SWEEP_TICKS + HIGHLIGHT_TICKS);
        match &ops[0] {
            FrameOp::Wedge { color, .. } => {
                assert_eq!(color.to_rgba8(), highlight.to_rgba8());
            }
            other => panic!("expected wedge, got {other:?}"),
        }

        // Pointer leaves: the fill fades back to the base color.
        let off = Point::new(500.0, 500.0);
        assert_eq!(chart.pointer_moved(off, SWEEP_TICKS + HIGHLIGHT_TICKS), None);
        let ops = chart.frame(SWEEP_TICKS + 2 * HIGHLIGHT_TICKS);
        match &ops[0] {
            FrameOp::Wedge { color, .. } => {
                assert_eq!(color.to_rgba8(), base.to_rgba8());
            }
            other => panic!("expected wedge, got {other:?}"),
        }
    }

    #[test]
    fn pointer_press_resolves_the_wedge_under_the_pointer() {
        let mut chart = PieChart::new(ChartOptions::default());
        chart.render(&[rec("a", "Food", 10.0), rec("b", "Rent", 30.0)], 0);
        let now = SWEEP_TICKS;
        let _ = chart.frame(now);

        // "a" spans the first quarter turn; a 45-degree ray lands in it.
        let hit_a = Point::new(80.0, 80.0);
        assert_eq!(chart.pointer_pressed(hit_a, now), Some(id("a")));

        // The opposite side belongs to "b".
        let hit_b = Point::new(-80.0, -80.0);
        assert_eq!(chart.pointer_pressed(hit_b, now), Some(id("b")));

        // The donut hole hits nothing.
        assert_eq!(chart.pointer_pressed(Point::ZERO, now), None);
    }

    #[test]
    fn legend_tracks_the_color_domain() {
        let options = ChartOptions {
            flags: ChartFlags::LEGEND | ChartFlags::HOVER_HIGHLIGHT,
            ..ChartOptions::default()
        };
        let mut chart = PieChart::new(options);

        chart.render(
            &[
                rec("a", "Rent", 10.0),
                rec("b", "Food", 5.0),
                rec("c", "Rent", 3.0),
            ],
            0,
        );

        let names: Vec<_> = chart.legend().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Rent", "Food"]);

        // Legend ops trail the wedges, one swatch/label pair per row.
        let ops = chart.frame(0);
        let swatches = ops
            .iter()
            .filter(|op| matches!(op, FrameOp::LegendSwatch { .. }))
            .count();
        let labels = ops
            .iter()
            .filter(|op| matches!(op, FrameOp::LegendLabel { .. }))
            .count();
        assert_eq!(swatches, 2);
        assert_eq!(labels, 2);

        // A name disappearing shrinks the legend on the next render.
        chart.render(&[rec("b", "Food", 5.0)], 100);
        let names: Vec<_> = chart.legend().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Food"]);
    }

    #[test]
    fn legend_is_empty_when_disabled() {
        let mut chart = PieChart::new(ChartOptions::default());
        chart.render(&[rec("a", "Food", 10.0)], 0);

        assert!(chart.legend().is_empty());
        let ops = chart.frame(0);
        assert!(
            ops.iter()
                .all(|op| matches!(op, FrameOp::Wedge { .. }))
        );
    }

    #[test]
    fn exiting_segments_are_not_hit_targets() {
        let mut chart = PieChart::new(ChartOptions::default());
        chart.render(&[rec("a", "Food", 10.0)], 0);
        let _ = chart.frame(SWEEP_TICKS);

        chart.render(&[], SWEEP_TICKS);

        // Mid-exit the wedge still draws but no longer resolves hits.
        let pt = Point::new(100.0, 1.0);
        assert_eq!(chart.pointer_pressed(pt, SWEEP_TICKS + 10), None);
    }

    #[test]
    fn hover_clears_when_the_segment_exits() {
        let mut chart = PieChart::new(ChartOptions::default());
        chart.render(&[rec("a", "Food", 10.0)], 0);
        let _ = chart.frame(SWEEP_TICKS);
        chart.pointer_moved(Point::new(100.0, 0.0), SWEEP_TICKS);
        assert_eq!(chart.hovered(), Some(&id("a")));

        chart.render(&[], SWEEP_TICKS);
        assert_eq!(chart.hovered(), None);
    }

    #[test]
    fn shared_names_share_wedge_colors() {
        let mut chart = PieChart::new(ChartOptions::default());
        chart.render(&[rec("a", "Food", 10.0), rec("b", "Food", 30.0)], 0);

        let ops = chart.frame(SWEEP_TICKS);
        let colors: Vec<_> = ops
            .iter()
            .filter_map(|op| match op {
                FrameOp::Wedge { color, .. } => Some(color.to_rgba8()),
                _ => None,
            })
            .collect();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0], colors[1]);
    }
}
