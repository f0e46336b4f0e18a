// Copyright 2026 the Piewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proportional angular layout over the current record list.

use alloc::vec::Vec;
use core::f64::consts::TAU;

use piewheel_store::Record;

use crate::span::AngularSpan;

/// One laid-out entry: a record together with its angular span.
#[derive(Copy, Clone, Debug)]
pub struct Slice<'a> {
    /// The record this slice encodes.
    pub record: &'a Record,
    /// The angular interval assigned to it.
    pub span: AngularSpan,
}

/// Assigns each record a contiguous angular span proportional to its cost
/// share, in list order.
///
/// Spans tile `[0, 2π)` consecutively with no sorting applied: the order of
/// `records` is the draw order. A record whose cost is non-finite or not
/// strictly positive contributes zero weight and receives a zero-sweep span
/// at its position in the sequence. When no record has positive weight,
/// every span is zero-sweep.
#[must_use]
pub fn layout(records: &[Record]) -> Vec<Slice<'_>> {
    let total: f64 = records.iter().map(weight).sum();

    let mut slices = Vec::with_capacity(records.len());
    let mut cursor = 0.0;
    let mut cum = 0.0;
    for record in records {
        let end = if total > 0.0 {
            cum += weight(record);
            // Dividing the running sum keeps the final end angle at exactly TAU.
            cum / total * TAU
        } else {
            cursor
        };
        slices.push(Slice {
            record,
            span: AngularSpan::new(cursor, end),
        });
        cursor = end;
    }
    slices
}

fn weight(r: &Record) -> f64 {
    if r.cost.is_finite() && r.cost > 0.0 {
        r.cost
    } else {
        0.0
    }
}
