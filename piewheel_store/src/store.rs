// Copyright 2026 the Piewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The record mirror and batch application.

use alloc::vec::Vec;

use crate::record::{Change, ChangeKind, Record, RecordId};

/// Per-batch counters returned by [`RecordStore::apply`].
///
/// `applied` counts events that mutated the mirror. The two anomaly counters
/// track events the external store contract says should not occur; they are
/// absorbed safely rather than corrupting the mirror, and surfaced here so
/// hosts can decide whether to report them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Events that changed the mirror.
    pub applied: usize,
    /// `Modified` events whose id matched no entry (dropped).
    pub unmatched_modifies: usize,
    /// `Added` events whose id was already present (replaced in place).
    pub duplicate_adds: usize,
}

impl ApplyReport {
    /// Returns `true` if any anomaly counter is nonzero.
    #[must_use]
    pub fn has_anomalies(&self) -> bool {
        self.unmatched_modifies != 0 || self.duplicate_adds != 0
    }
}

/// An ordered mirror of the external record collection.
///
/// The store holds records in arrival order and applies change batches
/// strictly in the order given: no reordering, no deduplication, no merging
/// of events for the same id within a batch. Repeated updates to one id in a
/// single batch are last-write-wins.
///
/// A revision counter bumps once per batch that changed anything, so callers
/// can cheaply detect whether a re-render is needed.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    revision: u64,
}

impl RecordStore {
    /// Creates an empty mirror.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            revision: 0,
        }
    }

    /// Returns all records in arrival order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the record with the given id, if present.
    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == *id)
    }

    /// Returns the number of mirrored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the mirror is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the current revision.
    ///
    /// The revision bumps once per [`apply`](Self::apply) call that mutated
    /// the mirror.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Folds one ordered batch of change events into the mirror.
    ///
    /// Events apply in the order given. `Added` appends (or replaces, when
    /// the id is already present), `Modified` replaces the matching entry,
    /// and `Removed` drops every entry with a matching id. A `Modified`
    /// with no matching entry is a counted no-op.
    pub fn apply(&mut self, batch: impl IntoIterator<Item = Change>) -> ApplyReport {
        let mut report = ApplyReport::default();
        for change in batch {
            let Change { kind, record } = change;
            match kind {
                ChangeKind::Added => {
                    if let Some(pos) = self.position(&record.id) {
                        report.duplicate_adds += 1;
                        self.records[pos] = record;
                    } else {
                        self.records.push(record);
                    }
                    report.applied += 1;
                }
                ChangeKind::Modified => {
                    if let Some(pos) = self.position(&record.id) {
                        self.records[pos] = record;
                        report.applied += 1;
                    } else {
                        report.unmatched_modifies += 1;
                    }
                }
                ChangeKind::Removed => {
                    let before = self.records.len();
                    self.records.retain(|r| r.id != record.id);
                    if self.records.len() != before {
                        report.applied += 1;
                    }
                }
            }
        }
        if report.applied != 0 {
            self.revision = self.revision.wrapping_add(1);
        }
        report
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == *id)
    }
}
