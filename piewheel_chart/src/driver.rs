// Copyright 2026 the Piewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subscription driver: change feed in, deletes out.
//!
//! [`ChartDriver`] composes the record mirror, the chart, and a handle to the
//! external document store into the full update loop:
//!
//! - [`ChartDriver::on_snapshot`] applies one ordered change batch to the
//!   mirror and then re-renders the chart exactly once, regardless of how
//!   many events the batch held.
//! - [`ChartDriver::pointer_pressed`] resolves the clicked segment and issues
//!   a delete to the external store. The local mirror is deliberately left
//!   untouched: the removal round-trips through the change feed and lands in
//!   a later snapshot, keeping the external store the single source of truth.
//!
//! ## Example
//!
//! ```rust
//! use piewheel_chart::driver::ChartDriver;
//! use piewheel_chart::ChartOptions;
//! use piewheel_store::{Change, DocumentStore, Record, RecordId};
//!
//! /// A document store stub that records delete requests.
//! #[derive(Debug, Default)]
//! struct FakeStore {
//!     deleted: Vec<RecordId>,
//! }
//!
//! impl DocumentStore for FakeStore {
//!     type Error = core::convert::Infallible;
//!
//!     fn delete(&mut self, id: &RecordId) -> Result<(), Self::Error> {
//!         self.deleted.push(id.clone());
//!         Ok(())
//!     }
//! }
//!
//! let mut driver = ChartDriver::new(ChartOptions::default(), FakeStore::default());
//! driver.on_snapshot([Change::added(Record::new("a", "Food", 10.0))], 0);
//! assert_eq!(driver.store().len(), 1);
//! ```

use alloc::vec::Vec;

use kurbo::Point;
use piewheel_store::{ApplyReport, Change, DocumentStore, RecordId, RecordStore};

use crate::chart::PieChart;
use crate::frame::FrameOp;
use crate::options::ChartOptions;

/// The full subscription loop around one chart.
#[derive(Debug)]
pub struct ChartDriver<D: DocumentStore> {
    store: RecordStore,
    chart: PieChart,
    documents: D,
}

impl<D: DocumentStore> ChartDriver<D> {
    /// Creates a driver with an empty mirror and chart.
    #[must_use]
    pub fn new(options: ChartOptions, documents: D) -> Self {
        Self {
            store: RecordStore::new(),
            chart: PieChart::new(options),
            documents,
        }
    }

    /// Returns the mirrored record list.
    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Returns the chart.
    #[must_use]
    pub fn chart(&self) -> &PieChart {
        &self.chart
    }

    /// Returns the external document store handle.
    pub fn documents_mut(&mut self) -> &mut D {
        &mut self.documents
    }

    /// Applies one ordered change batch, then re-renders the chart once.
    pub fn on_snapshot(
        &mut self,
        batch: impl IntoIterator<Item = Change>,
        now: u64,
    ) -> ApplyReport {
        let report = self.store.apply(batch);
        self.chart.render(self.store.records(), now);
        report
    }

    /// Forwards a pointer move to the chart.
    pub fn pointer_moved(&mut self, pt: Point, now: u64) -> Option<RecordId> {
        self.chart.pointer_moved(pt, now)
    }

    /// Resolves a click and issues a delete for the hit segment's id.
    ///
    /// Returns the id the delete was issued for, or `None` when the click
    /// landed outside every segment. A failed delete surfaces the external
    /// store's error; the mirror is unchanged either way.
    pub fn pointer_pressed(&mut self, pt: Point, now: u64) -> Result<Option<RecordId>, D::Error> {
        let Some(id) = self.chart.pointer_pressed(pt, now) else {
            return Ok(None);
        };
        self.documents.delete(&id)?;
        Ok(Some(id))
    }

    /// Samples the current animation frame.
    pub fn frame(&mut self, now: u64) -> Vec<FrameOp> {
        self.chart.frame(now)
    }
}
