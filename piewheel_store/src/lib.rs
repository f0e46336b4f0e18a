// Copyright 2026 the Piewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piewheel Store: an ordered record mirror of an external change feed.
//!
//! This crate maintains a faithful, eventually-consistent local copy of a
//! record collection that lives in an external document store. The external
//! store delivers ordered batches of change events (added / modified /
//! removed); [`RecordStore::apply`] folds one batch into the mirror and
//! reports any anomalies it had to absorb.
//!
//! The crate does not know anything about rendering or about the transport
//! that delivers the events. Hosts subscribe to their document store however
//! they like, translate each notification into [`Change`] values, and apply
//! them in the order received.
//!
//! ## Minimal example
//!
//! ```rust
//! use piewheel_store::{Change, Record, RecordStore};
//!
//! let mut store = RecordStore::new();
//!
//! let report = store.apply([
//!     Change::added(Record::new("a", "Food", 10.0)),
//!     Change::added(Record::new("b", "Rent", 30.0)),
//!     Change::modified(Record::new("a", "Food", 30.0)),
//! ]);
//!
//! assert_eq!(report.applied, 3);
//! assert_eq!(store.len(), 2);
//! assert_eq!(store.records()[0].cost, 30.0);
//! ```
//!
//! ## Anomaly handling
//!
//! The external store contract says ids are unique and that `modified` /
//! `removed` always refer to a live document, but the mirror does not trust
//! that blindly:
//!
//! - A `modified` event with no matching id is a counted no-op
//!   ([`ApplyReport::unmatched_modifies`]).
//! - An `added` event whose id is already present replaces the existing
//!   entry in place, keeping the mirror keyed by id instead of growing a
//!   duplicate row ([`ApplyReport::duplicate_adds`]).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod record;
mod store;

pub use record::{Change, ChangeKind, DocumentStore, Record, RecordId};
pub use store::{ApplyReport, RecordStore};
