// Copyright 2026 the Piewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Record and change-event types shared across the workspace.

use alloc::string::String;
use core::fmt;

/// Identifier assigned to a record by the external document store.
///
/// Ids are opaque strings; identity and all matching during update/delete is
/// by value equality. The mirror never mints ids of its own.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Creates an id from the external store's string key.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One document mirrored from the external collection.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Identifier assigned by the external store.
    pub id: RecordId,
    /// Display name. Records sharing a name share a chart color.
    pub name: String,
    /// Cost value driving the record's angular share of the chart.
    ///
    /// The external store does not constrain this; layout clamps non-finite
    /// and non-positive values to zero weight.
    pub cost: f64,
}

impl Record {
    /// Creates a record from an id, a name, and a cost.
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>, cost: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
        }
    }
}

/// The kind of a change-feed event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    /// A document was added to the collection.
    Added,
    /// An existing document's fields changed.
    Modified,
    /// A document was deleted from the collection.
    Removed,
}

/// One change-feed event: a kind plus the document snapshot it refers to.
///
/// `Removed` events still carry the full snapshot the external store reported;
/// only the id is consulted when applying them.
#[derive(Clone, Debug, PartialEq)]
pub struct Change {
    /// What happened to the document.
    pub kind: ChangeKind,
    /// Snapshot of the document at the time of the event.
    pub record: Record,
}

impl Change {
    /// An `Added` event for the given snapshot.
    #[must_use]
    pub fn added(record: Record) -> Self {
        Self {
            kind: ChangeKind::Added,
            record,
        }
    }

    /// A `Modified` event for the given snapshot.
    #[must_use]
    pub fn modified(record: Record) -> Self {
        Self {
            kind: ChangeKind::Modified,
            record,
        }
    }

    /// A `Removed` event for the given snapshot.
    #[must_use]
    pub fn removed(record: Record) -> Self {
        Self {
            kind: ChangeKind::Removed,
            record,
        }
    }
}

/// Outbound surface of the external document store.
///
/// The chart issues a delete through this trait when a segment is clicked.
/// The resulting removal is *not* applied locally; it arrives asynchronously
/// through the change feed like any other edit, so the mirror stays
/// single-sourced.
pub trait DocumentStore {
    /// Error produced when a delete request cannot be issued.
    type Error;

    /// Requests deletion of the document with the given id.
    fn delete(&mut self, id: &RecordId) -> Result<(), Self::Error>;
}
