//! Projection seam for application records.
//!
//! The codec never inspects application types: a record reaches the encoder
//! only after being projected into an ordered string-keyed mapping. Each
//! record type implements [`ToRecord`] once (by hand or through codegen) and
//! decides its own field policies there — renaming, omitting empty or zero
//! fields, flattening embedded records, stringifying.

use crate::TermValue;

/// Deterministic projection of an application record into mapping entries.
pub trait ToRecord {
    /// Produces the record's fields as ordered key-value pairs.
    fn to_record(&self) -> Vec<(String, TermValue)>;
}

impl<T: ToRecord> From<&T> for TermValue {
    fn from(record: &T) -> Self {
        TermValue::Object(record.to_record())
    }
}
