//! One validation pass worth of normalized records.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::core::error::StructuralError;
use crate::core::record::MovieRecord;

/// A source entry that could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejected {
    /// Position in the source `results` array.
    pub index: usize,
    /// Raw `id` when one could be read.
    pub id: Option<i64>,
    pub error: StructuralError,
}

/// Accepted records in delivery order plus the entries that were dropped.
///
/// Built once per pass and never mutated afterwards; validators only take
/// `&Batch`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    records: Vec<MovieRecord>,
    rejected: Vec<Rejected>,
}

impl Batch {
    /// Normalize raw `results` entries. Broken entries are logged and kept
    /// aside so one bad record never aborts the pass.
    pub fn from_values(values: &[Value]) -> Self {
        let mut records = Vec::with_capacity(values.len());
        let mut rejected = Vec::new();

        for (index, value) in values.iter().enumerate() {
            match MovieRecord::from_value(value) {
                Ok(record) => records.push(record),
                Err(error) => {
                    let id = value.get("id").and_then(Value::as_i64);
                    warn!(index, ?id, %error, "rejecting malformed record");
                    rejected.push(Rejected { index, id, error });
                }
            }
        }

        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id) {
                warn!(id = record.id, title = %record.title, "duplicate record id in batch");
            }
        }

        info!(
            accepted = records.len(),
            rejected = rejected.len(),
            "batch normalized"
        );
        Self { records, rejected }
    }

    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        Self {
            records,
            rejected: Vec::new(),
        }
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn rejected(&self) -> &[Rejected] {
        &self.rejected
    }

    /// Number of entries delivered by the source, accepted or not.
    pub fn source_len(&self) -> usize {
        self.records.len() + self.rejected.len()
    }
}
