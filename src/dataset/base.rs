use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::Result;
use crate::io::{self, SourceFormat};

/// One data row: a string-keyed mapping of field name to value.
///
/// Key iteration order is insertion order (serde_json's `preserve_order`
/// feature), which the rename and column-derivation semantics rely on.
pub type Record = Map<String, Value>;

/// Policy for deriving the column list of a [`Dataset`] from its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnPolicy {
    /// Columns are the keys of the last record, in that record's key order.
    #[default]
    LastRecord,
    /// Columns are the union of all records' keys, in first-seen order.
    KeyUnion,
}

/// Dataset struct: an ordered collection of records plus derived
/// column list and row count
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    columns: Vec<String>,
    row_count: usize,
    policy: ColumnPolicy,
}

impl Dataset {
    /// Create a new empty Dataset
    pub fn new() -> Self {
        Self::from_records(Vec::new())
    }

    /// Create a Dataset from an ordered sequence of records.
    ///
    /// Never fails: an empty sequence yields a valid, empty Dataset.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self::with_policy(records, ColumnPolicy::default())
    }

    /// Create a Dataset with an explicit column-derivation policy
    pub fn with_policy(records: Vec<Record>, policy: ColumnPolicy) -> Self {
        let columns = derive_columns(&records, policy);
        debug!(?columns, rows = records.len(), "dataset constructed");
        Self {
            row_count: records.len(),
            records,
            columns,
            policy,
        }
    }

    /// Read a Dataset from a file in the given source format
    pub fn from_path<P: AsRef<Path>>(path: P, format: SourceFormat) -> Result<Dataset> {
        match format {
            SourceFormat::Csv => io::read_csv(path),
            SourceFormat::Json => io::read_json(path),
        }
    }

    /// Write the Dataset to a CSV file at the given path
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        io::write_csv(self, path)
    }

    /// Get the records in the Dataset, in order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Get the derived column names, in order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Get the number of rows in the Dataset
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Check whether the Dataset has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the column-derivation policy in effect
    pub fn policy(&self) -> ColumnPolicy {
        self.policy
    }

    /// Replace the record sequence, recomputing the derived projections
    pub(crate) fn replace_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.row_count = self.records.len();
        self.columns = derive_columns(&self.records, self.policy);
        debug!(columns = ?self.columns, rows = self.row_count, "derived projections recomputed");
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new()
    }
}

// Derive the column list from the records under the given policy.
fn derive_columns(records: &[Record], policy: ColumnPolicy) -> Vec<String> {
    if records.is_empty() {
        warn!("deriving columns of an empty dataset");
        return Vec::new();
    }

    match policy {
        ColumnPolicy::LastRecord => records[records.len() - 1].keys().cloned().collect(),
        ColumnPolicy::KeyUnion => {
            let mut columns: Vec<String> = Vec::new();
            for record in records {
                for key in record.keys() {
                    if !columns.iter().any(|c| c == key) {
                        columns.push(key.clone());
                    }
                }
            }
            columns
        }
    }
}
