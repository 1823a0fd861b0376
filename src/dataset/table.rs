use serde_json::Value;
use tracing::{debug, warn};

use crate::dataset::Dataset;

/// Placeholder written for a field that is absent from a record when the
/// dataset is tabularized for CSV output.
pub const MISSING_FIELD: &str = "Unavailable";

/// Convert the dataset into a rectangular table for CSV serialization.
///
/// The first row is the column list; each subsequent row holds, for each
/// column in order, the record's value rendered as a cell, or
/// [`MISSING_FIELD`] when the record has no such field. Returns an empty
/// table when there are no records or no columns can be derived.
pub(crate) fn to_table(dataset: &Dataset) -> Vec<Vec<String>> {
    if dataset.is_empty() {
        warn!("tabularizing an empty dataset");
        return Vec::new();
    }

    let columns = dataset.columns();
    if columns.is_empty() {
        warn!("no columns could be derived for tabularization");
        return Vec::new();
    }

    let mut table = Vec::with_capacity(dataset.row_count() + 1);
    table.push(columns.to_vec());

    for record in dataset.records() {
        let row = columns
            .iter()
            .map(|column| match record.get(column) {
                Some(value) => render_cell(value),
                None => MISSING_FIELD.to_string(),
            })
            .collect();
        table.push(row);
    }

    debug!(rows = table.len(), "dataset tabularized");
    table
}

// Render a field value as a CSV cell. Strings are written unquoted, null
// becomes the empty string, everything else uses its JSON rendering.
fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
