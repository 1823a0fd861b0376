//! Lenient pipeline facade over the fallible core.
//!
//! These functions reproduce the pipeline-friendly contract of the original
//! tool: no error ever reaches the caller. A failed load yields an empty
//! [`Dataset`] and a failed save is a no-op; both are reported through the
//! active tracing subscriber. Callers that need to distinguish "failed"
//! from "legitimately empty" should use [`Dataset::from_path`] and
//! [`Dataset::to_csv`] instead, which return [`crate::Result`].

use std::path::Path;

use tracing::{error, info};

use crate::dataset::Dataset;
use crate::io::SourceFormat;

/// Load a Dataset from a file, returning an empty Dataset on any failure.
///
/// `format` names the source format (`"json"` or `"csv"`,
/// case-insensitive). Unsupported formats, missing files, malformed sources
/// and I/O failures are logged and degrade to an empty Dataset.
pub fn load<P: AsRef<Path>>(path: P, format: &str) -> Dataset {
    let path = path.as_ref();
    info!(path = %path.display(), format, "loading source file");

    let format: SourceFormat = match format.parse() {
        Ok(format) => format,
        Err(err) => {
            error!(%err, "cannot load source file");
            return Dataset::new();
        }
    };

    match Dataset::from_path(path, format) {
        Ok(dataset) => {
            info!(path = %path.display(), rows = dataset.row_count(), "load complete");
            dataset
        }
        Err(err) => {
            error!(path = %path.display(), %err, "load failed, returning empty dataset");
            Dataset::new()
        }
    }
}

/// Save a Dataset to a CSV file, doing nothing on failure.
///
/// An empty dataset aborts the save before anything is written; write
/// failures leave whatever the filesystem got. Both are logged.
pub fn save<P: AsRef<Path>>(dataset: &Dataset, path: P) {
    let path = path.as_ref();
    info!(path = %path.display(), "saving dataset");

    match dataset.to_csv(path) {
        Ok(()) => info!(path = %path.display(), rows = dataset.row_count(), "save complete"),
        Err(err) => error!(path = %path.display(), %err, "save failed"),
    }
}
