use tracing::{debug, info, warn};

use crate::dataset::Dataset;

impl Dataset {
    /// Concatenate two Datasets row-wise into a new Dataset.
    ///
    /// This is an append of rows, not a relational key join: the result is
    /// all of `a`'s records in order, then all of `b`'s in order. The two
    /// inputs may have different schemas; the result's columns are derived
    /// from the combined records under `a`'s column policy.
    pub fn concat(a: &Dataset, b: &Dataset) -> Dataset {
        info!("concatenating two datasets");

        let mut combined = Vec::with_capacity(a.row_count() + b.row_count());
        combined.extend_from_slice(a.records());
        debug!(rows = a.row_count(), "records contributed by first dataset");
        combined.extend_from_slice(b.records());
        debug!(rows = b.row_count(), "records contributed by second dataset");

        if combined.is_empty() {
            warn!("concatenation produced an empty dataset");
            return Dataset::with_policy(Vec::new(), a.policy());
        }

        info!(rows = combined.len(), "concatenation complete");
        Dataset::with_policy(combined, a.policy())
    }
}
