use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::dataset::{Dataset, Record};

impl Dataset {
    /// Rename columns in place using the given old-name to new-name mapping.
    ///
    /// Keys present in `mapping` are replaced by their mapped name; keys
    /// absent from it are kept as-is. When two old keys map to the same new
    /// key, the later key in the record's original order silently wins.
    /// An empty dataset is left untouched.
    pub fn rename_columns(&mut self, mapping: &HashMap<String, String>) {
        info!("renaming columns");

        if self.is_empty() {
            warn!("no records to rename");
            return;
        }

        let renamed: Vec<Record> = self
            .records()
            .iter()
            .map(|record| {
                record
                    .iter()
                    .map(|(old_key, value)| {
                        let new_key = mapping.get(old_key).unwrap_or(old_key);
                        (new_key.clone(), value.clone())
                    })
                    .collect()
            })
            .collect();

        self.replace_records(renamed);
        info!("column rename complete");
        debug!(columns = ?self.columns(), "columns after rename");
    }
}
