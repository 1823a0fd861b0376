use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Writer};
use serde_json::Value;
use tracing::debug;

use crate::dataset::{table, Dataset, Record};
use crate::error::{Error, Result};

/// Read a Dataset from a CSV file.
///
/// The first line is the header; each subsequent line becomes one record
/// keyed by the header fields, with every value kept as a raw string. Rows
/// shorter than the header are padded with null for the missing trailing
/// fields; extra unnamed fields on longer rows are dropped.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let file = File::open(path.as_ref()).map_err(Error::Io)?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(Error::Csv)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records: Vec<Record> = Vec::new();
    for result in rdr.records() {
        let row = result.map_err(Error::Csv)?;
        let record: Record = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let value = match row.get(i) {
                    Some(field) => Value::String(field.to_string()),
                    None => Value::Null,
                };
                (header.clone(), value)
            })
            .collect();
        records.push(record);
    }

    debug!(rows = records.len(), "records read from CSV");
    Ok(Dataset::from_records(records))
}

/// Write a Dataset to a CSV file.
///
/// The dataset is tabularized first (header row plus one row per record,
/// absent fields filled with the placeholder token); an untabularizable
/// dataset aborts the save with [`Error::EmptyData`] and writes nothing.
pub fn write_csv<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<()> {
    let table = table::to_table(dataset);
    if table.is_empty() {
        return Err(Error::EmptyData(
            "cannot tabularize an empty dataset for saving".to_string(),
        ));
    }

    let file = File::create(path.as_ref()).map_err(Error::Io)?;
    let mut wtr = Writer::from_writer(file);

    for row in &table {
        wtr.write_record(row).map_err(Error::Csv)?;
    }

    wtr.flush().map_err(Error::Io)?;
    debug!(rows = table.len() - 1, "records written to CSV");
    Ok(())
}
