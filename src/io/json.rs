use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::dataset::{Dataset, Record};
use crate::error::{Error, Result};

/// Read a Dataset from a JSON file.
///
/// The file must hold a JSON array of objects; each element becomes one
/// record and values keep their native JSON types, unlike CSV where every
/// value is a string. Any other document shape is a format error.
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let file = File::open(path.as_ref()).map_err(Error::Io)?;
    let reader = BufReader::new(file);

    let json_value: Value = serde_json::from_reader(reader).map_err(Error::Json)?;

    let array = match json_value {
        Value::Array(array) => array,
        _ => {
            return Err(Error::Format(
                "JSON source must be an array of objects".to_string(),
            ))
        }
    };

    let mut records: Vec<Record> = Vec::with_capacity(array.len());
    for item in array {
        match item {
            Value::Object(map) => records.push(map),
            _ => {
                return Err(Error::Format(
                    "each element of the JSON array must be an object".to_string(),
                ))
            }
        }
    }

    debug!(rows = records.len(), "records read from JSON");
    Ok(Dataset::from_records(records))
}
