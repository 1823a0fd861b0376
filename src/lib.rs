//! tabfuse: a minimal ETL utility for tabular records.
//!
//! Ingests records from heterogeneous sources (JSON array-of-objects,
//! CSV-with-header), normalizes column names, concatenates record sets and
//! serializes the merged result to CSV. Everything revolves around one
//! in-memory abstraction, [`Dataset`], with four operations: load, rename
//! columns, concatenate, save.
//!
//! ```no_run
//! use std::collections::HashMap;
//! use tabfuse::{etl, Dataset};
//!
//! let a = etl::load("data/raw/store_a.json", "json");
//! let mut b = etl::load("data/raw/store_b.csv", "csv");
//!
//! let mapping: HashMap<String, String> =
//!     [("Item Name".to_string(), "Product".to_string())].into();
//! b.rename_columns(&mapping);
//!
//! let merged = Dataset::concat(&a, &b);
//! etl::save(&merged, "data/processed/merged.csv");
//! ```
//!
//! The crate installs no tracing subscriber; callers that want the
//! operation trace configure one themselves.

// Dataset core
pub mod dataset;

// File format readers and writers
pub mod io;

// Lenient pipeline facade
pub mod etl;

pub mod error;

// Re-export core types
pub use dataset::{ColumnPolicy, Dataset, Record, MISSING_FIELD};
pub use error::{Error, Result};
pub use etl::{load, save};
pub use io::SourceFormat;
