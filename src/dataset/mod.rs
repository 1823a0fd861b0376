// Dataset implementation module
pub mod base;
pub mod join;
pub mod table;
pub mod transform;

// Re-exports for convenience
pub use base::{ColumnPolicy, Dataset, Record};
pub use table::MISSING_FIELD;
