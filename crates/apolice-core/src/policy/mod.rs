//! Policy field extraction: the fixed schema, the pattern table, the
//! per-page extraction engine, and the result aggregator.

mod extractor;
mod fields;
pub mod patterns;
mod table;

pub use extractor::{FieldValues, PolicyFieldExtractor};
pub use fields::Field;
pub use table::{
    collect_records, DocumentText, ExtractionRecord, PageText, ResultTable, METADATA_COLUMNS,
    RECORD_TIMESTAMP_FORMAT,
};
