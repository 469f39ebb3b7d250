//! Core library for insurance-policy data extraction.
//!
//! This crate provides:
//! - PDF processing (per-page text extraction)
//! - The fixed policy field schema and its regex pattern table
//! - The field extraction engine and per-page result aggregation
//! - Export encoders (CSV, XLSX workbook, paginated PDF report)

pub mod config;
pub mod error;
pub mod export;
pub mod pdf;
pub mod policy;

pub use config::ApoliceConfig;
pub use error::{ApoliceError, Result};
pub use export::{encode_table, export_filename, ExportFormat};
pub use pdf::{PdfExtractor, PdfProcessor};
pub use policy::{
    collect_records, DocumentText, ExtractionRecord, Field, FieldValues, PageText,
    PolicyFieldExtractor, ResultTable,
};
