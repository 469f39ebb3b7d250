//! Error types for the apolice-core library.

use thiserror::Error;

/// Main error type for the apolice library.
#[derive(Error, Debug)]
pub enum ApoliceError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Export encoding error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to export encoding.
#[derive(Error, Debug)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    /// XLSX workbook generation failed.
    #[error("spreadsheet encoding failed: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    /// PDF report generation failed.
    #[error("report encoding failed: {0}")]
    Report(#[from] lopdf::Error),

    /// I/O error while writing the encoded output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the apolice library.
pub type Result<T> = std::result::Result<T, ApoliceError>;
