//! Export encoders for the result table.
//!
//! Three independent, stateless transformations of a finished
//! [`ResultTable`](crate::policy::ResultTable): CSV, XLSX workbook, and
//! a paginated PDF report. Encoders never reorder, filter, or coerce
//! values; every cell goes out as the string held in the table.

mod csv;
mod report;
mod xlsx;

pub use csv::write_csv;
pub use report::write_report;
pub use xlsx::write_xlsx;

use chrono::{DateTime, Local};

use crate::config::ApoliceConfig;
use crate::error::ExportError;
use crate::policy::ResultTable;

/// Fixed stem of every exported file.
pub const EXPORT_FILE_STEM: &str = "dados_apolices";

/// Timestamp format embedded in export filenames.
pub const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Supported export formats, mutually exclusive per export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values, UTF-8.
    Csv,
    /// Single-sheet XLSX workbook.
    Xlsx,
    /// Paginated PDF report.
    Pdf,
}

impl ExportFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Filename for an export generated at the given moment:
/// `dados_apolices_<YYYYMMDD_HHMMSS>.<ext>`.
pub fn export_filename(format: ExportFormat, at: DateTime<Local>) -> String {
    format!(
        "{}_{}.{}",
        EXPORT_FILE_STEM,
        at.format(FILENAME_TIMESTAMP_FORMAT),
        format.extension()
    )
}

/// Encode the table in the requested format.
pub fn encode_table(
    table: &ResultTable,
    format: ExportFormat,
    config: &ApoliceConfig,
) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Csv => write_csv(table),
        ExportFormat::Xlsx => write_xlsx(table),
        ExportFormat::Pdf => write_report(table, &config.export.report_title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_export_filename_pattern() {
        let at = Local.with_ymd_and_hms(2024, 3, 15, 9, 5, 42).unwrap();
        assert_eq!(
            export_filename(ExportFormat::Csv, at),
            "dados_apolices_20240315_090542.csv"
        );
        assert_eq!(
            export_filename(ExportFormat::Xlsx, at),
            "dados_apolices_20240315_090542.xlsx"
        );
        assert_eq!(
            export_filename(ExportFormat::Pdf, at),
            "dados_apolices_20240315_090542.pdf"
        );
    }
}
