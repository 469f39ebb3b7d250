//! XLSX export encoder.

use rust_xlsxwriter::{Format, Workbook};

use crate::error::ExportError;
use crate::policy::ResultTable;

/// Serialize the table as a single-sheet XLSX workbook.
///
/// Header row is bold; every data cell is written as a string so values
/// pass through untouched (no numeric or date coercion).
pub fn write_xlsx(table: &ResultTable) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Apólices")?;

    for (col, label) in ResultTable::header().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *label, &bold)?;
    }

    for (row_idx, row) in table.rows().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            worksheet.write_string(row_idx as u32 + 1, col as u16, cell)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{ExtractionRecord, FieldValues};

    #[test]
    fn test_workbook_is_a_zip_container() {
        let mut table = ResultTable::new();
        table.push(ExtractionRecord::new("a.pdf", 1, FieldValues::empty()));

        let bytes = write_xlsx(&table).unwrap();
        // XLSX is a ZIP archive: PK magic
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_empty_table_still_produces_workbook() {
        let bytes = write_xlsx(&ResultTable::new()).unwrap();
        assert!(!bytes.is_empty());
        assert_eq!(&bytes[..2], b"PK");
    }
}
